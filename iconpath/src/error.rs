use thiserror::Error;

/// Path data that could not be parsed.
///
/// `command_index` counts command letters in the source string, starting at 0,
/// so the offending command can be found without re-parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed path data at command {command_index}: {kind}")]
pub struct MalformedPathError {
    pub command_index: usize,
    pub kind: PathErrorKind,
}

impl MalformedPathError {
    pub(crate) fn new(command_index: usize, kind: PathErrorKind) -> Self {
        Self {
            command_index,
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathErrorKind {
    #[error("unknown command '{0}'")]
    UnknownCommand(char),
    #[error("'{command}' takes arguments in groups of {expected}, found {found}")]
    WrongArity {
        command: char,
        expected: usize,
        found: usize,
    },
    #[error("path data must start with a command, found '{0}'")]
    MissingCommand(char),
    #[error("arc flag must be 0 or 1, found '{0}'")]
    InvalidArcFlag(char),
    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),
}
