//! Parsing of path data strings

use kurbo::{Point, Vec2};
use log::trace;

use crate::{
    command::{Command, Segment},
    error::{MalformedPathError, PathErrorKind},
};

/// Number of arguments one instance of the command consumes.
fn arity(letter: char) -> Option<usize> {
    match letter.to_ascii_uppercase() {
        'M' | 'L' | 'T' => Some(2),
        'H' | 'V' => Some(1),
        'C' => Some(6),
        'S' | 'Q' => Some(4),
        'A' => Some(7),
        'Z' => Some(0),
        _ => None,
    }
}

fn is_separator(b: u8) -> bool {
    b.is_ascii_whitespace() || b == b','
}

struct Lexer<'a> {
    data: &'a str,
    ix: usize,
}

impl<'a> Lexer<'a> {
    fn new(data: &'a str) -> Self {
        Lexer { data, ix: 0 }
    }

    fn skip_separators(&mut self) {
        let data = self.data;
        let bytes = data.as_bytes();
        while self.ix < bytes.len() && is_separator(bytes[self.ix]) {
            self.ix += 1;
        }
    }

    fn peek(&self) -> Option<char> {
        self.data[self.ix..].chars().next()
    }

    fn bump(&mut self, c: char) {
        self.ix += c.len_utf8();
    }

    fn digits_from(&self, mut ix: usize) -> usize {
        let bytes = self.data.as_bytes();
        while ix < bytes.len() && bytes[ix].is_ascii_digit() {
            ix += 1;
        }
        ix
    }

    /// A number per the path grammar; a sign or a second '.' ends the previous one,
    /// so "1-2" and ".5.5" are two numbers each.
    fn number(&mut self) -> Option<f64> {
        let data = self.data;
        let bytes = data.as_bytes();
        let start = self.ix;
        let mut ix = start;
        if matches!(bytes.get(ix), Some(b'+' | b'-')) {
            ix += 1;
        }
        let int_end = self.digits_from(ix);
        let mut has_digits = int_end > ix;
        ix = int_end;
        if bytes.get(ix) == Some(&b'.') {
            let frac_end = self.digits_from(ix + 1);
            has_digits |= frac_end > ix + 1;
            ix = frac_end;
        }
        if !has_digits {
            return None;
        }
        if matches!(bytes.get(ix), Some(b'e' | b'E')) {
            let mut exp_ix = ix + 1;
            if matches!(bytes.get(exp_ix), Some(b'+' | b'-')) {
                exp_ix += 1;
            }
            let exp_end = self.digits_from(exp_ix);
            if exp_end > exp_ix {
                ix = exp_end;
            }
        }
        let value = data[start..ix].parse().ok()?;
        self.ix = ix;
        Some(value)
    }

    /// Arc flags are a single digit and need no separator, "011" is two flags and a 1.
    fn flag(&mut self) -> Result<bool, char> {
        match self.peek() {
            Some('0') => {
                self.ix += 1;
                Ok(false)
            }
            Some('1') => {
                self.ix += 1;
                Ok(true)
            }
            Some(other) => Err(other),
            None => Err(' '),
        }
    }
}

/// Gathers the arguments following a command letter, up to the next letter.
fn read_args(
    lexer: &mut Lexer,
    letter: char,
    command_index: usize,
) -> Result<Vec<f64>, MalformedPathError> {
    let is_arc = letter.eq_ignore_ascii_case(&'A');
    let mut args = Vec::new();
    loop {
        lexer.skip_separators();
        let Some(next) = lexer.peek() else {
            break;
        };
        if next.is_ascii_alphabetic() {
            break;
        }
        if is_arc && matches!(args.len() % 7, 3 | 4) {
            let flag = lexer.flag().map_err(|c| {
                MalformedPathError::new(command_index, PathErrorKind::InvalidArcFlag(c))
            })?;
            args.push(if flag { 1.0 } else { 0.0 });
            continue;
        }
        match lexer.number() {
            Some(value) => args.push(value),
            None => {
                return Err(MalformedPathError::new(
                    command_index,
                    PathErrorKind::UnexpectedChar(next),
                ))
            }
        }
    }
    Ok(args)
}

fn pt(args: &[f64], at: usize) -> Point {
    Point::new(args[at], args[at + 1])
}

/// Build one command from exactly one group of arguments.
///
/// `repeat` is true for the second and later groups after a single letter; those
/// are implicit line-tos when the letter was a move-to.
fn build_command(letter: char, args: &[f64], repeat: bool) -> Command {
    match letter.to_ascii_uppercase() {
        'M' if repeat => Command::LineTo(pt(args, 0)),
        'M' => Command::MoveTo(pt(args, 0)),
        'L' => Command::LineTo(pt(args, 0)),
        'H' => Command::HorizontalTo(args[0]),
        'V' => Command::VerticalTo(args[0]),
        'C' => Command::CurveTo(pt(args, 0), pt(args, 2), pt(args, 4)),
        'S' => Command::SmoothCurveTo(pt(args, 0), pt(args, 2)),
        'Q' => Command::QuadTo(pt(args, 0), pt(args, 2)),
        'T' => Command::SmoothQuadTo(pt(args, 0)),
        'A' => Command::ArcTo {
            radii: Vec2::new(args[0], args[1]),
            x_rotation: args[2],
            large_arc: args[3] != 0.0,
            sweep: args[4] != 0.0,
            to: pt(args, 5),
        },
        _ => Command::ClosePath,
    }
}

pub(crate) fn parse_path(data: &str) -> Result<Vec<Segment>, MalformedPathError> {
    let mut lexer = Lexer::new(data);
    let mut segments = Vec::new();
    let mut command_index = 0;

    lexer.skip_separators();
    while let Some(letter) = lexer.peek() {
        if !letter.is_ascii_alphabetic() {
            return Err(MalformedPathError::new(
                command_index,
                PathErrorKind::MissingCommand(letter),
            ));
        }
        let arity = arity(letter).ok_or_else(|| {
            MalformedPathError::new(command_index, PathErrorKind::UnknownCommand(letter))
        })?;
        lexer.bump(letter);
        let args = read_args(&mut lexer, letter, command_index)?;

        let relative = letter.is_ascii_lowercase();
        if arity == 0 {
            if !args.is_empty() {
                return Err(MalformedPathError::new(
                    command_index,
                    PathErrorKind::WrongArity {
                        command: letter,
                        expected: 0,
                        found: args.len(),
                    },
                ));
            }
            segments.push(Segment {
                command: Command::ClosePath,
                relative,
            });
        } else {
            if args.is_empty() || args.len() % arity != 0 {
                return Err(MalformedPathError::new(
                    command_index,
                    PathErrorKind::WrongArity {
                        command: letter,
                        expected: arity,
                        found: args.len(),
                    },
                ));
            }
            for (i, group) in args.chunks_exact(arity).enumerate() {
                segments.push(Segment {
                    command: build_command(letter, group, i > 0),
                    relative,
                });
            }
        }
        command_index += 1;
    }
    trace!(
        "Parsed {} commands into {} segments",
        command_index,
        segments.len()
    );
    Ok(segments)
}
