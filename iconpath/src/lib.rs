//! SVG path data for icon outlines.
//!
//! Parses the path mini-language (`M L H V C S Q T A Z`, absolute or relative,
//! in any mixture) into an [`IconPath`] value and rewrites it with a small set
//! of operations: [translate](IconPath::translate), [scale](IconPath::scale),
//! [to_absolute](IconPath::to_absolute) and [round](IconPath::round). Results
//! serialize back to compact path data.

mod command;
pub mod error;
mod parse;
mod path;

pub use command::{Command, Segment};
pub use error::{MalformedPathError, PathErrorKind};
pub use path::{IconPath, PathOp};
