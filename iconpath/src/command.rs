//! The commands of the SVG path mini-language.
//!
//! See <https://www.w3.org/TR/SVG11/paths.html#PathDataBNF>

use std::fmt::{self, Display, Write};

use kurbo::{Point, Vec2};

/// One drawing command, without its absolute/relative flavour.
///
/// For a relative [`Segment`] every point is an offset from the current point.
/// Arc rotation is in degrees, as written in path data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    MoveTo(Point),
    LineTo(Point),
    HorizontalTo(f64),
    VerticalTo(f64),
    CurveTo(Point, Point, Point),
    SmoothCurveTo(Point, Point),
    QuadTo(Point, Point),
    SmoothQuadTo(Point),
    ArcTo {
        radii: Vec2,
        x_rotation: f64,
        large_arc: bool,
        sweep: bool,
        to: Point,
    },
    ClosePath,
}

impl Command {
    /// The upper case (absolute) command letter.
    pub fn letter(&self) -> char {
        match self {
            Command::MoveTo(..) => 'M',
            Command::LineTo(..) => 'L',
            Command::HorizontalTo(..) => 'H',
            Command::VerticalTo(..) => 'V',
            Command::CurveTo(..) => 'C',
            Command::SmoothCurveTo(..) => 'S',
            Command::QuadTo(..) => 'Q',
            Command::SmoothQuadTo(..) => 'T',
            Command::ArcTo { .. } => 'A',
            Command::ClosePath => 'Z',
        }
    }

    /// Rewrite every x coordinate with `fx` and every y coordinate with `fy`.
    ///
    /// Arc radii and rotation are lengths, not coordinates, and are left alone.
    pub(crate) fn map_coords(self, fx: impl Fn(f64) -> f64, fy: impl Fn(f64) -> f64) -> Command {
        let pt = |p: Point| Point::new(fx(p.x), fy(p.y));
        match self {
            Command::MoveTo(p) => Command::MoveTo(pt(p)),
            Command::LineTo(p) => Command::LineTo(pt(p)),
            Command::HorizontalTo(x) => Command::HorizontalTo(fx(x)),
            Command::VerticalTo(y) => Command::VerticalTo(fy(y)),
            Command::CurveTo(c0, c1, p) => Command::CurveTo(pt(c0), pt(c1), pt(p)),
            Command::SmoothCurveTo(c1, p) => Command::SmoothCurveTo(pt(c1), pt(p)),
            Command::QuadTo(c0, p) => Command::QuadTo(pt(c0), pt(p)),
            Command::SmoothQuadTo(p) => Command::SmoothQuadTo(pt(p)),
            Command::ArcTo {
                radii,
                x_rotation,
                large_arc,
                sweep,
                to,
            } => Command::ArcTo {
                radii,
                x_rotation,
                large_arc,
                sweep,
                to: pt(to),
            },
            Command::ClosePath => Command::ClosePath,
        }
    }

    fn push_params(&self, params: &mut Vec<f64>) {
        let flag = |b: bool| if b { 1.0 } else { 0.0 };
        match *self {
            Command::MoveTo(p)
            | Command::LineTo(p)
            | Command::SmoothQuadTo(p) => params.extend([p.x, p.y]),
            Command::HorizontalTo(x) => params.push(x),
            Command::VerticalTo(y) => params.push(y),
            Command::CurveTo(c0, c1, p) => params.extend([c0.x, c0.y, c1.x, c1.y, p.x, p.y]),
            Command::SmoothCurveTo(c, p) | Command::QuadTo(c, p) => {
                params.extend([c.x, c.y, p.x, p.y])
            }
            Command::ArcTo {
                radii,
                x_rotation,
                large_arc,
                sweep,
                to,
            } => params.extend([
                radii.x,
                radii.y,
                x_rotation,
                flag(large_arc),
                flag(sweep),
                to.x,
                to.y,
            ]),
            Command::ClosePath => (),
        }
    }
}

/// A command plus whether its coordinates are relative to the current point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub command: Command,
    pub relative: bool,
}

impl Segment {
    pub fn absolute(command: Command) -> Segment {
        Segment {
            command,
            relative: false,
        }
    }

    pub fn relative(command: Command) -> Segment {
        Segment {
            command,
            relative: true,
        }
    }

    /// The command letter as it appears in path data, lower case if relative.
    pub fn letter(&self) -> char {
        let letter = self.command.letter();
        if self.relative {
            letter.to_ascii_lowercase()
        } else {
            letter
        }
    }
}

impl Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(self.letter())?;
        let mut params = Vec::with_capacity(7);
        self.command.push_params(&mut params);
        for (i, value) in params.into_iter().enumerate() {
            if i > 0 {
                f.write_char(',')?;
            }
            write_number(f, value)?;
        }
        Ok(())
    }
}

/// Shortest form of a number: `850`, `0.5`, and never `-0`.
fn write_number(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value == 0.0 {
        return f.write_char('0');
    }
    write!(f, "{value}")
}

/// Tracks the current point while walking a path.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Cursor {
    pub(crate) current: Point,
    subpath_start: Point,
}

impl Cursor {
    /// The absolute form of `segment` measured from the current point.
    pub(crate) fn resolve(&self, segment: &Segment) -> Command {
        if !segment.relative {
            return segment.command;
        }
        let origin = self.current;
        segment
            .command
            .map_coords(|x| x + origin.x, |y| y + origin.y)
    }

    /// Moves past `command`, which must be in absolute form.
    pub(crate) fn advance(&mut self, command: &Command) {
        match *command {
            Command::MoveTo(p) => {
                self.current = p;
                self.subpath_start = p;
            }
            Command::LineTo(p)
            | Command::SmoothQuadTo(p)
            | Command::CurveTo(_, _, p)
            | Command::SmoothCurveTo(_, p)
            | Command::QuadTo(_, p)
            | Command::ArcTo { to: p, .. } => self.current = p,
            Command::HorizontalTo(x) => self.current.x = x,
            Command::VerticalTo(y) => self.current.y = y,
            Command::ClosePath => self.current = self.subpath_start,
        }
    }
}
