//! An immutable path value and the operations on it.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use kurbo::{Affine, Ellipse, Point, Vec2};

use crate::{
    command::{Command, Cursor, Segment},
    error::MalformedPathError,
    parse::parse_path,
};

/// Radii closer than this are treated as a circle, which has no meaningful rotation.
const CIRCLE_EPSILON: f64 = 1e-10;

/// One step of a path rewrite.
///
/// Operations do not commute: `[Translate, Scale]` and `[Scale, Translate]`
/// produce different paths and are applied exactly in the order given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathOp {
    Translate(Vec2),
    Scale(Vec2),
    ToAbsolute,
    /// Round to this many decimal places
    Round(u32),
}

/// A sequence of path segments, as written in SVG path data.
///
/// Every operation returns a new path; the receiver is never modified.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IconPath {
    segments: Vec<Segment>,
}

impl IconPath {
    pub fn new(segments: Vec<Segment>) -> IconPath {
        IconPath { segments }
    }

    pub fn parse(data: &str) -> Result<IconPath, MalformedPathError> {
        parse_path(data).map(IconPath::new)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn apply(&self, op: PathOp) -> IconPath {
        match op {
            PathOp::Translate(offset) => self.translate(offset.x, offset.y),
            PathOp::Scale(factor) => self.scale(factor.x, factor.y),
            PathOp::ToAbsolute => self.to_absolute(),
            PathOp::Round(precision) => self.round(precision),
        }
    }

    /// Apply `ops` left to right.
    pub fn apply_all<'a>(&self, ops: impl IntoIterator<Item = &'a PathOp>) -> IconPath {
        ops.into_iter()
            .fold(self.clone(), |path, op| path.apply(*op))
    }

    /// Whether the segment at `index` is measured from the origin.
    ///
    /// True for absolute segments and for a relative move-to that opens the path.
    fn is_anchored(&self, index: usize) -> bool {
        let segment = &self.segments[index];
        !segment.relative || (index == 0 && matches!(segment.command, Command::MoveTo(_)))
    }

    /// Shift every absolute coordinate by `(dx, dy)`.
    ///
    /// Relative segments are offsets and do not move.
    pub fn translate(&self, dx: f64, dy: f64) -> IconPath {
        let segments = self
            .segments
            .iter()
            .enumerate()
            .map(|(i, segment)| {
                if !self.is_anchored(i) {
                    return *segment;
                }
                Segment {
                    command: segment.command.map_coords(|x| x + dx, |y| y + dy),
                    relative: segment.relative,
                }
            })
            .collect();
        IconPath::new(segments)
    }

    /// Multiply every coordinate and length by `(sx, sy)`.
    ///
    /// Arcs get new radii and rotation from the scaled ellipse, and flip their
    /// sweep when the scale mirrors the path.
    pub fn scale(&self, sx: f64, sy: f64) -> IconPath {
        let mirrored = sx * sy < 0.0;
        let segments = self
            .segments
            .iter()
            .map(|segment| {
                let command = match segment.command.map_coords(|x| x * sx, |y| y * sy) {
                    Command::ArcTo {
                        radii,
                        x_rotation,
                        large_arc,
                        sweep,
                        to,
                    } => {
                        let (radii, x_rotation) = scale_arc(radii, x_rotation, sx, sy);
                        Command::ArcTo {
                            radii,
                            x_rotation,
                            large_arc,
                            sweep: sweep ^ mirrored,
                            to,
                        }
                    }
                    other => other,
                };
                Segment {
                    command,
                    relative: segment.relative,
                }
            })
            .collect();
        IconPath::new(segments)
    }

    /// Rewrite every relative segment as its absolute equivalent.
    ///
    /// `H`/`V` and the smooth curve forms keep their command type.
    pub fn to_absolute(&self) -> IconPath {
        let mut cursor = Cursor::default();
        let segments = self
            .segments
            .iter()
            .map(|segment| {
                let command = cursor.resolve(segment);
                cursor.advance(&command);
                Segment::absolute(command)
            })
            .collect();
        IconPath::new(segments)
    }

    /// Round every number to `precision` decimal places.
    ///
    /// Relative offsets are measured from the already rounded current point, so
    /// rounding error never accumulates along a subpath.
    pub fn round(&self, precision: u32) -> IconPath {
        let factor = 10f64.powi(precision as i32);
        let round = |v: f64| {
            let r = (v * factor).round() / factor;
            // no negative zero
            if r == 0.0 {
                0.0
            } else {
                r
            }
        };

        let mut exact = Cursor::default();
        let mut rounded = Cursor::default();
        let segments = self
            .segments
            .iter()
            .map(|segment| {
                let target = exact.resolve(segment);
                exact.advance(&target);

                let origin = if segment.relative {
                    rounded.current
                } else {
                    Point::ZERO
                };
                let command = round_lengths(
                    target.map_coords(|x| round(x - origin.x), |y| round(y - origin.y)),
                    round,
                );
                let rounded_segment = Segment {
                    command,
                    relative: segment.relative,
                };
                let landed = rounded.resolve(&rounded_segment);
                rounded.advance(&landed);
                rounded_segment
            })
            .collect();
        IconPath::new(segments)
    }

    /// Compact path data, e.g. `M0,850L1000,850L500,0Z`.
    pub fn to_svg(&self) -> String {
        self.to_string()
    }
}

fn round_lengths(command: Command, round: impl Fn(f64) -> f64) -> Command {
    match command {
        Command::ArcTo {
            radii,
            x_rotation,
            large_arc,
            sweep,
            to,
        } => Command::ArcTo {
            radii: Vec2::new(round(radii.x), round(radii.y)),
            x_rotation: round(x_rotation),
            large_arc,
            sweep,
            to,
        },
        other => other,
    }
}

/// Radii and rotation (degrees) of an arc's ellipse after an axis aligned scale.
fn scale_arc(radii: Vec2, x_rotation: f64, sx: f64, sy: f64) -> (Vec2, f64) {
    let quarter_turns = x_rotation / 90.0;
    if radii.x == 0.0 || radii.y == 0.0 || quarter_turns.fract() == 0.0 {
        // axes stay on the coordinate axes; an odd quarter turn swaps which factor applies
        let (fx, fy) = if quarter_turns.rem_euclid(2.0) == 0.0 {
            (sx.abs(), sy.abs())
        } else {
            (sy.abs(), sx.abs())
        };
        return (Vec2::new(radii.x.abs() * fx, radii.y.abs() * fy), x_rotation);
    }

    let ellipse = Affine::scale_non_uniform(sx, sy)
        * Ellipse::new(Point::ZERO, radii, x_rotation.to_radians());
    let new_radii = ellipse.radii();
    if (new_radii.x - new_radii.y).abs() < CIRCLE_EPSILON * new_radii.x.max(new_radii.y) {
        return (new_radii, 0.0);
    }
    (new_radii, ellipse.rotation().to_degrees().rem_euclid(180.0))
}

impl FromStr for IconPath {
    type Err = MalformedPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IconPath::parse(s)
    }
}

impl Display for IconPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            segment.fmt(f)?;
        }
        Ok(())
    }
}

impl FromIterator<Segment> for IconPath {
    fn from_iter<T: IntoIterator<Item = Segment>>(iter: T) -> Self {
        IconPath::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn path(data: &str) -> IconPath {
        data.parse().unwrap()
    }

    #[test]
    fn round_trips_compact_form() {
        assert_eq!("M0,0L1000,0L500,850Z", path("M0 0 L 1000 0 L500,850 Z").to_svg());
    }

    #[rstest]
    #[case::absolute("M1,2L3,4H5V6", "M11,-8L13,-6H15V-4")]
    #[case::relative_left_alone("M1,2l3,4h5v6z", "M11,-8l3,4h5v6z")]
    #[case::leading_relative_move("m1,2l3,4", "m11,-8l3,4")]
    #[case::later_relative_move("M1,2zm1,1", "M11,-8zm1,1")]
    #[case::curves("C1,1,2,2,3,3S4,4,5,5Q6,6,7,7T8,8", "C11,-9,12,-8,13,-7S14,-6,15,-5Q16,-4,17,-3T18,-2")]
    #[case::arc_endpoint_only("A5,5,0,0,1,10,10", "A5,5,0,0,1,20,0")]
    fn translate(#[case] data: &str, #[case] expected: &str) {
        assert_eq!(expected, path(data).translate(10.0, -10.0).to_svg());
    }

    #[rstest]
    #[case::absolute("M1,2L3,4H5V6", "M2,-6L6,-12H10V-18")]
    #[case::relative("m1,2l3,4h5v6", "m2,-6l6,-12h10v-18")]
    #[case::control_points("C1,1,2,2,3,3", "C2,-3,4,-6,6,-9")]
    fn scale(#[case] data: &str, #[case] expected: &str) {
        assert_eq!(expected, path(data).scale(2.0, -3.0).to_svg());
    }

    #[test]
    fn mirror_flips_arc_sweep() {
        assert_eq!(
            "M0,0A5,5,0,0,0,10,0",
            path("M0,0A5,5,0,0,1,10,0").scale(1.0, -1.0).to_svg()
        );
        assert_eq!(
            "M0,0A5,5,0,1,1,-10,0",
            path("M0,0A5,5,0,1,0,10,0").scale(-1.0, 1.0).to_svg()
        );
        // mirroring twice is a rotation, the sweep survives
        assert_eq!(
            "M0,0A5,5,0,0,1,-10,0",
            path("M0,0A5,5,0,0,1,10,0").scale(-1.0, -1.0).to_svg()
        );
    }

    #[test]
    fn nonuniform_scale_stretches_arc_radii() {
        assert_eq!(
            "A4,15,0,0,1,20,-30",
            path("A2,5,0,0,0,10,10").scale(2.0, -3.0).to_svg()
        );
        // a quarter turn puts the x radius on the y axis
        assert_eq!(
            "A15,4,90,0,1,20,-30",
            path("A5,2,90,0,0,10,10").scale(2.0, -3.0).to_svg()
        );
    }

    #[test]
    fn mirrored_rotated_ellipse() {
        let scaled = path("A10,5,30,0,0,10,10").scale(1.0, -1.0);
        let Command::ArcTo {
            radii,
            x_rotation,
            sweep,
            ..
        } = scaled.segments()[0].command
        else {
            panic!("expected an arc, got {scaled:?}");
        };
        assert!(sweep);
        // a reflection keeps the radii, the major axis now leans the other way
        assert!((radii.x.max(radii.y) - 10.0).abs() < 1e-9, "{radii:?}");
        assert!((radii.x.min(radii.y) - 5.0).abs() < 1e-9, "{radii:?}");
        let major_axis_angle = if radii.x > radii.y {
            x_rotation
        } else {
            x_rotation + 90.0
        };
        assert!(
            (major_axis_angle.rem_euclid(180.0) - 150.0).abs() < 1e-9,
            "{x_rotation}"
        );
    }

    #[test]
    fn uniform_scale_of_circle_has_no_rotation() {
        let scaled = path("A5,5,45,0,0,10,10").scale(2.0, 2.0);
        assert_eq!("A10,10,0,0,0,20,20", scaled.round(6).to_svg());
    }

    #[test]
    fn to_absolute_tracks_current_point() {
        assert_eq!(
            "M10,10L15,10H20V30C21,31,22,32,23,33S24,34,25,35Q26,36,27,37T28,38A1,1,0,0,1,29,39Z",
            path("m10,10l5,0h5v20c1,1 2,2 3,3s1,1 2,2q1,1 2,2t1,1a1,1,0,0,1,1,1z")
                .to_absolute()
                .to_svg()
        );
    }

    #[test]
    fn to_absolute_restarts_at_subpath_start() {
        assert_eq!(
            "M10,10L20,10L20,20ZM15,15L16,16Z",
            path("M10,10l10,0l0,10zm5,5l1,1z").to_absolute().to_svg()
        );
    }

    #[test]
    fn to_absolute_leaves_absolute_alone() {
        let data = "M1,1L2,2C3,3,4,4,5,5Z";
        assert_eq!(data, path(data).to_absolute().to_svg());
    }

    #[rstest]
    #[case::one_place("M1.26,-0.04L2.449,3.95", 1, "M1.3,0L2.4,4")]
    #[case::zero_places("M1.5,2.4", 0, "M2,2")]
    #[case::arc_params("A1.04,2.06,29.97,1,0,3.33,4.44", 1, "A1,2.1,30,1,0,3.3,4.4")]
    fn round(#[case] data: &str, #[case] precision: u32, #[case] expected: &str) {
        assert_eq!(expected, path(data).round(precision).to_svg());
    }

    #[test]
    fn relative_rounding_does_not_drift() {
        // the steps land on 0.04, 0.08 and 0.12; rounding each offset on its own
        // would leave every step at 0
        let rounded = path("M0,0l0.04,0l0.04,0l0.04,0").round(1);
        assert_eq!("M0,0l0,0l0.1,0l0,0", rounded.to_svg());
        assert_eq!("M0,0L0,0L0.1,0L0.1,0", rounded.to_absolute().to_svg());
    }

    #[test]
    fn rounding_keeps_relative_subpath_closed() {
        let rounded = path("m0.04,0.04l3.33,0l-1.66,2.88l-1.67,-2.88z").round(1);
        let absolute = rounded.to_absolute();
        let Command::MoveTo(start) = absolute.segments()[0].command else {
            panic!("must start with a move");
        };
        let Command::LineTo(end) = absolute.segments()[3].command else {
            panic!("expected a line");
        };
        assert_eq!(start, end);
    }

    #[test]
    fn order_matters() {
        let glyph = path("M0,0L1000,0L500,850Z");
        let translate_then_scale = glyph.translate(0.0, -850.0).scale(1.0, -1.0);
        let scale_then_translate = glyph.scale(1.0, -1.0).translate(0.0, -850.0);
        assert_ne!(translate_then_scale, scale_then_translate);
    }

    #[test]
    fn apply_all_runs_in_order() {
        let ops = [
            PathOp::Translate(Vec2::new(0.0, -850.0)),
            PathOp::Scale(Vec2::new(1.0, -1.0)),
            PathOp::ToAbsolute,
            PathOp::Round(1),
        ];
        assert_eq!(
            "M0,850L1000,850L500,0Z",
            path("M0,0L1000,0L500,850Z").apply_all(&ops).to_svg()
        );
        assert_eq!(
            "M0,-850L1000,-850L500,-1700Z",
            path("M0,0L1000,0L500,850Z")
                .apply_all(&[ops[1], ops[0]])
                .to_svg()
        );
    }

    #[test]
    fn operations_do_not_mutate() {
        let original = path("m1,1l2,2");
        let _ = original.translate(5.0, 5.0).scale(2.0, 2.0).to_absolute();
        assert_eq!("m1,1l2,2", original.to_svg());
    }
}
