//! Path command model, corner rounding and SVG `d` serialization.

use std::fmt::Write as _;

/// 2D point in user-space coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Point at `distance` from `self` along the direction of `toward`.
    /// Callers guarantee the two points are distinct.
    fn step_toward(self, toward: Point, distance: f64) -> Point {
        let len = self.distance(toward);
        Point::new(
            self.x + (toward.x - self.x) / len * distance,
            self.y + (toward.y - self.y) / len * distance,
        )
    }
}

/// One drawing operation in a closed outline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    QuadTo { control: Point, end: Point },
    Close,
}

/// A polygon vertex tagged with the corner radius to apply at it.
#[derive(Clone, Copy, Debug)]
pub struct CornerVertex {
    pub point: Point,
    pub corner_radius: f64,
}

/// Serialize commands into an SVG path `d` string.
///
/// Coordinates are formatted to 2 decimal places, space separated, so the
/// output drops straight into a `<path d="...">` attribute.
pub fn to_path_string(commands: &[PathCommand]) -> String {
    let mut out = String::new();
    for command in commands {
        if !out.is_empty() {
            out.push(' ');
        }
        match command {
            PathCommand::MoveTo(p) => {
                let _ = write!(out, "M {:.2} {:.2}", p.x, p.y);
            }
            PathCommand::LineTo(p) => {
                let _ = write!(out, "L {:.2} {:.2}", p.x, p.y);
            }
            PathCommand::QuadTo { control, end } => {
                let _ = write!(
                    out,
                    "Q {:.2} {:.2} {:.2} {:.2}",
                    control.x, control.y, end.x, end.y
                );
            }
            PathCommand::Close => out.push('Z'),
        }
    }
    out
}

/// Emit a closed outline through `vertices`, rounding each corner with a
/// quadratic curve whose control point is the original vertex.
///
/// The effective radius at a vertex is clamped to half the distance to either
/// neighbour, so adjacent cut points never cross an edge midpoint. A vertex
/// whose clamped radius is zero falls back to a plain line, which makes the
/// all-radii-zero case degrade to `M` + `L`* + `Z` with no special casing.
pub fn rounded_outline(vertices: &[CornerVertex]) -> Vec<PathCommand> {
    let n = vertices.len();
    let mut commands = Vec::with_capacity(2 * n + 1);
    for i in 0..n {
        let prev = vertices[(i + n - 1) % n].point;
        let curr = vertices[i];
        let next = vertices[(i + 1) % n].point;

        let radius = curr
            .corner_radius
            .min(curr.point.distance(prev) / 2.0)
            .min(curr.point.distance(next) / 2.0);

        if radius > 0.0 {
            // Cut into both edges, then curve through the original corner.
            let p1 = curr.point.step_toward(prev, radius);
            let p2 = curr.point.step_toward(next, radius);
            commands.push(if i == 0 {
                PathCommand::MoveTo(p1)
            } else {
                PathCommand::LineTo(p1)
            });
            commands.push(PathCommand::QuadTo {
                control: curr.point,
                end: p2,
            });
        } else {
            commands.push(if i == 0 {
                PathCommand::MoveTo(curr.point)
            } else {
                PathCommand::LineTo(curr.point)
            });
        }
    }
    if n > 0 {
        commands.push(PathCommand::Close);
    }
    commands
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_all_command_kinds() {
        let commands = [
            PathCommand::MoveTo(Point::new(10.0, 10.0)),
            PathCommand::LineTo(Point::new(20.5, 10.0)),
            PathCommand::QuadTo {
                control: Point::new(25.0, 15.125),
                end: Point::new(20.0, 20.0),
            },
            PathCommand::Close,
        ];
        assert_eq!(
            to_path_string(&commands),
            "M 10.00 10.00 L 20.50 10.00 Q 25.00 15.12 20.00 20.00 Z"
        );
    }

    #[test]
    fn oversized_radius_cuts_at_edge_midpoints() {
        // 10x10 square with an absurd radius: cuts clamp to half the edge.
        let square = [
            CornerVertex {
                point: Point::new(0.0, 0.0),
                corner_radius: 100.0,
            },
            CornerVertex {
                point: Point::new(10.0, 0.0),
                corner_radius: 100.0,
            },
            CornerVertex {
                point: Point::new(10.0, 10.0),
                corner_radius: 100.0,
            },
            CornerVertex {
                point: Point::new(0.0, 10.0),
                corner_radius: 100.0,
            },
        ];
        let commands = rounded_outline(&square);
        assert_eq!(
            commands[0],
            PathCommand::MoveTo(Point::new(0.0, 5.0)),
            "first cut point should sit at the midpoint toward the previous vertex"
        );
        assert_eq!(
            commands[1],
            PathCommand::QuadTo {
                control: Point::new(0.0, 0.0),
                end: Point::new(5.0, 0.0),
            }
        );
    }

    #[test]
    fn zero_radius_degrades_to_straight_lines() {
        let triangle = [
            CornerVertex {
                point: Point::new(0.0, 0.0),
                corner_radius: 0.0,
            },
            CornerVertex {
                point: Point::new(10.0, 0.0),
                corner_radius: 0.0,
            },
            CornerVertex {
                point: Point::new(5.0, 8.0),
                corner_radius: 0.0,
            },
        ];
        let commands = rounded_outline(&triangle);
        assert_eq!(commands.len(), 4);
        assert!(matches!(commands[0], PathCommand::MoveTo(_)));
        assert!(matches!(commands[1], PathCommand::LineTo(_)));
        assert!(matches!(commands[2], PathCommand::LineTo(_)));
        assert_eq!(commands[3], PathCommand::Close);
    }

    #[test]
    fn coincident_vertices_do_not_divide_by_zero() {
        let degenerate = [
            CornerVertex {
                point: Point::new(3.0, 3.0),
                corner_radius: 5.0,
            },
            CornerVertex {
                point: Point::new(3.0, 3.0),
                corner_radius: 5.0,
            },
            CornerVertex {
                point: Point::new(8.0, 3.0),
                corner_radius: 5.0,
            },
        ];
        for command in rounded_outline(&degenerate) {
            match command {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => {
                    assert!(p.x.is_finite() && p.y.is_finite());
                }
                PathCommand::QuadTo { control, end } => {
                    assert!(control.x.is_finite() && end.x.is_finite());
                }
                PathCommand::Close => {}
            }
        }
    }
}
