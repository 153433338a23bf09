//! Parametric splash/star outline generator.
//!
//! A splash is a closed outline alternating far ("outer") and near ("inner")
//! vertices around a center. Angles and radii are jittered with a seeded PRNG
//! so the whole shape is a pure function of `(center, config)`: the same
//! inputs always serialize to the same path string, which makes shapes
//! reproducible and shareable by seed.

mod path;
mod prng;

pub use path::{rounded_outline, to_path_string, CornerVertex, PathCommand, Point};
pub use prng::Mulberry32;

use std::f64::consts::PI;

/// Parameters for one generated splash shape.
///
/// `num_points` below 3 produces degenerate (possibly self-intersecting)
/// geometry rather than an error; constraining the range is the caller's job.
/// `color` is carried through to the SVG export untouched and never enters
/// the path math.
#[derive(Clone, Debug)]
pub struct SplashConfig {
    pub num_points: u32,
    pub outer_radius: f64,
    pub inner_radius: f64,
    /// Radius jitter amount, 0..=1.
    pub radius_variance: f64,
    /// Angle jitter amount, 0..=1.
    pub angle_variance: f64,
    pub seed: u32,
    /// Straight-line mode connects the interleaved outer/inner vertices with
    /// lines (optionally corner-rounded); curved mode draws one quadratic
    /// curve per point with the inner vertex as control point.
    pub use_straight_lines: bool,
    pub inner_corner_radius: f64,
    pub outer_corner_radius: f64,
    pub color: String,
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            num_points: 8,
            outer_radius: 150.0,
            inner_radius: 70.0,
            radius_variance: 0.3,
            angle_variance: 0.4,
            seed: 12345,
            use_straight_lines: false,
            inner_corner_radius: 0.0,
            outer_corner_radius: 0.0,
            color: "#6321FF".to_string(),
        }
    }
}

/// Generate the command sequence for `config` centred at `center`.
///
/// The PRNG draw order per point index is part of the contract: outer angle,
/// inner angle, outer radius, inner radius. Reordering the draws (or
/// reassociating the jitter arithmetic) changes every shape for a given seed.
pub fn splash_commands(center: Point, config: &SplashConfig) -> Vec<PathCommand> {
    let n = config.num_points as usize;
    if n == 0 {
        return Vec::new();
    }

    let mut rng = Mulberry32::new(config.seed);
    let mut outer = Vec::with_capacity(n);
    let mut inner = Vec::with_capacity(n);
    for i in 0..n {
        let base_angle = 2.0 * PI * i as f64 / n as f64;
        let mid_angle = 2.0 * PI * (i as f64 + 0.5) / n as f64;

        let outer_angle =
            base_angle + (rng.next_f64() - 0.5) * config.angle_variance * (PI / n as f64);
        let inner_angle =
            mid_angle + (rng.next_f64() - 0.5) * config.angle_variance * (PI / n as f64);
        let outer_r =
            config.outer_radius * (1.0 + (rng.next_f64() - 0.5) * config.radius_variance);
        let inner_r =
            config.inner_radius * (1.0 + (rng.next_f64() - 0.5) * config.radius_variance);

        outer.push(Point::new(
            center.x + outer_r * outer_angle.cos(),
            center.y + outer_r * outer_angle.sin(),
        ));
        inner.push(Point::new(
            center.x + inner_r * inner_angle.cos(),
            center.y + inner_r * inner_angle.sin(),
        ));
    }

    if config.use_straight_lines {
        let mut vertices = Vec::with_capacity(2 * n);
        for i in 0..n {
            vertices.push(CornerVertex {
                point: outer[i],
                corner_radius: config.outer_corner_radius,
            });
            vertices.push(CornerVertex {
                point: inner[i],
                corner_radius: config.inner_corner_radius,
            });
        }
        rounded_outline(&vertices)
    } else {
        // Curved mode: the inner vertex is always the control point and the
        // next outer vertex the endpoint. Corner radii are ignored here, as
        // in the original generator (legacy behavior, kept on purpose).
        let mut commands = Vec::with_capacity(n + 2);
        commands.push(PathCommand::MoveTo(outer[0]));
        for i in 0..n {
            commands.push(PathCommand::QuadTo {
                control: inner[i],
                end: outer[(i + 1) % n],
            });
        }
        commands.push(PathCommand::Close);
        commands
    }
}

/// Generate the serialized path string for `config` centred at `center`.
pub fn splash_path(center: Point, config: &SplashConfig) -> String {
    to_path_string(&splash_commands(center, config))
}

/// Standalone SVG document embedding the generated path at a fixed canvas
/// size with a single solid fill.
pub fn splash_svg(center: Point, config: &SplashConfig, box_size: f64) -> String {
    let d = splash_path(center, config);
    format!(
        concat!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{size}\" height=\"{size}\" ",
            "viewBox=\"0 0 {size} {size}\">\n",
            "  <path d=\"{d}\" fill=\"{fill}\" />\n",
            "</svg>\n"
        ),
        size = box_size,
        d = d,
        fill = config.color,
    )
}
