//! Shader effect selection and uniform packing.
//!
//! This module owns the numeric/boolean contract between UI parameters and
//! the per-effect GPU programs: which program an effect runs, and the exact
//! ordered list of uniform bindings a draw call needs. It has no GPU
//! dependency itself, so the whole contract is testable on the host.

mod color;
mod programs;

pub use color::{hex_to_rgb, rgb_to_hex};
pub use programs::VERTEX_SHADER;

use thiserror::Error;

/// The four image effects. Each owns a disjoint uniform schema.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShaderEffect {
    Pixelation,
    Dithering,
    Chromatic,
    Grid,
}

impl ShaderEffect {
    pub const ALL: [ShaderEffect; 4] = [
        ShaderEffect::Pixelation,
        ShaderEffect::Dithering,
        ShaderEffect::Chromatic,
        ShaderEffect::Grid,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ShaderEffect::Pixelation => "pixelation",
            ShaderEffect::Dithering => "dithering",
            ShaderEffect::Chromatic => "chromatic",
            ShaderEffect::Grid => "grid",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|effect| effect.name() == name)
    }

    /// Fragment program paired 1:1 with this effect.
    pub fn fragment_source(self) -> &'static str {
        match self {
            ShaderEffect::Pixelation => programs::PIXELATION_FRAGMENT,
            ShaderEffect::Dithering => programs::DITHERING_FRAGMENT,
            ShaderEffect::Chromatic => programs::CHROMATIC_FRAGMENT,
            ShaderEffect::Grid => programs::GRID_FRAGMENT,
        }
    }

    /// All effects share the fullscreen-quad vertex program.
    pub fn vertex_source(self) -> &'static str {
        programs::VERTEX_SHADER
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PixelationUniforms {
    pub pixel_size: f32,
    pub color_depth: f32,
    pub smoothing: f32,
    pub binary_mode: bool,
    pub black_threshold: f32,
    pub white_threshold: f32,
    pub fill_color: [f32; 3],
    pub dual_color_mode: bool,
    pub color1: [f32; 3],
    pub color2: [f32; 3],
    pub luminance_threshold: f32,
}

impl Default for PixelationUniforms {
    fn default() -> Self {
        Self {
            pixel_size: 8.0,
            color_depth: 32.0,
            smoothing: 0.0,
            binary_mode: false,
            black_threshold: 0.0,
            white_threshold: 0.5,
            fill_color: [0.0, 0.0, 0.0],
            dual_color_mode: false,
            color1: [0.0, 0.0, 0.0],
            color2: [1.0, 1.0, 1.0],
            luminance_threshold: 0.5,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DitheringUniforms {
    pub threshold: f32,
    pub scale: f32,
    /// 0 = Bayer 4x4, 1 = Bayer 8x8, 2 = ordered noise.
    pub dither_type: i32,
    /// 0 = grayscale, 1 = 1-bit RGB, 2 = limited palette.
    pub color_mode: i32,
}

impl Default for DitheringUniforms {
    fn default() -> Self {
        Self {
            threshold: 1.0,
            scale: 1.0,
            dither_type: 0,
            color_mode: 1,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChromaticUniforms {
    pub offset_amount: f32,
    /// Split direction in degrees.
    pub angle: f32,
    pub scanlines: bool,
    pub scanline_intensity: f32,
    pub noise_amount: f32,
}

impl Default for ChromaticUniforms {
    fn default() -> Self {
        Self {
            offset_amount: 5.0,
            angle: 0.0,
            scanlines: false,
            scanline_intensity: 0.3,
            noise_amount: 0.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GridUniforms {
    pub cell_size: f32,
    pub x_spread: f32,
    pub y_spread: f32,
    /// Grid rotation in degrees.
    pub rotation: f32,
    pub x_offset: f32,
    pub y_offset: f32,
    /// 0 = circle, 1 = square.
    pub shape_type: i32,
    pub dual_color_mode: bool,
    pub color1: [f32; 3],
    pub color2: [f32; 3],
    pub luminance_threshold: f32,
}

impl Default for GridUniforms {
    fn default() -> Self {
        Self {
            cell_size: 16.0,
            x_spread: 0.2,
            y_spread: 0.2,
            rotation: 0.0,
            x_offset: 0.0,
            y_offset: 0.0,
            shape_type: 0,
            dual_color_mode: false,
            color1: [0.0, 0.0, 0.0],
            color2: [1.0, 1.0, 1.0],
            luminance_threshold: 0.5,
        }
    }
}

/// Effect-tagged uniform bag.
///
/// Pairing a parameter set with the wrong program is a construction-time type
/// error here, not a runtime surprise.
#[derive(Clone, Debug, PartialEq)]
pub enum ShaderUniforms {
    Pixelation(PixelationUniforms),
    Dithering(DitheringUniforms),
    Chromatic(ChromaticUniforms),
    Grid(GridUniforms),
}

impl ShaderUniforms {
    pub fn effect(&self) -> ShaderEffect {
        match self {
            ShaderUniforms::Pixelation(_) => ShaderEffect::Pixelation,
            ShaderUniforms::Dithering(_) => ShaderEffect::Dithering,
            ShaderUniforms::Chromatic(_) => ShaderEffect::Chromatic,
            ShaderUniforms::Grid(_) => ShaderEffect::Grid,
        }
    }

    /// Default parameter set for an effect.
    pub fn defaults(effect: ShaderEffect) -> Self {
        match effect {
            ShaderEffect::Pixelation => ShaderUniforms::Pixelation(Default::default()),
            ShaderEffect::Dithering => ShaderUniforms::Dithering(Default::default()),
            ShaderEffect::Chromatic => ShaderUniforms::Chromatic(Default::default()),
            ShaderEffect::Grid => ShaderUniforms::Grid(Default::default()),
        }
    }

    /// True when the effect re-renders itself every frame: only the chromatic
    /// effect's animated noise term.
    pub fn is_animated(&self) -> bool {
        matches!(self, ShaderUniforms::Chromatic(u) if u.noise_amount > 0.0)
    }
}

/// A value bound to one named uniform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UniformValue {
    Float(f32),
    Int(i32),
    Bool(bool),
    Vec2(f32, f32),
    Vec3([f32; 3]),
}

/// One `(name, value)` binding for a draw call.
pub type UniformAssignment = (&'static str, UniformValue);

/// Flatten `uniforms` into the ordered binding list for one draw call.
///
/// `u_resolution` (viewport size) and `u_image` (texture unit 0) always come
/// first, then the effect's own schema. `time` is wall-clock seconds and is
/// only consumed by the chromatic effect's noise term; every other binding is
/// a pure function of the inputs.
pub fn uniform_assignments(
    uniforms: &ShaderUniforms,
    viewport: (f32, f32),
    time: f32,
) -> Vec<UniformAssignment> {
    use UniformValue::{Bool, Float, Int, Vec2, Vec3};

    let mut out: Vec<UniformAssignment> = vec![
        ("u_resolution", Vec2(viewport.0, viewport.1)),
        ("u_image", Int(0)),
    ];
    match uniforms {
        ShaderUniforms::Pixelation(u) => out.extend([
            ("u_pixelSize", Float(u.pixel_size)),
            ("u_colorDepth", Float(u.color_depth)),
            ("u_smoothing", Float(u.smoothing)),
            ("u_binaryMode", Bool(u.binary_mode)),
            ("u_blackThreshold", Float(u.black_threshold)),
            ("u_whiteThreshold", Float(u.white_threshold)),
            ("u_fillColor", Vec3(u.fill_color)),
            ("u_dualColorMode", Bool(u.dual_color_mode)),
            ("u_color1", Vec3(u.color1)),
            ("u_color2", Vec3(u.color2)),
            ("u_luminanceThreshold", Float(u.luminance_threshold)),
        ]),
        ShaderUniforms::Dithering(u) => out.extend([
            ("u_threshold", Float(u.threshold)),
            ("u_scale", Float(u.scale)),
            ("u_ditherType", Int(u.dither_type)),
            ("u_colorMode", Int(u.color_mode)),
        ]),
        ShaderUniforms::Chromatic(u) => out.extend([
            ("u_offsetAmount", Float(u.offset_amount)),
            ("u_angle", Float(u.angle)),
            ("u_scanlines", Bool(u.scanlines)),
            ("u_scanlineIntensity", Float(u.scanline_intensity)),
            ("u_noiseAmount", Float(u.noise_amount)),
            ("u_time", Float(time)),
        ]),
        ShaderUniforms::Grid(u) => out.extend([
            ("u_cellSize", Float(u.cell_size)),
            ("u_xSpread", Float(u.x_spread)),
            ("u_ySpread", Float(u.y_spread)),
            ("u_rotation", Float(u.rotation)),
            ("u_xOffset", Float(u.x_offset)),
            ("u_yOffset", Float(u.y_offset)),
            ("u_shapeType", Int(u.shape_type)),
            ("u_dualColorMode", Bool(u.dual_color_mode)),
            ("u_color1", Vec3(u.color1)),
            ("u_color2", Vec3(u.color2)),
            ("u_luminanceThreshold", Float(u.luminance_threshold)),
        ]),
    }
    out
}

/// GPU pipeline failures. These are environmental, not transient: they are
/// reported with the failing stage and driver log, never retried.
#[derive(Error, Debug)]
pub enum ShaderError {
    #[error("WebGL context unavailable")]
    ContextUnavailable,

    #[error("{stage} shader failed to compile: {log}")]
    Compile { stage: &'static str, log: String },

    #[error("program failed to link: {log}")]
    Link { log: String },

    #[error("failed to allocate {0}")]
    ResourceAllocation(&'static str),

    #[error("texture upload failed: {0}")]
    TextureUpload(String),
}
