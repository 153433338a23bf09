//! wasm-bindgen boundary for the demo pages.
//!
//! Everything the page script can touch lives here: a parameter object for
//! the splash generator, and a playground object that owns the GL session
//! for the shader demo. Free-form inputs (effect names, parameter keys, hex
//! colors) are validated at this boundary; invalid values are ignored and the
//! previous state stays in effect.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlAnchorElement, HtmlCanvasElement, HtmlImageElement};

use super::render::Renderer;
use crate::shader::{hex_to_rgb, ShaderEffect, ShaderUniforms};
use crate::splash::{splash_path, splash_svg, Point, SplashConfig};

/// Page bootstrap: draw a default splash into the landing page, if the
/// element is present. The shader demo is driven from the page script via
/// [`EffectPlayground`].
pub fn start() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    if let Some(element) = document.get_element_by_id("splash-path") {
        let config = SplashConfig::default();
        element.set_attribute("d", &splash_path(Point::new(250.0, 250.0), &config))?;
        element.set_attribute("fill", &config.color)?;
    }

    Ok(())
}

/// Splash generator parameters, shaped for the page script.
#[wasm_bindgen]
pub struct SplashParams {
    inner: SplashConfig,
}

#[wasm_bindgen]
impl SplashParams {
    /// All parameters up front; the generator itself is a pure function, so
    /// the page rebuilds params and regenerates on every control change.
    #[wasm_bindgen(constructor)]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        num_points: u32,
        outer_radius: f64,
        inner_radius: f64,
        radius_variance: f64,
        angle_variance: f64,
        seed: u32,
        use_straight_lines: bool,
        inner_corner_radius: f64,
        outer_corner_radius: f64,
        color: String,
    ) -> SplashParams {
        SplashParams {
            inner: SplashConfig {
                num_points,
                outer_radius,
                inner_radius,
                radius_variance,
                angle_variance,
                seed,
                use_straight_lines,
                inner_corner_radius,
                outer_corner_radius,
                color,
            },
        }
    }

    pub fn defaults() -> SplashParams {
        SplashParams {
            inner: SplashConfig::default(),
        }
    }

    /// SVG path `d` string for a shape centred at `(cx, cy)`.
    pub fn path(&self, cx: f64, cy: f64) -> String {
        splash_path(Point::new(cx, cy), &self.inner)
    }

    /// Standalone SVG document embedding the shape.
    #[wasm_bindgen(js_name = svgDocument)]
    pub fn svg_document(&self, cx: f64, cy: f64, box_size: f64) -> String {
        splash_svg(Point::new(cx, cy), &self.inner, box_size)
    }
}

/// Owns the active GL session (one program, one texture) plus the current
/// effect parameters for the shader playground page.
#[wasm_bindgen]
pub struct EffectPlayground {
    canvas: HtmlCanvasElement,
    image: Option<HtmlImageElement>,
    renderer: Option<Rc<Renderer>>,
    uniforms: ShaderUniforms,
}

#[wasm_bindgen]
impl EffectPlayground {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> EffectPlayground {
        EffectPlayground {
            canvas,
            image: None,
            renderer: None,
            uniforms: ShaderUniforms::defaults(ShaderEffect::Pixelation),
        }
    }

    /// Start a session for a newly loaded image, keeping the current effect.
    #[wasm_bindgen(js_name = loadImage)]
    pub fn load_image(&mut self, image: &HtmlImageElement) -> Result<(), JsValue> {
        self.image = Some(image.clone());
        self.rebuild()
    }

    /// Switch effects, resetting parameters to that effect's defaults.
    /// Unknown names are an error so the page notices typos immediately.
    #[wasm_bindgen(js_name = setEffect)]
    pub fn set_effect(&mut self, name: &str) -> Result<(), JsValue> {
        let effect = ShaderEffect::from_name(name)
            .ok_or_else(|| JsValue::from_str(&format!("unknown effect: {name}")))?;
        if effect == self.uniforms.effect() {
            return Ok(());
        }
        self.uniforms = ShaderUniforms::defaults(effect);
        self.rebuild()
    }

    /// Update one numeric parameter and re-render. Keys not in the current
    /// effect's schema are logged and ignored.
    #[wasm_bindgen(js_name = setParam)]
    pub fn set_param(&mut self, name: &str, value: f64) {
        let v = value as f32;
        let known = match &mut self.uniforms {
            ShaderUniforms::Pixelation(u) => match name {
                "pixelSize" => set(&mut u.pixel_size, v),
                "colorDepth" => set(&mut u.color_depth, v),
                "smoothing" => set(&mut u.smoothing, v),
                "blackThreshold" => set(&mut u.black_threshold, v),
                "whiteThreshold" => set(&mut u.white_threshold, v),
                "luminanceThreshold" => set(&mut u.luminance_threshold, v),
                _ => false,
            },
            ShaderUniforms::Dithering(u) => match name {
                "threshold" => set(&mut u.threshold, v),
                "scale" => set(&mut u.scale, v),
                "ditherType" => set(&mut u.dither_type, value as i32),
                "colorMode" => set(&mut u.color_mode, value as i32),
                _ => false,
            },
            ShaderUniforms::Chromatic(u) => match name {
                "offsetAmount" => set(&mut u.offset_amount, v),
                "angle" => set(&mut u.angle, v),
                "scanlineIntensity" => set(&mut u.scanline_intensity, v),
                "noiseAmount" => set(&mut u.noise_amount, v),
                _ => false,
            },
            ShaderUniforms::Grid(u) => match name {
                "cellSize" => set(&mut u.cell_size, v),
                "xSpread" => set(&mut u.x_spread, v),
                "ySpread" => set(&mut u.y_spread, v),
                "rotation" => set(&mut u.rotation, v),
                "xOffset" => set(&mut u.x_offset, v),
                "yOffset" => set(&mut u.y_offset, v),
                "shapeType" => set(&mut u.shape_type, value as i32),
                "luminanceThreshold" => set(&mut u.luminance_threshold, v),
                _ => false,
            },
        };
        if known {
            self.render();
        } else {
            log::warn!(
                "ignoring parameter {name} for effect {}",
                self.uniforms.effect().name()
            );
        }
    }

    /// Update one boolean parameter and re-render.
    #[wasm_bindgen(js_name = setFlag)]
    pub fn set_flag(&mut self, name: &str, value: bool) {
        let known = match &mut self.uniforms {
            ShaderUniforms::Pixelation(u) => match name {
                "binaryMode" => set(&mut u.binary_mode, value),
                "dualColorMode" => set(&mut u.dual_color_mode, value),
                _ => false,
            },
            ShaderUniforms::Chromatic(u) => match name {
                "scanlines" => set(&mut u.scanlines, value),
                _ => false,
            },
            ShaderUniforms::Grid(u) => match name {
                "dualColorMode" => set(&mut u.dual_color_mode, value),
                _ => false,
            },
            ShaderUniforms::Dithering(_) => false,
        };
        if known {
            self.render();
        } else {
            log::warn!(
                "ignoring flag {name} for effect {}",
                self.uniforms.effect().name()
            );
        }
    }

    /// Update one color parameter from a hex string and re-render.
    /// Malformed hex leaves the previous color in effect.
    #[wasm_bindgen(js_name = setColor)]
    pub fn set_color(&mut self, name: &str, hex: &str) {
        let Some(rgb) = hex_to_rgb(hex) else {
            log::warn!("ignoring malformed color {hex:?} for {name}");
            return;
        };
        let known = match &mut self.uniforms {
            ShaderUniforms::Pixelation(u) => match name {
                "fillColor" => set(&mut u.fill_color, rgb),
                "color1" => set(&mut u.color1, rgb),
                "color2" => set(&mut u.color2, rgb),
                _ => false,
            },
            ShaderUniforms::Grid(u) => match name {
                "color1" => set(&mut u.color1, rgb),
                "color2" => set(&mut u.color2, rgb),
                _ => false,
            },
            _ => false,
        };
        if known {
            self.render();
        } else {
            log::warn!(
                "ignoring color {name} for effect {}",
                self.uniforms.effect().name()
            );
        }
    }

    /// Draw a frame with the current parameters.
    pub fn render(&self) {
        if let Some(renderer) = &self.renderer {
            renderer.render(&self.uniforms);
        }
    }

    /// Current canvas contents as a PNG data URL.
    #[wasm_bindgen(js_name = pngDataUrl)]
    pub fn png_data_url(&self) -> Result<String, JsValue> {
        let renderer = self.renderer.as_ref().ok_or("no image loaded")?;
        renderer.png_data_url()
    }

    /// Trigger a browser download of the rendered output.
    #[wasm_bindgen(js_name = downloadPng)]
    pub fn download_png(&self) -> Result<(), JsValue> {
        let url = self.png_data_url()?;
        let document = web_sys::window()
            .ok_or("no window")?
            .document()
            .ok_or("no document")?;
        let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
        anchor.set_href(&url);
        anchor.set_download(&format!(
            "shader-{}-{}.png",
            self.uniforms.effect().name(),
            js_sys::Date::now() as u64
        ));
        anchor.click();
        Ok(())
    }

    // The previous session is dropped before a new one is built, so stale
    // programs and textures never coexist with the fresh ones.
    fn rebuild(&mut self) -> Result<(), JsValue> {
        self.renderer = None;
        if let Some(image) = self.image.clone() {
            let renderer = Rc::new(Renderer::new(
                &self.canvas,
                &image,
                self.uniforms.effect(),
            )?);
            renderer.render(&self.uniforms);
            self.renderer = Some(renderer);
        }
        Ok(())
    }
}

fn set<T>(slot: &mut T, value: T) -> bool {
    *slot = value;
    true
}
