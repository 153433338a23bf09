//! WebGL2 render pipeline for the shader playground.
//!
//! One `Renderer` exclusively owns the program/texture pair for the current
//! image + effect session. Replacing the image or effect means dropping the
//! renderer (which cancels any pending animation frame and releases the GL
//! resources) and constructing a new one, so a draw call can never observe a
//! half-initialized program.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, HtmlCanvasElement, HtmlImageElement, WebGl2RenderingContext as GL, WebGlProgram,
    WebGlShader, WebGlTexture,
};

use crate::shader::{uniform_assignments, ShaderEffect, ShaderError, ShaderUniforms, UniformValue};

impl From<ShaderError> for JsValue {
    fn from(err: ShaderError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}

pub struct Renderer {
    gl: GL,
    canvas: HtmlCanvasElement,
    program: WebGlProgram,
    texture: WebGlTexture,
    /// Pending animation-frame id for the chromatic noise loop.
    frame_handle: Cell<Option<i32>>,
    /// The animation-frame closure stores itself here so it can reschedule
    /// from within its own invocation.
    raf_closure: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl Renderer {
    /// Build the full pipeline: context, compiled program for `effect`,
    /// uploaded texture and fullscreen-quad buffers. The canvas is resized to
    /// the image's natural dimensions so output matches the source 1:1.
    pub fn new(
        canvas: &HtmlCanvasElement,
        image: &HtmlImageElement,
        effect: ShaderEffect,
    ) -> Result<Self, ShaderError> {
        canvas.set_width(image.natural_width());
        canvas.set_height(image.natural_height());

        let gl: GL = canvas
            .get_context("webgl2")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into().ok())
            .ok_or(ShaderError::ContextUnavailable)?;

        let vertex = compile_shader(&gl, GL::VERTEX_SHADER, "vertex", effect.vertex_source())?;
        let fragment =
            compile_shader(&gl, GL::FRAGMENT_SHADER, "fragment", effect.fragment_source())?;
        let program = link_program(&gl, &vertex, &fragment)?;
        // Shaders are owned by the linked program from here on.
        gl.delete_shader(Some(&vertex));
        gl.delete_shader(Some(&fragment));

        let texture = upload_texture(&gl, image)?;
        setup_quad_buffers(&gl, &program)?;

        Ok(Self {
            gl,
            canvas: canvas.clone(),
            program,
            texture,
            frame_handle: Cell::new(None),
            raf_closure: RefCell::new(None),
        })
    }

    /// Draw one frame with `uniforms`. Any previously scheduled noise loop is
    /// cancelled first; if the uniforms call for animated noise, a new loop
    /// is scheduled for subsequent frames.
    pub fn render(self: &Rc<Self>, uniforms: &ShaderUniforms) {
        self.cancel_animation();
        self.draw(uniforms);
        if uniforms.is_animated() {
            self.spawn_noise_loop(uniforms.clone());
        }
    }

    fn draw(&self, uniforms: &ShaderUniforms) {
        let gl = &self.gl;
        let width = self.canvas.width();
        let height = self.canvas.height();

        gl.viewport(0, 0, width as i32, height as i32);
        gl.clear_color(0.0, 0.0, 0.0, 0.0);
        gl.clear(GL::COLOR_BUFFER_BIT);
        // The fragment programs produce final alpha themselves.
        gl.disable(GL::BLEND);

        gl.use_program(Some(&self.program));
        gl.active_texture(GL::TEXTURE0);
        gl.bind_texture(GL::TEXTURE_2D, Some(&self.texture));

        let assignments =
            uniform_assignments(uniforms, (width as f32, height as f32), now_seconds());
        for (name, value) in assignments {
            let location = gl.get_uniform_location(&self.program, name);
            match value {
                UniformValue::Float(v) => gl.uniform1f(location.as_ref(), v),
                UniformValue::Int(v) => gl.uniform1i(location.as_ref(), v),
                UniformValue::Bool(v) => gl.uniform1i(location.as_ref(), v as i32),
                UniformValue::Vec2(x, y) => gl.uniform2f(location.as_ref(), x, y),
                UniformValue::Vec3([r, g, b]) => gl.uniform3f(location.as_ref(), r, g, b),
            }
        }

        gl.draw_arrays(GL::TRIANGLE_STRIP, 0, 4);
    }

    // The closure only carries a weak handle back to the renderer; dropping
    // the renderer cancels its pending frame, so the loop cannot outlive the
    // session it renders.
    fn spawn_noise_loop(self: &Rc<Self>, uniforms: ShaderUniforms) {
        let weak: Weak<Renderer> = Rc::downgrade(self);
        *self.raf_closure.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let Some(renderer) = weak.upgrade() else {
                return;
            };
            renderer.draw(&uniforms);
            let next = renderer
                .raf_closure
                .borrow()
                .as_ref()
                .and_then(|closure| request_frame(closure).ok());
            renderer.frame_handle.set(next);
        }) as Box<dyn FnMut()>));

        let scheduled = self
            .raf_closure
            .borrow()
            .as_ref()
            .and_then(|closure| request_frame(closure).ok());
        if scheduled.is_none() {
            log::warn!("failed to schedule noise animation frame");
        }
        self.frame_handle.set(scheduled);
    }

    /// Stop the noise loop if one is running.
    pub fn cancel_animation(&self) {
        if let Some(id) = self.frame_handle.take() {
            if let Some(w) = window() {
                let _ = w.cancel_animation_frame(id);
            }
        }
    }

    /// Current canvas contents as a PNG data URL.
    pub fn png_data_url(&self) -> Result<String, JsValue> {
        self.canvas.to_data_url_with_type("image/png")
    }
}

impl Drop for Renderer {
    fn drop(&mut self) {
        self.cancel_animation();
        self.gl.delete_texture(Some(&self.texture));
        self.gl.delete_program(Some(&self.program));
    }
}

fn request_frame(closure: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    window()
        .ok_or("no window")?
        .request_animation_frame(closure.as_ref().unchecked_ref())
}

fn now_seconds() -> f32 {
    window()
        .and_then(|w| w.performance())
        .map(|p| (p.now() / 1000.0) as f32)
        .unwrap_or(0.0)
}

fn compile_shader(
    gl: &GL,
    kind: u32,
    stage: &'static str,
    source: &str,
) -> Result<WebGlShader, ShaderError> {
    let shader = gl
        .create_shader(kind)
        .ok_or(ShaderError::ResourceAllocation("shader"))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    if gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(shader)
    } else {
        let log = gl.get_shader_info_log(&shader).unwrap_or_default();
        gl.delete_shader(Some(&shader));
        Err(ShaderError::Compile { stage, log })
    }
}

fn link_program(
    gl: &GL,
    vertex: &WebGlShader,
    fragment: &WebGlShader,
) -> Result<WebGlProgram, ShaderError> {
    let program = gl
        .create_program()
        .ok_or(ShaderError::ResourceAllocation("program"))?;
    gl.attach_shader(&program, vertex);
    gl.attach_shader(&program, fragment);
    gl.link_program(&program);

    if gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(program)
    } else {
        let log = gl.get_program_info_log(&program).unwrap_or_default();
        gl.delete_program(Some(&program));
        Err(ShaderError::Link { log })
    }
}

fn upload_texture(gl: &GL, image: &HtmlImageElement) -> Result<WebGlTexture, ShaderError> {
    let texture = gl
        .create_texture()
        .ok_or(ShaderError::ResourceAllocation("texture"))?;
    gl.bind_texture(GL::TEXTURE_2D, Some(&texture));

    // NEAREST filtering prevents color bleeding at transparent edges.
    gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_WRAP_S, GL::CLAMP_TO_EDGE as i32);
    gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_WRAP_T, GL::CLAMP_TO_EDGE as i32);
    gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_MIN_FILTER, GL::NEAREST as i32);
    gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_MAG_FILTER, GL::NEAREST as i32);

    gl.tex_image_2d_with_u32_and_u32_and_html_image_element(
        GL::TEXTURE_2D,
        0,
        GL::RGBA as i32,
        GL::RGBA,
        GL::UNSIGNED_BYTE,
        image,
    )
    .map_err(|err| ShaderError::TextureUpload(format!("{err:?}")))?;

    Ok(texture)
}

fn setup_quad_buffers(gl: &GL, program: &WebGlProgram) -> Result<(), ShaderError> {
    // Position buffer (full screen quad)
    let positions: [f32; 8] = [-1.0, -1.0, 1.0, -1.0, -1.0, 1.0, 1.0, 1.0];
    let position_buffer = gl
        .create_buffer()
        .ok_or(ShaderError::ResourceAllocation("buffer"))?;
    gl.bind_buffer(GL::ARRAY_BUFFER, Some(&position_buffer));
    gl.buffer_data_with_array_buffer_view(
        GL::ARRAY_BUFFER,
        &js_sys::Float32Array::from(&positions[..]),
        GL::STATIC_DRAW,
    );
    let position_location = gl.get_attrib_location(program, "a_position") as u32;
    gl.enable_vertex_attrib_array(position_location);
    gl.vertex_attrib_pointer_with_i32(position_location, 2, GL::FLOAT, false, 0, 0);

    // Texture coordinate buffer
    let tex_coords: [f32; 8] = [0.0, 1.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0];
    let tex_coord_buffer = gl
        .create_buffer()
        .ok_or(ShaderError::ResourceAllocation("buffer"))?;
    gl.bind_buffer(GL::ARRAY_BUFFER, Some(&tex_coord_buffer));
    gl.buffer_data_with_array_buffer_view(
        GL::ARRAY_BUFFER,
        &js_sys::Float32Array::from(&tex_coords[..]),
        GL::STATIC_DRAW,
    );
    let tex_coord_location = gl.get_attrib_location(program, "a_texCoord") as u32;
    gl.enable_vertex_attrib_array(tex_coord_location);
    gl.vertex_attrib_pointer_with_i32(tex_coord_location, 2, GL::FLOAT, false, 0, 0);

    Ok(())
}
