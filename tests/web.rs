#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{WebGl2RenderingContext as GL, WebGlShader};

use sndbx_wasm::shader::ShaderEffect;
use sndbx_wasm::splash::{splash_path, Point, SplashConfig};

wasm_bindgen_test_configure!(run_in_browser);

fn gl_context() -> GL {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas: web_sys::HtmlCanvasElement = document
        .create_element("canvas")
        .unwrap()
        .dyn_into()
        .unwrap();
    canvas
        .get_context("webgl2")
        .unwrap()
        .expect("WebGL2 not supported")
        .dyn_into()
        .unwrap()
}

fn compile(gl: &GL, kind: u32, source: &str) -> WebGlShader {
    let shader = gl.create_shader(kind).unwrap();
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);
    assert!(
        gl.get_shader_parameter(&shader, GL::COMPILE_STATUS)
            .as_bool()
            .unwrap_or(false),
        "compile failed: {}",
        gl.get_shader_info_log(&shader).unwrap_or_default()
    );
    shader
}

#[wasm_bindgen_test]
fn all_effect_programs_compile_and_link() {
    let gl = gl_context();
    for effect in ShaderEffect::ALL {
        let vertex = compile(&gl, GL::VERTEX_SHADER, effect.vertex_source());
        let fragment = compile(&gl, GL::FRAGMENT_SHADER, effect.fragment_source());

        let program = gl.create_program().unwrap();
        gl.attach_shader(&program, &vertex);
        gl.attach_shader(&program, &fragment);
        gl.link_program(&program);
        assert!(
            gl.get_program_parameter(&program, GL::LINK_STATUS)
                .as_bool()
                .unwrap_or(false),
            "link failed for {}: {}",
            effect.name(),
            gl.get_program_info_log(&program).unwrap_or_default()
        );

        // The shared bindings must resolve in every linked program.
        gl.use_program(Some(&program));
        assert!(gl.get_uniform_location(&program, "u_resolution").is_some());
        assert!(gl.get_uniform_location(&program, "u_image").is_some());

        gl.delete_program(Some(&program));
        gl.delete_shader(Some(&vertex));
        gl.delete_shader(Some(&fragment));
    }
}

#[wasm_bindgen_test]
fn splash_generator_is_deterministic_in_the_browser() {
    let config = SplashConfig::default();
    let center = Point::new(250.0, 250.0);
    let first = splash_path(center, &config);
    assert!(first.starts_with("M "));
    assert!(first.ends_with('Z'));
    assert_eq!(first, splash_path(center, &config));
}
