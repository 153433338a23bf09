#![cfg(not(target_arch = "wasm32"))]

use sndbx_wasm::shader::{
    hex_to_rgb, rgb_to_hex, uniform_assignments, ChromaticUniforms, DitheringUniforms,
    ShaderEffect, ShaderUniforms, UniformValue,
};

#[test]
fn effect_names_round_trip() {
    for effect in ShaderEffect::ALL {
        assert_eq!(ShaderEffect::from_name(effect.name()), Some(effect));
    }
    assert_eq!(ShaderEffect::from_name("glitch"), None);
    assert_eq!(ShaderEffect::from_name("Pixelation"), None);
}

#[test]
fn every_effect_has_a_program_pair() {
    for effect in ShaderEffect::ALL {
        assert!(effect.vertex_source().contains("a_position"));
        assert!(effect.fragment_source().contains("gl_FragColor"));
        // Every fragment program reads the shared bindings.
        assert!(effect.fragment_source().contains("u_image"));
        assert!(effect.fragment_source().contains("u_resolution"));
    }
}

#[test]
fn dithering_assignment_order_is_fixed() {
    let uniforms = ShaderUniforms::Dithering(DitheringUniforms {
        threshold: 1.0,
        scale: 2.0,
        dither_type: 1,
        color_mode: 0,
    });
    let assignments = uniform_assignments(&uniforms, (640.0, 480.0), 0.0);
    let expected: Vec<(&str, UniformValue)> = vec![
        ("u_resolution", UniformValue::Vec2(640.0, 480.0)),
        ("u_image", UniformValue::Int(0)),
        ("u_threshold", UniformValue::Float(1.0)),
        ("u_scale", UniformValue::Float(2.0)),
        ("u_ditherType", UniformValue::Int(1)),
        ("u_colorMode", UniformValue::Int(0)),
    ];
    assert_eq!(assignments, expected);
}

#[test]
fn shared_bindings_always_come_first() {
    for effect in ShaderEffect::ALL {
        let uniforms = ShaderUniforms::defaults(effect);
        let assignments = uniform_assignments(&uniforms, (100.0, 100.0), 1.5);
        assert_eq!(assignments[0].0, "u_resolution");
        assert_eq!(assignments[1].0, "u_image");
        assert_eq!(assignments[1].1, UniformValue::Int(0));
    }
}

#[test]
fn assignment_lists_are_idempotent() {
    for effect in ShaderEffect::ALL {
        let uniforms = ShaderUniforms::defaults(effect);
        assert_eq!(
            uniform_assignments(&uniforms, (800.0, 600.0), 2.5),
            uniform_assignments(&uniforms, (800.0, 600.0), 2.5),
        );
    }
}

#[test]
fn pixelation_schema_is_complete() {
    let uniforms = ShaderUniforms::defaults(ShaderEffect::Pixelation);
    let names: Vec<&str> = uniform_assignments(&uniforms, (1.0, 1.0), 0.0)
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    assert_eq!(
        names,
        [
            "u_resolution",
            "u_image",
            "u_pixelSize",
            "u_colorDepth",
            "u_smoothing",
            "u_binaryMode",
            "u_blackThreshold",
            "u_whiteThreshold",
            "u_fillColor",
            "u_dualColorMode",
            "u_color1",
            "u_color2",
            "u_luminanceThreshold",
        ]
    );
}

#[test]
fn grid_schema_is_complete() {
    let uniforms = ShaderUniforms::defaults(ShaderEffect::Grid);
    let names: Vec<&str> = uniform_assignments(&uniforms, (1.0, 1.0), 0.0)
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    assert_eq!(
        names,
        [
            "u_resolution",
            "u_image",
            "u_cellSize",
            "u_xSpread",
            "u_ySpread",
            "u_rotation",
            "u_xOffset",
            "u_yOffset",
            "u_shapeType",
            "u_dualColorMode",
            "u_color1",
            "u_color2",
            "u_luminanceThreshold",
        ]
    );
}

#[test]
fn chromatic_injects_time_last() {
    let uniforms = ShaderUniforms::Chromatic(ChromaticUniforms {
        noise_amount: 0.2,
        ..Default::default()
    });
    let assignments = uniform_assignments(&uniforms, (32.0, 32.0), 42.25);
    let last = assignments.last().unwrap();
    assert_eq!(*last, ("u_time", UniformValue::Float(42.25)));
    // Time is the only input that varies between frames; everything else in
    // the list is a pure function of the parameter set.
    let again = uniform_assignments(&uniforms, (32.0, 32.0), 43.0);
    assert_eq!(&assignments[..assignments.len() - 1], &again[..again.len() - 1]);
}

#[test]
fn only_chromatic_noise_animates() {
    for effect in ShaderEffect::ALL {
        assert!(!ShaderUniforms::defaults(effect).is_animated());
    }
    let noisy = ShaderUniforms::Chromatic(ChromaticUniforms {
        noise_amount: 0.1,
        ..Default::default()
    });
    assert!(noisy.is_animated());
}

#[test]
fn malformed_hex_is_rejected_not_defaulted() {
    assert_eq!(hex_to_rgb("#12345"), None);
    assert_eq!(hex_to_rgb("not-a-color"), None);
    assert_eq!(hex_to_rgb("#ABCDEF"), Some(hex_to_rgb("#abcdef").unwrap()));
}

#[test]
fn hex_round_trip() {
    assert_eq!(rgb_to_hex([0.0, 0.0, 0.0]), "#000000");
    assert_eq!(rgb_to_hex([1.0, 1.0, 1.0]), "#ffffff");
    assert_eq!(rgb_to_hex(hex_to_rgb("#f20e9b").unwrap()), "#f20e9b");
}
