//! Hex color helpers for the effect color inputs.

/// Parse a `#rrggbb` string (leading `#` optional) into normalized RGB.
///
/// Malformed input returns `None` so the caller keeps whatever value it had;
/// free-form text fields must never crash or clobber a valid color.
pub fn hex_to_rgb(hex: &str) -> Option<[f32; 3]> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some([
        f32::from(channel(0)?) / 255.0,
        f32::from(channel(2)?) / 255.0,
        f32::from(channel(4)?) / 255.0,
    ])
}

/// Format normalized RGB as `#rrggbb`. Out-of-range channels are clamped.
pub fn rgb_to_hex(rgb: [f32; 3]) -> String {
    let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!("#{:02x}{:02x}{:02x}", byte(rgb[0]), byte(rgb[1]), byte(rgb[2]))
}
