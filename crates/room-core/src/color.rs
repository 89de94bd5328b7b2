use glam::Vec4;

#[inline]
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// `0xRRGGBB` as linear-light RGBA with alpha 1.
pub fn hex_to_linear(hex: u32) -> Vec4 {
    let channel = |shift: u32| srgb_to_linear(((hex >> shift) & 0xFF) as f32 / 255.0);
    Vec4::new(channel(16), channel(8), channel(0), 1.0)
}
