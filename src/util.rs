pub type Rgb = rgb::RGB<f32>;

/// Componentwise product of two colors, e.g. surface color filtering light intensity.
pub fn component_mul(a: Rgb, b: Rgb) -> Rgb {
    Rgb::new(a.r * b.r, a.g * b.g, a.b * b.b)
}

/// Maps a 0-1 f32 rgb pixel to pixel type compatible with module image.
pub fn color_to_image(color: Rgb) -> image::Rgb<u8> {
    image::Rgb([
        (color.r * 255.0).round().clamp(0.0, 255.0) as u8,
        (color.g * 255.0).round().clamp(0.0, 255.0) as u8,
        (color.b * 255.0).round().clamp(0.0, 255.0) as u8,
    ])
}
