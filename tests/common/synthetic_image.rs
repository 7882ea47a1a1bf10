use edge_filter::{ImageRgb8, Rgb};

/// Fill a `width × height` image with a single color.
pub fn solid_rgb(width: usize, height: usize, px: Rgb) -> ImageRgb8 {
    let mut img = ImageRgb8::new(width, height);
    for y in 0..height {
        for x in 0..width {
            img.set(x, y, px);
        }
    }
    img
}

/// Black image with one pixel set.
pub fn single_pixel(width: usize, height: usize, x: usize, y: usize, px: Rgb) -> ImageRgb8 {
    assert!(x < width && y < height, "pixel outside image");
    let mut img = ImageRgb8::new(width, height);
    img.set(x, y, px);
    img
}

/// Deterministic pseudo-texture useful for determinism checks.
pub fn textured_rgb(width: usize, height: usize) -> ImageRgb8 {
    let mut img = ImageRgb8::new(width, height);
    for y in 0..height {
        for x in 0..width {
            img.set(
                x,
                y,
                Rgb {
                    r: ((x * 31 + y * 7) % 256) as u8,
                    g: ((x * 13 + y * 101) % 256) as u8,
                    b: ((x * 5 + y * 59 + 17) % 256) as u8,
                },
            );
        }
    }
    img
}
