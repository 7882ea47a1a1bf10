//! The Laplacian kernel and the per-pixel convolution.
//!
//! Boundary handling is toroidal: an out-of-range neighbor coordinate wraps
//! to the opposite edge via modulo arithmetic, so edge pixels sample from
//! the far side of the image rather than clamping or zero-padding.
//!
//! Channels accumulate independently in `i32`; coefficients are in [-8, 8]
//! and channel values in [0, 255] over 9 terms, so the sums are nowhere
//! near overflow. The result is clamped to [0, 255] per channel.
use crate::image::{ImageRgb8, Rgb};

use super::schedule::RowRange;

/// A 3×3 convolution kernel of signed integer coefficients.
pub type Kernel3 = [[i32; 3]; 3];

/// The fixed Laplacian edge-detection kernel.
pub const LAPLACIAN: Kernel3 = [[-1, -1, -1], [-1, 8, -1], [-1, -1, -1]];

#[inline]
fn clamp_channel(sum: i32) -> u8 {
    sum.clamp(0, 255) as u8
}

/// Convolve the kernel over the 3×3 neighborhood of `(x, y)` with
/// wrap-around sampling and return the saturated output pixel.
pub fn convolve_pixel(input: &ImageRgb8, kernel: &Kernel3, x: usize, y: usize) -> Rgb {
    let w = input.width();
    let h = input.height();

    let mut red = 0i32;
    let mut green = 0i32;
    let mut blue = 0i32;

    for (ky, coeffs) in kernel.iter().enumerate() {
        // `y + h - 1` cannot underflow: h >= 1 by construction.
        let sy = (y + h - 1 + ky) % h;
        let row = input.row(sy);
        for (kx, &coeff) in coeffs.iter().enumerate() {
            let sx = (x + w - 1 + kx) % w;
            let i = sx * 3;
            red += i32::from(row[i]) * coeff;
            green += i32::from(row[i + 1]) * coeff;
            blue += i32::from(row[i + 2]) * coeff;
        }
    }

    Rgb {
        r: clamp_channel(red),
        g: clamp_channel(green),
        b: clamp_channel(blue),
    }
}

/// Filter every pixel of `range` into `out_rows`, the caller's exclusive
/// chunk of the output buffer (`range.row_count * width * 3` bytes, starting
/// at row `range.start_row`).
///
/// This is the body of one worker thread. An empty range is a no-op.
pub fn filter_rows(input: &ImageRgb8, kernel: &Kernel3, range: RowRange, out_rows: &mut [u8]) {
    let w = input.width();
    debug_assert_eq!(out_rows.len(), range.row_count * w * 3);

    for dy in 0..range.row_count {
        let y = range.start_row + dy;
        let out_row = &mut out_rows[dy * w * 3..(dy + 1) * w * 3];
        for x in 0..w {
            let px = convolve_pixel(input, kernel, x, y);
            let i = x * 3;
            out_row[i] = px.r;
            out_row[i + 1] = px.g;
            out_row[i + 2] = px.b;
        }
    }
}
