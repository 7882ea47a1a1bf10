//! Per-image coordination: run the worker pool and time the compute phase.
use log::debug;
use std::mem;
use std::thread;
use std::time::{Duration, Instant};

use crate::config::FilterOptions;
use crate::image::ImageRgb8;

use super::kernel::{filter_rows, LAPLACIAN};
use super::schedule::partition_rows;

/// A finished per-image job: the filtered image and the wall-clock time of
/// the parallel compute phase (worker start through last join, no file I/O).
#[derive(Debug)]
pub struct FilterOutcome {
    pub image: ImageRgb8,
    pub elapsed: Duration,
}

/// Apply the Laplacian filter to `input` using `options.thread_count`
/// worker threads over disjoint row ranges.
///
/// The input is shared read-only by every worker; the output buffer is
/// split into per-range `&mut` chunks before the workers start, so the
/// pixel data itself needs no synchronization. The result is identical for
/// any positive thread count.
pub fn apply_laplacian(input: &ImageRgb8, options: &FilterOptions) -> FilterOutcome {
    let width = input.width();
    let height = input.height();
    let row_bytes = width * 3;

    let ranges = partition_rows(height, options.thread_count);
    let mut output = ImageRgb8::new(width, height);

    let started = Instant::now();
    thread::scope(|scope| {
        let mut rest: &mut [u8] = output.as_raw_mut();
        for range in &ranges {
            let (chunk, tail) = mem::take(&mut rest).split_at_mut(range.row_count * row_bytes);
            rest = tail;
            scope.spawn(move || filter_rows(input, &LAPLACIAN, *range, chunk));
        }
        // scope exit joins every worker
    });
    let elapsed = started.elapsed();

    debug!(
        "filtered {width}x{height} with {} threads in {:.3} ms",
        options.thread_count,
        elapsed.as_secs_f64() * 1e3
    );

    FilterOutcome {
        image: output,
        elapsed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::kernel::convolve_pixel;
    use crate::image::Rgb;

    fn gradient_image(width: usize, height: usize) -> ImageRgb8 {
        let mut img = ImageRgb8::new(width, height);
        for y in 0..height {
            for x in 0..width {
                img.set(
                    x,
                    y,
                    Rgb {
                        r: (x * 19 % 256) as u8,
                        g: (y * 37 % 256) as u8,
                        b: ((x + y) * 11 % 256) as u8,
                    },
                );
            }
        }
        img
    }

    #[test]
    fn output_matches_sequential_reference() {
        let img = gradient_image(17, 9);
        let parallel = apply_laplacian(&img, &FilterOptions::default().with_thread_count(4));

        let mut expected = ImageRgb8::new(17, 9);
        for y in 0..9 {
            for x in 0..17 {
                expected.set(x, y, convolve_pixel(&img, &LAPLACIAN, x, y));
            }
        }
        assert_eq!(parallel.image, expected);
    }

    #[test]
    fn thread_count_does_not_change_output() {
        let img = gradient_image(23, 14);
        let reference = apply_laplacian(&img, &FilterOptions::default().with_thread_count(1));
        for threads in [2, 4, 15] {
            let out = apply_laplacian(&img, &FilterOptions::default().with_thread_count(threads));
            assert_eq!(
                out.image, reference.image,
                "output diverged with {threads} threads"
            );
        }
    }

    #[test]
    fn repeated_runs_are_deterministic() {
        let img = gradient_image(31, 7);
        let options = FilterOptions::default();
        let first = apply_laplacian(&img, &options);
        for _ in 0..3 {
            assert_eq!(apply_laplacian(&img, &options).image, first.image);
        }
    }

    #[test]
    fn single_row_image_filters_cleanly() {
        // height < thread_count: most workers receive empty ranges
        let img = gradient_image(8, 1);
        let out = apply_laplacian(&img, &FilterOptions::default().with_thread_count(4));
        assert_eq!(out.image.height(), 1);
        assert_eq!(out.image.width(), 8);
    }
}
