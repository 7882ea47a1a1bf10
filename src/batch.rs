//! Batch driver: one concurrent job per input image.
//!
//! Each job decodes its input, runs the parallel filter, encodes the result
//! and records the compute time into the shared [`ElapsedTotal`]. All job
//! threads are spawned before any is joined, so the images' worker pools
//! genuinely run side by side. Output naming is positional: the i-th input
//! (1-indexed by argument order) produces `laplacian<i>.<ext>` next to it,
//! independent of which job finishes first.
use log::debug;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use crate::config::FilterOptions;
use crate::filter::apply_laplacian;
use crate::image::{load_rgb_image, save_rgb_image};
use crate::timing::{BatchReport, ElapsedTotal};

/// Derive the output path for the `index`-th input (1-indexed).
///
/// The file lands in the input's directory as `laplacian<index>.<ext>`,
/// keeping the input's extension (`ppm` when it has none).
pub fn output_path(index: usize, input: &Path) -> PathBuf {
    let ext = input.extension().and_then(|e| e.to_str()).unwrap_or("ppm");
    let name = format!("laplacian{index}.{ext}");
    match input.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(name),
        _ => PathBuf::from(name),
    }
}

fn run_job(
    input: &Path,
    output: &Path,
    options: &FilterOptions,
    total: &ElapsedTotal,
) -> Result<Duration, String> {
    let image = load_rgb_image(input)?;
    let outcome = apply_laplacian(&image, options);
    save_rgb_image(&outcome.image, output)?;
    total.add(outcome.elapsed);
    debug!(
        "{} -> {} ({:.3} ms compute)",
        input.display(),
        output.display(),
        outcome.elapsed.as_secs_f64() * 1e3
    );
    Ok(outcome.elapsed)
}

/// Filter every input concurrently and return the per-job timings in input
/// order.
///
/// The first failing job aborts the whole batch with its error; jobs for
/// the other inputs still run to completion before the error is returned.
pub fn run_batch(
    inputs: &[PathBuf],
    options: &FilterOptions,
    total: &ElapsedTotal,
) -> Result<BatchReport, String> {
    if inputs.is_empty() {
        return Err("No input images given".to_string());
    }

    let results: Vec<Result<Duration, String>> = thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .iter()
            .enumerate()
            .map(|(i, input)| {
                let output = output_path(i + 1, input);
                scope.spawn(move || run_job(input, &output, options, total))
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| {
                handle
                    .join()
                    .unwrap_or_else(|_| Err("Image job panicked".to_string()))
            })
            .collect()
    });

    let mut report = BatchReport::with_total(total.total());
    for (input, result) in inputs.iter().zip(results) {
        let elapsed = result?;
        report.push(input.display().to_string(), elapsed);
    }
    Ok(report)
}
