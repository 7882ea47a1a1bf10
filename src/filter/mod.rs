//! Parallel Laplacian convolution: kernel math, row scheduling, workers.
//!
//! This module provides the building blocks of the edge filter:
//!
//! - The fixed 3×3 Laplacian kernel and the per-pixel convolution with
//!   toroidal (wrap-around) neighbor sampling and saturating output.
//! - A row scheduler that partitions an image's scanlines into contiguous,
//!   near-equal ranges for a fixed pool of worker threads.
//! - The per-image coordinator that runs the workers over disjoint output
//!   row chunks and measures the elapsed compute time.
//!
//! Design goals
//! - Output is deterministic: every output pixel depends only on the
//!   unmutated input buffer, never on other output pixels or thread order.
//! - Workers write through disjoint `&mut` row chunks, so the pixel data
//!   needs no locking.

pub mod apply;
pub mod kernel;
pub mod schedule;

/// Per-image parallel filtering with wall-clock timing of the compute phase.
pub use apply::{apply_laplacian, FilterOutcome};
/// The 3×3 Laplacian kernel and per-pixel/per-row convolution routines.
pub use kernel::{convolve_pixel, filter_rows, Kernel3, LAPLACIAN};
/// Contiguous row-range partitioning for the worker pool.
pub use schedule::{partition_rows, RowRange};
