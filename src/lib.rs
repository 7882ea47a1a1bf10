#![doc = include_str!("../README.md")]

pub mod batch;
pub mod config;
pub mod filter;
pub mod image;
pub mod timing;

// --- High-level re-exports -------------------------------------------------

// Main entry points: per-image filtering + batch driver.
pub use crate::batch::{output_path, run_batch};
pub use crate::filter::{apply_laplacian, FilterOutcome};

pub use crate::config::FilterOptions;
pub use crate::image::{ImageRgb8, Rgb};
pub use crate::timing::{BatchReport, ElapsedTotal, JobTiming};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use edge_filter::prelude::*;
///
/// let img = ImageRgb8::new(16, 16);
/// let outcome = apply_laplacian(&img, &FilterOptions::default());
/// assert_eq!(outcome.image.width(), 16);
/// ```
pub mod prelude {
    pub use crate::filter::apply_laplacian;
    pub use crate::image::{ImageRgb8, Rgb};
    pub use crate::{ElapsedTotal, FilterOptions};
}
