//! Runtime options for the filter and their JSON loader.
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Number of worker threads each image job uses by default.
pub const DEFAULT_THREAD_COUNT: usize = 4;

/// Options controlling the parallel filter.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FilterOptions {
    /// Worker threads per image (>= 1). The scheduler tolerates any
    /// positive value, including values above the image height.
    pub thread_count: usize,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            thread_count: DEFAULT_THREAD_COUNT,
        }
    }
}

impl FilterOptions {
    pub fn with_thread_count(mut self, thread_count: usize) -> Self {
        self.thread_count = thread_count;
        self
    }
}

/// Load options from a JSON file, e.g. `{"thread_count": 8}`.
pub fn load_options(path: &Path) -> Result<FilterOptions, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
