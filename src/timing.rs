//! Shared timing state and the serializable batch report.
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use std::time::Duration;

/// Process-wide accumulator of compute time across completed jobs.
///
/// Passed by reference to whoever records timings; the mutex makes each
/// update exclusive, and addition commutes, so the final total is the exact
/// sum of all recorded durations regardless of completion order.
#[derive(Debug, Default)]
pub struct ElapsedTotal {
    total: Mutex<Duration>,
}

impl ElapsedTotal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one job's elapsed time to the total.
    pub fn add(&self, elapsed: Duration) {
        let mut guard = self.total.lock().expect("timing mutex poisoned");
        *guard += elapsed;
    }

    /// Read the accumulated total.
    pub fn total(&self) -> Duration {
        *self.total.lock().expect("timing mutex poisoned")
    }
}

/// Timing entry for a single image job.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobTiming {
    pub input: String,
    pub elapsed_ms: f64,
}

impl JobTiming {
    pub fn new(input: impl Into<String>, elapsed: Duration) -> Self {
        Self {
            input: input.into(),
            elapsed_ms: elapsed.as_secs_f64() * 1e3,
        }
    }
}

/// Aggregated timing across a whole batch, jobs in input-argument order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub total_ms: f64,
    pub jobs: Vec<JobTiming>,
}

impl BatchReport {
    pub fn with_total(total: Duration) -> Self {
        Self {
            total_ms: total.as_secs_f64() * 1e3,
            jobs: Vec::new(),
        }
    }

    pub fn push(&mut self, input: impl Into<String>, elapsed: Duration) {
        self.jobs.push(JobTiming::new(input, elapsed));
    }

    /// Total in seconds, as printed by the CLI.
    pub fn total_seconds(&self) -> f64 {
        self.total_ms / 1e3
    }
}
