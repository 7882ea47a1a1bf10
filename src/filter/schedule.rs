//! Row-range partitioning for the worker pool.

/// One worker's exclusive, contiguous slice of output rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowRange {
    /// First row of the slice.
    pub start_row: usize,
    /// Number of rows in the slice; may be zero when the image has fewer
    /// rows than there are workers.
    pub row_count: usize,
}

impl RowRange {
    /// One past the last row of the slice.
    pub fn end(&self) -> usize {
        self.start_row + self.row_count
    }

    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }
}

/// Split `[0, height)` into `thread_count` contiguous ranges.
///
/// Every worker but the last receives `height / thread_count` rows; the last
/// absorbs the truncation remainder and may be larger. The ranges are
/// pairwise disjoint and cover the image exactly.
pub fn partition_rows(height: usize, thread_count: usize) -> Vec<RowRange> {
    assert!(thread_count > 0, "thread count must be positive");

    let base = height / thread_count;
    let mut ranges = Vec::with_capacity(thread_count);
    for i in 0..thread_count {
        let start_row = i * base;
        let row_count = if i == thread_count - 1 {
            height - start_row
        } else {
            base
        };
        ranges.push(RowRange {
            start_row,
            row_count,
        });
    }
    ranges
}
