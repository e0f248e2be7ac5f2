//! The `OutputWriter` trait implemented by backend writers.

use crate::{BoidSnapshotRow, OutputResult, TickSummaryRow};

/// A sink for flock snapshots and per-snapshot summaries.
///
/// Errors surface through [`SimOutputObserver::take_error`] when driven by
/// the observer.
///
/// [`SimOutputObserver::take_error`]: crate::SimOutputObserver::take_error
pub trait OutputWriter {
    /// Write a batch of boid snapshot rows.
    fn write_snapshots(&mut self, rows: &[BoidSnapshotRow]) -> OutputResult<()>;

    /// Write one summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
