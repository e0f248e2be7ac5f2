//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use flock_agent::{Boid, FlockStats};
use flock_core::Tick;
use flock_sim::SimObserver;
use tracing::warn;

use crate::row::{BoidSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes boid snapshots and a summary row per
/// snapshot to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    /// Time reported by the most recent `on_tick_end`.
    last_time:  f32,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_time:  0.0,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!(error = %e, "output write failed; further errors suppressed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, _tick: Tick, time: f32) {
        self.last_time = time;
    }

    fn on_snapshot(&mut self, tick: Tick, boids: &[Boid]) {
        if boids.is_empty() {
            return;
        }
        let rows: Vec<BoidSnapshotRow> = boids
            .iter()
            .enumerate()
            .map(|(i, b)| BoidSnapshotRow::new(i as u32, tick, b))
            .collect();
        let result = self.writer.write_snapshots(&rows);
        self.store_err(result);

        let summary = TickSummaryRow::new(tick, self.last_time, &FlockStats::from_boids(boids));
        let result = self.writer.write_tick_summary(&summary);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
