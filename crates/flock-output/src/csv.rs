//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `boid_snapshots.csv`
//! - `tick_summaries.csv`

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{BoidSnapshotRow, OutputResult, TickSummaryRow};

pub const SNAPSHOT_FILE: &str = "boid_snapshots.csv";
pub const SUMMARY_FILE: &str = "tick_summaries.csv";

/// Writes simulation output to two CSV streams, files by default.
pub struct CsvWriter<W: Write = File> {
    snapshots: Writer<W>,
    summaries: Writer<W>,
    finished:  bool,
}

impl CsvWriter<File> {
    /// Create the output directory if needed, open the two CSV files in it,
    /// and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;
        Self::from_writers(
            File::create(dir.join(SNAPSHOT_FILE))?,
            File::create(dir.join(SUMMARY_FILE))?,
        )
    }
}

impl<W: Write> CsvWriter<W> {
    /// Wrap two arbitrary sinks and write the header rows.
    pub fn from_writers(snapshots: W, summaries: W) -> OutputResult<Self> {
        let mut snapshots = Writer::from_writer(snapshots);
        snapshots.write_record([
            "agent_id", "tick", "px", "py", "pz", "vx", "vy", "vz", "animation_frame",
        ])?;

        let mut summaries = Writer::from_writer(summaries);
        summaries.write_record([
            "tick", "time", "agents", "centroid_x", "centroid_y", "centroid_z", "spread", "alignment",
        ])?;

        Ok(Self {
            snapshots,
            summaries,
            finished: false,
        })
    }
}

impl<W: Write> OutputWriter for CsvWriter<W> {
    fn write_snapshots(&mut self, rows: &[BoidSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            let [px, py, pz] = row.position;
            let [vx, vy, vz] = row.velocity;
            self.snapshots.write_record(&[
                row.agent_id.to_string(),
                row.tick.to_string(),
                px.to_string(),
                py.to_string(),
                pz.to_string(),
                vx.to_string(),
                vy.to_string(),
                vz.to_string(),
                row.animation_frame.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        let [cx, cy, cz] = row.centroid;
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.time.to_string(),
            row.agents.to_string(),
            cx.to_string(),
            cy.to_string(),
            cz.to_string(),
            row.spread.to_string(),
            row.alignment.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        // A failed flush leaves `finished` unset.
        self.snapshots.flush()?;
        self.summaries.flush()?;
        self.finished = true;
        Ok(())
    }
}
