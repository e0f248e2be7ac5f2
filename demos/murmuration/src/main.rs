//! murmuration — a starling flock circling over rolling hills.
//!
//! Spawns a flock around a moving anchor, keeps it inside a containment
//! sphere, and writes periodic CSV snapshots.
//!
//! ```text
//! murmuration [params.json] [output_dir]
//! RUST_LOG=flock_sim=debug murmuration
//! ```
//!
//! The optional JSON file overrides any field of [`DemoConfig`]; missing
//! fields keep their defaults.

mod terrain;

#[cfg(test)]
mod tests;

use std::f32::consts::TAU;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use flock_core::{Containment, FlockParams, SimConfig, Vec3};
use flock_output::{CsvWriter, SimOutputObserver};
use flock_sim::{SimBuilder, SimObserver};

// ── Configuration ─────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(default)]
struct DemoConfig {
    sim:           SimConfig,
    params:        FlockParams,
    agents:        usize,
    spawn_radius:  f32,
    /// Radius of the anchor's circular path around the world origin.
    orbit_radius:  f32,
    /// Seconds per anchor revolution.
    orbit_period:  f32,
    /// Ticks between anchor updates.
    anchor_ticks:  u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        let anchor = Vec3::new(0.0, 45.0, 0.0);
        Self {
            sim: SimConfig {
                total_ticks:           1_800, // 30 s at 60 Hz
                output_interval_ticks: 30,
                ..SimConfig::default()
            },
            params: FlockParams {
                anchor,
                containment: Some(Containment {
                    center: anchor,
                    radius: 60.0,
                    weight: 1.5,
                }),
                ..FlockParams::default()
            },
            agents:       2_048,
            spawn_radius: 20.0,
            orbit_radius: 40.0,
            orbit_period: 20.0,
            anchor_ticks: 10,
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<DemoConfig> {
    let Some(path) = path else {
        return Ok(DemoConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let config = serde_json::from_str(&text)
        .with_context(|| format!("parsing {}", path.display()))?;
    info!(path = %path.display(), "loaded demo config");
    Ok(config)
}

/// Anchor position on the orbit at simulation time `t`.
fn orbit_anchor(config: &DemoConfig, t: f32) -> Vec3 {
    let base = config.params.anchor;
    if config.orbit_period <= 0.0 {
        return base;
    }
    let angle = TAU * t / config.orbit_period;
    base + Vec3::new(angle.cos(), 0.0, angle.sin()) * config.orbit_radius
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let config_path = args.next().map(PathBuf::from);
    let out_dir = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("output/murmuration"));

    // 1. Configuration and terrain.
    let config = load_config(config_path.as_deref())?;
    let ground = terrain::rolling_hills()?;
    info!(
        agents = config.agents,
        ticks = config.sim.total_ticks,
        resolution = terrain::RESOLUTION,
        "murmuration starting"
    );

    // 2. Build sim.
    let mut sim = SimBuilder::new(config.sim.clone(), config.params.clone(), ground)
        .spawn(config.agents, config.spawn_radius)
        .build()?;

    // 3. Output.
    let writer = CsvWriter::new(&out_dir)?;
    let mut obs = SimOutputObserver::new(writer);

    // 4. Run in batches, moving the anchor (and the containment sphere with
    //    it) between batches.
    let t0 = Instant::now();
    let end = sim.config.end_tick();
    let batch = config.anchor_ticks.max(1);
    while sim.clock.current_tick < end {
        let anchor = orbit_anchor(&config, sim.clock.time());
        sim.set_anchor(anchor);
        if let Some(c) = sim.params.containment.as_mut() {
            c.center = anchor;
        }
        let n = batch.min(end - sim.clock.current_tick);
        sim.run_ticks(n, &mut obs)?;
    }
    obs.on_sim_end(sim.clock.current_tick);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        warn!(error = %e, "output incomplete");
    }

    // 5. Summary.
    let stats = sim.stats();
    info!(
        elapsed_s = elapsed.as_secs_f64(),
        centroid = %stats.centroid,
        spread = stats.spread,
        alignment = stats.mean_velocity.length(),
        "murmuration complete"
    );
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  output directory : {}", out_dir.display());
    println!("  centroid         : {}", stats.centroid);
    println!("  spread           : {:.2}", stats.spread);

    Ok(())
}
