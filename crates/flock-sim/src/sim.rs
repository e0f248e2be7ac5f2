//! The `Sim` struct and its tick loop.

use flock_agent::{BoidBuffer, FlockStats};
use flock_core::{FlockParams, SimClock, SimConfig, TickInput};
use flock_terrain::HeightSource;
use glam::Vec3;
use tracing::{debug, info};

use crate::{SimError, SimObserver, SimResult};

/// The main simulation runner.
///
/// `Sim<H>` holds the flock, its parameters, the terrain, and the clock, and
/// drives the compute → commit → observe loop described in the crate docs.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<H: HeightSource> {
    /// Run configuration (total ticks, delta time, seed, …).
    pub config: SimConfig,

    /// Tracks the current tick and derives `time`.
    pub clock: SimClock,

    /// Kernel parameters.  Drivers may edit these between ticks; they are
    /// re-validated at the start of every `run`/`run_ticks`.
    pub params: FlockParams,

    /// Double-buffered boid records.
    pub boids: BoidBuffer,

    /// Read-only terrain shared by every agent update.
    pub terrain: H,

    #[cfg(feature = "parallel")]
    pub(crate) pool: Option<rayon::ThreadPool>,
}

impl<H: HeightSource> Sim<H> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        self.validate_params()?;
        info!(
            agents = self.boids.len(),
            from = %self.clock.current_tick,
            to = %self.config.end_tick(),
            extended = self.params.is_extended(),
            "flock run starting"
        );
        while self.clock.current_tick < self.config.end_tick() {
            self.observed_tick(observer);
        }
        observer.on_sim_end(self.clock.current_tick);
        info!(final_tick = %self.clock.current_tick, "flock run finished");
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and for drivers that adjust parameters between
    /// batches of ticks.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        self.validate_params()?;
        for _ in 0..n {
            self.observed_tick(observer);
        }
        Ok(())
    }

    /// Advance one tick without observer callbacks.
    pub fn step(&mut self) -> SimResult<()> {
        self.validate_params()?;
        self.process_tick();
        self.clock.advance();
        Ok(())
    }

    /// Check `params` and the clock before dispatching ticks.
    pub fn validate_params(&self) -> SimResult<()> {
        self.params.validate()?;
        let dt = self.clock.delta_time;
        if !dt.is_finite() || dt < 0.0 {
            return Err(SimError::Config(format!("delta_time {dt} must be finite and >= 0")));
        }
        Ok(())
    }

    /// Move the point the flock is drawn toward.  Takes effect next tick.
    pub fn set_anchor(&mut self, anchor: Vec3) {
        self.params.anchor = anchor;
    }

    /// Statistics over the committed flock.
    pub fn stats(&self) -> FlockStats {
        FlockStats::from_boids(self.boids.current())
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn observed_tick<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);
        let input = self.process_tick();
        observer.on_tick_end(now, input.time);
        let interval = self.config.output_interval_ticks;
        if interval > 0 && now.0 % interval == 0 {
            observer.on_snapshot(now, self.boids.current());
        }
        self.clock.advance();
    }

    /// Compute every agent into the back buffer, then commit.
    fn process_tick(&mut self) -> TickInput {
        let input = self.clock.tick_input();
        debug!(tick = %self.clock.current_tick, time = input.time, "compute phase");

        self.compute(&input);
        self.boids.swap();
        input
    }

    fn compute(&mut self, input: &TickInput) {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let params = &self.params;
        let terrain = &self.terrain;
        let (snapshot, out) = self.boids.split();

        #[cfg(not(feature = "parallel"))]
        {
            flock_kernel::update_all(snapshot, out, params, input, terrain);
        }

        #[cfg(feature = "parallel")]
        {
            use flock_core::AgentId;
            use flock_kernel::{WORKGROUP_SIZE, update_boid};
            use rayon::prelude::*;

            let input = *input;
            let mut dispatch = move || {
                out.par_chunks_mut(WORKGROUP_SIZE)
                    .enumerate()
                    .for_each(|(group, slots)| {
                        let base = group * WORKGROUP_SIZE;
                        for (k, slot) in slots.iter_mut().enumerate() {
                            let agent = AgentId((base + k) as u32);
                            *slot = update_boid(agent, snapshot, params, &input, terrain);
                        }
                    });
            };
            match &self.pool {
                Some(pool) => pool.install(dispatch),
                None => dispatch(),
            }
        }
    }
}

impl<H: HeightSource> std::fmt::Debug for Sim<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sim")
            .field("clock", &self.clock)
            .field("agents", &self.boids.len())
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}
