//! Simulation observer trait for progress reporting and data collection.

use flock_agent::Boid;
use flock_core::Tick;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, time: f32) {
///         if tick.0 % self.interval == 0 {
///             println!("tick {tick}: t = {time:.2}s");
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before the compute phase.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after the tick's writes are committed.
    ///
    /// `time` is the simulation time the tick was computed at.
    fn on_tick_end(&mut self, _tick: Tick, _time: f32) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`
    /// ticks) with the freshly committed flock.
    fn on_snapshot(&mut self, _tick: Tick, _boids: &[Boid]) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
