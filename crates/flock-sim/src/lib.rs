//! `flock-sim` — tick loop orchestrator for the rust_flock kernel.
//!
//! # Two-phase tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Compute — for every agent i (parallel with the `parallel` feature):
//!                 back[i] = update_boid(i, front, params, tick, terrain)
//!                 reads: all of `front`   writes: only back[i]
//!   ② Commit  — swap(front, back); the new state becomes visible to the
//!                 next tick, never to the current one.
//!   ③ Observe — on_tick_end, plus on_snapshot every output_interval_ticks.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Runs the compute phase on Rayon in 256-agent batches.   |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use flock_core::{FlockParams, SimConfig};
//! use flock_sim::{NoopObserver, SimBuilder};
//! use flock_terrain::FlatGround;
//!
//! let mut sim = SimBuilder::new(SimConfig::default(), FlockParams::default(), FlatGround(0.0))
//!     .spawn(4_096, 15.0)
//!     .build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
