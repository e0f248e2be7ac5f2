//! `flock-kernel` — the per-agent flock update.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                     |
//! |---------------|--------------------------------------------------------------|
//! | [`noise`]     | `hash`, `value_noise`, `speed_jitter`                        |
//! | [`steering`]  | `Steering` force breakdown, `steer`, individual force terms  |
//! | [`update`]    | `update_boid`, `update_all`, integration and frame wrap      |
//!
//! # Design notes
//!
//! `update_boid` is a pure function of `(agent, snapshot, params, tick,
//! terrain)` and returns the agent's next record.  It never writes shared
//! state, so any scheduler that hands it the previous tick's snapshot and
//! stores the result in the agent's own slot preserves the flock
//! semantics, whether that is a serial loop ([`update_all`]) or Rayon in
//! `flock-sim`.
//!
//! The base and extended kernels are one code path: `params.containment`
//! switches on the correction stage and the center-of-mass cohesion rule.

pub mod noise;
pub mod steering;
pub mod update;


pub use noise::{hash, speed_jitter, value_noise};
pub use steering::{Steering, containment_correction, ground_avoidance, steer};
pub use update::{advance_frame, jittered_speed, update_all, update_boid};

/// Agents processed per work batch.  Matches the compute dispatch group size
/// the kernel was tuned for; `flock-sim` uses it as the Rayon chunk length.
pub const WORKGROUP_SIZE: usize = 256;

/// Floor applied to inter-agent distance before dividing by it.
pub const MIN_DISTANCE: f32 = 1.0e-6;
