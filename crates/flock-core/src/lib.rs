//! `flock-core` — foundational types for the `rust_flock` kernel.
//!
//! This crate is a dependency of every other `flock-*` crate.  It has no
//! `flock-*` dependencies and few external ones (`glam`, `rand`,
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                                  |
//! | [`params`]      | `FlockParams`, `Containment`, `TerrainBounds`, `TickInput` |
//! | [`time`]        | `Tick`, `SimClock`, `SimConfig`                            |
//! | [`rng`]         | `SimRng` (spawn-time randomness)                           |
//! | [`error`]       | `FlockError`, `FlockResult`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod params;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{FlockError, FlockResult};
pub use ids::AgentId;
pub use params::{Containment, FlockParams, TerrainBounds, TickInput};
pub use rng::SimRng;
pub use time::{SimClock, SimConfig, Tick};

/// Re-exported so downstream crates name the same vector types.
pub use glam::{Vec2, Vec3};
