//! `flock-agent` — boid storage for the `rust_flock` kernel.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                    |
//! |---------------|-------------------------------------------------------------|
//! | [`boid`]      | `Boid` — the 48-byte GPU-compatible agent record            |
//! | [`buffer`]    | `BoidBuffer` — double buffer (read front, write back, swap) |
//! | [`builder`]   | `FlockBuilder` — deterministic spawning                     |
//! | [`stats`]     | `FlockStats` — centroid / spread summaries                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on all public types.     |

pub mod boid;
pub mod buffer;
pub mod builder;
pub mod stats;


pub use boid::Boid;
pub use buffer::BoidBuffer;
pub use builder::FlockBuilder;
pub use stats::FlockStats;
