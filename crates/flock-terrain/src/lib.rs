//! `flock-terrain` — ground height lookup for terrain avoidance.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`source`]    | `HeightSource` trait, `FlatGround`                        |
//! | [`field`]     | `HeightField` — 2-D grid, bilinear, clamp-to-edge          |
//! | [`sampler`]   | `ground_height` — world XZ → world-space height           |
//! | [`error`]     | `TerrainError`, `TerrainResult<T>`                        |
//!
//! The height source is read-only and shared by every agent update in a
//! tick, hence the `Send + Sync` bound on [`HeightSource`].

pub mod error;
pub mod field;
pub mod sampler;
pub mod source;


pub use error::{TerrainError, TerrainResult};
pub use field::HeightField;
pub use sampler::ground_height;
pub use source::{FlatGround, HeightSource};
