//! Synthetic rolling-hills height field.

use flock_terrain::{HeightField, TerrainResult};
use glam::Vec2;

/// Texels per side of the generated field.
pub const RESOLUTION: usize = 128;

/// Two crossed sine ridges plus a central basin, normalized to `[0, 1]`.
pub fn rolling_hills() -> TerrainResult<HeightField> {
    HeightField::from_fn(RESOLUTION, RESOLUTION, |uv: Vec2| {
        let ridges = (uv.x * 9.0).sin() * (uv.y * 7.0).cos();
        let basin = (uv - Vec2::splat(0.5)).length() * 1.4;
        ((ridges * 0.25 + basin * 0.5) + 0.25).clamp(0.0, 1.0)
    })
}
