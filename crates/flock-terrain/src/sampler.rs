//! World-space ground height lookup.

use flock_core::TerrainBounds;
use glam::Vec3;

use crate::HeightSource;

/// Terrain height directly below `position`, in world units.
///
/// `uv = (xz - origin.xz) / size.xz`, then
/// `height = sample(uv) * size.y * 1.7 + origin.y`.
#[inline]
pub fn ground_height<S: HeightSource + ?Sized>(
    source:   &S,
    bounds:   &TerrainBounds,
    position: Vec3,
) -> f32 {
    let uv = bounds.world_to_uv(position.x, position.z);
    bounds.denormalize_height(source.sample(uv))
}
