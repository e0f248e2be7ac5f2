//! The `HeightSource` trait, the seam between the kernel and terrain data.

use glam::Vec2;

/// Anything that can answer "what is the normalized terrain height at UV?".
///
/// `uv` is in field space: `(0, 0)` is the terrain origin corner and
/// `(1, 1)` the opposite corner.  Out-of-range coordinates must clamp to the
/// edge.  The returned value is normalized; [`ground_height`] converts it to
/// world units.
///
/// [`ground_height`]: crate::ground_height
pub trait HeightSource: Send + Sync {
    fn sample(&self, uv: Vec2) -> f32;
}

/// Constant-height ground.  Useful when no terrain is loaded.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlatGround(pub f32);

impl HeightSource for FlatGround {
    #[inline]
    fn sample(&self, _uv: Vec2) -> f32 {
        self.0
    }
}

impl<T: HeightSource + ?Sized> HeightSource for &T {
    #[inline]
    fn sample(&self, uv: Vec2) -> f32 {
        (**self).sample(uv)
    }
}

impl<T: HeightSource + ?Sized> HeightSource for Box<T> {
    #[inline]
    fn sample(&self, uv: Vec2) -> f32 {
        (**self).sample(uv)
    }
}
