//! The per-agent record.
//!
//! Layout matches the structured buffer consumed by the renderer:
//!
//! ```text
//! offset  field            type
//!  0      position         float3
//! 12      velocity         float3
//! 24      noise_offset     float
//! 28      animation_frame  float
//! 32      padding          float4   (no semantics)
//! 48
//! ```

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// One flocking agent.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Boid {
    /// World-space position.
    pub position: Vec3,

    /// Heading.  Not kept normalized between ticks; the kernel normalizes it
    /// before blending.
    pub velocity: Vec3,

    /// Speed-jitter phase seed.  Written once at spawn, never by the kernel.
    pub noise_offset: f32,

    /// Animation phase in `[0, frame_count)`.
    pub animation_frame: f32,

    #[cfg_attr(feature = "serde", serde(skip))]
    pub padding: [f32; 4],
}

impl Boid {
    /// Size of one record in bytes.
    pub const STRIDE: usize = std::mem::size_of::<Boid>();

    pub fn new(position: Vec3, velocity: Vec3, noise_offset: f32, animation_frame: f32) -> Self {
        Self {
            position,
            velocity,
            noise_offset,
            animation_frame,
            padding: [0.0; 4],
        }
    }

    /// Copy of `self` with the kernel-owned fields replaced.
    ///
    /// `noise_offset` and padding are carried over untouched.
    #[inline]
    pub fn with_motion(self, position: Vec3, velocity: Vec3, animation_frame: f32) -> Self {
        Self {
            position,
            velocity,
            animation_frame,
            ..self
        }
    }
}
