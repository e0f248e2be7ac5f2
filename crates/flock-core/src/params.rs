//! Flock parameters supplied to the update kernel each tick.
//!
//! # Design
//!
//! Everything the kernel reads besides the boid buffer and the height source
//! lives in two plain structs:
//!
//! - [`FlockParams`] — speeds, radii, weights, terrain bounds, animation and
//!   (optionally) containment.  Re-derived by the driver whenever it wants;
//!   the kernel only ever sees `&FlockParams`.
//! - [`TickInput`] — simulation time and delta time for the current tick,
//!   produced by [`SimClock`][crate::SimClock].
//!
//! The kernel performs no validation.  Drivers call
//! [`FlockParams::validate`] before dispatch; invalid values otherwise
//! surface as NaN/Inf in positions and velocities.

use glam::Vec3;

use crate::{FlockError, FlockResult};

/// Multiplier applied to sampled heights to match the height-field encoding.
pub const TERRAIN_HEIGHT_SCALE: f32 = 1.7;

// ── TerrainBounds ─────────────────────────────────────────────────────────────

/// World-space placement of the terrain height field.
///
/// `origin.xz` maps to UV `(0, 0)`, `origin.xz + size.xz` to UV `(1, 1)`.
/// `size.y` is the vertical extent of a normalized height of 1.0 (before the
/// [`TERRAIN_HEIGHT_SCALE`] correction).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TerrainBounds {
    pub origin: Vec3,
    pub size:   Vec3,
}

impl TerrainBounds {
    #[inline]
    pub fn new(origin: Vec3, size: Vec3) -> Self {
        Self { origin, size }
    }

    /// Map a world-space XZ position to normalized field coordinates.
    ///
    /// Values outside `[0, 1]` are left as-is; the sampler clamps.
    #[inline]
    pub fn world_to_uv(&self, world_x: f32, world_z: f32) -> glam::Vec2 {
        glam::Vec2::new(
            (world_x - self.origin.x) / self.size.x,
            (world_z - self.origin.z) / self.size.z,
        )
    }

    /// Convert a normalized sample back to a world-space height.
    #[inline]
    pub fn denormalize_height(&self, sample: f32) -> f32 {
        sample * self.size.y * TERRAIN_HEIGHT_SCALE + self.origin.y
    }
}

impl Default for TerrainBounds {
    fn default() -> Self {
        Self {
            origin: Vec3::new(-250.0, 0.0, -250.0),
            size:   Vec3::new(500.0, 30.0, 500.0),
        }
    }
}

// ── Containment ───────────────────────────────────────────────────────────────

/// Spherical containment: agents outside the sphere are steered back toward
/// the flock anchor.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Containment {
    pub center: Vec3,
    pub radius: f32,
    /// Blend weight of the correction force.
    pub weight: f32,
}

impl Containment {
    /// `true` if `position` lies strictly inside the sphere.
    #[inline]
    pub fn contains(&self, position: Vec3) -> bool {
        let dx = position.x - self.center.x;
        let dy = position.y - self.center.y;
        let dz = position.z - self.center.z;
        dx * dx + dy * dy + dz * dz < self.radius * self.radius
    }
}

// ── FlockParams ───────────────────────────────────────────────────────────────

/// Scalar configuration for one kernel invocation.
///
/// `containment: None` selects the base kernel; `Some(..)` selects the
/// extended kernel with the containment-correction stage and the
/// center-of-mass cohesion rule.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FlockParams {
    /// Interpolation fraction from the old heading toward the blended target,
    /// applied once per tick (not scaled by delta time).
    pub rotation_speed: f32,

    /// Cruise speed in world units per second before jitter.
    pub base_speed: f32,

    /// Relative speed jitter amplitude; `0.0` disables jitter.
    pub speed_variation: f32,

    /// Agents closer than this are neighbors.
    pub neighbor_radius: f32,

    /// Point the flock is drawn toward.
    pub anchor: Vec3,

    pub alignment_weight:  f32,
    pub cohesion_weight:   f32,
    pub separation_weight: f32,
    pub avoidance_weight:  f32,

    /// Placement of the terrain height field.
    pub terrain: TerrainBounds,

    /// Height above ground under which the upward avoidance force applies.
    pub avoidance_distance: f32,

    /// Animation frames advanced per world unit travelled.
    pub frame_rate: f32,

    /// Length of the animation cycle.
    pub frame_count: f32,

    /// Extended-variant containment sphere.
    pub containment: Option<Containment>,
}

impl Default for FlockParams {
    fn default() -> Self {
        Self {
            rotation_speed:     0.1,
            base_speed:         4.0,
            speed_variation:    0.3,
            neighbor_radius:    3.0,
            anchor:             Vec3::new(0.0, 20.0, 0.0),
            alignment_weight:   1.0,
            cohesion_weight:    1.0,
            separation_weight:  1.0,
            avoidance_weight:   2.0,
            terrain:            TerrainBounds::default(),
            avoidance_distance: 5.0,
            frame_rate:         2.0,
            frame_count:        16.0,
            containment:        None,
        }
    }
}

impl FlockParams {
    /// `true` when the extended (containment) kernel is selected.
    #[inline]
    pub fn is_extended(&self) -> bool {
        self.containment.is_some()
    }

    /// Check the ranges the kernel silently assumes.
    ///
    /// Call before each dispatch when parameters come from outside (UI,
    /// config files).  Returns the first offending parameter.
    pub fn validate(&self) -> FlockResult<()> {
        let scalars = [
            ("rotation_speed",     self.rotation_speed),
            ("base_speed",         self.base_speed),
            ("speed_variation",    self.speed_variation),
            ("neighbor_radius",    self.neighbor_radius),
            ("alignment_weight",   self.alignment_weight),
            ("cohesion_weight",    self.cohesion_weight),
            ("separation_weight",  self.separation_weight),
            ("avoidance_weight",   self.avoidance_weight),
            ("avoidance_distance", self.avoidance_distance),
            ("frame_rate",         self.frame_rate),
            ("frame_count",        self.frame_count),
        ];
        for (name, value) in scalars {
            if !value.is_finite() {
                return Err(invalid(name, value, "must be finite"));
            }
        }

        positive("neighbor_radius", self.neighbor_radius)?;
        positive("avoidance_distance", self.avoidance_distance)?;
        positive("frame_count", self.frame_count)?;
        positive("terrain.size.x", self.terrain.size.x)?;
        positive("terrain.size.z", self.terrain.size.z)?;

        if !self.anchor.is_finite() {
            return Err(FlockError::Config(format!("anchor {} is not finite", self.anchor)));
        }
        if !self.terrain.origin.is_finite() || !self.terrain.size.is_finite() {
            return Err(FlockError::Config("terrain bounds are not finite".into()));
        }

        if let Some(c) = &self.containment {
            positive("containment.radius", c.radius)?;
            if !c.weight.is_finite() {
                return Err(invalid("containment.weight", c.weight, "must be finite"));
            }
            if !c.center.is_finite() {
                return Err(FlockError::Config(format!(
                    "containment center {} is not finite",
                    c.center
                )));
            }
        }
        Ok(())
    }
}

fn positive(name: &'static str, value: f32) -> FlockResult<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(invalid(name, value, "must be > 0"))
    }
}

fn invalid(name: &'static str, value: f32, reason: &'static str) -> FlockError {
    FlockError::InvalidParam { name, value, reason }
}

// ── TickInput ─────────────────────────────────────────────────────────────────

/// Per-tick timing handed to the kernel alongside [`FlockParams`].
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickInput {
    /// Elapsed simulation seconds; drives the speed-jitter phase.
    pub time: f32,
    /// Seconds integrated this tick.
    pub delta_time: f32,
}

impl TickInput {
    #[inline]
    pub fn new(time: f32, delta_time: f32) -> Self {
        Self { time, delta_time }
    }
}
