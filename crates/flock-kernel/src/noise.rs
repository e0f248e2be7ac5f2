//! Deterministic value noise for per-agent speed jitter.
//!
//! The lattice skew (`x + 57y + 113z`) and the `sin`-based hash must stay
//! exactly as written: agents' speed phases across the flock depend on them.

use glam::Vec3;

const HASH_SCALE: f32 = 43758.5453;
const LATTICE_Y: f32 = 57.0;
const LATTICE_Z: f32 = 113.0;

/// Fractional part, `x - floor(x)`; always in `[0, 1)`.
#[inline]
fn frac(x: f32) -> f32 {
    x - x.floor()
}

/// Fast non-cryptographic hash of a lattice index into `[0, 1)`.
#[inline]
pub fn hash(n: f32) -> f32 {
    frac(n.sin() * HASH_SCALE)
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Trilinearly interpolated value noise in `[0, 1]`.
pub fn value_noise(p: Vec3) -> f32 {
    let cell = p.floor();
    let f = p - cell;
    let f = f * f * (Vec3::splat(3.0) - 2.0 * f);

    let n = cell.x + cell.y * LATTICE_Y + cell.z * LATTICE_Z;

    let x00 = lerp(hash(n), hash(n + 1.0), f.x);
    let x10 = lerp(hash(n + 57.0), hash(n + 58.0), f.x);
    let x01 = lerp(hash(n + 113.0), hash(n + 114.0), f.x);
    let x11 = lerp(hash(n + 170.0), hash(n + 171.0), f.x);

    lerp(lerp(x00, x10, f.y), lerp(x01, x11, f.y), f.z)
}

/// Speed jitter in `[-1, 1]` for an agent at simulation time `time`.
///
/// The scalar phase `time / 100 + noise_offset` is fed to all three noise
/// axes.
#[inline]
pub fn speed_jitter(time: f32, noise_offset: f32) -> f32 {
    let phase = time / 100.0 + noise_offset;
    value_noise(Vec3::splat(phase)).clamp(-1.0, 1.0) * 2.0 - 1.0
}
