//! Integration: heading, position, and animation phase.

use flock_agent::Boid;
use flock_core::{AgentId, FlockParams, TickInput};
use flock_terrain::HeightSource;

use crate::{speed_jitter, steer};

/// Jittered cruise speed for an agent this tick.
#[inline]
pub fn jittered_speed(params: &FlockParams, tick: &TickInput, noise_offset: f32) -> f32 {
    let jitter = speed_jitter(tick.time, noise_offset);
    params.base_speed * (1.0 + jitter * params.speed_variation)
}

/// Advance an animation phase, wrapping with one subtraction.
///
/// An `increment` of `frame_count` or more leaves the result out of range;
/// callers relying on the `[0, frame_count)` invariant must keep increments
/// below `frame_count`.
#[inline]
pub fn advance_frame(frame: f32, increment: f32, frame_count: f32) -> f32 {
    let next = frame + increment;
    if next >= frame_count {
        next - frame_count
    } else {
        next
    }
}

/// Compute `agent`'s record for the next tick from the previous snapshot.
///
/// # Panics
/// Panics if `agent` is out of range for `snapshot`.
pub fn update_boid<S: HeightSource + ?Sized>(
    agent:    AgentId,
    snapshot: &[Boid],
    params:   &FlockParams,
    tick:     &TickInput,
    terrain:  &S,
) -> Boid {
    let me = snapshot[agent.index()];
    let speed = jittered_speed(params, tick, me.noise_offset);

    let target = steer(agent, snapshot, params, terrain).blend(params);

    // Turn rate is a fixed per-tick fraction, independent of delta_time.
    let velocity = me.velocity.normalize().lerp(target, params.rotation_speed);
    let step = speed * tick.delta_time;
    let position = me.position + velocity * step;
    let frame = advance_frame(me.animation_frame, step * params.frame_rate, params.frame_count);

    me.with_motion(position, velocity, frame)
}

/// Serial reference scheduler: update every agent from `snapshot` into `out`.
///
/// # Panics
/// Panics if `snapshot` and `out` differ in length.
pub fn update_all<S: HeightSource + ?Sized>(
    snapshot: &[Boid],
    out:      &mut [Boid],
    params:   &FlockParams,
    tick:     &TickInput,
    terrain:  &S,
) {
    assert_eq!(snapshot.len(), out.len(), "snapshot and output lengths differ");
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = update_boid(AgentId(i as u32), snapshot, params, tick, terrain);
    }
}
