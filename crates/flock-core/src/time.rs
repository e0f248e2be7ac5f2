//! Simulation time model.
//!
//! # Design
//!
//! Ticks are the canonical unit of progress: tick T+1 never starts before
//! every write of tick T is committed.  Continuous time, which the kernel
//! needs for the speed-jitter phase, is derived from the tick count:
//!
//!   time = start_time + tick * delta_time
//!
//! Deriving rather than accumulating keeps long runs free of summation
//! drift and makes `time` reproducible from the tick alone.

use std::fmt;

use crate::TickInput;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Maps tick counts to simulation seconds.
///
/// `SimClock` is cheap to copy and holds no heap data.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Simulation time of tick 0, in seconds.
    pub start_time: f32,
    /// Seconds integrated per tick.
    pub delta_time: f32,
    /// The current tick, advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(start_time: f32, delta_time: f32) -> Self {
        Self {
            start_time,
            delta_time,
            current_tick: Tick::ZERO,
        }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Simulation time at the start of `current_tick`.
    #[inline]
    pub fn time(&self) -> f32 {
        (self.start_time as f64 + self.current_tick.0 as f64 * self.delta_time as f64) as f32
    }

    /// Timing block passed to the kernel for the current tick.
    #[inline]
    pub fn tick_input(&self) -> TickInput {
        TickInput::new(self.time(), self.delta_time)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (t={:.3}s)", self.current_tick, self.time())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Run-level configuration: how long, how fast, how reproducible.
///
/// Kernel tuning lives in [`FlockParams`][crate::FlockParams]; this struct
/// only concerns the driver loop.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Simulation time of tick 0, in seconds.
    pub start_time: f32,

    /// Seconds per tick.  60 Hz rendering typically uses `1.0 / 60.0`.
    pub delta_time: f32,

    /// Total ticks to simulate.
    pub total_ticks: u64,

    /// Master RNG seed for spawning.  The same seed always produces
    /// identical initial flocks.
    pub seed: u64,

    /// Worker thread count passed to Rayon.  `None` uses all logical cores.
    pub num_threads: Option<usize>,

    /// Emit a snapshot every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            start_time:            0.0,
            delta_time:            1.0 / 60.0,
            total_ticks:           600,
            seed:                  42,
            num_threads:           None,
            output_interval_ticks: 60,
        }
    }
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.start_time, self.delta_time)
    }
}
