//! Integration tests for flock-sim.

use flock_agent::{Boid, BoidBuffer, FlockBuilder};
use flock_core::{FlockParams, SimConfig, Tick, TickInput};
use flock_terrain::FlatGround;
use glam::Vec3;

use crate::{NoopObserver, SimBuilder, SimError, SimObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config(total_ticks: u64) -> SimConfig {
    SimConfig {
        start_time:            0.0,
        delta_time:            0.1,
        total_ticks,
        seed:                  42,
        num_threads:           Some(1),
        output_interval_ticks: total_ticks,
    }
}

fn test_params() -> FlockParams {
    FlockParams {
        anchor: Vec3::new(0.0, 20.0, 0.0),
        ..FlockParams::default()
    }
}

/// Observer that records every callback.
#[derive(Default)]
struct Recorder {
    starts:    Vec<Tick>,
    ends:      Vec<(Tick, f32)>,
    snapshots: Vec<(Tick, usize)>,
    finished:  Option<Tick>,
}

impl SimObserver for Recorder {
    fn on_tick_start(&mut self, tick: Tick) {
        self.starts.push(tick);
    }
    fn on_tick_end(&mut self, tick: Tick, time: f32) {
        self.ends.push((tick, time));
    }
    fn on_snapshot(&mut self, tick: Tick, boids: &[Boid]) {
        self.snapshots.push((tick, boids.len()));
    }
    fn on_sim_end(&mut self, final_tick: Tick) {
        self.finished = Some(final_tick);
    }
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn spawn_builds_requested_count() {
        let sim = SimBuilder::new(test_config(10), test_params(), FlatGround(0.0))
            .spawn(100, 5.0)
            .build()
            .unwrap();
        assert_eq!(sim.boids.len(), 100);
        assert_eq!(sim.clock.current_tick, Tick::ZERO);
    }

    #[test]
    fn spawn_is_centered_on_anchor() {
        let sim = SimBuilder::new(test_config(10), test_params(), FlatGround(0.0))
            .spawn(50, 5.0)
            .build()
            .unwrap();
        for b in sim.boids.current() {
            assert!(b.position.distance(Vec3::new(0.0, 20.0, 0.0)) <= 5.0 + 1e-4);
        }
    }

    #[test]
    fn prebuilt_buffer_is_used() {
        let buffer = FlockBuilder::new(7, 1).build();
        let expected = buffer.current().to_vec();
        let sim = SimBuilder::new(test_config(10), test_params(), FlatGround(0.0))
            .boids(buffer)
            .build()
            .unwrap();
        assert_eq!(sim.boids.current(), expected.as_slice());
    }

    #[test]
    fn missing_flock_errors() {
        let result = SimBuilder::new(test_config(10), test_params(), FlatGround(0.0)).build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn empty_flock_errors() {
        let result = SimBuilder::new(test_config(10), test_params(), FlatGround(0.0))
            .boids(BoidBuffer::new(Vec::new()))
            .build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn invalid_params_error() {
        let params = FlockParams { neighbor_radius: 0.0, ..test_params() };
        let result = SimBuilder::new(test_config(10), params, FlatGround(0.0))
            .spawn(4, 1.0)
            .build();
        assert!(matches!(result, Err(SimError::Params(_))));
    }

    #[test]
    fn negative_delta_time_errors() {
        let config = SimConfig { delta_time: -0.1, ..test_config(10) };
        let result = SimBuilder::new(config, test_params(), FlatGround(0.0))
            .spawn(4, 1.0)
            .build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }
}

// ── Basic run ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[test]
    fn runs_to_end_tick() {
        let mut sim = SimBuilder::new(test_config(10), test_params(), FlatGround(0.0))
            .spawn(16, 3.0)
            .build()
            .unwrap();
        sim.run(&mut NoopObserver).unwrap();
        assert_eq!(sim.clock.current_tick, Tick(10));
    }

    #[test]
    fn run_ticks_advances_clock() {
        let mut sim = SimBuilder::new(test_config(100), test_params(), FlatGround(0.0))
            .spawn(4, 1.0)
            .build()
            .unwrap();
        sim.run_ticks(5, &mut NoopObserver).unwrap();
        assert_eq!(sim.clock.current_tick, Tick(5));
        sim.run_ticks(3, &mut NoopObserver).unwrap();
        assert_eq!(sim.clock.current_tick, Tick(8));
    }

    #[test]
    fn step_advances_one_tick() {
        let mut sim = SimBuilder::new(test_config(100), test_params(), FlatGround(0.0))
            .spawn(4, 1.0)
            .build()
            .unwrap();
        sim.step().unwrap();
        assert_eq!(sim.clock.current_tick, Tick(1));
    }

    #[test]
    fn observer_called_once_per_tick() {
        let mut sim = SimBuilder::new(test_config(7), test_params(), FlatGround(0.0))
            .spawn(4, 1.0)
            .build()
            .unwrap();
        let mut obs = Recorder::default();
        sim.run(&mut obs).unwrap();
        assert_eq!(obs.starts.len(), 7);
        assert_eq!(obs.ends.len(), 7);
        assert_eq!(obs.finished, Some(Tick(7)));
    }

    #[test]
    fn tick_end_reports_derived_time() {
        let config = SimConfig { start_time: 2.0, ..test_config(4) };
        let mut sim = SimBuilder::new(config, test_params(), FlatGround(0.0))
            .spawn(4, 1.0)
            .build()
            .unwrap();
        let mut obs = Recorder::default();
        sim.run(&mut obs).unwrap();
        for (tick, time) in &obs.ends {
            let expected = 2.0 + tick.0 as f32 * 0.1;
            assert!((time - expected).abs() < 1e-5, "{tick}: {time} vs {expected}");
        }
    }

    #[test]
    fn snapshots_follow_interval() {
        let config = SimConfig { output_interval_ticks: 5, ..test_config(12) };
        let mut sim = SimBuilder::new(config, test_params(), FlatGround(0.0))
            .spawn(9, 1.0)
            .build()
            .unwrap();
        let mut obs = Recorder::default();
        sim.run(&mut obs).unwrap();
        assert_eq!(obs.snapshots, vec![(Tick(0), 9), (Tick(5), 9), (Tick(10), 9)]);
    }

    #[test]
    fn zero_interval_disables_snapshots() {
        let config = SimConfig { output_interval_ticks: 0, ..test_config(5) };
        let mut sim = SimBuilder::new(config, test_params(), FlatGround(0.0))
            .spawn(3, 1.0)
            .build()
            .unwrap();
        let mut obs = Recorder::default();
        sim.run(&mut obs).unwrap();
        assert!(obs.snapshots.is_empty());
    }

    #[test]
    fn run_rejects_params_edited_to_invalid() {
        let mut sim = SimBuilder::new(test_config(10), test_params(), FlatGround(0.0))
            .spawn(4, 1.0)
            .build()
            .unwrap();
        sim.params.base_speed = f32::NAN;
        let result = sim.run(&mut NoopObserver);
        assert!(matches!(result, Err(SimError::Params(_))));
        assert_eq!(sim.clock.current_tick, Tick::ZERO, "no tick dispatched");
    }
}

// ── Tick semantics ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tick_tests {
    use super::*;

    #[test]
    fn tick_reads_only_previous_snapshot() {
        let mut sim = SimBuilder::new(test_config(10), test_params(), FlatGround(0.0))
            .spawn(300, 2.0)
            .build()
            .unwrap();
        let before = sim.boids.current().to_vec();

        // Reference: every agent computed from the same untouched snapshot.
        let mut expected = before.clone();
        let input = TickInput::new(0.0, 0.1);
        flock_kernel::update_all(&before, &mut expected, &sim.params, &input, &FlatGround(0.0));

        sim.step().unwrap();
        assert_eq!(sim.boids.current(), expected.as_slice());
    }

    #[test]
    fn same_seed_same_trajectory() {
        let run = || {
            let mut sim = SimBuilder::new(test_config(30), test_params(), FlatGround(0.0))
                .spawn(64, 4.0)
                .build()
                .unwrap();
            sim.run(&mut NoopObserver).unwrap();
            sim.boids.into_vec()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn noise_offsets_survive_run() {
        let mut sim = SimBuilder::new(test_config(20), test_params(), FlatGround(0.0))
            .spawn(32, 3.0)
            .build()
            .unwrap();
        let offsets: Vec<f32> = sim.boids.current().iter().map(|b| b.noise_offset).collect();
        sim.run(&mut NoopObserver).unwrap();
        let after: Vec<f32> = sim.boids.current().iter().map(|b| b.noise_offset).collect();
        assert_eq!(offsets, after);
    }

    #[test]
    fn set_anchor_pulls_flock() {
        let mut sim = SimBuilder::new(test_config(400), test_params(), FlatGround(0.0))
            .spawn(8, 1.0)
            .build()
            .unwrap();
        sim.params.rotation_speed = 0.5;
        let target = Vec3::new(40.0, 20.0, 0.0);
        sim.set_anchor(target);
        assert_eq!(sim.params.anchor, target);

        let start = sim.stats().centroid.distance(target);
        sim.run(&mut NoopObserver).unwrap();
        let end = sim.stats().centroid.distance(target);
        assert!(end < start, "centroid should approach the new anchor: {start} -> {end}");
    }

    #[test]
    fn stats_cover_whole_flock() {
        let sim = SimBuilder::new(test_config(1), test_params(), FlatGround(0.0))
            .spawn(25, 2.0)
            .build()
            .unwrap();
        let stats = sim.stats();
        assert_eq!(stats.count, 25);
        assert!(stats.spread > 0.0);
    }
}

// ── Rayon dispatch ────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "parallel"))]
mod parallel_tests {
    use flock_kernel::WORKGROUP_SIZE;

    use super::*;

    /// One parallel tick over a flock spanning several partial chunks,
    /// compared against the serial scheduler.
    fn assert_matches_serial(num_threads: Option<usize>) {
        let count = WORKGROUP_SIZE * 2 + 89;
        let config = SimConfig { num_threads, ..test_config(10) };
        let mut sim = SimBuilder::new(config, test_params(), FlatGround(0.0))
            .spawn(count, 6.0)
            .build()
            .unwrap();
        let before = sim.boids.current().to_vec();

        let mut expected = before.clone();
        let input = TickInput::new(0.0, 0.1);
        flock_kernel::update_all(&before, &mut expected, &sim.params, &input, &FlatGround(0.0));

        sim.step().unwrap();
        assert_eq!(sim.boids.current().len(), count);
        assert_eq!(sim.boids.current(), expected.as_slice());
    }

    #[test]
    fn dedicated_pool_matches_serial_update() {
        assert_matches_serial(Some(4));
    }

    #[test]
    fn global_pool_matches_serial_update() {
        assert_matches_serial(None);
    }

    #[test]
    fn parallel_runs_are_deterministic() {
        let run = || {
            let config = SimConfig { num_threads: Some(4), ..test_config(20) };
            let mut sim = SimBuilder::new(config, test_params(), FlatGround(0.0))
                .spawn(WORKGROUP_SIZE + 10, 5.0)
                .build()
                .unwrap();
            sim.run(&mut NoopObserver).unwrap();
            sim.boids.into_vec()
        };
        assert_eq!(run(), run());
    }
}
