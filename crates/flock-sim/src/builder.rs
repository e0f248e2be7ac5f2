//! Fluent builder for constructing a [`Sim`].

use flock_agent::{BoidBuffer, FlockBuilder};
use flock_core::{FlockParams, SimConfig};
use flock_terrain::HeightSource;
use tracing::info;

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<H>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — total ticks, delta time, seed, …
/// - [`FlockParams`] — kernel tuning
/// - `H: HeightSource` — the terrain (e.g. [`flock_terrain::HeightField`])
/// - the flock itself, via exactly one of:
///
/// | Method                  | Effect                                              |
/// |-------------------------|-----------------------------------------------------|
/// | `.boids(buffer)`        | Use a pre-built `BoidBuffer`                        |
/// | `.spawn(count, radius)` | Spawn `count` agents around `params.anchor`, seeded |
/// |                         | from `config.seed`                                  |
///
/// The later call wins if both are used.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, params, HeightField::from_fn(64, 64, hills))
///     .spawn(8_192, 20.0)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<H: HeightSource> {
    config:  SimConfig,
    params:  FlockParams,
    terrain: H,
    flock:   Option<FlockSource>,
}

enum FlockSource {
    Buffer(BoidBuffer),
    Spawn { count: usize, radius: f32 },
}

impl<H: HeightSource> SimBuilder<H> {
    /// Create a builder with all required inputs except the flock.
    pub fn new(config: SimConfig, params: FlockParams, terrain: H) -> Self {
        Self {
            config,
            params,
            terrain,
            flock: None,
        }
    }

    /// Supply an already initialized flock.
    pub fn boids(mut self, boids: BoidBuffer) -> Self {
        self.flock = Some(FlockSource::Buffer(boids));
        self
    }

    /// Spawn `count` agents uniformly inside a sphere of `radius` around
    /// `params.anchor`.  Deterministic for a given `config.seed`.
    pub fn spawn(mut self, count: usize, radius: f32) -> Self {
        self.flock = Some(FlockSource::Spawn { count, radius });
        self
    }

    /// Validate inputs, materialize the flock, and return a ready-to-run
    /// [`Sim`].
    pub fn build(self) -> SimResult<Sim<H>> {
        // ── Validate ──────────────────────────────────────────────────────
        self.params.validate()?;
        let dt = self.config.delta_time;
        if !dt.is_finite() || dt < 0.0 {
            return Err(SimError::Config(format!("delta_time {dt} must be finite and >= 0")));
        }
        if !self.config.start_time.is_finite() {
            return Err(SimError::Config("start_time must be finite".into()));
        }

        // ── Resolve the flock ─────────────────────────────────────────────
        let boids = match self.flock {
            Some(FlockSource::Buffer(b)) => b,
            Some(FlockSource::Spawn { count, radius }) => FlockBuilder::new(count, self.config.seed)
                .center(self.params.anchor)
                .spawn_radius(radius)
                .frame_count(self.params.frame_count)
                .build(),
            None => return Err(SimError::Config("no flock supplied: call .boids() or .spawn()".into())),
        };
        if boids.is_empty() {
            return Err(SimError::Config("flock is empty".into()));
        }
        if u32::try_from(boids.len()).is_err() {
            return Err(SimError::TooManyAgents { got: boids.len() });
        }

        #[cfg(feature = "parallel")]
        let pool = match self.config.num_threads {
            Some(n) => Some(rayon::ThreadPoolBuilder::new().num_threads(n).build()?),
            None => None,
        };

        info!(
            agents = boids.len(),
            total_ticks = self.config.total_ticks,
            delta_time = dt,
            seed = self.config.seed,
            "flock simulation built"
        );

        Ok(Sim {
            clock:   self.config.make_clock(),
            config:  self.config,
            params:  self.params,
            boids,
            terrain: self.terrain,
            #[cfg(feature = "parallel")]
            pool,
        })
    }
}
