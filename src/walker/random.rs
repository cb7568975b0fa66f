//! Seeded random sampling without replacement.
//!
//! Every draw picks one index per dimension uniformly at random. A draw that
//! hits an already emitted point is discarded and redrawn as a whole. The
//! number of redraws is bounded: once `max_retries` consecutive draws have
//! collided, the sampler either picks uniformly among the remaining
//! unvisited points by scanning the space in odometer order, or fails with
//! [`Error::RetryLimitExceeded`] when that fallback is disabled.
//!
//! Each iterator seeds its own generator from the walker's seed, so every
//! iterator of the same sampler replays the same sequence.

use std::collections::HashSet;

use crate::builder::BuilderFactory;
use crate::error::{Error, Result};
use crate::space::{HyperParameterSpace, Point, RawValues};
use crate::walker::{ConfigOf, Evaluation, HyperSpaceIterator, SpaceWalker, WalkerCore};

/// Seed used when none is configured.
pub const DEFAULT_SEED: u64 = 123_456;

/// Consecutive colliding draws tolerated before the fallback kicks in.
pub const DEFAULT_MAX_RETRIES: usize = 1_000;

#[derive(Clone, Copy, Debug)]
struct SamplerConfig {
    seed: u64,
    max_retries: usize,
    max_points: Option<usize>,
    exhaustive_fallback: bool,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            max_retries: DEFAULT_MAX_RETRIES,
            max_points: None,
            exhaustive_fallback: true,
        }
    }
}

/// A walker that visits uniformly random points, never repeating one.
///
/// At most [`size()`](SpaceWalker::size) points are emitted, or fewer when
/// capped with [`RandomSamplerBuilder::max_points`]. Emitting the full space
/// yields a permutation of it.
///
/// # Examples
///
/// ```
/// use hyperwalk::builder::FnBuilderFactory;
/// use hyperwalk::space::HyperParameterSpace;
/// use hyperwalk::walker::{RandomSamplerBuilder, SpaceWalker};
/// use hyperwalk::{ParamValue, Result};
///
/// let space = HyperParameterSpace::builder()
///     .values("ntrees", [10_i64, 20, 30, 40])
///     .build()
///     .unwrap();
/// let factory = FnBuilderFactory::new(|n: &mut i64, _: &str, v: &ParamValue| {
///     *n = v.as_i64().unwrap_or_default();
///     Ok(())
/// });
///
/// let sampler = RandomSamplerBuilder::new().seed(42).build(0_i64, space, factory);
/// let mut drawn: Vec<i64> = sampler.configurations().collect::<Result<_>>().unwrap();
/// drawn.sort_unstable();
/// assert_eq!(drawn, vec![10, 20, 30, 40]);
/// ```
pub struct RandomSampler<F: BuilderFactory> {
    core: WalkerCore<F>,
    config: SamplerConfig,
}

impl<F: BuilderFactory> RandomSampler<F> {
    /// Creates a sampler with the default seed ([`DEFAULT_SEED`]) and settings.
    #[must_use]
    pub fn new(base: ConfigOf<F>, space: HyperParameterSpace, factory: F) -> Self {
        RandomSamplerBuilder::new().build(base, space, factory)
    }

    /// Creates a sampler with a fixed seed for reproducibility.
    #[must_use]
    pub fn with_seed(seed: u64, base: ConfigOf<F>, space: HyperParameterSpace, factory: F) -> Self {
        RandomSamplerBuilder::new()
            .seed(seed)
            .build(base, space, factory)
    }

    /// Returns the seed every iterator starts from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.config.seed
    }

    /// Returns the number of points an iterator may emit: the space size,
    /// lowered to `max_points` if one is configured.
    #[must_use]
    pub fn limit(&self) -> usize {
        let size = self.core.space().size();
        self.config.max_points.map_or(size, |cap| cap.min(size))
    }
}

impl<F: BuilderFactory> SpaceWalker for RandomSampler<F> {
    type Factory = F;
    type Iter<'a>
        = RandomIter<'a, F>
    where
        Self: 'a;

    fn iterator(&self) -> RandomIter<'_, F> {
        RandomIter {
            core: &self.core,
            config: self.config,
            limit: self.limit(),
            rng: fastrand::Rng::with_seed(self.config.seed),
            visited: HashSet::new(),
            current: None,
        }
    }

    fn space(&self) -> &HyperParameterSpace {
        self.core.space()
    }

    fn base_configuration(&self) -> &ConfigOf<F> {
        self.core.base()
    }

    fn builder_factory(&self) -> &F {
        self.core.factory()
    }
}

/// Builder for configuring a [`RandomSampler`].
///
/// # Examples
///
/// ```
/// use hyperwalk::walker::RandomSamplerBuilder;
///
/// let builder = RandomSamplerBuilder::new()
///     .seed(7)
///     .max_retries(50)
///     .max_points(20)
///     .exhaustive_fallback(false);
/// ```
#[derive(Clone, Debug, Default)]
pub struct RandomSamplerBuilder {
    config: SamplerConfig,
}

impl RandomSamplerBuilder {
    /// Creates a new builder with default settings.
    ///
    /// Default settings:
    /// - `seed`: [`DEFAULT_SEED`]
    /// - `max_retries`: [`DEFAULT_MAX_RETRIES`]
    /// - `max_points`: none (the whole space)
    /// - `exhaustive_fallback`: enabled
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the seed of the pseudo-random source.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Sets how many consecutive colliding draws are tolerated per point.
    ///
    /// Zero skips random draws entirely once the fallback is enabled.
    #[must_use]
    pub fn max_retries(mut self, max_retries: usize) -> Self {
        self.config.max_retries = max_retries;
        self
    }

    /// Caps the number of points an iterator emits.
    #[must_use]
    pub fn max_points(mut self, max_points: usize) -> Self {
        self.config.max_points = Some(max_points);
        self
    }

    /// Enables or disables the exhaustive fallback after `max_retries` collisions.
    #[must_use]
    pub fn exhaustive_fallback(mut self, enabled: bool) -> Self {
        self.config.exhaustive_fallback = enabled;
        self
    }

    /// Builds the configured [`RandomSampler`].
    #[must_use]
    pub fn build<F: BuilderFactory>(
        self,
        base: ConfigOf<F>,
        space: HyperParameterSpace,
        factory: F,
    ) -> RandomSampler<F> {
        trace_info!(
            size = space.size(),
            dimensions = space.len(),
            seed = self.config.seed,
            "random sampler created"
        );
        RandomSampler {
            core: WalkerCore::new(base, space, factory),
            config: self.config,
        }
    }
}

/// Iterator over a [`RandomSampler`].
///
/// Owns its generator and the set of points emitted so far.
pub struct RandomIter<'a, F: BuilderFactory> {
    core: &'a WalkerCore<F>,
    config: SamplerConfig,
    limit: usize,
    rng: fastrand::Rng,
    visited: HashSet<Point>,
    current: Option<Point>,
}

impl<F: BuilderFactory> RandomIter<'_, F> {
    fn draw_candidate(&mut self) -> Point {
        let indices = self
            .core
            .space()
            .radices()
            .iter()
            .map(|&radix| self.rng.usize(0..radix))
            .collect();
        Point::new(indices)
    }

    /// Produces an unvisited point. The caller guarantees one exists.
    fn draw(&mut self) -> Result<Point> {
        for _ in 0..self.config.max_retries {
            let candidate = self.draw_candidate();
            if !self.visited.contains(&candidate) {
                return Ok(candidate);
            }
        }

        if !self.config.exhaustive_fallback {
            return Err(Error::RetryLimitExceeded {
                attempts: self.config.max_retries,
            });
        }

        let space = self.core.space();
        let remaining = space.size() - self.visited.len();
        trace_debug!(
            attempts = self.config.max_retries,
            remaining,
            "random draws collided, scanning unvisited points"
        );
        let target = self.rng.usize(0..remaining);
        (0..space.size())
            .map(|ordinal| Point::from_ordinal(ordinal, space.radices()))
            .filter(|point| !self.visited.contains(point))
            .nth(target)
            .ok_or(Error::Internal("unvisited point count out of sync"))
    }
}

impl<F: BuilderFactory> HyperSpaceIterator for RandomIter<'_, F> {
    type Config = ConfigOf<F>;

    fn next_configuration(&mut self, _previous: Option<&Evaluation>) -> Result<ConfigOf<F>> {
        if self.visited.len() >= self.limit {
            trace_debug!(emitted = self.visited.len(), "random sampling exhausted");
            return Err(Error::SamplingExhausted {
                emitted: self.visited.len(),
                size: self.limit,
            });
        }

        let point = self.draw()?;
        self.visited.insert(point.clone());
        let point = self.current.insert(point);
        self.core.resolve(point)
    }

    fn has_next(&self, _previous: Option<&Evaluation>) -> bool {
        self.visited.len() < self.limit
    }

    fn current_point(&self) -> Option<&Point> {
        self.current.as_ref()
    }

    fn current_raw_values(&self) -> Result<RawValues> {
        self.core.raw_values(self.current.as_ref())
    }

    fn emitted(&self) -> usize {
        self.visited.len()
    }
}
