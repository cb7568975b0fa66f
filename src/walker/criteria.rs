//! Runtime selection of a traversal strategy.

use crate::builder::BuilderFactory;
use crate::error::Result;
use crate::space::{HyperParameterSpace, Point, RawValues};
use crate::walker::random::DEFAULT_SEED;
use crate::walker::{
    CartesianEnumerator, CartesianIter, ConfigOf, Evaluation, HyperSpaceIterator, RandomIter,
    RandomSampler, RandomSamplerBuilder, SpaceWalker,
};

/// How a search should traverse its space.
///
/// With the `serde` feature the criteria are (de)serialised as an internally
/// tagged object, e.g. `{"strategy": "random_discrete", "seed": 42}`.
///
/// # Examples
///
/// ```
/// use hyperwalk::builder::FnBuilderFactory;
/// use hyperwalk::space::HyperParameterSpace;
/// use hyperwalk::walker::{AnyWalker, SearchCriteria, SpaceWalker};
/// use hyperwalk::ParamValue;
///
/// let space = HyperParameterSpace::builder()
///     .values("alpha", [0.0, 0.5, 1.0])
///     .build()
///     .unwrap();
/// let factory = FnBuilderFactory::new(|a: &mut f64, _: &str, v: &ParamValue| {
///     *a = v.as_f64().unwrap_or_default();
///     Ok(())
/// });
///
/// let criteria = SearchCriteria::RandomDiscrete {
///     seed: 7,
///     max_points: Some(2),
/// };
/// let walker = criteria.into_walker(0.0, space, factory);
/// assert!(matches!(walker, AnyWalker::Random(_)));
/// assert_eq!(walker.configurations().count(), 2);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "strategy", rename_all = "snake_case")
)]
pub enum SearchCriteria {
    /// Enumerate every point in odometer order.
    #[default]
    Cartesian,
    /// Sample points at random without replacement.
    RandomDiscrete {
        /// Seed of the pseudo-random source.
        #[cfg_attr(feature = "serde", serde(default = "default_seed"))]
        seed: u64,
        /// Optional cap on the number of points emitted.
        #[cfg_attr(feature = "serde", serde(default))]
        max_points: Option<usize>,
    },
}

#[cfg(feature = "serde")]
fn default_seed() -> u64 {
    DEFAULT_SEED
}

impl SearchCriteria {
    /// Random sampling over the whole space with the given seed.
    #[must_use]
    pub fn random(seed: u64) -> Self {
        Self::RandomDiscrete {
            seed,
            max_points: None,
        }
    }

    /// Random sampling with the default seed.
    #[must_use]
    pub fn random_default() -> Self {
        Self::random(DEFAULT_SEED)
    }

    /// Builds the walker these criteria describe.
    #[must_use]
    pub fn into_walker<F: BuilderFactory>(
        self,
        base: ConfigOf<F>,
        space: HyperParameterSpace,
        factory: F,
    ) -> AnyWalker<F> {
        match self {
            Self::Cartesian => AnyWalker::Cartesian(CartesianEnumerator::new(base, space, factory)),
            Self::RandomDiscrete { seed, max_points } => {
                let mut builder = RandomSamplerBuilder::new().seed(seed);
                if let Some(cap) = max_points {
                    builder = builder.max_points(cap);
                }
                AnyWalker::Random(builder.build(base, space, factory))
            }
        }
    }
}

/// Either built-in walker, chosen at runtime.
pub enum AnyWalker<F: BuilderFactory> {
    /// Exhaustive cartesian enumeration.
    Cartesian(CartesianEnumerator<F>),
    /// Random sampling without replacement.
    Random(RandomSampler<F>),
}

impl<F: BuilderFactory> SpaceWalker for AnyWalker<F> {
    type Factory = F;
    type Iter<'a>
        = AnyIter<'a, F>
    where
        Self: 'a;

    fn iterator(&self) -> AnyIter<'_, F> {
        match self {
            Self::Cartesian(w) => AnyIter::Cartesian(w.iterator()),
            Self::Random(w) => AnyIter::Random(w.iterator()),
        }
    }

    fn space(&self) -> &HyperParameterSpace {
        match self {
            Self::Cartesian(w) => w.space(),
            Self::Random(w) => w.space(),
        }
    }

    fn base_configuration(&self) -> &ConfigOf<F> {
        match self {
            Self::Cartesian(w) => w.base_configuration(),
            Self::Random(w) => w.base_configuration(),
        }
    }

    fn builder_factory(&self) -> &F {
        match self {
            Self::Cartesian(w) => w.builder_factory(),
            Self::Random(w) => w.builder_factory(),
        }
    }
}

/// Iterator over an [`AnyWalker`].
pub enum AnyIter<'a, F: BuilderFactory> {
    /// Iterator of a cartesian walk.
    Cartesian(CartesianIter<'a, F>),
    /// Iterator of a random walk.
    Random(RandomIter<'a, F>),
}

impl<F: BuilderFactory> HyperSpaceIterator for AnyIter<'_, F> {
    type Config = ConfigOf<F>;

    fn next_configuration(&mut self, previous: Option<&Evaluation>) -> Result<ConfigOf<F>> {
        match self {
            Self::Cartesian(it) => it.next_configuration(previous),
            Self::Random(it) => it.next_configuration(previous),
        }
    }

    fn has_next(&self, previous: Option<&Evaluation>) -> bool {
        match self {
            Self::Cartesian(it) => it.has_next(previous),
            Self::Random(it) => it.has_next(previous),
        }
    }

    fn current_point(&self) -> Option<&Point> {
        match self {
            Self::Cartesian(it) => it.current_point(),
            Self::Random(it) => it.current_point(),
        }
    }

    fn current_raw_values(&self) -> Result<RawValues> {
        match self {
            Self::Cartesian(it) => it.current_raw_values(),
            Self::Random(it) => it.current_raw_values(),
        }
    }

    fn emitted(&self) -> usize {
        match self {
            Self::Cartesian(it) => it.emitted(),
            Self::Random(it) => it.emitted(),
        }
    }
}
