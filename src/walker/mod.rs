//! Walker contract and traversal strategies.
//!
//! A [`SpaceWalker`] owns a base configuration, a [`HyperParameterSpace`]
//! and a [`BuilderFactory`]. It hands out any number of independent
//! [`HyperSpaceIterator`]s; each iterator keeps its own traversal state and
//! borrows the walker read-only.
//!
//! | Walker | Order | Repeats |
//! |--------|-------|---------|
//! | [`CartesianEnumerator`] | Odometer, dimension 0 fastest | Never; every point once |
//! | [`RandomSampler`] | Seeded uniform draws | Never; rejection sampling with bounded retries |
//! | [`AnyWalker`] | Chosen at runtime from [`SearchCriteria`] | Per strategy |

pub mod cartesian;
pub mod criteria;
pub mod random;

pub use cartesian::{CartesianEnumerator, CartesianIter};
pub use criteria::{AnyIter, AnyWalker, SearchCriteria};
pub use random::{RandomIter, RandomSampler, RandomSamplerBuilder};

use crate::builder::{BuilderFactory, ConfigurationBuilder};
use crate::error::{Error, Result};
use crate::space::{HyperParameterSpace, Point, RawValues};

/// The configuration type produced by a factory.
pub type ConfigOf<F> = <F as BuilderFactory>::Config;

/// The outcome of evaluating a previously emitted configuration.
///
/// Iterators accept it on every call so that adaptive strategies can steer
/// the walk. Both built-in strategies ignore it.
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    /// The raw values of the evaluated point.
    pub values: RawValues,
    /// The score reported by the trainer, if any.
    pub score: Option<f64>,
}

impl Evaluation {
    /// Creates an evaluation record.
    #[must_use]
    pub fn new(values: RawValues, score: Option<f64>) -> Self {
        Self { values, score }
    }
}

/// Pull-based traversal over a hyperparameter space.
///
/// Not meant to be shared between threads; create one iterator per driver.
pub trait HyperSpaceIterator {
    /// The configuration type produced.
    type Config;

    /// Advances to the next point and resolves it into a configuration.
    ///
    /// # Errors
    ///
    /// Returns an exhaustion error (see [`Error::is_exhausted`])
    /// when no point remains, and propagates builder errors unchanged.
    fn next_configuration(&mut self, previous: Option<&Evaluation>) -> Result<Self::Config>;

    /// Returns `true` iff the next call to
    /// [`next_configuration`](Self::next_configuration) can produce a point.
    ///
    /// Never advances the traversal or consumes randomness.
    fn has_next(&self, previous: Option<&Evaluation>) -> bool;

    /// Returns the point produced by the last successful advance.
    fn current_point(&self) -> Option<&Point>;

    /// Returns the raw values of the last point produced.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotStarted`] before the first advance.
    fn current_raw_values(&self) -> Result<RawValues>;

    /// Returns how many points have been produced so far.
    fn emitted(&self) -> usize;
}

/// A traversal strategy over a fixed space.
pub trait SpaceWalker {
    /// The builder factory used to resolve points.
    type Factory: BuilderFactory;

    /// The iterator type handed out.
    type Iter<'a>: HyperSpaceIterator<Config = ConfigOf<Self::Factory>>
    where
        Self: 'a;

    /// Returns a fresh iterator with its own traversal state.
    fn iterator(&self) -> Self::Iter<'_>;

    /// Returns the walked space.
    fn space(&self) -> &HyperParameterSpace;

    /// Returns the base configuration every point is resolved from.
    fn base_configuration(&self) -> &ConfigOf<Self::Factory>;

    /// Returns the builder factory.
    fn builder_factory(&self) -> &Self::Factory;

    /// Returns the dimension names in their fixed order.
    fn names(&self) -> &[String] {
        self.space().names()
    }

    /// Returns the number of points in the space.
    fn size(&self) -> usize {
        self.space().size()
    }

    /// Returns a standard [`Iterator`] over resolved configurations.
    fn configurations(&self) -> Configurations<Self::Iter<'_>> {
        Configurations::new(self.iterator())
    }
}

/// State shared by every strategy: the immutable inputs of a walk.
pub(crate) struct WalkerCore<F: BuilderFactory> {
    base: ConfigOf<F>,
    space: HyperParameterSpace,
    factory: F,
}

impl<F: BuilderFactory> WalkerCore<F> {
    pub(crate) fn new(base: ConfigOf<F>, space: HyperParameterSpace, factory: F) -> Self {
        Self {
            base,
            space,
            factory,
        }
    }

    pub(crate) fn base(&self) -> &ConfigOf<F> {
        &self.base
    }

    pub(crate) fn space(&self) -> &HyperParameterSpace {
        &self.space
    }

    pub(crate) fn factory(&self) -> &F {
        &self.factory
    }

    /// Resolves a point through a fresh builder, overriding in dimension order.
    pub(crate) fn resolve(&self, point: &Point) -> Result<ConfigOf<F>> {
        let raw = self.space.values_at(point)?;
        let mut builder = self.factory.builder(&self.base);
        for (name, value) in raw.iter() {
            builder.set(name, value)?;
        }
        builder.build()
    }

    pub(crate) fn raw_values(&self, point: Option<&Point>) -> Result<RawValues> {
        let point = point.ok_or(Error::NotStarted)?;
        self.space.values_at(point)
    }
}

/// Adapts a [`HyperSpaceIterator`] to [`Iterator`].
///
/// Yields until [`has_next`](HyperSpaceIterator::has_next) turns false or an
/// exhaustion error is returned. A retry-limit error is yielded once and ends
/// the iteration. Builder errors are yielded and iteration continues with the
/// next point.
///
/// # Examples
///
/// ```
/// use hyperwalk::builder::FnBuilderFactory;
/// use hyperwalk::space::HyperParameterSpace;
/// use hyperwalk::walker::{CartesianEnumerator, SpaceWalker};
/// use hyperwalk::{ParamValue, Result};
///
/// let space = HyperParameterSpace::builder()
///     .values("depth", [1_i64, 2, 3])
///     .build()
///     .unwrap();
/// let factory = FnBuilderFactory::new(|d: &mut i64, _: &str, v: &ParamValue| {
///     *d = v.as_i64().unwrap_or_default();
///     Ok(())
/// });
/// let walker = CartesianEnumerator::new(0_i64, space, factory);
///
/// let depths: Vec<i64> = walker.configurations().collect::<Result<_>>().unwrap();
/// assert_eq!(depths, vec![1, 2, 3]);
/// ```
pub struct Configurations<I> {
    inner: I,
    done: bool,
}

impl<I: HyperSpaceIterator> Configurations<I> {
    /// Wraps a walker iterator.
    #[must_use]
    pub fn new(inner: I) -> Self {
        Self { inner, done: false }
    }

    /// Returns the wrapped iterator, e.g. to inspect raw values.
    #[must_use]
    pub fn inner(&self) -> &I {
        &self.inner
    }

    /// Unwraps the adapter.
    #[must_use]
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I: HyperSpaceIterator> Iterator for Configurations<I> {
    type Item = Result<I::Config>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || !self.inner.has_next(None) {
            self.done = true;
            return None;
        }
        match self.inner.next_configuration(None) {
            Err(e) if e.is_exhausted() => {
                self.done = true;
                None
            }
            Err(e) if e.is_terminal() => {
                self.done = true;
                Some(Err(e))
            }
            other => Some(other),
        }
    }
}

impl<I: HyperSpaceIterator> core::iter::FusedIterator for Configurations<I> {}
