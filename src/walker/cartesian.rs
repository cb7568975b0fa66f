//! Exhaustive cartesian enumeration.
//!
//! `CartesianEnumerator` visits every point of the space exactly once, in
//! mixed-radix (odometer) order with dimension 0 varying fastest. This is
//! equivalent to nested loops with the first dimension innermost.

use crate::builder::BuilderFactory;
use crate::error::{Error, Result};
use crate::space::{HyperParameterSpace, Point, RawValues};
use crate::walker::{ConfigOf, Evaluation, HyperSpaceIterator, SpaceWalker, WalkerCore};

/// A walker that enumerates the full cartesian product of a space.
///
/// # Examples
///
/// ```
/// use hyperwalk::builder::FnBuilderFactory;
/// use hyperwalk::space::HyperParameterSpace;
/// use hyperwalk::walker::{CartesianEnumerator, HyperSpaceIterator, SpaceWalker};
/// use hyperwalk::ParamValue;
///
/// let space = HyperParameterSpace::builder()
///     .values("a", [0_i64, 1])
///     .values("b", [0_i64, 1, 2])
///     .build()
///     .unwrap();
/// let factory = FnBuilderFactory::new(|c: &mut Vec<i64>, _: &str, v: &ParamValue| {
///     c.push(v.as_i64().unwrap_or_default());
///     Ok(())
/// });
/// let walker = CartesianEnumerator::new(Vec::new(), space, factory);
///
/// let mut it = walker.iterator();
/// let mut seen = Vec::new();
/// while it.has_next(None) {
///     seen.push(it.next_configuration(None).unwrap());
/// }
/// assert_eq!(
///     seen,
///     vec![
///         vec![0, 0],
///         vec![1, 0],
///         vec![0, 1],
///         vec![1, 1],
///         vec![0, 2],
///         vec![1, 2],
///     ]
/// );
/// ```
pub struct CartesianEnumerator<F: BuilderFactory> {
    core: WalkerCore<F>,
}

impl<F: BuilderFactory> CartesianEnumerator<F> {
    /// Creates a cartesian walker over `space`, resolving points from `base`.
    #[must_use]
    pub fn new(base: ConfigOf<F>, space: HyperParameterSpace, factory: F) -> Self {
        trace_info!(
            size = space.size(),
            dimensions = space.len(),
            "cartesian walker created"
        );
        Self {
            core: WalkerCore::new(base, space, factory),
        }
    }
}

impl<F: BuilderFactory> SpaceWalker for CartesianEnumerator<F> {
    type Factory = F;
    type Iter<'a>
        = CartesianIter<'a, F>
    where
        Self: 'a;

    fn iterator(&self) -> CartesianIter<'_, F> {
        CartesianIter {
            core: &self.core,
            current: None,
            emitted: 0,
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

/// Iterator over a [`CartesianEnumerator`].
///
/// Holds the last emitted point; `None` until the first advance.
pub struct CartesianIter<'a, F: BuilderFactory> {
    core: &'a WalkerCore<F>,
    current: Option<Point>,
    emitted: usize,
}

impl<F: BuilderFactory> HyperSpaceIterator for CartesianIter<'_, F> {
    type Config = ConfigOf<F>;

    fn next_configuration(&mut self, _previous: Option<&Evaluation>) -> Result<ConfigOf<F>> {
        let space = self.core.space();
        let point = match self.current.take() {
            None => Point::origin(space.len()),
            Some(mut point) => {
                if !point.advance(space.radices()) {
                    trace_debug!(emitted = self.emitted, "cartesian walk exhausted");
                    self.current = Some(point);
                    return Err(Error::ExhaustedSpace);
                }
                point
            }
        };
        let point = self.current.insert(point);
        self.emitted += 1;
        self.core.resolve(point)
    }

    fn has_next(&self, _previous: Option<&Evaluation>) -> bool {
        self.current
            .as_ref()
            .is_none_or(|point| point.can_advance(self.core.space().radices()))
    }

    fn current_point(&self) -> Option<&Point> {
        self.current.as_ref()
    }

    fn current_raw_values(&self) -> Result<RawValues> {
        self.core.raw_values(self.current.as_ref())
    }

    fn emitted(&self) -> usize {
        self.emitted
    }
}
