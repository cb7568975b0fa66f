//! The hyperparameter space, its points, and the shared indexing helpers.
//!
//! A [`HyperParameterSpace`] is an ordered list of [`Dimension`]s. A [`Point`]
//! picks one candidate index per dimension; [`HyperParameterSpace::values_at`]
//! turns it into the concrete [`RawValues`] handed to a configuration builder.
//!
//! Points are read as mixed-radix numbers with dimension 0 as the
//! fastest-varying digit. The odometer helpers on [`Point`] implement that
//! ordering for the cartesian walker, and [`Point::from_ordinal`] lets the
//! random sampler address points by their position in it.

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::param::ParamValue;
use crate::parameter::Dimension;

/// One combination of candidate indices, one per dimension.
///
/// Two points are equal iff all their indices are equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point(Vec<usize>);

impl Point {
    /// Creates a point from raw indices.
    #[must_use]
    pub fn new(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    /// The all-zero point of a `k`-dimensional space.
    #[must_use]
    pub fn origin(k: usize) -> Self {
        Self(vec![0; k])
    }

    /// Returns the candidate index chosen for each dimension.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Returns the number of dimensions the point spans.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` for the point of a zero-dimensional space.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the position of the first digit that can still be incremented,
    /// scanning from dimension 0 upward.
    fn carry_position(&self, radices: &[usize]) -> Option<usize> {
        self.0
            .iter()
            .zip(radices)
            .position(|(&index, &radix)| index + 1 < radix)
    }

    /// Returns `true` if [`advance`](Self::advance) would succeed.
    ///
    /// This is the non-mutating twin of `advance`; both must agree.
    #[must_use]
    pub fn can_advance(&self, radices: &[usize]) -> bool {
        self.carry_position(radices).is_some()
    }

    /// Steps the point to its odometer successor.
    ///
    /// Finds the lowest dimension `i` that is not at its last candidate,
    /// resets dimensions `0..i` to zero and increments dimension `i`.
    /// Returns `false`, leaving the point untouched, once every dimension
    /// is at its last candidate.
    pub fn advance(&mut self, radices: &[usize]) -> bool {
        let Some(i) = self.carry_position(radices) else {
            return false;
        };
        self.0[..i].fill(0);
        self.0[i] += 1;
        true
    }

    /// Returns the position of this point in odometer order.
    ///
    /// The caller guarantees that the point is in range for `radices` and
    /// that the product of `radices` fits in a `usize`.
    #[must_use]
    pub fn ordinal(&self, radices: &[usize]) -> usize {
        self.0
            .iter()
            .zip(radices)
            .rev()
            .fold(0, |acc, (&index, &radix)| acc * radix + index)
    }

    /// Returns the point found at `ordinal` in odometer order.
    #[must_use]
    pub fn from_ordinal(mut ordinal: usize, radices: &[usize]) -> Self {
        let indices = radices
            .iter()
            .map(|&radix| {
                let digit = ordinal % radix;
                ordinal /= radix;
                digit
            })
            .collect();
        Self(indices)
    }
}

impl From<Vec<usize>> for Point {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

/// The concrete candidate values selected by a [`Point`], paired with their
/// dimension names in space order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawValues {
    entries: Vec<(String, ParamValue)>,
}

impl RawValues {
    /// Returns the value chosen for the named dimension.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Returns the values in dimension order, without their names.
    pub fn values(&self) -> impl Iterator<Item = &ParamValue> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Iterates `(name, value)` pairs in dimension order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Returns the number of dimensions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` for the values of a zero-dimensional space.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A finite grid of candidate hyperparameter values.
///
/// Dimension order is fixed at construction and never re-sorted; it defines
/// both the indexing of [`Point`]s and the order in which overrides reach a
/// configuration builder. The combination count is computed once with
/// overflow checking.
///
/// The space is immutable and `Sync`, so any number of iterators may read
/// it concurrently.
///
/// # Examples
///
/// ```
/// use hyperwalk::parameter::Dimension;
/// use hyperwalk::space::{HyperParameterSpace, Point};
///
/// let space = HyperParameterSpace::builder()
///     .dimension(Dimension::ints("ntrees", [50, 100]))
///     .dimension(Dimension::floats("learn_rate", [0.01, 0.1, 0.3]))
///     .build()
///     .unwrap();
///
/// assert_eq!(space.names(), &["ntrees", "learn_rate"]);
/// assert_eq!(space.size(), 6);
///
/// let raw = space.values_at(&Point::new(vec![1, 2])).unwrap();
/// assert_eq!(raw.get("ntrees").and_then(|v| v.as_i64()), Some(100));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Dimension>", into = "Vec<Dimension>")
)]
pub struct HyperParameterSpace {
    dimensions: Vec<Dimension>,
    names: Vec<String>,
    radices: Vec<usize>,
    size: usize,
}

impl HyperParameterSpace {
    /// Creates a builder for a space.
    #[must_use]
    pub fn builder() -> HyperParameterSpaceBuilder {
        HyperParameterSpaceBuilder::new()
    }

    /// Creates a space from dimensions, in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyDimension`] if a dimension has no candidates,
    /// [`Error::DuplicateDimension`] if a name repeats, and
    /// [`Error::SpaceTooLarge`] if the combination count overflows `usize`.
    pub fn new(dimensions: Vec<Dimension>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(dimensions.len());
        let mut size: usize = 1;
        for dim in &dimensions {
            if dim.is_empty() {
                return Err(Error::EmptyDimension(dim.name().to_string()));
            }
            if !seen.insert(dim.name()) {
                return Err(Error::DuplicateDimension(dim.name().to_string()));
            }
            size = size.checked_mul(dim.len()).ok_or(Error::SpaceTooLarge)?;
        }

        let names = dimensions.iter().map(|d| d.name().to_string()).collect();
        let radices = dimensions.iter().map(Dimension::len).collect();

        Ok(Self {
            dimensions,
            names,
            radices,
            size,
        })
    }

    /// Returns the dimension names in their fixed order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns the total number of combinations, the product of all
    /// dimension lengths. Always at least 1.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of dimensions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dimensions.len()
    }

    /// Returns `true` if the space has no dimensions.
    ///
    /// Such a space still has one point, which resolves to the base
    /// configuration unchanged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty()
    }

    /// Returns the dimensions in order.
    #[must_use]
    pub fn dimensions(&self) -> &[Dimension] {
        &self.dimensions
    }

    /// Looks a dimension up by name.
    #[must_use]
    pub fn dimension(&self, name: &str) -> Option<&Dimension> {
        self.dimensions.iter().find(|d| d.name() == name)
    }

    /// Returns the number of candidates of each dimension, in order.
    #[must_use]
    pub fn radices(&self) -> &[usize] {
        &self.radices
    }

    /// Resolves a point into its concrete candidate values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PointDimensionMismatch`] if the point does not span
    /// exactly this space's dimensions and [`Error::IndexOutOfRange`] if an
    /// index exceeds its dimension.
    pub fn values_at(&self, point: &Point) -> Result<RawValues> {
        if point.len() != self.dimensions.len() {
            return Err(Error::PointDimensionMismatch {
                expected: self.dimensions.len(),
                got: point.len(),
            });
        }

        let entries = self
            .dimensions
            .iter()
            .zip(point.indices())
            .map(|(dim, &index)| {
                dim.values()
                    .get(index)
                    .map(|value| (dim.name().to_string(), value.clone()))
                    .ok_or_else(|| Error::IndexOutOfRange {
                        dimension: dim.name().to_string(),
                        index,
                        len: dim.len(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(RawValues { entries })
    }
}

impl TryFrom<Vec<Dimension>> for HyperParameterSpace {
    type Error = Error;

    fn try_from(dimensions: Vec<Dimension>) -> Result<Self> {
        Self::new(dimensions)
    }
}

impl From<HyperParameterSpace> for Vec<Dimension> {
    fn from(space: HyperParameterSpace) -> Self {
        space.dimensions
    }
}

/// Builder for a [`HyperParameterSpace`].
///
/// # Examples
///
/// ```
/// use hyperwalk::space::HyperParameterSpace;
///
/// let space = HyperParameterSpace::builder()
///     .values("max_depth", [3_i64, 5, 7])
///     .values("col_sample_rate", [0.5, 1.0])
///     .build()
///     .unwrap();
///
/// assert_eq!(space.size(), 6);
/// ```
#[derive(Clone, Debug, Default)]
pub struct HyperParameterSpaceBuilder {
    dimensions: Vec<Dimension>,
}

impl HyperParameterSpaceBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a dimension.
    #[must_use]
    pub fn dimension(mut self, dimension: Dimension) -> Self {
        self.dimensions.push(dimension);
        self
    }

    /// Appends a dimension built from an explicit value list.
    #[must_use]
    pub fn values<I, V>(self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<ParamValue>,
    {
        self.dimension(Dimension::new(name, values))
    }

    /// Builds and validates the space.
    ///
    /// # Errors
    ///
    /// See [`HyperParameterSpace::new`].
    pub fn build(self) -> Result<HyperParameterSpace> {
        HyperParameterSpace::new(self.dimensions)
    }
}
