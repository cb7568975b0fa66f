//! Dimension definitions and the [`Categorical`] trait for enum-valued dimensions.
//!
//! A [`Dimension`] is a hyperparameter name together with its ordered list of
//! candidate values. Constructors cover explicit value lists as well as
//! evenly spaced discretisations of numeric ranges.
//!
//! # Example
//!
//! ```
//! use hyperwalk::parameter::Dimension;
//!
//! let ntrees = Dimension::ints("ntrees", [50, 100, 200]);
//! let lr = Dimension::float_grid("learn_rate", 1e-3, 1e-1, 3, true).unwrap();
//! let depth = Dimension::int_range("max_depth", 2, 10, 4).unwrap();
//!
//! assert_eq!(ntrees.len(), 3);
//! assert_eq!(lr.len(), 3);
//! assert_eq!(depth.len(), 3); // 2, 6, 10
//! ```

use crate::error::{Error, Result};
use crate::param::ParamValue;

/// A trait for enum types that can be used as enumerated dimensions.
///
/// This trait maps enum variants to sequential indices and names and back.
/// It can be derived automatically for fieldless enums using
/// `#[derive(Categorical)]` when the `derive` feature is enabled.
///
/// # Example
///
/// Manual implementation:
///
/// ```
/// use hyperwalk::parameter::Categorical;
///
/// #[derive(Clone, Debug, PartialEq)]
/// enum Distribution {
///     Gaussian,
///     Poisson,
/// }
///
/// impl Categorical for Distribution {
///     const N_CHOICES: usize = 2;
///
///     fn from_index(index: usize) -> Self {
///         match index {
///             0 => Distribution::Gaussian,
///             1 => Distribution::Poisson,
///             _ => panic!("invalid index"),
///         }
///     }
///
///     fn to_index(&self) -> usize {
///         match self {
///             Distribution::Gaussian => 0,
///             Distribution::Poisson => 1,
///         }
///     }
///
///     fn variant_name(&self) -> &'static str {
///         match self {
///             Distribution::Gaussian => "Gaussian",
///             Distribution::Poisson => "Poisson",
///         }
///     }
/// }
///
/// assert_eq!(
///     Distribution::from_variant_name("Poisson"),
///     Some(Distribution::Poisson)
/// );
/// ```
pub trait Categorical: Sized + Clone {
    /// The number of variants in the enum.
    const N_CHOICES: usize;

    /// Creates an instance from a variant index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N_CHOICES`.
    fn from_index(index: usize) -> Self;

    /// Returns the index of this variant.
    fn to_index(&self) -> usize;

    /// Returns the name of this variant, as written in the enum declaration.
    fn variant_name(&self) -> &'static str;

    /// Looks a variant up by name.
    fn from_variant_name(name: &str) -> Option<Self> {
        (0..Self::N_CHOICES)
            .map(Self::from_index)
            .find(|v| v.variant_name() == name)
    }
}

/// One hyperparameter name together with its ordered candidate values.
///
/// Candidate order is preserved; index `j` of a [`Point`](crate::space::Point)
/// always refers to `values()[j]`. Duplicated values are kept as given and
/// count towards the space size.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimension {
    name: String,
    values: Vec<ParamValue>,
}

impl Dimension {
    /// Creates a dimension from an explicit list of candidate values.
    ///
    /// Emptiness is checked when the dimension is added to a
    /// [`HyperParameterSpace`](crate::space::HyperParameterSpace).
    #[must_use]
    pub fn new<I, V>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<ParamValue>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a dimension of floating-point candidates.
    #[must_use]
    pub fn floats(name: impl Into<String>, values: impl IntoIterator<Item = f64>) -> Self {
        Self::new(name, values)
    }

    /// Creates a dimension of integer candidates.
    #[must_use]
    pub fn ints(name: impl Into<String>, values: impl IntoIterator<Item = i64>) -> Self {
        Self::new(name, values)
    }

    /// Creates a boolean dimension with candidates `[false, true]`.
    #[must_use]
    pub fn bools(name: impl Into<String>) -> Self {
        Self::new(name, [false, true])
    }

    /// Creates a dimension of free-form categorical choices.
    #[must_use]
    pub fn categorical<I, S>(name: impl Into<String>, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            values: choices
                .into_iter()
                .map(|c| ParamValue::Categorical(c.into()))
                .collect(),
        }
    }

    /// Creates a dimension over every variant of `T`, in index order.
    ///
    /// Values are [`ParamValue::Enum`] holding the variant name; builders can
    /// recover the variant with [`Categorical::from_variant_name`].
    #[must_use]
    pub fn enumeration<T: Categorical>(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: (0..T::N_CHOICES)
                .map(|i| ParamValue::Enum(T::from_index(i).variant_name().to_string()))
                .collect(),
        }
    }

    /// Creates an integer dimension with candidates `low, low+step, ...` up to `high`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStep`] if `step` is not positive and
    /// [`Error::InvalidBounds`] if `low > high`.
    #[allow(clippy::cast_precision_loss)]
    pub fn int_range(name: impl Into<String>, low: i64, high: i64, step: i64) -> Result<Self> {
        if step <= 0 {
            return Err(Error::InvalidStep);
        }
        if low > high {
            return Err(Error::InvalidBounds {
                low: low as f64,
                high: high as f64,
            });
        }

        let mut values = Vec::new();
        let mut current = low;
        while current <= high {
            values.push(ParamValue::Int(current));
            match current.checked_add(step) {
                Some(next) => current = next,
                None => break,
            }
        }

        Ok(Self {
            name: name.into(),
            values,
        })
    }

    /// Creates a float dimension of `n_points` candidates evenly spaced from
    /// `low` to `high`, inclusive. With `log_scale` the spacing is even in
    /// log space.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBounds`] if either bound is not finite or
    /// `low > high`,
    /// [`Error::InvalidLogBounds`] if `log_scale` is set and `low <= 0`, and
    /// [`Error::EmptyDimension`] if `n_points` is zero.
    pub fn float_grid(
        name: impl Into<String>,
        low: f64,
        high: f64,
        n_points: usize,
        log_scale: bool,
    ) -> Result<Self> {
        let name = name.into();
        if !low.is_finite() || !high.is_finite() || low > high {
            return Err(Error::InvalidBounds { low, high });
        }
        if log_scale && low <= 0.0 {
            return Err(Error::InvalidLogBounds);
        }
        if n_points == 0 {
            return Err(Error::EmptyDimension(name));
        }

        let points = if log_scale {
            linear_points(low.ln(), high.ln(), n_points)
                .into_iter()
                .map(f64::exp)
                .map(|v| v.clamp(low, high))
                .collect()
        } else {
            linear_points(low, high, n_points)
        };

        Ok(Self {
            name,
            values: points.into_iter().map(ParamValue::Float).collect(),
        })
    }

    /// Returns the dimension name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the ordered candidate values.
    #[must_use]
    pub fn values(&self) -> &[ParamValue] {
        &self.values
    }

    /// Returns the number of candidate values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the dimension has no candidate values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Evenly spaced floats from `low` to `high`, both ends included.
#[allow(clippy::cast_precision_loss)]
fn linear_points(low: f64, high: f64, n_points: usize) -> Vec<f64> {
    if n_points == 1 {
        return vec![low];
    }

    let range = high - low;
    (0..n_points)
        .map(|i| {
            if i == n_points - 1 {
                high
            } else {
                low + (i as f64 / (n_points - 1) as f64) * range
            }
        })
        .collect()
}
