//! Candidate value type shared by every dimension.

use core::fmt;

/// A single candidate value of a hyperparameter dimension.
///
/// Dimensions are heterogeneous: one space may mix learning rates,
/// layer counts, flags and solver names. Configuration builders match on
/// the variant they expect and reject the others with
/// [`Error::InvalidValue`](crate::Error::InvalidValue).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParamValue {
    /// A floating-point value.
    Float(f64),
    /// An integer value.
    Int(i64),
    /// A boolean flag.
    Bool(bool),
    /// A free-form categorical choice.
    Categorical(String),
    /// The variant name of an enum implementing
    /// [`Categorical`](crate::parameter::Categorical).
    Enum(String),
}

impl ParamValue {
    /// Returns the value as `f64` for `Float` and `Int` variants.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            Self::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// Returns the value for the `Int` variant.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the value for the `Bool` variant.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the string for `Categorical` and `Enum` variants.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Categorical(s) | Self::Enum(s) => Some(s),
            _ => None,
        }
    }

    /// Short name of the variant, used in builder error messages.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Float(_) => "float",
            Self::Int(_) => "int",
            Self::Bool(_) => "bool",
            Self::Categorical(_) => "categorical",
            Self::Enum(_) => "enum",
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Float(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Categorical(s) | Self::Enum(s) => f.write_str(s),
        }
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        Self::Categorical(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        Self::Categorical(v)
    }
}
