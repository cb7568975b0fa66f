#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when `next_configuration` is called and no point remains.
    #[error("no more points to explore in the hyperparameter space")]
    ExhaustedSpace,

    /// Returned when the random sampler is asked for more unique points than it can emit.
    #[error("sampling budget exhausted: {emitted} of {size} points already emitted")]
    SamplingExhausted {
        /// The number of points emitted so far.
        emitted: usize,
        /// The number of points the sampler may emit in total.
        size: usize,
    },

    /// Returned when every redraw collided and the exhaustive fallback is disabled.
    #[error("random sampling gave up after {attempts} colliding draws")]
    RetryLimitExceeded {
        /// The number of draws attempted.
        attempts: usize,
    },

    /// Returned when a configuration builder rejects a candidate value.
    #[error("invalid value for '{name}': {reason}")]
    InvalidValue {
        /// The name of the rejected dimension.
        name: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// Returned when a configuration builder does not know a dimension name.
    #[error("unknown hyperparameter '{0}'")]
    UnknownParameter(String),

    /// Returned when a point references an index outside a dimension's bounds.
    #[error("index {index} out of range for dimension '{dimension}' with {len} values")]
    IndexOutOfRange {
        /// The name of the dimension.
        dimension: String,
        /// The offending index.
        index: usize,
        /// The number of candidate values of the dimension.
        len: usize,
    },

    /// Returned when a point has a different number of indices than the space has dimensions.
    #[error("point has {got} indices but the space has {expected} dimensions")]
    PointDimensionMismatch {
        /// The number of dimensions of the space.
        expected: usize,
        /// The number of indices in the point.
        got: usize,
    },

    /// Returned when a dimension is declared without candidate values.
    #[error("dimension '{0}' has no candidate values")]
    EmptyDimension(String),

    /// Returned when two dimensions share the same name.
    #[error("dimension '{0}' is declared more than once")]
    DuplicateDimension(String),

    /// Returned when the number of combinations does not fit in a `usize`.
    #[error("hyperparameter space is too large: combination count overflows usize")]
    SpaceTooLarge,

    /// Returned when raw values are requested before the first advance.
    #[error("iterator has not produced a configuration yet")]
    NotStarted,

    /// Returned when the lower bound is greater than the upper bound.
    #[error("invalid bounds: low ({low}) must be less than or equal to high ({high})")]
    InvalidBounds {
        /// The lower bound value.
        low: f64,
        /// The upper bound value.
        high: f64,
    },

    /// Returned when log scale is used with non-positive bounds.
    #[error("invalid log bounds: low must be positive for log scale")]
    InvalidLogBounds,

    /// Returned when step size is not positive.
    #[error("invalid step: step must be positive")]
    InvalidStep,

    /// Returned when an internal invariant is violated.
    #[error("internal error: {0}")]
    Internal(&'static str),
}

impl Error {
    /// Shorthand for [`Error::InvalidValue`], for use inside configuration builders.
    ///
    /// # Examples
    ///
    /// ```
    /// use hyperwalk::Error;
    ///
    /// let err = Error::invalid_value("learning_rate", "must be positive");
    /// assert_eq!(
    ///     err.to_string(),
    ///     "invalid value for 'learning_rate': must be positive"
    /// );
    /// ```
    #[must_use]
    pub fn invalid_value(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Returns `true` if the error signals that iteration must stop.
    ///
    /// Both [`ExhaustedSpace`](Error::ExhaustedSpace) and
    /// [`SamplingExhausted`](Error::SamplingExhausted) qualify.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::ExhaustedSpace | Self::SamplingExhausted { .. })
    }

    /// Returns `true` if no further call can make progress.
    ///
    /// Covers the exhaustion errors as well as
    /// [`RetryLimitExceeded`](Error::RetryLimitExceeded), which repeats on
    /// every call once the retry budget cannot find a fresh point.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.is_exhausted() || matches!(self, Self::RetryLimitExceeded { .. })
    }
}

pub type Result<T> = core::result::Result<T, Error>;
