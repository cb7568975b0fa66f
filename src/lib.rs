#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

//! Hyperparameter-space traversal for grid and random search. Given a grid
//! of candidate values and a base configuration, a walker produces a stream
//! of fully resolved configurations for an external trainer to evaluate,
//! either exhaustively in a fixed order or by seeded sampling without
//! replacement.
//!
//! # Getting Started
//!
//! ```
//! use hyperwalk::prelude::*;
//!
//! #[derive(Clone, Debug, Default)]
//! struct GbmParams {
//!     ntrees: i64,
//!     learn_rate: f64,
//! }
//!
//! let space = HyperParameterSpace::builder()
//!     .dimension(Dimension::ints("ntrees", [50, 100]))
//!     .dimension(Dimension::floats("learn_rate", [0.01, 0.1]))
//!     .build()
//!     .unwrap();
//!
//! let factory = FnBuilderFactory::new(|p: &mut GbmParams, name: &str, v: &ParamValue| {
//!     match name {
//!         "ntrees" => p.ntrees = v.as_i64().ok_or_else(|| Error::invalid_value(name, "int"))?,
//!         "learn_rate" => {
//!             p.learn_rate = v.as_f64().ok_or_else(|| Error::invalid_value(name, "float"))?;
//!         }
//!         _ => return Err(Error::UnknownParameter(name.to_string())),
//!     }
//!     Ok(())
//! });
//!
//! let walker = CartesianEnumerator::new(GbmParams::default(), space, factory);
//! let mut it = walker.iterator();
//! while it.has_next(None) {
//!     let params = it.next_configuration(None).unwrap();
//!     println!("train {params:?}");
//! }
//! assert_eq!(it.emitted(), walker.size());
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`HyperParameterSpace`](space::HyperParameterSpace) | Ordered dimensions, each with its candidate values. |
//! | [`Point`](space::Point) | One candidate index per dimension. |
//! | [`BuilderFactory`](builder::BuilderFactory) | Turns a base configuration plus overrides into a resolved configuration. |
//! | [`SpaceWalker`](walker::SpaceWalker) | Strategy owning the space; hands out iterators. |
//! | [`HyperSpaceIterator`](walker::HyperSpaceIterator) | Pull-based traversal state: `has_next` / `next_configuration`. |
//!
//! # Walkers
//!
//! | Walker | Algorithm | Best for |
//! |--------|-----------|----------|
//! | [`CartesianEnumerator`](walker::CartesianEnumerator) | Odometer enumeration | Small grids, full coverage |
//! | [`RandomSampler`](walker::RandomSampler) | Seeded sampling without replacement | Large grids, budgeted search |
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `derive` | `#[derive(Categorical)]` for enum-valued dimensions | off |
//! | `serde` | `Serialize`/`Deserialize` on spaces, values, points and [`SearchCriteria`](walker::SearchCriteria) | off |
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) when walks start, collide and end | off |

/// Emit a `tracing::info!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

pub mod builder;
mod error;
mod param;
pub mod parameter;
pub mod space;
pub mod walker;

pub use error::{Error, Result};
#[cfg(feature = "derive")]
pub use hyperwalk_derive::Categorical;
pub use param::ParamValue;

/// Convenient wildcard import for the most common types.
///
/// ```
/// use hyperwalk::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "derive")]
    pub use hyperwalk_derive::Categorical as DeriveCategorical;

    pub use crate::builder::{BuilderFactory, ConfigurationBuilder, FnBuilderFactory};
    pub use crate::error::{Error, Result};
    pub use crate::param::ParamValue;
    pub use crate::parameter::{Categorical, Dimension};
    pub use crate::space::{HyperParameterSpace, Point, RawValues};
    pub use crate::walker::{
        AnyWalker, CartesianEnumerator, Configurations, Evaluation, HyperSpaceIterator,
        RandomSampler, SearchCriteria, SpaceWalker,
    };
}
