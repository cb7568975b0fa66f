//! The configuration builder contract consumed by walkers.
//!
//! Walkers know nothing about what a configuration is. For every point they
//! ask a [`BuilderFactory`] for a fresh [`ConfigurationBuilder`] seeded from
//! the base configuration, feed it one `(name, value)` override per dimension
//! in space order, and call [`build`](ConfigurationBuilder::build). The base
//! configuration is only ever borrowed.
//!
//! [`FnBuilderFactory`] covers the common case where applying an override is
//! a single function over a private clone of the base configuration.

use core::fmt;
use core::marker::PhantomData;

use crate::error::Result;
use crate::param::ParamValue;

/// Accumulates overrides and produces a resolved configuration.
pub trait ConfigurationBuilder {
    /// The configuration type produced.
    type Config;

    /// Records one override.
    ///
    /// # Errors
    ///
    /// Implementations may reject the value eagerly, typically with
    /// [`Error::InvalidValue`](crate::Error::InvalidValue) or
    /// [`Error::UnknownParameter`](crate::Error::UnknownParameter).
    fn set(&mut self, name: &str, value: &ParamValue) -> Result<()>;

    /// Produces the resolved configuration.
    ///
    /// # Errors
    ///
    /// Implementations may reject the combination of overrides as a whole.
    fn build(self) -> Result<Self::Config>;
}

/// Hands out a fresh builder per resolved configuration.
pub trait BuilderFactory {
    /// The configuration type walked over.
    type Config: Clone;

    /// The builder type handed out.
    type Builder<'a>: ConfigurationBuilder<Config = Self::Config>
    where
        Self: 'a;

    /// Returns a builder that starts from a copy of `base`.
    fn builder<'a>(&'a self, base: &Self::Config) -> Self::Builder<'a>;
}

/// A [`BuilderFactory`] backed by a closure that applies one override to a
/// private clone of the base configuration.
///
/// # Examples
///
/// ```
/// use hyperwalk::builder::{BuilderFactory, ConfigurationBuilder, FnBuilderFactory};
/// use hyperwalk::{Error, ParamValue};
///
/// #[derive(Clone, Debug, Default)]
/// struct Params {
///     ntrees: i64,
/// }
///
/// let factory = FnBuilderFactory::new(|p: &mut Params, name: &str, value: &ParamValue| {
///     match name {
///         "ntrees" => {
///             p.ntrees = value
///                 .as_i64()
///                 .ok_or_else(|| Error::invalid_value(name, "expected int"))?;
///             Ok(())
///         }
///         _ => Err(Error::UnknownParameter(name.to_string())),
///     }
/// });
///
/// let base = Params::default();
/// let mut builder = factory.builder(&base);
/// builder.set("ntrees", &ParamValue::Int(50)).unwrap();
/// assert_eq!(builder.build().unwrap().ntrees, 50);
/// assert_eq!(base.ntrees, 0);
/// ```
pub struct FnBuilderFactory<C, F> {
    apply: F,
    _marker: PhantomData<fn(&mut C)>,
}

impl<C, F> FnBuilderFactory<C, F> {
    /// Wraps an override function.
    #[must_use]
    pub fn new(apply: F) -> Self
    where
        C: Clone,
        F: Fn(&mut C, &str, &ParamValue) -> Result<()>,
    {
        Self {
            apply,
            _marker: PhantomData,
        }
    }
}

impl<C, F> fmt::Debug for FnBuilderFactory<C, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnBuilderFactory").finish_non_exhaustive()
    }
}

impl<C, F> BuilderFactory for FnBuilderFactory<C, F>
where
    C: Clone,
    F: Fn(&mut C, &str, &ParamValue) -> Result<()>,
{
    type Config = C;
    type Builder<'a>
        = FnBuilder<'a, C, F>
    where
        Self: 'a;

    fn builder<'a>(&'a self, base: &C) -> FnBuilder<'a, C, F> {
        FnBuilder {
            config: base.clone(),
            apply: &self.apply,
        }
    }
}

/// Builder handed out by [`FnBuilderFactory`].
pub struct FnBuilder<'a, C, F> {
    config: C,
    apply: &'a F,
}

impl<C, F> ConfigurationBuilder for FnBuilder<'_, C, F>
where
    F: Fn(&mut C, &str, &ParamValue) -> Result<()>,
{
    type Config = C;

    fn set(&mut self, name: &str, value: &ParamValue) -> Result<()> {
        (self.apply)(&mut self.config, name, value)
    }

    fn build(self) -> Result<C> {
        Ok(self.config)
    }
}
