// crates/core/src/check.rs
use std::{borrow::Cow, fmt};

use guard_clauses_shared_kernel::GuardError;

use crate::LOG_TARGET;

pub type ErrorFactory<'a, E> = Box<dyn FnOnce() -> E + 'a>;
pub type ValueErrorFactory<'a, T, E> = Box<dyn FnOnce(&T) -> E + 'a>;
pub type BoundaryErrorFactory<'a, T, B, E> = Box<dyn FnOnce(&T, &B) -> E + 'a>;

/// How a failing assertion reports itself.
///
/// When a violation is detected the first configured strategy wins:
///
/// 1. the parameterless factory,
/// 2. the factory receiving the checked value,
/// 3. the factory receiving the value and the boundary (or range),
/// 4. the default [`GuardError`], converted into `E`, whose message is the
///    custom message if one was given or a description built from the
///    parameter name, the boundary and the actual value.
///
/// `T` is the checked type, `B` the boundary type (`T` itself for pairwise
/// comparisons, `Range<T>` for membership checks). Presence checks on
/// `Option` use `T = B = ()`: their value and boundary factories only ever
/// receive `&()`, so [`Check::raising`] is the one that carries information
/// there.
///
/// [`Check::new`] and [`Check::named`] fix `E` to [`GuardError`]. To keep the
/// default error but report it as a caller error type, use
/// [`Check::unconfigured`] or [`Check::named_as`].
///
/// # Examples
///
/// ```rust
/// # use guard_clauses_core::{Check, ComparableAssertions};
/// let port = 8080_u16.must_be_greater_than(1023, Check::named("port")).unwrap();
/// assert_eq!(port, 8080);
///
/// let err = 80_u16.must_be_greater_than(1023, Check::named("port")).unwrap_err();
/// assert_eq!(err.to_string(), "port must be greater than 1023, but it actually is 80.");
/// ```
#[must_use = "a Check does nothing until it is passed to an assertion"]
pub struct Check<'a, T, B = T, E = GuardError> {
    parameter_name: Option<Cow<'a, str>>,
    message: Option<Cow<'a, str>>,
    error_factory: Option<ErrorFactory<'a, E>>,
    value_error_factory: Option<ValueErrorFactory<'a, T, E>>,
    boundary_error_factory: Option<BoundaryErrorFactory<'a, T, B, E>>,
}

impl<'a, T, B> Check<'a, T, B> {
    /// Default reporting without a parameter name.
    #[inline]
    pub fn new() -> Self {
        Self::empty()
    }

    /// Default reporting naming the checked parameter.
    #[inline]
    pub fn named(parameter_name: impl Into<Cow<'a, str>>) -> Self {
        Self::empty().with_parameter_name(parameter_name)
    }
}

impl<T, B> Default for Check<'_, T, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T, B, E> Check<'a, T, B, E> {
    #[inline]
    fn empty() -> Self {
        Self {
            parameter_name: None,
            message: None,
            error_factory: None,
            value_error_factory: None,
            boundary_error_factory: None,
        }
    }

    /// Default reporting into any error type that wraps [`GuardError`].
    #[inline]
    pub fn unconfigured() -> Self
    where
        E: From<GuardError>,
    {
        Self::empty()
    }

    /// Like [`Check::named`], but the default error is converted into `E`.
    ///
    /// ```rust
    /// # use guard_clauses_core::{Check, ComparableAssertions, GuardError};
    /// #[derive(Debug)]
    /// enum AppError {
    ///     Guard(GuardError),
    /// }
    ///
    /// impl From<GuardError> for AppError {
    ///     fn from(error: GuardError) -> Self {
    ///         Self::Guard(error)
    ///     }
    /// }
    ///
    /// let err = 0_u32.must_be_greater_than(0, Check::<_, _, AppError>::named_as("count")).unwrap_err();
    /// let AppError::Guard(inner) = err;
    /// assert_eq!(inner.parameter_name(), Some("count"));
    /// ```
    #[inline]
    pub fn named_as(parameter_name: impl Into<Cow<'a, str>>) -> Self
    where
        E: From<GuardError>,
    {
        Self::empty().with_parameter_name(parameter_name)
    }

    /// Reports violations with the error produced by `factory`.
    #[inline]
    pub fn raising(factory: impl FnOnce() -> E + 'a) -> Self {
        Self::empty().or_raising(factory)
    }

    /// Reports violations with the error `factory` builds from the checked value.
    #[inline]
    pub fn raising_with_value(factory: impl FnOnce(&T) -> E + 'a) -> Self {
        Self::empty().or_raising_with_value(factory)
    }

    /// Reports violations with the error `factory` builds from the checked
    /// value and the boundary or range it was checked against.
    #[inline]
    pub fn raising_with_boundary(factory: impl FnOnce(&T, &B) -> E + 'a) -> Self {
        Self::empty().or_raising_with_boundary(factory)
    }

    pub fn or_raising(mut self, factory: impl FnOnce() -> E + 'a) -> Self {
        self.error_factory = Some(Box::new(factory));
        self
    }

    pub fn or_raising_with_value(mut self, factory: impl FnOnce(&T) -> E + 'a) -> Self {
        self.value_error_factory = Some(Box::new(factory));
        self
    }

    pub fn or_raising_with_boundary(mut self, factory: impl FnOnce(&T, &B) -> E + 'a) -> Self {
        self.boundary_error_factory = Some(Box::new(factory));
        self
    }

    /// Ignored when a factory is configured.
    pub fn with_parameter_name(mut self, parameter_name: impl Into<Cow<'a, str>>) -> Self {
        self.parameter_name = Some(parameter_name.into());
        self
    }

    /// Replaces the generated description of the default error.
    /// Ignored when a factory is configured.
    pub fn with_message(mut self, message: impl Into<Cow<'a, str>>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn parameter_name(&self) -> Option<&str> {
        self.parameter_name.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub const fn has_factory(&self) -> bool {
        self.error_factory.is_some() || self.value_error_factory.is_some() || self.boundary_error_factory.is_some()
    }

    /// Produces the error for a violation of `value` against `boundary`.
    ///
    /// `default_error` receives the parameter name and custom message and is
    /// only called when no factory is configured.
    pub(crate) fn into_error<F>(self, value: &T, boundary: &B, default_error: F) -> E
    where
        E: From<GuardError>,
        F: FnOnce(Option<Cow<'a, str>>, Option<Cow<'a, str>>) -> GuardError,
    {
        if let Some(factory) = self.error_factory {
            return factory();
        }
        if let Some(factory) = self.value_error_factory {
            return factory(value);
        }
        if let Some(factory) = self.boundary_error_factory {
            return factory(value, boundary);
        }

        let error = default_error(self.parameter_name, self.message);
        log::debug!(target: LOG_TARGET, "guard clause violated: {error}");
        error.into()
    }
}

impl<T, B, E> fmt::Debug for Check<'_, T, B, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Check")
            .field("parameter_name", &self.parameter_name)
            .field("message", &self.message)
            .field("error_factory", &self.error_factory.is_some())
            .field("value_error_factory", &self.value_error_factory.is_some())
            .field("boundary_error_factory", &self.boundary_error_factory.is_some())
            .finish()
    }
}
