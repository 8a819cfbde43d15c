// crates/core/src/assertions/option.rs
use std::borrow::Cow;

use guard_clauses_shared_kernel::GuardError;

use crate::{check::Check, messages};

/// Presence guard for optional values.
///
/// The checked value of an absent option carries no data, so the check is
/// typed over `()`. Value and boundary factories would only receive `&()`;
/// use [`Check::raising`] for a custom error, or [`Check::named_as`] to keep
/// the default error in a caller error type.
pub trait OptionAssertions<T> {
    /// Unwraps `Some`, or reports a [`GuardError::NullArgument`] for `None`.
    fn must_not_be_none<E>(self, check: Check<'_, (), (), E>) -> Result<T, E>
    where
        E: From<GuardError>;
}

impl<T> OptionAssertions<T> for Option<T> {
    #[inline]
    fn must_not_be_none<E>(self, check: Check<'_, (), (), E>) -> Result<T, E>
    where
        E: From<GuardError>,
    {
        match self {
            Some(value) => Ok(value),
            None => Err(check.into_error(&(), &(), |parameter_name, message| {
                let message =
                    message.map_or_else(|| messages::none_violation(parameter_name.as_deref()), Cow::into_owned);
                GuardError::NullArgument {
                    parameter_name: parameter_name.map(Cow::into_owned),
                    message,
                }
            })),
        }
    }
}
