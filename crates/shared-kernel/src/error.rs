// crates/shared-kernel/src/error.rs
use thiserror::Error;

/// Error raised by a violated guard clause or an inconsistent `Range`.
///
/// Values and boundaries are stored in their rendered form so the error stays
/// `'static`, `Send` and `Sync` regardless of the checked type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuardError {
    /// A comparison or range-membership assertion failed.
    #[error("{message}")]
    OutOfBounds {
        parameter_name: Option<String>,
        value: String,
        boundary: String,
        message: String,
    },

    /// A `Range` was built with boundaries that do not describe an interval.
    #[error("Invalid range: {reason} (lower: {lower}, upper: {upper})")]
    InvalidRange {
        lower: String,
        upper: String,
        reason: String,
    },

    /// A required value was absent.
    #[error("{message}")]
    NullArgument {
        parameter_name: Option<String>,
        message: String,
    },
}

pub type GuardResult<T> = std::result::Result<T, GuardError>;

impl GuardError {
    /// Name of the offending parameter, if the caller supplied one.
    pub fn parameter_name(&self) -> Option<&str> {
        match self {
            Self::OutOfBounds { parameter_name, .. } | Self::NullArgument { parameter_name, .. } => {
                parameter_name.as_deref()
            }
            Self::InvalidRange { .. } => None,
        }
    }

    #[inline]
    pub const fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }

    #[inline]
    pub const fn is_invalid_range(&self) -> bool {
        matches!(self, Self::InvalidRange { .. })
    }

    #[inline]
    pub const fn is_null_argument(&self) -> bool {
        matches!(self, Self::NullArgument { .. })
    }
}
