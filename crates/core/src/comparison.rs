// crates/core/src/comparison.rs

/// The pairwise predicates behind the comparison assertions.
///
/// Each variant is evaluated with the operator of its own name, so for
/// incomparable values (NaN) every variant fails, including the negated ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    NotLessThan,
    LessThan,
    NotLessThanOrEqualTo,
    LessThanOrEqualTo,
    NotGreaterThan,
    GreaterThan,
    NotGreaterThanOrEqualTo,
    GreaterThanOrEqualTo,
}

impl Comparison {
    pub const ALL: [Self; 8] = [
        Self::NotLessThan,
        Self::LessThan,
        Self::NotLessThanOrEqualTo,
        Self::LessThanOrEqualTo,
        Self::NotGreaterThan,
        Self::GreaterThan,
        Self::NotGreaterThanOrEqualTo,
        Self::GreaterThanOrEqualTo,
    ];

    /// Returns `true` if `value` satisfies the predicate against `boundary`.
    #[inline]
    pub fn holds<T>(self, value: &T, boundary: &T) -> bool
    where
        T: PartialOrd + ?Sized,
    {
        match self {
            Self::NotLessThan | Self::GreaterThanOrEqualTo => value >= boundary,
            Self::LessThan | Self::NotGreaterThanOrEqualTo => value < boundary,
            Self::NotLessThanOrEqualTo | Self::GreaterThan => value > boundary,
            Self::LessThanOrEqualTo | Self::NotGreaterThan => value <= boundary,
        }
    }

    /// The differently named predicate that passes for exactly the same inputs.
    pub const fn dual(self) -> Self {
        match self {
            Self::NotLessThan => Self::GreaterThanOrEqualTo,
            Self::GreaterThanOrEqualTo => Self::NotLessThan,
            Self::LessThan => Self::NotGreaterThanOrEqualTo,
            Self::NotGreaterThanOrEqualTo => Self::LessThan,
            Self::NotLessThanOrEqualTo => Self::GreaterThan,
            Self::GreaterThan => Self::NotLessThanOrEqualTo,
            Self::LessThanOrEqualTo => Self::NotGreaterThan,
            Self::NotGreaterThan => Self::LessThanOrEqualTo,
        }
    }

    /// Constraint wording used in generated messages, e.g. `must be less than`.
    pub const fn phrase(self) -> &'static str {
        match self {
            Self::NotLessThan => "must not be less than",
            Self::LessThan => "must be less than",
            Self::NotLessThanOrEqualTo => "must not be less than or equal to",
            Self::LessThanOrEqualTo => "must be less than or equal to",
            Self::NotGreaterThan => "must not be greater than",
            Self::GreaterThan => "must be greater than",
            Self::NotGreaterThanOrEqualTo => "must not be greater than or equal to",
            Self::GreaterThanOrEqualTo => "must be greater than or equal to",
        }
    }
}
