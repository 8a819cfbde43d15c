// crates/shared-kernel/src/value_objects/range.rs
use std::{
    cmp::Ordering,
    fmt,
    ops::{Bound, RangeBounds},
};

use serde::{Deserialize, Serialize};

use crate::error::{GuardError, GuardResult};

/// Interval over an ordered type whose two boundaries are independently
/// inclusive or exclusive.
///
/// # Invariants
/// `lower_boundary <= upper_boundary`, and a range whose boundaries are equal
/// includes at least one of them. `[a, a)` and `(a, a]` are valid but hold no
/// value.
///
/// # Examples
///
/// ```rust
/// # use guard_clauses_shared_kernel::Range;
/// let range = Range::from_inclusive(1).to_exclusive(5).unwrap();
/// assert!(range.is_value_within_range(&1));
/// assert!(!range.is_value_within_range(&5));
/// assert_eq!(range.to_string(), "[1, 5)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRange<T>", bound(deserialize = "T: Deserialize<'de> + PartialOrd + fmt::Display"))]
pub struct Range<T> {
    lower_boundary: T,
    upper_boundary: T,
    is_lower_boundary_inclusive: bool,
    is_upper_boundary_inclusive: bool,
}

impl<T> Range<T>
where
    T: PartialOrd + fmt::Display,
{
    /// Creates a range after checking the boundary invariant.
    ///
    /// # Errors
    ///
    /// Returns [`GuardError::InvalidRange`] when `lower > upper`, when the
    /// boundaries cannot be compared, or when they are equal and both are
    /// exclusive.
    pub fn new(
        lower_boundary: T,
        upper_boundary: T,
        is_lower_boundary_inclusive: bool,
        is_upper_boundary_inclusive: bool,
    ) -> GuardResult<Self> {
        // Plain comparison on purpose: the assertion crate depends on this type.
        let reason = match lower_boundary.partial_cmp(&upper_boundary) {
            Some(Ordering::Less) => None,
            Some(Ordering::Equal) if is_lower_boundary_inclusive || is_upper_boundary_inclusive => None,
            Some(Ordering::Equal) => Some("a range with equal boundaries must include at least one of them"),
            Some(Ordering::Greater) => Some("the lower boundary must not be greater than the upper boundary"),
            None => Some("the boundaries are not comparable"),
        };

        match reason {
            None => Ok(Self {
                lower_boundary,
                upper_boundary,
                is_lower_boundary_inclusive,
                is_upper_boundary_inclusive,
            }),
            Some(reason) => Err(GuardError::InvalidRange {
                lower: lower_boundary.to_string(),
                upper: upper_boundary.to_string(),
                reason: reason.to_string(),
            }),
        }
    }
}

impl<T> Range<T> {
    /// Starts a range whose lower boundary is part of the range.
    #[inline]
    pub const fn from_inclusive(lower_boundary: T) -> RangeFromInfo<T> {
        RangeFromInfo::new(lower_boundary, true)
    }

    /// Starts a range whose lower boundary is not part of the range.
    #[inline]
    pub const fn from_exclusive(lower_boundary: T) -> RangeFromInfo<T> {
        RangeFromInfo::new(lower_boundary, false)
    }

    #[inline]
    pub const fn lower_boundary(&self) -> &T {
        &self.lower_boundary
    }

    #[inline]
    pub const fn upper_boundary(&self) -> &T {
        &self.upper_boundary
    }

    #[inline]
    pub const fn is_lower_boundary_inclusive(&self) -> bool {
        self.is_lower_boundary_inclusive
    }

    #[inline]
    pub const fn is_upper_boundary_inclusive(&self) -> bool {
        self.is_upper_boundary_inclusive
    }
}

impl<T> Range<T>
where
    T: PartialOrd,
{
    /// Returns `true` if `value` lies between the boundaries, honouring their
    /// inclusivity.
    #[inline]
    pub fn is_value_within_range(&self, value: &T) -> bool {
        let above_lower = if self.is_lower_boundary_inclusive {
            *value >= self.lower_boundary
        } else {
            *value > self.lower_boundary
        };
        let below_upper = if self.is_upper_boundary_inclusive {
            *value <= self.upper_boundary
        } else {
            *value < self.upper_boundary
        };
        above_lower && below_upper
    }
}

impl<T> Range<T>
where
    T: fmt::Display,
{
    /// Prose form of the range, e.g. `1 (inclusive) and 5 (exclusive)` for
    /// the connector `"and"`.
    pub fn describe(&self, connector: &str) -> String {
        format!(
            "{} ({}) {} {} ({})",
            self.lower_boundary,
            inclusivity(self.is_lower_boundary_inclusive),
            connector,
            self.upper_boundary,
            inclusivity(self.is_upper_boundary_inclusive),
        )
    }
}

impl Range<usize> {
    /// The valid index range `[0, len)` of a collection holding `len` items.
    /// For an empty collection this is `[0, 0)`, which contains no index.
    #[inline]
    pub const fn for_indices(len: usize) -> Self {
        Self {
            lower_boundary: 0,
            upper_boundary: len,
            is_lower_boundary_inclusive: true,
            is_upper_boundary_inclusive: false,
        }
    }
}

const fn inclusivity(inclusive: bool) -> &'static str {
    if inclusive { "inclusive" } else { "exclusive" }
}

/// Half-built range holding the lower boundary; finish it with
/// [`RangeFromInfo::to_inclusive`] or [`RangeFromInfo::to_exclusive`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use = "a lower boundary alone is not a range"]
pub struct RangeFromInfo<T> {
    lower_boundary: T,
    is_lower_boundary_inclusive: bool,
}

impl<T> RangeFromInfo<T> {
    #[inline]
    pub const fn new(lower_boundary: T, is_lower_boundary_inclusive: bool) -> Self {
        Self { lower_boundary, is_lower_boundary_inclusive }
    }
}

impl<T> RangeFromInfo<T>
where
    T: PartialOrd + fmt::Display,
{
    /// # Errors
    ///
    /// See [`Range::new`].
    #[inline]
    pub fn to_inclusive(self, upper_boundary: T) -> GuardResult<Range<T>> {
        Range::new(self.lower_boundary, upper_boundary, self.is_lower_boundary_inclusive, true)
    }

    /// # Errors
    ///
    /// See [`Range::new`].
    #[inline]
    pub fn to_exclusive(self, upper_boundary: T) -> GuardResult<Range<T>> {
        Range::new(self.lower_boundary, upper_boundary, self.is_lower_boundary_inclusive, false)
    }
}

mod display {
    use std::fmt;

    use super::Range;

    impl<T> fmt::Display for Range<T>
    where
        T: fmt::Display,
    {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let open = if self.is_lower_boundary_inclusive { '[' } else { '(' };
            let close = if self.is_upper_boundary_inclusive { ']' } else { ')' };
            write!(f, "{open}{}, {}{close}", self.lower_boundary, self.upper_boundary)
        }
    }
}

impl<T> RangeBounds<T> for Range<T> {
    fn start_bound(&self) -> Bound<&T> {
        if self.is_lower_boundary_inclusive {
            Bound::Included(&self.lower_boundary)
        } else {
            Bound::Excluded(&self.lower_boundary)
        }
    }

    fn end_bound(&self) -> Bound<&T> {
        if self.is_upper_boundary_inclusive {
            Bound::Included(&self.upper_boundary)
        } else {
            Bound::Excluded(&self.upper_boundary)
        }
    }
}

impl<T> TryFrom<std::ops::Range<T>> for Range<T>
where
    T: PartialOrd + fmt::Display,
{
    type Error = GuardError;

    fn try_from(range: std::ops::Range<T>) -> GuardResult<Self> {
        Self::new(range.start, range.end, true, false)
    }
}

impl<T> TryFrom<std::ops::RangeInclusive<T>> for Range<T>
where
    T: PartialOrd + fmt::Display,
{
    type Error = GuardError;

    fn try_from(range: std::ops::RangeInclusive<T>) -> GuardResult<Self> {
        let (start, end) = range.into_inner();
        Self::new(start, end, true, true)
    }
}

/// Unvalidated wire form; deserialized ranges go through [`Range::new`].
#[derive(Deserialize)]
struct RawRange<T> {
    lower_boundary: T,
    upper_boundary: T,
    is_lower_boundary_inclusive: bool,
    is_upper_boundary_inclusive: bool,
}

impl<T> TryFrom<RawRange<T>> for Range<T>
where
    T: PartialOrd + fmt::Display,
{
    type Error = GuardError;

    fn try_from(raw: RawRange<T>) -> GuardResult<Self> {
        Self::new(
            raw.lower_boundary,
            raw.upper_boundary,
            raw.is_lower_boundary_inclusive,
            raw.is_upper_boundary_inclusive,
        )
    }
}
