//! Linear searches.
//!
//! A failed search is [`None`], which includes searching an absent or empty array.
//!
//! Start indices are signed and clamped:
//! - forward searches treat a negative start as 0, and a start past the end finds nothing
//! - backward searches treat a start past the end as the last index, and a negative start finds nothing

//---------------------------------------------------------------------------------------------------- Import
use std::ops::{Add, Sub};

//---------------------------------------------------------------------------------------------------- Float
// INVARIANT: must be private.
// Protects against outside-crate implementations.
mod private {
    pub trait Sealed {}
}

/// Floating point numbers, which can be searched with a tolerance.
///
/// This trait is sealed and is only implemented on:
/// - [`f32`]
/// - [`f64`]
pub trait Float:
    private::Sealed + Copy + PartialOrd + Add<Output = Self> + Sub<Output = Self>
{
}

macro_rules! impl_float {
    ($($float:ty),* $(,)?) => {
        $(
            impl Float for $float {}
            impl private::Sealed for $float {}
        )*
    };
}
impl_float!(f32, f64);

#[inline]
/// Returns `true` if `value` is within the closed interval `target ± tolerance`.
pub(crate) fn within<F: Float>(value: F, target: F, tolerance: F) -> bool {
    value >= target - tolerance && value <= target + tolerance
}

//---------------------------------------------------------------------------------------------------- Scans
/// Index of the first element at or after `start` matching `predicate`.
pub(crate) fn position_from<T>(
    array: &[T],
    start: isize,
    mut predicate: impl FnMut(&T) -> bool,
) -> Option<usize> {
    let start = usize::try_from(start).unwrap_or(0);

    array
        .get(start..)?
        .iter()
        .position(|element| predicate(element))
        .map(|index| index + start)
}

/// Index of the last element at or before `start` matching `predicate`.
pub(crate) fn rposition_from<T>(
    array: &[T],
    start: isize,
    mut predicate: impl FnMut(&T) -> bool,
) -> Option<usize> {
    let start = usize::try_from(start).ok()?;
    let end = start.saturating_add(1).min(array.len());

    array[..end].iter().rposition(|element| predicate(element))
}

//---------------------------------------------------------------------------------------------------- Exact
#[inline]
/// Index of the first element equal to `target`.
///
/// For nullable elements ([`Option`]) an absent target only matches absent elements.
///
/// ```rust
/// # use commons_array::*;
/// let array = ["a", "b", "a"];
/// assert_eq!(index_of(Some(array.as_slice()), &"a"), Some(0));
/// assert_eq!(index_of(Some(array.as_slice()), &"z"), None);
/// assert_eq!(index_of(None, &"a"), None);
///
/// let nullable = [Some(1), None];
/// assert_eq!(index_of(Some(nullable.as_slice()), &None), Some(1));
/// ```
pub fn index_of<T: PartialEq>(array: Option<&[T]>, target: &T) -> Option<usize> {
    index_of_from(array, target, 0)
}

/// Index of the first element equal to `target`, searching forward from `start`.
///
/// ```rust
/// # use commons_array::*;
/// let array = ["a", "b", "a"];
/// assert_eq!(index_of_from(Some(array.as_slice()), &"a", 1), Some(2));
/// assert_eq!(index_of_from(Some(array.as_slice()), &"a", -10), Some(0));
/// assert_eq!(index_of_from(Some(array.as_slice()), &"a", 3), None);
/// ```
pub fn index_of_from<T: PartialEq>(array: Option<&[T]>, target: &T, start: isize) -> Option<usize> {
    position_from(array?, start, |element| element == target)
}

#[inline]
/// Index of the last element equal to `target`.
pub fn last_index_of<T: PartialEq>(array: Option<&[T]>, target: &T) -> Option<usize> {
    last_index_of_from(array, target, isize::MAX)
}

/// Index of the last element equal to `target`, searching backward from `start`.
///
/// ```rust
/// # use commons_array::*;
/// let array = ["a", "b", "a"];
/// assert_eq!(last_index_of_from(Some(array.as_slice()), &"a", 1), Some(0));
/// assert_eq!(last_index_of_from(Some(array.as_slice()), &"a", 100), Some(2));
/// assert_eq!(last_index_of_from(Some(array.as_slice()), &"a", -1), None);
/// ```
pub fn last_index_of_from<T: PartialEq>(
    array: Option<&[T]>,
    target: &T,
    start: isize,
) -> Option<usize> {
    rposition_from(array?, start, |element| element == target)
}

#[inline]
/// Returns `true` if any element equals `target`.
pub fn contains<T: PartialEq>(array: Option<&[T]>, target: &T) -> bool {
    index_of(array, target).is_some()
}

//---------------------------------------------------------------------------------------------------- Tolerance
#[inline]
/// Index of the first element within `target ± tolerance` (inclusive).
///
/// ```rust
/// # use commons_array::*;
/// let array = [1.0, 2.0, 3.0];
/// assert_eq!(index_of_within(Some(array.as_slice()), 2.05, 0.1), Some(1));
/// assert_eq!(index_of_within(Some(array.as_slice()), 2.2, 0.1), None);
/// ```
pub fn index_of_within<F: Float>(array: Option<&[F]>, target: F, tolerance: F) -> Option<usize> {
    index_of_within_from(array, target, 0, tolerance)
}

/// [`index_of_within`], searching forward from `start`.
pub fn index_of_within_from<F: Float>(
    array: Option<&[F]>,
    target: F,
    start: isize,
    tolerance: F,
) -> Option<usize> {
    position_from(array?, start, |&element| within(element, target, tolerance))
}

#[inline]
/// Index of the last element within `target ± tolerance` (inclusive).
pub fn last_index_of_within<F: Float>(
    array: Option<&[F]>,
    target: F,
    tolerance: F,
) -> Option<usize> {
    last_index_of_within_from(array, target, isize::MAX, tolerance)
}

/// [`last_index_of_within`], searching backward from `start`.
pub fn last_index_of_within_from<F: Float>(
    array: Option<&[F]>,
    target: F,
    start: isize,
    tolerance: F,
) -> Option<usize> {
    rposition_from(array?, start, |&element| within(element, target, tolerance))
}

#[inline]
/// Returns `true` if any element is within `target ± tolerance` (inclusive).
pub fn contains_within<F: Float>(array: Option<&[F]>, target: F, tolerance: F) -> bool {
    index_of_within(array, target, tolerance).is_some()
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn backward_start_clamps_to_last_index() {
        let array = [1, 2, 1, 2];
        assert_eq!(last_index_of(Some(array.as_slice()), &2), Some(3));
        assert_eq!(last_index_of_from(Some(array.as_slice()), &2, 2), Some(1));
        assert_eq!(last_index_of_from(Some(array.as_slice()), &2, 0), None);
        assert_eq!(last_index_of_from(Some(array.as_slice()), &1, 0), Some(0));
    }

    #[test]
    fn empty_and_absent() {
        assert_eq!(index_of::<u8>(Some(&[]), &0), None);
        assert_eq!(last_index_of::<u8>(Some(&[]), &0), None);
        assert_eq!(last_index_of::<u8>(None, &0), None);
        assert!(!contains::<u8>(None, &0));
        assert_eq!(index_of_within::<f64>(None, 0.0, 1.0), None);
    }

    #[test]
    fn nan_never_matches_exactly() {
        let array = [f64::NAN];
        assert!(!contains(Some(array.as_slice()), &f64::NAN));
    }

    #[test]
    fn tolerance_bounds_are_inclusive() {
        let array = [1.5_f32, 2.0, 2.5];
        assert_eq!(index_of_within(Some(array.as_slice()), 2.0, 0.5), Some(0));
        assert_eq!(last_index_of_within(Some(array.as_slice()), 2.0, 0.5), Some(2));
        assert_eq!(
            index_of_within_from(Some(array.as_slice()), 2.0, 1, 0.5),
            Some(1)
        );
        assert_eq!(
            last_index_of_within_from(Some(array.as_slice()), 2.0, 1, 0.5),
            Some(1)
        );
        assert!(contains_within(Some(array.as_slice()), 3.0, 0.5));
        assert!(!contains_within(Some(array.as_slice()), 3.1, 0.5));
    }
}
