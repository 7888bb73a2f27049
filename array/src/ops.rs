//! Type-preserving copy, splice and reshape operations.
//!
//! The element type `T` of every output is the element type
//! of the input, so it is always preserved.

//---------------------------------------------------------------------------------------------------- Import
use std::ops::Range;

use crate::error::ArrayError;

//---------------------------------------------------------------------------------------------------- Length
#[inline]
/// The number of elements, 0 for an absent array.
///
/// ```rust
/// # use commons_array::*;
/// assert_eq!(length(Some([1, 2, 3].as_slice())), 3);
/// assert_eq!(length::<u8>(Some(&[])), 0);
/// assert_eq!(length::<u8>(None), 0);
/// ```
pub fn length<T>(array: Option<&[T]>) -> usize {
    array.map_or(0, <[T]>::len)
}

#[inline]
/// Returns `true` if the array is absent or has no elements.
pub fn is_empty<T>(array: Option<&[T]>) -> bool {
    length(array) == 0
}

#[inline]
/// Returns `true` if the array is present and has elements.
pub fn is_not_empty<T>(array: Option<&[T]>) -> bool {
    !is_empty(array)
}

#[inline]
/// Returns `true` if both arrays have the same length, an absent array has length 0.
///
/// The element types may differ.
///
/// ```rust
/// # use commons_array::*;
/// assert!(is_same_length(Some([1, 2].as_slice()), Some(["a", "b"].as_slice())));
/// assert!(is_same_length::<u8, u8>(None, Some(&[])));
/// assert!(!is_same_length::<u8, u8>(None, Some(&[1])));
/// ```
pub fn is_same_length<T, U>(first: Option<&[T]>, second: Option<&[U]>) -> bool {
    length(first) == length(second)
}

#[inline]
/// The array itself, or an empty slice if it is absent.
pub fn null_to_empty<T>(array: Option<&[T]>) -> &[T] {
    array.unwrap_or(&[])
}

//---------------------------------------------------------------------------------------------------- Copies
#[inline]
/// A shallow copy of the array, absent stays absent.
///
/// Elements are [`Clone`]d, so shared pointers (e.g. [`std::rc::Rc`])
/// in the array are shared with the copy.
pub fn clone<T: Clone>(array: Option<&[T]>) -> Option<Vec<T>> {
    array.map(<[T]>::to_vec)
}

/// Clamp `start..end` into `0..length`.
///
/// Negative bounds become 0, bounds past the end become `length`,
/// and inverted ranges become empty.
pub(crate) fn clamp_range(length: usize, start: isize, end: isize) -> Range<usize> {
    let start = usize::try_from(start).unwrap_or(0).min(length);
    let end = usize::try_from(end).unwrap_or(0).min(length);

    if end <= start {
        start..start
    } else {
        start..end
    }
}

/// Copy the elements within `start..end`.
///
/// Bounds are clamped to the array, bad bounds never fail:
/// - a negative `start` becomes 0
/// - an `end` past the array becomes its length
/// - an empty or inverted range returns an empty array
///
/// ```rust
/// # use commons_array::*;
/// let array = [1, 2, 3, 4];
/// assert_eq!(subarray(Some(array.as_slice()), 1, 3), Some(vec![2, 3]));
/// assert_eq!(subarray(Some(array.as_slice()), -5, 1000), Some(vec![1, 2, 3, 4]));
/// assert_eq!(subarray(Some(array.as_slice()), 3, 1), Some(vec![]));
/// assert_eq!(subarray::<u8>(None, 0, 1), None);
/// ```
pub fn subarray<T: Clone>(array: Option<&[T]>, start: isize, end: isize) -> Option<Vec<T>> {
    array.map(|array| array[clamp_range(array.len(), start, end)].to_vec())
}

#[inline]
/// Reverse the array in place, an absent array is left alone.
///
/// This is the only operation that mutates its input.
/// The `&mut` borrow means no other reference to the array
/// can exist (on any thread) while it is reversed.
///
/// ```rust
/// # use commons_array::*;
/// let mut array = [1, 2, 3];
/// reverse(Some(array.as_mut_slice()));
/// assert_eq!(array, [3, 2, 1]);
/// reverse::<u8>(None);
/// ```
pub fn reverse<T>(array: Option<&mut [T]>) {
    if let Some(array) = array {
        array.reverse();
    }
}

//---------------------------------------------------------------------------------------------------- Growing
/// Append `element` to a copy of the array.
///
/// An absent array is treated as empty.
///
/// ```rust
/// # use commons_array::*;
/// assert_eq!(add(Some(["a"].as_slice()), "b"), vec!["a", "b"]);
/// assert_eq!(add(None, "b"), vec!["b"]);
/// assert_eq!(add(None, None::<&str>), vec![None]);
/// ```
pub fn add<T: Clone>(array: Option<&[T]>, element: T) -> Vec<T> {
    let array = null_to_empty(array);

    let mut vec = Vec::with_capacity(array.len() + 1);
    vec.extend_from_slice(array);
    vec.push(element);
    vec
}

/// Insert `element` at `index` into a copy of the array.
///
/// Elements at and after `index` are shifted one to the right.
/// An absent array is treated as empty, so only `index == 0` is legal on it.
///
/// ```rust
/// # use commons_array::*;
/// assert_eq!(insert(Some([1, 3].as_slice()), 1, 2), Ok(vec![1, 2, 3]));
/// assert_eq!(insert(Some([1, 2].as_slice()), 2, 3), Ok(vec![1, 2, 3]));
/// assert_eq!(insert(None, 0, "x"), Ok(vec!["x"]));
///
/// let err = insert(None, 1, "x").unwrap_err();
/// assert_eq!(err, ArrayError::IndexOutOfBounds { index: 1, length: 0 });
/// ```
///
/// # Errors
/// Returns [`ArrayError::IndexOutOfBounds`] if `index > length`.
pub fn insert<T: Clone>(array: Option<&[T]>, index: usize, element: T) -> Result<Vec<T>, ArrayError> {
    let array = null_to_empty(array);
    if index > array.len() {
        return Err(ArrayError::IndexOutOfBounds {
            index,
            length: array.len(),
        });
    }

    let (head, tail) = array.split_at(index);

    let mut vec = Vec::with_capacity(array.len() + 1);
    vec.extend_from_slice(head);
    vec.push(element);
    vec.extend_from_slice(tail);
    Ok(vec)
}

/// Concatenate copies of both arrays.
///
/// If either array is absent, this is a copy of the other.
///
/// ```rust
/// # use commons_array::*;
/// let first = [1, 2];
/// let second = [3];
/// assert_eq!(add_all(Some(first.as_slice()), Some(second.as_slice())), Some(vec![1, 2, 3]));
/// assert_eq!(add_all(Some(first.as_slice()), None), Some(vec![1, 2]));
/// assert_eq!(add_all::<u8>(None, None), None);
/// ```
pub fn add_all<T: Clone>(first: Option<&[T]>, second: Option<&[T]>) -> Option<Vec<T>> {
    match (first, second) {
        (None, None) => None,
        (Some(array), None) | (None, Some(array)) => Some(array.to_vec()),
        (Some(first), Some(second)) => {
            let mut vec = Vec::with_capacity(first.len() + second.len());
            vec.extend_from_slice(first);
            vec.extend_from_slice(second);
            Some(vec)
        }
    }
}

//---------------------------------------------------------------------------------------------------- Shrinking
/// Remove the element at `index` from a copy of the array.
///
/// Elements after `index` are shifted one to the left.
/// Unlike [`subarray`] nothing is clamped.
///
/// ```rust
/// # use commons_array::*;
/// assert_eq!(remove(Some([10].as_slice()), 0), Ok(vec![]));
/// assert_eq!(remove(Some([1, 2, 3].as_slice()), 1), Ok(vec![1, 3]));
/// assert!(remove(Some([10].as_slice()), 1).is_err());
/// assert!(remove::<u8>(None, 0).is_err());
/// ```
///
/// # Errors
/// Returns [`ArrayError::IndexOutOfBounds`] if `index >= length`,
/// which is always the case for an absent array.
pub fn remove<T: Clone>(array: Option<&[T]>, index: usize) -> Result<Vec<T>, ArrayError> {
    let array = null_to_empty(array);
    if index >= array.len() {
        return Err(ArrayError::IndexOutOfBounds {
            index,
            length: array.len(),
        });
    }

    let mut vec = Vec::with_capacity(array.len() - 1);
    vec.extend_from_slice(&array[..index]);
    vec.extend_from_slice(&array[index + 1..]);
    Ok(vec)
}

/// Remove the first element equal to `element` from a copy of the array.
///
/// If nothing matches, this is a plain copy. Absent stays absent.
///
/// ```rust
/// # use commons_array::*;
/// let array = ["a", "b", "a"];
/// assert_eq!(remove_element(Some(array.as_slice()), &"a"), Some(vec!["b", "a"]));
/// assert_eq!(remove_element(Some(array.as_slice()), &"z"), Some(vec!["a", "b", "a"]));
/// assert_eq!(remove_element(None, &"a"), None);
/// ```
pub fn remove_element<T: Clone + PartialEq>(array: Option<&[T]>, element: &T) -> Option<Vec<T>> {
    let array = array?;
    let mut vec = array.to_vec();

    if let Some(index) = crate::search::index_of(Some(array), element) {
        vec.remove(index);
    }

    Some(vec)
}
