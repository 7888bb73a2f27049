//! Arrays with a runtime element type.
//!
//! The generic functions at the crate root know the element type at
//! compile time. The functions here work on [`DynArray`]s, where it is
//! discovered at runtime: from the input array when there is one,
//! otherwise from the element being added, otherwise [`ElementType::Object`].
//!
//! ```rust
//! # use commons_array::*;
//! // Inferred from the element.
//! let array = dynamic::add(None, Some(Value::from("a"))).unwrap();
//! assert_eq!(array.element_type(), ElementType::Str);
//!
//! // Nothing to infer from.
//! let array = dynamic::add(None, None).unwrap();
//! assert_eq!(array.element_type(), ElementType::Object);
//! assert_eq!(array.to_string(), "{<null>}");
//! ```

//---------------------------------------------------------------------------------------------------- Import
use std::collections::HashMap;

use commons_helper::validate;

use crate::error::ArrayError;

mod array;
mod element;
mod value;

pub use array::{DynArray, RefArray};
pub use element::ElementType;
pub use value::{Entry, Value};

//---------------------------------------------------------------------------------------------------- Free functions
#[inline]
/// The number of elements, 0 for an absent array.
pub fn length(array: Option<&DynArray>) -> usize {
    array.map_or(0, DynArray::len)
}

#[inline]
/// Append `element` to a copy of the array, see [`crate::add`].
///
/// # Errors
/// See [`insert`].
pub fn add(array: Option<&DynArray>, element: Option<Value>) -> Result<DynArray, ArrayError> {
    insert(array, length(array), element)
}

/// Insert `element` at `index` into a copy of the array, see [`crate::insert`].
///
/// An absent array is treated as an empty one of the element's type,
/// or [`ElementType::Object`] if `element` is absent too.
///
/// ```rust
/// # use commons_array::*;
/// let array = dynamic::insert(None, 0, Some(Value::from("x"))).unwrap();
/// assert_eq!(array.to_string(), "{x}");
///
/// let err = dynamic::insert(None, 1, Some(Value::from("x"))).unwrap_err();
/// assert_eq!(err, ArrayError::IndexOutOfBounds { index: 1, length: 0 });
/// ```
///
/// # Errors
/// - [`ArrayError::IndexOutOfBounds`] if `index > length`
/// - [`ArrayError::TypeMismatch`] if `element` cannot be stored in the array
/// - [`ArrayError::AbsentElement`] if `element` is absent and the array is dense
pub fn insert(
    array: Option<&DynArray>,
    index: usize,
    element: Option<Value>,
) -> Result<DynArray, ArrayError> {
    match array {
        Some(array) => array.insert(index, element),
        None if index != 0 => Err(ArrayError::IndexOutOfBounds { index, length: 0 }),
        None => {
            let element_type = element
                .as_ref()
                .map_or(ElementType::Object, Value::element_type);

            DynArray::from_values(element_type, vec![element])
        }
    }
}

/// Concatenate copies of both arrays, see [`crate::add_all`].
///
/// The result has the element type of `first`.
/// If either array is absent, this is a copy of the other.
///
/// ```rust
/// # use commons_array::*;
/// let ints = DynArray::from(vec![1_i32]);
/// let joined = dynamic::add_all(Some(&ints), Some(&ints)).unwrap();
/// assert_eq!(joined, Some(DynArray::Int(vec![1, 1])));
///
/// let longs = DynArray::from(vec![1_i64]);
/// let err = dynamic::add_all(Some(&ints), Some(&longs)).unwrap_err();
/// assert_eq!(err.to_string(), "Cannot store long in an array of int");
/// ```
///
/// # Errors
/// Returns [`ArrayError::TypeMismatch`] if `second` is a different kind of array,
/// or holds an element that cannot be stored in `first`'s element type.
pub fn add_all(
    first: Option<&DynArray>,
    second: Option<&DynArray>,
) -> Result<Option<DynArray>, ArrayError> {
    match (first, second) {
        (None, None) => Ok(None),
        (Some(array), None) | (None, Some(array)) => Ok(Some(array.clone())),
        (Some(first), Some(second)) => first.concat(second).map(Some),
    }
}

#[inline]
/// Remove the element at `index` from a copy of the array, see [`crate::remove`].
///
/// # Errors
/// Returns [`ArrayError::IndexOutOfBounds`] if `index >= length`,
/// which is always the case for an absent array.
pub fn remove(array: Option<&DynArray>, index: usize) -> Result<DynArray, ArrayError> {
    match array {
        Some(array) => array.remove(index),
        None => Err(ArrayError::IndexOutOfBounds { index, length: 0 }),
    }
}

/// Returns `true` if both arrays are the same kind of array.
///
/// A dense and a nullable array of the same element type are different kinds.
///
/// ```rust
/// # use commons_array::*;
/// let ints = DynArray::from(vec![1_i32]);
/// assert_eq!(dynamic::is_same_type(Some(&ints), Some(&DynArray::Int(vec![]))), Ok(true));
/// assert_eq!(dynamic::is_same_type(Some(&ints), Some(&ints.to_object())), Ok(false));
///
/// let err = dynamic::is_same_type(None, Some(&ints)).unwrap_err();
/// assert_eq!(err.to_string(), "The Array must not be null");
/// ```
///
/// # Errors
/// Returns [`ArrayError::Validation`] if either array is absent.
pub fn is_same_type(
    first: Option<&DynArray>,
    second: Option<&DynArray>,
) -> Result<bool, ArrayError> {
    let first = validate::not_none(first, "The Array must not be null")?;
    let second = validate::not_none(second, "The Array must not be null")?;

    Ok(first.is_primitive() == second.is_primitive()
        && first.element_type() == second.element_type())
}

/// Build a map out of entries and rows, see [`crate::to_map`] and [`crate::rows_to_map`].
///
/// Each element must be either an [`Entry`] or a nested array of length ≥ 2,
/// whose first 2 elements are the key and value. Later duplicate keys
/// overwrite earlier ones. Absent stays absent.
///
/// ```rust
/// # use commons_array::*;
/// let red = DynArray::from_values(ElementType::Str, vec![Some("RED".into()), Some("#F00".into())]).unwrap();
/// let array = DynArray::from_values(
///     ElementType::Object,
///     vec![Some(red.into()), Some(Entry::new("BLUE", "#00F").into())],
/// ).unwrap();
///
/// let map = dynamic::to_map(Some(&array)).unwrap().unwrap();
/// assert_eq!(map[&Some(Value::from("RED"))], Some(Value::from("#F00")));
/// assert_eq!(map[&Some(Value::from("BLUE"))], Some(Value::from("#00F")));
/// ```
///
/// # Errors
/// - [`ArrayError::RowTooShort`] for a nested array of length < 2
/// - [`ArrayError::NotAnEntry`] for any other element
pub fn to_map(
    array: Option<&DynArray>,
) -> Result<Option<HashMap<Option<Value>, Option<Value>>>, ArrayError> {
    let Some(array) = array else {
        return Ok(None);
    };

    let elements = array.values();
    let mut map = HashMap::with_capacity(elements.len());

    for (index, element) in elements.into_iter().enumerate() {
        let (key, value) = match element {
            Some(Value::Entry(entry)) => (entry.key, entry.value),
            Some(Value::Array(row)) if row.len() >= 2 => (row.get(0)?, row.get(1)?),
            Some(Value::Array(row)) => {
                return Err(ArrayError::RowTooShort {
                    index,
                    length: row.len(),
                })
            }
            other => {
                return Err(ArrayError::NotAnEntry {
                    index,
                    found: other.as_ref().map(Value::element_type),
                })
            }
        };

        if map.insert(key, value).is_some() {
            tracing::trace!(index, "duplicate key overwritten");
        }
    }

    Ok(Some(map))
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    fn row(elements: &[&str]) -> Option<Value> {
        let elements = elements.iter().map(|e| Some(Value::from(*e))).collect();
        Some(DynArray::from_values(ElementType::Str, elements).unwrap().into())
    }

    fn rows(rows: Vec<Option<Value>>) -> DynArray {
        DynArray::from_values(ElementType::Array, rows).unwrap()
    }

    #[test]
    fn add_infers_element_type() {
        let array = add(None, Some(Value::Int(5))).unwrap();
        assert_eq!(array.element_type(), ElementType::Int);
        assert!(!array.is_primitive());

        let array = add(Some(&array), None).unwrap();
        assert_eq!(array.values(), vec![Some(Value::Int(5)), None]);
    }

    #[test]
    fn dense_arrays_reject_absent_elements() {
        let array = DynArray::from(vec![1.0_f32]);
        assert_eq!(
            add(Some(&array), None),
            Err(ArrayError::AbsentElement { index: 1 })
        );
        assert_eq!(
            insert(Some(&array), 0, Some(Value::Double(1.0))),
            Err(ArrayError::TypeMismatch {
                expected: ElementType::Float,
                found: ElementType::Double
            })
        );
    }

    #[test]
    fn insert_shifts_right() {
        let array = DynArray::from(vec!['a', 'c']);
        let array = insert(Some(&array), 1, Some(Value::Char('b'))).unwrap();
        assert_eq!(array, DynArray::Char(vec!['a', 'b', 'c']));
        assert_eq!(length(Some(&array)), 3);
        assert_eq!(length(None), 0);
    }

    #[test]
    fn add_all_absent() {
        let array = DynArray::from(vec![true]);
        assert_eq!(add_all(None, None), Ok(None));
        assert_eq!(add_all(None, Some(&array)), Ok(Some(array.clone())));
        assert_eq!(add_all(Some(&array), None), Ok(Some(array)));
    }

    #[test]
    fn add_all_checks_every_element() {
        let strings = DynArray::empty(ElementType::Str);
        let objects = DynArray::from_values(
            ElementType::Object,
            vec![Some("a".into()), None, Some(Value::Int(1))],
        )
        .unwrap();

        assert_eq!(
            add_all(Some(&strings), Some(&objects)),
            Err(ArrayError::TypeMismatch {
                expected: ElementType::Str,
                found: ElementType::Int
            })
        );

        let objects = objects.remove(2).unwrap();
        let joined = add_all(Some(&strings), Some(&objects)).unwrap().unwrap();
        assert_eq!(joined.element_type(), ElementType::Str);
        assert_eq!(joined.len(), 2);
    }

    #[test]
    fn remove_absent() {
        assert_eq!(
            remove(None, 0),
            Err(ArrayError::IndexOutOfBounds {
                index: 0,
                length: 0
            })
        );
    }

    #[test]
    fn map_from_rows() {
        let array = rows(vec![row(&["RED", "#F00"]), row(&["BLUE", "#00F", "extra"])]);
        let map = to_map(Some(&array)).unwrap().unwrap();

        assert_eq!(map.len(), 2);
        assert_eq!(map[&Some(Value::from("BLUE"))], Some(Value::from("#00F")));
        assert_eq!(to_map(None), Ok(None));
    }

    #[test]
    fn map_from_dense_rows() {
        let array = rows(vec![Some(DynArray::from(vec![1_i32, 2]).into())]);
        let map = to_map(Some(&array)).unwrap().unwrap();
        assert_eq!(map[&Some(Value::Int(1))], Some(Value::Int(2)));
    }

    #[test]
    fn map_errors() {
        let array = rows(vec![row(&["RED"])]);
        assert_eq!(
            to_map(Some(&array)),
            Err(ArrayError::RowTooShort {
                index: 0,
                length: 1
            })
        );

        let array = rows(vec![row(&["RED", "#F00"]), None]);
        assert_eq!(
            to_map(Some(&array)),
            Err(ArrayError::NotAnEntry {
                index: 1,
                found: None
            })
        );

        let array = DynArray::from(vec![1_i8]);
        assert_eq!(
            to_map(Some(&array)),
            Err(ArrayError::NotAnEntry {
                index: 0,
                found: Some(ElementType::Byte)
            })
        );
    }

    #[test]
    fn same_type() {
        let strings = DynArray::empty(ElementType::Str);
        assert_eq!(is_same_type(Some(&strings), Some(&strings)), Ok(true));
        assert_eq!(
            is_same_type(Some(&strings), Some(&DynArray::empty(ElementType::Object))),
            Ok(false)
        );
        assert!(is_same_type(Some(&strings), None).unwrap_err().is_invalid_argument());
    }
}
