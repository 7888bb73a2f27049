//! Conversions between dense arrays and nullable ("boxed") arrays.

//---------------------------------------------------------------------------------------------------- Import
use crate::error::ArrayError;

//---------------------------------------------------------------------------------------------------- Free functions
/// Convert nullable elements into dense elements.
///
/// Absent stays absent.
///
/// ```rust
/// # use commons_array::*;
/// assert_eq!(to_primitive(Some([Some(1), Some(2)].as_slice())), Ok(Some(vec![1, 2])));
/// assert_eq!(to_primitive::<u8>(None), Ok(None));
///
/// let err = to_primitive(Some([Some(1), None].as_slice())).unwrap_err();
/// assert_eq!(err, ArrayError::AbsentElement { index: 1 });
/// ```
///
/// # Errors
/// Returns [`ArrayError::AbsentElement`] naming the first absent element.
pub fn to_primitive<T: Clone>(array: Option<&[Option<T>]>) -> Result<Option<Vec<T>>, ArrayError> {
    let Some(array) = array else {
        return Ok(None);
    };

    array
        .iter()
        .enumerate()
        .map(|(index, element)| element.clone().ok_or(ArrayError::AbsentElement { index }))
        .collect::<Result<Vec<T>, ArrayError>>()
        .map(Some)
}

/// Convert nullable elements into dense elements, replacing absent ones with `value_for_absent`.
///
/// ```rust
/// # use commons_array::*;
/// let array = [Some(true), None];
/// assert_eq!(to_primitive_or(Some(array.as_slice()), false), Some(vec![true, false]));
/// assert_eq!(to_primitive_or(None, false), None);
/// ```
pub fn to_primitive_or<T: Clone>(array: Option<&[Option<T>]>, value_for_absent: T) -> Option<Vec<T>> {
    array.map(|array| {
        array
            .iter()
            .map(|element| element.clone().unwrap_or_else(|| value_for_absent.clone()))
            .collect()
    })
}

/// Convert dense elements into nullable elements, all of them present.
///
/// ```rust
/// # use commons_array::*;
/// assert_eq!(to_object(Some([1, 2].as_slice())), Some(vec![Some(1), Some(2)]));
/// assert_eq!(to_object::<u8>(None), None);
/// ```
pub fn to_object<T: Clone>(array: Option<&[T]>) -> Option<Vec<Option<T>>> {
    array.map(|array| array.iter().cloned().map(Some).collect())
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn empty() {
        assert_eq!(to_primitive::<u8>(Some(&[])), Ok(Some(vec![])));
        assert_eq!(to_object::<u8>(Some(&[])), Some(vec![]));
    }

    #[test]
    fn first_absent_is_reported() {
        let array = [None, Some(1), None];
        assert_eq!(
            to_primitive(Some(array.as_slice())),
            Err(ArrayError::AbsentElement { index: 0 })
        );
    }

    proptest! {
        #[test]
        /// Boxing then unboxing is the identity.
        fn unbox_boxed(array in prop::collection::vec(any::<i64>(), 0..32)) {
            let boxed = to_object(Some(array.as_slice())).unwrap();
            prop_assert_eq!(to_primitive(Some(boxed.as_slice())), Ok(Some(array.clone())));
            prop_assert_eq!(to_primitive_or(Some(boxed.as_slice()), 0), Some(array));
        }
    }
}
