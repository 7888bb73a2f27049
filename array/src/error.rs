//! Array error types.

//---------------------------------------------------------------------------------------------------- Import
use commons_helper::validate::ValidationError;

use crate::dynamic::ElementType;

//---------------------------------------------------------------------------------------------------- ArrayError
/// Errors that occur during array operations.
///
/// Absent arrays, failed searches and out-of-range `subarray`
/// bounds are not errors, they have defined results.
///
/// # Handling
/// Each variant is either an out-of-bounds error
/// ([`ArrayError::is_out_of_bounds`]) or an invalid argument
/// ([`ArrayError::is_invalid_argument`]). Both are caller bugs,
/// and a failed operation has not modified its inputs.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ArrayError {
    /// A position-based operation was given an index outside the array.
    #[error("Index: {index}, Length: {length}")]
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// The length of the array it was used on.
        length: usize,
    },

    /// A value of one element type was stored in an array of another.
    #[error("Cannot store {found} in an array of {expected}")]
    TypeMismatch {
        /// The element type of the array.
        expected: ElementType,
        /// The element type of the rejected value.
        found: ElementType,
    },

    /// An absent element was found where a primitive is required.
    #[error("Array element {index} is null and has no primitive value")]
    AbsentElement {
        /// The index of the first absent element.
        index: usize,
    },

    /// A primitive conversion was requested for an element type that has no primitive form.
    #[error("{0} has no primitive form")]
    NoPrimitiveForm(ElementType),

    /// A row given to a map conversion has fewer than 2 columns.
    #[error("Array element {index} has a length less than 2: {length}")]
    RowTooShort {
        /// The index of the row.
        index: usize,
        /// The length of the row.
        length: usize,
    },

    /// An element given to a map conversion is neither an entry nor a row.
    #[error(
        "Array element {index}, '{}', is neither an entry nor an array",
        .found.map_or("null", ElementType::name)
    )]
    NotAnEntry {
        /// The index of the element.
        index: usize,
        /// The element type of the element, [`None`] if absent.
        found: Option<ElementType>,
    },

    /// A delegated precondition failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ArrayError {
    /// Returns `true` if this is an out-of-bounds error.
    ///
    /// ```rust
    /// # use commons_array::*;
    /// let err = remove(Some([10].as_slice()), 1).unwrap_err();
    /// assert!(err.is_out_of_bounds());
    /// assert!(!err.is_invalid_argument());
    /// assert_eq!(err.to_string(), "Index: 1, Length: 1");
    /// ```
    pub const fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::IndexOutOfBounds { .. })
    }

    /// Returns `true` if this is an invalid-argument error.
    pub const fn is_invalid_argument(&self) -> bool {
        !self.is_out_of_bounds()
    }
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn messages() {
        let err = ArrayError::TypeMismatch {
            expected: ElementType::Str,
            found: ElementType::Int,
        };
        assert_eq!(err.to_string(), "Cannot store int in an array of string");
        assert!(err.is_invalid_argument());

        let err = ArrayError::NotAnEntry {
            index: 2,
            found: None,
        };
        assert_eq!(
            err.to_string(),
            "Array element 2, 'null', is neither an entry nor an array"
        );

        let err = ArrayError::from(ValidationError::new("The Array must not be null"));
        assert_eq!(err.to_string(), "The Array must not be null");
        assert!(err.is_invalid_argument());
    }
}
