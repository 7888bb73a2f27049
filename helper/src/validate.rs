//! Precondition validation.
//!
//! Every function here checks one condition and returns
//! [`ValidationError`] carrying the caller's message when it does not hold.
//!
//! These are meant for _arguments_, i.e. conditions a caller
//! can violate, as such they never panic.

//---------------------------------------------------------------------------------------------------- Use
use std::{borrow::Cow, collections::HashMap, fmt::Display};

//---------------------------------------------------------------------------------------------------- ValidationError
/// A failed precondition.
///
/// This is the "invalid argument" error of this workspace,
/// the message is whatever the caller supplied to the check.
///
/// ```rust
/// # use commons_helper::validate::*;
/// let err = is_true(1 + 1 == 3, "math is broken").unwrap_err();
/// assert_eq!(err.to_string(), "math is broken");
/// assert_eq!(err.message(), "math is broken");
/// ```
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Hash)]
#[error("{message}")]
pub struct ValidationError {
    message: Cow<'static, str>,
}

impl ValidationError {
    /// Create a new [`ValidationError`] with a `message`.
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message describing the failed condition.
    pub fn message(&self) -> &str {
        &self.message
    }
}

//---------------------------------------------------------------------------------------------------- Free functions
#[inline]
/// Fail with `message` if `expression` is `false`.
///
/// ```rust
/// # use commons_helper::validate::*;
/// assert!(is_true(true, "unused").is_ok());
/// assert_eq!(is_true(false, "must hold"), Err(ValidationError::new("must hold")));
/// ```
///
/// # Errors
/// Returns [`ValidationError`] if `expression` is `false`.
pub fn is_true(
    expression: bool,
    message: impl Into<Cow<'static, str>>,
) -> Result<(), ValidationError> {
    if expression {
        Ok(())
    } else {
        Err(ValidationError::new(message))
    }
}

#[inline]
/// Fail with `message` followed by the offending `value` if `expression` is `false`.
///
/// The value is only formatted on failure.
///
/// ```rust
/// # use commons_helper::validate::*;
/// let count = -3;
/// let err = is_true_with(count >= 0, "count must not be negative: ", count).unwrap_err();
/// assert_eq!(err.message(), "count must not be negative: -3");
/// ```
///
/// # Errors
/// Returns [`ValidationError`] if `expression` is `false`.
pub fn is_true_with<V: Display>(
    expression: bool,
    message: &str,
    value: V,
) -> Result<(), ValidationError> {
    if expression {
        Ok(())
    } else {
        Err(ValidationError::new(format!("{message}{value}")))
    }
}

#[inline]
/// Fail with `message` if `object` is [`None`], else return the inner value.
///
/// ```rust
/// # use commons_helper::validate::*;
/// assert_eq!(not_none(Some(5), "unused"), Ok(5));
/// assert!(not_none(None::<u8>, "The Array must not be null").is_err());
/// ```
///
/// # Errors
/// Returns [`ValidationError`] if `object` is [`None`].
pub fn not_none<T>(
    object: Option<T>,
    message: impl Into<Cow<'static, str>>,
) -> Result<T, ValidationError> {
    object.ok_or_else(|| ValidationError::new(message))
}

#[inline]
/// Fail with `message` if `slice` is absent or has no elements.
///
/// ```rust
/// # use commons_helper::validate::*;
/// assert_eq!(not_empty(Some([1, 2].as_slice()), "unused"), Ok([1, 2].as_slice()));
/// assert!(not_empty(Some([0_u8; 0].as_slice()), "empty").is_err());
/// assert!(not_empty(None::<&[u8]>, "absent").is_err());
/// ```
///
/// # Errors
/// Returns [`ValidationError`] if `slice` is [`None`] or empty.
pub fn not_empty<T>(
    slice: Option<&[T]>,
    message: impl Into<Cow<'static, str>>,
) -> Result<&[T], ValidationError> {
    match slice {
        Some(slice) if !slice.is_empty() => Ok(slice),
        _ => Err(ValidationError::new(message)),
    }
}

#[inline]
/// Fail with `message` if `string` is absent or `""`.
///
/// ```rust
/// # use commons_helper::validate::*;
/// assert_eq!(not_empty_str(Some("a"), "unused"), Ok("a"));
/// assert!(not_empty_str(Some(""), "empty").is_err());
/// assert!(not_empty_str(None, "absent").is_err());
/// ```
///
/// # Errors
/// Returns [`ValidationError`] if `string` is [`None`] or empty.
pub fn not_empty_str(
    string: Option<&str>,
    message: impl Into<Cow<'static, str>>,
) -> Result<&str, ValidationError> {
    match string {
        Some(string) if !string.is_empty() => Ok(string),
        _ => Err(ValidationError::new(message)),
    }
}

#[inline]
/// Fail with `message` if `map` is absent or has no entries.
///
/// # Errors
/// Returns [`ValidationError`] if `map` is [`None`] or empty.
pub fn not_empty_map<K, V, S>(
    map: Option<&HashMap<K, V, S>>,
    message: impl Into<Cow<'static, str>>,
) -> Result<&HashMap<K, V, S>, ValidationError> {
    match map {
        Some(map) if !map.is_empty() => Ok(map),
        _ => Err(ValidationError::new(message)),
    }
}

/// Fail if `slice` is absent or any of its elements are [`None`].
///
/// The error message names the index of the first absent element.
///
/// ```rust
/// # use commons_helper::validate::*;
/// assert!(no_none_elements(Some([Some(1), Some(2)].as_slice())).is_ok());
///
/// let err = no_none_elements(Some([Some(1), None, None].as_slice())).unwrap_err();
/// assert_eq!(err.message(), "The validated array contains null element at index: 1");
/// ```
///
/// # Errors
/// Returns [`ValidationError`] if `slice` is [`None`] or contains a [`None`].
pub fn no_none_elements<T>(slice: Option<&[Option<T>]>) -> Result<(), ValidationError> {
    let slice = not_none(slice, "The validated object is null")?;

    match slice.iter().position(Option::is_none) {
        Some(index) => Err(ValidationError::new(format!(
            "The validated array contains null element at index: {index}"
        ))),
        None => Ok(()),
    }
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn owned_and_borrowed_messages() {
        let owned = is_true(false, String::from("owned")).unwrap_err();
        let borrowed = is_true(false, "owned").unwrap_err();
        assert_eq!(owned, borrowed);
    }

    #[test]
    fn not_empty_map_checks() {
        let mut map = HashMap::new();
        assert!(not_empty_map(Some(&map), "empty").is_err());
        assert!(not_empty_map(None::<&HashMap<u8, u8>>, "absent").is_err());

        map.insert(1, 2);
        assert_eq!(not_empty_map(Some(&map), "unused").unwrap().len(), 1);
    }

    #[test]
    fn no_none_elements_absent_and_empty() {
        assert_eq!(
            no_none_elements::<u8>(None).unwrap_err().message(),
            "The validated object is null"
        );
        assert!(no_none_elements::<u8>(Some(&[])).is_ok());
    }
}
