//! Boolean conversions.
//!
//! A nullable boolean is an [`Option<bool>`], where [`None`] is the "absent" state.
//!
//! This module converts between:
//! - [`bool`] and [`Option<bool>`]
//! - integer codes
//! - strings such as `"yes"`, `"off"`, `"true"`

//---------------------------------------------------------------------------------------------------- BooleanError
/// An error converting to or reducing booleans.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BooleanError {
    /// The input matched none of the values given for `true`, `false` or absent.
    #[error("the value did not match any specified value")]
    NoMatch,

    /// A reduction was requested over zero booleans.
    #[error("array is empty")]
    EmptyArray,

    /// A reduction met an absent boolean.
    #[error("the array must not contain any null elements, found one at index: {0}")]
    AbsentElement(usize),
}

//---------------------------------------------------------------------------------------------------- Nullable tests
#[inline]
/// Negate a nullable boolean, absent stays absent.
///
/// ```rust
/// # use commons_helper::boolean::*;
/// assert_eq!(negate(Some(true)), Some(false));
/// assert_eq!(negate(Some(false)), Some(true));
/// assert_eq!(negate(None), None);
/// ```
pub const fn negate(value: Option<bool>) -> Option<bool> {
    match value {
        Some(b) => Some(!b),
        None => None,
    }
}

#[inline]
/// Returns `true` only for `Some(true)`.
pub const fn is_true(value: Option<bool>) -> bool {
    matches!(value, Some(true))
}

#[inline]
/// Returns `true` for `Some(false)` and [`None`].
pub const fn is_not_true(value: Option<bool>) -> bool {
    !is_true(value)
}

#[inline]
/// Returns `true` only for `Some(false)`.
pub const fn is_false(value: Option<bool>) -> bool {
    matches!(value, Some(false))
}

#[inline]
/// Returns `true` for `Some(true)` and [`None`].
pub const fn is_not_false(value: Option<bool>) -> bool {
    !is_false(value)
}

#[inline]
/// Convert a nullable boolean to a [`bool`], absent is `false`.
///
/// ```rust
/// # use commons_helper::boolean::*;
/// assert!(to_boolean(Some(true)));
/// assert!(!to_boolean(Some(false)));
/// assert!(!to_boolean(None));
/// ```
pub const fn to_boolean(value: Option<bool>) -> bool {
    is_true(value)
}

#[inline]
/// Convert a nullable boolean to a [`bool`], absent is `value_if_none`.
///
/// ```rust
/// # use commons_helper::boolean::*;
/// assert!(to_boolean_or(None, true));
/// assert!(!to_boolean_or(Some(false), true));
/// ```
pub const fn to_boolean_or(value: Option<bool>, value_if_none: bool) -> bool {
    match value {
        Some(b) => b,
        None => value_if_none,
    }
}

//---------------------------------------------------------------------------------------------------- Integer codes
#[inline]
/// Zero is `false`, everything else is `true`.
///
/// ```rust
/// # use commons_helper::boolean::*;
/// assert!(!int_to_boolean(0));
/// assert!(int_to_boolean(1));
/// assert!(int_to_boolean(-7));
/// ```
pub const fn int_to_boolean(value: i32) -> bool {
    value != 0
}

#[inline]
/// Convert `value` by comparing it against explicit codes.
///
/// `true_value` is checked first.
///
/// ```rust
/// # use commons_helper::boolean::*;
/// assert_eq!(int_to_boolean_with(2, 2, 0), Ok(true));
/// assert_eq!(int_to_boolean_with(0, 2, 0), Ok(false));
/// assert_eq!(int_to_boolean_with(1, 2, 0), Err(BooleanError::NoMatch));
/// ```
///
/// # Errors
/// Returns [`BooleanError::NoMatch`] if `value` equals neither code.
pub const fn int_to_boolean_with(
    value: i32,
    true_value: i32,
    false_value: i32,
) -> Result<bool, BooleanError> {
    if value == true_value {
        Ok(true)
    } else if value == false_value {
        Ok(false)
    } else {
        Err(BooleanError::NoMatch)
    }
}

/// Convert a nullable code into a nullable boolean.
///
/// Each of the codes may itself be absent,
/// in which case it matches an absent `value`.
/// The codes are checked in the order `true`, `false`, absent.
///
/// ```rust
/// # use commons_helper::boolean::*;
/// let codes = (Some(1), Some(0), Some(-1));
/// assert_eq!(int_to_boolean_option(Some(1), codes.0, codes.1, codes.2), Ok(Some(true)));
/// assert_eq!(int_to_boolean_option(Some(-1), codes.0, codes.1, codes.2), Ok(None));
/// assert_eq!(int_to_boolean_option(None, codes.0, codes.1, codes.2), Err(BooleanError::NoMatch));
///
/// // An absent value can be mapped too.
/// assert_eq!(int_to_boolean_option(None, None, Some(0), Some(-1)), Ok(Some(true)));
/// ```
///
/// # Errors
/// Returns [`BooleanError::NoMatch`] if `value` equals none of the codes.
pub fn int_to_boolean_option(
    value: Option<i32>,
    true_value: Option<i32>,
    false_value: Option<i32>,
    none_value: Option<i32>,
) -> Result<Option<bool>, BooleanError> {
    if value == true_value {
        Ok(Some(true))
    } else if value == false_value {
        Ok(Some(false))
    } else if value == none_value {
        Ok(None)
    } else {
        Err(BooleanError::NoMatch)
    }
}

#[inline]
/// `true` is `1`, `false` is `0`.
pub const fn to_integer(value: bool) -> i32 {
    if value {
        1
    } else {
        0
    }
}

#[inline]
/// Map a [`bool`] onto one of two codes.
pub const fn to_integer_with(value: bool, true_value: i32, false_value: i32) -> i32 {
    if value {
        true_value
    } else {
        false_value
    }
}

#[inline]
/// Map a nullable boolean onto one of three codes.
///
/// ```rust
/// # use commons_helper::boolean::*;
/// assert_eq!(option_to_integer(Some(true), 1, 0, -1), 1);
/// assert_eq!(option_to_integer(None, 1, 0, -1), -1);
/// ```
pub const fn option_to_integer(
    value: Option<bool>,
    true_value: i32,
    false_value: i32,
    none_value: i32,
) -> i32 {
    match value {
        Some(b) => to_integer_with(b, true_value, false_value),
        None => none_value,
    }
}

//---------------------------------------------------------------------------------------------------- Strings
/// Parse a nullable boolean from a string.
///
/// Matching is ASCII case-insensitive:
///
/// | Input                              | Output        |
/// |------------------------------------|---------------|
/// | `y`, `t`, `on`, `yes`, `true`      | `Some(true)`  |
/// | `n`, `f`, `no`, `off`, `false`     | `Some(false)` |
/// | anything else, or an absent string | `None`        |
///
/// ```rust
/// # use commons_helper::boolean::*;
/// assert_eq!(str_to_boolean_option(Some("TRUE")), Some(true));
/// assert_eq!(str_to_boolean_option(Some("oN")), Some(true));
/// assert_eq!(str_to_boolean_option(Some("Off")), Some(false));
/// assert_eq!(str_to_boolean_option(Some("n")), Some(false));
/// assert_eq!(str_to_boolean_option(Some("maybe")), None);
/// assert_eq!(str_to_boolean_option(None), None);
/// ```
pub fn str_to_boolean_option(string: Option<&str>) -> Option<bool> {
    const TRUE: [&str; 5] = ["y", "t", "on", "yes", "true"];
    const FALSE: [&str; 5] = ["n", "f", "no", "off", "false"];

    let string = string?;

    if TRUE.iter().any(|t| t.eq_ignore_ascii_case(string)) {
        Some(true)
    } else if FALSE.iter().any(|f| f.eq_ignore_ascii_case(string)) {
        Some(false)
    } else {
        None
    }
}

#[inline]
/// Parse a [`bool`] from a string, see [`str_to_boolean_option`].
///
/// Anything that does not map to `true` is `false`.
pub fn str_to_boolean(string: Option<&str>) -> bool {
    to_boolean(str_to_boolean_option(string))
}

/// Parse a nullable boolean by comparing against explicit strings.
///
/// Comparison is exact (case-sensitive). Each of the strings may be absent,
/// in which case it matches an absent `str`.
///
/// ```rust
/// # use commons_helper::boolean::*;
/// let (t, f, n) = (Some("Y"), Some("N"), Some("-"));
/// assert_eq!(str_to_boolean_with(Some("Y"), t, f, n), Ok(Some(true)));
/// assert_eq!(str_to_boolean_with(Some("-"), t, f, n), Ok(None));
/// assert_eq!(str_to_boolean_with(Some("y"), t, f, n), Err(BooleanError::NoMatch));
/// ```
///
/// # Errors
/// Returns [`BooleanError::NoMatch`] if `str` equals none of the strings.
pub fn str_to_boolean_with(
    string: Option<&str>,
    true_str: Option<&str>,
    false_str: Option<&str>,
    none_str: Option<&str>,
) -> Result<Option<bool>, BooleanError> {
    if string == true_str {
        Ok(Some(true))
    } else if string == false_str {
        Ok(Some(false))
    } else if string == none_str {
        Ok(None)
    } else {
        Err(BooleanError::NoMatch)
    }
}

#[inline]
/// `"true"` or `"false"`.
///
/// ```rust
/// # use commons_helper::boolean::*;
/// assert_eq!(to_str_true_false(true), "true");
/// assert_eq!(to_str_on_off(false), "off");
/// assert_eq!(to_str_yes_no(true), "yes");
/// ```
pub const fn to_str_true_false(value: bool) -> &'static str {
    to_str(value, "true", "false")
}

#[inline]
/// `"on"` or `"off"`.
pub const fn to_str_on_off(value: bool) -> &'static str {
    to_str(value, "on", "off")
}

#[inline]
/// `"yes"` or `"no"`.
pub const fn to_str_yes_no(value: bool) -> &'static str {
    to_str(value, "yes", "no")
}

#[inline]
/// `"true"`, `"false"` or [`None`].
///
/// ```rust
/// # use commons_helper::boolean::*;
/// assert_eq!(option_to_str_true_false(Some(false)), Some("false"));
/// assert_eq!(option_to_str_on_off(Some(true)), Some("on"));
/// assert_eq!(option_to_str_yes_no(None), None);
/// ```
pub const fn option_to_str_true_false(value: Option<bool>) -> Option<&'static str> {
    option_to_str(value, "true", "false", None)
}

#[inline]
/// `"on"`, `"off"` or [`None`].
pub const fn option_to_str_on_off(value: Option<bool>) -> Option<&'static str> {
    option_to_str(value, "on", "off", None)
}

#[inline]
/// `"yes"`, `"no"` or [`None`].
pub const fn option_to_str_yes_no(value: Option<bool>) -> Option<&'static str> {
    option_to_str(value, "yes", "no", None)
}

#[inline]
/// Pick one of two strings.
pub const fn to_str<'a>(value: bool, true_str: &'a str, false_str: &'a str) -> &'a str {
    if value {
        true_str
    } else {
        false_str
    }
}

#[inline]
/// Pick one of three (possibly absent) strings.
pub const fn option_to_str<'a>(
    value: Option<bool>,
    true_str: &'a str,
    false_str: &'a str,
    none_str: Option<&'a str>,
) -> Option<&'a str> {
    match value {
        Some(b) => Some(to_str(b, true_str, false_str)),
        None => none_str,
    }
}

//---------------------------------------------------------------------------------------------------- Reductions
/// Exclusive-or over all `booleans`.
///
/// This is parity: the result is `true` when an odd number of inputs are `true`,
/// which is the same as folding `^` over the input.
///
/// ```rust
/// # use commons_helper::boolean::*;
/// assert_eq!(xor(&[true, false]), Ok(true));
/// assert_eq!(xor(&[true, true]), Ok(false));
/// assert_eq!(xor(&[true, true, true]), Ok(true));
/// assert_eq!(xor(&[]), Err(BooleanError::EmptyArray));
/// ```
///
/// # Errors
/// Returns [`BooleanError::EmptyArray`] if `booleans` is empty.
pub fn xor(booleans: &[bool]) -> Result<bool, BooleanError> {
    if booleans.is_empty() {
        return Err(BooleanError::EmptyArray);
    }

    Ok(booleans.iter().fold(false, |acc, b| acc ^ b))
}

/// Exclusive-or over nullable `booleans`, see [`xor`].
///
/// ```rust
/// # use commons_helper::boolean::*;
/// assert_eq!(xor_option(&[Some(true), Some(false)]), Ok(true));
/// assert_eq!(xor_option(&[Some(true), None]), Err(BooleanError::AbsentElement(1)));
/// ```
///
/// # Errors
/// Returns [`BooleanError::EmptyArray`] if `booleans` is empty,
/// or [`BooleanError::AbsentElement`] naming the first absent boolean.
pub fn xor_option(booleans: &[Option<bool>]) -> Result<bool, BooleanError> {
    if booleans.is_empty() {
        return Err(BooleanError::EmptyArray);
    }

    booleans
        .iter()
        .enumerate()
        .try_fold(false, |acc, (i, b)| match b {
            Some(b) => Ok(acc ^ b),
            None => Err(BooleanError::AbsentElement(i)),
        })
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn nullable_tests() {
        for (input, t, nt, f, nf) in [
            (Some(true), true, false, false, true),
            (Some(false), false, true, true, false),
            (None, false, true, false, true),
        ] {
            assert_eq!(is_true(input), t);
            assert_eq!(is_not_true(input), nt);
            assert_eq!(is_false(input), f);
            assert_eq!(is_not_false(input), nf);
        }
    }

    #[test]
    fn integer_codes() {
        assert_eq!(to_integer(true), 1);
        assert_eq!(to_integer(false), 0);
        assert_eq!(to_integer_with(false, 10, 20), 20);
        assert_eq!(option_to_integer(Some(false), 1, 0, -1), 0);
        assert_eq!(
            int_to_boolean_option(Some(0), Some(1), Some(0), None),
            Ok(Some(false))
        );
    }

    #[test]
    fn rendering() {
        for (value, true_false, on_off, yes_no) in [
            (true, "true", "on", "yes"),
            (false, "false", "off", "no"),
        ] {
            assert_eq!(to_str_true_false(value), true_false);
            assert_eq!(to_str_on_off(value), on_off);
            assert_eq!(to_str_yes_no(value), yes_no);

            assert_eq!(option_to_str_true_false(Some(value)), Some(true_false));
            assert_eq!(option_to_str_on_off(Some(value)), Some(on_off));
            assert_eq!(option_to_str_yes_no(Some(value)), Some(yes_no));
        }

        assert_eq!(option_to_str_true_false(None), None);
        assert_eq!(option_to_str_on_off(None), None);
        assert_eq!(option_to_str_yes_no(None), None);

        assert_eq!(to_str(true, "1", "0"), "1");
        assert_eq!(option_to_str(None, "1", "0", Some("?")), Some("?"));
        assert_eq!(option_to_str(Some(false), "1", "0", Some("?")), Some("0"));
    }

    #[test]
    fn string_table_rejects_near_misses() {
        for s in ["", "ye", "tru", "falsey", "o", "of", "onn", " yes"] {
            assert_eq!(str_to_boolean_option(Some(s)), None, "{s}");
            assert!(!str_to_boolean(Some(s)));
        }
    }

    #[test]
    fn explicit_strings_absent() {
        assert_eq!(
            str_to_boolean_with(None, Some("a"), None, Some("c")),
            Ok(Some(false))
        );
        assert_eq!(
            str_to_boolean_with(None, Some("a"), Some("b"), Some("c")),
            Err(BooleanError::NoMatch)
        );
    }

    proptest! {
        #[test]
        fn xor_is_parity(booleans in proptest::collection::vec(any::<bool>(), 1..64)) {
            let trues = booleans.iter().filter(|b| **b).count();
            prop_assert_eq!(xor(&booleans), Ok(trues % 2 == 1));

            let nullable = booleans.iter().copied().map(Some).collect::<Vec<_>>();
            prop_assert_eq!(xor_option(&nullable), xor(&booleans));
        }
    }
}
