//! Character conversions and ASCII classification.
//!
//! The classification functions only consider the 7-bit ASCII range,
//! anything above it is never alphabetic/numeric/etc here.

//---------------------------------------------------------------------------------------------------- Constants
/// Line feed, `'\n'`.
pub const LF: char = '\n';

/// Carriage return, `'\r'`.
pub const CR: char = '\r';

//---------------------------------------------------------------------------------------------------- CharError
/// An error converting to a character or from a character.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CharError {
    /// A character was requested from an empty string.
    #[error("the string must not be empty")]
    Empty,

    /// The character is not an ASCII digit.
    #[error("the character is not ASCII numeric: {0:?}")]
    NotNumeric(char),
}

//---------------------------------------------------------------------------------------------------- Conversions
#[inline]
/// Returns the first character of `string`.
///
/// ```rust
/// # use commons_helper::chars::*;
/// assert_eq!(to_char("A"), Ok('A'));
/// assert_eq!(to_char("BA"), Ok('B'));
/// assert_eq!(to_char(""), Err(CharError::Empty));
/// ```
///
/// # Errors
/// Returns [`CharError::Empty`] if `string` is empty.
pub fn to_char(string: &str) -> Result<char, CharError> {
    string.chars().next().ok_or(CharError::Empty)
}

#[inline]
/// Returns the first character of `string`, or `default` if absent or empty.
///
/// ```rust
/// # use commons_helper::chars::*;
/// assert_eq!(to_char_or(None, 'X'), 'X');
/// assert_eq!(to_char_or(Some(""), 'X'), 'X');
/// assert_eq!(to_char_or(Some("BA"), 'X'), 'B');
/// ```
pub fn to_char_or(string: Option<&str>, default: char) -> char {
    string.and_then(|s| s.chars().next()).unwrap_or(default)
}

#[inline]
/// Returns the numeric value of an ASCII digit.
///
/// ```rust
/// # use commons_helper::chars::*;
/// assert_eq!(to_int_value('3'), Ok(3));
/// assert_eq!(to_int_value('A'), Err(CharError::NotNumeric('A')));
/// ```
///
/// # Errors
/// Returns [`CharError::NotNumeric`] if `ch` is not `'0'..='9'`.
pub const fn to_int_value(ch: char) -> Result<u32, CharError> {
    if is_ascii_numeric(ch) {
        Ok(ch as u32 - '0' as u32)
    } else {
        Err(CharError::NotNumeric(ch))
    }
}

#[inline]
/// Returns the numeric value of an ASCII digit, or `default`.
pub const fn to_int_value_or(ch: char, default: u32) -> u32 {
    match to_int_value(ch) {
        Ok(value) => value,
        Err(_) => default,
    }
}

/// Format `ch` as a Unicode escape, e.g. `"\\u0041"`.
///
/// The hexadecimal digits are lowercase and padded to at least 4.
///
/// ```rust
/// # use commons_helper::chars::*;
/// assert_eq!(unicode_escaped(' '), "\\u0020");
/// assert_eq!(unicode_escaped('A'), "\\u0041");
/// assert_eq!(unicode_escaped('\u{fffe}'), "\\ufffe");
/// assert_eq!(unicode_escaped('\u{1f600}'), "\\u1f600");
/// ```
pub fn unicode_escaped(ch: char) -> String {
    format!("\\u{:04x}", u32::from(ch))
}

//---------------------------------------------------------------------------------------------------- Classification
#[inline]
/// `ch < 128`
pub const fn is_ascii(ch: char) -> bool {
    (ch as u32) < 128
}

#[inline]
/// `32 <= ch < 127`, i.e. space and every visible ASCII character.
///
/// ```rust
/// # use commons_helper::chars::*;
/// assert!(is_ascii_printable(' '));
/// assert!(is_ascii_printable('~'));
/// assert!(!is_ascii_printable('\n'));
/// assert!(!is_ascii_printable('\u{7f}'));
/// ```
pub const fn is_ascii_printable(ch: char) -> bool {
    let ch = ch as u32;
    ch >= 32 && ch < 127
}

#[inline]
/// `ch < 32` or `ch == 127`.
pub const fn is_ascii_control(ch: char) -> bool {
    let ch = ch as u32;
    ch < 32 || ch == 127
}

#[inline]
/// `'a'..='z'` or `'A'..='Z'`.
pub const fn is_ascii_alpha(ch: char) -> bool {
    is_ascii_alpha_upper(ch) || is_ascii_alpha_lower(ch)
}

#[inline]
/// `'A'..='Z'`.
pub const fn is_ascii_alpha_upper(ch: char) -> bool {
    matches!(ch, 'A'..='Z')
}

#[inline]
/// `'a'..='z'`.
pub const fn is_ascii_alpha_lower(ch: char) -> bool {
    matches!(ch, 'a'..='z')
}

#[inline]
/// `'0'..='9'`.
pub const fn is_ascii_numeric(ch: char) -> bool {
    matches!(ch, '0'..='9')
}

#[inline]
/// [`is_ascii_alpha`] or [`is_ascii_numeric`].
pub const fn is_ascii_alphanumeric(ch: char) -> bool {
    is_ascii_alpha(ch) || is_ascii_numeric(ch)
}
