//! Array formatting, `{e0,e1,...}`.

//---------------------------------------------------------------------------------------------------- Import
use std::fmt::{self, Display, Write};

//---------------------------------------------------------------------------------------------------- Constants
/// How an absent element is rendered.
pub const NULL_TEXT: &str = "<null>";

/// How an absent array is rendered by [`to_string`].
pub const ABSENT_ARRAY_TEXT: &str = "{}";

//---------------------------------------------------------------------------------------------------- Helpers
/// [`Display`] for a nullable element.
pub(crate) struct Nullable<'a, T>(pub(crate) Option<&'a T>);

impl<T: Display> Display for Nullable<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(element) => element.fmt(f),
            None => f.write_str(NULL_TEXT),
        }
    }
}

/// Write `elements` as `{e0,e1,...}`.
pub(crate) fn write_elements<W, I>(w: &mut W, elements: I) -> fmt::Result
where
    W: Write,
    I: IntoIterator,
    I::Item: Display,
{
    w.write_char('{')?;
    for (index, element) in elements.into_iter().enumerate() {
        if index != 0 {
            w.write_char(',')?;
        }
        write!(w, "{element}")?;
    }
    w.write_char('}')
}

/// Render `elements` into a new [`String`].
fn render<I>(elements: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut string = String::new();
    // Writing into a `String` cannot fail.
    write_elements(&mut string, elements)
        .map(|()| string)
        .unwrap_or_default()
}

//---------------------------------------------------------------------------------------------------- Free functions
#[inline]
/// Render the array as `{e0,e1,...}`, an absent array is `{}`.
///
/// ```rust
/// # use commons_array::*;
/// assert_eq!(to_string(Some([1, 2, 3].as_slice())), "{1,2,3}");
/// assert_eq!(to_string::<u8>(Some(&[])), "{}");
/// assert_eq!(to_string::<u8>(None), "{}");
/// ```
pub fn to_string<T: Display>(array: Option<&[T]>) -> String {
    to_string_or(array, ABSENT_ARRAY_TEXT)
}

/// Render the array as `{e0,e1,...}`, an absent array is `if_absent`.
///
/// ```rust
/// # use commons_array::*;
/// assert_eq!(to_string_or(Some(["a", "b"].as_slice()), "<none>"), "{a,b}");
/// assert_eq!(to_string_or::<u8>(None, "<none>"), "<none>");
/// ```
pub fn to_string_or<T: Display>(array: Option<&[T]>, if_absent: &str) -> String {
    match array {
        Some(array) => render(array),
        None => if_absent.to_owned(),
    }
}

/// Render nullable elements, absent elements are [`NULL_TEXT`].
///
/// ```rust
/// # use commons_array::*;
/// assert_eq!(to_string_nullable(Some([Some("a"), None].as_slice())), "{a,<null>}");
/// assert_eq!(to_string_nullable::<u8>(None), "{}");
/// ```
pub fn to_string_nullable<T: Display>(array: Option<&[Option<T>]>) -> String {
    match array {
        Some(array) => render(array.iter().map(|element| Nullable(element.as_ref()))),
        None => ABSENT_ARRAY_TEXT.to_owned(),
    }
}
