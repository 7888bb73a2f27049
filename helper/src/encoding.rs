//! Standard character encodings.
//!
//! Every platform is required to support these 6 charsets,
//! so code handling text can rely on their names without checking
//! for support at runtime. [`is_supported`] answers whether a
//! name refers to one of them.

//---------------------------------------------------------------------------------------------------- Use
use strum::{AsRefStr, Display, EnumIs, EnumString, IntoStaticStr, VariantArray};

//---------------------------------------------------------------------------------------------------- Constants
/// ISO Latin Alphabet #1, also known as ISO-LATIN-1.
pub const ISO_8859_1: &str = "ISO-8859-1";

/// Seven-bit ASCII, also known as ISO646-US, the Basic Latin block of Unicode.
pub const US_ASCII: &str = "US-ASCII";

/// Sixteen-bit Unicode Transformation Format, byte order specified by a mandatory initial byte-order mark.
pub const UTF_16: &str = "UTF-16";

/// Sixteen-bit Unicode Transformation Format, big-endian byte order.
pub const UTF_16BE: &str = "UTF-16BE";

/// Sixteen-bit Unicode Transformation Format, little-endian byte order.
pub const UTF_16LE: &str = "UTF-16LE";

/// Eight-bit Unicode Transformation Format.
pub const UTF_8: &str = "UTF-8";

//---------------------------------------------------------------------------------------------------- Charset
/// One of the standard charsets.
///
/// Parsing accepts the canonical name and common aliases, ignoring ASCII case.
/// [`Display`](std::fmt::Display) is always the canonical name.
///
/// ```rust
/// # use commons_helper::encoding::*;
/// # use std::str::FromStr;
/// assert_eq!(Charset::from_str("utf8"), Ok(Charset::Utf8));
/// assert_eq!(Charset::from_str("latin1"), Ok(Charset::IsoLatin1));
/// assert_eq!(Charset::Utf16Le.to_string(), UTF_16LE);
/// assert!(Charset::from_str("EBCDIC").is_err());
/// ```
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    AsRefStr,
    Display,
    EnumIs,
    EnumString,
    IntoStaticStr,
    VariantArray,
)]
#[strum(ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Charset {
    #[strum(
        to_string = "ISO-8859-1",
        serialize = "ISO8859_1",
        serialize = "ISO_8859_1",
        serialize = "LATIN1",
        serialize = "ISO-LATIN-1"
    )]
    IsoLatin1,
    #[strum(to_string = "US-ASCII", serialize = "ASCII", serialize = "ISO646-US")]
    UsAscii,
    #[strum(to_string = "UTF-16", serialize = "UTF16")]
    Utf16,
    #[strum(to_string = "UTF-16BE", serialize = "UTF16BE", serialize = "UnicodeBigUnmarked")]
    Utf16Be,
    #[strum(
        to_string = "UTF-16LE",
        serialize = "UTF16LE",
        serialize = "UnicodeLittleUnmarked"
    )]
    Utf16Le,
    #[strum(to_string = "UTF-8", serialize = "UTF8")]
    Utf8,
}

impl Charset {
    /// The canonical name of this charset.
    ///
    /// ```rust
    /// # use commons_helper::encoding::*;
    /// assert_eq!(Charset::UsAscii.name(), US_ASCII);
    /// ```
    pub fn name(self) -> &'static str {
        self.into()
    }
}

//---------------------------------------------------------------------------------------------------- Free functions
/// Returns `true` if `name` refers to one of the [`Charset`]s.
///
/// An absent name is never supported.
///
/// ```rust
/// # use commons_helper::encoding::*;
/// assert!(is_supported(Some(UTF_8)));
/// assert!(is_supported(Some("us-ascii")));
/// assert!(!is_supported(Some("KOI8-R-X")));
/// assert!(!is_supported(Some("")));
/// assert!(!is_supported(None));
/// ```
pub fn is_supported(name: Option<&str>) -> bool {
    name.is_some_and(|name| name.parse::<Charset>().is_ok())
}
