//! Random string generation.
//!
//! Strings are drawn one character at a time, either from a range of
//! Unicode code points or from an explicit character set, optionally
//! filtered down to letters and/or numbers.
//!
//! The quick functions ([`random_alphanumeric`], [`random_numeric`], ...) use
//! [`rand::thread_rng`]. For anything else build a [`RandomConfig`] and pass
//! an [`Rng`] to [`RandomConfig::generate`].
//!
//! None of this is suitable for passwords or keys.

//---------------------------------------------------------------------------------------------------- Use
use std::ops::Range;

use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

//---------------------------------------------------------------------------------------------------- Constants
/// The first code point of the default range, `' '`.
pub const DEFAULT_START: u32 = ' ' as u32;

/// One past the last code point of the default range, `'z' + 1`.
pub const DEFAULT_END: u32 = 'z' as u32 + 1;

/// One past the last Unicode scalar value.
pub const UNICODE_END: u32 = char::MAX as u32 + 1;

/// The printable ASCII range, `' '..='~'`.
const ASCII_PRINTABLE: Range<u32> = 32..127;

//---------------------------------------------------------------------------------------------------- RandomError
/// An invalid [`RandomConfig`].
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RandomError {
    /// `start` must be less than `end`, and `end` at most [`UNICODE_END`].
    #[error("invalid range: {start}..{end}")]
    InvalidRange {
        /// Inclusive start.
        start: u32,
        /// Exclusive end.
        end: u32,
    },

    /// The range indexes past the end of the character set.
    #[error("range end {end} is outside the character set of length {length}")]
    RangeOutsideSet {
        /// Exclusive end.
        end: u32,
        /// Length of the character set.
        length: usize,
    },

    /// An explicit character set was given but it has no characters.
    #[error("the character set must not be empty")]
    EmptyCharacterSet,

    /// Nothing in the range passes the letter/number filter,
    /// so no string could ever be generated.
    #[error("no character in the range satisfies the requested filter")]
    NoMatchingCharacters,
}

//---------------------------------------------------------------------------------------------------- RandomConfigBuilder
/// Builder for [`RandomConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RandomConfigBuilder {
    /// [`RandomConfig::count`].
    count: usize,

    /// [`RandomConfig::range`].
    range: Option<(u32, u32)>,

    /// [`RandomConfig::letters`].
    letters: bool,

    /// [`RandomConfig::numbers`].
    numbers: bool,

    /// [`RandomConfig::chars`].
    chars: Option<Vec<char>>,
}

impl RandomConfigBuilder {
    /// Create a new [`RandomConfigBuilder`] producing `count` characters.
    ///
    /// [`RandomConfigBuilder::build`] can be called immediately
    /// after this function to use default values.
    pub const fn new(count: usize) -> Self {
        Self {
            count,
            range: None,
            letters: false,
            numbers: false,
            chars: None,
        }
    }

    /// Build into a [`RandomConfig`].
    ///
    /// # Default values
    /// - No filter: every character in the range is allowed
    /// - No character set: characters are code points
    /// - No range: see [`RandomConfig::range`]
    pub fn build(self) -> RandomConfig {
        RandomConfig {
            count: self.count,
            range: self.range,
            letters: self.letters,
            numbers: self.numbers,
            chars: self.chars,
        }
    }

    /// Draw from `start..end`.
    ///
    /// These are code points, or indices when [`Self::chars`] is set.
    #[must_use]
    pub const fn range(mut self, start: u32, end: u32) -> Self {
        self.range = Some((start, end));
        self
    }

    /// Allow letters through the filter.
    #[must_use]
    pub const fn letters(mut self, letters: bool) -> Self {
        self.letters = letters;
        self
    }

    /// Allow numbers through the filter.
    #[must_use]
    pub const fn numbers(mut self, numbers: bool) -> Self {
        self.numbers = numbers;
        self
    }

    /// Draw from an explicit character set.
    #[must_use]
    pub fn chars(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.chars = Some(chars.into_iter().collect());
        self
    }
}

//---------------------------------------------------------------------------------------------------- RandomConfig
/// Random string configuration.
///
/// For construction, use [`RandomConfigBuilder`].
///
/// ```rust
/// # use commons_helper::random::*;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let config = RandomConfigBuilder::new(16).letters(true).build();
/// let string = config.generate(&mut StdRng::seed_from_u64(0)).unwrap();
///
/// assert_eq!(string.chars().count(), 16);
/// assert!(string.chars().all(|c| c.is_ascii_alphabetic()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RandomConfig {
    /// How many characters to generate.
    pub count: usize,

    /// The `(start, end)` range characters are drawn from.
    ///
    /// If this is [`None`]:
    /// - with [`RandomConfig::chars`], the whole character set is used
    /// - with [`RandomConfig::letters`] or [`RandomConfig::numbers`], [`DEFAULT_START`]..[`DEFAULT_END`]
    /// - else every Unicode scalar value
    pub range: Option<(u32, u32)>,

    /// Keep letters (Unicode alphabetic).
    pub letters: bool,

    /// Keep numbers (Unicode numeric).
    ///
    /// If neither this nor [`RandomConfig::letters`] is set,
    /// every character is kept.
    pub numbers: bool,

    /// An explicit character set to draw from.
    pub chars: Option<Vec<char>>,
}

impl RandomConfig {
    /// Create a new [`RandomConfig`] with default settings, see [`RandomConfigBuilder::build`].
    pub fn new(count: usize) -> Self {
        RandomConfigBuilder::new(count).build()
    }

    /// Check this configuration can produce a string.
    ///
    /// This is called by [`RandomConfig::generate`].
    ///
    /// # Errors
    /// Returns a [`RandomError`] describing the first problem found.
    pub fn validate(&self) -> Result<(), RandomError> {
        self.pool().map(drop)
    }

    /// Generate a random string with `rng`.
    ///
    /// A `count` of zero always yields `""`, even if the rest of the configuration is invalid.
    ///
    /// # Errors
    /// See [`RandomConfig::validate`].
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<String, RandomError> {
        if self.count == 0 {
            return Ok(String::new());
        }

        let pool = self.pool()?;
        Ok(pool.sample(rng, self.count, self.filter()))
    }

    /// Resolve the range into a [`Pool`] and check it can satisfy the filter.
    fn pool(&self) -> Result<Pool<'_>, RandomError> {
        let filter = self.filter();

        let pool = if let Some(chars) = &self.chars {
            if chars.is_empty() {
                return Err(RandomError::EmptyCharacterSet);
            }

            let length = u32::try_from(chars.len()).unwrap_or(u32::MAX);
            let (start, end) = self.range.unwrap_or((0, length));

            if start >= end {
                return Err(RandomError::InvalidRange { start, end });
            }
            if end > length {
                return Err(RandomError::RangeOutsideSet {
                    end,
                    length: chars.len(),
                });
            }

            Pool::Set(&chars[start as usize..end as usize])
        } else {
            let (start, end) = self.range.unwrap_or(if filter.is_open() {
                (0, UNICODE_END)
            } else {
                (DEFAULT_START, DEFAULT_END)
            });

            if start >= end || end > UNICODE_END {
                return Err(RandomError::InvalidRange { start, end });
            }

            Pool::Range(start..end)
        };

        if pool.any(filter) {
            Ok(pool)
        } else {
            Err(RandomError::NoMatchingCharacters)
        }
    }

    const fn filter(&self) -> Filter {
        Filter {
            letters: self.letters,
            numbers: self.numbers,
        }
    }
}

//---------------------------------------------------------------------------------------------------- Filter
/// Which characters are kept after being drawn.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct Filter {
    letters: bool,
    numbers: bool,
}

impl Filter {
    /// Keeps everything.
    const OPEN: Self = Self {
        letters: false,
        numbers: false,
    };

    const fn is_open(self) -> bool {
        !self.letters && !self.numbers
    }

    fn accepts(self, ch: char) -> bool {
        self.is_open() || (self.letters && ch.is_alphabetic()) || (self.numbers && ch.is_numeric())
    }
}

//---------------------------------------------------------------------------------------------------- Pool
/// Where characters are drawn from.
///
/// # Invariant
/// Never empty.
#[derive(Debug, Clone)]
enum Pool<'a> {
    /// Code points, some of which (surrogates) are not characters.
    Range(Range<u32>),
    /// An explicit character set.
    Set(&'a [char]),
}

impl Pool<'_> {
    /// Returns `true` if at least one drawable character passes `filter`.
    fn any(&self, filter: Filter) -> bool {
        match self {
            Self::Range(range) => range
                .clone()
                .filter_map(char::from_u32)
                .any(|ch| filter.accepts(ch)),
            Self::Set(chars) => chars.iter().any(|ch| filter.accepts(*ch)),
        }
    }

    /// Draw `count` characters that pass `filter`.
    ///
    /// This loops until enough characters were kept,
    /// so the pool must have been checked with [`Pool::any`] first.
    fn sample<R: Rng>(&self, rng: &mut R, count: usize, filter: Filter) -> String {
        let mut string = String::with_capacity(count);
        let mut kept = 0;
        let mut rejected = 0_usize;

        while kept < count {
            let ch = match self {
                Self::Range(range) => char::from_u32(rng.gen_range(range.clone())),
                Self::Set(chars) => Some(chars[rng.gen_range(0..chars.len())]),
            };

            match ch {
                Some(ch) if filter.accepts(ch) => {
                    string.push(ch);
                    kept += 1;
                }
                _ => rejected += 1,
            }
        }

        tracing::trace!(count, rejected, "generated random string");
        string
    }
}

//---------------------------------------------------------------------------------------------------- Free functions
/// Draw from `pool` with the thread-local RNG.
fn thread_sample(pool: &Pool<'_>, count: usize, filter: Filter) -> String {
    pool.sample(&mut rand::thread_rng(), count, filter)
}

#[inline]
/// `count` characters drawn from every Unicode scalar value.
pub fn random(count: usize) -> String {
    thread_sample(&Pool::Range(0..UNICODE_END), count, Filter::OPEN)
}

#[inline]
/// `count` characters drawn from the printable ASCII range, `' '..='~'`.
///
/// ```rust
/// # use commons_helper::random::*;
/// let string = random_ascii(64);
/// assert_eq!(string.len(), 64);
/// assert!(string.bytes().all(|b| (32..127).contains(&b)));
/// ```
pub fn random_ascii(count: usize) -> String {
    thread_sample(&Pool::Range(ASCII_PRINTABLE), count, Filter::OPEN)
}

#[inline]
/// `count` ASCII letters.
///
/// ```rust
/// # use commons_helper::random::*;
/// assert!(random_alphabetic(32).chars().all(|c| c.is_ascii_alphabetic()));
/// ```
pub fn random_alphabetic(count: usize) -> String {
    random_filtered(count, true, false)
}

#[inline]
/// `count` ASCII letters and digits.
pub fn random_alphanumeric(count: usize) -> String {
    random_filtered(count, true, true)
}

#[inline]
/// `count` ASCII digits.
///
/// ```rust
/// # use commons_helper::random::*;
/// let string = random_numeric(10);
/// assert_eq!(string.len(), 10);
/// assert!(string.chars().all(|c| c.is_ascii_digit()));
/// ```
pub fn random_numeric(count: usize) -> String {
    random_filtered(count, false, true)
}

/// `count` characters from the default range ([`DEFAULT_START`]..[`DEFAULT_END`])
/// that are letters and/or numbers.
///
/// If neither `letters` nor `numbers` is set, this is [`random`].
pub fn random_filtered(count: usize, letters: bool, numbers: bool) -> String {
    let filter = Filter { letters, numbers };

    if filter.is_open() {
        random(count)
    } else {
        thread_sample(&Pool::Range(DEFAULT_START..DEFAULT_END), count, filter)
    }
}

/// `count` characters drawn from `chars`.
///
/// ```rust
/// # use commons_helper::random::*;
/// let string = random_from(8, "ab").unwrap();
/// assert!(string.chars().all(|c| c == 'a' || c == 'b'));
///
/// assert_eq!(random_from(8, ""), Err(RandomError::EmptyCharacterSet));
/// assert_eq!(random_from(0, ""), Ok(String::new()));
/// ```
///
/// # Errors
/// Returns [`RandomError::EmptyCharacterSet`] if `chars` is empty and `count` is not 0.
pub fn random_from(count: usize, chars: &str) -> Result<String, RandomError> {
    RandomConfigBuilder::new(count)
        .chars(chars.chars())
        .build()
        .generate(&mut rand::thread_rng())
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    #[test]
    fn zero_count_is_empty() {
        // Invalid, but never consulted.
        let config = RandomConfigBuilder::new(0).range(5, 1).build();
        assert_eq!(config.generate(&mut rng()), Ok(String::new()));
        assert_eq!(random(0), "");
    }

    #[test]
    fn default_open_range_is_all_of_unicode() {
        let string = RandomConfig::new(256).generate(&mut rng()).unwrap();
        assert_eq!(string.chars().count(), 256);
        assert_eq!(random(100).chars().count(), 100);
    }

    #[test]
    fn alphanumeric_stays_in_default_range() {
        let string = RandomConfigBuilder::new(512)
            .letters(true)
            .numbers(true)
            .build()
            .generate(&mut rng())
            .unwrap();

        assert_eq!(string.len(), 512);
        assert!(string.chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(random_alphanumeric(64).chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn character_set_sub_range() {
        let chars = ['a', 'b', 'c', 'd', 'e'];
        let string = RandomConfigBuilder::new(128)
            .chars(chars)
            .range(1, 3)
            .build()
            .generate(&mut rng())
            .unwrap();

        assert!(string.chars().all(|c| c == 'b' || c == 'c'));
    }

    #[test]
    fn character_set_with_filter() {
        let string = RandomConfigBuilder::new(64)
            .chars("a1b2c3".chars())
            .numbers(true)
            .build()
            .generate(&mut rng())
            .unwrap();

        assert!(string.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn invalid_configurations() {
        let cases = [
            (
                RandomConfigBuilder::new(1).range(10, 10).build(),
                RandomError::InvalidRange { start: 10, end: 10 },
            ),
            (
                RandomConfigBuilder::new(1).range(0, UNICODE_END + 1).build(),
                RandomError::InvalidRange {
                    start: 0,
                    end: UNICODE_END + 1,
                },
            ),
            (
                RandomConfigBuilder::new(1).chars(['a']).range(0, 2).build(),
                RandomError::RangeOutsideSet { end: 2, length: 1 },
            ),
            (
                RandomConfigBuilder::new(1).chars([]).build(),
                RandomError::EmptyCharacterSet,
            ),
            (
                // Only control characters, none are letters.
                RandomConfigBuilder::new(1).range(0, 10).letters(true).build(),
                RandomError::NoMatchingCharacters,
            ),
            (
                // Only surrogates, none are characters.
                RandomConfigBuilder::new(1).range(0xD800, 0xE000).build(),
                RandomError::NoMatchingCharacters,
            ),
        ];

        for (config, expected) in cases {
            assert_eq!(config.validate(), Err(expected));
            assert_eq!(config.generate(&mut rng()), Err(expected));
        }
    }

    #[test]
    fn same_seed_same_string() {
        let config = RandomConfigBuilder::new(32).letters(true).build();
        assert_eq!(config.generate(&mut rng()), config.generate(&mut rng()));
    }

    #[test]
    #[cfg(feature = "serde")]
    fn config_serde() {
        let config = RandomConfigBuilder::new(8)
            .chars(['x', 'y'])
            .numbers(true)
            .build();

        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(serde_json::from_str::<RandomConfig>(&json).unwrap(), config);
    }
}
