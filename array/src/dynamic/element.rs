//! [`ElementType`].

//---------------------------------------------------------------------------------------------------- Import
use strum::{Display, EnumIs, EnumString, IntoStaticStr, VariantArray};

//---------------------------------------------------------------------------------------------------- ElementType
/// The runtime element type of a [`DynArray`](crate::DynArray).
///
/// The first 8 are primitive types, arrays of them can be dense
/// (no absent elements) or nullable. The rest are reference types,
/// arrays of which are always nullable.
///
/// ```rust
/// # use commons_array::*;
/// # use std::str::FromStr;
/// assert_eq!(ElementType::Str.to_string(), "string");
/// assert_eq!(ElementType::from_str("double"), Ok(ElementType::Double));
/// assert!(ElementType::Char.is_primitive());
/// assert!(!ElementType::Entry.is_primitive());
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
    Display,
    EnumIs,
    EnumString,
    IntoStaticStr,
    VariantArray,
)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "proptest", derive(proptest_derive::Arbitrary))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ElementType {
    /// [`bool`]
    Boolean,
    /// [`i8`]
    Byte,
    /// [`i16`]
    Short,
    /// [`i32`]
    Int,
    /// [`i64`]
    Long,
    /// [`f32`]
    Float,
    /// [`f64`]
    Double,
    /// [`char`]
    Char,
    /// [`String`]
    #[strum(to_string = "string")]
    #[cfg_attr(feature = "serde", serde(rename = "string"))]
    Str,
    /// [`Entry`](crate::Entry)
    Entry,
    /// A nested [`DynArray`](crate::DynArray)
    Array,
    /// Any value
    Object,
}

impl ElementType {
    /// The lowercase name of this type.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Returns `true` for the 8 primitive types.
    pub const fn is_primitive(self) -> bool {
        matches!(
            self,
            Self::Boolean
                | Self::Byte
                | Self::Short
                | Self::Int
                | Self::Long
                | Self::Float
                | Self::Double
                | Self::Char
        )
    }

    /// Returns `true` if a value of type `other` can be stored
    /// in a nullable array of type `self`.
    ///
    /// [`ElementType::Object`] accepts everything, any other type only itself.
    ///
    /// ```rust
    /// # use commons_array::*;
    /// assert!(ElementType::Object.is_assignable_from(ElementType::Int));
    /// assert!(ElementType::Int.is_assignable_from(ElementType::Int));
    /// assert!(!ElementType::Int.is_assignable_from(ElementType::Long));
    /// assert!(!ElementType::Str.is_assignable_from(ElementType::Object));
    /// ```
    pub fn is_assignable_from(self, other: Self) -> bool {
        self == Self::Object || self == other
    }
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn names_round_trip() {
        for element_type in ElementType::VARIANTS {
            assert_eq!(element_type.name().parse::<ElementType>(), Ok(*element_type));
            assert_eq!(element_type.to_string(), element_type.name());
        }
    }

    #[test]
    fn primitive_types_come_first() {
        let primitive = ElementType::VARIANTS
            .iter()
            .take_while(|t| t.is_primitive())
            .count();
        assert_eq!(primitive, 8);
        assert!(ElementType::VARIANTS[8..].iter().all(|t| !t.is_primitive()));
        assert_eq!(ElementType::VARIANTS.len(), 12);
    }

    #[test]
    #[cfg(feature = "serde")]
    fn serde() {
        let json = serde_json::to_string(&ElementType::Str).unwrap();
        assert_eq!(json, r#""string""#);
        assert_eq!(
            serde_json::from_str::<ElementType>(r#""double""#).unwrap(),
            ElementType::Double
        );
    }
}
