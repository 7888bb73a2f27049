//! [`Value`] and [`Entry`].

//---------------------------------------------------------------------------------------------------- Import
use std::{
    fmt::{self, Display},
    hash::{Hash, Hasher},
};

use crate::{
    display::Nullable,
    dynamic::{DynArray, ElementType},
};

//---------------------------------------------------------------------------------------------------- Float keys
/// Bits used to compare and hash an [`f32`], all NaNs are the same value.
pub(crate) fn f32_key(float: f32) -> u32 {
    if float.is_nan() {
        f32::NAN.to_bits()
    } else {
        float.to_bits()
    }
}

/// Bits used to compare and hash an [`f64`], all NaNs are the same value.
pub(crate) fn f64_key(float: f64) -> u64 {
    if float.is_nan() {
        f64::NAN.to_bits()
    } else {
        float.to_bits()
    }
}

//---------------------------------------------------------------------------------------------------- Entry
/// A key/value pair, either of which may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry {
    /// The key.
    pub key: Option<Value>,
    /// The value.
    pub value: Option<Value>,
}

impl Entry {
    /// Create a new [`Entry`].
    pub fn new(key: impl Into<Value>, value: impl Into<Value>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
        }
    }
}

impl Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}={}",
            Nullable(self.key.as_ref()),
            Nullable(self.value.as_ref())
        )
    }
}

//---------------------------------------------------------------------------------------------------- Value
/// One value of any [`ElementType`].
///
/// Unlike the primitive float types, equality and hashing of
/// [`Value::Float`] and [`Value::Double`] compare bits, so
/// `NaN == NaN` and `0.0 != -0.0`. This makes [`Value`] usable as a map key.
///
/// ```rust
/// # use commons_array::*;
/// assert_eq!(Value::from(1_i32).element_type(), ElementType::Int);
/// assert_eq!(Value::from("a").element_type(), ElementType::Str);
/// assert_eq!(Value::Double(f64::NAN), Value::Double(f64::NAN));
/// assert_ne!(Value::Double(0.0), Value::Double(-0.0));
/// assert_ne!(Value::Int(1), Value::Long(1));
/// ```
#[derive(Debug, Clone)]
pub enum Value {
    /// [`ElementType::Boolean`]
    Boolean(bool),
    /// [`ElementType::Byte`]
    Byte(i8),
    /// [`ElementType::Short`]
    Short(i16),
    /// [`ElementType::Int`]
    Int(i32),
    /// [`ElementType::Long`]
    Long(i64),
    /// [`ElementType::Float`]
    Float(f32),
    /// [`ElementType::Double`]
    Double(f64),
    /// [`ElementType::Char`]
    Char(char),
    /// [`ElementType::Str`]
    Str(String),
    /// [`ElementType::Entry`]
    Entry(Box<Entry>),
    /// [`ElementType::Array`]
    Array(DynArray),
}

impl Value {
    /// The [`ElementType`] of this value, never [`ElementType::Object`].
    pub const fn element_type(&self) -> ElementType {
        match self {
            Self::Boolean(_) => ElementType::Boolean,
            Self::Byte(_) => ElementType::Byte,
            Self::Short(_) => ElementType::Short,
            Self::Int(_) => ElementType::Int,
            Self::Long(_) => ElementType::Long,
            Self::Float(_) => ElementType::Float,
            Self::Double(_) => ElementType::Double,
            Self::Char(_) => ElementType::Char,
            Self::Str(_) => ElementType::Str,
            Self::Entry(_) => ElementType::Entry,
            Self::Array(_) => ElementType::Array,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Byte(a), Self::Byte(b)) => a == b,
            (Self::Short(a), Self::Short(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Long(a), Self::Long(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => f32_key(*a) == f32_key(*b),
            (Self::Double(a), Self::Double(b)) => f64_key(*a) == f64_key(*b),
            (Self::Char(a), Self::Char(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Entry(a), Self::Entry(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Boolean(v) => v.hash(state),
            Self::Byte(v) => v.hash(state),
            Self::Short(v) => v.hash(state),
            Self::Int(v) => v.hash(state),
            Self::Long(v) => v.hash(state),
            Self::Float(v) => f32_key(*v).hash(state),
            Self::Double(v) => f64_key(*v).hash(state),
            Self::Char(v) => v.hash(state),
            Self::Str(v) => v.hash(state),
            Self::Entry(v) => v.hash(state),
            Self::Array(v) => v.hash(state),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(v) => v.fmt(f),
            Self::Byte(v) => v.fmt(f),
            Self::Short(v) => v.fmt(f),
            Self::Int(v) => v.fmt(f),
            Self::Long(v) => v.fmt(f),
            Self::Float(v) => v.fmt(f),
            Self::Double(v) => v.fmt(f),
            Self::Char(v) => v.fmt(f),
            Self::Str(v) => f.write_str(v),
            Self::Entry(v) => v.fmt(f),
            Self::Array(v) => v.fmt(f),
        }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<Entry> for Value {
    fn from(value: Entry) -> Self {
        Self::Entry(Box::new(value))
    }
}

impl From<DynArray> for Value {
    fn from(value: DynArray) -> Self {
        Self::Array(value)
    }
}

//---------------------------------------------------------------------------------------------------- Primitive
/// The 8 primitive element types.
///
/// Each has a dense [`DynArray`] variant and a [`Value`] variant.
pub(crate) trait Primitive: Copy + PartialEq + Sized {
    /// The [`ElementType`] of `Self`.
    const TYPE: ElementType;

    /// The inner value, if `value` is of type `Self`.
    fn from_value(value: &Value) -> Option<Self>;

    /// Wrap into a [`Value`].
    fn into_value(self) -> Value;
}

macro_rules! impl_primitive {
    ($($primitive:ty => $variant:ident),* $(,)?) => {
        $(
            impl Primitive for $primitive {
                const TYPE: ElementType = ElementType::$variant;

                fn from_value(value: &Value) -> Option<Self> {
                    match value {
                        Value::$variant(inner) => Some(*inner),
                        _ => None,
                    }
                }

                fn into_value(self) -> Value {
                    Value::$variant(self)
                }
            }

            impl From<$primitive> for Value {
                fn from(value: $primitive) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}
impl_primitive! {
    bool => Boolean,
    i8 => Byte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    char => Char,
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn usable_as_set_elements() {
        let set: HashSet<Value> = [
            Value::Double(f64::NAN),
            Value::Double(f64::NAN),
            Value::Double(1.0),
            Value::Float(1.0),
            Value::from("a"),
            Value::from("a"),
        ]
        .into_iter()
        .collect();

        assert_eq!(set.len(), 4);
    }

    #[test]
    fn primitive_round_trip() {
        assert_eq!(i16::from_value(&7_i16.into_value()), Some(7));
        assert_eq!(i16::from_value(&Value::Int(7)), None);
        assert_eq!(<char as Primitive>::TYPE, ElementType::Char);
    }

    #[test]
    fn entry_display() {
        assert_eq!(Entry::new("k", 1_i32).to_string(), "k=1");

        let entry = Entry {
            key: None,
            value: Some(Value::Boolean(true)),
        };
        assert_eq!(Value::from(entry).to_string(), "<null>=true");
    }
}
