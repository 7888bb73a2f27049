//! [`DynArray`] and [`RefArray`].

//---------------------------------------------------------------------------------------------------- Import
use std::{
    fmt::{self, Display},
    hash::{Hash, Hasher},
};

use commons_helper::boolean;

use crate::{
    display::{write_elements, Nullable},
    dynamic::{
        value::{f32_key, f64_key, Primitive},
        ElementType, Value,
    },
    error::ArrayError,
    ops, search,
};

//---------------------------------------------------------------------------------------------------- Dispatch
/// Match on every variant of a [`DynArray`].
///
/// - `$vec` is bound to the `Vec` of a primitive variant
///   and `$variant` to that variant's constructor
/// - `$refs` is bound to the [`RefArray`]
macro_rules! dispatch {
    ($array:expr, ($vec:ident, $variant:ident) => $primitive:expr, $refs:ident => $reference:expr $(,)?) => {
        match $array {
            DynArray::Boolean($vec) => { let $variant = DynArray::Boolean; $primitive }
            DynArray::Byte($vec)    => { let $variant = DynArray::Byte;    $primitive }
            DynArray::Short($vec)   => { let $variant = DynArray::Short;   $primitive }
            DynArray::Int($vec)     => { let $variant = DynArray::Int;     $primitive }
            DynArray::Long($vec)    => { let $variant = DynArray::Long;    $primitive }
            DynArray::Float($vec)   => { let $variant = DynArray::Float;   $primitive }
            DynArray::Double($vec)  => { let $variant = DynArray::Double;  $primitive }
            DynArray::Char($vec)    => { let $variant = DynArray::Char;    $primitive }
            DynArray::Ref($refs)    => $reference,
        }
    };
}

/// Extract the primitive to store at `index` from a nullable value.
fn unbox<T: Primitive>(value: Option<&Value>, index: usize) -> Result<T, ArrayError> {
    let value = value.ok_or(ArrayError::AbsentElement { index })?;

    T::from_value(value).ok_or_else(|| ArrayError::TypeMismatch {
        expected: T::TYPE,
        found: value.element_type(),
    })
}

/// Unbox every element, absent ones become `value_for_absent` if given.
fn unbox_all<T: Primitive>(
    elements: &[Option<Value>],
    value_for_absent: Option<T>,
) -> Result<Vec<T>, ArrayError> {
    elements
        .iter()
        .enumerate()
        .map(|(index, element)| match (element, value_for_absent) {
            (None, Some(value)) => Ok(value),
            (element, _) => unbox(element.as_ref(), index),
        })
        .collect()
}

/// [`unbox_all`] with `value_for_absent` unboxed first.
fn unbox_all_or<T: Primitive>(
    elements: &[Option<Value>],
    value_for_absent: &Value,
) -> Result<Vec<T>, ArrayError> {
    let value_for_absent = T::from_value(value_for_absent).ok_or_else(|| ArrayError::TypeMismatch {
        expected: T::TYPE,
        found: value_for_absent.element_type(),
    })?;

    unbox_all(elements, Some(value_for_absent))
}

/// The search target as a `T`, [`None`] if absent or of another type.
fn unbox_target<T: Primitive>(target: Option<&Value>) -> Option<T> {
    target.and_then(T::from_value)
}

//---------------------------------------------------------------------------------------------------- RefArray
/// A nullable array of one [`ElementType`].
///
/// # Invariant
/// Every present element is assignable to the element type,
/// see [`ElementType::is_assignable_from`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RefArray {
    /// The element type.
    element_type: ElementType,
    /// The elements, [`None`] is absent.
    elements: Vec<Option<Value>>,
}

impl RefArray {
    /// Create a new [`RefArray`].
    ///
    /// ```rust
    /// # use commons_array::*;
    /// let strings = RefArray::new(ElementType::Str, vec![Some("a".into()), None]).unwrap();
    /// assert_eq!(strings.len(), 2);
    ///
    /// let err = RefArray::new(ElementType::Str, vec![Some(Value::Int(1))]).unwrap_err();
    /// assert_eq!(err.to_string(), "Cannot store int in an array of string");
    /// ```
    ///
    /// # Errors
    /// Returns [`ArrayError::TypeMismatch`] for the first element not assignable to `element_type`.
    pub fn new(element_type: ElementType, elements: Vec<Option<Value>>) -> Result<Self, ArrayError> {
        for value in elements.iter().flatten() {
            check_assignable(element_type, value)?;
        }

        Ok(Self {
            element_type,
            elements,
        })
    }

    /// An empty [`RefArray`].
    pub const fn empty(element_type: ElementType) -> Self {
        Self {
            element_type,
            elements: Vec::new(),
        }
    }

    /// The element type.
    pub const fn element_type(&self) -> ElementType {
        self.element_type
    }

    /// The elements.
    pub fn elements(&self) -> &[Option<Value>] {
        &self.elements
    }

    /// Take the elements.
    pub fn into_elements(self) -> Vec<Option<Value>> {
        self.elements
    }

    /// The number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if there are no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Skips the check in [`RefArray::new`], the caller upholds the invariant.
    const fn from_checked(element_type: ElementType, elements: Vec<Option<Value>>) -> Self {
        Self {
            element_type,
            elements,
        }
    }
}

/// Check `value` can be stored in an array of `element_type`.
fn check_assignable(element_type: ElementType, value: &Value) -> Result<(), ArrayError> {
    let found = value.element_type();

    if element_type.is_assignable_from(found) {
        Ok(())
    } else {
        tracing::debug!(%element_type, %found, "rejected element type");
        Err(ArrayError::TypeMismatch {
            expected: element_type,
            found,
        })
    }
}

//---------------------------------------------------------------------------------------------------- DynArray
/// An array whose element type is only known at runtime.
///
/// Primitive element types have a dense variant with no absent elements,
/// every element type (primitives included) can also be held by
/// a nullable [`DynArray::Ref`]. Like `int[]` and `Integer[]`
/// these are different array types with the same element type.
///
/// Every operation returns an array of the same variant
/// and element type as its input.
///
/// ```rust
/// # use commons_array::*;
/// let array = DynArray::from(vec![1_i32, 2, 3]);
/// assert_eq!(array.element_type(), ElementType::Int);
///
/// let array = dynamic::add(Some(&array), Some(Value::Int(4))).unwrap();
/// assert_eq!(array, DynArray::Int(vec![1, 2, 3, 4]));
/// assert_eq!(array.to_string(), "{1,2,3,4}");
///
/// let err = dynamic::add(Some(&array), Some(Value::from("x"))).unwrap_err();
/// assert_eq!(err.to_string(), "Cannot store string in an array of int");
/// ```
#[derive(Debug, Clone)]
pub enum DynArray {
    /// Dense [`bool`]s.
    Boolean(Vec<bool>),
    /// Dense [`i8`]s.
    Byte(Vec<i8>),
    /// Dense [`i16`]s.
    Short(Vec<i16>),
    /// Dense [`i32`]s.
    Int(Vec<i32>),
    /// Dense [`i64`]s.
    Long(Vec<i64>),
    /// Dense [`f32`]s.
    Float(Vec<f32>),
    /// Dense [`f64`]s.
    Double(Vec<f64>),
    /// Dense [`char`]s.
    Char(Vec<char>),
    /// Nullable elements of any [`ElementType`].
    Ref(RefArray),
}

impl DynArray {
    /// An empty nullable array of `element_type`.
    pub const fn empty(element_type: ElementType) -> Self {
        Self::Ref(RefArray::empty(element_type))
    }

    /// A nullable array of `element_type`, see [`RefArray::new`].
    ///
    /// # Errors
    /// Returns [`ArrayError::TypeMismatch`] if an element is not assignable to `element_type`.
    pub fn from_values(
        element_type: ElementType,
        elements: Vec<Option<Value>>,
    ) -> Result<Self, ArrayError> {
        RefArray::new(element_type, elements).map(Self::Ref)
    }

    /// The element type.
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
            Self::Ref(refs) => refs.element_type(),
        }
    }

    /// Returns `true` if this is a dense primitive array.
    pub const fn is_primitive(&self) -> bool {
        !matches!(self, Self::Ref(_))
    }

    /// The number of elements.
    pub fn len(&self) -> usize {
        dispatch!(self, (vec, _v) => vec.len(), refs => refs.len())
    }

    /// Returns `true` if there are no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The element at `index`, [`None`] if it is absent.
    ///
    /// ```rust
    /// # use commons_array::*;
    /// let array = DynArray::from(vec!['a', 'b']);
    /// assert_eq!(array.get(1), Ok(Some(Value::Char('b'))));
    /// assert!(array.get(2).unwrap_err().is_out_of_bounds());
    /// ```
    ///
    /// # Errors
    /// Returns [`ArrayError::IndexOutOfBounds`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<Option<Value>, ArrayError> {
        let out_of_bounds = || ArrayError::IndexOutOfBounds {
            index,
            length: self.len(),
        };

        dispatch!(
            self,
            (vec, _v) => vec.get(index).map(|v| Some(v.into_value())).ok_or_else(out_of_bounds),
            refs => refs.elements.get(index).cloned().ok_or_else(out_of_bounds),
        )
    }

    /// Every element as a nullable [`Value`].
    pub fn values(&self) -> Vec<Option<Value>> {
        dispatch!(
            self,
            (vec, _v) => vec.iter().map(|v| Some(v.into_value())).collect(),
            refs => refs.elements.clone(),
        )
    }

    /// Copy the elements within `start..end`, see [`crate::subarray`].
    ///
    /// ```rust
    /// # use commons_array::*;
    /// let array = DynArray::from(vec![1_i64, 2, 3]);
    /// assert_eq!(array.subarray(-5, 1000), array);
    /// assert_eq!(array.subarray(2, 1), DynArray::Long(vec![]));
    /// ```
    #[must_use]
    pub fn subarray(&self, start: isize, end: isize) -> Self {
        dispatch!(
            self,
            (vec, variant) => variant(vec[ops::clamp_range(vec.len(), start, end)].to_vec()),
            refs => {
                let range = ops::clamp_range(refs.len(), start, end);
                Self::Ref(RefArray::from_checked(refs.element_type, refs.elements[range].to_vec()))
            },
        )
    }

    /// Reverse in place, see [`crate::reverse`].
    pub fn reverse(&mut self) {
        dispatch!(self, (vec, _v) => vec.reverse(), refs => refs.elements.reverse());
    }

    /// Remove the element at `index` from a copy, see [`crate::remove`].
    ///
    /// # Errors
    /// Returns [`ArrayError::IndexOutOfBounds`] if `index >= len`.
    pub fn remove(&self, index: usize) -> Result<Self, ArrayError> {
        dispatch!(
            self,
            (vec, variant) => ops::remove(Some(vec.as_slice()), index).map(variant),
            refs => ops::remove(Some(refs.elements.as_slice()), index)
                .map(|elements| Self::Ref(RefArray::from_checked(refs.element_type, elements))),
        )
    }

    /// Remove the first element equal to `element` from a copy, see [`crate::remove_element`].
    #[must_use]
    pub fn remove_element(&self, element: Option<&Value>) -> Self {
        let mut array = self.clone();
        if let Some(index) = self.index_of(element) {
            dispatch!(
                &mut array,
                (vec, _v) => {
                    vec.remove(index);
                },
                refs => {
                    refs.elements.remove(index);
                }
            );
        }
        array
    }

    //------------------------------------------------------ Search
    #[inline]
    /// Index of the first element equal to `target`, see [`crate::index_of`].
    ///
    /// A target of another element type never matches,
    /// and an absent target never matches a dense array.
    ///
    /// ```rust
    /// # use commons_array::*;
    /// let array = DynArray::from(vec![1_i32, 2, 3]);
    /// assert_eq!(array.index_of(Some(&Value::Int(2))), Some(1));
    /// assert_eq!(array.index_of(Some(&Value::Long(2))), None);
    /// assert_eq!(array.index_of(None), None);
    /// ```
    pub fn index_of(&self, target: Option<&Value>) -> Option<usize> {
        self.index_of_from(target, 0)
    }

    /// [`DynArray::index_of`], searching forward from `start`, see [`crate::index_of_from`].
    pub fn index_of_from(&self, target: Option<&Value>, start: isize) -> Option<usize> {
        dispatch!(
            self,
            (vec, _v) => search::index_of_from(Some(vec.as_slice()), &unbox_target(target)?, start),
            refs => search::position_from(&refs.elements, start, |e| e.as_ref() == target),
        )
    }

    #[inline]
    /// Index of the last element equal to `target`, see [`crate::last_index_of`].
    pub fn last_index_of(&self, target: Option<&Value>) -> Option<usize> {
        self.last_index_of_from(target, isize::MAX)
    }

    /// [`DynArray::last_index_of`], searching backward from `start`, see [`crate::last_index_of_from`].
    pub fn last_index_of_from(&self, target: Option<&Value>, start: isize) -> Option<usize> {
        dispatch!(
            self,
            (vec, _v) => search::last_index_of_from(Some(vec.as_slice()), &unbox_target(target)?, start),
            refs => search::rposition_from(&refs.elements, start, |e| e.as_ref() == target),
        )
    }

    #[inline]
    /// Returns `true` if any element equals `target`.
    pub fn contains(&self, target: Option<&Value>) -> bool {
        self.index_of(target).is_some()
    }

    /// Index of the first element within `target ± tolerance`, see [`crate::index_of_within`].
    ///
    /// Only [`ElementType::Float`] and [`ElementType::Double`] arrays can match,
    /// absent elements never do.
    ///
    /// ```rust
    /// # use commons_array::*;
    /// let array = DynArray::from(vec![1.0_f64, 2.0, 3.0]);
    /// assert_eq!(array.index_of_within(2.05, 0.1), Some(1));
    /// assert_eq!(array.index_of_within(2.2, 0.1), None);
    /// ```
    pub fn index_of_within(&self, target: f64, tolerance: f64) -> Option<usize> {
        self.index_of_within_from(target, 0, tolerance)
    }

    /// [`DynArray::index_of_within`], searching forward from `start`, see [`crate::index_of_within_from`].
    pub fn index_of_within_from(
        &self,
        target: f64,
        start: isize,
        tolerance: f64,
    ) -> Option<usize> {
        let floats = self.widened_floats()?;
        search::position_from(&floats, start, |float| {
            float.is_some_and(|float| search::within(float, target, tolerance))
        })
    }

    #[inline]
    /// Index of the last element within `target ± tolerance`, see [`crate::last_index_of_within`].
    pub fn last_index_of_within(&self, target: f64, tolerance: f64) -> Option<usize> {
        self.last_index_of_within_from(target, isize::MAX, tolerance)
    }

    /// [`DynArray::last_index_of_within`], searching backward from `start`,
    /// see [`crate::last_index_of_within_from`].
    ///
    /// ```rust
    /// # use commons_array::*;
    /// let array = DynArray::from(vec![2.0_f64, 5.0, 2.0]);
    /// assert_eq!(array.last_index_of_within_from(2.0, 1, 0.5), Some(0));
    /// assert_eq!(array.last_index_of_within_from(2.0, -1, 0.5), None);
    /// ```
    pub fn last_index_of_within_from(
        &self,
        target: f64,
        start: isize,
        tolerance: f64,
    ) -> Option<usize> {
        let floats = self.widened_floats()?;
        search::rposition_from(&floats, start, |float| {
            float.is_some_and(|float| search::within(float, target, tolerance))
        })
    }

    #[inline]
    /// Returns `true` if any element is within `target ± tolerance`.
    pub fn contains_within(&self, target: f64, tolerance: f64) -> bool {
        self.index_of_within(target, tolerance).is_some()
    }

    /// The elements widened to [`f64`], [`None`] if this is not a float array.
    fn widened_floats(&self) -> Option<Vec<Option<f64>>> {
        Some(match self {
            Self::Float(vec) => vec.iter().map(|&v| Some(f64::from(v))).collect(),
            Self::Double(vec) => vec.iter().map(|&v| Some(v)).collect(),
            Self::Ref(refs) if refs.element_type == ElementType::Float => refs
                .elements
                .iter()
                .map(|e| e.as_ref().and_then(f32::from_value).map(f64::from))
                .collect(),
            Self::Ref(refs) if refs.element_type == ElementType::Double => refs
                .elements
                .iter()
                .map(|e| e.as_ref().and_then(f64::from_value))
                .collect(),
            _ => return None,
        })
    }

    //------------------------------------------------------ Boxing
    /// Convert a nullable array of a primitive type into a dense one, see [`crate::to_primitive`].
    ///
    /// Dense arrays are copied as-is.
    ///
    /// ```rust
    /// # use commons_array::*;
    /// let boxed = DynArray::from_values(ElementType::Int, vec![Some(Value::Int(1))]).unwrap();
    /// assert_eq!(boxed.to_primitive(), Ok(DynArray::Int(vec![1])));
    ///
    /// let boxed = DynArray::from_values(ElementType::Int, vec![None]).unwrap();
    /// assert_eq!(boxed.to_primitive(), Err(ArrayError::AbsentElement { index: 0 }));
    /// ```
    ///
    /// # Errors
    /// - [`ArrayError::AbsentElement`] naming the first absent element
    /// - [`ArrayError::NoPrimitiveForm`] if the element type is not primitive
    pub fn to_primitive(&self) -> Result<Self, ArrayError> {
        let Self::Ref(refs) = self else {
            return Ok(self.clone());
        };

        let elements = &refs.elements;
        Ok(match refs.element_type {
            ElementType::Boolean => Self::Boolean(unbox_all(elements, None)?),
            ElementType::Byte => Self::Byte(unbox_all(elements, None)?),
            ElementType::Short => Self::Short(unbox_all(elements, None)?),
            ElementType::Int => Self::Int(unbox_all(elements, None)?),
            ElementType::Long => Self::Long(unbox_all(elements, None)?),
            ElementType::Float => Self::Float(unbox_all(elements, None)?),
            ElementType::Double => Self::Double(unbox_all(elements, None)?),
            ElementType::Char => Self::Char(unbox_all(elements, None)?),
            other => return Err(ArrayError::NoPrimitiveForm(other)),
        })
    }

    /// Convert a nullable array of a primitive type into a dense one,
    /// replacing absent elements with `value_for_absent`, see [`crate::to_primitive_or`].
    ///
    /// ```rust
    /// # use commons_array::*;
    /// let boxed = DynArray::from_values(ElementType::Boolean, vec![None, Some(Value::Boolean(true))]).unwrap();
    /// assert_eq!(
    ///     boxed.to_primitive_or(&Value::Boolean(false)),
    ///     Ok(DynArray::Boolean(vec![false, true])),
    /// );
    /// ```
    ///
    /// # Errors
    /// - [`ArrayError::TypeMismatch`] if `value_for_absent` is not of the element type
    /// - [`ArrayError::NoPrimitiveForm`] if the element type is not primitive
    pub fn to_primitive_or(&self, value_for_absent: &Value) -> Result<Self, ArrayError> {
        let Self::Ref(refs) = self else {
            return Ok(self.clone());
        };

        let elements = &refs.elements;
        Ok(match refs.element_type {
            ElementType::Boolean => {
                let value_for_absent = unbox::<bool>(Some(value_for_absent), 0)?;
                Self::Boolean(
                    elements
                        .iter()
                        .map(|e| {
                            let value = e.as_ref().and_then(bool::from_value);
                            boolean::to_boolean_or(value, value_for_absent)
                        })
                        .collect(),
                )
            }
            ElementType::Byte => Self::Byte(unbox_all_or(elements, value_for_absent)?),
            ElementType::Short => Self::Short(unbox_all_or(elements, value_for_absent)?),
            ElementType::Int => Self::Int(unbox_all_or(elements, value_for_absent)?),
            ElementType::Long => Self::Long(unbox_all_or(elements, value_for_absent)?),
            ElementType::Float => Self::Float(unbox_all_or(elements, value_for_absent)?),
            ElementType::Double => Self::Double(unbox_all_or(elements, value_for_absent)?),
            ElementType::Char => Self::Char(unbox_all_or(elements, value_for_absent)?),
            other => return Err(ArrayError::NoPrimitiveForm(other)),
        })
    }

    /// Convert a dense array into a nullable one of the same element type, see [`crate::to_object`].
    ///
    /// Nullable arrays are copied as-is.
    #[must_use]
    pub fn to_object(&self) -> Self {
        match self {
            Self::Ref(_) => self.clone(),
            _ => Self::Ref(RefArray::from_checked(self.element_type(), self.values())),
        }
    }

    //------------------------------------------------------ Crate-internal
    /// Insert `element` at `index` into a copy.
    pub(crate) fn insert(&self, index: usize, element: Option<Value>) -> Result<Self, ArrayError> {
        if index > self.len() {
            return Err(ArrayError::IndexOutOfBounds {
                index,
                length: self.len(),
            });
        }

        dispatch!(
            self,
            (vec, variant) => {
                let element = unbox(element.as_ref(), index)?;
                ops::insert(Some(vec.as_slice()), index, element).map(variant)
            },
            refs => {
                if let Some(value) = &element {
                    check_assignable(refs.element_type, value)?;
                }
                ops::insert(Some(refs.elements.as_slice()), index, element)
                    .map(|elements| Self::Ref(RefArray::from_checked(refs.element_type, elements)))
            },
        )
    }

    /// Append `other` to a copy.
    pub(crate) fn concat(&self, other: &Self) -> Result<Self, ArrayError> {
        let mismatch = || {
            tracing::debug!(first = %self.element_type(), second = %other.element_type(), "rejected concatenation");
            ArrayError::TypeMismatch {
                expected: self.element_type(),
                found: other.element_type(),
            }
        };

        macro_rules! concat_dense {
            ($($variant:ident),*) => {
                match (self, other) {
                    $(
                        (Self::$variant(a), Self::$variant(b)) => {
                            Ok(Self::$variant(ops::add_all(Some(a.as_slice()), Some(b.as_slice())).unwrap_or_default()))
                        }
                    )*
                    (Self::Ref(a), Self::Ref(b)) => {
                        for value in b.elements.iter().flatten() {
                            check_assignable(a.element_type, value)?;
                        }
                        let elements = ops::add_all(Some(a.elements.as_slice()), Some(b.elements.as_slice()))
                            .unwrap_or_default();
                        Ok(Self::Ref(RefArray::from_checked(a.element_type, elements)))
                    }
                    _ => Err(mismatch()),
                }
            };
        }

        concat_dense!(Boolean, Byte, Short, Int, Long, Float, Double, Char)
    }
}

impl PartialEq for DynArray {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Byte(a), Self::Byte(b)) => a == b,
            (Self::Short(a), Self::Short(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Long(a), Self::Long(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.iter().map(|f| f32_key(*f)).eq(b.iter().map(|f| f32_key(*f))),
            (Self::Double(a), Self::Double(b)) => a.iter().map(|f| f64_key(*f)).eq(b.iter().map(|f| f64_key(*f))),
            (Self::Char(a), Self::Char(b)) => a == b,
            (Self::Ref(a), Self::Ref(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for DynArray {}

impl Hash for DynArray {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Boolean(v) => v.hash(state),
            Self::Byte(v) => v.hash(state),
            Self::Short(v) => v.hash(state),
            Self::Int(v) => v.hash(state),
            Self::Long(v) => v.hash(state),
            Self::Float(v) => v.iter().for_each(|f| f32_key(*f).hash(state)),
            Self::Double(v) => v.iter().for_each(|f| f64_key(*f).hash(state)),
            Self::Char(v) => v.hash(state),
            Self::Ref(v) => v.hash(state),
        }
    }
}

impl Display for DynArray {
    /// `{e0,e1,...}`, see [`crate::to_string`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dispatch!(
            self,
            (vec, _v) => write_elements(f, vec),
            refs => write_elements(f, refs.elements.iter().map(|e| Nullable(e.as_ref()))),
        )
    }
}

impl From<RefArray> for DynArray {
    fn from(value: RefArray) -> Self {
        Self::Ref(value)
    }
}

macro_rules! impl_from_vec {
    ($($primitive:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<Vec<$primitive>> for DynArray {
                fn from(value: Vec<$primitive>) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}
impl_from_vec! {
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
    use pretty_assertions::assert_eq;

    use super::*;

    fn strings(elements: &[Option<&str>]) -> DynArray {
        DynArray::from_values(
            ElementType::Str,
            elements.iter().map(|e| e.map(Value::from)).collect(),
        )
        .unwrap()
    }

    #[test]
    fn subarray_keeps_variant_and_type() {
        let array = strings(&[Some("a"), None, Some("c")]);
        let sub = array.subarray(1, 3);
        assert_eq!(sub, strings(&[None, Some("c")]));
        assert_eq!(sub.element_type(), ElementType::Str);

        let empty = array.subarray(3, 0);
        assert!(empty.is_empty());
        assert_eq!(empty.element_type(), ElementType::Str);
    }

    #[test]
    fn reverse_twice() {
        let mut array = strings(&[Some("a"), None, Some("c")]);
        array.reverse();
        assert_eq!(array, strings(&[Some("c"), None, Some("a")]));
        array.reverse();
        assert_eq!(array, strings(&[Some("a"), None, Some("c")]));
    }

    #[test]
    fn remove_keeps_element_type() {
        let array = DynArray::from(vec![10_i32]);
        assert_eq!(array.remove(0), Ok(DynArray::Int(vec![])));
        assert_eq!(
            array.remove(1),
            Err(ArrayError::IndexOutOfBounds {
                index: 1,
                length: 1
            })
        );
    }

    #[test]
    fn remove_element_matches_absent() {
        let array = strings(&[Some("a"), None, None]);
        assert_eq!(array.remove_element(None), strings(&[Some("a"), None]));
        assert_eq!(array.remove_element(Some(&"z".into())), array);
    }

    #[test]
    fn remove_element_dense() {
        let array = DynArray::from(vec![3_i16, 1, 3]);
        assert_eq!(array.remove_element(Some(&Value::Short(3))), DynArray::Short(vec![1, 3]));
        assert_eq!(array.remove_element(Some(&Value::Int(3))), array);
        assert_eq!(array.remove_element(None), array);
        assert_eq!(array, DynArray::Short(vec![3, 1, 3]));
    }

    #[test]
    fn search_nullable() {
        let array = strings(&[None, Some("a"), None]);
        assert_eq!(array.index_of(None), Some(0));
        assert_eq!(array.last_index_of(None), Some(2));
        assert_eq!(array.index_of_from(None, 1), Some(2));
        assert_eq!(array.last_index_of_from(None, 1), Some(0));
        assert!(array.contains(Some(&"a".into())));
        assert!(!array.contains(Some(&Value::Int(1))));
    }

    #[test]
    fn tolerance_only_for_floats() {
        assert_eq!(DynArray::from(vec![1.5_f32, 9.0]).last_index_of_within(1.4, 0.2), Some(0));
        assert_eq!(DynArray::from(vec![1_i32]).index_of_within(1.0, 1.0), None);

        let boxed = DynArray::from_values(ElementType::Double, vec![None, Some(Value::Double(2.0))]).unwrap();
        assert_eq!(boxed.index_of_within(2.0, 0.0), Some(1));
        assert!(boxed.contains_within(2.0, 0.0));
    }

    #[test]
    fn tolerance_search_from_start() {
        let array = DynArray::from(vec![1.0_f32, 2.0, 1.0, 2.0]);
        assert_eq!(array.index_of_within_from(1.0, 1, 0.1), Some(2));
        assert_eq!(array.index_of_within_from(1.0, -3, 0.1), Some(0));
        assert_eq!(array.index_of_within_from(1.0, 3, 0.1), None);
        assert_eq!(array.index_of_within_from(1.0, 99, 0.1), None);

        assert_eq!(array.last_index_of_within_from(2.0, 2, 0.1), Some(1));
        assert_eq!(array.last_index_of_within_from(2.0, 99, 0.1), Some(3));
        assert_eq!(array.last_index_of_within_from(2.0, 0, 0.1), None);
        assert_eq!(array.last_index_of_within_from(2.0, -1, 0.1), None);

        let boxed = array.to_object();
        assert_eq!(boxed.index_of_within_from(2.0, 2, 0.0), Some(3));
        assert_eq!(boxed.last_index_of_within_from(1.0, 1, 0.0), Some(0));
        assert_eq!(DynArray::from(vec![1_i64]).last_index_of_within_from(1.0, 0, 1.0), None);
    }

    #[test]
    fn boxing() {
        let array = DynArray::from(vec!['x', 'y']);
        let boxed = array.to_object();
        assert!(!boxed.is_primitive());
        assert_eq!(boxed.element_type(), ElementType::Char);
        assert_eq!(boxed.to_primitive(), Ok(array));

        assert_eq!(
            strings(&[]).to_primitive(),
            Err(ArrayError::NoPrimitiveForm(ElementType::Str))
        );
        assert_eq!(
            boxed.to_primitive_or(&Value::Int(0)),
            Err(ArrayError::TypeMismatch {
                expected: ElementType::Char,
                found: ElementType::Int
            })
        );
    }

    #[test]
    fn concat() {
        let a = DynArray::from(vec![1_i8]);
        let b = DynArray::from(vec![2_i8]);
        assert_eq!(a.concat(&b), Ok(DynArray::Byte(vec![1, 2])));
        assert!(a.concat(&DynArray::from(vec![2_i16])).is_err());
        assert!(a.concat(&a.to_object()).is_err());

        let objects = DynArray::empty(ElementType::Object);
        let joined = objects.concat(&strings(&[Some("s")])).unwrap();
        assert_eq!(joined.element_type(), ElementType::Object);
        assert_eq!(joined.len(), 1);
    }

    #[test]
    fn display() {
        assert_eq!(strings(&[Some("a"), None]).to_string(), "{a,<null>}");
        assert_eq!(DynArray::from(vec![true]).to_string(), "{true}");

        let nested = DynArray::from_values(
            ElementType::Array,
            vec![Some(DynArray::from(vec![1_i32, 2]).into()), None],
        )
        .unwrap();
        assert_eq!(nested.to_string(), "{{1,2},<null>}");
    }

    #[test]
    fn floats_compare_by_bits() {
        assert_eq!(DynArray::from(vec![f64::NAN]), DynArray::from(vec![f64::NAN]));
        assert_ne!(DynArray::from(vec![0.0_f32]), DynArray::from(vec![-0.0_f32]));
        assert_ne!(DynArray::from(vec![1_i32]), DynArray::from(vec![1_i32]).to_object());
    }
}
