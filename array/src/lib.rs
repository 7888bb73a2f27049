#![doc = include_str!("../README.md")]

//---------------------------------------------------------------------------------------------------- Private modules
mod display;
mod error;
mod map;
mod ops;
mod search;
mod wrap;

//---------------------------------------------------------------------------------------------------- Public API
pub mod dynamic;

pub use display::{to_string, to_string_nullable, to_string_or, ABSENT_ARRAY_TEXT, NULL_TEXT};
pub use dynamic::{DynArray, ElementType, Entry, RefArray, Value};
pub use error::ArrayError;
pub use map::{rows_to_map, to_map};
pub use ops::{
    add, add_all, clone, insert, is_empty, is_not_empty, is_same_length, length, null_to_empty,
    remove, remove_element, reverse, subarray,
};
pub use search::{
    contains, contains_within, index_of, index_of_from, index_of_within, index_of_within_from,
    last_index_of, last_index_of_from, last_index_of_within, last_index_of_within_from, Float,
};
pub use wrap::{to_object, to_primitive, to_primitive_or};
