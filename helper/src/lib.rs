#![doc = include_str!("../README.md")]

//---------------------------------------------------------------------------------------------------- Public API
#[cfg(feature = "boolean")]
pub mod boolean;

#[cfg(feature = "chars")]
pub mod chars;

#[cfg(feature = "encoding")]
pub mod encoding;

#[cfg(feature = "random")]
pub mod random;

#[cfg(feature = "validate")]
pub mod validate;

//---------------------------------------------------------------------------------------------------- Private Usage

//----------------------------------------------------------------------------------------------------
