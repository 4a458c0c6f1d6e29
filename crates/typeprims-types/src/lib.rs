//! Type descriptors for runtime value checks.
//!
//! A descriptor is anything implementing [`Type`]: it has a display name and
//! a fallible `validate` over a [`serde_json::Value`]. This crate ships the
//! primitive descriptors the validator relies on:
//! - [`string`], [`number`], [`integer`], [`boolean`], [`null`]
//! - [`array`], [`object`]
//! - [`any`]
//!
//! Richer descriptors (JSON Schema backed, user-defined) live elsewhere and
//! plug in through the same trait.

pub mod checkers;
pub mod error;
pub mod kind;
pub mod traits;

pub use checkers::{
    any, array, boolean, integer, null, number, object, string, AnyType, ArrayType, BooleanType,
    IntegerType, NullType, NumberType, ObjectType, StringType, BUILTIN_NAMES,
};
pub use error::{Result, TypeError};
pub use kind::runtime_type_name;
pub use traits::Type;
