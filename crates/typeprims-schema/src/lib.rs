//! JSON Schema backed type descriptors and a named type registry.
//!
//! [`SchemaType`] compiles a JSON Schema 2020-12 document into a
//! [`Type`](typeprims_types::Type), so schema-described shapes can be used
//! anywhere a primitive descriptor can. [`TypeRegistry`] maps names to
//! descriptors: the builtin primitives plus anything registered from
//! strings, values, or a directory of `<name>.schema.json` files.

pub mod config;
pub mod error;
pub mod registry;
pub mod schema_type;

pub use config::RegistryConfig;
pub use error::{Result, SchemaError};
pub use registry::{TypeOrigin, TypeRegistry};
pub use schema_type::SchemaType;
