//! Runtime type validation for dynamic values.
//!
//! typeprims checks `serde_json::Value`s against named type descriptors and
//! reports mismatches with messages that show the value, its runtime kind,
//! and what was expected.
//!
//! # Crate Structure
//!
//! - [`types`] — The `Type` trait and primitive descriptors
//! - [`validator`] — `check`, `validate`, `validate_param`, `validate_multiple`
//! - [`schema`] — JSON Schema descriptors and the type registry (behind `schema` feature)
//!
//! ```
//! use serde_json::json;
//! use typeprims::types::{number, string, Type};
//!
//! assert!(typeprims::check(&json!(5), &number()));
//!
//! let candidates: [&dyn Type; 2] = [&string(), &number()];
//! assert_eq!(typeprims::validate_multiple(&json!(5), &candidates, None), Ok(true));
//!
//! let err = typeprims::validate(&json!("x"), &number(), None).unwrap_err();
//! assert!(err.to_string().starts_with("\"x\" of type 'string'"));
//! ```

/// Re-export descriptor types.
pub mod types {
    pub use typeprims_types::*;
}

/// Re-export validation entry points.
pub mod validator {
    pub use typeprims_validate::*;
}

/// Re-export schema types (requires `schema` feature).
#[cfg(feature = "schema")]
pub mod schema {
    pub use typeprims_schema::*;
}

pub use typeprims_types::{Type, TypeError};
pub use typeprims_validate::{
    check, validate, validate_multiple, validate_param, ErrorHandler, ValidationError,
};
