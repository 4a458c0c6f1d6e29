//! Validation entry points over [`Type`](typeprims_types::Type) descriptors.
//!
//! - [`check`]: boolean conformance test, never fails.
//! - [`validate`]: descriptive [`ValidationError`] on mismatch, or hands the
//!   error to an optional handler and returns `false`.
//! - [`validate_param`]: like `validate`, for a single named parameter.
//! - [`validate_multiple`]: union validation, first matching candidate wins.

pub mod error;
pub mod render;
pub mod validator;

pub use error::{ErrorHandler, Result, ValidationError};
pub use render::render_value;
pub use validator::{check, validate, validate_multiple, validate_param};
