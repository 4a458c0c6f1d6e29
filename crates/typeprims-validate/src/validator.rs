use serde_json::{Map, Value};
use tracing::{debug, trace};
use typeprims_types::{runtime_type_name, Type};

use crate::error::{ErrorHandler, Result, ValidationError};
use crate::render::render_value;

/// Returns `true` if `value` conforms to `ty`. Failure details are dropped.
pub fn check(value: &Value, ty: &dyn Type) -> bool {
    ty.validate(value).is_ok()
}

/// Validate `value` against `ty`.
///
/// Returns `Ok(true)` on success. On mismatch the error goes to
/// `error_handler` when one is given (and the call returns `Ok(false)`),
/// otherwise it is returned as `Err`.
pub fn validate(
    value: &Value,
    ty: &dyn Type,
    error_handler: Option<ErrorHandler<'_>>,
) -> Result<bool> {
    let Err(cause) = ty.validate(value) else {
        return Ok(true);
    };

    let actual = runtime_type_name(value);
    debug!(expected = ty.name(), actual, cause = %cause, "value failed type validation");

    let error = ValidationError::Mismatch {
        rendered: render_value(value),
        actual,
        expected: ty.name().to_string(),
        source: cause,
    };
    dispatch(error, error_handler)
}

/// Validate the single entry of `value_obj` against `ty`, naming the
/// error after the entry's key.
///
/// # Panics
///
/// Panics if `value_obj` does not hold exactly one entry. That is a bug in
/// the caller, not a validation failure.
pub fn validate_param(value_obj: &Map<String, Value>, ty: &dyn Type) -> Result<bool> {
    assert_eq!(
        value_obj.len(),
        1,
        "There should be only one property in the value object"
    );
    let Some((name, value)) = value_obj.iter().next() else {
        unreachable!("length checked above");
    };

    validate(value, ty, None).map_err(|err| err.for_param(name.as_str()))
}

/// Validate `value` against each candidate in order, succeeding on the
/// first match.
///
/// When nothing matches, the failure of the last candidate is handed to
/// `error_handler` (returning `Ok(false)`) or returned as `Err`.
///
/// An empty candidate list validates successfully. Callers that expect
/// "no candidates" to reject must check for it themselves.
pub fn validate_multiple<T: Type>(
    value: &Value,
    types: &[T],
    error_handler: Option<ErrorHandler<'_>>,
) -> Result<bool> {
    if types.is_empty() {
        debug!("union validation with no candidates accepts the value");
    }

    let mut error = None;
    for candidate in types {
        match validate(value, candidate, None) {
            Ok(_) => {
                trace!(candidate = candidate.name(), "union candidate matched");
                error = None;
                break;
            }
            Err(err) => {
                trace!(candidate = candidate.name(), "union candidate rejected");
                error = Some(err);
            }
        }
    }

    match error {
        Some(error) => dispatch(error, error_handler),
        None => Ok(true),
    }
}

fn dispatch(error: ValidationError, error_handler: Option<ErrorHandler<'_>>) -> Result<bool> {
    match error_handler {
        Some(handler) => {
            handler(error);
            Ok(false)
        }
        None => Err(error),
    }
}
