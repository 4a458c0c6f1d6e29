use std::fmt;
use std::io;

use typeprims::schema::SchemaError;

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const PERMISSION_DENIED: i32 = 50;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
        io::ErrorKind::NotFound => FAILURE,
        _ => INTERNAL,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn schema_error(context: &str, err: SchemaError) -> CliError {
    let code = match &err {
        SchemaError::UnknownType(_) | SchemaError::InvalidName(_) | SchemaError::Reserved(_) => {
            USAGE
        }
        SchemaError::CompileFailed { .. } | SchemaError::InvalidJson(_) => DATA_INVALID,
        SchemaError::LoadFailed(_) => FAILURE,
    };
    CliError::new(code, format!("{context}: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_type_is_a_usage_error() {
        let err = schema_error("resolve failed", SchemaError::UnknownType("x".to_string()));
        assert_eq!(err.code, USAGE);
        assert_eq!(err.to_string(), "resolve failed: unknown type 'x'");
    }

    #[test]
    fn broken_schema_is_invalid_data() {
        let err = schema_error(
            "load failed",
            SchemaError::CompileFailed {
                name: "user".to_string(),
                message: "bad".to_string(),
            },
        );
        assert_eq!(err.code, DATA_INVALID);
    }

    #[test]
    fn io_permission_denied_maps_to_dedicated_code() {
        let err = io_error(
            "read failed",
            io::Error::new(io::ErrorKind::PermissionDenied, "nope"),
        );
        assert_eq!(err.code, PERMISSION_DENIED);
    }
}
