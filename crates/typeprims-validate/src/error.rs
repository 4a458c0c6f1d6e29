use typeprims_types::TypeError;

/// A value failed validation against a descriptor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The value does not conform to the expected type.
    #[error(
        "{rendered} of type '{actual}' is an invalid value for expected type '{expected}'. More information: {source}"
    )]
    Mismatch {
        /// Display rendering of the offending value.
        rendered: String,
        /// Runtime kind of the offending value.
        actual: &'static str,
        /// Name of the descriptor the value was checked against.
        expected: String,
        /// Failure reported by the descriptor itself.
        source: TypeError,
    },

    /// A named parameter failed validation.
    #[error("{name}: {source}")]
    Param {
        name: String,
        source: Box<ValidationError>,
    },
}

impl ValidationError {
    /// Scope this error to a parameter name.
    pub fn for_param(self, name: impl Into<String>) -> Self {
        Self::Param {
            name: name.into(),
            source: Box::new(self),
        }
    }

    /// Name of the expected type.
    pub fn expected(&self) -> &str {
        match self {
            Self::Mismatch { expected, .. } => expected,
            Self::Param { source, .. } => source.expected(),
        }
    }

    /// Runtime kind of the rejected value.
    pub fn actual(&self) -> &'static str {
        match self {
            Self::Mismatch { actual, .. } => actual,
            Self::Param { source, .. } => source.actual(),
        }
    }

    /// The descriptor's own failure.
    pub fn cause(&self) -> &TypeError {
        match self {
            Self::Mismatch { source, .. } => source,
            Self::Param { source, .. } => source.cause(),
        }
    }

    /// Parameter name, if the error was produced by
    /// [`validate_param`](crate::validate_param).
    pub fn param(&self) -> Option<&str> {
        match self {
            Self::Mismatch { .. } => None,
            Self::Param { name, .. } => Some(name),
        }
    }
}

/// Callback that takes ownership of a validation error instead of
/// returning it to the caller.
pub type ErrorHandler<'a> = &'a mut dyn FnMut(ValidationError);

pub type Result<T> = std::result::Result<T, ValidationError>;
