/// Errors reported by a [`Type`](crate::Type) when a value does not conform.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeError {
    /// The value has the wrong kind for a primitive descriptor.
    #[error("expected {expected}, found {found}")]
    Mismatch {
        expected: String,
        found: &'static str,
    },

    /// The value violates a JSON Schema.
    #[error("schema violation: {message}")]
    Schema { message: String },

    /// Free-form failure from a user-defined descriptor.
    #[error("{0}")]
    Custom(String),
}

impl TypeError {
    /// Build a free-form error.
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }
}

pub type Result<T> = std::result::Result<T, TypeError>;
