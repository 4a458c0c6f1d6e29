/// Errors raised while building descriptors or the registry.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// A schema file could not be loaded.
    #[error("failed to load schema: {0}")]
    LoadFailed(String),

    /// The schema could not be compiled.
    #[error("failed to compile schema '{name}': {message}")]
    CompileFailed { name: String, message: String },

    /// The schema text is not valid JSON.
    #[error("schema is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The type name is empty or contains unsupported characters.
    #[error("invalid type name: {0:?}")]
    InvalidName(String),

    /// The name belongs to a builtin primitive.
    #[error("type name '{0}' is reserved for a builtin type")]
    Reserved(String),

    /// No type is registered under the name.
    #[error("unknown type '{0}'")]
    UnknownType(String),
}

pub type Result<T> = std::result::Result<T, SchemaError>;
