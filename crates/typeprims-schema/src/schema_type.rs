use std::fmt;

use jsonschema::Validator;
use serde_json::Value;
use typeprims_types::{Type, TypeError};

use crate::error::{Result, SchemaError};

/// Extra violations appended after the first one in an error message.
const EXTRA_VIOLATIONS: usize = 3;

/// A named descriptor backed by a compiled JSON Schema.
pub struct SchemaType {
    name: String,
    validator: Validator,
}

impl SchemaType {
    /// Compile `schema` into a descriptor called `name`.
    pub fn compile(name: impl Into<String>, schema: &Value) -> Result<Self> {
        let name = name.into();
        let validator = jsonschema::validator_for(schema).map_err(|err| {
            SchemaError::CompileFailed {
                name: name.clone(),
                message: err.to_string(),
            }
        })?;
        Ok(Self { name, validator })
    }

    /// Parse and compile a schema from JSON text.
    pub fn from_json(name: impl Into<String>, schema_json: &str) -> Result<Self> {
        let schema: Value = serde_json::from_str(schema_json)?;
        Self::compile(name, &schema)
    }
}

impl Type for SchemaType {
    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self, value: &Value) -> typeprims_types::Result<()> {
        let mut errors = self.validator.iter_errors(value);
        let Some(first) = errors.next() else {
            return Ok(());
        };

        let mut message = first.to_string();
        for err in errors.take(EXTRA_VIOLATIONS) {
            message.push_str("; ");
            message.push_str(&err.to_string());
        }
        Err(TypeError::Schema { message })
    }
}

impl fmt::Debug for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaType")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
