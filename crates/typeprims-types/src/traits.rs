use std::sync::Arc;

use serde_json::Value;

use crate::error::Result;

/// A named descriptor that decides whether a value conforms.
///
/// `validate` either returns `Ok(())` or a [`TypeError`](crate::TypeError)
/// describing the mismatch. Implementations must be free of side effects so
/// callers can re-run them (the validator does, when rendering values).
pub trait Type: Send + Sync {
    /// Display label used in error messages.
    fn name(&self) -> &str;

    /// Check `value` against this descriptor.
    fn validate(&self, value: &Value) -> Result<()>;
}

impl<T: Type + ?Sized> Type for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn validate(&self, value: &Value) -> Result<()> {
        (**self).validate(value)
    }
}

impl<T: Type + ?Sized> Type for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn validate(&self, value: &Value) -> Result<()> {
        (**self).validate(value)
    }
}

impl<T: Type + ?Sized> Type for Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn validate(&self, value: &Value) -> Result<()> {
        (**self).validate(value)
    }
}

impl std::fmt::Debug for dyn Type + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Type").field("name", &self.name()).finish()
    }
}
