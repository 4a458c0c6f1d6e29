use serde_json::Value;
use typeprims_types::{object, string};

use crate::validator::check;

/// Render a value for inclusion in an error message.
///
/// Strings are wrapped in double quotes without escaping, objects are
/// serialized as compact JSON, everything else uses its literal text
/// (arrays come out as compact JSON as well).
pub fn render_value(value: &Value) -> String {
    if check(value, &string()) {
        return format!("\"{}\"", value.as_str().unwrap_or_default());
    }
    if check(value, &object()) {
        return serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string());
    }
    value.to_string()
}
