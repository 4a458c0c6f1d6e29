//! Primitive descriptors.
//!
//! Each descriptor is a unit struct so it can be used by value, by
//! reference, or boxed behind `dyn Type` at no cost.

use serde_json::Value;

use crate::error::{Result, TypeError};
use crate::kind::runtime_type_name;
use crate::traits::Type;

/// Names taken by the primitive descriptors.
pub const BUILTIN_NAMES: [&str; 8] = [
    "any", "array", "boolean", "integer", "null", "number", "object", "string",
];

fn expect(expected: &str, value: &Value, ok: bool) -> Result<()> {
    if ok {
        Ok(())
    } else {
        Err(TypeError::Mismatch {
            expected: expected.to_string(),
            found: runtime_type_name(value),
        })
    }
}

/// Accepts JSON strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringType;

impl Type for StringType {
    fn name(&self) -> &str {
        "string"
    }

    fn validate(&self, value: &Value) -> Result<()> {
        expect(self.name(), value, value.is_string())
    }
}

/// Accepts any JSON number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumberType;

impl Type for NumberType {
    fn name(&self) -> &str {
        "number"
    }

    fn validate(&self, value: &Value) -> Result<()> {
        expect(self.name(), value, value.is_number())
    }
}

/// Accepts numbers without a fractional part.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntegerType;

impl Type for IntegerType {
    fn name(&self) -> &str {
        "integer"
    }

    fn validate(&self, value: &Value) -> Result<()> {
        let integral = match value {
            Value::Number(n) if n.is_i64() || n.is_u64() => true,
            Value::Number(n) => n
                .as_f64()
                .is_some_and(|f| f.is_finite() && f.fract() == 0.0),
            _ => false,
        };
        if integral {
            return Ok(());
        }
        match value {
            Value::Number(n) => Err(TypeError::Custom(format!(
                "expected integer, found fractional number {n}"
            ))),
            _ => expect(self.name(), value, false),
        }
    }
}

/// Accepts `true` and `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BooleanType;

impl Type for BooleanType {
    fn name(&self) -> &str {
        "boolean"
    }

    fn validate(&self, value: &Value) -> Result<()> {
        expect(self.name(), value, value.is_boolean())
    }
}

/// Accepts only `null`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullType;

impl Type for NullType {
    fn name(&self) -> &str {
        "null"
    }

    fn validate(&self, value: &Value) -> Result<()> {
        expect(self.name(), value, value.is_null())
    }
}

/// Accepts JSON arrays of any content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArrayType;

impl Type for ArrayType {
    fn name(&self) -> &str {
        "array"
    }

    fn validate(&self, value: &Value) -> Result<()> {
        expect(self.name(), value, value.is_array())
    }
}

/// Accepts JSON objects. Arrays and `null` are rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ObjectType;

impl Type for ObjectType {
    fn name(&self) -> &str {
        "object"
    }

    fn validate(&self, value: &Value) -> Result<()> {
        expect(self.name(), value, value.is_object())
    }
}

/// Accepts every value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnyType;

impl Type for AnyType {
    fn name(&self) -> &str {
        "any"
    }

    fn validate(&self, _value: &Value) -> Result<()> {
        Ok(())
    }
}

pub fn string() -> StringType {
    StringType
}

pub fn number() -> NumberType {
    NumberType
}

pub fn integer() -> IntegerType {
    IntegerType
}

pub fn boolean() -> BooleanType {
    BooleanType
}

pub fn null() -> NullType {
    NullType
}

pub fn array() -> ArrayType {
    ArrayType
}

pub fn object() -> ObjectType {
    ObjectType
}

pub fn any() -> AnyType {
    AnyType
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn primitives_accept_their_own_kind() {
        assert!(string().validate(&json!("hello")).is_ok());
        assert!(number().validate(&json!(2.5)).is_ok());
        assert!(integer().validate(&json!(-3)).is_ok());
        assert!(boolean().validate(&json!(true)).is_ok());
        assert!(null().validate(&json!(null)).is_ok());
        assert!(array().validate(&json!([1, "a"])).is_ok());
        assert!(object().validate(&json!({"k": "v"})).is_ok());
    }

    #[test]
    fn mismatch_reports_expected_and_found() {
        let err = string().validate(&json!(5)).unwrap_err();
        assert_eq!(
            err,
            TypeError::Mismatch {
                expected: "string".to_string(),
                found: "number",
            }
        );
        assert_eq!(err.to_string(), "expected string, found number");
    }

    #[test]
    fn object_rejects_arrays_and_null() {
        assert!(object().validate(&json!([])).is_err());
        assert!(object().validate(&json!(null)).is_err());
    }

    #[test]
    fn integer_accepts_whole_floats_only() {
        assert!(integer().validate(&json!(4.0)).is_ok());
        assert!(integer().validate(&json!(u64::MAX)).is_ok());

        let err = integer().validate(&json!(4.5)).unwrap_err();
        assert!(err.to_string().contains("fractional number 4.5"));
        assert!(integer().validate(&json!("4")).is_err());
    }

    #[test]
    fn any_accepts_everything() {
        for value in [json!(null), json!(1), json!("s"), json!([]), json!({})] {
            assert!(any().validate(&value).is_ok());
        }
    }

    #[test]
    fn builtin_names_match_descriptors() {
        let descriptors: [&dyn Type; 8] = [
            &any(),
            &array(),
            &boolean(),
            &integer(),
            &null(),
            &number(),
            &object(),
            &string(),
        ];
        let names: Vec<&str> = descriptors.iter().map(|ty| ty.name()).collect();
        assert_eq!(names, BUILTIN_NAMES);
    }
}
