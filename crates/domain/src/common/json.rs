//! Reading entity fields out of loosely-typed JSON.
//!
//! The typed constructors make most wrong-type arguments impossible. JSON
//! input is where they come back, so every accessor here maps a JSON type
//! mismatch to [`DomainError::Type`].

use serde_json::{Map, Value};

use crate::error::DomainError;

/// Borrowed view over the fields of a JSON object.
#[derive(Debug, Clone, Copy)]
pub struct FieldReader<'a> {
    entity: &'static str,
    fields: &'a Map<String, Value>,
}

impl<'a> FieldReader<'a> {
    /// Wraps `value`, which must be a JSON object.
    pub fn new(entity: &'static str, value: &'a Value) -> Result<Self, DomainError> {
        match value {
            Value::Object(fields) => Ok(Self { entity, fields }),
            other => Err(DomainError::type_mismatch(format!(
                "{} must be described by a JSON object, got {}",
                entity,
                json_type_name(other)
            ))),
        }
    }

    /// Returns the raw value of an optional field.
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.fields.get(key)
    }

    pub fn string(&self, key: &str) -> Result<String, DomainError> {
        match self.required(key)? {
            Value::String(s) => Ok(s.clone()),
            other => Err(self.mismatch(key, "a string", other)),
        }
    }

    /// Any JSON number is accepted as a real number.
    pub fn real(&self, key: &str) -> Result<f64, DomainError> {
        let value = self.required(key)?;
        as_real(value).ok_or_else(|| self.mismatch(key, "a real number", value))
    }

    /// Integral JSON numbers only; `2.0` is rejected like any other float.
    pub fn integer(&self, key: &str) -> Result<i64, DomainError> {
        let value = self.required(key)?;
        match value {
            Value::Number(n) => match n.as_i64() {
                Some(i) => Ok(i),
                None if n.is_u64() => Err(DomainError::invalid_value(format!(
                    "{}.{} is too large: {}",
                    self.entity, key, n
                ))),
                None => Err(self.mismatch(key, "an integer", value)),
            },
            other => Err(self.mismatch(key, "an integer", other)),
        }
    }

    pub fn boolean(&self, key: &str) -> Result<bool, DomainError> {
        match self.required(key)? {
            Value::Bool(b) => Ok(*b),
            other => Err(self.mismatch(key, "a boolean", other)),
        }
    }

    fn required(&self, key: &str) -> Result<&'a Value, DomainError> {
        self.fields.get(key).ok_or_else(|| {
            DomainError::type_mismatch(format!("{}.{} is required", self.entity, key))
        })
    }

    fn mismatch(&self, key: &str, expected: &str, got: &Value) -> DomainError {
        DomainError::type_mismatch(format!(
            "{}.{} must be {}, got {}",
            self.entity,
            key,
            expected,
            json_type_name(got)
        ))
    }
}

/// Interprets a JSON value as a real number, if it is one.
pub fn as_real(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}

/// Short name of a JSON value's type, for error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
