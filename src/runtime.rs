//! Wire value model consumed by generated code.
//!
//! Emitted encode routines build a [`Value`] tree; emitted decode routines
//! take one apart through the `expect_*` accessors. The concrete byte-level
//! encoding of a `Value` (string escaping, number formatting) belongs to the
//! driver and its wire library, not to this crate.

use thiserror::Error;

/// Structured wire representation of one encoded record or field.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    /// Ordered, length-preserving encoding of a sequence.
    Array(Vec<Value>),
    /// Ordered (encoded key, encoded value) pairs of a mapping.
    Pairs(Vec<(Value, Value)>),
    /// (field name, encoded value) pairs, in flattened field order.
    Record(Vec<(String, Value)>),
}

impl Value {
    fn kind(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::Array(_) => "array",
            Value::Pairs(_) => "pairs",
            Value::Record(_) => "record",
        }
    }
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("expected {expected}, found {found}")]
    Mismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("missing field `{0}`")]
    MissingField(String),

    #[error("integer out of range")]
    IntegerRange(#[from] std::num::TryFromIntError),
}

impl From<std::convert::Infallible> for DecodeError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}

fn mismatch(expected: &'static str, found: &Value) -> DecodeError {
    DecodeError::Mismatch {
        expected,
        found: found.kind(),
    }
}

pub fn expect_bool(value: &Value) -> Result<bool, DecodeError> {
    match value {
        Value::Bool(b) => Ok(*b),
        other => Err(mismatch("bool", other)),
    }
}

pub fn expect_integer(value: &Value) -> Result<i64, DecodeError> {
    match value {
        Value::Integer(i) => Ok(*i),
        other => Err(mismatch("integer", other)),
    }
}

pub fn expect_float(value: &Value) -> Result<f64, DecodeError> {
    match value {
        Value::Float(f) => Ok(*f),
        other => Err(mismatch("float", other)),
    }
}

pub fn expect_text(value: &Value) -> Result<&str, DecodeError> {
    match value {
        Value::Text(s) => Ok(s),
        other => Err(mismatch("text", other)),
    }
}

pub fn expect_array(value: &Value) -> Result<&[Value], DecodeError> {
    match value {
        Value::Array(elements) => Ok(elements),
        other => Err(mismatch("array", other)),
    }
}

pub fn expect_pairs(value: &Value) -> Result<&[(Value, Value)], DecodeError> {
    match value {
        Value::Pairs(pairs) => Ok(pairs),
        other => Err(mismatch("pairs", other)),
    }
}

pub fn expect_record(value: &Value) -> Result<&[(String, Value)], DecodeError> {
    match value {
        Value::Record(fields) => Ok(fields),
        other => Err(mismatch("record", other)),
    }
}

/// Looks a field up by name in a decoded record body.
pub fn field<'a>(fields: &'a [(String, Value)], name: &str) -> Result<&'a Value, DecodeError> {
    fields
        .iter()
        .find(|(field_name, _)| field_name == name)
        .map(|(_, value)| value)
        .ok_or_else(|| DecodeError::MissingField(name.to_owned()))
}

/// Narrows the wire float back into the declared field width.
pub trait FromFloat: Sized {
    fn from_float(value: f64) -> Self;
}

impl FromFloat for f64 {
    fn from_float(value: f64) -> Self {
        value
    }
}

impl FromFloat for f32 {
    fn from_float(value: f64) -> Self {
        value as f32
    }
}
