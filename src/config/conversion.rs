// Author: Dustin Pilgrim
// License: MIT

use indexmap::IndexMap;

use crate::error::ConfigError;
use crate::value::{Value, ValueKind};

// Conversions report an empty path; `Config::get` fills in the real one.
fn mismatch(expected: ValueKind, value: &Value) -> ConfigError {
    ConfigError::TypeMismatch {
        path: String::new(),
        expected,
        found: value.kind(),
    }
}

fn out_of_range(value: i64) -> ConfigError {
    ConfigError::IntegerOutOfRange {
        path: String::new(),
        value,
    }
}

impl TryFrom<Value> for String {
    type Error = ConfigError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(mismatch(ValueKind::String, &other)),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = ConfigError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(mismatch(ValueKind::Bool, &other)),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = ConfigError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Float(f) => Ok(f),
            other => Err(mismatch(ValueKind::Float, &other)),
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = ConfigError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Int(n) => Ok(i64::from(n)),
            Value::Int64(n) => Ok(n),
            other => Err(mismatch(ValueKind::Int64, &other)),
        }
    }
}

impl TryFrom<Value> for i32 {
    type Error = ConfigError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Int(n) => Ok(n),
            Value::Int64(n) => i32::try_from(n).map_err(|_| out_of_range(n)),
            other => Err(mismatch(ValueKind::Int, &other)),
        }
    }
}

/// Unsigned targets go through `i64` and are range checked.
fn narrow<T: TryFrom<i64>>(value: Value) -> Result<T, ConfigError> {
    let n = i64::try_from(value)?;
    T::try_from(n).map_err(|_| out_of_range(n))
}

impl TryFrom<Value> for u16 {
    type Error = ConfigError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        narrow(value)
    }
}

impl TryFrom<Value> for u32 {
    type Error = ConfigError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        narrow(value)
    }
}

impl TryFrom<Value> for u64 {
    type Error = ConfigError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        narrow(value)
    }
}

impl TryFrom<Value> for usize {
    type Error = ConfigError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        narrow(value)
    }
}

/// Arrays and lists both convert, element by element.
impl<T> TryFrom<Value> for Vec<T>
where
    T: TryFrom<Value, Error = ConfigError>,
{
    type Error = ConfigError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(items) | Value::List(items) => items.into_iter().map(T::try_from).collect(),
            other => Err(mismatch(ValueKind::Array, &other)),
        }
    }
}

impl TryFrom<Value> for IndexMap<String, Value> {
    type Error = ConfigError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Group(entries) => Ok(entries),
            other => Err(mismatch(ValueKind::Group, &other)),
        }
    }
}
