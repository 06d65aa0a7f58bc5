// Author: Dustin Pilgrim
// License: MIT

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

/// A single libconfig value. Exactly one kind is active at a time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Int(i32),
    Int64(i64),
    Float(f64),
    Bool(bool),
    String(String),
    /// Homogeneous: every element has the kind of the first.
    Array(Vec<Value>),
    /// Named settings, kept in insertion order.
    Group(IndexMap<String, Value>),
    /// Heterogeneous sequence.
    List(Vec<Value>),
}

/// The discriminant of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Int,
    Int64,
    Float,
    Bool,
    String,
    Array,
    Group,
    List,
}

impl ValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Int => "int",
            ValueKind::Int64 => "int64",
            ValueKind::Float => "float",
            ValueKind::Bool => "bool",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Group => "group",
            ValueKind::List => "list",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    pub fn int(v: i32) -> Self {
        Value::Int(v)
    }

    pub fn int64(v: i64) -> Self {
        Value::Int64(v)
    }

    pub fn float(v: f64) -> Self {
        Value::Float(v)
    }

    pub fn bool(v: bool) -> Self {
        Value::Bool(v)
    }

    pub fn string(v: impl Into<String>) -> Self {
        Value::String(v.into())
    }

    /// Builds an array without checking homogeneity; the parser enforces it for parsed input.
    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(items)
    }

    pub fn group(entries: IndexMap<String, Value>) -> Self {
        Value::Group(entries)
    }

    pub fn list(items: Vec<Value>) -> Self {
        Value::List(items)
    }

    pub fn empty_group() -> Self {
        Value::Group(IndexMap::new())
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Int(_) => ValueKind::Int,
            Value::Int64(_) => ValueKind::Int64,
            Value::Float(_) => ValueKind::Float,
            Value::Bool(_) => ValueKind::Bool,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Group(_) => ValueKind::Group,
            Value::List(_) => ValueKind::List,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.kind().as_str()
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Value::Group(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// True for `Int` and `Int64`.
    pub fn is_integer(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Int64(_))
    }

    /// Returns the value as `i32`, narrowing an `Int64` only when it fits.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Value::Int(n) => Some(*n),
            Value::Int64(n) => i32::try_from(*n).ok(),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(i64::from(*n)),
            Value::Int64(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_group(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Group(entries) => Some(entries),
            _ => None,
        }
    }

    /// Looks up a direct child of a group. Returns `None` for non-groups.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_group().and_then(|entries| entries.get(key))
    }

    /// Number of elements in an array, list or group; zero for scalars.
    pub fn len(&self) -> usize {
        match self {
            Value::Array(items) | Value::List(items) => items.len(),
            Value::Group(entries) => entries.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int64(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}
