//! Dynamic value model
//!
//! The untyped representation crossing the Lua boundary. Values are plain
//! [`serde_json::Value`] trees (string, boolean, number, list, object); [`Obj`]
//! wraps the object case and adds typed accessors with a soft-miss policy:
//! a missing key or a value of the wrong runtime type yields that type's zero
//! value instead of an error. Transform functions rely on this to probe
//! optional fields without presence checks. Callers that need to distinguish
//! "absent" from "present but wrong type" must go through [`Obj::get`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An untyped string-keyed object. The only shape accepted from and returned
/// to scripts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Obj(pub Map<String, Value>);

impl Obj {
    /// Create an empty object.
    pub fn new() -> Self {
        Self(Map::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Raw access for callers that need to tell a missing key apart from a
    /// type mismatch.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Insert a value, replacing any previous entry for `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// String value for `key`, or `""` when absent or not a string.
    pub fn get_string(&self, key: &str) -> &str {
        self.0.get(key).and_then(Value::as_str).unwrap_or("")
    }

    /// Boolean value for `key`, or `false` when absent or not a boolean.
    pub fn get_bool(&self, key: &str) -> bool {
        self.0.get(key).and_then(Value::as_bool).unwrap_or(false)
    }

    /// Integer value for `key`, or `0` when absent or not an integer.
    ///
    /// The accessor set carries one accessor per value-model kind (string,
    /// boolean, integer, object, list) so every field kind a script can send
    /// or receive is reachable the same way, whether or not a current
    /// transform consumes it.
    pub fn get_i64(&self, key: &str) -> i64 {
        self.0.get(key).and_then(Value::as_i64).unwrap_or(0)
    }

    /// Nested object for `key`, or an empty object when absent or not an
    /// object.
    pub fn get_object(&self, key: &str) -> Obj {
        self.0
            .get(key)
            .and_then(Value::as_object)
            .map(|m| Obj(m.clone()))
            .unwrap_or_default()
    }

    /// List value for `key`, or an empty slice when absent or not a list.
    pub fn get_list(&self, key: &str) -> &[Value] {
        self.0
            .get(key)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Build from any JSON value; non-objects become the empty object.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::new(),
        }
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for Obj {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
