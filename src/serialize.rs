//! Structural serializer
//!
//! Converts typed response structures into dynamic [`Obj`] values without
//! per-type conversion code. Any `Serialize` type gets the conversion through
//! the [`ToDynamic`] trait: the value is serialized to JSON and then pruned.
//!
//! Pruning reproduces the upstream wire behavior exactly and is deliberately
//! lossy: an object field holding its type's zero value (`""`, `false`, `0`,
//! null, empty collection) is dropped, so an explicit `false` or `0` from the
//! backing service is indistinguishable from "field not returned". Only
//! string, boolean, integer and structured fields are carried; any other
//! scalar field kind is silently dropped. List elements are not pruned:
//! object elements recurse, scalar elements are copied as-is.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::value::Obj;

/// Conversion into the dynamic value model.
pub trait ToDynamic {
    fn to_dynamic(&self) -> Obj;
}

impl<T: Serialize> ToDynamic for T {
    fn to_dynamic(&self) -> Obj {
        to_object(self)
    }
}

/// Convert any serializable value into a pruned [`Obj`]. Values that do not
/// serialize to an object (scalars, lists, serialization failures) become the
/// empty object.
pub fn to_object<T: Serialize>(value: &T) -> Obj {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => Obj(prune_object(map)),
        _ => Obj::new(),
    }
}

/// Prune a JSON object in field position, dropping zero-valued fields.
fn prune_object(map: Map<String, Value>) -> Map<String, Value> {
    map.into_iter()
        .filter_map(|(key, value)| prune_field(value).map(|v| (key, v)))
        .collect()
}

/// Decide whether a field survives, pruning it recursively if it does.
fn prune_field(value: Value) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::Bool(false) => None,
        Value::Bool(true) => Some(Value::Bool(true)),
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(Value::String(s)),
        Value::Number(n) => prune_number(n),
        Value::Array(items) if items.is_empty() => None,
        Value::Array(items) => Some(Value::Array(
            items.into_iter().map(prune_element).collect(),
        )),
        Value::Object(map) => {
            let pruned = prune_object(map);
            if pruned.is_empty() {
                None
            } else {
                Some(Value::Object(pruned))
            }
        }
    }
}

/// Integers survive unless zero; non-integer numbers are an unhandled scalar
/// kind and are dropped.
fn prune_number(n: serde_json::Number) -> Option<Value> {
    if let Some(i) = n.as_i64() {
        return (i != 0).then(|| Value::Number(i.into()));
    }
    if let Some(u) = n.as_u64() {
        return (u != 0).then(|| Value::Number(u.into()));
    }
    None
}

/// List elements keep their identity: structured elements recurse (and stay
/// in the list even when they prune to empty), scalars pass through
/// untouched.
fn prune_element(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(prune_object(map)),
        other => other,
    }
}
