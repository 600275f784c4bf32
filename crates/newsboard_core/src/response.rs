//! Response body shapes handed to the transport layer.
//!
//! Collections go under the resource's plural key, single entities under
//! its singular key: `{"articles": [...]}`, `{"article": {...}}`.

use crate::model::Resource;
use serde::Serialize;
use serde_json::{Map, Value};

/// Wraps one entity under its singular key.
pub fn one<T: Resource + Serialize>(item: &T) -> serde_json::Result<Value> {
    wrap(T::SINGULAR, item)
}

/// Wraps a collection under its plural key.
pub fn many<T: Resource + Serialize>(items: &[T]) -> serde_json::Result<Value> {
    wrap(T::PLURAL, items)
}

fn wrap<T: Serialize + ?Sized>(key: &str, value: &T) -> serde_json::Result<Value> {
    let mut body = Map::new();
    body.insert(key.to_string(), serde_json::to_value(value)?);
    Ok(Value::Object(body))
}
