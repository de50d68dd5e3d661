//! Adapters from native dynamic values into model form.
//!
//! All adapters preserve the input's enumeration order (`serde_json` is
//! built with `preserve_order`, so native mappings iterate in insertion
//! order).

use crate::element::Element;
use crate::error::ModelError;
use crate::model::{ArrayModel, ObjectModel};
use serde::Serialize;
use serde_json::{Map, Value};

/// Adapts a native mapping into an object model.
pub fn dictionary_to_object_model(map: &Map<String, Value>) -> ObjectModel {
    map.iter()
        .map(|(key, value)| (key.clone(), Element::from_value(value.clone())))
        .collect()
}

/// Adapts a structured record into an object model by serializing its
/// named fields. Field order is the record's declared `Serialize` order.
pub fn record_to_object_model<T: Serialize>(record: &T) -> Result<ObjectModel, ModelError> {
    match serde_json::to_value(record)? {
        Value::Object(map) => Ok(dictionary_to_object_model(&map)),
        other => Err(ModelError::NotARecord {
            kind: json_kind(&other),
        }),
    }
}

/// Adapts a native ordered list into an array model.
pub fn sequence_to_array_model(items: &[Value]) -> ArrayModel {
    items.iter().cloned().map(Element::from_value).collect()
}

fn json_kind(value: &Value) -> String {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
    .to_string()
}
