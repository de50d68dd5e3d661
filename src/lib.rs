//! valxml: order-preserving serialization of dynamic value trees to XML.
//!
//! The heavy lifting lives in the member crates: `valxml-model` holds the
//! ordered value model and its adapters, `valxml-render` the recursive
//! renderer. This crate re-exports both and adds the convenience entry
//! points most callers want:
//!
//! ```
//! use valxml::{RenderConfig, value_to_xml};
//! use serde_json::json;
//!
//! let config = RenderConfig::new().with_pretty_print(false);
//! let xml = value_to_xml(&json!({"item": [1, 2]}), &config).unwrap();
//! assert_eq!(xml, "<item>1</item><item>2</item>");
//! ```

pub use valxml_model::{
    ArrayModel, Element, ModelError, ObjectModel, dictionary_to_object_model,
    record_to_object_model, sequence_to_array_model,
};
pub use valxml_render::{
    RenderConfig, RenderError, TagCasing, apply_casing, escape_text, render, render_sequence,
    wrap_sequence,
};

use serde::Serialize;
use serde_json::Value;

/// Serializes any structured record straight to markup.
pub fn to_xml<T: Serialize>(record: &T, config: &RenderConfig) -> Result<String, RenderError> {
    let value = serde_json::to_value(record).map_err(ModelError::from)?;
    value_to_xml(&value, config)
}

/// Serializes a dynamic value to markup, picking the object-model or
/// array-wrap path by the value's shape. A top-level scalar or null
/// renders as a single element under the configured root tag, or as an
/// empty document when no root tag is set (fail-open, like every other
/// unexpected shape).
pub fn value_to_xml(value: &Value, config: &RenderConfig) -> Result<String, RenderError> {
    match value {
        Value::Object(map) => render(&dictionary_to_object_model(map), config),
        Value::Array(items) => sequence_to_xml(items, config),
        other => {
            let Some(root) = config.root() else {
                return Ok(String::new());
            };
            let mut model = ObjectModel::new();
            model.insert(root, Element::from_value(other.clone()));
            let body_config = RenderConfig {
                root_tag: String::new(),
                ..config.clone()
            };
            render(&model, &body_config)
        }
    }
}

/// Serializes a bare sequence through the array-wrap pre-pass.
pub fn sequence_to_xml(items: &[Value], config: &RenderConfig) -> Result<String, RenderError> {
    let elements = items.iter().cloned().map(Element::from_value).collect();
    render_sequence(elements, config)
}
