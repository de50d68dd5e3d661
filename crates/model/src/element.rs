//! The `Element` union: one node of the value tree.

use crate::model::{ArrayModel, ObjectModel};
use serde_json::{Map, Value};

/// One node of the value tree, tagged with its kind.
///
/// The object-like kinds (`Object`, `Dictionary`) and the array-like kinds
/// (`Array`, `Sequence`) differ only in how far along the adaptation
/// pipeline they are; they render identically once adapted. Structured
/// records adapt directly via [`crate::adapt::record_to_object_model`]; no
/// distinct variant is needed.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// An absent value, rendered as an empty tag pair.
    Null,
    /// A non-container leaf: string, number, or boolean.
    Scalar(Value),
    /// A dictionary already adapted into model form.
    Object(ObjectModel),
    /// A native mapping, adapted lazily at dispatch time.
    Dictionary(Map<String, Value>),
    /// A native ordered list, adapted lazily at dispatch time.
    Sequence(Vec<Value>),
    /// A sequence already adapted into model form.
    Array(ArrayModel),
}

impl Element {
    /// Classifies a native dynamic value into its element kind.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Null => Element::Null,
            Value::Object(map) => Element::Dictionary(map),
            Value::Array(items) => Element::Sequence(items),
            scalar => Element::Scalar(scalar),
        }
    }

    /// True for the dictionary-shaped kinds that render as nested children.
    pub fn is_object_like(&self) -> bool {
        matches!(self, Element::Object(_) | Element::Dictionary(_))
    }

    /// True for the list-shaped kinds that render as repeated sibling tags.
    pub fn is_array_like(&self) -> bool {
        matches!(self, Element::Array(_) | Element::Sequence(_))
    }

    /// The textual form of a leaf value. String content is returned
    /// verbatim; numbers and booleans use their canonical display. The
    /// caller-supplied `default` stands in for absent or non-leaf values.
    pub fn scalar_text(&self, default: &str) -> String {
        match self {
            Element::Scalar(Value::String(text)) => text.clone(),
            Element::Scalar(value) => value.to_string(),
            _ => default.to_string(),
        }
    }
}

impl From<Value> for Element {
    fn from(value: Value) -> Self {
        Element::from_value(value)
    }
}
