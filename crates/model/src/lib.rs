//! The ordered value model consumed by the markup renderer.
//!
//! This crate defines the read-only tree the renderer walks: a closed
//! [`Element`] union over scalars, dictionaries, and sequences, the ordered
//! [`ObjectModel`] and [`ArrayModel`] containers, and the adapters that
//! build model instances from native dynamic values (`serde_json`) and from
//! structured records (any `T: Serialize`).
//!
//! Iteration order is insertion order everywhere; nothing is ever sorted or
//! normalized, because the order of keys is the order of emitted tags.

pub mod adapt;
pub mod element;
pub mod error;
pub mod model;

pub use adapt::{dictionary_to_object_model, record_to_object_model, sequence_to_array_model};
pub use element::Element;
pub use error::ModelError;
pub use model::{ArrayModel, ObjectModel};
