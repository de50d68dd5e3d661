//! Order-preserving rendering of value models into XML markup.
//!
//! The renderer walks an ordered value model (see `valxml-model`) and
//! appends tags to an output buffer, honoring an immutable
//! [`RenderConfig`] snapshot per call: indentation width, tag casing,
//! prolog emission, and an optional enclosing root tag. Bare sequences go
//! through the array-wrap pre-pass in [`renderer::wrap_sequence`], which
//! applies the single-child unwrap heuristic.

pub mod config;
pub mod error;
pub mod renderer;
pub mod text;

pub use config::{RenderConfig, TagCasing};
pub use error::RenderError;
pub use renderer::{render, render_sequence, wrap_sequence};
pub use text::{apply_casing, escape_text};
