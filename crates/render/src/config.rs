//! The immutable configuration snapshot for a render call.

use serde::{Deserialize, Serialize};

/// Default spaces per nesting level.
pub const DEFAULT_INDENT_WIDTH: i32 = 4;
/// Encoding label used when the configured one is blank.
pub const DEFAULT_ENCODING_LABEL: &str = "UTF-8";
/// Default recursion ceiling.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Tag-name casing, applied after escaping. Casing touches the tag name
/// only, never text content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TagCasing {
    #[default]
    AsIs,
    Upper,
    Lower,
}

/// Configuration for one render call.
///
/// A frozen value passed explicitly into [`crate::render`]; callers needing
/// concurrent renders with different settings simply build separate values.
/// Setters are last-write-wins and never fail; blank strings fall back to
/// their defaults at use time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Spaces added per nesting level. Negative disables all indentation
    /// and newlines, even when `pretty_print` is set.
    pub indent_width: i32,
    pub tag_casing: TagCasing,
    pub pretty_print: bool,
    pub emit_prolog: bool,
    /// Encoding label inserted verbatim into the prolog. Blank falls back
    /// to `"UTF-8"`. Purely cosmetic metadata; never validated against the
    /// output's actual encoding.
    pub prolog_encoding: String,
    /// Enclosing tag for the whole document. Blank means no enclosing tag
    /// and the body starts at indent level 0.
    pub root_tag: String,
    /// Recursion ceiling; exceeding it aborts the render with
    /// [`crate::RenderError::DepthExceeded`] instead of exhausting the
    /// stack on pathologically deep input.
    pub max_depth: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            indent_width: DEFAULT_INDENT_WIDTH,
            tag_casing: TagCasing::AsIs,
            pretty_print: true,
            emit_prolog: false,
            prolog_encoding: DEFAULT_ENCODING_LABEL.to_string(),
            root_tag: String::new(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indent_width(mut self, width: i32) -> Self {
        self.indent_width = width;
        self
    }

    pub fn with_tag_casing(mut self, casing: TagCasing) -> Self {
        self.tag_casing = casing;
        self
    }

    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    pub fn with_prolog(mut self, emit: bool) -> Self {
        self.emit_prolog = emit;
        self
    }

    pub fn with_prolog_encoding(mut self, label: impl Into<String>) -> Self {
        self.prolog_encoding = label.into();
        self
    }

    pub fn with_root_tag(mut self, tag: impl Into<String>) -> Self {
        self.root_tag = tag.into();
        self
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Root tag with blanks treated as absent.
    pub fn root(&self) -> Option<&str> {
        let root = self.root_tag.trim();
        (!root.is_empty()).then_some(root)
    }

    /// Encoding label with the blank fallback applied.
    pub fn encoding_label(&self) -> &str {
        let label = self.prolog_encoding.trim();
        if label.is_empty() {
            DEFAULT_ENCODING_LABEL
        } else {
            label
        }
    }
}
