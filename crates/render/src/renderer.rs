//! The recursive value-tree to markup renderer.
//!
//! Two mutually recursive walks, one over object models and one over array
//! models, append tags to a single output buffer. The array walk owns all
//! per-item wrapping; the object walk delegates array-valued keys to it
//! wholesale, which is what keeps array-of-array input from being wrapped
//! twice.

use crate::config::{DEFAULT_ENCODING_LABEL, RenderConfig};
use crate::error::RenderError;
use crate::text::{apply_casing, escape_text};
use valxml_model::{
    ArrayModel, Element, ObjectModel, dictionary_to_object_model, sequence_to_array_model,
};

/// Renders an object model into a complete document.
///
/// Appends the prolog and enclosing root tag when configured, then walks
/// the model in insertion order. Never returns an absent document: an
/// empty model with no root tag and no prolog yields an empty string.
pub fn render(model: &ObjectModel, config: &RenderConfig) -> Result<String, RenderError> {
    log::debug!("rendering object model with {} entries", model.len());
    let renderer = Renderer { config };
    let mut out = String::new();
    emit_prolog(&mut out, config);
    match config.root() {
        Some(root) => {
            // Leading indent only after a prolog, so a prolog-less document
            // does not start with a blank line.
            if config.emit_prolog {
                renderer.indent(&mut out, 0);
            }
            let tag = renderer.tag(root);
            open_tag(&mut out, &tag);
            renderer.render_object(&mut out, model, config.indent_width, 0)?;
            renderer.indent(&mut out, 0);
            close_tag(&mut out, &tag);
        }
        None => renderer.render_object(&mut out, model, 0, 0)?,
    }
    Ok(out)
}

/// Renders a bare sequence of elements.
///
/// The array-wrap pre-pass nests everything under the configured root tag
/// as a synthetic object key, so assembly runs with the enclosing-tag step
/// suppressed; the per-item tags come out of the synthetic key itself.
pub fn render_sequence(
    elements: Vec<Element>,
    config: &RenderConfig,
) -> Result<String, RenderError> {
    let synthetic = wrap_sequence(elements, config.root().unwrap_or_default());
    let body_config = RenderConfig {
        root_tag: String::new(),
        ..config.clone()
    };
    render(&synthetic, &body_config)
}

/// The array-wrap pre-pass with the single-child unwrap heuristic.
///
/// Accumulates every input element under `root_key`, except that an
/// element which is object-like with exactly one key whose value is itself
/// object-like has that inner pair promoted into an object under
/// `root_key` instead; this collapses the redundant wrapper in inputs
/// shaped like `[{wrapper: {fields...}}, ...]`. Only one level of nesting
/// is inspected; deeper double-wrapping passes through unchanged.
pub fn wrap_sequence(elements: Vec<Element>, root_key: &str) -> ObjectModel {
    let mut synthetic = ObjectModel::new();
    for element in elements {
        match into_single_wrapped_pair(element) {
            Ok((key, inner)) => promote(&mut synthetic, root_key, key, inner),
            Err(element) => synthetic.accumulate(root_key, element),
        }
    }
    synthetic
}

/// Splits off the sole key/element pair of a single-key object wrapper
/// whose inner value is object-like; any other shape is handed back.
fn into_single_wrapped_pair(element: Element) -> Result<(String, Element), Element> {
    let model = match element {
        Element::Object(model) => model,
        Element::Dictionary(map) => dictionary_to_object_model(&map),
        other => return Err(other),
    };
    if model.len() != 1 {
        return Err(Element::Object(model));
    }
    match model.into_iter().next() {
        Some((key, inner)) if inner.is_object_like() => Ok((key, inner)),
        Some((key, inner)) => {
            let mut back = ObjectModel::new();
            back.insert(key, inner);
            Err(Element::Object(back))
        }
        None => Err(Element::Object(ObjectModel::new())),
    }
}

fn promote(synthetic: &mut ObjectModel, root_key: &str, key: String, inner: Element) {
    if synthetic.get(root_key).is_none() {
        let mut slot = ObjectModel::new();
        slot.accumulate(key, inner);
        synthetic.insert(root_key, Element::Object(slot));
        return;
    }
    if let Some(Element::Object(slot)) = synthetic.get_mut(root_key) {
        slot.accumulate(key, inner);
        return;
    }
    // The slot already accumulated a non-object shape; fall back to plain
    // accumulation of the re-wrapped pair so nothing is lost.
    let mut wrapper = ObjectModel::new();
    wrapper.insert(key, inner);
    synthetic.accumulate(root_key, Element::Object(wrapper));
}

fn emit_prolog(out: &mut String, config: &RenderConfig) {
    if !config.emit_prolog {
        return;
    }
    if config.prolog_encoding.trim().is_empty() {
        log::warn!(
            "blank prolog encoding label, falling back to {}",
            DEFAULT_ENCODING_LABEL
        );
    }
    out.push_str(&format!(
        "<?xml version=\"1.0\" encoding=\"{}\"?>",
        config.encoding_label()
    ));
}

fn open_tag(out: &mut String, tag: &str) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
}

fn close_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

struct Renderer<'a> {
    config: &'a RenderConfig,
}

impl Renderer<'_> {
    fn tag(&self, name: &str) -> String {
        apply_casing(&escape_text(name), self.config.tag_casing)
    }

    /// Newline plus `level` spaces, or nothing when not pretty-printing,
    /// when indentation is disabled (`indent_width < 0`), or when the
    /// level itself went negative.
    fn indent(&self, out: &mut String, level: i32) {
        if !self.config.pretty_print || self.config.indent_width < 0 || level < 0 {
            return;
        }
        out.push('\n');
        for _ in 0..level {
            out.push(' ');
        }
    }

    fn check_depth(&self, depth: usize) -> Result<(), RenderError> {
        if depth > self.config.max_depth {
            log::warn!(
                "render aborted: nesting exceeds the configured depth limit of {}",
                self.config.max_depth
            );
            return Err(RenderError::DepthExceeded {
                limit: self.config.max_depth,
            });
        }
        Ok(())
    }

    fn render_object(
        &self,
        out: &mut String,
        model: &ObjectModel,
        level: i32,
        depth: usize,
    ) -> Result<(), RenderError> {
        self.check_depth(depth)?;
        for (key, element) in model.iter() {
            self.render_entry(out, key, element, level, depth)?;
        }
        Ok(())
    }

    /// Dispatch for a single key/element pair. Also the object branch of
    /// the array walk, so an object item gets exactly one wrapping tag.
    fn render_entry(
        &self,
        out: &mut String,
        key: &str,
        element: &Element,
        level: i32,
        depth: usize,
    ) -> Result<(), RenderError> {
        match element {
            Element::Null => {
                self.indent(out, level);
                let tag = self.tag(key);
                open_tag(out, &tag);
                close_tag(out, &tag);
                Ok(())
            }
            Element::Object(inner) => self.render_wrapped_object(out, key, inner, level, depth),
            Element::Dictionary(map) => {
                let inner = dictionary_to_object_model(map);
                self.render_wrapped_object(out, key, &inner, level, depth)
            }
            Element::Array(items) => self.render_array(out, items, key, level, depth),
            Element::Sequence(values) => {
                let items = sequence_to_array_model(values);
                self.render_array(out, &items, key, level, depth)
            }
            Element::Scalar(_) => {
                self.indent(out, level);
                let tag = self.tag(key);
                open_tag(out, &tag);
                out.push_str(&escape_text(&element.scalar_text("")));
                close_tag(out, &tag);
                Ok(())
            }
        }
    }

    fn render_wrapped_object(
        &self,
        out: &mut String,
        key: &str,
        inner: &ObjectModel,
        level: i32,
        depth: usize,
    ) -> Result<(), RenderError> {
        self.indent(out, level);
        let tag = self.tag(key);
        open_tag(out, &tag);
        self.render_object(out, inner, level + self.config.indent_width, depth + 1)?;
        self.indent(out, level);
        close_tag(out, &tag);
        Ok(())
    }

    /// The array walk: one tag per item under the enclosing key, nulls
    /// emitted as empty pairs (never collapsed), nested arrays as the same
    /// key one level deeper.
    fn render_array(
        &self,
        out: &mut String,
        items: &ArrayModel,
        key: &str,
        level: i32,
        depth: usize,
    ) -> Result<(), RenderError> {
        self.check_depth(depth)?;
        for element in items.iter() {
            match element {
                Element::Array(inner) => {
                    self.render_nested_array(out, inner, key, level, depth)?;
                }
                Element::Sequence(values) => {
                    let inner = sequence_to_array_model(values);
                    self.render_nested_array(out, &inner, key, level, depth)?;
                }
                other => self.render_entry(out, key, other, level, depth)?,
            }
        }
        Ok(())
    }

    fn render_nested_array(
        &self,
        out: &mut String,
        inner: &ArrayModel,
        key: &str,
        level: i32,
        depth: usize,
    ) -> Result<(), RenderError> {
        self.indent(out, level);
        let tag = self.tag(key);
        open_tag(out, &tag);
        self.render_array(out, inner, key, level + self.config.indent_width, depth + 1)?;
        self.indent(out, level);
        close_tag(out, &tag);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn model(value: Value) -> ObjectModel {
        match value {
            Value::Object(map) => dictionary_to_object_model(&map),
            other => panic!("fixture must be an object, got {:?}", other),
        }
    }

    fn elements(value: Value) -> Vec<Element> {
        match value {
            Value::Array(items) => items.into_iter().map(Element::from_value).collect(),
            other => panic!("fixture must be an array, got {:?}", other),
        }
    }

    fn flat() -> RenderConfig {
        RenderConfig::new().with_pretty_print(false)
    }

    #[test]
    fn scalar_array_has_no_enclosing_wrap() {
        let out = render(&model(json!({"x": [1, 2, 3]})), &flat()).unwrap();
        assert_eq!(out, "<x>1</x><x>2</x><x>3</x>");
    }

    #[test]
    fn nested_array_adds_one_level_per_depth() {
        let out = render(&model(json!({"x": [[1, 2]]})), &flat()).unwrap();
        assert_eq!(out, "<x><x>1</x><x>2</x></x>");
    }

    #[test]
    fn nulls_render_as_empty_pairs_and_never_collapse() {
        let out = render(&model(json!({"a": null, "x": [null, null]})), &flat()).unwrap();
        assert_eq!(out, "<a></a><x></x><x></x>");
    }

    #[test]
    fn array_of_objects_wraps_each_item_once() {
        let out = render(&model(json!({"x": [{"a": 1}, {"a": 2}]})), &flat()).unwrap();
        assert_eq!(out, "<x><a>1</a></x><x><a>2</a></x>");
    }

    #[test]
    fn unwrap_heuristic_promotes_single_key_wrappers() {
        let items = elements(json!([{"w": {"f": 1}}]));
        let out = render_sequence(items, &flat().with_root_tag("root")).unwrap();
        assert_eq!(out, "<root><w><f>1</f></w></root>");
    }

    #[test]
    fn unwrapped_scalars_accumulate_under_the_root_key() {
        let items = elements(json!([1, 2]));
        let out = render_sequence(items, &flat().with_root_tag("root")).unwrap();
        assert_eq!(out, "<root>1</root><root>2</root>");
    }

    #[test]
    fn repeated_promoted_keys_accumulate_inside_the_root() {
        let items = elements(json!([{"w": {"f": 1}}, {"w": {"f": 2}}]));
        let out = render_sequence(items, &flat().with_root_tag("r")).unwrap();
        assert_eq!(out, "<r><w><f>1</f></w><w><f>2</f></w></r>");
    }

    #[test]
    fn mixed_shapes_fall_back_to_plain_accumulation() {
        let items = elements(json!([1, {"w": {"f": 1}}]));
        let out = render_sequence(items, &flat().with_root_tag("r")).unwrap();
        assert_eq!(out, "<r>1</r><r><w><f>1</f></w></r>");
    }

    #[test]
    fn single_key_wrapper_with_scalar_inside_is_not_promoted() {
        let items = elements(json!([{"w": 1}]));
        let out = render_sequence(items, &flat().with_root_tag("r")).unwrap();
        assert_eq!(out, "<r><w>1</w></r>");
    }

    #[test]
    fn depth_limit_is_a_structured_error() {
        let mut value = json!(1);
        for _ in 0..200 {
            value = json!({ "n": value });
        }
        let err = render(&model(value), &flat()).unwrap_err();
        assert!(matches!(err, RenderError::DepthExceeded { limit: 128 }));
    }

    #[test]
    fn content_is_escaped_exactly_once() {
        let out = render(&model(json!({"m": "a & b"})), &flat()).unwrap();
        assert_eq!(out, "<m>a &amp; b</m>");
    }

    #[test]
    fn empty_model_without_root_or_prolog_is_an_empty_string() {
        let out = render(&ObjectModel::new(), &flat()).unwrap();
        assert_eq!(out, "");
    }

    #[test]
    fn prolog_is_bit_exact_and_falls_back_when_blank() {
        let out = render(
            &ObjectModel::new(),
            &flat().with_prolog(true).with_prolog_encoding("GBK"),
        )
        .unwrap();
        assert_eq!(out, "<?xml version=\"1.0\" encoding=\"GBK\"?>");

        let out = render(
            &ObjectModel::new(),
            &flat().with_prolog(true).with_prolog_encoding("  "),
        )
        .unwrap();
        assert_eq!(out, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>");
    }
}
