//! The ordered object and array containers.

use crate::element::Element;
use indexmap::IndexMap;
use indexmap::map::Entry;

/// An ordered key→element mapping with unique keys.
///
/// Iteration order is insertion order and is semantically significant: it is
/// the order tags are emitted. `insert` on an existing key replaces the
/// value but keeps the key's original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectModel {
    entries: IndexMap<String, Element>,
}

impl ObjectModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `element` under `key`, replacing in place if the key exists.
    pub fn insert(&mut self, key: impl Into<String>, element: Element) {
        self.entries.insert(key.into(), element);
    }

    /// Accumulates `element` under `key`: an absent key is a plain insert, a
    /// second accumulation turns the slot into a two-element array, and
    /// further accumulations push onto that array.
    pub fn accumulate(&mut self, key: impl Into<String>, element: Element) {
        match self.entries.entry(key.into()) {
            Entry::Vacant(slot) => {
                slot.insert(element);
            }
            Entry::Occupied(mut slot) => match slot.get_mut() {
                Element::Array(items) => items.push(element),
                existing => {
                    let previous = std::mem::replace(existing, Element::Null);
                    *existing = Element::Array(ArrayModel::from(vec![previous, element]));
                }
            },
        }
    }

    pub fn get(&self, key: &str) -> Option<&Element> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Element> {
        self.entries.get_mut(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Element)> {
        self.entries
            .iter()
            .map(|(key, element)| (key.as_str(), element))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for ObjectModel {
    type Item = (String, Element);
    type IntoIter = indexmap::map::IntoIter<String, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl FromIterator<(String, Element)> for ObjectModel {
    fn from_iter<I: IntoIterator<Item = (String, Element)>>(iter: I) -> Self {
        ObjectModel {
            entries: iter.into_iter().collect(),
        }
    }
}

/// An ordered sequence of elements, rendered as repeated same-named tags.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArrayModel {
    items: Vec<Element>,
}

impl ArrayModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, element: Element) {
        self.items.push(element);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<Vec<Element>> for ArrayModel {
    fn from(items: Vec<Element>) -> Self {
        ArrayModel { items }
    }
}

impl FromIterator<Element> for ArrayModel {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        ArrayModel {
            items: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ArrayModel {
    type Item = Element;
    type IntoIter = std::vec::IntoIter<Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
