//! Label/value extraction from registry HTML.
//!
//! Every caption on a detail page is an element with the `cLabel` class. Its
//! value is a bare text node sitting next to it inside the same parent:
//!
//! ```html
//! <div class="cRow"><label class="cLabel">Numéro SIREN</label> 123456789</div>
//! ```
//!
//! One table on the page wraps its captions in an extra `<span>`, which puts
//! the value one level further up, in the grandparent.

use std::collections::HashMap;

use scraper::{Html, Node, Selector};

use crate::error::RegistryError;
use crate::labels::LABEL_SELECTOR;

/// Caption text mapped to the text found next to it.
///
/// Lookups of captions that were not on the page yield `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelValueMap(HashMap<String, String>);

impl LabelValueMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value for `label`, or `""` when absent.
    #[must_use]
    pub fn get(&self, label: &str) -> &str {
        self.0.get(label).map_or("", String::as_str)
    }

    /// Stores `value` under `label`, replacing any earlier value.
    pub fn insert(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.0.insert(label.into(), value.into());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for LabelValueMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (label, value) in iter {
            map.insert(label, value);
        }
        map
    }
}

/// Parses `html` and collects every caption/value pair on the page.
///
/// # Errors
///
/// Returns [`RegistryError::Parse`] if the caption selector cannot be compiled.
pub fn extract_label_map(html: &str) -> Result<LabelValueMap, RegistryError> {
    let document = Html::parse_document(html);
    extract_from_document(&document)
}

/// Collects every caption/value pair from an already parsed document.
///
/// A page without captions yields an empty map; deciding whether that is a
/// miss is left to the mapper.
///
/// # Errors
///
/// Returns [`RegistryError::Parse`] if the caption selector cannot be compiled.
pub fn extract_from_document(document: &Html) -> Result<LabelValueMap, RegistryError> {
    let selector = Selector::parse(LABEL_SELECTOR).map_err(|e| RegistryError::Parse {
        reason: format!("invalid label selector {LABEL_SELECTOR:?}: {e}"),
    })?;

    let mut map = LabelValueMap::new();
    for label in document.select(&selector) {
        let value = label
            .parent()
            .and_then(|parent| {
                if is_span(parent.value()) {
                    parent.parent()
                } else {
                    Some(parent)
                }
            })
            .map(|holder| first_text(holder.children().map(|child| child.value())))
            .unwrap_or_default();

        map.insert(first_text(label.children().map(|child| child.value())), value);
    }

    tracing::debug!(labels = map.len(), "extracted registry labels");
    Ok(map)
}

fn is_span(node: &Node) -> bool {
    node.as_element()
        .is_some_and(|element| element.name() == "span")
}

/// First non-blank text among `nodes`, trimmed.
///
/// Callers pass direct children only, so text inside nested elements is
/// never considered.
fn first_text<'a>(nodes: impl Iterator<Item = &'a Node>) -> String {
    nodes
        .filter_map(Node::as_text)
        .map(|text| text.trim())
        .find(|text| !text.is_empty())
        .unwrap_or_default()
        .to_owned()
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
