use std::collections::BTreeMap;

use serde::Serialize;

use crate::dom::dom_model::{Document, Element};
use crate::form::validity::is_valid;

/// Value recorded for a checked checkbox.
pub const CHECKED_VALUE: &str = "on";

// ============================================================================
// Snapshot model
// ============================================================================

/// One consistent read of every recognized control of a form, keyed by
/// control id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormSnapshot {
    values: BTreeMap<String, String>,
}

impl FormSnapshot {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Stable SHA-1 over the snapshot contents.
    pub fn fingerprint(&self) -> String {
        use sha1::{Digest, Sha1};

        let mut hasher = Sha1::new();
        for (key, value) in &self.values {
            hasher.update(key.as_bytes());
            hasher.update(b"=");
            hasher.update(value.as_bytes());
            hasher.update(b"\n");
        }
        format!("{:x}", hasher.finalize())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormSnapshot {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

// ============================================================================
// Control recognition
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Text,
    Number,
    Checkbox,
    Select,
}

/// Only text inputs, number inputs, checkboxes and selects take part in
/// endpoint synthesis.
pub fn control_kind(el: &Element) -> Option<ControlKind> {
    if el.tag_is("select") {
        return Some(ControlKind::Select);
    }
    if !el.tag_is("input") {
        return None;
    }
    match el.input_type() {
        "text" => Some(ControlKind::Text),
        "number" => Some(ControlKind::Number),
        "checkbox" => Some(ControlKind::Checkbox),
        _ => None,
    }
}

// ============================================================================
// Form sources
// ============================================================================

/// Anything that can list a form's controls in document order.
pub trait FormSource {
    fn controls(&self) -> Vec<&Element>;
}

/// The controls of one form inside a headless document.
pub struct DocumentForm<'a> {
    pub document: &'a Document,
    pub form_id: &'a str,
}

impl<'a> DocumentForm<'a> {
    pub fn new(document: &'a Document, form_id: &'a str) -> Self {
        Self { document, form_id }
    }
}

impl FormSource for DocumentForm<'_> {
    fn controls(&self) -> Vec<&Element> {
        self.document.form_controls(self.form_id).collect()
    }
}

impl FormSource for [Element] {
    fn controls(&self) -> Vec<&Element> {
        self.iter().collect()
    }
}

impl FormSource for Vec<Element> {
    fn controls(&self) -> Vec<&Element> {
        self.iter().collect()
    }
}

// ============================================================================
// Reading
// ============================================================================

/// Read the whole form, or nothing.
///
/// Returns `None` as soon as any recognized control fails validation; a
/// partially valid form never yields a snapshot.
pub fn gather_params<S: FormSource + ?Sized>(source: &S) -> Option<FormSnapshot> {
    let mut values = BTreeMap::new();

    for el in source.controls() {
        let Some(kind) = control_kind(el) else {
            continue;
        };

        if !is_valid(el) {
            return None;
        }

        let Some(id) = el.id.as_deref() else {
            continue;
        };

        let value = match kind {
            ControlKind::Checkbox => {
                if el.checked {
                    CHECKED_VALUE.to_string()
                } else {
                    String::new()
                }
            }
            _ if el.disabled => String::new(),
            _ => el.value.trim().to_string(),
        };

        values.insert(id.to_string(), value);
    }

    Some(FormSnapshot { values })
}
