use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::binder::binder::{ChangeKind, EndpointBinder};
use crate::binder::clipboard::Clipboard;
use crate::binder::sink::AppliedUpdate;
use crate::dom::document::{is_yaml_path, read_file};
use crate::dom::dom_model::Document;
use crate::error::BinderError;

// ============================================================================
// Script model
// ============================================================================

/// One timed user action, `at_ms` after the page attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ReplayStep {
    /// Type into a field, pick a select option, or click a checkbox.
    /// A checkbox edit without `checked` toggles it.
    Edit {
        at_ms: u64,
        field: String,
        #[serde(default)]
        value: Option<String>,
        #[serde(default)]
        checked: Option<bool>,
    },
    /// Press the copy button.
    Copy { at_ms: u64 },
}

impl ReplayStep {
    pub fn at_ms(&self) -> u64 {
        match self {
            ReplayStep::Edit { at_ms, .. } | ReplayStep::Copy { at_ms } => *at_ms,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReplayScript {
    #[serde(default)]
    pub steps: Vec<ReplayStep>,
}

impl ReplayScript {
    pub fn load(path: &str) -> Result<Self, BinderError> {
        let content = read_file(path)?;
        if is_yaml_path(path) {
            serde_yaml::from_str(&content).map_err(|e| BinderError::YamlParse {
                context: format!("replay script {}", path),
                source: e,
            })
        } else {
            serde_json::from_str(&content).map_err(|e| BinderError::JsonParse {
                context: format!("replay script {}", path),
                source: e,
            })
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReplayReport {
    pub updates: Vec<AppliedUpdate>,
    pub copied: Vec<String>,
    pub ignored_edits: usize,
}

// ============================================================================
// Edits
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Applied { checkbox: bool },
    /// Disabled controls do not accept user input.
    Disabled,
    Missing,
}

/// Apply a user edit to a control's live state.
pub fn apply_edit(
    document: &mut Document,
    field: &str,
    value: Option<&str>,
    checked: Option<bool>,
) -> EditOutcome {
    let Some(el) = document.get_element_by_id_mut(field) else {
        return EditOutcome::Missing;
    };
    if el.disabled {
        return EditOutcome::Disabled;
    }

    if el.is_checkbox() {
        el.checked = checked.unwrap_or(!el.checked);
        return EditOutcome::Applied { checkbox: true };
    }

    if let Some(value) = value {
        el.value = value.to_string();
    }
    EditOutcome::Applied { checkbox: false }
}

// ============================================================================
// Event loop
// ============================================================================

/// Run timers that fall due at or before `until`, each at its own deadline.
fn run_timers(
    binder: &mut EndpointBinder,
    document: &mut Document,
    until: Option<Instant>,
    report: &mut ReplayReport,
) {
    while let Some(deadline) = binder.next_deadline() {
        if until.map_or(false, |until| deadline > until) {
            break;
        }
        if let Some(update) = binder.tick(document, deadline) {
            report.updates.push(update);
        }
    }
}

/// Drive a binder through a script as a single-threaded event loop.
///
/// Steps run in `at_ms` order. Before each step, any timer that would have
/// fired earlier fires first. After the last step every pending timer is
/// allowed to settle.
pub fn replay<C: Clipboard + ?Sized>(
    binder: &mut EndpointBinder,
    document: &mut Document,
    script: &ReplayScript,
    clipboard: &mut C,
    origin: Instant,
) -> Result<ReplayReport, BinderError> {
    let mut report = ReplayReport::default();

    let mut steps = script.steps.clone();
    steps.sort_by_key(ReplayStep::at_ms);

    for step in &steps {
        let at = origin + Duration::from_millis(step.at_ms());
        run_timers(binder, document, Some(at), &mut report);

        match step {
            ReplayStep::Edit { field, value, checked, .. } => {
                match apply_edit(document, field, value.as_deref(), *checked) {
                    EditOutcome::Applied { checkbox } => {
                        if checkbox {
                            let event = binder.event(field, ChangeKind::Change);
                            binder.dispatch(document, event, at);
                        }
                        let event = binder.event(field, ChangeKind::Input);
                        binder.dispatch(document, event, at);
                    }
                    EditOutcome::Disabled | EditOutcome::Missing => {
                        report.ignored_edits += 1;
                        binder.note_ignored(field);
                    }
                }
            }
            ReplayStep::Copy { .. } => {
                if let Some(text) = binder.copy(document, clipboard, at)? {
                    report.copied.push(text);
                }
            }
        }
    }

    run_timers(binder, document, None, &mut report);
    Ok(report)
}
