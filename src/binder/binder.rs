use std::collections::BTreeMap;
use std::fmt;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::binder::clipboard::{Clipboard, JUST_COPIED_CLASS, copy_from_button};
use crate::binder::exclusivity::ExclusivityRule;
use crate::binder::fields::{FieldRegistry, FieldRole};
use crate::binder::icons::replace_icons;
use crate::binder::page::{Capabilities, ElementIds, PageBindings, detect_page};
use crate::binder::pipeline::{PipelineOutcome, run_update};
use crate::binder::scheduler::ChangeScheduler;
use crate::binder::sink::{AppliedUpdate, DocumentTarget, UpdateSink};
use crate::dom::dom_model::Document;
use crate::endpoint::endpoint_model::EndpointKind;
use crate::endpoint::synth::synthesize;
use crate::error::BinderError;
use crate::form::reader::{DocumentForm, FormSnapshot, gather_params};
use crate::trace::logger::TraceLogger;
use crate::trace::trace::{Decision, TraceEvent};

// ============================================================================
// Configuration
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Role overrides on top of the built-in field table.
    #[serde(default)]
    pub roles: BTreeMap<String, FieldRole>,
    #[serde(default = "default_random_text_toggle")]
    pub random_text_toggle: String,
    #[serde(default = "default_text_field")]
    pub text_field: String,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            roles: BTreeMap::new(),
            random_text_toggle: default_random_text_toggle(),
            text_field: default_text_field(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinderConfig {
    #[serde(default = "default_quiet_window_ms")]
    pub quiet_window_ms: u64,
    #[serde(default = "default_tiled_quiet_window_ms")]
    pub tiled_quiet_window_ms: u64,
    #[serde(default = "default_copied_flash_ms")]
    pub copied_flash_ms: u64,
    #[serde(default)]
    pub elements: ElementIds,
    #[serde(default)]
    pub fields: FieldConfig,
}

impl Default for BinderConfig {
    fn default() -> Self {
        Self {
            quiet_window_ms: default_quiet_window_ms(),
            tiled_quiet_window_ms: default_tiled_quiet_window_ms(),
            copied_flash_ms: default_copied_flash_ms(),
            elements: ElementIds::default(),
            fields: FieldConfig::default(),
        }
    }
}

fn default_quiet_window_ms() -> u64 { 500 }
fn default_tiled_quiet_window_ms() -> u64 { 200 }
fn default_copied_flash_ms() -> u64 { 1500 }
fn default_random_text_toggle() -> String { "randomText".to_string() }
fn default_text_field() -> String { "imageText".to_string() }

// ============================================================================
// Events
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Input,
    Change,
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeKind::Input => write!(f, "input"),
            ChangeKind::Change => write!(f, "change"),
        }
    }
}

/// A field of the bound form fired `input` or `change`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChangeEvent {
    pub field_id: String,
    pub form_id: String,
    pub kind: ChangeKind,
}

/// What the pending timer fires with: the latest event of the burst, and
/// whether any event collapsed into it wants the preview refreshed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingUpdate {
    pub event: FieldChangeEvent,
    pub refresh_preview: bool,
}

// ============================================================================
// Binder
// ============================================================================

/// Keeps one page's endpoint text, clipboard payload and preview image in
/// step with its form.
pub struct EndpointBinder {
    bindings: PageBindings,
    capabilities: Capabilities,
    registry: FieldRegistry,
    exclusivity: Option<ExclusivityRule>,
    scheduler: ChangeScheduler<PendingUpdate>,
    sink: UpdateSink,
    copied_flash: Duration,
    copied_until: Option<Instant>,
    tracer: TraceLogger,
    step: u64,
}

impl EndpointBinder {
    /// Detect the page and initialize it.
    ///
    /// `Ok(None)` when the page lacks any of the required elements; the
    /// binder simply does not apply there.
    pub fn attach(
        document: &mut Document,
        config: &BinderConfig,
        tracer: TraceLogger,
    ) -> Result<Option<Self>, BinderError> {
        let Some(bindings) = detect_page(document, &config.elements) else {
            return Ok(None);
        };

        let base = document.base_url()?;
        let capabilities = Capabilities::detect(document);

        let quiet_window = match bindings.kind {
            EndpointKind::Image => config.quiet_window_ms,
            EndpointKind::Tiled => config.tiled_quiet_window_ms,
        };

        let rule = ExclusivityRule::new(&config.fields.random_text_toggle, &config.fields.text_field);
        let has_toggle = document
            .get_element_by_id(&rule.toggle_id)
            .map_or(false, |el| el.is_checkbox());
        let has_target = document.get_element_by_id(&rule.target_id).is_some();

        let mut binder = Self {
            bindings,
            capabilities,
            registry: FieldRegistry::default().with_overrides(&config.fields.roles),
            exclusivity: (has_toggle && has_target).then_some(rule),
            scheduler: ChangeScheduler::new(Duration::from_millis(quiet_window)),
            sink: UpdateSink::new(base, &capabilities),
            copied_flash: Duration::from_millis(config.copied_flash_ms),
            copied_until: None,
            tracer,
            step: 0,
        };

        binder.initialize(document);
        Ok(Some(binder))
    }

    fn initialize(&mut self, document: &mut Document) {
        if self.capabilities.icons {
            replace_icons(document);
        }

        if self.capabilities.clipboard {
            if let Some(button) = document.get_element_by_id_mut(&self.bindings.copy_button_id) {
                button.disabled = false;
            }
        }

        let snapshot = self.read_form(document);
        if let Some(descriptor) = snapshot.as_ref().and_then(|s| synthesize(self.bindings.kind, s)) {
            let mut target = DocumentTarget::new(document, &self.bindings);
            self.sink.store_clipboard(&mut target, &descriptor);
        }

        self.trace(Decision::Attached, |e| e);
    }

    pub fn bindings(&self) -> &PageBindings {
        &self.bindings
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    pub fn tracer(&self) -> &TraceLogger {
        &self.tracer
    }

    pub fn is_pending(&self) -> bool {
        self.scheduler.is_pending()
    }

    /// Build an event for a field of the bound form.
    pub fn event(&self, field_id: &str, kind: ChangeKind) -> FieldChangeEvent {
        FieldChangeEvent {
            field_id: field_id.to_string(),
            form_id: self.bindings.form_id.clone(),
            kind,
        }
    }

    /// Handle a field event.
    ///
    /// A `change` on the random-text toggle updates the text field's
    /// disabled state right away. Every event then (re)arms the update
    /// timer. A superseded event's preview refresh carries over to the
    /// event replacing it.
    pub fn dispatch(&mut self, document: &mut Document, event: FieldChangeEvent, now: Instant) {
        if event.kind == ChangeKind::Change {
            let applied = self
                .exclusivity
                .as_ref()
                .filter(|rule| rule.watches(&event.field_id))
                .and_then(|rule| rule.apply(&mut *document));

            if applied.is_some() {
                self.trace(Decision::ExclusivityApplied, |e| {
                    e.with_field(&event.field_id).with_event_kind(event.kind)
                });
            }
        }

        self.trace(Decision::Scheduled, |e| {
            e.with_field(&event.field_id).with_event_kind(event.kind)
        });
        let refresh_preview = self.registry.role_of(&event.field_id).refreshes_preview()
            || self
                .scheduler
                .pending_event()
                .map_or(false, |pending| pending.refresh_preview);
        self.scheduler.schedule(PendingUpdate { event, refresh_preview }, now);
    }

    /// Advance the binder to `now`: clear an expired copy flash and run the
    /// pending update if its quiet window has elapsed.
    pub fn tick(&mut self, document: &mut Document, now: Instant) -> Option<AppliedUpdate> {
        if self.copied_until.map_or(false, |until| until <= now) {
            self.copied_until = None;
            if let Some(button) = document.get_element_by_id_mut(&self.bindings.copy_button_id) {
                button.remove_class(JUST_COPIED_CLASS);
            }
        }

        let pending = self.scheduler.fire_due(now)?;
        self.apply_update(document, &pending.event.field_id, pending.refresh_preview)
    }

    /// Earliest instant at which `tick` has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.scheduler.next_deadline(), self.copied_until) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Re-read the whole form and push the result to the page, refreshing
    /// the preview according to `trigger`'s role.
    pub fn update(&mut self, document: &mut Document, trigger: &str) -> Option<AppliedUpdate> {
        let refresh_preview = self.registry.role_of(trigger).refreshes_preview();
        self.apply_update(document, trigger, refresh_preview)
    }

    fn apply_update(
        &mut self,
        document: &mut Document,
        trigger: &str,
        refresh_preview: bool,
    ) -> Option<AppliedUpdate> {
        let snapshot = self.read_form(document);

        let outcome = {
            let mut target = DocumentTarget::new(document, &self.bindings);
            run_update(
                snapshot.as_ref(),
                self.bindings.kind,
                &self.sink,
                &mut target,
                trigger,
                refresh_preview,
            )
        };

        match outcome {
            PipelineOutcome::Invalid => {
                self.trace(Decision::SkippedInvalid, |e| e.with_field(trigger));
                None
            }
            PipelineOutcome::Unshaped => {
                self.trace(Decision::SkippedShape, |e| e.with_field(trigger));
                None
            }
            PipelineOutcome::Applied(update) => {
                let fingerprint = snapshot.as_ref().map(FormSnapshot::fingerprint).unwrap_or_default();
                self.trace(Decision::Applied, |e| {
                    e.with_field(trigger)
                        .with_update(&update)
                        .with_fingerprint(&fingerprint)
                });
                Some(update)
            }
        }
    }

    /// Copy the current clipboard payload and flash the copy button.
    pub fn copy<C: Clipboard + ?Sized>(
        &mut self,
        document: &mut Document,
        clipboard: &mut C,
        now: Instant,
    ) -> Result<Option<String>, BinderError> {
        if !self.capabilities.clipboard {
            return Ok(None);
        }

        let copied = copy_from_button(document, &self.bindings.copy_button_id, clipboard)?;
        if copied.is_some() {
            self.copied_until = Some(now + self.copied_flash);
            self.trace(Decision::Copied, |e| e);
        }
        Ok(copied)
    }

    /// Record that an edit to a disabled control was dropped.
    pub fn note_ignored(&mut self, field_id: &str) {
        self.trace(Decision::IgnoredDisabled, |e| e.with_field(field_id));
    }

    fn read_form(&self, document: &Document) -> Option<FormSnapshot> {
        gather_params(&DocumentForm::new(document, &self.bindings.form_id))
    }

    fn trace(&mut self, decision: Decision, build: impl FnOnce(TraceEvent) -> TraceEvent) {
        self.step += 1;
        self.tracer.log(build(TraceEvent::now(self.step, decision)));
    }
}
