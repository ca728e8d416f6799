use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::binder::sink::AppliedUpdate;

/// What the binder did with one event or timer firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Attached,
    Scheduled,
    ExclusivityApplied,
    SkippedInvalid,
    SkippedShape,
    Applied,
    IgnoredDisabled,
    Copied,
}

#[derive(Debug, Clone, Serialize)]
pub struct TraceEvent {
    pub timestamp_ms: u128,
    pub step: u64,

    pub decision: Decision,

    pub field: Option<String>,
    pub event_kind: Option<String>,

    pub endpoint: Option<String>,
    pub image_refreshed: Option<bool>,
    pub snapshot_fingerprint: Option<String>,
}

impl TraceEvent {
    pub fn now(step: u64, decision: Decision) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_millis(),
            step,
            decision,
            field: None,
            event_kind: None,
            endpoint: None,
            image_refreshed: None,
            snapshot_fingerprint: None,
        }
    }

    pub fn with_field(mut self, field: impl ToString) -> Self {
        self.field = Some(field.to_string());
        self
    }

    pub fn with_event_kind(mut self, kind: impl ToString) -> Self {
        self.event_kind = Some(kind.to_string());
        self
    }

    pub fn with_update(mut self, update: &AppliedUpdate) -> Self {
        self.endpoint = Some(update.path_and_query.clone());
        self.image_refreshed = Some(update.image_refreshed);
        self
    }

    pub fn with_fingerprint(mut self, fingerprint: impl ToString) -> Self {
        self.snapshot_fingerprint = Some(fingerprint.to_string());
        self
    }
}
