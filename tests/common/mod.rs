#![allow(dead_code)]

use std::time::{Duration, Instant};

use endpoint_binder::binder::binder::{BinderConfig, ChangeKind, EndpointBinder};
use endpoint_binder::binder::replay::apply_edit;
use endpoint_binder::dom::dom_model::Document;
use endpoint_binder::dom::templates::{PageDefaults, index_page, tiled_page};
use endpoint_binder::trace::logger::TraceLogger;

pub const BASE: &str = "http://localhost:8080/";

pub fn defaults() -> PageDefaults {
    PageDefaults {
        location: BASE.to_string(),
        width: 300,
        height: 250,
        bg: "fec".into(),
        fg: "000".into(),
        fmt: "png".into(),
        ..PageDefaults::default()
    }
}

/// Index page with width=300, height=250, bg=fec, fg=000, fmt=png and
/// every optional field empty.
pub fn index_document() -> Document {
    index_page(&defaults())
}

pub fn tiled_document() -> Document {
    tiled_page(&PageDefaults {
        cols: 4,
        rows: 3,
        ..defaults()
    })
}

pub fn attach(document: &mut Document) -> EndpointBinder {
    EndpointBinder::attach(document, &BinderConfig::default(), TraceLogger::in_memory())
        .expect("attach should not fail")
        .expect("page should be applicable")
}

pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Type a value into a field and fire `input` for it.
pub fn type_into(binder: &mut EndpointBinder, document: &mut Document, field: &str, value: &str, at: Instant) {
    apply_edit(document, field, Some(value), None);
    let event = binder.event(field, ChangeKind::Input);
    binder.dispatch(document, event, at);
}

/// Click a checkbox: toggle it, then fire `change` and `input`.
pub fn click(binder: &mut EndpointBinder, document: &mut Document, field: &str, at: Instant) {
    apply_edit(document, field, None, None);
    let change = binder.event(field, ChangeKind::Change);
    binder.dispatch(document, change, at);
    let input = binder.event(field, ChangeKind::Input);
    binder.dispatch(document, input, at);
}

pub fn endpoint_text(document: &Document) -> Option<String> {
    document
        .get_element_by_id("endpoint-url")
        .and_then(|el| el.text.clone())
}

pub fn image_src(document: &Document) -> Option<String> {
    document
        .get_element_by_id("example-image")
        .and_then(|el| el.attribute("src").map(str::to_string))
}

pub fn clipboard_attr(document: &Document) -> Option<String> {
    document
        .get_element_by_id("copy-button")
        .and_then(|el| el.attribute("data-clipboard-text").map(str::to_string))
}
