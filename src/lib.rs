use url::Url;

use crate::{
    binder::{binder::BinderConfig, page::detect_page},
    dom::dom_model::Document,
    endpoint::synth::synthesize,
    error::BinderError,
    form::reader::{DocumentForm, gather_params},
};

pub mod binder;
pub mod cli;
pub mod dom;
pub mod endpoint;
pub mod error;
pub mod form;
pub mod service;
pub mod trace;

/// Result of a one-shot endpoint synthesis over a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The page lacks the image, endpoint, copy button or form.
    NotApplicable,
    /// The form currently fails validation or lacks a required field.
    Invalid,
    Rendered { path_and_query: String, url: Url },
}

/// Read the page's form once and synthesize its endpoint, without
/// attaching a binder or touching the page.
///
/// `base` overrides the page location when resolving the URL.
pub fn render_document(
    document: &Document,
    config: &BinderConfig,
    base: Option<&str>,
) -> Result<RenderOutcome, BinderError> {
    let Some(bindings) = detect_page(document, &config.elements) else {
        return Ok(RenderOutcome::NotApplicable);
    };

    let base = match base {
        Some(raw) => Url::parse(raw).map_err(|e| BinderError::InvalidLocation {
            location: raw.to_string(),
            source: e,
        })?,
        None => document.base_url()?,
    };

    let descriptor = gather_params(&DocumentForm::new(document, &bindings.form_id))
        .and_then(|snapshot| synthesize(bindings.kind, &snapshot));

    Ok(match descriptor {
        Some(descriptor) => RenderOutcome::Rendered {
            path_and_query: descriptor.path_and_query(&base),
            url: descriptor.to_url(&base),
        },
        None => RenderOutcome::Invalid,
    })
}
