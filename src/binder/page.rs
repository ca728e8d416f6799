use serde::{Deserialize, Serialize};

use crate::dom::dom_model::{Document, FEATURE_CLIPBOARD, FEATURE_ICONS};
use crate::endpoint::endpoint_model::EndpointKind;

// ============================================================================
// Element ids the binder looks for
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementIds {
    #[serde(default = "default_image")]
    pub image: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_copy_button")]
    pub copy_button: String,
    #[serde(default = "default_form")]
    pub form: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            image: default_image(),
            endpoint: default_endpoint(),
            copy_button: default_copy_button(),
            form: default_form(),
        }
    }
}

fn default_image() -> String { "example-image".to_string() }
fn default_endpoint() -> String { "endpoint-url".to_string() }
fn default_copy_button() -> String { "copy-button".to_string() }
fn default_form() -> String { "params-form".to_string() }

// ============================================================================
// Detection
// ============================================================================

/// Optional browser features, checked once when the binder attaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub clipboard: bool,
    pub icons: bool,
}

impl Capabilities {
    pub fn detect(document: &Document) -> Self {
        Self {
            clipboard: document.has_feature(FEATURE_CLIPBOARD),
            icons: document.has_feature(FEATURE_ICONS),
        }
    }
}

/// The four elements the binder drives, plus the endpoint family the form
/// describes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageBindings {
    pub image_id: String,
    pub endpoint_id: String,
    pub copy_button_id: String,
    pub form_id: String,
    pub kind: EndpointKind,
}

/// Locate the preview image, endpoint element, copy button and form.
///
/// `None` means the page has no endpoint builder and nothing should be
/// attached. The tiled page has no copy button of its own, so there it is
/// optional; every write to it is then a no-op.
pub fn detect_page(document: &Document, ids: &ElementIds) -> Option<PageBindings> {
    let has_tag = |id: &str, tag: Option<&str>| {
        document
            .get_element_by_id(id)
            .map_or(false, |el| tag.map_or(true, |t| el.tag_is(t)))
    };

    if !has_tag(&ids.image, Some("img"))
        || !has_tag(&ids.endpoint, None)
        || !has_tag(&ids.form, Some("form"))
    {
        return None;
    }

    let tiled = document
        .form_controls(&ids.form)
        .any(|el| el.id.as_deref() == Some("cols"));

    if !tiled && !has_tag(&ids.copy_button, Some("button")) {
        return None;
    }

    Some(PageBindings {
        image_id: ids.image.clone(),
        endpoint_id: ids.endpoint.clone(),
        copy_button_id: ids.copy_button.clone(),
        form_id: ids.form.clone(),
        kind: if tiled { EndpointKind::Tiled } else { EndpointKind::Image },
    })
}
