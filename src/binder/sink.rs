use serde::Serialize;
use url::Url;

use crate::binder::page::{Capabilities, PageBindings};
use crate::dom::dom_model::Document;
use crate::endpoint::endpoint_model::EndpointDescriptor;

/// Attribute the clipboard integration copies from.
pub const CLIPBOARD_ATTRIBUTE: &str = "data-clipboard-text";

/// The UI surfaces an endpoint update writes to.
pub trait UpdateTarget {
    fn set_endpoint_text(&mut self, text: &str);
    fn endpoint_is_link(&self) -> bool;
    fn set_endpoint_href(&mut self, href: &str);
    fn set_clipboard_text(&mut self, text: &str);
    fn set_image_src(&mut self, src: &str);
}

/// Writes updates into a headless document through the bound element ids.
pub struct DocumentTarget<'a> {
    document: &'a mut Document,
    bindings: &'a PageBindings,
}

impl<'a> DocumentTarget<'a> {
    pub fn new(document: &'a mut Document, bindings: &'a PageBindings) -> Self {
        Self { document, bindings }
    }
}

impl UpdateTarget for DocumentTarget<'_> {
    fn set_endpoint_text(&mut self, text: &str) {
        if let Some(el) = self.document.get_element_by_id_mut(&self.bindings.endpoint_id) {
            el.text = Some(text.to_string());
        }
    }

    fn endpoint_is_link(&self) -> bool {
        self.document
            .get_element_by_id(&self.bindings.endpoint_id)
            .map_or(false, |el| el.tag_is("a"))
    }

    fn set_endpoint_href(&mut self, href: &str) {
        if let Some(el) = self.document.get_element_by_id_mut(&self.bindings.endpoint_id) {
            el.set_attribute("href", href);
        }
    }

    fn set_clipboard_text(&mut self, text: &str) {
        if let Some(el) = self.document.get_element_by_id_mut(&self.bindings.copy_button_id) {
            el.set_attribute(CLIPBOARD_ATTRIBUTE, text);
        }
    }

    fn set_image_src(&mut self, src: &str) {
        if let Some(el) = self.document.get_element_by_id_mut(&self.bindings.image_id) {
            el.set_attribute("src", src);
        }
    }
}

/// Summary of one applied update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedUpdate {
    pub trigger: String,
    pub path_and_query: String,
    pub href: String,
    pub image_refreshed: bool,
}

/// Pushes a synthesized endpoint out to the page.
#[derive(Debug, Clone)]
pub struct UpdateSink {
    base: Url,
    clipboard_enabled: bool,
}

impl UpdateSink {
    pub fn new(base: Url, capabilities: &Capabilities) -> Self {
        Self {
            base,
            clipboard_enabled: capabilities.clipboard,
        }
    }

    /// Endpoint text (and link href), clipboard payload, then the preview
    /// image when `refresh_preview` is set.
    pub fn apply<T: UpdateTarget + ?Sized>(
        &self,
        target: &mut T,
        descriptor: &EndpointDescriptor,
        trigger: &str,
        refresh_preview: bool,
    ) -> AppliedUpdate {
        let url = descriptor.to_url(&self.base);
        let path_and_query = descriptor.path_and_query(&self.base);

        target.set_endpoint_text(&path_and_query);
        if target.endpoint_is_link() {
            target.set_endpoint_href(&path_and_query);
        }

        self.store_clipboard(target, descriptor);

        if refresh_preview {
            target.set_image_src(url.as_str());
        }

        AppliedUpdate {
            trigger: trigger.to_string(),
            path_and_query,
            href: url.to_string(),
            image_refreshed: refresh_preview,
        }
    }

    /// Only the clipboard payload; used for the initial form state.
    pub fn store_clipboard<T: UpdateTarget + ?Sized>(&self, target: &mut T, descriptor: &EndpointDescriptor) {
        if self.clipboard_enabled {
            target.set_clipboard_text(descriptor.to_url(&self.base).as_str());
        }
    }
}
