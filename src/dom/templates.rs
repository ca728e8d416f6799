use serde::{Deserialize, Serialize};

use crate::dom::dom_model::{Document, Element};

/// Hex colors of three, four, six or eight digits, or the literal `rand`.
pub const COLOR_PATTERN: &str = r"((([a-fA-F0-9]{3}){1,2})|(([a-fA-F0-9]{4}){1,2}))|rand";

// ============================================================================
// Page defaults (the values a freshly rendered page starts with)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageDefaults {
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_max_width")]
    pub max_width: u32,
    #[serde(default = "default_max_height")]
    pub max_height: u32,
    #[serde(default = "default_bg")]
    pub bg: String,
    #[serde(default = "default_fg")]
    pub fg: String,
    #[serde(default = "default_fmt")]
    pub fmt: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub font: String,
    #[serde(default = "default_cols")]
    pub cols: u32,
    #[serde(default = "default_rows")]
    pub rows: u32,
    #[serde(default)]
    pub colors: String,
}

impl Default for PageDefaults {
    fn default() -> Self {
        Self {
            location: default_location(),
            width: default_width(),
            height: default_height(),
            max_width: default_max_width(),
            max_height: default_max_height(),
            bg: default_bg(),
            fg: default_fg(),
            fmt: default_fmt(),
            text: String::new(),
            font: String::new(),
            cols: default_cols(),
            rows: default_rows(),
            colors: String::new(),
        }
    }
}

fn default_location() -> String { "http://localhost:8080/".to_string() }
fn default_width() -> u32 { 638 }
fn default_height() -> u32 { 328 }
fn default_max_width() -> u32 { 8192 }
fn default_max_height() -> u32 { 4608 }
fn default_bg() -> String { "cef".to_string() }
fn default_fg() -> String { "555".to_string() }
fn default_fmt() -> String { "png".to_string() }
fn default_cols() -> u32 { 10 }
fn default_rows() -> u32 { 8 }

// ============================================================================
// Page builders
// ============================================================================

pub const FORM_ID: &str = "params-form";

fn number_field(id: &str, value: u32, max: Option<u32>) -> Element {
    let max = max.map(|m| m.to_string());
    Element::new("input")
        .with_id(id)
        .with_type("number")
        .with_value(&value.to_string())
        .with_range(Some("1"), max.as_deref())
        .with_step("1")
        .required()
        .in_form(FORM_ID)
}

fn text_field(id: &str, value: &str) -> Element {
    Element::new("input")
        .with_id(id)
        .with_type("text")
        .with_value(value)
        .in_form(FORM_ID)
}

fn select_field(id: &str, value: &str) -> Element {
    Element::new("select").with_id(id).with_value(value).in_form(FORM_ID)
}

/// Chrome shared by both pages: preview image, endpoint link and copy
/// button with its two icon placeholders.
fn page_chrome(defaults: &PageDefaults) -> Document {
    Document::new(&defaults.location)
        .with_element(Element::new("img").with_id("example-image"))
        .with_element(Element::new("a").with_id("endpoint-url"))
        .with_element(
            Element::new("button")
                .with_id("copy-button")
                .with_disabled(true),
        )
        .with_element(
            Element::new("span")
                .with_attribute("data-icon", "copy")
                .with_class("feather-copy"),
        )
        .with_element(
            Element::new("span")
                .with_attribute("data-icon", "check")
                .with_class("feather-check"),
        )
        .with_element(Element::new("form").with_id(FORM_ID))
}

/// The main page form: size, colors, format, overlay text, font, seed and
/// the random-text toggle.
pub fn index_page(defaults: &PageDefaults) -> Document {
    page_chrome(defaults)
        .with_element(number_field("width", defaults.width, Some(defaults.max_width)))
        .with_element(number_field("height", defaults.height, Some(defaults.max_height)))
        .with_element(text_field("bg", &defaults.bg).with_pattern(COLOR_PATTERN))
        .with_element(text_field("fg", &defaults.fg).with_pattern(COLOR_PATTERN))
        .with_element(select_field("fmt", &defaults.fmt))
        .with_element(text_field("imageText", &defaults.text))
        .with_element(select_field("font", &defaults.font))
        .with_element(text_field("seed", ""))
        .with_element(
            Element::new("input")
                .with_id("randomText")
                .with_type("checkbox")
                .in_form(FORM_ID),
        )
}

/// The tiled page form: size, grid dimensions, format and a comma-separated
/// color list.
pub fn tiled_page(defaults: &PageDefaults) -> Document {
    page_chrome(defaults)
        .with_element(number_field("width", defaults.width, Some(defaults.max_width)))
        .with_element(number_field("height", defaults.height, Some(defaults.max_height)))
        .with_element(number_field("cols", defaults.cols, None))
        .with_element(number_field("rows", defaults.rows, None))
        .with_element(select_field("fmt", &defaults.fmt))
        .with_element(text_field("colors", &defaults.colors))
}
