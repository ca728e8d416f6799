use crate::dom::dom_model::Document;

const ICON_ATTRIBUTE: &str = "data-icon";

const SVG_ATTRIBUTES: [(&str, &str); 9] = [
    ("xmlns", "http://www.w3.org/2000/svg"),
    ("width", "24"),
    ("height", "24"),
    ("viewBox", "0 0 24 24"),
    ("fill", "none"),
    ("stroke", "currentColor"),
    ("stroke-width", "2"),
    ("stroke-linecap", "round"),
    ("stroke-linejoin", "round"),
];

const CHECK_ICON: &str = r#"<polyline points="20 6 9 17 4 12"></polyline>"#;
const COPY_ICON: &str = concat!(
    r#"<rect x="9" y="9" width="13" height="13" rx="2" ry="2"></rect>"#,
    r#"<path d="M5 15H4a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2h9a2 2 0 0 1 2 2v1"></path>"#,
);

pub fn icon_markup(name: &str) -> Option<&'static str> {
    match name {
        "check" => Some(CHECK_ICON),
        "copy" => Some(COPY_ICON),
        _ => None,
    }
}

/// Swap every `data-icon` placeholder naming a known icon for an inline
/// `svg`. The placeholder's classes and remaining attributes carry over and
/// win over the icon defaults. Returns how many elements were replaced.
pub fn replace_icons(document: &mut Document) -> usize {
    let mut replaced = 0;

    for el in document.elements.iter_mut() {
        let markup = match el.attribute(ICON_ATTRIBUTE).and_then(icon_markup) {
            Some(markup) => markup,
            None => continue,
        };

        el.attributes.remove(ICON_ATTRIBUTE);
        for (name, value) in SVG_ATTRIBUTES {
            el.attributes
                .entry(name.to_string())
                .or_insert_with(|| value.to_string());
        }
        el.tag = "svg".to_string();
        el.inner_html = Some(markup.to_string());
        replaced += 1;
    }

    replaced
}
