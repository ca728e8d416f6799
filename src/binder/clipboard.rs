use crate::binder::sink::CLIPBOARD_ATTRIBUTE;
use crate::dom::dom_model::Document;
use crate::error::BinderError;

/// Class the copy button carries briefly after a successful copy.
pub const JUST_COPIED_CLASS: &str = "just-copied";

pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), BinderError>;
}

/// Clipboard that just remembers the last write.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
    pub writes: usize,
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), BinderError> {
        self.contents = Some(text.to_string());
        self.writes += 1;
        Ok(())
    }
}

/// Copy the button's clipboard payload and mark the button as just copied.
///
/// `Ok(None)` when the button is missing or carries no payload yet.
pub fn copy_from_button<C: Clipboard + ?Sized>(
    document: &mut Document,
    button_id: &str,
    clipboard: &mut C,
) -> Result<Option<String>, BinderError> {
    let Some(button) = document.get_element_by_id_mut(button_id) else {
        return Ok(None);
    };
    let Some(text) = button.attribute(CLIPBOARD_ATTRIBUTE).map(str::to_string) else {
        return Ok(None);
    };

    clipboard.write_text(&text)?;
    button.add_class(JUST_COPIED_CLASS);
    Ok(Some(text))
}
