use crate::dom::dom_model::Document;

/// Minimal control access the exclusivity rule needs.
pub trait ControlState {
    fn is_checked(&self, id: &str) -> Option<bool>;
    /// Returns `false` when no control has that id.
    fn set_disabled(&mut self, id: &str, disabled: bool) -> bool;
}

impl ControlState for Document {
    fn is_checked(&self, id: &str) -> Option<bool> {
        self.get_element_by_id(id).map(|el| el.checked)
    }

    fn set_disabled(&mut self, id: &str, disabled: bool) -> bool {
        match self.get_element_by_id_mut(id) {
            Some(el) => {
                el.disabled = disabled;
                true
            }
            None => false,
        }
    }
}

/// The random-text checkbox disables the free-text field while checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusivityRule {
    pub toggle_id: String,
    pub target_id: String,
}

impl Default for ExclusivityRule {
    fn default() -> Self {
        Self::new("randomText", "imageText")
    }
}

impl ExclusivityRule {
    pub fn new(toggle_id: &str, target_id: &str) -> Self {
        Self {
            toggle_id: toggle_id.to_string(),
            target_id: target_id.to_string(),
        }
    }

    pub fn watches(&self, field_id: &str) -> bool {
        self.toggle_id == field_id
    }

    /// Mirror the toggle's checked state onto the target's disabled flag.
    /// Returns the new disabled state, or `None` if either control is
    /// missing.
    pub fn apply<C: ControlState + ?Sized>(&self, controls: &mut C) -> Option<bool> {
        let checked = controls.is_checked(&self.toggle_id)?;
        if controls.set_disabled(&self.target_id, checked) {
            Some(checked)
        } else {
            None
        }
    }
}
