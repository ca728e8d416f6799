use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// What part of the endpoint a field feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldRole {
    /// Image dimensions. The preview keeps its previous size for these.
    Sizing,
    /// Other path segments: colors, format, grid layout.
    Appearance,
    /// Query parameters: overlay text, font, seed, random text.
    Overlay,
}

impl FieldRole {
    pub fn refreshes_preview(self) -> bool {
        self != FieldRole::Sizing
    }
}

/// Field id → role lookup. Unknown ids count as `Appearance`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRegistry {
    roles: BTreeMap<String, FieldRole>,
}

impl Default for FieldRegistry {
    fn default() -> Self {
        let roles = [
            ("width", FieldRole::Sizing),
            ("height", FieldRole::Sizing),
            ("bg", FieldRole::Appearance),
            ("fg", FieldRole::Appearance),
            ("fmt", FieldRole::Appearance),
            ("cols", FieldRole::Appearance),
            ("rows", FieldRole::Appearance),
            ("colors", FieldRole::Appearance),
            ("imageText", FieldRole::Overlay),
            ("font", FieldRole::Overlay),
            ("seed", FieldRole::Overlay),
            ("randomText", FieldRole::Overlay),
        ]
        .into_iter()
        .map(|(id, role)| (id.to_string(), role))
        .collect();

        Self { roles }
    }
}

impl FieldRegistry {
    pub fn with_overrides(mut self, overrides: &BTreeMap<String, FieldRole>) -> Self {
        for (id, role) in overrides {
            self.roles.insert(id.clone(), *role);
        }
        self
    }

    pub fn role_of(&self, field_id: &str) -> FieldRole {
        self.roles
            .get(field_id)
            .copied()
            .unwrap_or(FieldRole::Appearance)
    }
}
