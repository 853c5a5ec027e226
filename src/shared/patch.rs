// src/shared/patch.rs
use serde::{Deserialize, Serialize};

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit partial-update semantics)
// ──────────────────────────────────────────────────────────
// Meaning:
// - Unset: field not provided => keep stored value
// - Null: explicitly null => clear the value (only for optional fields)
// - Value(v): replace with v
//
// Serde behavior (use with #[serde(default)]):
// - omitted field => Unset
// - null => Null
// - value => Value(value)
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    /// Merge over the stored value. On a required field `Null` clears it,
    /// which schema validation then reports as missing.
    pub fn apply(self, current: Option<T>) -> Option<T> {
        match self {
            PatchField::Unset => current,
            PatchField::Null => None,
            PatchField::Value(v) => Some(v),
        }
    }
}
