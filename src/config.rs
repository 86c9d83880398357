use crate::slot::SlotOrder;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How degenerate input is treated.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Validation {
    /// Blank labels, duplicates, empty copy sources and unknown slots are
    /// silent no-ops. Any string is accepted as a day key.
    Lenient,
    /// Every degenerate input is refused with an [`EditError`](crate::error::EditError)
    /// and the state is left untouched.
    Strict,
}

impl Default for Validation {
    fn default() -> Self {
        Validation::Lenient
    }
}

/// Editor settings. The default reproduces the widget's historic behavior.
///
/// # Examples
/// ```
/// use availability_libs::config::{EditorConfig, Validation};
/// use availability_libs::slot::SlotOrder;
///
/// let config = EditorConfig::default();
/// assert_eq!(config.validation, Validation::Lenient);
/// assert_eq!(config.slot_order, SlotOrder::CatalogToggleOnly);
/// ```
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct EditorConfig {
    pub validation: Validation,
    pub slot_order: SlotOrder,
}

impl EditorConfig {
    pub fn strict() -> Self {
        EditorConfig {
            validation: Validation::Strict,
            ..EditorConfig::default()
        }
    }

    pub fn with_slot_order(mut self, slot_order: SlotOrder) -> Self {
        self.slot_order = slot_order;
        self
    }

    pub(crate) fn is_strict(&self) -> bool {
        self.validation == Validation::Strict
    }
}
