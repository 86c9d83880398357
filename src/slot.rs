use core::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The predefined time slots, 8:00 AM through 7:00 PM in 30 minute steps.
/// Position in this list is the canonical sort order of a day.
pub const TIME_SLOTS: [&str; 23] = [
    "8:00 AM", "8:30 AM", "9:00 AM", "9:30 AM", "10:00 AM", "10:30 AM", "11:00 AM", "11:30 AM",
    "12:00 PM", "12:30 PM", "1:00 PM", "1:30 PM", "2:00 PM", "2:30 PM", "3:00 PM", "3:30 PM",
    "4:00 PM", "4:30 PM", "5:00 PM", "5:30 PM", "6:00 PM", "6:30 PM", "7:00 PM",
];

/// Position of `label` in [`TIME_SLOTS`], if it is a catalog slot
///
/// # Examples
/// ```
/// use availability_libs::slot::catalog_index;
///
/// assert_eq!(catalog_index("8:00 AM"), Some(0));
/// assert_eq!(catalog_index("7:00 PM"), Some(22));
/// assert_eq!(catalog_index("7:45 PM"), None);
/// ```
pub fn catalog_index(label: &str) -> Option<usize> {
    TIME_SLOTS.iter().position(|slot| *slot == label)
}

pub fn is_catalog_slot(label: &str) -> bool {
    catalog_index(label).is_some()
}

/// How a day's sequence is ordered after an insertion.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum SlotOrder {
    /// Re-sort by catalog position only when a catalog toggle inserts a slot.
    /// Labels outside the catalog have no position and sort ahead of every
    /// catalog slot, keeping their relative order. Custom slots are appended
    /// as entered.
    CatalogToggleOnly,
    /// Re-sort after every insertion: catalog slots by catalog position, then
    /// custom slots by label.
    Total,
}

impl Default for SlotOrder {
    fn default() -> Self {
        SlotOrder::CatalogToggleOnly
    }
}

impl SlotOrder {
    fn compare(self, a: &str, b: &str) -> Ordering {
        match self {
            SlotOrder::CatalogToggleOnly => catalog_index(a).cmp(&catalog_index(b)),
            SlotOrder::Total => match (catalog_index(a), catalog_index(b)) {
                (Some(a), Some(b)) => a.cmp(&b),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => a.cmp(b),
            },
        }
    }
}

pub trait CatalogSort {
    fn sort_by_catalog(&mut self, order: SlotOrder);
}

impl CatalogSort for Vec<String> {
    /// Stable sort of a day's slots under `order`
    ///
    /// # Examples
    /// ```
    /// use availability_libs::slot::{CatalogSort, SlotOrder};
    ///
    /// let mut slots = vec!["9:00 AM".to_string(), "7:45 PM".to_string(), "8:00 AM".to_string()];
    /// slots.sort_by_catalog(SlotOrder::CatalogToggleOnly);
    /// assert_eq!(slots, vec!["7:45 PM", "8:00 AM", "9:00 AM"]);
    ///
    /// slots.sort_by_catalog(SlotOrder::Total);
    /// assert_eq!(slots, vec!["8:00 AM", "9:00 AM", "7:45 PM"]);
    /// ```
    fn sort_by_catalog(&mut self, order: SlotOrder) {
        self.sort_by(|a, b| order.compare(a, b));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(slots: &[&str]) -> Vec<String> {
        slots.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn catalog_is_half_hourly() {
        assert_eq!(TIME_SLOTS.len(), 23);
        assert_eq!(TIME_SLOTS[0], "8:00 AM");
        assert_eq!(TIME_SLOTS[8], "12:00 PM");
        assert_eq!(TIME_SLOTS[22], "7:00 PM");
        assert!(is_catalog_slot("12:30 PM"));
        assert!(!is_catalog_slot("12:30 pm"));
    }

    #[test]
    fn toggle_order_keeps_custom_slots_in_entry_order() {
        let mut slots = owned(&["3:00 PM", "lunch", "8:30 AM", "7:45 PM"]);
        slots.sort_by_catalog(SlotOrder::CatalogToggleOnly);
        assert_eq!(slots, owned(&["lunch", "7:45 PM", "8:30 AM", "3:00 PM"]));
    }

    #[test]
    fn total_order_puts_custom_slots_last_by_label() {
        let mut slots = owned(&["3:00 PM", "lunch", "8:30 AM", "7:45 PM"]);
        slots.sort_by_catalog(SlotOrder::Total);
        assert_eq!(slots, owned(&["8:30 AM", "3:00 PM", "7:45 PM", "lunch"]));
    }
}
