use crate::config::Validation;
use crate::day::Day;
use crate::error::EditError;
use itertools::Itertools;
use std::collections::HashMap;
use std::iter::FromIterator;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Selected time slots per day.
///
/// Keys are day identifiers (`"monday"` ...). A missing key reads as an empty
/// sequence; equality is structural, so a missing key and a key mapped to an
/// empty sequence are *not* equal maps.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct AvailabilityMap(HashMap<String, Vec<String>>);

impl AvailabilityMap {
    pub fn new() -> Self {
        AvailabilityMap(HashMap::new())
    }

    /// The slots selected for `day`
    ///
    /// # Examples
    /// ```
    /// use availability_libs::availability::AvailabilityMap;
    /// use availability_libs::day::Day;
    ///
    /// let map: AvailabilityMap = vec![("monday", vec!["8:00 AM"])].into_iter().collect();
    ///
    /// assert_eq!(map.slots(Day::Monday), ["8:00 AM"]);
    /// assert!(map.slots("tuesday").is_empty());
    /// ```
    pub fn slots<D: AsRef<str>>(&self, day: D) -> &[String] {
        self.0
            .get(day.as_ref())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn contains<D: AsRef<str>>(&self, day: D, slot: &str) -> bool {
        self.slots(day).iter().any(|s| s == slot)
    }

    /// Keys present in the map, in no particular order
    pub fn days(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// True when no day has a slot selected
    pub fn is_empty(&self) -> bool {
        self.0.values().all(Vec::is_empty)
    }

    pub fn total_slots(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    pub fn into_inner(self) -> HashMap<String, Vec<String>> {
        self.0
    }

    /// Checks the map against the editor's validation policy.
    ///
    /// Lenient maps are always valid. Strict maps may only use the seven day
    /// identifiers and must not repeat a label within a day.
    pub fn validate(&self, validation: Validation) -> Result<(), EditError> {
        if validation == Validation::Lenient {
            return Ok(());
        }

        for (day, slots) in self.0.iter().sorted_by(|a, b| a.0.cmp(b.0)) {
            if Day::from_id(day).is_none() {
                return Err(EditError::UnknownDay(day.clone()));
            }

            if let Some(slot) = slots.iter().duplicates().next() {
                return Err(EditError::DuplicateSlot {
                    day: day.clone(),
                    slot: slot.clone(),
                });
            }
        }

        Ok(())
    }

    /// Drops repeated labels within each day, keeping the first occurrence
    ///
    /// # Examples
    /// ```
    /// use availability_libs::availability::AvailabilityMap;
    ///
    /// let map: AvailabilityMap = vec![("monday", vec!["9:00 AM", "8:00 AM", "9:00 AM"])]
    ///     .into_iter()
    ///     .collect();
    ///
    /// assert_eq!(map.without_repeats().slots("monday"), ["9:00 AM", "8:00 AM"]);
    /// ```
    pub fn without_repeats(self) -> Self {
        AvailabilityMap(
            self.0
                .into_iter()
                .map(|(day, slots)| (day, slots.into_iter().unique().collect()))
                .collect(),
        )
    }

    pub(crate) fn day_mut(&mut self, day: &str) -> &mut Vec<String> {
        self.0.entry(day.to_string()).or_default()
    }

    pub(crate) fn set_day(&mut self, day: &str, slots: Vec<String>) {
        self.0.insert(day.to_string(), slots);
    }
}

impl From<HashMap<String, Vec<String>>> for AvailabilityMap {
    fn from(map: HashMap<String, Vec<String>>) -> Self {
        AvailabilityMap(map)
    }
}

impl<K, S> FromIterator<(K, Vec<S>)> for AvailabilityMap
where
    K: Into<String>,
    S: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, Vec<S>)>>(iter: I) -> Self {
        AvailabilityMap(
            iter.into_iter()
                .map(|(day, slots)| (day.into(), slots.into_iter().map(Into::into).collect()))
                .collect(),
        )
    }
}
