use crate::availability::AvailabilityMap;
use crate::config::{EditorConfig, Validation};
use crate::day::Day;
use crate::error::EditError;
use crate::slot::{is_catalog_slot, CatalogSort, SlotOrder};
use log::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Receives a snapshot after every accepted edit.
pub trait Observer {
    fn notify(&mut self, snapshot: AvailabilityMap);
}

impl<F> Observer for F
where
    F: FnMut(AvailabilityMap),
{
    fn notify(&mut self, snapshot: AvailabilityMap) {
        self(snapshot)
    }
}

/// A single user gesture, as forwarded by a rendering layer.
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "op", rename_all = "camelCase"))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Edit {
    Initialize { seed: AvailabilityMap },
    ToggleCatalogSlot { day: String, slot: String },
    AddCustomSlot { day: String, label: String },
    ClearDay { day: String },
    CopyToAllDays { day: String },
}

/// What an accepted edit did to the map
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Change {
    Replaced,
    Inserted,
    Removed,
    Appended,
    Cleared,
    Copied { days: usize },
    Unchanged,
}

/// Owns the working copy of a weekly availability map and reports every
/// edit to an [`Observer`].
///
/// Each accepted call, including one that turns out to be a no-op, notifies
/// the observer exactly once with the post-edit snapshot before returning.
/// Calls refused under [`Validation::Strict`] leave the map untouched and do
/// not notify.
///
/// The observer is owned by the editor and all edits take `&mut self`, so an
/// observer cannot edit the map it is being told about. Sharing the editor
/// through `Rc<RefCell<_>>` and editing from inside the callback panics on
/// the second borrow; don't do that.
///
/// # Examples
/// ```
/// use availability_libs::{AvailabilityMap, AvailabilitySetEditor, Day};
///
/// let mut seen = Vec::new();
/// let mut editor = AvailabilitySetEditor::new(|snapshot: AvailabilityMap| {
///     seen.push(snapshot.total_slots())
/// });
///
/// editor.toggle_catalog_slot(Day::Monday, "9:00 AM").unwrap();
/// editor.toggle_catalog_slot(Day::Monday, "8:00 AM").unwrap();
/// assert_eq!(editor.slots(Day::Monday), ["8:00 AM", "9:00 AM"]);
///
/// drop(editor);
/// assert_eq!(seen, vec![1, 2]);
/// ```
pub struct AvailabilitySetEditor<O>
where
    O: Observer,
{
    availability: AvailabilityMap,
    config: EditorConfig,
    observer: O,
}

impl<O> AvailabilitySetEditor<O>
where
    O: Observer,
{
    /// An empty editor with the default (lenient) configuration.
    /// Nothing is notified until the first edit.
    pub fn new(observer: O) -> Self {
        AvailabilitySetEditor::with_config(EditorConfig::default(), observer)
    }

    pub fn with_config(config: EditorConfig, observer: O) -> Self {
        AvailabilitySetEditor {
            availability: AvailabilityMap::new(),
            config,
            observer,
        }
    }

    pub fn config(&self) -> EditorConfig {
        self.config
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Point-in-time copy of the map. Later edits do not show up in it.
    pub fn snapshot(&self) -> AvailabilityMap {
        self.availability.clone()
    }

    pub fn slots<D: AsRef<str>>(&self, day: D) -> &[String] {
        self.availability.slots(day)
    }

    /// Replaces the whole map with `seed`. Nothing from the previous state,
    /// including in-progress edits, survives. Days missing from `seed` stay
    /// missing. Repeated labels within a day are kept once, at their first
    /// position (strict editors refuse such a seed instead).
    pub fn initialize(&mut self, seed: AvailabilityMap) -> Result<Change, EditError> {
        if let Err(e) = seed.validate(self.config.validation) {
            return Err(self.reject(e));
        }

        let seed = seed.without_repeats();
        trace!("Initializing with {} slots", seed.total_slots());
        self.availability = seed;

        Ok(self.commit(Change::Replaced))
    }

    /// Removes `slot` from `day` if it is selected, otherwise selects it and
    /// re-sorts the day by catalog position.
    ///
    /// Toggling the same slot twice restores a day that was already in
    /// catalog order. Custom slots in the day take part in the re-sort, see
    /// [`SlotOrder`]: under `CatalogToggleOnly`, `["8:00 AM", "7:45 PM"]`
    /// toggled twice with `"9:00 AM"` comes back as `["7:45 PM", "8:00 AM"]`,
    /// the appended custom slot moving to the front.
    pub fn toggle_catalog_slot<D: AsRef<str>>(
        &mut self,
        day: D,
        slot: &str,
    ) -> Result<Change, EditError> {
        let day = day.as_ref();
        self.check_day(day)?;

        let present = self.availability.contains(day, slot);
        if !present && self.config.is_strict() && !is_catalog_slot(slot) {
            return Err(self.reject(EditError::UnknownSlot(slot.to_string())));
        }

        let order = self.config.slot_order;
        let slots = self.availability.day_mut(day);
        let change = match slots.iter().position(|s| s == slot) {
            Some(index) => {
                slots.remove(index);
                Change::Removed
            }
            None => {
                slots.push(slot.to_string());
                slots.sort_by_catalog(order);
                Change::Inserted
            }
        };
        trace!("{}: {:?}", day, slots);

        Ok(self.commit(change))
    }

    /// Appends a free-text slot to `day`.
    ///
    /// Blank labels and labels already selected for the day are ignored. The
    /// label is stored as given; only the blank check trims it.
    ///
    /// # Examples
    /// ```
    /// use availability_libs::{AvailabilityMap, AvailabilitySetEditor, Change, Day};
    ///
    /// let mut editor = AvailabilitySetEditor::new(|_: AvailabilityMap| ());
    ///
    /// assert_eq!(editor.add_custom_slot(Day::Friday, "7:45 PM"), Ok(Change::Appended));
    /// assert_eq!(editor.add_custom_slot(Day::Friday, "7:45 PM"), Ok(Change::Unchanged));
    /// assert_eq!(editor.add_custom_slot(Day::Friday, "   "), Ok(Change::Unchanged));
    /// assert_eq!(editor.slots(Day::Friday), ["7:45 PM"]);
    /// ```
    pub fn add_custom_slot<D: AsRef<str>>(
        &mut self,
        day: D,
        label: &str,
    ) -> Result<Change, EditError> {
        let day = day.as_ref();
        self.check_day(day)?;

        if label.trim().is_empty() {
            return self.ignore(EditError::BlankLabel);
        }

        if self.availability.contains(day, label) {
            return self.ignore(EditError::DuplicateSlot {
                day: day.to_string(),
                slot: label.to_string(),
            });
        }

        let order = self.config.slot_order;
        let slots = self.availability.day_mut(day);
        slots.push(label.to_string());
        if order == SlotOrder::Total {
            slots.sort_by_catalog(order);
        }
        trace!("{}: {:?}", day, slots);

        Ok(self.commit(Change::Appended))
    }

    /// Deselects everything on `day`. The day is kept as an empty sequence.
    pub fn clear_day<D: AsRef<str>>(&mut self, day: D) -> Result<Change, EditError> {
        let day = day.as_ref();
        self.check_day(day)?;

        self.availability.set_day(day, Vec::new());

        Ok(self.commit(Change::Cleared))
    }

    /// Overwrites every other weekday with a copy of `source`'s slots.
    /// An empty `source` leaves the map as it is.
    ///
    /// # Examples
    /// ```
    /// use availability_libs::{AvailabilityMap, AvailabilitySetEditor, Change, Day};
    ///
    /// let mut editor = AvailabilitySetEditor::new(|_: AvailabilityMap| ());
    /// editor.toggle_catalog_slot(Day::Monday, "8:00 AM").unwrap();
    ///
    /// assert_eq!(editor.copy_to_all_days(Day::Monday), Ok(Change::Copied { days: 6 }));
    /// assert_eq!(editor.slots(Day::Sunday), ["8:00 AM"]);
    /// ```
    pub fn copy_to_all_days<D: AsRef<str>>(&mut self, source: D) -> Result<Change, EditError> {
        let source = source.as_ref();
        self.check_day(source)?;

        let slots = self.availability.slots(source).to_vec();
        if slots.is_empty() {
            return self.ignore(EditError::EmptySourceDay(source.to_string()));
        }

        let mut days = 0;
        for day in Day::ALL.iter().filter(|day| day.id() != source) {
            self.availability.set_day(day.id(), slots.clone());
            days += 1;
        }

        Ok(self.commit(Change::Copied { days }))
    }

    pub fn apply(&mut self, edit: Edit) -> Result<Change, EditError> {
        match edit {
            Edit::Initialize { seed } => self.initialize(seed),
            Edit::ToggleCatalogSlot { day, slot } => self.toggle_catalog_slot(day, &slot),
            Edit::AddCustomSlot { day, label } => self.add_custom_slot(day, &label),
            Edit::ClearDay { day } => self.clear_day(day),
            Edit::CopyToAllDays { day } => self.copy_to_all_days(day),
        }
    }

    fn check_day(&self, day: &str) -> Result<(), EditError> {
        if self.config.is_strict() && Day::from_id(day).is_none() {
            Err(self.reject(EditError::UnknownDay(day.to_string())))
        } else {
            Ok(())
        }
    }

    /// Degenerate input: refused when strict, otherwise a notified no-op
    fn ignore(&mut self, reason: EditError) -> Result<Change, EditError> {
        match self.config.validation {
            Validation::Strict => Err(self.reject(reason)),
            Validation::Lenient => {
                debug!("Ignoring edit: {}", reason);
                Ok(self.commit(Change::Unchanged))
            }
        }
    }

    fn reject(&self, reason: EditError) -> EditError {
        debug!("Rejected edit: {}", reason);
        reason
    }

    fn commit(&mut self, change: Change) -> Change {
        debug!("{:?}, {} slots selected", change, self.availability.total_slots());
        self.observer.notify(self.availability.clone());
        change
    }
}
