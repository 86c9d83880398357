use crate::error::EditError;
use core::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the seven fixed weekdays an availability map is keyed by.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    /// Every day, in presentation order.
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    /// The key this day is stored under in an
    /// [`AvailabilityMap`](crate::availability::AvailabilityMap)
    ///
    /// # Examples
    /// ```
    /// use availability_libs::day::Day;
    ///
    /// assert_eq!(Day::Wednesday.id(), "wednesday");
    /// ```
    pub fn id(self) -> &'static str {
        match self {
            Day::Monday => "monday",
            Day::Tuesday => "tuesday",
            Day::Wednesday => "wednesday",
            Day::Thursday => "thursday",
            Day::Friday => "friday",
            Day::Saturday => "saturday",
            Day::Sunday => "sunday",
        }
    }

    /// Display label for the rendering layer
    pub fn label(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }

    /// Looks up a day by its exact identifier.
    /// Unlike `FromStr` this does no trimming or case folding, which is what
    /// map keys are compared against.
    pub fn from_id(id: &str) -> Option<Day> {
        Day::ALL.iter().copied().find(|day| day.id() == id)
    }
}

impl FromStr for Day {
    type Err = EditError;

    /// # Examples
    /// ```
    /// use availability_libs::day::Day;
    ///
    /// assert_eq!(" Friday ".parse::<Day>(), Ok(Day::Friday));
    /// assert!("funday".parse::<Day>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Day::ALL
            .iter()
            .copied()
            .find(|day| day.id().eq_ignore_ascii_case(needle))
            .ok_or_else(|| EditError::UnknownDay(s.to_string()))
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl AsRef<str> for Day {
    fn as_ref(&self) -> &str {
        self.id()
    }
}
