use thiserror::Error;

/// Reasons an edit is refused.
///
/// Only raised when the editor runs with [`Validation::Strict`]. The lenient
/// default swallows every one of these as a silent no-op.
///
/// [`Validation::Strict`]: crate::config::Validation::Strict
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum EditError {
    #[error("Unknown day identifier: {0:?}")]
    UnknownDay(String),
    #[error("Time slot {0:?} is not part of the slot catalog")]
    UnknownSlot(String),
    #[error("Custom time slot label is blank")]
    BlankLabel,
    #[error("Time slot {slot:?} is already selected for {day}")]
    DuplicateSlot { day: String, slot: String },
    #[error("Nothing to copy, {0} has no time slots selected")]
    EmptySourceDay(String),
}
