//! Editing model behind the weekly availability picker.
//!
//! An [`AvailabilitySetEditor`] owns a map from weekday to selected time slot
//! labels and reports every edit to an [`Observer`]. Rendering and
//! persistence live elsewhere; they seed the editor and listen to it.

pub mod availability;
pub mod config;
pub mod day;
pub mod editor;
pub mod error;
pub mod slot;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use availability::AvailabilityMap;
pub use config::{EditorConfig, Validation};
pub use day::Day;
pub use editor::{AvailabilitySetEditor, Change, Edit, Observer};
pub use error::EditError;
pub use slot::{SlotOrder, TIME_SLOTS};
