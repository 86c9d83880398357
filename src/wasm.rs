//! JavaScript bindings for the availability picker.
//!
//! ```js
//! const editor = new AvailabilityEditor((snapshot) => save(snapshot), { slotOrder: "total" });
//! editor.initialize({ monday: ["8:00 AM"] });
//! editor.toggleCatalogSlot("monday", "9:00 AM");
//! ```
use crate::availability::AvailabilityMap;
use crate::config::EditorConfig;
use crate::day::Day;
use crate::editor::{AvailabilitySetEditor, Change, Observer};
use crate::error::EditError;
use crate::slot::TIME_SLOTS;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Any JavaScript function, called as `callback(snapshot)`
    pub type ChangeCallback;

    #[wasm_bindgen(method, js_name = call)]
    fn call(this: &ChangeCallback, this_arg: &JsValue, snapshot: &JsValue);
}

/// Plain objects and arrays instead of `Map`s, so snapshots can go straight
/// to `JSON.stringify`.
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, serde_wasm_bindgen::Error> {
    value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
}

fn change_to_js(result: Result<Change, EditError>) -> Result<JsValue, JsValue> {
    match result {
        Ok(change) => Ok(to_js(&change)?),
        Err(e) => Err(JsValue::from_str(&e.to_string())),
    }
}

struct JsObserver(ChangeCallback);

impl Observer for JsObserver {
    fn notify(&mut self, snapshot: AvailabilityMap) {
        match to_js(&snapshot) {
            Ok(value) => self.0.call(&JsValue::NULL, &value),
            Err(e) => log::error!("Could not hand snapshot to JavaScript: {}", e),
        }
    }
}

#[wasm_bindgen]
pub struct AvailabilityEditor {
    inner: AvailabilitySetEditor<JsObserver>,
}

#[wasm_bindgen]
impl AvailabilityEditor {
    /// `config` may be omitted for the lenient defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(callback: ChangeCallback, config: JsValue) -> Result<AvailabilityEditor, JsValue> {
        let config: EditorConfig = if config.is_undefined() || config.is_null() {
            EditorConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };

        Ok(AvailabilityEditor {
            inner: AvailabilitySetEditor::with_config(config, JsObserver(callback)),
        })
    }

    pub fn initialize(&mut self, seed: JsValue) -> Result<JsValue, JsValue> {
        let seed: AvailabilityMap = if seed.is_undefined() || seed.is_null() {
            AvailabilityMap::new()
        } else {
            serde_wasm_bindgen::from_value(seed)?
        };
        change_to_js(self.inner.initialize(seed))
    }

    #[wasm_bindgen(js_name = toggleCatalogSlot)]
    pub fn toggle_catalog_slot(&mut self, day: &str, slot: &str) -> Result<JsValue, JsValue> {
        change_to_js(self.inner.toggle_catalog_slot(day, slot))
    }

    /// Takes the text field's current value from the caller.
    #[wasm_bindgen(js_name = addCustomSlot)]
    pub fn add_custom_slot(&mut self, day: &str, label: &str) -> Result<JsValue, JsValue> {
        change_to_js(self.inner.add_custom_slot(day, label))
    }

    #[wasm_bindgen(js_name = clearDay)]
    pub fn clear_day(&mut self, day: &str) -> Result<JsValue, JsValue> {
        change_to_js(self.inner.clear_day(day))
    }

    #[wasm_bindgen(js_name = copyToAllDays)]
    pub fn copy_to_all_days(&mut self, day: &str) -> Result<JsValue, JsValue> {
        change_to_js(self.inner.copy_to_all_days(day))
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        Ok(to_js(&self.inner.snapshot())?)
    }
}

#[derive(Serialize)]
struct DayEntry {
    id: Day,
    label: &'static str,
}

/// The slot catalog, in display order
#[wasm_bindgen(js_name = timeSlots)]
pub fn time_slots() -> Result<JsValue, JsValue> {
    Ok(to_js(&TIME_SLOTS[..])?)
}

/// `[{ id: "monday", label: "Monday" }, ...]`
#[wasm_bindgen]
pub fn days() -> Result<JsValue, JsValue> {
    let days: Vec<DayEntry> = Day::ALL
        .iter()
        .map(|&day| DayEntry {
            id: day,
            label: day.label(),
        })
        .collect();
    Ok(to_js(&days)?)
}
