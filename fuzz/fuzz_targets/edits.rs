#![no_main]
use availability_libs::{
    slot::catalog_index, AvailabilityMap, AvailabilitySetEditor, Day, Edit, EditorConfig,
    SlotOrder,
};
use itertools::Itertools;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (EditorConfig, Vec<Edit>)| {
    #[cfg(feature = "log")]
    let _ = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}] {}",
                record.target(),
                record.level(),
                message
            ))
        })
        .level(log::LevelFilter::Debug)
        .chain(std::io::stdout())
        .apply();

    let (config, edits) = data;
    let mut notifications = 0;
    let mut editor =
        AvailabilitySetEditor::with_config(config, |_: AvailabilityMap| notifications += 1);
    let mut accepted = 0;

    for edit in edits {
        let before = editor.snapshot();
        let result = editor.apply(edit.clone());

        match result {
            Ok(_) => accepted += 1,
            Err(e) => {
                assert_eq!(before, editor.snapshot(), "Rejected edit {:?} changed state", e);
                continue;
            }
        }

        let after = editor.snapshot();
        match edit {
            Edit::ToggleCatalogSlot { day, slot } => {
                if !before.contains(&day, &slot) && before.slots(&day).iter().all_unique() {
                    assert!(after.slots(&day).iter().all_unique(), "Toggle created a duplicate");
                    let indices = after
                        .slots(&day)
                        .iter()
                        .filter_map(|s| catalog_index(s))
                        .collect::<Vec<_>>();
                    assert!(
                        indices.windows(2).all(|w| w[0] < w[1]),
                        "Catalog slots out of order after toggle: {:?}",
                        after.slots(&day)
                    );
                }
            }
            Edit::AddCustomSlot { day, label } => {
                if label.trim().is_empty() || before.contains(&day, &label) {
                    assert_eq!(before, after, "Ignored custom slot changed state");
                } else if config.slot_order == SlotOrder::CatalogToggleOnly {
                    assert_eq!(after.slots(&day).last(), Some(&label));
                }
            }
            Edit::ClearDay { day } => assert!(after.slots(&day).is_empty()),
            Edit::CopyToAllDays { day } => {
                if before.slots(&day).is_empty() {
                    assert_eq!(before, after, "Copy from an empty day changed state");
                } else {
                    for other in Day::ALL.iter().filter(|d| d.id() != day) {
                        assert_eq!(after.slots(other), before.slots(&day));
                    }
                    assert_eq!(after.slots(&day), before.slots(&day));
                }
            }
            Edit::Initialize { seed } => assert_eq!(after, seed.without_repeats()),
        }
    }

    drop(editor);
    assert_eq!(notifications, accepted, "Expected one notification per accepted edit");
});
