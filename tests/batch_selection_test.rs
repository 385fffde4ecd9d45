//! End-to-end tests for batch selection: folders on disk -> dialog -> outcome.

use std::fs;
use std::sync::mpsc;

use batchpick::batch::{BatchInfo, BatchInfoMap, scan_batch_folders};
use batchpick::config::{Config, DialogSettings};
use batchpick::gui::{BatchSelectionDialog, DialogAction, DialogOutcome, SelectionError};
use batchpick::{REQUIRED_BATCH, sort_batches};
use tempfile::TempDir;

fn make_batches(names: &[&str]) -> TempDir {
    let root = TempDir::new().expect("Failed to create temp dir");
    for name in names {
        let dir = root.path().join(name);
        fs::create_dir(&dir).expect("Failed to create batch folder");
        fs::write(dir.join("data.xlsx"), b"rows").expect("Failed to write batch file");
    }
    root
}

#[test]
fn scanned_folders_feed_the_dialog_in_merge_order() {
    let root = make_batches(&["EXTRA2", "REGULAR", "EXTRA10", "EXTRA1"]);
    let batches = scan_batch_folders(root.path(), REQUIRED_BATCH).unwrap();

    let (tx, rx) = mpsc::channel();
    let mut dialog =
        BatchSelectionDialog::with_channel(&batches, &DialogSettings::default(), tx).unwrap();

    let names: Vec<&str> = dialog.items().iter().map(|i| i.name()).collect();
    assert_eq!(names, vec!["REGULAR", "EXTRA1", "EXTRA2", "EXTRA10"]);
    assert!(dialog.items().iter().all(|i| i.info().file_count == 1));

    dialog.apply(DialogAction::DeselectAll);
    dialog.apply(DialogAction::Toggle("EXTRA10".to_string()));
    dialog.apply(DialogAction::Confirm);

    assert_eq!(
        rx.recv().unwrap(),
        DialogOutcome::Confirmed(vec!["REGULAR".to_string(), "EXTRA10".to_string()])
    );
    assert!(!dialog.is_open());
}

#[test]
fn cancel_reports_once_and_never_confirms() {
    let root = make_batches(&["REGULAR", "EXTRA1", "EXTRA2"]);
    let batches = scan_batch_folders(root.path(), REQUIRED_BATCH).unwrap();

    let (tx, rx) = mpsc::channel();
    let mut dialog =
        BatchSelectionDialog::with_channel(&batches, &DialogSettings::default(), tx).unwrap();

    dialog.apply(DialogAction::Cancel);
    dialog.apply(DialogAction::Confirm);

    let outcomes: Vec<DialogOutcome> = rx.try_iter().collect();
    assert_eq!(outcomes, vec![DialogOutcome::Cancelled]);
}

#[test]
fn confirm_always_includes_required_batch() {
    let root = make_batches(&["REGULAR", "EXTRA1", "EXTRA2", "EXTRA3"]);
    let batches = scan_batch_folders(root.path(), REQUIRED_BATCH).unwrap();

    let sequences: Vec<Vec<DialogAction>> = vec![
        vec![DialogAction::DeselectAll],
        vec![DialogAction::SelectAll, DialogAction::DeselectAll],
        vec![
            DialogAction::Toggle("REGULAR".to_string()),
            DialogAction::Toggle("EXTRA2".to_string()),
        ],
        vec![],
    ];

    for actions in sequences {
        let (tx, rx) = mpsc::channel();
        let mut dialog =
            BatchSelectionDialog::with_channel(&batches, &DialogSettings::default(), tx).unwrap();
        for action in actions {
            dialog.apply(action);
        }
        dialog.apply(DialogAction::Confirm);

        match rx.recv().unwrap() {
            DialogOutcome::Confirmed(selected) => {
                assert_eq!(selected.first().map(String::as_str), Some("REGULAR"));
            }
            DialogOutcome::Cancelled => panic!("expected a confirmation"),
        }
    }
}

#[test]
fn folder_without_regular_cannot_open_dialog() {
    let root = make_batches(&["EXTRA1"]);
    let batches = scan_batch_folders(root.path(), REQUIRED_BATCH).unwrap();

    let result = BatchSelectionDialog::new(&batches, &DialogSettings::default(), |_| {}, || {});
    assert!(matches!(
        result,
        Err(SelectionError::MissingRequired { .. })
    ));
}

#[test]
fn config_file_changes_dialog_geometry() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[settings.dialog]
base_height = 200.0
row_height = 40.0
max_height = 400.0
"#,
    )
    .unwrap();
    let config = Config::from_file(&path).unwrap();

    let batches: BatchInfoMap = sort_batches(["EXTRA1", "REGULAR", "EXTRA2"])
        .into_iter()
        .map(|name| (name, BatchInfo::default()))
        .collect();
    let dialog = BatchSelectionDialog::new(&batches, config.dialog(), |_| {}, || {}).unwrap();
    assert_eq!(dialog.layout().height, 320.0);

    let many: BatchInfoMap = (1..=10)
        .map(|n| format!("EXTRA{}", n))
        .chain(["REGULAR".to_string()])
        .map(|name| (name, BatchInfo::default()))
        .collect();
    let dialog = BatchSelectionDialog::new(&many, config.dialog(), |_| {}, || {}).unwrap();
    assert_eq!(dialog.layout().height, 400.0);
}
