//! CSV export scenarios against seeded and filtered data.

use fittrack::export::csv::{
    export_csv_to_file, records_to_csv, ExportError, GOALS_FILENAME, HISTORY_FILENAME,
};
use fittrack::session::views::{filtered_goals, filtered_history};
use fittrack::session::SessionStore;

#[test]
fn test_seeded_history_export_text() {
    let store = SessionStore::with_seed_data();
    let view = filtered_history(store.history(), "");

    let csv = records_to_csv(&view).unwrap();
    assert_eq!(
        csv,
        "date,details\nMon,Bench Press - 3x10 at 100lbs\nTue,Deadlift - 5x5 at 200lbs"
    );
}

#[test]
fn test_seeded_goals_export_text() {
    let store = SessionStore::with_seed_data();
    let view = filtered_goals(store.goals(), "");

    let csv = records_to_csv(&view).unwrap();
    assert_eq!(
        csv,
        "description,progress\nSquat 225lbs by August,70\nRun 5k under 25 minutes,40"
    );
}

#[test]
fn test_filtered_export_only_contains_matches() {
    let store = SessionStore::with_seed_data();
    let view = filtered_history(store.history(), "bench");

    let csv = records_to_csv(&view).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "date,details");
    assert!(lines[1].starts_with("Mon,"));
}

#[test]
fn test_export_of_empty_view_is_no_data() {
    let store = SessionStore::with_seed_data();
    let view = filtered_goals(store.goals(), "marathon");

    assert!(matches!(records_to_csv(&view), Err(ExportError::NoData)));
}

#[test]
fn test_export_files_round_trip_through_disk() {
    let store = SessionStore::with_seed_data();
    let dir = tempfile::tempdir().unwrap();

    let history_path = dir.path().join(HISTORY_FILENAME);
    let history = filtered_history(store.history(), "");
    export_csv_to_file(&history, &history_path).unwrap();

    let goals_path = dir.path().join(GOALS_FILENAME);
    let goals = filtered_goals(store.goals(), "");
    export_csv_to_file(&goals, &goals_path).unwrap();

    let history_csv = std::fs::read_to_string(&history_path).unwrap();
    assert!(history_csv.starts_with("date,details\n"));
    assert_eq!(history_csv.lines().count(), 3);

    let goals_csv = std::fs::read_to_string(&goals_path).unwrap();
    assert!(goals_csv.starts_with("description,progress\n"));
    assert_eq!(goals_csv.lines().count(), 3);
}
