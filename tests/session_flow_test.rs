//! End-to-end session scenarios over the seeded store.

use fittrack::session::views::{filtered_goals, filtered_history};
use fittrack::session::{GoalField, HistoryField, SessionStore, StoreError};

#[test]
fn test_seeded_goals_view_with_empty_search_keeps_order() {
    let store = SessionStore::with_seed_data();

    let view = filtered_goals(store.goals(), "");
    assert_eq!(view.len(), 2);

    // Seed data is already in descending progress order
    assert_eq!(view[0].description, "Squat 225lbs by August");
    assert_eq!(view[0].progress, 70);
    assert_eq!(view[1].description, "Run 5k under 25 minutes");
    assert_eq!(view[1].progress, 40);
}

#[test]
fn test_delete_first_of_two_leaves_the_second() {
    let mut store = SessionStore::with_seed_data();
    let survivor = store.goals()[1].clone();

    store.delete_goal_at(0).unwrap();

    assert_eq!(store.goals().len(), 1);
    assert_eq!(store.goals()[0].id, survivor.id);
    assert_eq!(store.goals()[0].description, survivor.description);
    assert_eq!(store.goals()[0].progress, survivor.progress);
}

#[test]
fn test_mutation_through_a_filtered_view_targets_the_right_record() {
    let mut store = SessionStore::with_seed_data();

    // "deadlift" matches only the second backing record; the view shows it
    // at position 0. Mutating by the view's id cannot hit the wrong row.
    let view = filtered_history(store.history(), "deadlift");
    assert_eq!(view.len(), 1);
    let target = view[0].id;

    store.delete_history(target).unwrap();

    assert_eq!(store.history().len(), 1);
    assert_eq!(store.history()[0].date, "Mon");
    assert!(store.history()[0].details.contains("Bench Press"));
}

#[test]
fn test_edit_through_a_sorted_view() {
    let mut store = SessionStore::with_seed_data();

    // Goals view is sorted by progress descending; bump the lowest goal.
    let view = filtered_goals(store.goals(), "");
    let lowest = view.last().unwrap().id;

    store
        .update_goal(lowest, GoalField::Progress, "90")
        .unwrap();

    let view = filtered_goals(store.goals(), "");
    assert_eq!(view[0].progress, 90);
    assert_eq!(view[0].description, "Run 5k under 25 minutes");
}

#[test]
fn test_update_then_search_finds_new_text() {
    let mut store = SessionStore::with_seed_data();
    let id = store.history_id_at(0).unwrap();

    store
        .update_history(id, HistoryField::Details, "Overhead Press - 5x5")
        .unwrap();

    assert_eq!(filtered_history(store.history(), "overhead").len(), 1);
    assert!(filtered_history(store.history(), "bench").is_empty());
}

#[test]
fn test_failed_operations_leave_state_untouched() {
    let mut store = SessionStore::with_seed_data();
    let goals_before = store.goals().to_vec();

    assert!(matches!(
        store.update_goal_at(5, GoalField::Description, "nope"),
        Err(StoreError::OutOfRange { index: 5, len: 2 })
    ));
    assert!(store
        .update_goal_at(0, GoalField::Progress, "a lot")
        .is_err());

    assert_eq!(store.goals().len(), goals_before.len());
    assert_eq!(store.goals()[0].progress, goals_before[0].progress);
    assert_eq!(store.goals()[0].updated_at, goals_before[0].updated_at);
}

#[test]
fn test_session_flags_start_cleared_and_flip_one_way() {
    let mut store = SessionStore::with_seed_data();
    assert!(!store.flags().authenticated);
    assert!(!store.flags().premium);

    store.login();
    store.upgrade();

    assert!(store.flags().authenticated);
    assert!(store.flags().premium);
    assert!(store.flags().logged_in_at.is_some());
}
