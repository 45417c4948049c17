//! Derived filtered and sorted views over the session collections.
//!
//! Views borrow from the backing collection and are recomputed on every
//! render; nothing here mutates stored state.

use super::types::{ExerciseEntry, GoalEntry, HistoryEntry};

/// Case-insensitive substring match. An empty query matches everything.
fn matches(query: &str, fields: &[&str]) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    fields.iter().any(|f| f.to_lowercase().contains(&query))
}

/// History entries matching `query` on date or details, sorted by `date`
/// ascending.
///
/// The sort is a plain lexicographic string comparison, not calendar-aware:
/// day labels like "Mon" and "Tue" sort alphabetically. Ties keep their
/// filtered relative order.
pub fn filtered_history<'a>(entries: &'a [HistoryEntry], query: &str) -> Vec<&'a HistoryEntry> {
    let mut filtered: Vec<_> = entries
        .iter()
        .filter(|e| matches(query, &[&e.date, &e.details]))
        .collect();
    filtered.sort_by(|a, b| a.date.cmp(&b.date));
    filtered
}

/// Exercise entries matching `query` on name, category, or target.
/// Insertion order is preserved; the library has no derived sort.
pub fn filtered_exercises<'a>(entries: &'a [ExerciseEntry], query: &str) -> Vec<&'a ExerciseEntry> {
    entries
        .iter()
        .filter(|e| matches(query, &[&e.name, &e.category, &e.target]))
        .collect()
}

/// Goal entries matching `query` on description, sorted by progress
/// descending. Ties keep their filtered relative order.
pub fn filtered_goals<'a>(entries: &'a [GoalEntry], query: &str) -> Vec<&'a GoalEntry> {
    let mut filtered: Vec<_> = entries
        .iter()
        .filter(|e| matches(query, &[&e.description]))
        .collect();
    filtered.sort_by(|a, b| b.progress.cmp(&a.progress));
    filtered
}
