//! Session state: record collections, mutation operations, derived views.

pub mod store;
pub mod types;
pub mod views;

pub use store::SessionStore;
pub use types::{
    ExerciseEntry, ExerciseField, GoalEntry, GoalField, HistoryEntry, HistoryField, SessionFlags,
    StoreError,
};
