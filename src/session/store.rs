//! In-memory session store for the three record collections.

use chrono::Utc;
use uuid::Uuid;

use super::types::{
    parse_progress, ExerciseEntry, ExerciseField, GoalEntry, GoalField, HistoryEntry,
    HistoryField, SessionFlags, StoreError,
};

/// Owner of all session state: the three collections plus the UI flags.
///
/// Records are addressed by their stable `Uuid`, never by position within a
/// filtered view. Positional accessors exist for callers that hold an index
/// into the unfiltered backing collection and are always bounds-checked.
#[derive(Debug, Default)]
pub struct SessionStore {
    history: Vec<HistoryEntry>,
    library: Vec<ExerciseEntry>,
    goals: Vec<GoalEntry>,
    flags: SessionFlags,
}

impl SessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store populated with the built-in seed data.
    pub fn with_seed_data() -> Self {
        Self {
            history: vec![
                HistoryEntry::new("Mon", "Bench Press - 3x10 at 100lbs"),
                HistoryEntry::new("Tue", "Deadlift - 5x5 at 200lbs"),
            ],
            library: vec![
                ExerciseEntry::new("Squat", "Strength", "Legs"),
                ExerciseEntry::new("Push-Up", "Bodyweight", "Chest"),
                ExerciseEntry::new("Plank", "Core", "Core Stability"),
            ],
            goals: vec![
                GoalEntry::new("Squat 225lbs by August", 70),
                GoalEntry::new("Run 5k under 25 minutes", 40),
            ],
            flags: SessionFlags::default(),
        }
    }

    // --- read accessors ---

    /// Workout history entries, in insertion order.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Exercise library entries, in insertion order.
    pub fn library(&self) -> &[ExerciseEntry] {
        &self.library
    }

    /// Goal entries, in insertion order.
    pub fn goals(&self) -> &[GoalEntry] {
        &self.goals
    }

    /// Current session flags.
    pub fn flags(&self) -> &SessionFlags {
        &self.flags
    }

    // --- session flags ---

    /// Mark the session as logged in. One-way; there is no logout.
    pub fn login(&mut self) {
        if !self.flags.authenticated {
            self.flags.authenticated = true;
            self.flags.logged_in_at = Some(Utc::now());
            tracing::info!("User logged in");
        }
    }

    /// Mark the session as premium. One-way; there is no downgrade.
    pub fn upgrade(&mut self) {
        if !self.flags.premium {
            self.flags.premium = true;
            tracing::info!("User upgraded to premium");
        }
    }

    // --- workout history ---

    /// Update one field of a history entry.
    pub fn update_history(
        &mut self,
        id: Uuid,
        field: HistoryField,
        value: &str,
    ) -> Result<(), StoreError> {
        let entry = find_mut(&mut self.history, id, |e| e.id)?;
        match field {
            HistoryField::Date => entry.date = value.to_string(),
            HistoryField::Details => entry.details = value.to_string(),
        }
        entry.updated_at = Utc::now();
        Ok(())
    }

    /// Delete a history entry, preserving the order of the rest.
    pub fn delete_history(&mut self, id: Uuid) -> Result<HistoryEntry, StoreError> {
        let removed = remove_by_id(&mut self.history, id, |e| e.id)?;
        tracing::debug!(date = %removed.date, "Deleted history entry");
        Ok(removed)
    }

    /// Get the id of the history entry at a position in the backing list.
    pub fn history_id_at(&self, index: usize) -> Result<Uuid, StoreError> {
        id_at(&self.history, index, |e| e.id)
    }

    /// Positional variant of [`Self::update_history`].
    pub fn update_history_at(
        &mut self,
        index: usize,
        field: HistoryField,
        value: &str,
    ) -> Result<(), StoreError> {
        let id = self.history_id_at(index)?;
        self.update_history(id, field, value)
    }

    /// Positional variant of [`Self::delete_history`].
    pub fn delete_history_at(&mut self, index: usize) -> Result<HistoryEntry, StoreError> {
        let id = self.history_id_at(index)?;
        self.delete_history(id)
    }

    // --- exercise library ---

    /// Update one field of an exercise entry.
    pub fn update_exercise(
        &mut self,
        id: Uuid,
        field: ExerciseField,
        value: &str,
    ) -> Result<(), StoreError> {
        let entry = find_mut(&mut self.library, id, |e| e.id)?;
        match field {
            ExerciseField::Name => entry.name = value.to_string(),
            ExerciseField::Category => entry.category = value.to_string(),
            ExerciseField::Target => entry.target = value.to_string(),
        }
        entry.updated_at = Utc::now();
        Ok(())
    }

    /// Delete an exercise entry, preserving the order of the rest.
    pub fn delete_exercise(&mut self, id: Uuid) -> Result<ExerciseEntry, StoreError> {
        let removed = remove_by_id(&mut self.library, id, |e| e.id)?;
        tracing::debug!(name = %removed.name, "Deleted exercise entry");
        Ok(removed)
    }

    /// Get the id of the exercise entry at a position in the backing list.
    pub fn exercise_id_at(&self, index: usize) -> Result<Uuid, StoreError> {
        id_at(&self.library, index, |e| e.id)
    }

    /// Positional variant of [`Self::update_exercise`].
    pub fn update_exercise_at(
        &mut self,
        index: usize,
        field: ExerciseField,
        value: &str,
    ) -> Result<(), StoreError> {
        let id = self.exercise_id_at(index)?;
        self.update_exercise(id, field, value)
    }

    /// Positional variant of [`Self::delete_exercise`].
    pub fn delete_exercise_at(&mut self, index: usize) -> Result<ExerciseEntry, StoreError> {
        let id = self.exercise_id_at(index)?;
        self.delete_exercise(id)
    }

    // --- goals ---

    /// Update one field of a goal entry.
    ///
    /// `Progress` values arrive as raw text from the input boundary and are
    /// parsed and clamped to 0-100 before anything is written; rejected
    /// values leave the record untouched.
    pub fn update_goal(&mut self, id: Uuid, field: GoalField, value: &str) -> Result<(), StoreError> {
        // Parse before borrowing the entry so a bad value is a full no-op.
        let progress = match field {
            GoalField::Progress => Some(parse_progress(value)?),
            GoalField::Description => None,
        };

        let entry = find_mut(&mut self.goals, id, |e| e.id)?;
        match field {
            GoalField::Description => entry.description = value.to_string(),
            GoalField::Progress => entry.progress = progress.unwrap_or(entry.progress),
        }
        entry.updated_at = Utc::now();
        Ok(())
    }

    /// Delete a goal entry, preserving the order of the rest.
    pub fn delete_goal(&mut self, id: Uuid) -> Result<GoalEntry, StoreError> {
        let removed = remove_by_id(&mut self.goals, id, |e| e.id)?;
        tracing::debug!(description = %removed.description, "Deleted goal entry");
        Ok(removed)
    }

    /// Get the id of the goal entry at a position in the backing list.
    pub fn goal_id_at(&self, index: usize) -> Result<Uuid, StoreError> {
        id_at(&self.goals, index, |e| e.id)
    }

    /// Positional variant of [`Self::update_goal`].
    pub fn update_goal_at(
        &mut self,
        index: usize,
        field: GoalField,
        value: &str,
    ) -> Result<(), StoreError> {
        let id = self.goal_id_at(index)?;
        self.update_goal(id, field, value)
    }

    /// Positional variant of [`Self::delete_goal`].
    pub fn delete_goal_at(&mut self, index: usize) -> Result<GoalEntry, StoreError> {
        let id = self.goal_id_at(index)?;
        self.delete_goal(id)
    }
}

/// Find a record by id, or `NotFound`.
fn find_mut<T>(entries: &mut [T], id: Uuid, key: impl Fn(&T) -> Uuid) -> Result<&mut T, StoreError> {
    entries
        .iter_mut()
        .find(|e| key(e) == id)
        .ok_or(StoreError::NotFound(id))
}

/// Remove a record by id, keeping the relative order of the rest.
fn remove_by_id<T>(
    entries: &mut Vec<T>,
    id: Uuid,
    key: impl Fn(&T) -> Uuid,
) -> Result<T, StoreError> {
    let position = entries
        .iter()
        .position(|e| key(e) == id)
        .ok_or(StoreError::NotFound(id))?;
    Ok(entries.remove(position))
}

/// Bounds-checked positional lookup of a record id.
fn id_at<T>(entries: &[T], index: usize, key: impl Fn(&T) -> Uuid) -> Result<Uuid, StoreError> {
    entries.get(index).map(&key).ok_or(StoreError::OutOfRange {
        index,
        len: entries.len(),
    })
}
