//! Record types for the three session collections.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// A completed workout in the history list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Unique identifier
    pub id: Uuid,
    /// Day label for the workout (free-form text)
    pub date: String,
    /// What was done
    pub details: String,
    /// When the entry was created
    pub created_at: DateTime<Utc>,
    /// When the entry was last edited
    pub updated_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Create a new history entry.
    pub fn new(date: impl Into<String>, details: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            date: date.into(),
            details: details.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// An exercise in the library list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseEntry {
    /// Unique identifier
    pub id: Uuid,
    /// Exercise name
    pub name: String,
    /// Category (Strength, Bodyweight, Core, ...)
    pub category: String,
    /// Targeted muscle group or quality
    pub target: String,
    /// When the entry was created
    pub created_at: DateTime<Utc>,
    /// When the entry was last edited
    pub updated_at: DateTime<Utc>,
}

impl ExerciseEntry {
    /// Create a new exercise entry.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            category: category.into(),
            target: target.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// A personal goal with completion progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalEntry {
    /// Unique identifier
    pub id: Uuid,
    /// What the goal is
    pub description: String,
    /// Completion percentage (0-100)
    pub progress: u8,
    /// When the entry was created
    pub created_at: DateTime<Utc>,
    /// When the entry was last edited
    pub updated_at: DateTime<Utc>,
}

impl GoalEntry {
    /// Create a new goal entry. Progress is clamped to 0-100.
    pub fn new(description: impl Into<String>, progress: u8) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            progress: progress.min(100),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Editable field of a history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryField {
    Date,
    Details,
}

impl HistoryField {
    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            HistoryField::Date => "date",
            HistoryField::Details => "details",
        }
    }
}

impl std::fmt::Display for HistoryField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Editable field of an exercise entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExerciseField {
    Name,
    Category,
    Target,
}

impl ExerciseField {
    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            ExerciseField::Name => "name",
            ExerciseField::Category => "category",
            ExerciseField::Target => "target",
        }
    }
}

impl std::fmt::Display for ExerciseField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Editable field of a goal entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalField {
    Description,
    Progress,
}

impl GoalField {
    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            GoalField::Description => "description",
            GoalField::Progress => "progress",
        }
    }
}

impl std::fmt::Display for GoalField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Session flags gating UI visibility. Not access control.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionFlags {
    /// User has logged in
    pub authenticated: bool,
    /// User has upgraded to premium
    pub premium: bool,
    /// When the user logged in
    pub logged_in_at: Option<DateTime<Utc>>,
}

/// Record store errors.
///
/// All variants are local and non-fatal: a failed operation leaves the
/// stored state untouched.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Positional access outside the collection bounds
    #[error("Index {index} out of range for collection of length {len}")]
    OutOfRange { index: usize, len: usize },

    /// No record with the given id
    #[error("Record not found: {0}")]
    NotFound(Uuid),

    /// Rejected field write
    #[error("Invalid value '{value}' for field '{field}'")]
    InvalidValue { field: String, value: String },
}

/// Parse a progress value written from the input boundary.
///
/// Accepts integer text, clamps to 0-100. Non-numeric input is rejected.
pub fn parse_progress(value: &str) -> Result<u8, StoreError> {
    let parsed: i64 = value.trim().parse().map_err(|_| StoreError::InvalidValue {
        field: GoalField::Progress.display_name().to_string(),
        value: value.to_string(),
    })?;
    Ok(parsed.clamp(0, 100) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_entry_clamps_progress() {
        let goal = GoalEntry::new("Overachieve", 250);
        assert_eq!(goal.progress, 100);
    }

    #[test]
    fn test_parse_progress_accepts_plain_integers() {
        assert_eq!(parse_progress("70").unwrap(), 70);
        assert_eq!(parse_progress(" 40 ").unwrap(), 40);
        assert_eq!(parse_progress("0").unwrap(), 0);
    }

    #[test]
    fn test_parse_progress_clamps_out_of_range() {
        assert_eq!(parse_progress("150").unwrap(), 100);
        assert_eq!(parse_progress("-5").unwrap(), 0);
    }

    #[test]
    fn test_parse_progress_rejects_non_numeric() {
        let result = parse_progress("lots");
        assert!(matches!(result, Err(StoreError::InvalidValue { .. })));
    }

    #[test]
    fn test_field_display_names() {
        assert_eq!(HistoryField::Date.display_name(), "date");
        assert_eq!(ExerciseField::Target.to_string(), "target");
        assert_eq!(GoalField::Progress.to_string(), "progress");
    }
}
