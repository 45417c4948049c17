//! CSV export of record collections.

use thiserror::Error;

use crate::session::types::{ExerciseEntry, GoalEntry, HistoryEntry};

/// Default filename for a workout history export.
pub const HISTORY_FILENAME: &str = "workout-history.csv";

/// Default filename for a goals export.
pub const GOALS_FILENAME: &str = "goals.csv";

/// A record type that can be written as a CSV row.
pub trait CsvRecord {
    /// Column names, in row order.
    fn csv_header() -> &'static [&'static str];

    /// Field values for this record, matching [`Self::csv_header`] order.
    fn csv_fields(&self) -> Vec<String>;
}

// Lets a derived view (a slice of borrowed records) export directly.
impl<R: CsvRecord> CsvRecord for &R {
    fn csv_header() -> &'static [&'static str] {
        R::csv_header()
    }

    fn csv_fields(&self) -> Vec<String> {
        (**self).csv_fields()
    }
}

impl CsvRecord for HistoryEntry {
    fn csv_header() -> &'static [&'static str] {
        &["date", "details"]
    }

    fn csv_fields(&self) -> Vec<String> {
        vec![self.date.clone(), self.details.clone()]
    }
}

impl CsvRecord for ExerciseEntry {
    fn csv_header() -> &'static [&'static str] {
        &["name", "category", "target"]
    }

    fn csv_fields(&self) -> Vec<String> {
        vec![self.name.clone(), self.category.clone(), self.target.clone()]
    }
}

impl CsvRecord for GoalEntry {
    fn csv_header() -> &'static [&'static str] {
        &["description", "progress"]
    }

    fn csv_fields(&self) -> Vec<String> {
        vec![self.description.clone(), self.progress.to_string()]
    }
}

/// Serialize records to CSV text: header row plus one row per record,
/// joined with `\n` and no trailing newline.
///
/// Field values containing a comma, quote, or line break are quoted with
/// embedded quotes doubled; plain values are emitted verbatim. Empty input
/// is an explicit [`ExportError::NoData`], never a panic.
pub fn records_to_csv<R: CsvRecord>(records: &[R]) -> Result<String, ExportError> {
    if records.is_empty() {
        return Err(ExportError::NoData);
    }

    let mut rows = Vec::with_capacity(records.len() + 1);
    rows.push(R::csv_header().join(","));
    for record in records {
        let fields: Vec<String> = record.csv_fields().iter().map(|f| escape_field(f)).collect();
        rows.push(fields.join(","));
    }

    Ok(rows.join("\n"))
}

/// Serialize records to CSV and write them to a file.
pub fn export_csv_to_file<R: CsvRecord>(
    records: &[R],
    path: &std::path::Path,
) -> Result<(), ExportError> {
    let content = records_to_csv(records)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Quote a field value when it would otherwise corrupt the row.
fn escape_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') || value.contains('\r') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// CSV export errors.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Nothing to export
    #[error("No data to export")]
    NoData,

    /// Failed to write export data
    #[error("Failed to write data: {0}")]
    WriteFailed(String),
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::WriteFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_history() -> Vec<HistoryEntry> {
        vec![
            HistoryEntry::new("Mon", "Run"),
            HistoryEntry::new("Tue", "Swim"),
        ]
    }

    #[test]
    fn test_exact_output_for_plain_values() {
        let csv = records_to_csv(&sample_history()).unwrap();
        assert_eq!(csv, "date,details\nMon,Run\nTue,Swim");
    }

    #[test]
    fn test_no_trailing_newline() {
        let csv = records_to_csv(&sample_history()).unwrap();
        assert!(!csv.ends_with('\n'));
    }

    #[test]
    fn test_empty_input_is_no_data() {
        let records: Vec<HistoryEntry> = vec![];
        let result = records_to_csv(&records);
        assert!(matches!(result, Err(ExportError::NoData)));
    }

    #[test]
    fn test_goal_rows_use_numeric_progress() {
        let goals = vec![
            GoalEntry::new("Squat 225lbs by August", 70),
            GoalEntry::new("Run 5k under 25 minutes", 40),
        ];
        let csv = records_to_csv(&goals).unwrap();
        assert_eq!(
            csv,
            "description,progress\nSquat 225lbs by August,70\nRun 5k under 25 minutes,40"
        );
    }

    #[test]
    fn test_comma_in_field_is_quoted_into_one_column() {
        let history = vec![HistoryEntry::new("Mon", "Squats, then stretching")];
        let csv = records_to_csv(&history).unwrap();

        let data_row = csv.lines().nth(1).unwrap();
        assert_eq!(data_row, "Mon,\"Squats, then stretching\"");
    }

    #[test]
    fn test_embedded_quotes_are_doubled() {
        let history = vec![HistoryEntry::new("Tue", "5x5 \"heavy\" deadlifts")];
        let csv = records_to_csv(&history).unwrap();
        assert!(csv.contains("\"5x5 \"\"heavy\"\" deadlifts\""));
    }

    #[test]
    fn test_view_export_matches_owned_export() {
        let history = sample_history();
        let view: Vec<&HistoryEntry> = history.iter().collect();
        assert_eq!(
            records_to_csv(&view).unwrap(),
            records_to_csv(&history).unwrap()
        );
    }

    #[test]
    fn test_export_to_file_writes_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(HISTORY_FILENAME);

        export_csv_to_file(&sample_history(), &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "date,details\nMon,Run\nTue,Swim");
    }

    #[test]
    fn test_export_to_file_skips_empty_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(GOALS_FILENAME);

        let records: Vec<GoalEntry> = vec![];
        let result = export_csv_to_file(&records, &path);

        assert!(matches!(result, Err(ExportError::NoData)));
        assert!(!path.exists());
    }
}
