//! Workout history panel implementation.

use egui::{Align, Color32, Layout, RichText, TextEdit, Ui};

use crate::export::csv::{export_csv_to_file, HISTORY_FILENAME};
use crate::session::views::filtered_history;
use crate::session::{HistoryEntry, HistoryField, SessionStore};

/// Workout history panel state.
#[derive(Default)]
pub struct HistoryPanel {
    /// Search filter
    pub search: String,
    /// Error message to display
    pub error_message: Option<String>,
}

impl HistoryPanel {
    /// Create a new history panel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the workout history list with search, inline editing, and
    /// CSV export.
    pub fn show(&mut self, ui: &mut Ui, store: &mut SessionStore) {
        ui.horizontal(|ui| {
            ui.heading("Workout History");

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button("Export CSV").clicked() {
                    self.export(store);
                }
            });
        });

        ui.add_space(4.0);

        ui.horizontal(|ui| {
            ui.label("Search:");
            ui.add(
                TextEdit::singleline(&mut self.search)
                    .hint_text("Search workout history...")
                    .desired_width(240.0),
            );
            if ui.button("Clear").clicked() {
                self.search.clear();
            }
        });

        if let Some(ref error) = self.error_message {
            ui.add_space(4.0);
            ui.colored_label(Color32::from_rgb(234, 67, 53), error);
        }

        ui.add_space(8.0);

        // Snapshot the derived view so row edits can mutate the store.
        let view: Vec<HistoryEntry> = filtered_history(store.history(), &self.search)
            .into_iter()
            .cloned()
            .collect();

        if view.is_empty() {
            ui.label(RichText::new("No workouts found").weak());
            return;
        }

        for entry in view {
            ui.horizontal(|ui| {
                let mut date = entry.date.clone();
                if ui
                    .add(TextEdit::singleline(&mut date).desired_width(64.0))
                    .changed()
                {
                    self.apply(store.update_history(entry.id, HistoryField::Date, &date));
                }

                let mut details = entry.details.clone();
                if ui
                    .add(TextEdit::singleline(&mut details).desired_width(320.0))
                    .changed()
                {
                    self.apply(store.update_history(entry.id, HistoryField::Details, &details));
                }

                if ui.button("Delete").clicked() {
                    self.apply(store.delete_history(entry.id).map(|_| ()));
                }
            });
        }
    }

    /// Export the current filtered view to a CSV file chosen by the user.
    fn export(&mut self, store: &SessionStore) {
        let view: Vec<HistoryEntry> = filtered_history(store.history(), &self.search)
            .into_iter()
            .cloned()
            .collect();

        let Some(path) = rfd::FileDialog::new()
            .set_file_name(HISTORY_FILENAME)
            .save_file()
        else {
            return;
        };

        match export_csv_to_file(&view, &path) {
            Ok(()) => {
                tracing::info!(path = %path.display(), rows = view.len(), "Exported workout history");
                self.error_message = None;
            }
            Err(e) => {
                tracing::warn!("History export failed: {}", e);
                self.error_message = Some(format!("Export failed: {}", e));
            }
        }
    }

    /// Record the outcome of a store operation in the error banner.
    fn apply(&mut self, result: Result<(), crate::session::StoreError>) {
        match result {
            Ok(()) => self.error_message = None,
            Err(e) => {
                tracing::warn!("History operation failed: {}", e);
                self.error_message = Some(e.to_string());
            }
        }
    }
}
