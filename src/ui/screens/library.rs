//! Exercise library panel implementation.

use egui::{Color32, RichText, TextEdit, Ui};

use crate::session::views::filtered_exercises;
use crate::session::{ExerciseEntry, ExerciseField, SessionStore};

/// Exercise library panel state.
#[derive(Default)]
pub struct LibraryPanel {
    /// Search filter
    pub search: String,
    /// Error message to display
    pub error_message: Option<String>,
}

impl LibraryPanel {
    /// Create a new library panel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the exercise library list with search and inline editing.
    pub fn show(&mut self, ui: &mut Ui, store: &mut SessionStore) {
        ui.heading("Exercise Library");

        ui.add_space(4.0);

        ui.horizontal(|ui| {
            ui.label("Search:");
            ui.add(
                TextEdit::singleline(&mut self.search)
                    .hint_text("Search exercises...")
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
        let view: Vec<ExerciseEntry> = filtered_exercises(store.library(), &self.search)
            .into_iter()
            .cloned()
            .collect();

        if view.is_empty() {
            ui.label(RichText::new("No exercises found").weak());
            return;
        }

        for entry in view {
            ui.horizontal(|ui| {
                let mut name = entry.name.clone();
                if ui
                    .add(TextEdit::singleline(&mut name).desired_width(120.0))
                    .changed()
                {
                    self.apply(store.update_exercise(entry.id, ExerciseField::Name, &name));
                }

                let mut category = entry.category.clone();
                if ui
                    .add(TextEdit::singleline(&mut category).desired_width(120.0))
                    .changed()
                {
                    self.apply(store.update_exercise(entry.id, ExerciseField::Category, &category));
                }

                let mut target = entry.target.clone();
                if ui
                    .add(TextEdit::singleline(&mut target).desired_width(140.0))
                    .changed()
                {
                    self.apply(store.update_exercise(entry.id, ExerciseField::Target, &target));
                }

                if ui.button("Delete").clicked() {
                    self.apply(store.delete_exercise(entry.id).map(|_| ()));
                }
            });
        }
    }

    /// Record the outcome of a store operation in the error banner.
    fn apply(&mut self, result: Result<(), crate::session::StoreError>) {
        match result {
            Ok(()) => self.error_message = None,
            Err(e) => {
                tracing::warn!("Library operation failed: {}", e);
                self.error_message = Some(e.to_string());
            }
        }
    }
}
