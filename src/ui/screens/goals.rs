//! Goals panel implementation.

use egui::{Align, Color32, Layout, RichText, Slider, TextEdit, Ui};

use crate::export::csv::{export_csv_to_file, GOALS_FILENAME};
use crate::session::views::filtered_goals;
use crate::session::{GoalEntry, GoalField, SessionStore};
use crate::ui::widgets::GoalProgressBar;

/// Goals panel state.
#[derive(Default)]
pub struct GoalsPanel {
    /// Search filter
    pub search: String,
    /// Error message to display
    pub error_message: Option<String>,
}

impl GoalsPanel {
    /// Create a new goals panel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the goals list with search, inline editing, progress bars,
    /// and CSV export. Goals display sorted by progress descending.
    pub fn show(&mut self, ui: &mut Ui, store: &mut SessionStore) {
        ui.horizontal(|ui| {
            ui.heading("Goals");

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button("Export Goals CSV").clicked() {
                    self.export(store);
                }
            });
        });

        ui.add_space(4.0);

        ui.horizontal(|ui| {
            ui.label("Search:");
            ui.add(
                TextEdit::singleline(&mut self.search)
                    .hint_text("Search goals...")
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
        let view: Vec<GoalEntry> = filtered_goals(store.goals(), &self.search)
            .into_iter()
            .cloned()
            .collect();

        if view.is_empty() {
            ui.label(RichText::new("No goals found").weak());
            return;
        }

        for entry in view {
            ui.horizontal(|ui| {
                let mut description = entry.description.clone();
                if ui
                    .add(TextEdit::singleline(&mut description).desired_width(260.0))
                    .changed()
                {
                    self.apply(store.update_goal(
                        entry.id,
                        GoalField::Description,
                        &description,
                    ));
                }

                // Progress writes go through the store's parse/clamp boundary
                // like any other field edit.
                let mut progress = entry.progress;
                if ui.add(Slider::new(&mut progress, 0..=100)).changed() {
                    self.apply(store.update_goal(
                        entry.id,
                        GoalField::Progress,
                        &progress.to_string(),
                    ));
                }

                GoalProgressBar::with_label(ui, progress);

                if ui.button("Delete").clicked() {
                    self.apply(store.delete_goal(entry.id).map(|_| ()));
                }
            });
        }
    }

    /// Export the current filtered view to a CSV file chosen by the user.
    fn export(&mut self, store: &SessionStore) {
        let view: Vec<GoalEntry> = filtered_goals(store.goals(), &self.search)
            .into_iter()
            .cloned()
            .collect();

        let Some(path) = rfd::FileDialog::new()
            .set_file_name(GOALS_FILENAME)
            .save_file()
        else {
            return;
        };

        match export_csv_to_file(&view, &path) {
            Ok(()) => {
                tracing::info!(path = %path.display(), rows = view.len(), "Exported goals");
                self.error_message = None;
            }
            Err(e) => {
                tracing::warn!("Goals export failed: {}", e);
                self.error_message = Some(format!("Export failed: {}", e));
            }
        }
    }

    /// Record the outcome of a store operation in the error banner.
    fn apply(&mut self, result: Result<(), crate::session::StoreError>) {
        match result {
            Ok(()) => self.error_message = None,
            Err(e) => {
                tracing::warn!("Goal operation failed: {}", e);
                self.error_message = Some(e.to_string());
            }
        }
    }
}
