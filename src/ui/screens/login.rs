//! Login screen implementation.
//!
//! There is no real authentication: logging in flips a session flag and
//! reveals the dashboard. No logout exists.

use egui::{RichText, Ui, Vec2};

use crate::ui::theme::DarkTheme;

use super::Screen;

/// Login screen state.
#[derive(Default)]
pub struct LoginScreen;

impl LoginScreen {
    /// Create a new login screen.
    pub fn new() -> Self {
        Self
    }

    /// Render the login screen. Returns the next screen when the user logs in.
    pub fn show(&mut self, ui: &mut Ui) -> Option<Screen> {
        let mut next_screen = None;

        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.25);

            ui.label(RichText::new("FitTrack").size(32.0).strong());
            ui.label(RichText::new("Track workouts, exercises, and goals").weak());

            ui.add_space(24.0);

            if ui
                .add_sized(
                    Vec2::new(160.0, 40.0),
                    egui::Button::new(RichText::new("Log In").size(16.0)).fill(DarkTheme::ACCENT),
                )
                .clicked()
            {
                next_screen = Some(Screen::Dashboard);
            }
        });

        next_screen
    }
}
