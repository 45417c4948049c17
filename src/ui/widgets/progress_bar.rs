//! Goal progress bar widget.

use egui::{Pos2, Rect, RichText, Ui, Vec2};

use crate::ui::theme::progress_colors;

/// A horizontal progress bar for goal completion.
pub struct GoalProgressBar;

impl GoalProgressBar {
    /// Render a progress bar for a 0-100 completion percentage.
    ///
    /// The fill width maps linearly to the percentage and the fill color
    /// follows the progress band.
    pub fn show(ui: &mut Ui, progress: u8) {
        let progress = progress.min(100);
        let available_width = ui.available_width().max(60.0);
        let bar_width = available_width.min(240.0);
        let bar_height = 14.0;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(bar_width, bar_height), egui::Sense::hover());

        let rect = response.rect;

        // Track
        painter.rect_filled(rect, 4.0, ui.visuals().faint_bg_color);

        // Fill
        let fill_width = rect.width() * (progress as f32 / 100.0);
        if fill_width > 0.0 {
            let fill_rect = Rect::from_min_size(
                Pos2::new(rect.min.x, rect.min.y),
                Vec2::new(fill_width, bar_height),
            );
            painter.rect_filled(fill_rect, 4.0, progress_colors::progress_color(progress));
        }

        response.on_hover_text(format!("{}% complete", progress));
    }

    /// Render a progress bar with a trailing percentage label.
    pub fn with_label(ui: &mut Ui, progress: u8) {
        ui.horizontal(|ui| {
            Self::show(ui, progress);
            ui.label(RichText::new(format!("{}%", progress.min(100))).weak());
        });
    }
}
