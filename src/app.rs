//! Main application state and egui integration.

use eframe::egui;

use chrono::Local;
use fittrack::session::SessionStore;
use fittrack::ui::screens::{GoalsPanel, HistoryPanel, LibraryPanel, LoginScreen, Screen};
use fittrack::ui::theme::Theme;

/// Display name for the single local user.
const USER_NAME: &str = "Demo User";

/// Main application state.
pub struct FitTrackApp {
    /// Current screen
    current_screen: Screen,
    /// UI theme
    theme: Theme,
    /// All session state: the three collections plus the UI flags
    store: SessionStore,
    /// Login screen state
    login_screen: LoginScreen,
    /// Workout history panel state
    history_panel: HistoryPanel,
    /// Exercise library panel state
    library_panel: LibraryPanel,
    /// Goals panel state
    goals_panel: GoalsPanel,
}

impl FitTrackApp {
    /// Create a new application instance.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let theme = Theme::Dark;
        cc.egui_ctx.set_visuals(theme.visuals());

        let store = SessionStore::with_seed_data();
        tracing::info!(
            history = store.history().len(),
            exercises = store.library().len(),
            goals = store.goals().len(),
            "Seeded session store"
        );

        Self {
            current_screen: Screen::Login,
            theme,
            store,
            login_screen: LoginScreen::new(),
            history_panel: HistoryPanel::new(),
            library_panel: LibraryPanel::new(),
            goals_panel: GoalsPanel::new(),
        }
    }

    /// Render the top bar: login status and the premium upgrade control.
    ///
    /// The upgrade button disappears once premium is set; nothing else is
    /// gated on the flag.
    fn show_top_bar(&mut self, ui: &mut egui::Ui) {
        let premium = self.store.flags().premium;
        let logged_in_at = self.store.flags().logged_in_at;

        ui.horizontal(|ui| {
            let mut status = format!("Logged in as {}", USER_NAME);
            if let Some(at) = logged_in_at {
                status.push_str(&format!(" since {}", at.with_timezone(&Local).format("%H:%M")));
            }
            ui.label(status);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if premium {
                    ui.label(egui::RichText::new("Premium").strong());
                } else if ui.button("Upgrade to Premium").clicked() {
                    self.store.upgrade();
                }

                let theme_label = match self.theme {
                    Theme::Dark => "Light mode",
                    Theme::Light => "Dark mode",
                };
                if ui.button(theme_label).clicked() {
                    self.theme = match self.theme {
                        Theme::Dark => Theme::Light,
                        Theme::Light => Theme::Dark,
                    };
                    ui.ctx().set_visuals(self.theme.visuals());
                }
            });
        });
    }

    /// Render the dashboard with the three record lists.
    fn show_dashboard(&mut self, ui: &mut egui::Ui) {
        self.show_top_bar(ui);
        ui.separator();

        egui::ScrollArea::vertical().show(ui, |ui| {
            self.history_panel.show(ui, &mut self.store);
            ui.add_space(12.0);
            ui.separator();

            self.library_panel.show(ui, &mut self.store);
            ui.add_space(12.0);
            ui.separator();

            self.goals_panel.show(ui, &mut self.store);
        });
    }
}

impl eframe::App for FitTrackApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| match self.current_screen {
            Screen::Login => {
                if let Some(next) = self.login_screen.show(ui) {
                    self.store.login();
                    self.current_screen = next;
                }
            }
            Screen::Dashboard => self.show_dashboard(ui),
        });
    }
}
