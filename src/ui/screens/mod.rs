//! UI screens for the application.

pub mod goals;
pub mod history;
pub mod library;
pub mod login;

pub use goals::GoalsPanel;
pub use history::HistoryPanel;
pub use library::LibraryPanel;
pub use login::LoginScreen;

/// Screen navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Login screen
    #[default]
    Login,
    /// Dashboard with the three record lists
    Dashboard,
}
