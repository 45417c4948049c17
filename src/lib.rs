//! FitTrack - Fitness Tracking Application
//!
//! A self-hosted fitness tracker: workout history, an exercise library, and
//! personal goals, held in memory for the lifetime of a session. Provides
//! search with derived sorting, inline editing, and CSV export.

pub mod export;
pub mod session;
pub mod ui;

// Re-export commonly used types
pub use export::csv::{records_to_csv, CsvRecord, ExportError};
pub use session::store::SessionStore;
pub use session::types::StoreError;
