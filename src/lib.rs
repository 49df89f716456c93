pub mod app;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod handlers;
pub mod journal;
pub mod models;
pub mod profile;
pub mod session;
pub mod state;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use journal::{EntryDraft, JournalEntry, JournalError, JournalStore};
pub use state::AppState;
