pub mod app;
pub mod commands;
pub mod errors;
pub mod handlers;
pub mod ledger;
pub mod models;
pub mod storage;
pub mod summary;
pub mod theme;
pub mod ui;
pub mod state;

pub use app::router;
pub use ledger::SavingLedger;
pub use state::AppState;
pub use storage::{resolve_data_path, KvStore};
pub use theme::{load_theme, Theme};
