use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/theme/toggle", post(handlers::theme_toggle_form))
        .route("/api/ledger", get(handlers::get_ledger))
        .route("/api/summary", get(handlers::get_summary))
        .route("/api/toggle", post(handlers::toggle))
        .route("/api/theme", get(handlers::get_theme))
        .route("/api/theme/toggle", post(handlers::theme_toggle))
        .with_state(state)
}
