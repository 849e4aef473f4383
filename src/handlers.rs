use crate::commands;
use crate::errors::AppError;
use crate::ledger::ToggleOutcome;
use crate::models::{
    LedgerResponse, SummaryView, ThemeResponse, ToggleRequest, ToggleResponse, ToggleStatus,
    ViewUpdate,
};
use crate::state::AppState;
use crate::theme::Theme;
use crate::ui::render_index;
use axum::{
    extract::State,
    response::{Html, Redirect},
    Json,
};
use tracing::warn;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let data = state.data.lock().await;
    Html(render_index(&data.ledger, data.theme))
}

pub async fn get_ledger(State(state): State<AppState>) -> Json<LedgerResponse> {
    let data = state.data.lock().await;
    Json(LedgerResponse {
        days: data.ledger.records().to_vec(),
        summary: data.ledger.summary().to_view(),
    })
}

pub async fn get_summary(State(state): State<AppState>) -> Json<SummaryView> {
    let data = state.data.lock().await;
    Json(data.ledger.summary().to_view())
}

/// Un-saving a day needs `confirmed`. Without it nothing changes and the
/// prompt text comes back for the page to show.
pub async fn toggle(
    State(state): State<AppState>,
    Json(payload): Json<ToggleRequest>,
) -> Result<Json<ToggleResponse>, AppError> {
    let mut guard = state.data.lock().await;
    let data = &mut *guard;

    let mut prompt = None;
    let result = commands::toggle_save(&mut data.ledger, &mut data.store, payload.index, |message| {
        prompt = Some(message.to_string());
        payload.confirmed.unwrap_or(false)
    })
    .await;

    let (outcome, updates) = result.inspect_err(|err| warn!("toggle rejected: {err}"))?;

    let status = match outcome {
        ToggleOutcome::Saved => ToggleStatus::Saved,
        ToggleOutcome::Unsaved => ToggleStatus::Unsaved,
        ToggleOutcome::Declined if payload.confirmed.is_none() => ToggleStatus::ConfirmationRequired,
        ToggleOutcome::Declined => ToggleStatus::Declined,
    };

    Ok(Json(ToggleResponse {
        status,
        prompt,
        updates,
    }))
}

pub async fn get_theme(State(state): State<AppState>) -> Json<ThemeResponse> {
    let data = state.data.lock().await;
    Json(theme_response(data.theme, Vec::new()))
}

pub async fn theme_toggle(State(state): State<AppState>) -> Result<Json<ThemeResponse>, AppError> {
    let mut guard = state.data.lock().await;
    let data = &mut *guard;
    let updates = commands::toggle_theme(&mut data.theme, &mut data.store).await?;
    Ok(Json(theme_response(data.theme, updates)))
}

pub async fn theme_toggle_form(State(state): State<AppState>) -> Result<Redirect, AppError> {
    let mut guard = state.data.lock().await;
    let data = &mut *guard;
    commands::toggle_theme(&mut data.theme, &mut data.store).await?;
    Ok(Redirect::to("/"))
}

fn theme_response(theme: Theme, updates: Vec<ViewUpdate>) -> ThemeResponse {
    ThemeResponse {
        theme,
        label: theme.label().to_string(),
        updates,
    }
}
