use crate::theme::Theme;
use serde::{Deserialize, Serialize};

/// One box of the challenge: day N asks for N baht.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    pub amount: u32,
    #[serde(rename = "isSaved")]
    pub is_saved: bool,
}

impl DayRecord {
    pub fn unsaved(amount: u32) -> Self {
        Self {
            amount,
            is_saved: false,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub index: usize,
    #[serde(default)]
    pub confirmed: Option<bool>,
}

/// Instruction for the page to change one visual element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewUpdate {
    MarkCell { index: usize, saved: bool },
    Summary(SummaryView),
    Theme { dark: bool, label: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryView {
    pub current_saved: String,
    pub amount_needed: String,
    pub progress_width: String,
    pub progress_label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleStatus {
    Saved,
    Unsaved,
    Declined,
    ConfirmationRequired,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ToggleResponse {
    pub status: ToggleStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    pub updates: Vec<ViewUpdate>,
}

#[derive(Debug, Serialize)]
pub struct LedgerResponse {
    pub days: Vec<DayRecord>,
    pub summary: SummaryView,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ThemeResponse {
    pub theme: Theme,
    pub label: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub updates: Vec<ViewUpdate>,
}
