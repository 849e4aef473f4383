use crate::storage::{KvStore, StorageError, THEME_KEY};
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Toggle-button text describing the mode currently shown.
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Mode: ☀️ Light",
            Self::Dark => "Mode: 🌙 Dark",
        }
    }
}

pub fn load_theme(store: &KvStore) -> Theme {
    match store.get(THEME_KEY) {
        None => Theme::default(),
        Some(raw) => Theme::parse(raw).unwrap_or_else(|| {
            warn!("unknown stored theme {raw:?}, using light");
            Theme::default()
        }),
    }
}

/// Flips the active theme and persists the new one.
pub async fn toggle_theme(active: Theme, store: &mut KvStore) -> Result<Theme, StorageError> {
    let next = active.opposite();
    store.set(THEME_KEY, next.as_str().to_string()).await?;
    Ok(next)
}
