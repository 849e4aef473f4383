//! User commands. Each one mutates the owned state, persists what changed,
//! and returns the view updates the page has to apply.

use crate::ledger::{LedgerError, SavingLedger, ToggleOutcome};
use crate::models::ViewUpdate;
use crate::storage::{KvStore, StorageError};
use crate::theme::{self, Theme};
use tracing::info;

pub async fn toggle_save<F>(
    ledger: &mut SavingLedger,
    store: &mut KvStore,
    index: usize,
    confirm: F,
) -> Result<(ToggleOutcome, Vec<ViewUpdate>), LedgerError>
where
    F: FnOnce(&str) -> bool,
{
    let before = ledger.clone();
    let outcome = ledger.toggle_save(index, confirm)?;
    if !outcome.changed() {
        return Ok((outcome, Vec::new()));
    }

    // memory must not run ahead of the store
    if let Err(err) = ledger.persist(store).await {
        *ledger = before;
        return Err(err);
    }

    let saved = outcome == ToggleOutcome::Saved;
    if let Some(record) = ledger.get(index) {
        info!(day = index + 1, amount = record.amount, saved, "day toggled");
    }

    let updates = vec![
        ViewUpdate::MarkCell { index, saved },
        ViewUpdate::Summary(ledger.summary().to_view()),
    ];
    Ok((outcome, updates))
}

/// Flips `active` in place. The current mode comes from `active`, never from the store.
pub async fn toggle_theme(
    active: &mut Theme,
    store: &mut KvStore,
) -> Result<Vec<ViewUpdate>, StorageError> {
    let next = theme::toggle_theme(*active, store).await?;
    *active = next;
    info!(theme = next.as_str(), "theme toggled");
    Ok(vec![apply_theme(next)])
}

pub fn apply_theme(theme: Theme) -> ViewUpdate {
    ViewUpdate::Theme {
        dark: theme.is_dark(),
        label: theme.label().to_string(),
    }
}
