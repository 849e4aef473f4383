use crate::ledger::SavingLedger;
use crate::storage::KvStore;
use crate::theme::Theme;
use std::sync::Arc;
use tokio::sync::Mutex;

pub struct AppData {
    pub ledger: SavingLedger,
    pub theme: Theme,
    pub store: KvStore,
}

#[derive(Clone)]
pub struct AppState {
    pub data: Arc<Mutex<AppData>>,
}

impl AppState {
    pub fn new(ledger: SavingLedger, theme: Theme, store: KvStore) -> Self {
        Self {
            data: Arc::new(Mutex::new(AppData {
                ledger,
                theme,
                store,
            })),
        }
    }
}
