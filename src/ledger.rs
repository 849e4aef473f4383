use crate::models::DayRecord;
use crate::storage::{KvStore, LEDGER_KEY, StorageError};
use crate::summary::{Summary, format_thousands, summarize};

pub const TOTAL_DAYS: usize = 365;
pub const GOAL_AMOUNT: u32 = (TOTAL_DAYS as u32) * (TOTAL_DAYS as u32 + 1) / 2;

#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("stored ledger is not valid JSON: {0}")]
    Parse(serde_json::Error),
    #[error("stored ledger has {found} days, expected {total}", total = TOTAL_DAYS)]
    WrongLength { found: usize },
    #[error("stored ledger day {day} has amount {found}, expected {day}", day = .index + 1)]
    WrongAmount { index: usize, found: u32 },
    #[error("day index {0} is out of range 0..{total}", total = TOTAL_DAYS)]
    IndexOutOfRange(usize),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// What a toggle did to the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Saved,
    Unsaved,
    Declined,
}

impl ToggleOutcome {
    pub fn changed(self) -> bool {
        !matches!(self, Self::Declined)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavingLedger {
    records: Vec<DayRecord>,
}

impl SavingLedger {
    pub fn fresh() -> Self {
        Self {
            records: (1..=TOTAL_DAYS as u32).map(DayRecord::unsaved).collect(),
        }
    }

    /// Checks count and amounts; saved flags are taken as-is.
    pub fn from_records(records: Vec<DayRecord>) -> Result<Self, LedgerError> {
        if records.len() != TOTAL_DAYS {
            return Err(LedgerError::WrongLength {
                found: records.len(),
            });
        }
        if let Some((index, record)) = records
            .iter()
            .enumerate()
            .find(|(index, record)| record.amount as usize != index + 1)
        {
            return Err(LedgerError::WrongAmount {
                index,
                found: record.amount,
            });
        }
        Ok(Self { records })
    }

    pub fn from_json(raw: &str) -> Result<Self, LedgerError> {
        let records: Vec<DayRecord> = serde_json::from_str(raw).map_err(LedgerError::Parse)?;
        Self::from_records(records)
    }

    /// Loads the persisted ledger, or a fresh one when the store has none.
    pub fn load(store: &KvStore) -> Result<Self, LedgerError> {
        match store.get(LEDGER_KEY) {
            Some(raw) => Self::from_json(raw),
            None => Ok(Self::fresh()),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.records)
    }

    pub async fn persist(&self, store: &mut KvStore) -> Result<(), LedgerError> {
        let payload = self.to_json().map_err(StorageError::from)?;
        store.set(LEDGER_KEY, payload).await?;
        Ok(())
    }

    pub fn records(&self) -> &[DayRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&DayRecord> {
        self.records.get(index)
    }

    pub fn summary(&self) -> Summary {
        summarize(&self.records)
    }

    /// Flips day `index`. Un-saving asks `confirm` first; declining leaves
    /// the ledger untouched.
    pub fn toggle_save<F>(&mut self, index: usize, confirm: F) -> Result<ToggleOutcome, LedgerError>
    where
        F: FnOnce(&str) -> bool,
    {
        let record = self
            .records
            .get_mut(index)
            .ok_or(LedgerError::IndexOutOfRange(index))?;

        if record.is_saved {
            if !confirm(&cancel_prompt(record.amount)) {
                return Ok(ToggleOutcome::Declined);
            }
            record.is_saved = false;
            Ok(ToggleOutcome::Unsaved)
        } else {
            record.is_saved = true;
            Ok(ToggleOutcome::Saved)
        }
    }
}

impl Default for SavingLedger {
    fn default() -> Self {
        Self::fresh()
    }
}

pub fn cancel_prompt(amount: u32) -> String {
    format!(
        "Do you want to cancel saving the amount of {} THB?",
        format_thousands(amount)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goal_is_triangular_number() {
        assert_eq!(GOAL_AMOUNT, 66_795);
        let total: u32 = SavingLedger::fresh().records().iter().map(|r| r.amount).sum();
        assert_eq!(total, GOAL_AMOUNT);
    }

    #[test]
    fn fresh_ledger_numbers_days_from_one() {
        let ledger = SavingLedger::fresh();
        assert_eq!(ledger.records().len(), TOTAL_DAYS);
        for (index, record) in ledger.records().iter().enumerate() {
            assert_eq!(record.amount as usize, index + 1);
            assert!(!record.is_saved);
        }
    }

    #[test]
    fn saving_needs_no_confirmation() {
        let mut ledger = SavingLedger::fresh();
        let outcome = ledger
            .toggle_save(9, |_| panic!("should not prompt when saving"))
            .unwrap();
        assert_eq!(outcome, ToggleOutcome::Saved);
        assert!(ledger.get(9).unwrap().is_saved);
    }

    #[test]
    fn unsaving_prompts_with_formatted_amount() {
        let mut ledger = SavingLedger::fresh();
        ledger.toggle_save(0, |_| true).unwrap();

        let mut asked = None;
        let outcome = ledger
            .toggle_save(0, |message| {
                asked = Some(message.to_string());
                true
            })
            .unwrap();

        assert_eq!(outcome, ToggleOutcome::Unsaved);
        assert_eq!(
            asked.as_deref(),
            Some("Do you want to cancel saving the amount of 1 THB?")
        );
        assert_eq!(ledger, SavingLedger::fresh());
    }

    #[test]
    fn declining_keeps_day_saved() {
        let mut ledger = SavingLedger::fresh();
        ledger.toggle_save(99, |_| true).unwrap();
        let before = ledger.clone();

        let outcome = ledger.toggle_save(99, |_| false).unwrap();
        assert_eq!(outcome, ToggleOutcome::Declined);
        assert!(!outcome.changed());
        assert_eq!(ledger, before);
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let mut ledger = SavingLedger::fresh();
        let err = ledger.toggle_save(TOTAL_DAYS, |_| true).unwrap_err();
        assert!(matches!(err, LedgerError::IndexOutOfRange(365)));
        assert_eq!(ledger, SavingLedger::fresh());
    }

    #[test]
    fn prompt_groups_thousands() {
        assert_eq!(
            cancel_prompt(1234),
            "Do you want to cancel saving the amount of 1,234 THB?"
        );
    }

    #[test]
    fn json_uses_browser_field_names() {
        let mut ledger = SavingLedger::fresh();
        ledger.toggle_save(0, |_| true).unwrap();
        let json = ledger.to_json().unwrap();
        assert!(json.starts_with(r#"[{"amount":1,"isSaved":true},{"amount":2,"isSaved":false}"#));
        assert_eq!(SavingLedger::from_json(&json).unwrap(), ledger);
    }

    #[test]
    fn truncated_ledger_is_rejected() {
        let err = SavingLedger::from_json(r#"[{"amount":1,"isSaved":false}]"#).unwrap_err();
        assert!(matches!(err, LedgerError::WrongLength { found: 1 }));
    }

    #[test]
    fn shuffled_amounts_are_rejected() {
        let mut records = SavingLedger::fresh().records().to_vec();
        records.swap(3, 4);
        let err = SavingLedger::from_records(records).unwrap_err();
        assert!(matches!(err, LedgerError::WrongAmount { index: 3, found: 5 }));
    }

    #[test]
    fn errors_name_the_day() {
        let err = LedgerError::WrongAmount { index: 3, found: 5 };
        assert_eq!(err.to_string(), "stored ledger day 4 has amount 5, expected 4");
        assert_eq!(
            LedgerError::IndexOutOfRange(400).to_string(),
            "day index 400 is out of range 0..365"
        );
    }

    #[test]
    fn garbage_is_a_parse_error() {
        assert!(matches!(
            SavingLedger::from_json("not json"),
            Err(LedgerError::Parse(_))
        ));
    }

    #[tokio::test]
    async fn load_falls_back_to_fresh_and_reads_back_persisted() {
        let mut store = KvStore::in_memory();
        let mut ledger = SavingLedger::load(&store).unwrap();
        assert_eq!(ledger, SavingLedger::fresh());

        ledger.toggle_save(364, |_| true).unwrap();
        ledger.persist(&mut store).await.unwrap();

        let reloaded = SavingLedger::load(&store).unwrap();
        assert!(reloaded.get(364).unwrap().is_saved);
        assert_eq!(reloaded, ledger);
    }
}
