use crate::ledger::GOAL_AMOUNT;
use crate::models::{DayRecord, SummaryView};

/// Totals derived from the ledger. Recomputed from scratch on every change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub saved_amount: u32,
    pub amount_needed: u32,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressDisplay {
    pub width: String,
    pub label: String,
}

pub fn summarize(records: &[DayRecord]) -> Summary {
    let saved_amount: u32 = records
        .iter()
        .filter(|record| record.is_saved)
        .map(|record| record.amount)
        .sum();

    Summary {
        saved_amount,
        amount_needed: GOAL_AMOUNT.saturating_sub(saved_amount),
        percentage: f64::from(saved_amount) * 100.0 / f64::from(GOAL_AMOUNT),
    }
}

impl Summary {
    pub fn progress(&self) -> ProgressDisplay {
        progress_display(self.percentage)
    }

    pub fn to_view(&self) -> SummaryView {
        let progress = self.progress();
        SummaryView {
            current_saved: format_thousands(self.saved_amount),
            amount_needed: format_thousands(self.amount_needed),
            progress_width: progress.width,
            progress_label: progress.label,
        }
    }
}

/// Bar width and label for a percentage, rounded to two decimals.
/// A nonzero value under 5% keeps a 5% sliver so the label stays visible.
pub fn progress_display(percentage: f64) -> ProgressDisplay {
    let rounded = (percentage * 100.0).round() / 100.0;
    let fixed = format!("{rounded:.2}%");

    if rounded == 0.0 {
        ProgressDisplay {
            width: "0%".to_string(),
            label: "0%".to_string(),
        }
    } else if rounded < 5.0 {
        ProgressDisplay {
            width: "5%".to_string(),
            label: fixed,
        }
    } else {
        ProgressDisplay {
            width: fixed.clone(),
            label: fixed,
        }
    }
}

pub fn format_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::SavingLedger;

    fn ledger_with_saved(days: impl IntoIterator<Item = usize>) -> SavingLedger {
        let mut ledger = SavingLedger::fresh();
        for index in days {
            ledger.toggle_save(index, |_| true).unwrap();
        }
        ledger
    }

    #[test]
    fn fresh_ledger_has_nothing_saved() {
        let summary = SavingLedger::fresh().summary();
        assert_eq!(summary.saved_amount, 0);
        assert_eq!(summary.amount_needed, GOAL_AMOUNT);
        assert_eq!(summary.percentage, 0.0);
        assert_eq!(
            summary.progress(),
            ProgressDisplay {
                width: "0%".into(),
                label: "0%".into()
            }
        );
    }

    #[test]
    fn saved_and_needed_always_add_to_goal() {
        for step in [1usize, 2, 7, 13, 50, 364] {
            let ledger = ledger_with_saved((0..365).step_by(step));
            let summary = ledger.summary();
            assert_eq!(summary.saved_amount + summary.amount_needed, GOAL_AMOUNT);
            assert!((0.0..=100.0).contains(&summary.percentage));
            let expected = f64::from(summary.saved_amount) * 100.0 / f64::from(GOAL_AMOUNT);
            assert_eq!(summary.percentage, expected);
        }
    }

    #[test]
    fn first_two_days_round_down_to_zero() {
        let summary = ledger_with_saved([0, 1]).summary();
        assert_eq!(summary.saved_amount, 3);
        assert_eq!(summary.amount_needed, 66_792);

        let view = summary.to_view();
        assert_eq!(view.current_saved, "3");
        assert_eq!(view.amount_needed, "66,792");
        assert_eq!(view.progress_width, "0%");
        assert_eq!(view.progress_label, "0%");
    }

    #[test]
    fn small_progress_keeps_minimum_width() {
        // day 365 alone: 365 / 66795 = 0.546...%
        let summary = ledger_with_saved([364]).summary();
        let progress = summary.progress();
        assert_eq!(progress.width, "5%");
        assert_eq!(progress.label, "0.55%");
    }

    #[test]
    fn progress_at_and_above_five_percent_is_exact() {
        assert_eq!(
            progress_display(5.0),
            ProgressDisplay {
                width: "5.00%".into(),
                label: "5.00%".into()
            }
        );
        assert_eq!(progress_display(4.994).label, "4.99%");
        assert_eq!(progress_display(4.994).width, "5%");
        assert_eq!(progress_display(4.996).width, "5.00%");
        assert_eq!(progress_display(42.123).width, "42.12%");
    }

    #[test]
    fn everything_saved_reaches_goal() {
        let summary = ledger_with_saved(0..365).summary();
        assert_eq!(summary.saved_amount, GOAL_AMOUNT);
        assert_eq!(summary.amount_needed, 0);
        assert_eq!(summary.percentage, 100.0);

        let view = summary.to_view();
        assert_eq!(view.current_saved, "66,795");
        assert_eq!(view.amount_needed, "0");
        assert_eq!(view.progress_width, "100.00%");
        assert_eq!(view.progress_label, "100.00%");
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(66_795), "66,795");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
    }
}
