//! The fixed textual week report posted back to the chat transport.

use super::ledger::{MarketDay, PredictionPattern, PriceRecord, Slot};

/// Summary shown when no prediction is available.
const NO_PREDICTION: &str = "no prediction yet";

/// Renders a record and an optional prediction into the fixed report block.
///
/// Six Monday..Saturday lines showing the am/pm prices, then the `Avg`
/// summary line with the prediction pattern (or a placeholder), all wrapped
/// in code fences for chat markdown. Pure function; the absent-record case
/// is a [`LedgerError::NoRecord`](super::ledger::LedgerError::NoRecord) at
/// the handler boundary, never a report.
pub fn render_week(record: &PriceRecord, pattern: Option<&PredictionPattern>) -> String {
    let mut report = String::from("```\n");
    for day in MarketDay::ALL {
        report.push_str(&format!(
            "{:<10}: {}am {}pm\n",
            day.name(),
            record.price(day, Slot::Am),
            record.price(day, Slot::Pm),
        ));
    }
    match pattern {
        Some(pattern) => report.push_str(&format!("{:<10}: {}\n", "Avg", pattern)),
        None => report.push_str(&format!("{:<10}: {}\n", "Avg", NO_PREDICTION)),
    }
    report.push_str("```\n");
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ledger::{SubmitDay, UserId};

    fn record_for(user: &str) -> PriceRecord {
        PriceRecord::new(
            UserId::new(user).unwrap(),
            SubmitDay::Market(MarketDay::Monday),
        )
    }

    #[test]
    fn renders_single_observation_week() {
        let mut record = record_for("alice");
        record.set_price(MarketDay::Monday, Slot::Am, 90);

        let report = render_week(&record, None);
        assert!(report.starts_with("```\n"));
        assert!(report.ends_with("```\n"));
        assert!(report.contains("Monday    : 90am 0pm\n"));
        assert!(report.contains("Tuesday   : 0am 0pm\n"));
        assert!(report.contains("Wednesday : 0am 0pm\n"));
        assert!(report.contains("Saturday  : 0am 0pm\n"));
    }

    #[test]
    fn renders_placeholder_without_prediction() {
        let report = render_week(&record_for("alice"), None);
        assert!(report.contains("Avg       : no prediction yet\n"));
    }

    #[test]
    fn renders_prediction_pattern_in_summary_line() {
        let pattern = PredictionPattern::new(vec![86.0, 90.0, 95.5]);
        let report = render_week(&record_for("alice"), Some(&pattern));
        assert!(report.contains("Avg       : [86, 90, 95.5]\n"));
    }

    #[test]
    fn report_always_has_six_day_lines() {
        let report = render_week(&record_for("alice"), None);
        let day_lines = report
            .lines()
            .filter(|line| line.contains("am") && line.contains("pm"))
            .count();
        assert_eq!(day_lines, 6);
    }
}
