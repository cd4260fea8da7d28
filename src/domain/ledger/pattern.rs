//! The forecasted price pattern returned by the upstream service.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordered sequence of forecasted prices in day-major AM/PM order,
/// Monday AM first. Nominally twelve values, but the upstream cardinality is
/// not enforced locally. Transient: derived from a record snapshot at
/// prediction time and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PredictionPattern(Vec<f64>);

impl PredictionPattern {
    /// Wraps an upstream value sequence.
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    /// The forecasted values.
    pub fn values(&self) -> &[f64] {
        &self.0
    }

    /// True when the upstream returned no values.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Splits the pattern into its AM and PM series (even and odd positions).
    pub fn am_pm_series(&self) -> (Vec<f64>, Vec<f64>) {
        let am = self.0.iter().copied().step_by(2).collect();
        let pm = self.0.iter().copied().skip(1).step_by(2).collect();
        (am, pm)
    }
}

impl fmt::Display for PredictionPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_bracketed_list() {
        let pattern = PredictionPattern::new(vec![86.0, 90.5, 100.0]);
        assert_eq!(pattern.to_string(), "[86, 90.5, 100]");

        assert_eq!(PredictionPattern::default().to_string(), "[]");
    }

    #[test]
    fn am_pm_series_split_even_odd() {
        let pattern = PredictionPattern::new(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        let (am, pm) = pattern.am_pm_series();
        assert_eq!(am, vec![1.0, 3.0, 5.0]);
        assert_eq!(pm, vec![2.0, 4.0]);
    }
}
