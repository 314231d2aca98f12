//! Unmatched-query report.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Summary of a batch run focused on the queries that were not matched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Threshold the batch was run with
    pub threshold: u8,
    pub total: usize,
    pub unmatched: usize,
    /// `unmatched / total`, or 0.0 when `has_data` is false
    pub no_match_ratio: f64,
    /// False when the report was built from zero results
    pub has_data: bool,
    /// Random sample of unmatched queries, without replacement
    pub samples: Vec<String>,
}

impl Report {
    pub fn empty(threshold: u8) -> Self {
        Self {
            threshold,
            total: 0,
            unmatched: 0,
            no_match_ratio: 0.0,
            has_data: false,
            samples: Vec::new(),
        }
    }

    pub fn to_json_string(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "-------------------Matching Report-------------------")?;
        writeln!(f, "Using threshold of {}", self.threshold)?;
        if self.has_data {
            writeln!(
                f,
                "{:.2}% of the replies couldn't be matched ({}/{}). Samples:",
                self.no_match_ratio * 100.0,
                self.unmatched,
                self.total
            )?;
            for s in &self.samples {
                writeln!(f, "  {s:?}")?;
            }
        } else {
            writeln!(f, "No replies were matched yet.")?;
        }
        write!(f, "-------------------End of Report-------------------")
    }
}
