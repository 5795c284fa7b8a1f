//! Console text for a run.

use crate::report::format_seconds;
use crate::resolver::{Outcome, Provenance};

pub const BANNER: &str = "--- Prime Factor Calculator  ---";

pub const PROMPT: &str = "Enter a positive number to factor (must be > 1, or 'q' to quit): ";

pub const CLOSING_RULE: &str = "-----------------\n";

/// Lines printed right after a store hit, before the results section.
pub fn lookup_lines(outcome: &Outcome) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(original) = outcome.original_calculation_time {
        lines.push(format!(
            "Original calculation took: {} seconds.",
            format_seconds(original)
        ));
    }
    lines.push(format!(
        "Lookup took: {} seconds.",
        format_seconds(outcome.duration.as_secs_f64())
    ));
    lines
}

/// The results section: header, one line per factor, then the timing sentence.
pub fn result_lines(outcome: &Outcome) -> Vec<String> {
    let mut lines = vec![String::new(), "--- Results ---".to_string()];
    lines.extend(
        outcome
            .factors
            .iter()
            .map(|factor| format!("Prime factor found: {}", factor)),
    );

    let seconds = format_seconds(outcome.duration.as_secs_f64());
    lines.push(match outcome.provenance {
        Provenance::FromStore => format!("It took {} seconds to get from database.", seconds),
        Provenance::Calculated => format!("It took {} seconds to calculate.", seconds),
    });
    lines
}
