//! Report Module
//!
//! Turns a run outcome into console text and run-log blocks.

pub mod display;
pub mod output_log;

pub use output_log::{action_phrase, render_block, OutputLog};

/// Joins factors as "a, b, c".
pub fn join_factors(factors: &[num_bigint::BigUint]) -> String {
    factors
        .iter()
        .map(|factor| factor.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Seconds with exactly four decimal places.
pub fn format_seconds(seconds: f64) -> String {
    format!("{:.4}", seconds)
}
