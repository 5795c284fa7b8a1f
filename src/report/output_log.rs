//! Run log writer
//!
//! Appends one human-readable block per run to a text file.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::Local;
use num_bigint::BigUint;
use tracing::info;

use crate::error::{PrimeError, Result};
use crate::report::{format_seconds, join_factors};
use crate::resolver::{Outcome, Provenance};

/// Timestamp layout used in block headers.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Append-only text log of run results.
#[derive(Debug, Clone)]
pub struct OutputLog {
    path: PathBuf,
}

impl OutputLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends the block for `outcome`, stamped with the current local time.
    ///
    /// Blocks are separated by one blank line; the first block in an empty or
    /// missing file gets no leading separator.
    pub fn append(&self, outcome: &Outcome) -> Result<()> {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        let block = render_block(
            &timestamp,
            &outcome.number,
            &outcome.factors,
            outcome.duration,
            Some(outcome.provenance),
        );

        let mut content = String::with_capacity(block.len() + 1);
        if self.has_content()? {
            content.push('\n');
        }
        content.push_str(&block);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| PrimeError::io(&self.path, e))?;
        file.write_all(content.as_bytes())
            .and_then(|_| file.flush())
            .map_err(|e| PrimeError::io(&self.path, e))?;

        info!("Result saved to output file: '{}'", self.path.display());
        Ok(())
    }

    fn has_content(&self) -> Result<bool> {
        match fs::metadata(&self.path) {
            Ok(meta) => Ok(meta.len() > 0),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(PrimeError::io(&self.path, e)),
        }
    }
}

/// What the run did to obtain its factors, as worded in the log.
pub fn action_phrase(provenance: Option<Provenance>) -> &'static str {
    match provenance {
        Some(Provenance::Calculated) => "calculate them",
        Some(Provenance::FromStore) => "get them from database",
        None => "find those",
    }
}

/// Formats one log block, newline-terminated.
pub fn render_block(
    timestamp: &str,
    number: &BigUint,
    factors: &[BigUint],
    duration: Duration,
    provenance: Option<Provenance>,
) -> String {
    format!(
        "--- Run at {} ---\nPrime Factors of number {} are\n{}\nIt took {} seconds to {}\n",
        timestamp,
        number,
        join_factors(factors),
        format_seconds(duration.as_secs_f64()),
        action_phrase(provenance),
    )
}
