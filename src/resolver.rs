//! Resolver Module
//!
//! Answers a factorization request from the store when possible, otherwise
//! computes it, records it and persists the store.

use std::time::{Duration, Instant};

use num_bigint::BigUint;
use tracing::{info, warn};

use crate::cache::{key_for, FactorRecord, ResultStore};
use crate::factor::factorize;

// == Provenance ==
/// Where a reported factor list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// Computed during this run
    Calculated,
    /// Read back from the persistent store
    FromStore,
}

// == Outcome ==
/// Everything the console and the run log need to report one run.
#[derive(Debug, Clone)]
pub struct Outcome {
    /// The number that was factored
    pub number: BigUint,
    /// Unique prime factors, ascending
    pub factors: Vec<BigUint>,
    /// Calculation time on a miss, lookup time on a hit
    pub duration: Duration,
    pub provenance: Provenance,
    /// Seconds the stored result originally took, hits only
    pub original_calculation_time: Option<f64>,
    /// False when a freshly computed result could not be written to disk
    pub persisted: bool,
}

// == Resolve ==
/// Looks `number` up in `store`, falling back to factorizing it.
///
/// On a miss the record is inserted and the whole store saved. A failed save
/// is logged and the in-memory result is still returned.
pub fn resolve(store: &mut ResultStore, number: &BigUint) -> Outcome {
    let key = key_for(number);

    let start = Instant::now();
    let cached = store.lookup(&key).cloned();
    let lookup_duration = start.elapsed();

    if let Some(record) = cached {
        info!("Found in Database!");
        return Outcome {
            number: number.clone(),
            factors: record.factors,
            duration: lookup_duration,
            provenance: Provenance::FromStore,
            original_calculation_time: record.calculation_time,
            persisted: true,
        };
    }

    let start = Instant::now();
    let factors = factorize(number);
    let duration = start.elapsed();

    store.insert(key, FactorRecord::new(factors.clone(), duration.as_secs_f64()));
    let persisted = match store.save() {
        Ok(()) => {
            info!("Result saved to database for future fast access.");
            true
        }
        Err(e) => {
            warn!("Error saving cache file: {}", e);
            false
        }
    };

    Outcome {
        number: number.clone(),
        factors,
        duration,
        provenance: Provenance::Calculated,
        original_calculation_time: None,
        persisted,
    }
}
