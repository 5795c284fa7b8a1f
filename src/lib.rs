//! Prime Cache - unique prime factors with a persistent result cache
//!
//! Factorizes numbers by trial division, memoizes answers in a JSON file and
//! appends every run's outcome to a text log.

pub mod cache;
pub mod config;
pub mod error;
pub mod factor;
pub mod input;
pub mod report;
pub mod resolver;

pub use cache::{FactorRecord, ResultStore, StoreOrigin};
pub use config::Config;
pub use error::{PrimeError, Result};
pub use factor::factorize;
pub use resolver::{resolve, Outcome, Provenance};
