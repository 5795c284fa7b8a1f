//! Cache Module
//!
//! Persistent memoization of factorizations in a JSON file.

mod record;
mod store;


// Re-export public types
pub use record::FactorRecord;
pub use store::{key_for, ResultStore, StoreOrigin};
