//! Factor Record Module
//!
//! Defines the value stored under each key of the result cache.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

// == Factor Record ==
/// Unique prime factors of one number plus how long they took to compute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorRecord {
    /// Prime factors, strictly ascending
    #[serde(with = "decimal_list")]
    pub factors: Vec<BigUint>,
    /// Seconds spent factorizing, None when the writer did not record it
    #[serde(default)]
    pub calculation_time: Option<f64>,
}

impl FactorRecord {
    // == Constructor ==
    /// Creates a record for freshly computed factors.
    pub fn new(factors: Vec<BigUint>, calculation_time: f64) -> Self {
        Self {
            factors,
            calculation_time: Some(calculation_time),
        }
    }
}

/// Serializes factors as bare JSON integers of any width.
///
/// Relies on serde_json's `arbitrary_precision` feature so values past
/// `u64::MAX` keep every digit.
mod decimal_list {
    use std::str::FromStr;

    use num_bigint::BigUint;
    use serde::de::Error as _;
    use serde::ser::{Error as _, SerializeSeq};
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Number;

    pub fn serialize<S>(factors: &[BigUint], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(factors.len()))?;
        for factor in factors {
            let number = Number::from_str(&factor.to_string()).map_err(S::Error::custom)?;
            seq.serialize_element(&number)?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<BigUint>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<Number>::deserialize(deserializer)?
            .into_iter()
            .map(|number| {
                let digits = number.to_string();
                BigUint::from_str(&digits)
                    .map_err(|_| D::Error::custom(format!("invalid factor {}", digits)))
            })
            .collect()
    }
}
