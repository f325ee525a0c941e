//! Monetary amounts as supplied by profile data and job templates
//!
//! Rates and budgets arrive as spreadsheet cells or config values, so they
//! may be numbers or arbitrary text. The raw text is kept and only parsed
//! when the budget criterion needs it.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::matching::parse_amount;

/// A rate or budget in its original textual form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Amount(String);

impl Amount {
    pub fn new(raw: impl Into<String>) -> Self {
        Amount(raw.into())
    }

    /// The value as originally supplied
    pub fn raw(&self) -> &str {
        &self.0
    }

    /// Numeric value, or `None` when the text does not parse
    pub fn value(&self) -> Option<f64> {
        parse_amount(&self.0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u32> for Amount {
    fn from(value: u32) -> Self {
        Amount(value.to_string())
    }
}

impl From<&str> for Amount {
    fn from(value: &str) -> Self {
        Amount(value.to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AmountRepr {
    Int(i64),
    Float(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match AmountRepr::deserialize(deserializer)? {
            AmountRepr::Int(n) => Amount(n.to_string()),
            AmountRepr::Float(n) => Amount(n.to_string()),
            AmountRepr::Text(s) => Amount(s),
        })
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let trimmed = self.0.trim();
        if let Ok(n) = trimmed.parse::<i64>() {
            serializer.serialize_i64(n)
        } else if let Some(n) = self.value().filter(|n| n.is_finite()) {
            serializer.serialize_f64(n)
        } else {
            serializer.serialize_str(&self.0)
        }
    }
}
