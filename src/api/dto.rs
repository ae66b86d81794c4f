//! Data Transfer Objects
//!
//! Request and response types for the expense REST API.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Server-assigned expense identifier.
///
/// Opaque to the client: it is only ever echoed back in delete requests and
/// `data-id` attributes. The server sends integers, but strings are accepted
/// too so the client does not depend on the server's key type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ExpenseId(String);

impl ExpenseId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ExpenseId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self(deserialize_text_or_number(deserializer)?))
    }
}

/// An expense record as returned by `GET /api/expenses`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub description: String,
    pub amount: f64,
    pub date: String,
}

/// Body of `POST /api/expenses`
///
/// `amount` is serialized as JSON `null` when it is not a finite number,
/// which is what browsers send for `NaN`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewExpense {
    pub description: String,
    pub amount: f64,
    pub date: String,
}

/// Aggregated totals returned by `GET /api/summary`
///
/// Every sequence arrives newest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(default)]
    pub daily: Vec<DailyTotal>,
    #[serde(default)]
    pub monthly: Vec<MonthlyTotal>,
    #[serde(default)]
    pub yearly: Vec<YearlyTotal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTotal {
    #[serde(deserialize_with = "deserialize_text_or_number")]
    pub date: String,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTotal {
    #[serde(deserialize_with = "deserialize_text_or_number")]
    pub month: String,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyTotal {
    #[serde(deserialize_with = "deserialize_text_or_number")]
    pub year: String,
    pub total: f64,
}

/// A (period label, total) pair from one of the summary sequences
pub trait Aggregate {
    fn period(&self) -> &str;
    fn total(&self) -> f64;
}

impl Aggregate for DailyTotal {
    fn period(&self) -> &str {
        &self.date
    }

    fn total(&self) -> f64 {
        self.total
    }
}

impl Aggregate for MonthlyTotal {
    fn period(&self) -> &str {
        &self.month
    }

    fn total(&self) -> f64 {
        self.total
    }
}

impl Aggregate for YearlyTotal {
    fn period(&self) -> &str {
        &self.year
    }

    fn total(&self) -> f64 {
        self.total
    }
}

fn deserialize_text_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrNumber {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    Ok(match TextOrNumber::deserialize(deserializer)? {
        TextOrNumber::Text(text) => text,
        TextOrNumber::Integer(value) => value.to_string(),
        TextOrNumber::Float(value) => value.to_string(),
    })
}
