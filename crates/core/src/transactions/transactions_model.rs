//! Transaction domain models.

use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::categories::Category;
use crate::errors::{Error, ValidationError};

/// Direction of a money movement.
///
/// Stored as `INCOME` / `EXPENSE` text and accepted case-insensitively on
/// the wire, like [`crate::categories::CategoryType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_db_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "INCOME",
            TransactionType::Expense => "EXPENSE",
        }
    }
}

impl FromStr for TransactionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "INCOME" => Ok(TransactionType::Income),
            "EXPENSE" => Ok(TransactionType::Expense),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown transaction type '{}'",
                other
            )))),
        }
    }
}

impl Serialize for TransactionType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_db_str())
    }
}

impl<'de> Deserialize<'de> for TransactionType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        TransactionType::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Domain model representing one recorded money movement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub amount: Decimal,
    pub description: Option<String>,
    #[serde(with = "timestamp_format")]
    pub date: DateTime<Utc>,
    pub category_id: String,
    pub user_id: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// A transaction with its category embedded, the shape list endpoints
/// return so clients never need a second fetch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionWithCategory {
    #[serde(flatten)]
    pub transaction: Transaction,
    pub category: Category,
}

/// Input model for recording a transaction. The amount arrives as a JSON
/// number or a numeric string (HTML form inputs post strings).
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    #[serde(deserialize_with = "decimal_input_format::deserialize")]
    pub amount: Decimal,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(with = "timestamp_format")]
    pub date: DateTime<Utc>,
    pub category_id: String,
}

/// Input model for replacing a transaction's fields; the original PUT
/// semantics are a full update, not a patch.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TransactionUpdate {
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    #[serde(deserialize_with = "decimal_input_format::deserialize")]
    pub amount: Decimal,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(with = "timestamp_format")]
    pub date: DateTime<Utc>,
    pub category_id: String,
}

mod timestamp_format {
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.to_rfc3339())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;

        if let Ok(dt) = DateTime::parse_from_rfc3339(&s) {
            return Ok(dt.with_timezone(&Utc));
        }

        // Date-only input (the date picker posts YYYY-MM-DD) pins to midnight UTC
        if let Ok(date) = NaiveDate::parse_from_str(&s, "%Y-%m-%d") {
            return Ok(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0).unwrap_or_default()));
        }

        Err(serde::de::Error::custom(format!(
            "Invalid timestamp format: {}. Expected ISO 8601/RFC3339 or YYYY-MM-DD",
            s
        )))
    }
}

mod decimal_input_format {
    use rust_decimal::Decimal;
    use serde::{self, Deserialize, Deserializer};
    use serde_json::Number;
    use std::str::FromStr;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum DecimalInput {
        String(String),
        Number(Number),
    }

    fn parse_decimal_value(value: &str) -> Result<Decimal, String> {
        let trimmed = value.trim();
        Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map_err(|e| format!("Invalid decimal value '{}': {}", value, e))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        match DecimalInput::deserialize(deserializer)? {
            DecimalInput::String(s) => {
                parse_decimal_value(&s).map_err(serde::de::Error::custom)
            }
            DecimalInput::Number(n) => {
                parse_decimal_value(&n.to_string()).map_err(serde::de::Error::custom)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_transaction_accepts_string_amount() {
        let json = r#"{
            "type": "expense",
            "amount": "42.50",
            "description": "Courses",
            "date": "2025-03-15T10:30:00.000Z",
            "categoryId": "cat-1"
        }"#;
        let tx: NewTransaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.amount, dec!(42.50));
        assert_eq!(tx.transaction_type, TransactionType::Expense);
    }

    #[test]
    fn test_new_transaction_accepts_number_amount_and_bare_date() {
        let json = r#"{
            "type": "INCOME",
            "amount": 1500,
            "description": null,
            "date": "2025-03-01",
            "categoryId": "cat-2"
        }"#;
        let tx: NewTransaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.amount, dec!(1500));
        assert_eq!(tx.date.day(), 1);
        assert_eq!(tx.date.month(), 3);
    }

    #[test]
    fn test_new_transaction_rejects_garbage_amount() {
        let json = r#"{
            "type": "EXPENSE",
            "amount": "a lot",
            "description": null,
            "date": "2025-03-01",
            "categoryId": "cat-2"
        }"#;
        assert!(serde_json::from_str::<NewTransaction>(json).is_err());
    }
}
