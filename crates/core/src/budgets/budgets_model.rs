//! Budget domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::categories::Category;

/// A monthly spending ceiling for one category. Unique per
/// (user, category, month, year).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    pub limit: Decimal,
    pub month: i32,
    pub year: i32,
    pub category_id: String,
    pub user_id: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// A budget with its category embedded, as returned by list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetWithCategory {
    #[serde(flatten)]
    pub budget: Budget,
    pub category: Category,
}

/// Input model for setting a budget: the limit for one category in the
/// current month. Month and year are supplied by the service, not the
/// client.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BudgetUpsert {
    pub category_id: String,
    #[serde(deserialize_with = "limit_input::deserialize")]
    pub limit: Decimal,
}

/// Input model for adjusting an existing budget; the limit is the only
/// mutable field.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BudgetLimitUpdate {
    #[serde(deserialize_with = "limit_input::deserialize")]
    pub limit: Decimal,
}

// Limits arrive as numbers or numeric strings, same as transaction amounts.
mod limit_input {
    use rust_decimal::Decimal;
    use serde::{self, Deserialize, Deserializer};
    use serde_json::Number;
    use std::str::FromStr;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum LimitInput {
        String(String),
        Number(Number),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = match LimitInput::deserialize(deserializer)? {
            LimitInput::String(s) => s,
            LimitInput::Number(n) => n.to_string(),
        };
        let trimmed = raw.trim();
        Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map_err(|e| {
                serde::de::Error::custom(format!("Invalid limit value '{}': {}", raw, e))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_budget_upsert_accepts_string_limit() {
        let upsert: BudgetUpsert =
            serde_json::from_str(r#"{"categoryId": "cat-1", "limit": "300"}"#).unwrap();
        assert_eq!(upsert.limit, dec!(300));
    }

    #[test]
    fn test_budget_upsert_accepts_number_limit() {
        let upsert: BudgetUpsert =
            serde_json::from_str(r#"{"categoryId": "cat-1", "limit": 250.5}"#).unwrap();
        assert_eq!(upsert.limit, dec!(250.5));
    }
}
