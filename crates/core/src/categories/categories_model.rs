//! Category domain models.

use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::{Error, ValidationError};

/// Whether a category classifies income or expenses.
///
/// Stored as `INCOME` / `EXPENSE` text. Clients send the value in whatever
/// case their form produced, so deserialization is case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryType {
    Income,
    Expense,
}

impl CategoryType {
    pub fn as_db_str(&self) -> &'static str {
        match self {
            CategoryType::Income => "INCOME",
            CategoryType::Expense => "EXPENSE",
        }
    }
}

impl FromStr for CategoryType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "INCOME" => Ok(CategoryType::Income),
            "EXPENSE" => Ok(CategoryType::Expense),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown category type '{}'",
                other
            )))),
        }
    }
}

impl Serialize for CategoryType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_db_str())
    }
}

impl<'de> Deserialize<'de> for CategoryType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        CategoryType::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Domain model representing a transaction category owned by one user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub category_type: CategoryType,
    pub user_id: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new category.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub name: String,
    #[serde(rename = "type")]
    pub category_type: CategoryType,
}

/// Input model for renaming a category. The type of an existing category
/// never changes; transactions already recorded against it rely on it.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CategoryUpdate {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_type_round_trip() {
        assert_eq!(
            serde_json::to_string(&CategoryType::Income).unwrap(),
            "\"INCOME\""
        );
        assert_eq!(
            serde_json::to_string(&CategoryType::Expense).unwrap(),
            "\"EXPENSE\""
        );
        assert_eq!(
            serde_json::from_str::<CategoryType>("\"EXPENSE\"").unwrap(),
            CategoryType::Expense
        );
    }

    #[test]
    fn test_category_type_accepts_lowercase() {
        assert_eq!(
            serde_json::from_str::<CategoryType>("\"income\"").unwrap(),
            CategoryType::Income
        );
        assert_eq!(
            serde_json::from_str::<CategoryType>("\"Expense\"").unwrap(),
            CategoryType::Expense
        );
    }

    #[test]
    fn test_category_type_rejects_unknown() {
        assert!(serde_json::from_str::<CategoryType>("\"SAVINGS\"").is_err());
    }
}
