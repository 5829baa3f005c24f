use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::budgets::BudgetWithCategory;

/// Amount spent (or earned) under one category name. Rows for the pie and
/// bar charts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategorySpend {
    pub name: String,
    pub amount: Decimal,
}

/// A current-month budget with its consumption attached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetProgress {
    #[serde(flatten)]
    pub budget: BudgetWithCategory,
    pub spent: Decimal,
    /// `spent / limit * 100`; zero when the limit is zero. May exceed 100.
    pub percentage: Decimal,
    pub over_budget: bool,
}

/// Current-month overview backing the dashboard page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub month: i32,
    pub year: i32,
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub balance: Decimal,
    pub expenses_by_category: Vec<CategorySpend>,
    pub budgets: Vec<BudgetProgress>,
}

/// Income/expense totals for one calendar month of the selected year.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTotals {
    /// 1-based calendar month.
    pub month: u32,
    pub income: Decimal,
    pub expenses: Decimal,
    pub balance: Decimal,
}

/// One year of statistics backing the statistics page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct YearlySummary {
    pub year: i32,
    /// Always exactly 12 rows, January through December; empty months are
    /// zero rows rather than omitted.
    pub monthly: Vec<MonthlyTotals>,
    pub top_categories: Vec<CategorySpend>,
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub average_monthly_income: Decimal,
    pub average_monthly_expenses: Decimal,
    /// `(income - expenses) / income` as a percentage; zero when the year
    /// had no income.
    pub savings_rate: Decimal,
    /// Distinct years with at least one transaction, newest first.
    pub available_years: Vec<i32>,
}
