use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Datelike, Utc};
use log::debug;
use rust_decimal::Decimal;

use super::statistics_model::{
    BudgetProgress, CategorySpend, DashboardSummary, MonthlyTotals, YearlySummary,
};
use crate::budgets::{BudgetRepositoryTrait, BudgetWithCategory};
use crate::constants::{DISPLAY_DECIMAL_PRECISION, TOP_CATEGORIES_LIMIT};
use crate::errors::Result;
use crate::transactions::{TransactionRepositoryTrait, TransactionType, TransactionWithCategory};

/// Trait for the statistics service.
pub trait StatisticsServiceTrait: Send + Sync {
    /// Current-month totals, expense breakdown, and budget progress.
    fn get_dashboard(&self, user_id: &str) -> Result<DashboardSummary>;

    /// Twelve-month series and derived ratios for one year (defaults to the
    /// current year).
    fn get_yearly_summary(&self, user_id: &str, year: Option<i32>) -> Result<YearlySummary>;
}

pub struct StatisticsService {
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    budget_repository: Arc<dyn BudgetRepositoryTrait>,
}

impl StatisticsService {
    pub fn new(
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
        budget_repository: Arc<dyn BudgetRepositoryTrait>,
    ) -> Self {
        StatisticsService {
            transaction_repository,
            budget_repository,
        }
    }

    fn in_month(t: &TransactionWithCategory, month: i32, year: i32) -> bool {
        t.transaction.date.month() as i32 == month && t.transaction.date.year() == year
    }

    fn sum_by_type(
        transactions: &[TransactionWithCategory],
        transaction_type: TransactionType,
    ) -> Decimal {
        transactions
            .iter()
            .filter(|t| t.transaction.transaction_type == transaction_type)
            .map(|t| t.transaction.amount)
            .sum()
    }

    /// Expense totals grouped by the given key extractor, sorted by amount
    /// descending (name ascending on ties, so output is deterministic).
    fn expenses_grouped_by<F>(
        transactions: &[TransactionWithCategory],
        key: F,
    ) -> Vec<CategorySpend>
    where
        F: Fn(&TransactionWithCategory) -> String,
    {
        let mut by_key: HashMap<String, Decimal> = HashMap::new();
        for t in transactions
            .iter()
            .filter(|t| t.transaction.transaction_type == TransactionType::Expense)
        {
            *by_key.entry(key(t)).or_insert(Decimal::ZERO) += t.transaction.amount;
        }

        let mut rows: Vec<CategorySpend> = by_key
            .into_iter()
            .map(|(name, amount)| CategorySpend {
                name,
                amount: amount.round_dp(DISPLAY_DECIMAL_PRECISION),
            })
            .collect();
        rows.sort_by(|a, b| b.amount.cmp(&a.amount).then_with(|| a.name.cmp(&b.name)));
        rows
    }

    fn budget_progress(
        budgets: Vec<BudgetWithCategory>,
        month_transactions: &[TransactionWithCategory],
    ) -> Vec<BudgetProgress> {
        let mut spent_by_category: HashMap<String, Decimal> = HashMap::new();
        for t in month_transactions
            .iter()
            .filter(|t| t.transaction.transaction_type == TransactionType::Expense)
        {
            *spent_by_category
                .entry(t.transaction.category_id.clone())
                .or_insert(Decimal::ZERO) += t.transaction.amount;
        }

        budgets
            .into_iter()
            .map(|budget| {
                let spent = spent_by_category
                    .get(&budget.budget.category_id)
                    .copied()
                    .unwrap_or(Decimal::ZERO)
                    .round_dp(DISPLAY_DECIMAL_PRECISION);
                let limit = budget.budget.limit;
                let percentage = if limit > Decimal::ZERO {
                    (spent / limit * Decimal::from(100)).round_dp(DISPLAY_DECIMAL_PRECISION)
                } else {
                    Decimal::ZERO
                };
                BudgetProgress {
                    over_budget: spent > limit,
                    spent,
                    percentage,
                    budget,
                }
            })
            .collect()
    }

    fn dashboard_for_month(
        transactions: &[TransactionWithCategory],
        budgets: Vec<BudgetWithCategory>,
        month: i32,
        year: i32,
    ) -> DashboardSummary {
        let month_transactions: Vec<TransactionWithCategory> = transactions
            .iter()
            .filter(|t| Self::in_month(t, month, year))
            .cloned()
            .collect();

        let total_income = Self::sum_by_type(&month_transactions, TransactionType::Income)
            .round_dp(DISPLAY_DECIMAL_PRECISION);
        let total_expenses = Self::sum_by_type(&month_transactions, TransactionType::Expense)
            .round_dp(DISPLAY_DECIMAL_PRECISION);

        DashboardSummary {
            month,
            year,
            total_income,
            total_expenses,
            balance: total_income - total_expenses,
            expenses_by_category: Self::expenses_grouped_by(&month_transactions, |t| {
                t.category.name.clone()
            }),
            budgets: Self::budget_progress(budgets, &month_transactions),
        }
    }

    fn yearly_summary_for(
        all_transactions: &[TransactionWithCategory],
        year: i32,
    ) -> YearlySummary {
        let year_transactions: Vec<TransactionWithCategory> = all_transactions
            .iter()
            .filter(|t| t.transaction.date.year() == year)
            .cloned()
            .collect();

        let monthly = (1..=12u32)
            .map(|month| {
                let month_transactions: Vec<TransactionWithCategory> = year_transactions
                    .iter()
                    .filter(|t| t.transaction.date.month() == month)
                    .cloned()
                    .collect();
                let income = Self::sum_by_type(&month_transactions, TransactionType::Income)
                    .round_dp(DISPLAY_DECIMAL_PRECISION);
                let expenses = Self::sum_by_type(&month_transactions, TransactionType::Expense)
                    .round_dp(DISPLAY_DECIMAL_PRECISION);
                MonthlyTotals {
                    month,
                    income,
                    expenses,
                    balance: income - expenses,
                }
            })
            .collect();

        let total_income = Self::sum_by_type(&year_transactions, TransactionType::Income)
            .round_dp(DISPLAY_DECIMAL_PRECISION);
        let total_expenses = Self::sum_by_type(&year_transactions, TransactionType::Expense)
            .round_dp(DISPLAY_DECIMAL_PRECISION);

        let twelve = Decimal::from(12);
        let savings_rate = if total_income > Decimal::ZERO {
            ((total_income - total_expenses) / total_income * Decimal::from(100))
                .round_dp(DISPLAY_DECIMAL_PRECISION)
        } else {
            Decimal::ZERO
        };

        let mut top_categories =
            Self::expenses_grouped_by(&year_transactions, |t| t.category.name.clone());
        top_categories.truncate(TOP_CATEGORIES_LIMIT);

        let mut available_years: Vec<i32> = all_transactions
            .iter()
            .map(|t| t.transaction.date.year())
            .collect();
        available_years.sort_unstable();
        available_years.dedup();
        available_years.reverse();

        YearlySummary {
            year,
            monthly,
            top_categories,
            total_income,
            total_expenses,
            average_monthly_income: (total_income / twelve).round_dp(DISPLAY_DECIMAL_PRECISION),
            average_monthly_expenses: (total_expenses / twelve)
                .round_dp(DISPLAY_DECIMAL_PRECISION),
            savings_rate,
            available_years,
        }
    }
}

impl StatisticsServiceTrait for StatisticsService {
    fn get_dashboard(&self, user_id: &str) -> Result<DashboardSummary> {
        debug!("Computing dashboard summary for user {}", user_id);
        let today = Utc::now().naive_utc().date();
        let (month, year) = (today.month() as i32, today.year());

        let transactions = self.transaction_repository.list_transactions(user_id)?;
        let budgets = self
            .budget_repository
            .list_budgets_for_month(user_id, month, year)?;

        Ok(Self::dashboard_for_month(
            &transactions,
            budgets,
            month,
            year,
        ))
    }

    fn get_yearly_summary(&self, user_id: &str, year: Option<i32>) -> Result<YearlySummary> {
        let year = year.unwrap_or_else(|| Utc::now().naive_utc().date().year());
        debug!("Computing yearly summary for user {} year {}", user_id, year);

        let transactions = self.transaction_repository.list_transactions(user_id)?;
        Ok(Self::yearly_summary_for(&transactions, year))
    }
}
