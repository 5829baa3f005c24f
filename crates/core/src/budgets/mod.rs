//! Budgets module - monthly spending ceilings per category.

mod budgets_model;
mod budgets_service;
mod budgets_traits;

pub use budgets_model::{Budget, BudgetLimitUpdate, BudgetUpsert, BudgetWithCategory};
pub use budgets_service::BudgetService;
pub use budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
