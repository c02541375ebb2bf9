//! # Monthly aggregation and budget status
//!
//! Pure derivations over the expense collection. Views recompute these on
//! every render; the data set is a single user's expenses, so no caching is
//! involved.
//!
//! An expense belongs to a month iff its date's calendar year and month
//! match; there are no rolling windows. Categories with no spending in the
//! month are absent from the breakdown rather than present with a zero.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

use crate::models::{Category, Expense};

/// Totals for a single calendar month.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MonthlySummary {
    /// Sum over all expenses in the month; 0 for an empty month.
    pub total: f64,
    /// Per-category sums; only categories with at least one expense appear.
    pub by_category: HashMap<Category, f64>,
}

/// Sum the expenses that fall in the given calendar month.
pub fn monthly_summary(expenses: &[Expense], year: i32, month: u32) -> MonthlySummary {
    let mut summary = MonthlySummary::default();
    for expense in expenses {
        if expense.date.year() == year && expense.date.month() == month {
            summary.total += expense.amount;
            *summary.by_category.entry(expense.category).or_insert(0.0) += expense.amount;
        }
    }
    summary
}

/// Spending measured against the user's monthly limit.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BudgetStatus {
    /// Percentage of the limit spent, unclamped (150.0 means 50% over).
    /// 0 when no limit is set. Views clamp the display bar at 100.
    pub percent_used: f64,
    /// True iff a limit is set and spending exceeds it.
    pub over_budget: bool,
}

/// Derive budget usage from the month's total and the optional limit.
pub fn budget_status(total_spent: f64, monthly_limit: Option<f64>) -> BudgetStatus {
    match monthly_limit {
        Some(limit) if limit > 0.0 => BudgetStatus {
            percent_used: total_spent / limit * 100.0,
            over_budget: total_spent > limit,
        },
        _ => BudgetStatus::default(),
    }
}

/// The client's current calendar date.
///
/// Platform-aware: the browser clock on WASM, the system clock elsewhere.
pub fn today() -> NaiveDate {
    #[cfg(target_arch = "wasm32")]
    {
        let now = js_sys::Date::new_0();
        NaiveDate::from_ymd_opt(
            now.get_full_year() as i32,
            now.get_month() + 1,
            now.get_date(),
        )
        .unwrap_or_default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        chrono::Local::now().date_naive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(id: i64, amount: f64, category: Category, date: &str) -> Expense {
        Expense {
            id,
            user_id: 1,
            amount,
            description: format!("expense {id}"),
            category,
            date: date.parse().unwrap(),
        }
    }

    #[test]
    fn sums_only_the_requested_month() {
        let expenses = vec![
            expense(1, 100.0, Category::FoodAndDining, "2026-08-03"),
            expense(2, 50.0, Category::Shopping, "2026-08-20"),
            expense(3, 999.0, Category::FoodAndDining, "2026-07-28"),
        ];

        let summary = monthly_summary(&expenses, 2026, 8);
        assert_eq!(summary.total, 150.0);
        assert_eq!(summary.by_category.len(), 2);
        assert_eq!(summary.by_category[&Category::FoodAndDining], 100.0);
        assert_eq!(summary.by_category[&Category::Shopping], 50.0);
        assert!(!summary.by_category.contains_key(&Category::Healthcare));
    }

    #[test]
    fn same_month_of_a_different_year_is_excluded() {
        let expenses = vec![
            expense(1, 10.0, Category::Other, "2026-08-01"),
            expense(2, 20.0, Category::Other, "2025-08-01"),
        ];
        let summary = monthly_summary(&expenses, 2026, 8);
        assert_eq!(summary.total, 10.0);
    }

    #[test]
    fn empty_collection_sums_to_zero() {
        let summary = monthly_summary(&[], 2026, 8);
        assert_eq!(summary.total, 0.0);
        assert!(summary.by_category.is_empty());
    }

    #[test]
    fn multiple_expenses_in_one_category_accumulate() {
        let expenses = vec![
            expense(1, 30.0, Category::Healthcare, "2026-08-01"),
            expense(2, 12.5, Category::Healthcare, "2026-08-15"),
        ];
        let summary = monthly_summary(&expenses, 2026, 8);
        assert_eq!(summary.by_category[&Category::Healthcare], 42.5);
    }

    #[test]
    fn budget_under_and_over() {
        let status = budget_status(150.0, Some(200.0));
        assert_eq!(status.percent_used, 75.0);
        assert!(!status.over_budget);

        let status = budget_status(150.0, Some(100.0));
        assert_eq!(status.percent_used, 150.0);
        assert!(status.over_budget);
    }

    #[test]
    fn spending_exactly_the_limit_is_not_over() {
        let status = budget_status(100.0, Some(100.0));
        assert_eq!(status.percent_used, 100.0);
        assert!(!status.over_budget);
    }

    #[test]
    fn no_limit_means_zero_usage_and_never_over() {
        let status = budget_status(150.0, None);
        assert_eq!(status.percent_used, 0.0);
        assert!(!status.over_budget);

        // A zero limit behaves like no limit rather than dividing by zero.
        let status = budget_status(150.0, Some(0.0));
        assert_eq!(status.percent_used, 0.0);
        assert!(!status.over_budget);
    }
}
