//! # Expense form validation
//!
//! Pure validation for the add-expense and edit-expense forms. Both flows
//! feed the raw form strings into [`validate_expense`], which checks the
//! rules in a fixed order and reports the **first** failure as a
//! [`ValidationError`] naming the offending [`Field`]. Nothing here touches
//! the network; a rejected form never leaves the client.
//!
//! ## Rules, in order
//!
//! 1. amount, description, and category are all present
//! 2. amount parses as a number
//! 3. amount is greater than zero
//! 4. amount does not exceed [`MAX_AMOUNT`]
//! 5. description is at least [`MIN_DESCRIPTION_LEN`] characters once trimmed
//! 6. description, as typed, is at most [`MAX_DESCRIPTION_LEN`] characters
//! 7. category is one of the fixed [`Category`] set
//! 8. the date is not after `today`
//!
//! On success the typed [`NewExpense`] is returned with the description
//! trimmed, ready for submission.

use std::fmt;

use chrono::NaiveDate;

use crate::models::{Category, NewExpense};

/// Upper bound on a single expense amount.
pub const MAX_AMOUNT: f64 = 1_000_000_000.0;
/// Minimum description length after trimming.
pub const MIN_DESCRIPTION_LEN: usize = 3;
/// Maximum description length as typed.
pub const MAX_DESCRIPTION_LEN: usize = 200;

/// Raw form input, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpenseInput {
    pub amount: String,
    pub description: String,
    pub category: String,
    pub date: String,
}

/// The form field a validation error is attributed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Amount,
    Description,
    Category,
    Date,
}

/// A user-facing validation failure for a single field.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidationError {
    pub field: Field,
    pub message: String,
}

impl ValidationError {
    fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validate raw form input against `today` (the client's calendar date).
///
/// Checks stop at the first failing rule; callers present one error at a
/// time.
pub fn validate_expense(
    input: &ExpenseInput,
    today: NaiveDate,
) -> Result<NewExpense, ValidationError> {
    if input.amount.is_empty() {
        return Err(ValidationError::new(
            Field::Amount,
            "Please fill in all fields",
        ));
    }
    if input.description.is_empty() {
        return Err(ValidationError::new(
            Field::Description,
            "Please fill in all fields",
        ));
    }
    if input.category.is_empty() {
        return Err(ValidationError::new(
            Field::Category,
            "Please fill in all fields",
        ));
    }

    let amount: f64 = input.amount.trim().parse().map_err(|_| {
        ValidationError::new(Field::Amount, "Please enter a valid number for amount")
    })?;
    if !(amount > 0.0) {
        return Err(ValidationError::new(
            Field::Amount,
            "Amount must be greater than zero",
        ));
    }
    if amount > MAX_AMOUNT {
        return Err(ValidationError::new(Field::Amount, "Amount is too large"));
    }

    let description = input.description.trim();
    if description.chars().count() < MIN_DESCRIPTION_LEN {
        return Err(ValidationError::new(
            Field::Description,
            "Description must be at least 3 characters long",
        ));
    }
    if input.description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(ValidationError::new(
            Field::Description,
            "Description must be less than 200 characters",
        ));
    }

    let category: Category = input.category.parse().map_err(|_| {
        ValidationError::new(Field::Category, "Please select a valid category")
    })?;

    let date = NaiveDate::parse_from_str(input.date.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::new(Field::Date, "Please enter a valid date"))?;
    if date > today {
        return Err(ValidationError::new(
            Field::Date,
            "Date cannot be in the future",
        ));
    }

    Ok(NewExpense {
        amount,
        description: description.to_string(),
        category,
        date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(amount: &str, description: &str, category: &str, date: &str) -> ExpenseInput {
        ExpenseInput {
            amount: amount.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            date: date.to_string(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
    }

    fn valid() -> ExpenseInput {
        input("25.50", "Bus ticket", "Transportation", "2026-08-05")
    }

    #[test]
    fn accepts_a_well_formed_expense() {
        let expense = validate_expense(&valid(), today()).unwrap();
        assert_eq!(expense.amount, 25.50);
        assert_eq!(expense.description, "Bus ticket");
        assert_eq!(expense.category, Category::Transportation);
        assert_eq!(expense.date, NaiveDate::from_ymd_opt(2026, 8, 5).unwrap());
    }

    #[test]
    fn rejects_missing_fields_first() {
        let mut missing = valid();
        missing.amount.clear();
        let err = validate_expense(&missing, today()).unwrap_err();
        assert_eq!(err.field, Field::Amount);
        assert_eq!(err.message, "Please fill in all fields");

        let mut missing = valid();
        missing.category.clear();
        let err = validate_expense(&missing, today()).unwrap_err();
        assert_eq!(err.field, Field::Category);
    }

    #[test]
    fn rejects_non_numeric_amount() {
        let mut bad = valid();
        bad.amount = "abc".to_string();
        let err = validate_expense(&bad, today()).unwrap_err();
        assert_eq!(err.field, Field::Amount);
        assert_eq!(err.message, "Please enter a valid number for amount");
    }

    #[test]
    fn amount_bounds() {
        for rejected in ["0", "-1", "-0.01"] {
            let mut bad = valid();
            bad.amount = rejected.to_string();
            let err = validate_expense(&bad, today()).unwrap_err();
            assert_eq!(err.field, Field::Amount, "amount {rejected}");
            assert_eq!(err.message, "Amount must be greater than zero");
        }

        let mut bad = valid();
        bad.amount = "1000000000.01".to_string();
        let err = validate_expense(&bad, today()).unwrap_err();
        assert_eq!(err.message, "Amount is too large");

        // The bounds themselves are inclusive/exclusive as the rules state.
        for accepted in ["0.01", "1000000000"] {
            let mut ok = valid();
            ok.amount = accepted.to_string();
            assert!(validate_expense(&ok, today()).is_ok(), "amount {accepted}");
        }
    }

    #[test]
    fn description_length_bounds() {
        let mut bad = valid();
        bad.description = "  ab  ".to_string();
        let err = validate_expense(&bad, today()).unwrap_err();
        assert_eq!(err.field, Field::Description);
        assert_eq!(err.message, "Description must be at least 3 characters long");

        let mut ok = valid();
        ok.description = "abc".to_string();
        assert!(validate_expense(&ok, today()).is_ok());

        let mut bad = valid();
        bad.description = "x".repeat(201);
        let err = validate_expense(&bad, today()).unwrap_err();
        assert_eq!(err.message, "Description must be less than 200 characters");

        let mut ok = valid();
        ok.description = "x".repeat(200);
        assert!(validate_expense(&ok, today()).is_ok());
    }

    #[test]
    fn untrimmed_length_counts_against_the_maximum() {
        // 195 letters padded with 6 spaces: trimmed length is fine but the
        // typed length is 201.
        let mut bad = valid();
        bad.description = format!("{}      ", "x".repeat(195));
        let err = validate_expense(&bad, today()).unwrap_err();
        assert_eq!(err.message, "Description must be less than 200 characters");
    }

    #[test]
    fn description_is_trimmed_on_success() {
        let mut ok = valid();
        ok.description = "  coffee beans  ".to_string();
        let expense = validate_expense(&ok, today()).unwrap();
        assert_eq!(expense.description, "coffee beans");
    }

    #[test]
    fn rejects_unknown_category() {
        let mut bad = valid();
        bad.category = "Groceries".to_string();
        let err = validate_expense(&bad, today()).unwrap_err();
        assert_eq!(err.field, Field::Category);
    }

    #[test]
    fn date_today_accepted_tomorrow_rejected() {
        let mut ok = valid();
        ok.date = "2026-08-06".to_string();
        assert!(validate_expense(&ok, today()).is_ok());

        let mut bad = valid();
        bad.date = "2026-08-07".to_string();
        let err = validate_expense(&bad, today()).unwrap_err();
        assert_eq!(err.field, Field::Date);
        assert_eq!(err.message, "Date cannot be in the future");
    }

    #[test]
    fn rejects_malformed_date() {
        let mut bad = valid();
        bad.date = "08/05/2026".to_string();
        let err = validate_expense(&bad, today()).unwrap_err();
        assert_eq!(err.field, Field::Date);
    }

    #[test]
    fn reports_only_the_first_failure() {
        // Both the amount and the description are invalid; the amount rule
        // runs first.
        let bad = input("-5", "ab", "Transportation", "2026-08-05");
        let err = validate_expense(&bad, today()).unwrap_err();
        assert_eq!(err.field, Field::Amount);
    }
}
