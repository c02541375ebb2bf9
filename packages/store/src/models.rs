//! # Domain models for users and expenses
//!
//! Defines the data structures exchanged with the Track Craft backend. These
//! types are `Serialize + Deserialize` with field names matching the wire
//! format exactly, so they can be fed straight to and from the REST client.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`User`] | An account as returned by `/users/*`. Carries the server-assigned id, email, display name, and the optional monthly spending limit. |
//! | [`Category`] | The closed set of expense categories. Serialises to the human-readable wire string (e.g. `"Food & Dining"`). |
//! | [`Expense`] | A recorded expense owned by a user, with its server-assigned id. |
//! | [`NewExpense`] | The validated payload for creating or fully replacing an expense (everything but the identifiers). |
//! | [`TokenResponse`] | The `/login` response: a bearer token plus its type. |

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An account as the backend reports it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
    /// Monthly spending limit; `None` when the user has not set one.
    #[serde(default)]
    pub monthly_limit: Option<f64>,
}

/// The fixed set of expense categories.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Food & Dining")]
    FoodAndDining,
    #[serde(rename = "Transportation")]
    Transportation,
    #[serde(rename = "Shopping")]
    Shopping,
    #[serde(rename = "Entertainment")]
    Entertainment,
    #[serde(rename = "Bills & Utilities")]
    BillsAndUtilities,
    #[serde(rename = "Healthcare")]
    Healthcare,
    #[serde(rename = "Other")]
    Other,
}

impl Category {
    /// Every category, in display order for select menus.
    pub const ALL: [Category; 7] = [
        Category::FoodAndDining,
        Category::Transportation,
        Category::Shopping,
        Category::Entertainment,
        Category::BillsAndUtilities,
        Category::Healthcare,
        Category::Other,
    ];

    /// The wire/display string for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::FoodAndDining => "Food & Dining",
            Category::Transportation => "Transportation",
            Category::Shopping => "Shopping",
            Category::Entertainment => "Entertainment",
            Category::BillsAndUtilities => "Bills & Utilities",
            Category::Healthcare => "Healthcare",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or(())
    }
}

/// A recorded expense, as listed by `/expenses/get_expenses`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub user_id: i64,
    pub amount: f64,
    pub description: String,
    pub category: Category,
    /// Calendar date of the expense, `YYYY-MM-DD` on the wire.
    pub date: NaiveDate,
}

/// Payload for creating an expense or fully replacing an existing one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewExpense {
    pub amount: f64,
    pub description: String,
    pub category: Category,
    pub date: NaiveDate,
}

/// The `/login` response body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_wire_strings_round_trip() {
        for cat in Category::ALL {
            let parsed: Category = cat.as_str().parse().unwrap();
            assert_eq!(parsed, cat);

            let json = serde_json::to_string(&cat).unwrap();
            assert_eq!(json, format!("\"{}\"", cat.as_str()));
            let back: Category = serde_json::from_str(&json).unwrap();
            assert_eq!(back, cat);
        }
    }

    #[test]
    fn unknown_category_is_rejected() {
        assert!("Groceries".parse::<Category>().is_err());
        assert!("food & dining".parse::<Category>().is_err());
    }

    #[test]
    fn expense_deserializes_from_backend_shape() {
        let json = r#"{
            "id": 7,
            "user_id": 3,
            "amount": 42.5,
            "description": "Lunch downtown",
            "category": "Food & Dining",
            "date": "2026-08-02"
        }"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.id, 7);
        assert_eq!(expense.category, Category::FoodAndDining);
        assert_eq!(expense.date, NaiveDate::from_ymd_opt(2026, 8, 2).unwrap());
    }

    #[test]
    fn user_without_limit_deserializes() {
        let user: User =
            serde_json::from_str(r#"{"id":1,"email":"a@b.c","name":"A"}"#).unwrap();
        assert_eq!(user.monthly_limit, None);

        let user: User = serde_json::from_str(
            r#"{"id":1,"email":"a@b.c","name":"A","monthly_limit":null}"#,
        )
        .unwrap();
        assert_eq!(user.monthly_limit, None);

        let user: User = serde_json::from_str(
            r#"{"id":1,"email":"a@b.c","name":"A","monthly_limit":200.0}"#,
        )
        .unwrap();
        assert_eq!(user.monthly_limit, Some(200.0));
    }
}
