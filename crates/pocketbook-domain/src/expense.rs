//! Domain model for a single recorded expense.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::*;

/// One spending entry. Expenses are append-only once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ExpenseRecord")]
pub struct Expense {
    amount: f64,
    category: String,
    date: NaiveDate,
}

impl Expense {
    pub fn new(
        amount: f64,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Result<Self, ValidationError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ValidationError::NonPositiveAmount(amount));
        }
        let category = category.into().trim().to_string();
        if category.is_empty() {
            return Err(ValidationError::EmptyCategory);
        }
        Ok(Self {
            amount,
            category,
            date,
        })
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Amounted for Expense {
    fn amount(&self) -> f64 {
        self.amount
    }
}

/// Unvalidated wire shape; every load passes through [`Expense::new`].
#[derive(Deserialize)]
struct ExpenseRecord {
    amount: f64,
    category: String,
    date: String,
}

impl TryFrom<ExpenseRecord> for Expense {
    type Error = ValidationError;

    fn try_from(raw: ExpenseRecord) -> Result<Self, Self::Error> {
        let date = parse_iso_date(&raw.date)?;
        Expense::new(raw.amount, raw.category, date)
    }
}
