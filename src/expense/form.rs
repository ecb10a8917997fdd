//! The JSON body submitted to create or replace an expense.

use serde::Deserialize;
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::{error::ValidationError, expense::NewExpense};

const ISO_DATE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// The largest amount a single expense may have.
pub const MAX_AMOUNT: f64 = 1_000_000_000_000.0;

/// An amount is accepted either as a JSON number or as the text of a number,
/// which is what HTML number inputs produce.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    /// A JSON number.
    Number(f64),
    /// A string such as `"12.50"`.
    Text(String),
}

/// The unvalidated fields of an expense.
///
/// Every field is optional so that a missing field can be reported with a
/// helpful message rather than a generic deserialization error. Unknown
/// fields such as `_id` are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ExpenseForm {
    /// How much was spent.
    pub amount: Option<AmountInput>,
    /// What kind of spending this was.
    pub category: Option<String>,
    /// A free text note.
    pub description: Option<String>,
    /// The day the money was spent, as `YYYY-MM-DD`.
    ///
    /// A full timestamp such as `2024-01-05T00:00:00.000Z` is accepted and
    /// its time is ignored.
    pub date: Option<String>,
}

impl ExpenseForm {
    /// Check the required fields and convert the form into a [NewExpense].
    ///
    /// The category and description are trimmed of surrounding whitespace and
    /// a missing description becomes an empty string.
    ///
    /// # Errors
    /// Returns the first [ValidationError] found, checking the amount, then
    /// the category, then the date.
    pub fn validate(self) -> Result<NewExpense, ValidationError> {
        let amount = parse_amount(self.amount)?;

        let category = self
            .category
            .map(|category| category.trim().to_owned())
            .filter(|category| !category.is_empty())
            .ok_or(ValidationError::MissingCategory)?;

        let date = parse_date(self.date)?;

        let description = self
            .description
            .map(|description| description.trim().to_owned())
            .unwrap_or_default();

        Ok(NewExpense {
            amount,
            category,
            description,
            date,
        })
    }
}

fn parse_amount(amount: Option<AmountInput>) -> Result<f64, ValidationError> {
    let amount = match amount {
        None => return Err(ValidationError::MissingAmount),
        Some(AmountInput::Number(number)) => number,
        Some(AmountInput::Text(text)) => {
            let text = text.trim();

            if text.is_empty() {
                return Err(ValidationError::MissingAmount);
            }

            text.parse::<f64>()
                .map_err(|_| ValidationError::InvalidAmount(text.to_owned()))?
        }
    };

    if !amount.is_finite() || amount < 0.0 {
        return Err(ValidationError::InvalidAmount(amount.to_string()));
    }

    if amount > MAX_AMOUNT {
        return Err(ValidationError::AmountTooLarge(amount.to_string()));
    }

    Ok(amount)
}

fn parse_date(date: Option<String>) -> Result<Date, ValidationError> {
    let text = date.unwrap_or_default();
    let text = text.trim();

    if text.is_empty() {
        return Err(ValidationError::MissingDate);
    }

    let date_part = text.split_once('T').map_or(text, |(date, _)| date);

    Date::parse(date_part, ISO_DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(text.to_owned()))
}
