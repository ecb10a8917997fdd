//! Text search and column sorting for the expense list.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::{
    expense::Expense,
    format::{format_currency, format_date},
};

/// The column used to sort the expense list.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Chronological order.
    #[default]
    Date,
    /// Case-insensitive alphabetical order of the category.
    Category,
    /// Numeric order of the amount.
    Amount,
    /// Case-insensitive alphabetical order of the description.
    Description,
}

impl SortKey {
    /// All sort keys in column order.
    pub const ALL: [SortKey; 4] = [
        SortKey::Date,
        SortKey::Category,
        SortKey::Amount,
        SortKey::Description,
    ];

    /// The value used for this key in query strings.
    pub fn as_query_value(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Category => "category",
            Self::Amount => "amount",
            Self::Description => "description",
        }
    }

    /// The column heading for this key.
    pub fn label(self) -> &'static str {
        match self {
            Self::Date => "Date",
            Self::Category => "Category",
            Self::Amount => "Amount",
            Self::Description => "Description",
        }
    }

    fn compare(self, a: &Expense, b: &Expense) -> Ordering {
        match self {
            Self::Date => a.date.cmp(&b.date),
            Self::Category => compare_case_insensitive(&a.category, &b.category),
            Self::Amount => a.amount.total_cmp(&b.amount),
            Self::Description => compare_case_insensitive(&a.description, &b.description),
        }
    }
}

/// Whether sorted values go from smallest to largest or the other way around.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first.
    Ascending,
    /// Largest first.
    #[default]
    Descending,
}

impl SortDirection {
    /// The value used for this direction in query strings.
    pub fn as_query_value(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }

    /// The other direction.
    pub fn reversed(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Returns the expenses that match `query`, sorted by `sort_key` in `direction`.
///
/// An expense matches when `query` appears, ignoring case, in its category,
/// its description, its formatted amount (e.g. "₹1,234.50") or its formatted
/// date (e.g. "Jan 5, 2024"). An empty query matches every expense.
///
/// Expenses with equal sort keys keep their relative order in both directions.
pub fn search_and_sort(
    expenses: &[Expense],
    query: &str,
    sort_key: SortKey,
    direction: SortDirection,
) -> Vec<Expense> {
    let query = query.to_lowercase();

    let mut matches: Vec<Expense> = expenses
        .iter()
        .filter(|expense| matches_query(expense, &query))
        .cloned()
        .collect();

    match direction {
        SortDirection::Ascending => matches.sort_by(|a, b| sort_key.compare(a, b)),
        SortDirection::Descending => matches.sort_by(|a, b| sort_key.compare(b, a)),
    }

    matches
}

/// `query` must already be lowercase.
fn matches_query(expense: &Expense, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    expense.category.to_lowercase().contains(query)
        || expense.description.to_lowercase().contains(query)
        || format_currency(expense.amount).to_lowercase().contains(query)
        || format_date(expense.date).to_lowercase().contains(query)
}

fn compare_case_insensitive(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
