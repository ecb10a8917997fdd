//! The view state shared by the dashboard and expense list pages.

use serde::{Deserialize, Serialize};

use crate::{
    aggregation::{SortDirection, SortKey, Timeframe, search_and_sort},
    expense::Expense,
};

/// How the user wants to view their expenses.
///
/// Read from the page query string, e.g.
/// `?timeframe=week&query=food&sort=amount&direction=ascending`.
/// Any missing field takes its default: the last month, no search text and
/// the newest expenses first.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewPreferences {
    /// The window of time summarised on the dashboard.
    pub timeframe: Timeframe,
    /// Text to search for in the expense list.
    pub query: String,
    /// The column the expense list is sorted by.
    #[serde(rename = "sort")]
    pub sort_key: SortKey,
    /// The direction the expense list is sorted in.
    pub direction: SortDirection,
}

impl ViewPreferences {
    /// The preferences after the user clicks the header of the `sort_key` column.
    ///
    /// Clicking the column that is already sorted ascending switches it to
    /// descending. Clicking any other column, or a column sorted descending,
    /// sorts that column ascending.
    pub fn toggle_sort(&self, sort_key: SortKey) -> Self {
        let direction =
            if self.sort_key == sort_key && self.direction == SortDirection::Ascending {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            };

        Self {
            sort_key,
            direction,
            ..self.clone()
        }
    }

    /// The same preferences with a different timeframe.
    pub fn with_timeframe(&self, timeframe: Timeframe) -> Self {
        Self {
            timeframe,
            ..self.clone()
        }
    }

    /// Searches and sorts `expenses` according to these preferences.
    pub fn apply(&self, expenses: &[Expense]) -> Vec<Expense> {
        search_and_sort(expenses, &self.query, self.sort_key, self.direction)
    }

    /// Appends these preferences to `path` as a URL query string.
    pub fn to_href(&self, path: &str) -> String {
        match serde_urlencoded::to_string(self) {
            Ok(query_string) => format!("{path}?{query_string}"),
            Err(error) => {
                tracing::error!("Could not encode view preferences {self:?}: {error}");
                path.to_owned()
            }
        }
    }
}
