//! Pure functions that turn a list of expenses into the views shown to the user.
//!
//! Nothing in this module touches the database or the clock: callers pass in
//! the expenses and the current date.

mod buckets;
mod preferences;
mod search;
mod summary;
mod timeframe;
mod totals;

pub use buckets::{Bucket, bucket_by_period, ordered_bucket_keys};
pub use preferences::ViewPreferences;
pub use search::{SortDirection, SortKey, search_and_sort};
pub use summary::{DashboardSummary, summarize};
pub use timeframe::{Timeframe, filter_by_timeframe};
pub use totals::{
    TOP_EXPENSES_COUNT, average_per_day, sorted_category_totals, sum_by_category, top_expenses,
    total_amount,
};
