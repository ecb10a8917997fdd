use time::Date;

use crate::{
    aggregation::{
        Bucket, TOP_EXPENSES_COUNT, Timeframe, average_per_day, bucket_by_period,
        filter_by_timeframe, ordered_bucket_keys, sorted_category_totals, sum_by_category,
        top_expenses, total_amount,
    },
    expense::Expense,
};

/// Everything the dashboard displays for one timeframe.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    /// The timeframe the summary covers.
    pub timeframe: Timeframe,
    /// The total per category, largest first.
    pub category_totals: Vec<(String, f64)>,
    /// The period buckets in display order.
    pub buckets: Vec<(String, Bucket)>,
    /// The largest expenses, largest first.
    pub top_expenses: Vec<Expense>,
    /// The sum of all expenses in the timeframe.
    pub total: f64,
    /// The total divided by the number of expenses counted in the buckets.
    pub average_per_day: f64,
    /// The number of distinct categories in the timeframe.
    pub category_count: usize,
}

/// Summarises the expenses that fall within `timeframe` as of `today`.
pub fn summarize(expenses: &[Expense], timeframe: Timeframe, today: Date) -> DashboardSummary {
    let filtered = filter_by_timeframe(expenses, timeframe, today);

    let category_totals = sum_by_category(&filtered);
    let bucket_map = bucket_by_period(&filtered, timeframe);
    let buckets = ordered_bucket_keys(timeframe, &bucket_map)
        .into_iter()
        .filter_map(|key| {
            let bucket = bucket_map.get(&key).copied()?;
            Some((key, bucket))
        })
        .collect();
    let total = total_amount(&filtered);

    DashboardSummary {
        timeframe,
        category_count: category_totals.len(),
        category_totals: sorted_category_totals(&category_totals),
        buckets,
        top_expenses: top_expenses(&filtered, TOP_EXPENSES_COUNT),
        total,
        average_per_day: average_per_day(total, &bucket_map),
    }
}
