//! Category totals, top expenses and the summary statistics shown on the dashboard.

use std::collections::HashMap;

use crate::{aggregation::Bucket, expense::Expense};

/// The number of expenses shown in the "largest expenses" table.
pub const TOP_EXPENSES_COUNT: usize = 5;

/// Sums the expense amounts for each category.
///
/// Categories that do not appear in `expenses` are not in the map.
pub fn sum_by_category(expenses: &[Expense]) -> HashMap<String, f64> {
    let mut totals: HashMap<String, f64> = HashMap::new();

    for expense in expenses {
        *totals.entry(expense.category.clone()).or_insert(0.0) += expense.amount;
    }

    totals
}

/// Sorts category totals from the largest to the smallest total.
///
/// Categories with the same total are sorted by name so that charts and
/// tables render in a stable order.
pub fn sorted_category_totals(totals: &HashMap<String, f64>) -> Vec<(String, f64)> {
    let mut sorted: Vec<(String, f64)> = totals
        .iter()
        .map(|(category, total)| (category.clone(), *total))
        .collect();
    sorted.sort_by(|(a_name, a_total), (b_name, b_total)| {
        b_total.total_cmp(a_total).then_with(|| a_name.cmp(b_name))
    });

    sorted
}

/// Returns up to `n` expenses with the largest amounts, largest first.
///
/// Expenses with equal amounts keep their relative order from `expenses`.
pub fn top_expenses(expenses: &[Expense], n: usize) -> Vec<Expense> {
    let mut sorted = expenses.to_vec();
    sorted.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    sorted.truncate(n);

    sorted
}

/// The sum of all expense amounts.
pub fn total_amount(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|expense| expense.amount).sum()
}

/// Divides `total` by the number of expenses counted across `buckets`.
///
/// This is the average per recorded expense within the period buckets, not
/// per calendar day. Returns zero when there are no buckets.
pub fn average_per_day(total: f64, buckets: &HashMap<String, Bucket>) -> f64 {
    let count: usize = buckets.values().map(|bucket| bucket.count).sum();

    if count == 0 {
        return 0.0;
    }

    total / count as f64
}
