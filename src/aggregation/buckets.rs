//! Groups expenses into sub-periods of a timeframe for the dashboard bar chart.

use std::collections::HashMap;

use serde::Serialize;
use time::{Date, Month, Weekday};

use crate::{aggregation::Timeframe, expense::Expense};

/// Weekday labels in the order they are displayed.
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Month labels in the order they are displayed.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// The running total and number of expenses for one sub-period.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct Bucket {
    /// The sum of the amounts in the bucket.
    pub total: f64,
    /// The number of expenses in the bucket.
    pub count: usize,
}

/// Groups expenses by the sub-period of `timeframe` they fall in.
///
/// The key for each expense is:
/// - the weekday abbreviation ("Sun" to "Sat") for [Timeframe::Week],
/// - the day of the month without zero padding ("1" to "31") for [Timeframe::Month],
/// - the month abbreviation ("Jan" to "Dec") for [Timeframe::Year].
///
/// Only sub-periods with at least one expense appear in the map.
pub fn bucket_by_period(expenses: &[Expense], timeframe: Timeframe) -> HashMap<String, Bucket> {
    let mut buckets: HashMap<String, Bucket> = HashMap::new();

    for expense in expenses {
        let bucket = buckets.entry(period_key(expense.date, timeframe)).or_default();
        bucket.total += expense.amount;
        bucket.count += 1;
    }

    buckets
}

/// Orders the keys of `buckets` for display along a chart axis.
///
/// Weekdays run from Sunday to Saturday, days of the month ascend
/// numerically and months run from January to December. Periods without a
/// bucket are left out rather than filled with zeros.
pub fn ordered_bucket_keys(timeframe: Timeframe, buckets: &HashMap<String, Bucket>) -> Vec<String> {
    match timeframe {
        Timeframe::Week => filter_fixed_order(&WEEKDAY_LABELS, buckets),
        Timeframe::Month => {
            let mut keys: Vec<String> = buckets.keys().cloned().collect();
            keys.sort_by(|a, b| {
                day_number(a)
                    .cmp(&day_number(b))
                    .then_with(|| a.cmp(b))
            });
            keys
        }
        Timeframe::Year => filter_fixed_order(&MONTH_LABELS, buckets),
    }
}

/// The bucket key for `date` under `timeframe`.
fn period_key(date: Date, timeframe: Timeframe) -> String {
    match timeframe {
        Timeframe::Week => weekday_abbrev(date.weekday()).to_owned(),
        Timeframe::Month => date.day().to_string(),
        Timeframe::Year => month_abbrev(date.month()).to_owned(),
    }
}

/// Formats a month as a three-letter abbreviation, e.g. "Jan".
fn month_abbrev(month: Month) -> &'static str {
    MONTH_LABELS[usize::from(u8::from(month)) - 1]
}

fn weekday_abbrev(weekday: Weekday) -> &'static str {
    WEEKDAY_LABELS[usize::from(weekday.number_days_from_sunday())]
}

fn filter_fixed_order(labels: &[&str], buckets: &HashMap<String, Bucket>) -> Vec<String> {
    labels
        .iter()
        .filter(|label| buckets.contains_key(**label))
        .map(|label| (*label).to_owned())
        .collect()
}

fn day_number(key: &str) -> u32 {
    key.parse().unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use time::{Month, macros::date};

    use super::{Bucket, bucket_by_period, month_abbrev, ordered_bucket_keys, period_key};
    use crate::{aggregation::Timeframe, expense::test_utils::expense};

    #[test]
    fn month_buckets_match_worked_example() {
        let expenses = vec![
            expense(1, 100.0, "Food", date!(2024 - 01 - 05)),
            expense(2, 50.0, "Food", date!(2024 - 01 - 10)),
        ];

        let got = bucket_by_period(&expenses, Timeframe::Month);

        let want = HashMap::from([
            (
                "5".to_owned(),
                Bucket {
                    total: 100.0,
                    count: 1,
                },
            ),
            (
                "10".to_owned(),
                Bucket {
                    total: 50.0,
                    count: 1,
                },
            ),
        ]);
        assert_eq!(got, want);
    }

    #[test]
    fn week_buckets_use_weekday_names() {
        // 2024-01-07 was a Sunday.
        let expenses = vec![
            expense(1, 10.0, "Food", date!(2024 - 01 - 07)),
            expense(2, 5.0, "Food", date!(2024 - 01 - 14)),
            expense(3, 1.0, "Food", date!(2024 - 01 - 13)),
        ];

        let got = bucket_by_period(&expenses, Timeframe::Week);

        assert_eq!(
            got["Sun"],
            Bucket {
                total: 15.0,
                count: 2
            }
        );
        assert_eq!(
            got["Sat"],
            Bucket {
                total: 1.0,
                count: 1
            }
        );
        assert_eq!(got.len(), 2);
    }

    #[test]
    fn year_buckets_use_month_names() {
        let expenses = vec![
            expense(1, 10.0, "Food", date!(2023 - 12 - 31)),
            expense(2, 5.0, "Food", date!(2024 - 12 - 01)),
            expense(3, 1.0, "Food", date!(2024 - 01 - 13)),
        ];

        let got = bucket_by_period(&expenses, Timeframe::Year);

        assert_eq!(
            got["Dec"],
            Bucket {
                total: 15.0,
                count: 2
            }
        );
        assert_eq!(
            got["Jan"],
            Bucket {
                total: 1.0,
                count: 1
            }
        );
    }

    #[test]
    fn day_of_month_keys_are_not_zero_padded() {
        assert_eq!(period_key(date!(2024 - 01 - 05), Timeframe::Month), "5");
        assert_eq!(period_key(date!(2024 - 01 - 31), Timeframe::Month), "31");
    }

    #[test]
    fn week_keys_follow_sunday_first_order() {
        let expenses = vec![
            expense(1, 1.0, "A", date!(2024 - 01 - 13)), // Sat
            expense(2, 1.0, "A", date!(2024 - 01 - 08)), // Mon
            expense(3, 1.0, "A", date!(2024 - 01 - 07)), // Sun
        ];
        let buckets = bucket_by_period(&expenses, Timeframe::Week);

        let got = ordered_bucket_keys(Timeframe::Week, &buckets);

        assert_eq!(got, vec!["Sun", "Mon", "Sat"]);
    }

    #[test]
    fn month_keys_sort_numerically() {
        let expenses = vec![
            expense(1, 1.0, "A", date!(2024 - 01 - 10)),
            expense(2, 1.0, "A", date!(2024 - 01 - 02)),
            expense(3, 1.0, "A", date!(2024 - 01 - 21)),
            expense(4, 1.0, "A", date!(2024 - 01 - 05)),
        ];
        let buckets = bucket_by_period(&expenses, Timeframe::Month);

        let got = ordered_bucket_keys(Timeframe::Month, &buckets);

        assert_eq!(got, vec!["2", "5", "10", "21"]);
    }

    #[test]
    fn year_keys_follow_calendar_order() {
        let expenses = vec![
            expense(1, 1.0, "A", date!(2024 - 11 - 10)),
            expense(2, 1.0, "A", date!(2024 - 02 - 02)),
            expense(3, 1.0, "A", date!(2023 - 12 - 21)),
        ];
        let buckets = bucket_by_period(&expenses, Timeframe::Year);

        let got = ordered_bucket_keys(Timeframe::Year, &buckets);

        assert_eq!(got, vec!["Feb", "Nov", "Dec"]);
    }

    #[test]
    fn empty_input_gives_no_buckets_or_keys() {
        for timeframe in Timeframe::ALL {
            let buckets = bucket_by_period(&[], timeframe);

            assert!(buckets.is_empty());
            assert!(ordered_bucket_keys(timeframe, &buckets).is_empty());
        }
    }

    #[test]
    fn month_abbrev_creates_three_letter_abbreviations() {
        assert_eq!(month_abbrev(Month::January), "Jan");
        assert_eq!(month_abbrev(Month::September), "Sep");
        assert_eq!(month_abbrev(Month::December), "Dec");
    }
}
