//! Rolling timeframes and the calendar arithmetic used to filter expenses by them.

use serde::{Deserialize, Serialize};
use time::{Date, Duration, Month};

use crate::expense::Expense;

/// A rolling window that ends at the current date.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    /// The last seven days.
    Week,
    /// The last calendar month.
    #[default]
    Month,
    /// The last calendar year.
    Year,
}

impl Timeframe {
    /// All timeframes in display order.
    pub const ALL: [Timeframe; 3] = [Timeframe::Week, Timeframe::Month, Timeframe::Year];

    /// The value used for this timeframe in query strings.
    pub fn as_query_value(self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }

    /// The human readable name of the timeframe.
    pub fn label(self) -> &'static str {
        match self {
            Self::Week => "Week",
            Self::Month => "Month",
            Self::Year => "Year",
        }
    }

    /// The earliest date (inclusive) that falls within the timeframe ending on `today`.
    ///
    /// Months and years are subtracted on the calendar, not as a fixed number
    /// of days. When the resulting day does not exist in the target month, it
    /// is clamped to the last day of that month, e.g. 31 March minus one month
    /// is 28 or 29 February.
    pub fn cutoff_date(self, today: Date) -> Date {
        match self {
            Self::Week => today.checked_sub(Duration::days(7)).unwrap_or(Date::MIN),
            Self::Month => subtract_months(today, 1),
            Self::Year => subtract_months(today, 12),
        }
    }
}

/// Returns the expenses dated on or after the start of `timeframe`.
///
/// There is no upper bound, so expenses dated after `today` are kept.
/// The relative order of `expenses` is preserved.
pub fn filter_by_timeframe(expenses: &[Expense], timeframe: Timeframe, today: Date) -> Vec<Expense> {
    let cutoff = timeframe.cutoff_date(today);

    expenses
        .iter()
        .filter(|expense| expense.date >= cutoff)
        .cloned()
        .collect()
}

fn subtract_months(date: Date, months: i32) -> Date {
    let month_index = date.year() * 12 + i32::from(u8::from(date.month())) - 1 - months;
    let year = month_index.div_euclid(12);
    let Ok(month) = Month::try_from((month_index.rem_euclid(12) + 1) as u8) else {
        return Date::MIN;
    };
    let day = date.day().min(last_day_of_month(year, month));

    Date::from_calendar_date(year, month, day).unwrap_or(Date::MIN)
}

fn last_day_of_month(year: i32, month: Month) -> u8 {
    match month {
        Month::January
        | Month::March
        | Month::May
        | Month::July
        | Month::August
        | Month::October
        | Month::December => 31,
        Month::April | Month::June | Month::September | Month::November => 30,
        Month::February => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::{Timeframe, filter_by_timeframe};
    use crate::expense::test_utils::expense;

    #[test]
    fn week_cutoff_is_seven_days_earlier() {
        assert_eq!(
            Timeframe::Week.cutoff_date(date!(2024 - 03 - 05)),
            date!(2024 - 02 - 27)
        );
    }

    #[test]
    fn month_cutoff_keeps_day_of_month() {
        assert_eq!(
            Timeframe::Month.cutoff_date(date!(2024 - 01 - 15)),
            date!(2023 - 12 - 15)
        );
    }

    #[test]
    fn month_cutoff_clamps_to_end_of_shorter_month() {
        assert_eq!(
            Timeframe::Month.cutoff_date(date!(2024 - 03 - 31)),
            date!(2024 - 02 - 29)
        );
        assert_eq!(
            Timeframe::Month.cutoff_date(date!(2023 - 03 - 31)),
            date!(2023 - 02 - 28)
        );
        assert_eq!(
            Timeframe::Month.cutoff_date(date!(2024 - 05 - 31)),
            date!(2024 - 04 - 30)
        );
    }

    #[test]
    fn year_cutoff_clamps_leap_day() {
        assert_eq!(
            Timeframe::Year.cutoff_date(date!(2024 - 02 - 29)),
            date!(2023 - 02 - 28)
        );
        assert_eq!(
            Timeframe::Year.cutoff_date(date!(2024 - 06 - 01)),
            date!(2023 - 06 - 01)
        );
    }

    #[test]
    fn cutoff_is_inclusive() {
        let today = date!(2024 - 01 - 15);
        let expenses = vec![
            expense(1, 10.0, "Food", date!(2024 - 01 - 08)),
            expense(2, 20.0, "Food", date!(2024 - 01 - 07)),
        ];

        let got = filter_by_timeframe(&expenses, Timeframe::Week, today);

        assert_eq!(got, vec![expenses[0].clone()]);
    }

    #[test]
    fn future_dated_expenses_are_kept() {
        let today = date!(2024 - 01 - 15);
        let expenses = vec![expense(1, 10.0, "Food", date!(2024 - 02 - 01))];

        let got = filter_by_timeframe(&expenses, Timeframe::Week, today);

        assert_eq!(got, expenses);
    }

    #[test]
    fn month_filter_matches_worked_example() {
        let today = date!(2024 - 01 - 15);
        let expenses = vec![
            expense(1, 100.0, "Food", date!(2024 - 01 - 05)),
            expense(2, 50.0, "Food", date!(2024 - 01 - 10)),
            expense(3, 200.0, "Travel", date!(2024 - 06 - 01)),
        ];

        let got = filter_by_timeframe(&expenses, Timeframe::Month, today);

        // The June record is in the future relative to `today`, so it is kept too.
        assert_eq!(got, expenses);
    }

    #[test]
    fn month_filter_excludes_records_before_cutoff() {
        let today = date!(2024 - 01 - 15);
        let expenses = vec![
            expense(1, 100.0, "Food", date!(2024 - 01 - 05)),
            expense(2, 50.0, "Food", date!(2024 - 01 - 10)),
            expense(3, 200.0, "Travel", date!(2023 - 06 - 01)),
        ];

        let got = filter_by_timeframe(&expenses, Timeframe::Month, today);

        assert_eq!(got, expenses[..2].to_vec());
    }

    #[test]
    fn wider_timeframes_contain_narrower_ones() {
        let today = date!(2024 - 03 - 31);
        let expenses = vec![
            expense(1, 1.0, "A", date!(2024 - 03 - 30)),
            expense(2, 2.0, "B", date!(2024 - 03 - 20)),
            expense(3, 3.0, "C", date!(2024 - 02 - 29)),
            expense(4, 4.0, "D", date!(2024 - 02 - 28)),
            expense(5, 5.0, "E", date!(2023 - 04 - 01)),
            expense(6, 6.0, "F", date!(2023 - 03 - 30)),
        ];

        let week = filter_by_timeframe(&expenses, Timeframe::Week, today);
        let month = filter_by_timeframe(&expenses, Timeframe::Month, today);
        let year = filter_by_timeframe(&expenses, Timeframe::Year, today);

        assert!(week.iter().all(|expense| month.contains(expense)));
        assert!(month.iter().all(|expense| year.contains(expense)));
        assert_eq!(week.len(), 1);
        assert_eq!(month.len(), 3);
        assert_eq!(year.len(), 5);
    }

    #[test]
    fn empty_input_gives_empty_output() {
        for timeframe in Timeframe::ALL {
            assert!(filter_by_timeframe(&[], timeframe, date!(2024 - 01 - 15)).is_empty());
        }
    }
}
