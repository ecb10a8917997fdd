//! Display formatting for amounts and dates.
//!
//! The same strings are shown on the pages and matched against by the
//! expense search, so both go through these functions.

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

/// The symbol placed in front of every amount.
pub const CURRENCY_SYMBOL: &str = "₹";

const DISPLAY_DATE_FORMAT: &[BorrowedFormatItem<'_>] =
    format_description!("[month repr:short] [day padding:none], [year]");

/// Formats `amount` with the currency symbol, thousands separators and two
/// decimal places, e.g. "₹1,234.50".
pub fn format_currency(amount: f64) -> String {
    // Split before scaling so that large amounts do not overflow to infinity.
    let mut whole = amount.abs().trunc();
    let mut cents = ((amount.abs() - whole) * 100.0).round();

    if cents >= 100.0 {
        whole += 1.0;
        cents = 0.0;
    }

    format!(
        "{}{}.{:02}",
        sign(amount),
        format_whole_amount(whole),
        cents as u8
    )
}

/// Formats `amount` rounded to the nearest whole number, e.g. "₹1,235".
pub fn format_currency_rounded(amount: f64) -> String {
    let whole = amount.abs().round();

    format!("{}{}", sign(amount), format_whole_amount(whole))
}

/// Formats a date for display, e.g. "Jan 5, 2024".
pub fn format_date(date: Date) -> String {
    date.format(DISPLAY_DATE_FORMAT).unwrap_or_else(|error| {
        tracing::error!("Could not format date {date}: {error}");
        date.to_string()
    })
}

fn sign(amount: f64) -> &'static str {
    if amount <= -0.005 {
        "-"
    } else {
        ""
    }
}

fn format_whole_amount(whole: f64) -> String {
    static FMT: OnceLock<Option<Formatter>> = OnceLock::new();

    let formatter = FMT.get_or_init(|| {
        Formatter::currency(CURRENCY_SYMBOL)
            .map(|formatter| formatter.precision(Precision::Decimals(0)))
            .inspect_err(|error| tracing::error!("Could not create currency formatter: {error:?}"))
            .ok()
    });

    match formatter {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        Some(_) if whole == 0.0 => format!("{CURRENCY_SYMBOL}0"),
        Some(formatter) => formatter.fmt_string(whole),
        None => format!("{CURRENCY_SYMBOL}{whole}"),
    }
}
