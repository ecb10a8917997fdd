//! Summary cards shown above the dashboard charts.

use maud::{Markup, html};

use crate::{aggregation::DashboardSummary, html::currency_rounded_with_tooltip};

const CARD_STYLE: &str = "flex flex-col gap-1 p-4 rounded-lg shadow bg-white dark:bg-gray-800";
const CARD_LABEL_STYLE: &str = "text-sm text-gray-500 dark:text-gray-400";
const CARD_VALUE_STYLE: &str = "text-2xl font-bold";

/// Renders the total, average and category count cards.
pub(super) fn summary_cards_view(summary: &DashboardSummary) -> Markup {
    html!(
        section id="summary-cards" class="w-full grid grid-cols-1 md:grid-cols-3 gap-4 mb-4"
        {
            (card(
                "Total Expenses",
                currency_rounded_with_tooltip(summary.total),
            ))
            (card(
                "Average per Day",
                currency_rounded_with_tooltip(summary.average_per_day),
            ))
            (card("Categories", html!((summary.category_count))))
        }
    )
}

fn card(label: &str, value: Markup) -> Markup {
    html!(
        div class=(CARD_STYLE)
        {
            span class=(CARD_LABEL_STYLE) { (label) }
            span class=(CARD_VALUE_STYLE) { (value) }
        }
    )
}
