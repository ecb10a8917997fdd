//! Table views for dashboard data display.

use maud::{Markup, html};

use crate::{
    aggregation::TOP_EXPENSES_COUNT,
    category::category_icon,
    expense::Expense,
    format::{format_currency, format_date},
    html::{CATEGORY_BADGE_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE},
};

/// Renders the largest expenses of the timeframe, largest first.
pub(super) fn top_expenses_table(expenses: &[Expense]) -> Markup {
    html! {
        section id="top-expenses" class="w-full"
        {
            h3 class="text-xl font-semibold mb-4" { "Top " (TOP_EXPENSES_COUNT) " Expenses" }

            div class="overflow-x-auto rounded-lg shadow"
            {
                table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            th scope="col" class="px-6 py-3" { "Date" }
                            th scope="col" class="px-6 py-3" { "Category" }
                            th scope="col" class="px-6 py-3" { "Description" }
                            th scope="col" class="px-6 py-3 text-right" { "Amount" }
                        }
                    }

                    tbody
                    {
                        @for expense in expenses {
                            tr class=(TABLE_ROW_STYLE)
                            {
                                td class=(TABLE_CELL_STYLE) { (format_date(expense.date)) }
                                td class=(TABLE_CELL_STYLE)
                                {
                                    span class=(CATEGORY_BADGE_STYLE)
                                    {
                                        span aria-hidden="true" { (category_icon(&expense.category)) }
                                        (expense.category)
                                    }
                                }
                                td class=(TABLE_CELL_STYLE) { (expense.description) }
                                td class={(TABLE_CELL_STYLE) " text-right font-medium text-gray-900 dark:text-white"}
                                {
                                    (format_currency(expense.amount))
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use scraper::Html;
    use time::macros::date;

    use super::top_expenses_table;
    use crate::{expense::test_utils::expense, test_utils::select_texts};

    #[test]
    fn renders_one_row_per_expense_in_order() {
        let expenses = vec![
            expense(3, 200.0, "Travel", date!(2024 - 06 - 01)),
            expense(1, 100.0, "Food", date!(2024 - 01 - 05)),
        ];

        let html = Html::parse_fragment(&top_expenses_table(&expenses).into_string());

        assert_eq!(
            select_texts(&html, "tbody tr td:last-child"),
            vec!["₹200.00", "₹100.00"]
        );
        assert_eq!(
            select_texts(&html, "tbody tr td:first-child"),
            vec!["Jun 1, 2024", "Jan 5, 2024"]
        );
    }
}
