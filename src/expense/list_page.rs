//! The page that lists every expense with a search box and sortable columns.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Query, State, rejection::QueryRejection},
    response::{IntoResponse, Response},
};
use maud::{Markup, PreEscaped, html};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    aggregation::{SortDirection, SortKey, ViewPreferences},
    category::category_icon,
    endpoints::{self, format_endpoint},
    expense::{Expense, list_expenses},
    format::{format_currency, format_date},
    html::{
        CATEGORY_BADGE_STYLE, FORM_TEXT_INPUT_STYLE, HeadElement, LINK_STYLE, PAGE_CONTAINER_STYLE,
        TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base,
    },
    navigation::NavBar,
};

const COLUMNS: [SortKey; 4] = [
    SortKey::Date,
    SortKey::Category,
    SortKey::Description,
    SortKey::Amount,
];

const DELETE_BUTTON_STYLE: &str = "text-red-600 hover:text-red-500 \
    dark:text-red-500 dark:hover:text-red-400 underline bg-transparent \
    border-none cursor-pointer";

const DELETE_SCRIPT: &str = r#"
document.addEventListener('click', async (event) => {
    const button = event.target.closest('[data-delete-url]');
    if (!button || !window.confirm('Delete this expense?')) {
        return;
    }

    const response = await fetch(button.dataset.deleteUrl, { method: 'DELETE' });
    if (response.ok) {
        button.closest('tr').remove();
    } else {
        const body = await response.json();
        window.alert(body.message);
    }
});
"#;

/// The state needed for the expenses page.
#[derive(Debug, Clone)]
pub struct ExpensesPageState {
    /// The database connection for reading expenses.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for ExpensesPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Render the expenses matching the search text, sorted by the chosen column.
///
/// Invalid query parameters fall back to the default view rather than failing.
pub async fn get_expenses_page(
    State(state): State<ExpensesPageState>,
    preferences: Result<Query<ViewPreferences>, QueryRejection>,
) -> Response {
    let preferences = preferences
        .map(|Query(preferences)| preferences)
        .unwrap_or_else(|rejection| {
            tracing::warn!("Invalid expenses page query: {}", rejection.body_text());
            ViewPreferences::default()
        });

    let expenses = match load_expenses(&state) {
        Ok(expenses) => expenses,
        Err(error) => return error.into_page_response(),
    };

    let rows = preferences.apply(&expenses);

    expenses_view(&preferences, &rows, !expenses.is_empty()).into_response()
}

fn load_expenses(state: &ExpensesPageState) -> Result<Vec<Expense>, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    list_expenses(&connection)
}

fn expenses_view(preferences: &ViewPreferences, rows: &[Expense], has_expenses: bool) -> Markup {
    let nav_bar = NavBar::new(endpoints::EXPENSES_VIEW).into_html();

    let content = html!(
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            section class="w-full max-w-screen-xl"
            {
                div class="flex flex-wrap justify-between items-center gap-4 mb-4"
                {
                    h2 class="text-xl font-bold" { "Expense History" }
                    a
                        id="add-expense"
                        href=(endpoints::NEW_EXPENSE_VIEW)
                        class="px-4 py-2 text-sm text-white bg-blue-500 hover:bg-blue-600
                            dark:bg-blue-600 dark:hover:bg-blue-700 rounded"
                    {
                        "Add Expense"
                    }
                }

                form
                    method="get"
                    action=(endpoints::EXPENSES_VIEW)
                    class="mb-4"
                {
                    input type="hidden" name="sort" value=(preferences.sort_key.as_query_value());
                    input type="hidden" name="direction" value=(preferences.direction.as_query_value());

                    label for="query" class="sr-only" { "Search" }
                    input
                        id="query"
                        name="query"
                        type="search"
                        placeholder="Search expenses..."
                        value=(preferences.query)
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div class="overflow-x-auto rounded-lg shadow"
                {
                    table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
                    {
                        thead class=(TABLE_HEADER_STYLE)
                        {
                            tr
                            {
                                @for sort_key in COLUMNS {
                                    (sort_header(preferences, sort_key))
                                }
                                th scope="col" class="px-6 py-3 text-right" { "Actions" }
                            }
                        }

                        tbody
                        {
                            @for expense in rows {
                                (expense_row(expense))
                            }

                            @if rows.is_empty() {
                                tr class=(TABLE_ROW_STYLE)
                                {
                                    td colspan="5" class="px-6 py-8 text-center"
                                    {
                                        @if has_expenses {
                                            "No expenses match your search."
                                        } @else {
                                            "No expenses found. Add some expenses to see them here."
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    );

    let scripts = [HeadElement::ScriptSource(PreEscaped(DELETE_SCRIPT.to_owned()))];

    base("Expenses", &scripts, &content)
}

fn sort_header(preferences: &ViewPreferences, sort_key: SortKey) -> Markup {
    let href = preferences
        .toggle_sort(sort_key)
        .to_href(endpoints::EXPENSES_VIEW);
    let indicator = (preferences.sort_key == sort_key).then_some(match preferences.direction {
        SortDirection::Ascending => "↑",
        SortDirection::Descending => "↓",
    });

    html!(
        th scope="col" class="px-6 py-3"
        {
            a href=(href) class="flex items-center gap-1"
            {
                (sort_key.label())
                @if let Some(indicator) = indicator {
                    span class="sort-indicator" { (indicator) }
                }
            }
        }
    )
}

fn expense_row(expense: &Expense) -> Markup {
    html!(
        tr class=(TABLE_ROW_STYLE) data-expense-id=(expense.id)
        {
            td class={(TABLE_CELL_STYLE) " whitespace-nowrap"} { (format_date(expense.date)) }
            td class=(TABLE_CELL_STYLE)
            {
                span class=(CATEGORY_BADGE_STYLE)
                {
                    span aria-hidden="true" { (category_icon(&expense.category)) }
                    (expense.category)
                }
            }
            td class={(TABLE_CELL_STYLE) " max-w-xs truncate"} { (expense.description) }
            td class={(TABLE_CELL_STYLE) " whitespace-nowrap font-medium text-gray-900 dark:text-white"}
            {
                (format_currency(expense.amount))
            }
            td class={(TABLE_CELL_STYLE) " text-right whitespace-nowrap space-x-4"}
            {
                a
                    href=(format_endpoint(endpoints::EDIT_EXPENSE_VIEW, expense.id))
                    class=(LINK_STYLE)
                {
                    "Edit"
                }
                button
                    type="button"
                    data-delete-url=(format_endpoint(endpoints::EXPENSE, expense.id))
                    class=(DELETE_BUTTON_STYLE)
                {
                    "Delete"
                }
            }
        }
    )
}
