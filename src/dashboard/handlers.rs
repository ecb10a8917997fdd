//! Dashboard HTTP handlers and view rendering.
//!
//! This module contains:
//! - The route handler for displaying the dashboard
//! - HTML view functions for rendering the dashboard UI
//! - The state used by the handler

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Query, State, rejection::QueryRejection},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rusqlite::Connection;
use time::Date;

use crate::{
    AppState, Error,
    aggregation::{DashboardSummary, Timeframe, ViewPreferences, summarize},
    dashboard::{
        cards::summary_cards_view,
        charts::{ECHARTS_SCRIPT, build_dashboard_charts, charts_script, charts_view},
        tables::top_expenses_table,
    },
    endpoints,
    expense::{Expense, list_expenses},
    html::{HeadElement, base, link},
    navigation::NavBar,
    timezone::get_local_date,
};

const TIMEFRAME_LINK_STYLE: &str = "px-4 py-2 text-sm font-medium border \
    border-gray-200 dark:border-gray-700 first:rounded-l-lg last:rounded-r-lg";
const TIMEFRAME_ACTIVE_STYLE: &str = "text-white bg-blue-600 dark:bg-blue-500";
const TIMEFRAME_INACTIVE_STYLE: &str = "text-gray-900 bg-white hover:bg-gray-100 \
    dark:bg-gray-800 dark:text-white dark:hover:bg-gray-700";

/// The state needed for displaying the dashboard page.
///
/// Contains the database connection and timezone information required
/// by dashboard handlers.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The database connection for reading expenses.
    pub db_connection: Arc<Mutex<Connection>>,
    /// The local timezone as a canonical timezone name, e.g. "Asia/Kolkata".
    pub local_timezone: String,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Display a page summarising the expenses in the selected timeframe.
///
/// The timeframe is read from the `timeframe` query parameter and defaults
/// to the last month.
pub async fn get_dashboard_page(
    State(state): State<DashboardState>,
    preferences: Result<Query<ViewPreferences>, QueryRejection>,
) -> Response {
    let preferences = preferences
        .map(|Query(preferences)| preferences)
        .unwrap_or_else(|rejection| {
            tracing::warn!("Invalid dashboard query: {}", rejection.body_text());
            ViewPreferences::default()
        });

    let (expenses, today) = match load_dashboard_data(&state) {
        Ok(data) => data,
        Err(error) => return error.into_page_response(),
    };

    let nav_bar = NavBar::new(endpoints::DASHBOARD_VIEW);

    if expenses.is_empty() {
        return dashboard_no_data_view(nav_bar).into_response();
    }

    let summary = summarize(&expenses, preferences.timeframe, today);

    dashboard_view(nav_bar, &preferences, &summary).into_response()
}

/// Fetches every expense and today's date in the local timezone.
///
/// # Errors
/// Returns error if the database lock cannot be acquired, a query fails or
/// the timezone is invalid.
fn load_dashboard_data(state: &DashboardState) -> Result<(Vec<Expense>, Date), Error> {
    let today = get_local_date(&state.local_timezone)?;

    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let expenses = list_expenses(&connection)
        .inspect_err(|error| tracing::error!("could not get expenses: {error}"))?;

    Ok((expenses, today))
}

/// Renders the dashboard page when no expenses exist.
fn dashboard_no_data_view(nav_bar: NavBar) -> Markup {
    let nav_bar = nav_bar.into_html();
    let new_expense_link = link(endpoints::NEW_EXPENSE_VIEW, "add some expenses");
    let expenses_link = link(endpoints::EXPENSES_VIEW, "expenses page");

    let content = html!(
        (nav_bar)

        div class="flex flex-col items-center px-6 py-8 mx-auto text-gray-900 dark:text-white"
        {
            h2 class="text-xl font-bold"
            {
                "Nothing here yet..."
            }

            p
            {
                "Charts will show up here once you " (new_expense_link) ". Your expenses
                will also be listed on the " (expenses_link) "."
            }
        }
    );

    base("Dashboard", &[], &content)
}

/// Renders the timeframe selector, summary cards, charts and top expenses.
fn dashboard_view(
    nav_bar: NavBar<'_>,
    preferences: &ViewPreferences,
    summary: &DashboardSummary,
) -> Markup {
    let nav_bar = nav_bar.into_html();
    let charts = build_dashboard_charts(summary);
    let has_expenses_in_timeframe = !summary.top_expenses.is_empty();

    let content = html!(
        (nav_bar)

        div
            id="dashboard-content"
            class="flex flex-col items-center px-2 lg:px-6 lg:py-8 mx-auto
                max-w-screen-xl text-gray-900 dark:text-white"
        {
            div class="w-full flex flex-wrap justify-between items-center gap-4 mb-4"
            {
                h2 class="text-xl font-bold" { "Expense Dashboard" }
                (timeframe_selector(preferences))
            }

            (summary_cards_view(summary))

            @if has_expenses_in_timeframe {
                (charts_view(&charts))
                (top_expenses_table(&summary.top_expenses))
            } @else {
                p id="no-timeframe-data" class="py-8"
                {
                    "No expenses in the last " (summary.timeframe.label().to_lowercase()) "."
                }
            }
        }
    );

    let scripts = if has_expenses_in_timeframe {
        vec![
            HeadElement::ScriptLink(ECHARTS_SCRIPT.to_owned()),
            charts_script(&charts),
        ]
    } else {
        vec![]
    };

    base("Dashboard", &scripts, &content)
}

fn timeframe_selector(preferences: &ViewPreferences) -> Markup {
    html!(
        nav id="timeframe-selector" class="inline-flex rounded-md shadow-sm" aria-label="Timeframe"
        {
            @for timeframe in Timeframe::ALL {
                @let is_current = timeframe == preferences.timeframe;
                @let state_style = if is_current {
                    TIMEFRAME_ACTIVE_STYLE
                } else {
                    TIMEFRAME_INACTIVE_STYLE
                };
                a
                    href=(preferences.with_timeframe(timeframe).to_href(endpoints::DASHBOARD_VIEW))
                    class={(TIMEFRAME_LINK_STYLE) " " (state_style)}
                    aria-current=[is_current.then_some("page")]
                {
                    (timeframe.label())
                }
            }
        }
    )
}
