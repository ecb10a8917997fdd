use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State, rejection::PathRejection},
    response::{IntoResponse, Response},
};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    database_id::ExpenseId,
    endpoints::{self, format_endpoint},
    expense::{
        Expense,
        create_page::{ExpenseFormView, expense_form_page},
        get_expense,
    },
};

/// The state needed for the edit expense page.
#[derive(Debug, Clone)]
pub struct EditExpensePageState {
    /// The database connection for reading the expense.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for EditExpensePageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Renders the expense form filled in with the stored expense.
///
/// Saving the form replaces the expense through the expense API.
pub async fn get_edit_expense_page(
    State(state): State<EditExpensePageState>,
    expense_id: Result<Path<ExpenseId>, PathRejection>,
) -> Response {
    let Ok(Path(expense_id)) = expense_id else {
        return Error::NotFound.into_page_response();
    };

    let expense = match load_expense(&state, expense_id) {
        Ok(expense) => expense,
        Err(error) => return error.into_page_response(),
    };

    let form = ExpenseFormView {
        submit_url: format_endpoint(endpoints::EXPENSE, expense.id),
        method: "PUT",
        submit_label: "Save Changes",
        amount: expense.amount.to_string(),
        category: &expense.category,
        description: &expense.description,
        date: expense.date.to_string(),
    };

    expense_form_page("Edit Expense", endpoints::EDIT_EXPENSE_VIEW, &form).into_response()
}

fn load_expense(state: &EditExpensePageState, expense_id: ExpenseId) -> Result<Expense, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    get_expense(expense_id, &connection)
        .inspect_err(|error| tracing::debug!("Could not get expense {expense_id}: {error}"))
}
