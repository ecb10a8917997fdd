use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{
        FromRef, Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    database_id::ExpenseId,
    expense::{Expense, ExpenseForm, replace_expense},
};

/// The state needed to edit an expense.
#[derive(Debug, Clone)]
pub struct EditExpenseState {
    /// The database connection for managing expenses.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for EditExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler that replaces every field of an expense.
///
/// Clients must send the full set of fields, not only the ones that changed.
/// Responds with the updated expense, or `404 Not Found` if there is no
/// expense with the ID in the path.
pub async fn edit_expense_endpoint(
    State(state): State<EditExpenseState>,
    expense_id: Result<Path<ExpenseId>, PathRejection>,
    form: Result<Json<ExpenseForm>, JsonRejection>,
) -> Result<Json<Expense>, Error> {
    let Path(expense_id) = expense_id.map_err(|rejection| {
        tracing::debug!("Invalid expense ID: {}", rejection.body_text());
        Error::NotFound
    })?;
    let Json(form) = form.map_err(|rejection| Error::InvalidJson(rejection.body_text()))?;
    let new_expense = form.validate()?;

    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let expense = replace_expense(expense_id, new_expense, &connection)
        .inspect_err(|error| tracing::warn!("Could not update expense {expense_id}: {error}"))?;
    tracing::info!("Updated expense {expense_id}");

    Ok(Json(expense))
}
