use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Path, State, rejection::PathRejection},
};
use rusqlite::Connection;

use crate::{
    AppState, Error, database_id::ExpenseId, error::MessageBody, expense::delete_expense,
};

/// The state needed to delete an expense.
#[derive(Debug, Clone)]
pub struct DeleteExpenseState {
    /// The database connection for managing expenses.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for DeleteExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler for deleting an expense, responds with a confirmation message.
///
/// Responds with `404 Not Found` if the expense does not exist, e.g. because
/// it was already deleted.
pub async fn delete_expense_endpoint(
    State(state): State<DeleteExpenseState>,
    expense_id: Result<Path<ExpenseId>, PathRejection>,
) -> Result<Json<MessageBody>, Error> {
    let Path(expense_id) = expense_id.map_err(|rejection| {
        tracing::debug!("Invalid expense ID: {}", rejection.body_text());
        Error::NotFound
    })?;
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    delete_expense(expense_id, &connection)
        .inspect_err(|error| tracing::warn!("Could not delete expense {expense_id}: {error}"))?;
    tracing::info!("Deleted expense {expense_id}");

    Ok(Json(MessageBody::new("Expense deleted")))
}
