use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State, rejection::JsonRejection},
    http::StatusCode,
};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    expense::{Expense, ExpenseForm, create_expense},
};

/// The state needed to create an expense.
#[derive(Debug, Clone)]
pub struct CreateExpenseState {
    /// The database connection for managing expenses.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CreateExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler for creating an expense from a JSON body.
///
/// Responds with `201 Created` and the stored expense, including its new ID.
pub async fn create_expense_endpoint(
    State(state): State<CreateExpenseState>,
    form: Result<Json<ExpenseForm>, JsonRejection>,
) -> Result<(StatusCode, Json<Expense>), Error> {
    let Json(form) = form.map_err(|rejection| Error::InvalidJson(rejection.body_text()))?;
    let new_expense = form.validate()?;

    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let expense = create_expense(new_expense, &connection)?;
    tracing::info!("Created expense {}", expense.id);

    Ok((StatusCode::CREATED, Json(expense)))
}
