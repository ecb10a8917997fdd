use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    expense::{Expense, list_expenses},
};

/// The state needed to list expenses.
#[derive(Debug, Clone)]
pub struct ListExpensesState {
    /// The database connection for reading expenses.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for ListExpensesState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler that responds with every expense as a JSON array.
///
/// The expenses are neither filtered nor paginated; clients aggregate them
/// themselves.
pub async fn list_expenses_endpoint(
    State(state): State<ListExpensesState>,
) -> Result<Json<Vec<Expense>>, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let expenses = list_expenses(&connection)?;

    Ok(Json(expenses))
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::extract::State;
    use rusqlite::Connection;
    use time::macros::date;

    use crate::{
        db::initialize,
        expense::{
            NewExpense, create_expense,
            list_endpoint::{ListExpensesState, list_expenses_endpoint},
        },
    };

    #[tokio::test]
    async fn lists_all_expenses() {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();
        let want: Vec<_> = [("Food", 100.0), ("Travel", 200.0)]
            .into_iter()
            .map(|(category, amount)| {
                create_expense(
                    NewExpense {
                        amount,
                        category: category.to_owned(),
                        description: String::new(),
                        date: date!(2024 - 01 - 05),
                    },
                    &connection,
                )
                .unwrap()
            })
            .collect();
        let state = ListExpensesState {
            db_connection: Arc::new(Mutex::new(connection)),
        };

        let got = list_expenses_endpoint(State(state)).await.unwrap();

        assert_eq!(got.0, want);
    }

    #[tokio::test]
    async fn empty_store_gives_empty_list() {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();
        let state = ListExpensesState {
            db_connection: Arc::new(Mutex::new(connection)),
        };

        let got = list_expenses_endpoint(State(state)).await.unwrap();

        assert!(got.0.is_empty());
    }
}
