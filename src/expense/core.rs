//! Defines the expense model and its database queries.

use rusqlite::{Connection, Row, params};
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{Error, database_id::ExpenseId};

// ============================================================================
// MODELS
// ============================================================================

/// Money spent on something, on a given day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// The ID of the expense.
    ///
    /// Serialized as `_id` so existing API clients keep working.
    #[serde(rename = "_id")]
    pub id: ExpenseId,
    /// How much was spent, in whole currency units.
    pub amount: f64,
    /// What kind of spending this was, e.g. "Food" or "Travel".
    pub category: String,
    /// A free text note, may be empty.
    pub description: String,
    /// The day the money was spent.
    pub date: Date,
}

/// The fields of an expense that has not been given an ID yet.
///
/// Use [crate::expense::ExpenseForm] to build one from user input.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    /// How much was spent.
    pub amount: f64,
    /// The non-blank category.
    pub category: String,
    /// A free text note, may be empty.
    pub description: String,
    /// The day the money was spent.
    pub date: Date,
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create a new expense in the database.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn create_expense(expense: NewExpense, connection: &Connection) -> Result<Expense, Error> {
    let expense = connection
        .prepare(
            "INSERT INTO expense (amount, category, description, date)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING id, amount, category, description, date",
        )?
        .query_row(
            params![
                expense.amount,
                expense.category,
                expense.description,
                expense.date
            ],
            map_expense_row,
        )?;

    Ok(expense)
}

/// Retrieve an expense from the database by its `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid expense,
/// - or [Error::SqlError] there is some other SQL error.
pub fn get_expense(id: ExpenseId, connection: &Connection) -> Result<Expense, Error> {
    let expense = connection
        .prepare("SELECT id, amount, category, description, date FROM expense WHERE id = :id")?
        .query_one(&[(":id", &id)], map_expense_row)?;

    Ok(expense)
}

/// Retrieve every expense in the order they were created.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn list_expenses(connection: &Connection) -> Result<Vec<Expense>, Error> {
    connection
        .prepare("SELECT id, amount, category, description, date FROM expense ORDER BY id")?
        .query_map([], map_expense_row)?
        .map(|maybe_expense| maybe_expense.map_err(Error::from))
        .collect()
}

/// Replace every field of the expense `id` with `expense`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid expense,
/// - or [Error::SqlError] there is some other SQL error.
pub fn replace_expense(
    id: ExpenseId,
    expense: NewExpense,
    connection: &Connection,
) -> Result<Expense, Error> {
    let expense = connection
        .prepare(
            "UPDATE expense
             SET amount = ?1, category = ?2, description = ?3, date = ?4
             WHERE id = ?5
             RETURNING id, amount, category, description, date",
        )?
        .query_one(
            params![
                expense.amount,
                expense.category,
                expense.description,
                expense.date,
                id
            ],
            map_expense_row,
        )?;

    Ok(expense)
}

/// Delete the expense `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid expense,
/// - or [Error::SqlError] there is some other SQL error.
pub fn delete_expense(id: ExpenseId, connection: &Connection) -> Result<(), Error> {
    let rows_affected = connection.execute("DELETE FROM expense WHERE id = :id", &[(":id", &id)])?;

    if rows_affected == 0 {
        return Err(Error::NotFound);
    }

    Ok(())
}

/// Get the total number of expenses in the database.
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
pub fn count_expenses(connection: &Connection) -> Result<u32, Error> {
    connection
        .query_row("SELECT COUNT(id) FROM expense;", [], |row| row.get(0))
        .map_err(|error| error.into())
}

/// Create the expense table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_expense_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS expense (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                amount REAL NOT NULL,
                category TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                date TEXT NOT NULL
                )",
        (),
    )?;

    // sqlite_sequence has no unique constraint, so only seed it once.
    connection.execute(
        "INSERT INTO sqlite_sequence (name, seq)
            SELECT 'expense', 0
            WHERE NOT EXISTS (SELECT 1 FROM sqlite_sequence WHERE name = 'expense')",
        (),
    )?;

    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_expense_date ON expense(date);",
        (),
    )?;

    Ok(())
}

/// Map a database row to an Expense.
pub fn map_expense_row(row: &Row) -> Result<Expense, rusqlite::Error> {
    let id = row.get(0)?;
    let amount = row.get(1)?;
    let category = row.get(2)?;
    let description = row.get(3)?;
    let date = row.get(4)?;

    Ok(Expense {
        id,
        amount,
        category,
        description,
        date,
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod database_tests {
    use rusqlite::Connection;
    use time::macros::date;

    use crate::{
        Error,
        db::initialize,
        expense::{
            Expense, NewExpense, count_expenses, create_expense, delete_expense, get_expense,
            list_expenses, replace_expense,
        },
    };

    fn get_test_connection() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        conn
    }

    fn new_expense(amount: f64, category: &str) -> NewExpense {
        NewExpense {
            amount,
            category: category.to_owned(),
            description: String::new(),
            date: date!(2024 - 01 - 05),
        }
    }

    #[test]
    fn create_assigns_id() {
        let conn = get_test_connection();

        let expense = create_expense(
            NewExpense {
                amount: 12.3,
                category: "Food".to_owned(),
                description: "Lunch".to_owned(),
                date: date!(2024 - 01 - 05),
            },
            &conn,
        )
        .expect("Could not create expense");

        assert_eq!(
            expense,
            Expense {
                id: 1,
                amount: 12.3,
                category: "Food".to_owned(),
                description: "Lunch".to_owned(),
                date: date!(2024 - 01 - 05),
            }
        );
    }

    #[test]
    fn get_returns_created_expense() {
        let conn = get_test_connection();
        let want = create_expense(new_expense(5.0, "Travel"), &conn).unwrap();

        let got = get_expense(want.id, &conn);

        assert_eq!(got, Ok(want));
    }

    #[test]
    fn get_missing_expense_is_not_found() {
        let conn = get_test_connection();

        assert_eq!(get_expense(42, &conn), Err(Error::NotFound));
    }

    #[test]
    fn list_returns_expenses_in_creation_order() {
        let conn = get_test_connection();
        let want = vec![
            create_expense(new_expense(3.0, "C"), &conn).unwrap(),
            create_expense(new_expense(1.0, "A"), &conn).unwrap(),
            create_expense(new_expense(2.0, "B"), &conn).unwrap(),
        ];

        let got = list_expenses(&conn).unwrap();

        assert_eq!(got, want);
    }

    #[test]
    fn list_of_empty_table_is_empty() {
        let conn = get_test_connection();

        assert_eq!(list_expenses(&conn), Ok(vec![]));
    }

    #[test]
    fn replace_overwrites_every_field() {
        let conn = get_test_connection();
        let original = create_expense(new_expense(1.0, "Food"), &conn).unwrap();
        let replacement = NewExpense {
            amount: 99.5,
            category: "Housing".to_owned(),
            description: "Rent".to_owned(),
            date: date!(2024 - 02 - 01),
        };

        let got = replace_expense(original.id, replacement, &conn).unwrap();

        let want = Expense {
            id: original.id,
            amount: 99.5,
            category: "Housing".to_owned(),
            description: "Rent".to_owned(),
            date: date!(2024 - 02 - 01),
        };
        assert_eq!(got, want);
        assert_eq!(get_expense(original.id, &conn), Ok(want));
    }

    #[test]
    fn replace_missing_expense_is_not_found() {
        let conn = get_test_connection();

        let result = replace_expense(42, new_expense(1.0, "Food"), &conn);

        assert_eq!(result, Err(Error::NotFound));
    }

    #[test]
    fn delete_removes_expense() {
        let conn = get_test_connection();
        let expense = create_expense(new_expense(1.0, "Food"), &conn).unwrap();

        delete_expense(expense.id, &conn).unwrap();

        assert_eq!(get_expense(expense.id, &conn), Err(Error::NotFound));
        assert_eq!(count_expenses(&conn), Ok(0));
    }

    #[test]
    fn delete_missing_expense_is_not_found() {
        let conn = get_test_connection();

        assert_eq!(delete_expense(42, &conn), Err(Error::NotFound));
    }

    #[test]
    fn deleted_ids_are_not_reused() {
        let conn = get_test_connection();
        let first = create_expense(new_expense(1.0, "Food"), &conn).unwrap();
        delete_expense(first.id, &conn).unwrap();

        let second = create_expense(new_expense(2.0, "Food"), &conn).unwrap();

        assert_ne!(first.id, second.id);
    }

    #[test]
    fn get_count() {
        let conn = get_test_connection();
        let want_count = 20;
        for i in 1..=want_count {
            create_expense(new_expense(i as f64, "Food"), &conn)
                .expect("Could not create expense");
        }

        let got_count = count_expenses(&conn).expect("Could not get count");

        assert_eq!(want_count, got_count);
    }
}
