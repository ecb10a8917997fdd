use rusqlite::Connection;
use time::Date;

use crate::{
    database_id::ExpenseId,
    db::initialize,
    expense::{Expense, NewExpense},
};

/// An expense with an empty description.
pub fn expense(id: ExpenseId, amount: f64, category: &str, date: Date) -> Expense {
    Expense {
        id,
        amount,
        category: category.to_owned(),
        description: String::new(),
        date,
    }
}

/// A new expense with an empty description.
pub fn new_expense(amount: f64, category: &str, date: Date) -> NewExpense {
    NewExpense {
        amount,
        category: category.to_owned(),
        description: String::new(),
        date,
    }
}

pub fn must_create_test_connection() -> Connection {
    let connection =
        Connection::open_in_memory().expect("could not create in-memory SQLite database");
    initialize(&connection).expect("could not initialize test DB");

    connection
}
