//! Recording, editing and listing expenses.

mod core;
mod create_endpoint;
mod create_page;
mod delete_endpoint;
mod edit_endpoint;
mod edit_page;
pub(crate) mod form;
mod list_endpoint;
mod list_page;

#[cfg(test)]
pub(crate) mod test_utils;

pub use core::{
    Expense, NewExpense, count_expenses, create_expense, create_expense_table, delete_expense,
    get_expense, list_expenses, map_expense_row, replace_expense,
};
pub use create_endpoint::create_expense_endpoint;
pub use create_page::get_create_expense_page;
pub use delete_endpoint::delete_expense_endpoint;
pub use edit_endpoint::edit_expense_endpoint;
pub use edit_page::get_edit_expense_page;
pub use form::{AmountInput, ExpenseForm, MAX_AMOUNT};
pub use list_endpoint::list_expenses_endpoint;
pub use list_page::get_expenses_page;
