use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;
use time::{Duration, OffsetDateTime};

use expense_tracker::{
    expense::{NewExpense, create_expense},
    initialize_db,
};

/// A utility for creating a demo database for the expense tracker.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

const DEMO_EXPENSES: [(f64, &str, &str, i64); 12] = [
    (245.0, "Food", "Groceries", 0),
    (120.0, "Transportation", "Bus pass top up", 1),
    (18000.0, "Housing", "Rent", 3),
    (499.0, "Entertainment", "Movie tickets", 5),
    (1350.5, "Utilities", "Electricity bill", 9),
    (800.0, "Healthcare", "Pharmacy", 14),
    (2199.0, "Shopping", "Running shoes", 20),
    (350.0, "Food", "Dinner with friends", 27),
    (7400.0, "Travel", "Train to Jaipur", 45),
    (3200.0, "Education", "Online course", 90),
    (60.0, "Other", "Stationery", 180),
    (12500.0, "Travel", "Flights", 300),
];

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating demo expenses...");
    let today = OffsetDateTime::now_utc().date();

    for (amount, category, description, days_ago) in DEMO_EXPENSES {
        create_expense(
            NewExpense {
                amount,
                category: category.to_owned(),
                description: description.to_owned(),
                date: today - Duration::days(days_ago),
            },
            &conn,
        )?;
    }

    println!("Success!");

    Ok(())
}
