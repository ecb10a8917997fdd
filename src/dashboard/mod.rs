//! Dashboard module
//!
//! Provides an overview page with summary cards, charts and the largest
//! expenses for the selected timeframe.

mod cards;
mod charts;
mod handlers;
mod tables;

pub use handlers::get_dashboard_page;
