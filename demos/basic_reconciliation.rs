//! Basic reconciliation example
//!
//! Run with `RUST_LOG=reconcile_core=trace` to see every match decision.

use reconcile_core::{into_rows, LedgerBuilder, ReconciliationEngine};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Reconcile Core - Basic Reconciliation Example\n");

    let bank = LedgerBuilder::new()
        .transaction("2024-01-10", "groceries", "84.20", "FreshMart")
        .transaction("2024-01-10", "groceries", "84.20", "FreshMart")
        .transaction("2024-01-15", "utilities", "120.00", "City Power")
        .transaction("2024-01-31", "rent", "1500.00", "Landlord LLC")
        .build();

    let books = LedgerBuilder::new()
        .transaction("2024-01-09", "groceries", "84.20", "FreshMart")
        .transaction("2024-01-16", "utilities", "120.00", "City Power")
        .transaction("2024-02-01", "rent", "1500", "Landlord LLC")
        .transaction("2024-01-20", "subscriptions", "9.99", "StreamCo")
        .build();

    let engine = ReconciliationEngine::new();
    let result = engine.reconcile(&bank, &books)?;
    let summary = result.summary();

    println!(
        "Matched {} pairs (window ±{} day)",
        summary.matched,
        engine.window_days()
    );
    println!(
        "Missing: {} of {} bank records, {} of {} book records\n",
        summary.first_missing, summary.first_total, summary.second_missing, summary.second_total
    );

    let (bank_out, books_out) = result.into_outputs();

    println!("Bank statement:");
    for row in into_rows(bank_out) {
        println!("  {}", row.join(" | "));
    }

    println!("\nBooks:");
    for row in into_rows(books_out) {
        println!("  {}", row.join(" | "));
    }

    Ok(())
}
