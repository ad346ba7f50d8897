// ============================================================================
// Basic Usage Example
// ============================================================================

use pantry_ledger::prelude::*;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    println!("=== Pantry Ledger Example ===\n");

    // Each run owns its own inventory
    let mut inventory = match InventoryBuilder::new()
        .with_event_handler(Arc::new(LoggingEventHandler))
        .with_default_in_advance_days(3)
        .build()
    {
        Ok(inventory) => inventory,
        Err(err) => {
            eprintln!("Invalid configuration: {}", err);
            return;
        },
    };

    if let Err(err) = inventory.add("Eggs from Farm No1", Decimal::from(4), Some("2023-07-15")) {
        eprintln!("Could not add eggs: {}", err);
    }

    println!("Adding notes...");
    let notes = [
        "Milk 2",
        "Yogurt 0.5 2023-07-18",
        "Watermelon 1 2099-08-01",
        "Bread two",
        "Cheese 1 2023-02-30",
    ];
    for note in notes {
        match inventory.add_by_note(note) {
            Ok(()) => println!("  added   {:?}", note),
            Err(err) => println!("  skipped {:?}: {}", note, err),
        }
    }

    println!("\n=== Ledger ===");
    for entry in inventory.ledger() {
        println!("{}:", entry.title);
        for batch in &entry.batches {
            match batch.expiration_date {
                Some(date) => println!("  {} (expires {})", batch.quantity, date),
                None => println!("  {}", batch.quantity),
            }
        }
    }

    println!("\n=== Queries ===");
    println!("find(\"egg\")   = {:?}", inventory.find("egg"));
    println!("amount(\"egg\") = {}", inventory.amount("egg"));
    println!("amount(\"\")    = {}", inventory.amount(""));

    println!("\n=== Expiring within 3 days ===");
    for (title, quantity) in inventory.expire_default() {
        println!("  {} x {}", quantity, title);
    }
}
