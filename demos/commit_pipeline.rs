//! Demo: threading a commitment tag through an async pipeline.
//!
//! Run with: cargo run --example commit_pipeline
//!
//! The pipeline parses a candidate value, validates it locally, then awaits
//! a simulated remote reservation that durably records the value before
//! deciding whether to accept it. The `Outcome` returned from each stage
//! tells the caller not just whether the stage succeeded, but whether any
//! durable state now exists that a retry or rollback would have to account
//! for.

use commitment::{Fault, Outcome};
use thiserror::Error;
use tokio::time::{sleep, Duration};

#[derive(Clone, Debug, PartialEq, Eq, Error)]
enum ReserveError {
    #[error("not a natural: {0}")]
    NotANatural(String),

    #[error("quantity must be above 10")]
    TooSmall,

    #[error("warehouse rejected quantity {0}")]
    WarehouseRejected(u32),
}

fn parse_quantity(input: &str) -> Outcome<u32, ReserveError> {
    Outcome::from_option(input.parse().ok(), ReserveError::NotANatural(input.to_string()))
}

fn validate_quantity(n: u32) -> Outcome<u32, ReserveError> {
    if n > 10 {
        Outcome::Settled(n)
    } else {
        Outcome::Failed(Fault::Settled(ReserveError::TooSmall))
    }
}

/// Simulated warehouse call. The reservation row is written before the
/// acceptance check runs, so every outcome from here on is tagged Committed.
async fn reserve_stock(n: u32) -> Outcome<u32, ReserveError> {
    println!("  warehouse: writing reservation for {n} units...");
    sleep(Duration::from_millis(50)).await;

    if n > 100 {
        Outcome::Failed(Fault::Committed(ReserveError::WarehouseRejected(n)))
    } else {
        Outcome::Committed(n)
    }
}

async fn run_pipeline(input: &str) -> Outcome<u32, ReserveError> {
    let local = parse_quantity(input).and_then(validate_quantity);

    match local {
        Outcome::Settled(n) | Outcome::Committed(n) => reserve_stock(n).await,
        Outcome::Failed(fault) => Outcome::Failed(fault),
    }
}

fn report(input: &str, outcome: &Outcome<u32, ReserveError>) {
    match outcome {
        Outcome::Settled(n) => println!("{input}: reserved {n}, nothing durable written"),
        Outcome::Committed(n) => println!("{input}: reserved {n}, reservation is on record"),
        Outcome::Failed(Fault::Settled(err)) => {
            println!("{input}: rejected ({err}), safe to retry as-is")
        }
        Outcome::Failed(Fault::Committed(err)) => {
            println!("{input}: failed ({err}), but a reservation row exists and needs cleanup")
        }
    }
}

#[tokio::main]
async fn main() {
    for input in ["15", "5", "500", "banana"] {
        println!("processing {input:?}");
        let outcome = run_pipeline(input).await;
        report(input, &outcome);
        println!();
    }
}
