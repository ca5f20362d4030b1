use anyhow::{anyhow, Result};
use clap::ValueEnum;
use std::env;
use string_validator::Predicate;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <value>...", args[0]);
        return Err(anyhow!("Missing value argument"));
    }

    for value in &args[1..] {
        classify(value);
    }

    Ok(())
}

// Runs every offline predicate; existing-email is skipped to avoid DNS.
fn classify(value: &str) {
    println!("{:?}", value);
    for predicate in Predicate::value_variants() {
        if predicate.needs_network() {
            continue;
        }
        let mark = if predicate.evaluate(value) { "yes" } else { "no" };
        println!("  {:<20} {}", predicate.name(), mark);
    }
}
