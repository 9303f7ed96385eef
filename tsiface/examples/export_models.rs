//! Example exporting a small domain model to TypeScript.
//!
//! Run with: `cargo run --example export_models [output.ts]`
//!
//! Set `RUST_LOG=tsiface_codegen=trace` to follow collection.

#![allow(dead_code)]

use std::collections::HashMap;
use tsiface::prelude::*;

#[derive(Reflect)]
#[tsiface(package = "shop")]
struct Customer {
    #[tsiface(rename = "id")]
    id: u64,
    #[tsiface(rename = "email")]
    email: String,
    #[tsiface(rename = "orders", omit_empty)]
    orders: Vec<Order>,
    #[tsiface(rename = "address")]
    address: Option<Address>,
}

#[derive(Reflect)]
#[tsiface(inline)]
struct Address {
    #[tsiface(rename = "street")]
    street: String,
    #[tsiface(rename = "postal_code")]
    postal_code: String,
}

#[derive(Reflect)]
#[tsiface(package = "shop")]
struct Order {
    #[tsiface(rename = "number")]
    number: u32,
    #[tsiface(rename = "customer")]
    customer: Option<Box<Customer>>,
    #[tsiface(rename = "lines")]
    lines: HashMap<String, u16>,
    #[tsiface(rename = "placed_at", type = "Date")]
    placed_at: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut exporter = Exporter::new(Config::builder().indent_with_spaces(2).build());
    exporter
        .header("// Code generated by export_models. DO NOT EDIT.")
        .add::<Customer>()?;

    match std::env::args().nth(1) {
        Some(path) => {
            exporter.write_to_path(&path)?;
            tracing::info!(%path, "declarations written");
        }
        None => print!("{}", exporter.generate()?),
    }
    Ok(())
}
