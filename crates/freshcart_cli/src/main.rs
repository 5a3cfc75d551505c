//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `freshcart_core` wiring.
//! - Print a read-only summary of the store a path points at, keeping the
//!   output deterministic for quick local sanity checks.

use freshcart_core::db::open_db;
use freshcart_core::{pricing, SqliteCollectionRepository, StoreService};
use std::process::ExitCode;

const DEFAULT_STORE_FILE: &str = "freshcart.sqlite3";

fn main() -> ExitCode {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_STORE_FILE.to_string());

    let conn = match open_db(&path) {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("freshcart: failed to open store `{path}`: {err}");
            return ExitCode::FAILURE;
        }
    };

    let store = match StoreService::load(SqliteCollectionRepository::new(&conn)) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("freshcart: failed to load collections: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("freshcart_core version={}", freshcart_core::core_version());
    println!("store={path}");

    println!("products={}", store.products().len());
    for product in store.products() {
        let discount = pricing::discount_percent(product)
            .map(|percent| format!(" ({percent}% off)"))
            .unwrap_or_default();
        println!(
            "  [{}] {} Rs {}{discount} / {}",
            product.category.label(),
            product.name,
            product.price,
            product.unit
        );
    }

    let lines = pricing::cart_lines(store.products(), store.cart());
    let subtotal = pricing::subtotal(&lines);
    println!(
        "cart_lines={} subtotal={subtotal} checkout_total={}",
        lines.len(),
        pricing::checkout_total(subtotal)
    );
    println!(
        "orders={} total_sales={}",
        store.orders().len(),
        pricing::total_sales(store.orders())
    );

    ExitCode::SUCCESS
}
