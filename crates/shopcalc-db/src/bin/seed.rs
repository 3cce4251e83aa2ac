//! # Seed Data Generator
//!
//! Populates the database with a starter catalog for development.
//!
//! ## Usage
//! ```bash
//! cargo run -p shopcalc-db --bin seed
//!
//! # Specify database path
//! cargo run -p shopcalc-db --bin seed -- --db ./data/shop.db
//! ```

use std::env;

use shopcalc_core::Product;
use shopcalc_db::{Database, DbConfig};

/// Starter catalog: (name, price per kg, category, favorite)
const STARTER_PRODUCTS: &[(&str, f64, &str, bool)] = &[
    ("Tomatoes", 40.0, "Vegetables", true),
    ("Onions", 35.0, "Vegetables", true),
    ("Potatoes", 30.0, "Vegetables", true),
    ("Green Chilli", 80.0, "Vegetables", false),
    ("Ginger", 120.0, "Vegetables", false),
    ("Apples", 180.0, "Fruits", true),
    ("Bananas", 60.0, "Fruits", true),
    ("Grapes", 90.0, "Fruits", false),
    ("Basmati Rice", 110.0, "Grains", true),
    ("Wheat Flour", 45.0, "Grains", false),
    ("Toor Dal", 140.0, "Pulses", false),
    ("Sugar", 44.0, "Staples", true),
    ("Salt", 22.0, "Staples", false),
    ("Groundnut Oil", 190.0, "Staples", false),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./shopcalc_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("ShopCalc Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./shopcalc_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("ShopCalc Seed Data Generator");
    println!("============================");
    println!("Database: {}", db_path);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    println!("✓ Connected, migrations applied");

    let existing = db.products().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        return Ok(());
    }

    for (name, price, category, favorite) in STARTER_PRODUCTS {
        let mut product = Product::new(name, *price, category, 0);
        product.is_favorite = *favorite;
        db.products().insert(&product).await?;
    }

    println!("✓ Seeded {} products", STARTER_PRODUCTS.len());
    Ok(())
}
