use std::error::Error;
use std::path::Path;
use std::process::exit;
use std::sync::{Arc, Mutex};

use clap::Parser;
use rusqlite::Connection;

use stockroom::{
    CategoryName, CategoryStore, NewProduct, ProductStore, SQLiteCategoryStore, SQLiteProductStore,
    initialize_db,
};

/// A utility for creating a demo catalogue database for the stockroom server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

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

    println!("Creating demo catalogue...");

    let conn = Arc::new(Mutex::new(conn));
    let categories = SQLiteCategoryStore::new(conn.clone());
    let products = SQLiteProductStore::new(conn);

    let electronics = categories.create(CategoryName::new("Electronics")?)?;
    let groceries = categories.create(CategoryName::new("Groceries")?)?;

    for (name, price, stock, category_id) in [
        ("Mechanical Keyboard", 89.99, 12, electronics.id),
        ("Wireless Mouse", 24.50, 30, electronics.id),
        ("27\" Monitor", 219.00, 7, electronics.id),
        ("Apples (1kg)", 3.99, 100, groceries.id),
        ("Oat Milk", 2.49, 48, groceries.id),
    ] {
        products.create(NewProduct {
            name: name.to_string(),
            price,
            stock,
            category_id,
        })?;
    }

    println!("Success!");

    Ok(())
}
