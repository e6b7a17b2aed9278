use std::error::Error;
use std::path::Path;
use std::process::exit;
use std::sync::{Arc, Mutex};

use clap::Parser;
use rusqlite::Connection;

use category_admin::{
    CategoryName, CategoryStore, NewCategory, SQLiteCategoryStore, initialize_db,
};

/// The categories added to a new test database.
const SAMPLE_CATEGORIES: [&str; 7] = [
    "Berita",
    "Pengumuman",
    "Prestasi",
    "Ekstrakurikuler",
    "Kegiatan Sekolah",
    "Artikel Guru",
    "Info PPDB",
];

/// A utility for creating a test database for the category admin API server.
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

    if output_path
        .extension()
        .is_none_or(|extension| extension.is_empty())
    {
        eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
        exit(1);
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let connection = Connection::open(output_path)?;

    initialize_db(&connection)?;

    println!("Creating sample categories...");

    let store = SQLiteCategoryStore::new(Arc::new(Mutex::new(connection)))?;
    for name in SAMPLE_CATEGORIES {
        let category = NewCategory::new(CategoryName::new(name)?, None);
        store.create(category)?;
    }

    println!("Success!");

    Ok(())
}
