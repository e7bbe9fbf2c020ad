use std::{error::Error, fs, path::Path, process::exit};

use clap::Parser;
use rusqlite::Connection;

use sales_insights::{count_records, initialize_db, parse_seed_records, seed_records};

/// A utility for loading transaction records into the database of sales_insights.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the SQLite database. The database is created if it does not exist.
    #[arg(long, short)]
    db_path: String,

    /// File path to a JSON array of transaction records.
    #[arg(long, short)]
    input: String,
}

/// Create the database if needed and insert the records from the input file.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let input_path = Path::new(&args.input);
    if !input_path.is_file() {
        eprintln!("Could not find the input file {input_path:#?}.");
        exit(1);
    }

    println!("Reading records from {input_path:#?}");
    let records = parse_seed_records(&fs::read_to_string(input_path)?)?;

    println!("Opening database at {:#?}", args.db_path);
    let conn = Connection::open(&args.db_path)?;
    initialize_db(&conn)?;

    println!("Seeding {} records...", records.len());
    let summary = seed_records(&records, &conn)?;

    println!(
        "Success! Inserted {} records, skipped {} existing records. The database now holds {} records.",
        summary.inserted,
        summary.skipped,
        count_records(&conn)?
    );

    Ok(())
}
