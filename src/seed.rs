//! Populates the database with transaction records from a JSON file.

use rusqlite::{Connection, Transaction as SqlTransaction};

use crate::{
    Error,
    transaction::{TransactionRecord, insert_record},
};

/// The outcome of seeding the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    /// The number of records that were added.
    pub inserted: usize,
    /// The number of records that were skipped because their ID already existed.
    pub skipped: usize,
}

/// Parse a JSON array of transaction records.
///
/// Records use the same camelCase field names as the API, e.g. `dateOfSale`.
/// `price`, `category`, `image` and `sold` may be missing or `null`.
///
/// # Errors
/// Returns [Error::InvalidSeedData] if `json` is not an array of records.
pub fn parse_seed_records(json: &str) -> Result<Vec<TransactionRecord>, Error> {
    serde_json::from_str(json).map_err(|error| Error::InvalidSeedData(error.to_string()))
}

/// Insert `records` into the database in a single SQL transaction.
///
/// Records whose ID is already in the database are skipped, so seeding the
/// same data twice is safe.
///
/// # Errors
/// Returns [Error::SqlError] if a record could not be inserted. No records
/// are inserted in that case.
pub fn seed_records(
    records: &[TransactionRecord],
    connection: &Connection,
) -> Result<SeedSummary, Error> {
    let transaction =
        SqlTransaction::new_unchecked(connection, rusqlite::TransactionBehavior::Immediate)?;

    let mut inserted = 0;
    for record in records {
        if insert_record(record, &transaction)? {
            inserted += 1;
        } else {
            tracing::debug!("skipping record {} since it already exists", record.id);
        }
    }

    transaction.commit()?;

    Ok(SeedSummary {
        inserted,
        skipped: records.len() - inserted,
    })
}
