//! Defines the transaction record model and the database queries for records.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};

use crate::{Error, month::month_of_sale};

/// The label used for records that do not have a category.
pub const UNCATEGORIZED_LABEL: &str = "Uncategorized";

// ============================================================================
// MODELS
// ============================================================================

/// A product sale, as stored in the database and returned by the listing endpoint.
///
/// Records are never modified once stored. Missing prices and categories are
/// kept as `None` and only given a default value when they are used in a
/// computation, see [TransactionRecord::effective_price] and
/// [TransactionRecord::category_label].
///
/// To create a new `TransactionRecord`, use [TransactionRecord::build].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    /// The ID of the record.
    pub id: i64,
    /// The name of the product that was sold.
    pub title: String,
    /// A text description of the product.
    pub description: String,
    /// The price the product sold for, if known.
    pub price: Option<f64>,
    /// The category of the product, e.g. "electronics".
    pub category: Option<String>,
    /// A URL to a picture of the product.
    pub image: Option<String>,
    /// Whether the product was marked as sold in the source data.
    ///
    /// This is echoed back to clients but is not used by any of the statistics.
    pub sold: Option<bool>,
    /// When the sale happened, as written in the source data.
    pub date_of_sale: String,
}

impl TransactionRecord {
    /// Create a new record.
    ///
    /// Shortcut for [TransactionRecordBuilder] for discoverability.
    pub fn build(id: i64, title: &str, date_of_sale: &str) -> TransactionRecordBuilder {
        TransactionRecordBuilder {
            id,
            title: title.to_owned(),
            description: String::new(),
            price: None,
            category: None,
            image: None,
            sold: None,
            date_of_sale: date_of_sale.to_owned(),
        }
    }

    /// The price to use in sums and price ranges, zero when the price is missing.
    pub fn effective_price(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }

    /// The category to group the record under, [UNCATEGORIZED_LABEL] when the category is missing.
    pub fn category_label(&self) -> &str {
        self.category.as_deref().unwrap_or(UNCATEGORIZED_LABEL)
    }

    /// The English name of the month the sale happened in.
    ///
    /// # Errors
    /// Returns [Error::InvalidDate] if the date of sale cannot be parsed.
    pub fn month_of_sale(&self) -> Result<&'static str, Error> {
        month_of_sale(&self.date_of_sale)
    }
}

/// A builder for creating [TransactionRecord] instances.
///
/// Optional fields start out empty. Call `finalize()` to create the record.
#[derive(Debug, PartialEq, Clone)]
pub struct TransactionRecordBuilder {
    id: i64,
    title: String,
    description: String,
    price: Option<f64>,
    category: Option<String>,
    image: Option<String>,
    sold: Option<bool>,
    date_of_sale: String,
}

impl TransactionRecordBuilder {
    /// Set the description of the record.
    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_owned();
        self
    }

    /// Set the price of the record.
    pub fn price(mut self, price: Option<f64>) -> Self {
        self.price = price;
        self
    }

    /// Set the category of the record.
    pub fn category(mut self, category: Option<&str>) -> Self {
        self.category = category.map(str::to_owned);
        self
    }

    /// Set the image URL of the record.
    pub fn image(mut self, image: Option<&str>) -> Self {
        self.image = image.map(str::to_owned);
        self
    }

    /// Set whether the record was marked as sold.
    pub fn sold(mut self, sold: Option<bool>) -> Self {
        self.sold = sold;
        self
    }

    /// Create the record.
    pub fn finalize(self) -> TransactionRecord {
        TransactionRecord {
            id: self.id,
            title: self.title,
            description: self.description,
            price: self.price,
            category: self.category,
            image: self.image,
            sold: self.sold,
            date_of_sale: self.date_of_sale,
        }
    }
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Insert `record` into the database unless a record with the same ID already exists.
///
/// Returns `true` if the record was inserted, `false` if it was skipped.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn insert_record(record: &TransactionRecord, connection: &Connection) -> Result<bool, Error> {
    let rows_changed = connection.execute(
        "INSERT OR IGNORE INTO product (id, title, description, price, category, image, sold, date_of_sale)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        (
            record.id,
            &record.title,
            &record.description,
            record.price,
            &record.category,
            &record.image,
            record.sold,
            &record.date_of_sale,
        ),
    )?;

    Ok(rows_changed > 0)
}

/// Get every record in the database, ordered by ID.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn get_all_records(connection: &Connection) -> Result<Vec<TransactionRecord>, Error> {
    connection
        .prepare(
            "SELECT id, title, description, price, category, image, sold, date_of_sale
             FROM product ORDER BY id ASC",
        )?
        .query_map([], map_record_row)?
        .map(|record_result| record_result.map_err(Error::from))
        .collect()
}

/// Get the total number of records in the database.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn count_records(connection: &Connection) -> Result<i64, Error> {
    connection
        .query_row("SELECT COUNT(id) FROM product;", [], |row| row.get(0))
        .map_err(|error| error.into())
}

/// Create the product table in the database.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn create_product_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS product (
                id INTEGER PRIMARY KEY,
                title TEXT NOT NULL,
                description TEXT NOT NULL,
                price REAL,
                category TEXT,
                image TEXT,
                sold INTEGER,
                date_of_sale TEXT NOT NULL
                )",
        (),
    )?;

    Ok(())
}

/// Map a database row to a [TransactionRecord].
pub fn map_record_row(row: &Row) -> Result<TransactionRecord, rusqlite::Error> {
    Ok(TransactionRecord {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        price: row.get(3)?,
        category: row.get(4)?,
        image: row.get(5)?,
        sold: row.get(6)?,
        date_of_sale: row.get(7)?,
    })
}

// ============================================================================
// TESTS
// ============================================================================
