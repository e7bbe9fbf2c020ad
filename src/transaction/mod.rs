//! Transaction records and the endpoint for listing them.
//!
//! This module contains:
//! - The `TransactionRecord` model and the database functions for storing and reading records
//! - The `RecordSource` trait that request handlers read their snapshot of records from
//! - Month and search filtering shared by every endpoint
//! - The handler for the transaction listing endpoint

mod core;
mod filter;
mod list_endpoint;
mod source;

pub use core::{
    TransactionRecord, TransactionRecordBuilder, count_records, create_product_table,
    insert_record,
};
#[cfg(test)]
pub use core::UNCATEGORIZED_LABEL;
pub use filter::RecordFilter;
pub use list_endpoint::list_transactions_endpoint;
pub use source::{RecordSource, SQLiteRecordSource};
