//! Summary statistics for the records sold in a month.

use serde::{Deserialize, Serialize};

use crate::transaction::TransactionRecord;

/// Sales totals for one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    /// The sum of the prices of the records sold in the month. Missing prices count as zero.
    pub total_sale_amount: f64,
    /// The number of records sold in the month.
    pub total_sold_items: usize,
    /// The number of records in the whole dataset that were not sold in the month.
    ///
    /// This counts every record outside the month, regardless of price or of
    /// the record's `sold` flag.
    pub total_not_sold_items: usize,
}

/// Calculate the statistics for the records in `month_records`.
///
/// `month_records` must be the result of filtering `all_records` by month.
pub fn calculate_statistics(
    month_records: &[&TransactionRecord],
    all_records: &[TransactionRecord],
) -> Statistics {
    Statistics {
        total_sale_amount: month_records
            .iter()
            .map(|record| record.effective_price())
            .sum(),
        total_sold_items: month_records.len(),
        total_not_sold_items: all_records.len().saturating_sub(month_records.len()),
    }
}
