//! Builds every month based view from one filtered set of records.

use serde::{Deserialize, Serialize};

use crate::{
    dashboard::{
        categories::{CategoryCount, count_by_category},
        price_ranges::{PriceRangeCount, count_by_price_range},
        statistics::{Statistics, calculate_statistics},
    },
    transaction::{RecordFilter, TransactionRecord},
};

/// The statistics, bar chart and pie chart for one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedData {
    /// The sales totals for the month.
    pub statistics: Statistics,
    /// The number of records per price range.
    pub bar_chart: Vec<PriceRangeCount>,
    /// The number of records per category.
    pub pie_chart: Vec<CategoryCount>,
}

/// Calculate all the month based views for `month`.
///
/// The records are filtered once and the same filtered set is used for every
/// view, so the three views always agree with each other.
pub fn build_combined_data(records: &[TransactionRecord], month: &str) -> CombinedData {
    let month_records = RecordFilter::for_month(month).apply(records);

    CombinedData {
        statistics: calculate_statistics(&month_records, records),
        bar_chart: count_by_price_range(&month_records),
        pie_chart: count_by_category(&month_records),
    }
}
