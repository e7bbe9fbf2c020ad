//! Counts of records per price range for the bar chart.

use serde::{Deserialize, Serialize};

use crate::transaction::TransactionRecord;

/// A price range with an inclusive upper bound.
///
/// The lower bound is the previous range's upper bound (exclusive). The last
/// range has no upper bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    /// The label shown on the chart, e.g. "101-200".
    pub label: &'static str,
    /// The highest price in the range, `None` for the open-ended last range.
    pub upper_bound: Option<f64>,
}

/// The ten fixed price ranges, in chart order.
pub const PRICE_RANGES: [PriceRange; 10] = [
    PriceRange {
        label: "0-100",
        upper_bound: Some(100.0),
    },
    PriceRange {
        label: "101-200",
        upper_bound: Some(200.0),
    },
    PriceRange {
        label: "201-300",
        upper_bound: Some(300.0),
    },
    PriceRange {
        label: "301-400",
        upper_bound: Some(400.0),
    },
    PriceRange {
        label: "401-500",
        upper_bound: Some(500.0),
    },
    PriceRange {
        label: "501-600",
        upper_bound: Some(600.0),
    },
    PriceRange {
        label: "601-700",
        upper_bound: Some(700.0),
    },
    PriceRange {
        label: "701-800",
        upper_bound: Some(800.0),
    },
    PriceRange {
        label: "801-900",
        upper_bound: Some(900.0),
    },
    PriceRange {
        label: "901-above",
        upper_bound: None,
    },
];

/// The number of records in a price range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRangeCount {
    /// The price range label, e.g. "101-200".
    pub range: String,
    /// The number of records with a price in the range.
    pub count: usize,
}

/// Count how many of `records` fall into each of the [PRICE_RANGES].
///
/// Always returns all ten ranges in order, including empty ones. Missing
/// prices count as zero and negative prices fall into the first range.
pub fn count_by_price_range(records: &[&TransactionRecord]) -> Vec<PriceRangeCount> {
    let mut counts = [0usize; PRICE_RANGES.len()];

    for record in records {
        counts[price_range_index(record.effective_price())] += 1;
    }

    PRICE_RANGES
        .iter()
        .zip(counts)
        .map(|(price_range, count)| PriceRangeCount {
            range: price_range.label.to_owned(),
            count,
        })
        .collect()
}

fn price_range_index(price: f64) -> usize {
    PRICE_RANGES
        .iter()
        .position(|price_range| {
            price_range
                .upper_bound
                .is_none_or(|upper_bound| price <= upper_bound)
        })
        .unwrap_or(PRICE_RANGES.len() - 1)
}
