//! Dashboard module
//!
//! Provides month based summaries of the transaction records: sales
//! statistics, a price range bar chart, a category pie chart and a combined
//! view of all three.

mod categories;
mod combined;
mod handlers;
mod price_ranges;
mod statistics;

pub use handlers::{
    get_bar_chart_endpoint, get_combined_data_endpoint, get_pie_chart_endpoint,
    get_statistics_endpoint,
};
