//! Dashboard HTTP handlers.
//!
//! Every handler takes a required `month` query parameter, reads one snapshot
//! of records and returns a JSON view of the records sold in that month.

use std::sync::Arc;

use axum::{
    Json,
    extract::{FromRef, Query, State, rejection::QueryRejection},
};
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error,
    dashboard::{
        categories::{CategoryCount, count_by_category},
        combined::{CombinedData, build_combined_data},
        price_ranges::{PriceRangeCount, count_by_price_range},
        statistics::{Statistics, calculate_statistics},
    },
    transaction::{RecordFilter, RecordSource, TransactionRecord},
};

/// The state needed for the dashboard endpoints.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// Where to read the transaction records from.
    pub record_source: Arc<dyn RecordSource>,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            record_source: state.record_source.clone(),
        }
    }
}

/// The query parameters for the dashboard endpoints.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MonthQuery {
    /// The month to summarise, e.g. "March".
    pub month: Option<String>,
}

impl MonthQuery {
    /// Get the month, treating an empty month the same as a missing one.
    ///
    /// # Errors
    /// Returns [Error::MissingMonth] if the month is missing or empty.
    fn require_month(self) -> Result<String, Error> {
        self.month
            .filter(|month| !month.is_empty())
            .ok_or(Error::MissingMonth)
    }
}

/// The response body for the statistics endpoint.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct StatisticsResponse {
    /// Always `true`, failed requests use the error body instead.
    pub success: bool,
    /// The sales totals for the month.
    pub statistics: Statistics,
}

/// The response body for the chart endpoints.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ChartResponse<T> {
    /// Always `true`, failed requests use the error body instead.
    pub success: bool,
    /// The chart data points.
    pub data: Vec<T>,
}

/// The response body for the combined data endpoint.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CombinedDataResponse {
    /// Always `true`, failed requests use the error body instead.
    pub success: bool,
    /// The statistics, bar chart and pie chart for the month.
    pub combined_data: CombinedData,
}

/// Validate the query and then read the records.
///
/// The month is checked before the record source is touched.
fn get_month_and_records(
    query: Result<Query<MonthQuery>, QueryRejection>,
    state: &DashboardState,
) -> Result<(String, Vec<TransactionRecord>), Error> {
    let Query(query) = query?;
    let month = query.require_month()?;

    let records = state
        .record_source
        .get_all_records()
        .inspect_err(|error| tracing::error!("could not fetch transactions: {error}"))?;

    Ok((month, records))
}

/// Get the total sale amount, sold count and not sold count for a month.
pub async fn get_statistics_endpoint(
    State(state): State<DashboardState>,
    query: Result<Query<MonthQuery>, QueryRejection>,
) -> Result<Json<StatisticsResponse>, Error> {
    let (month, records) = get_month_and_records(query, &state)?;
    let month_records = RecordFilter::for_month(&month).apply(&records);

    Ok(Json(StatisticsResponse {
        success: true,
        statistics: calculate_statistics(&month_records, &records),
    }))
}

/// Get the number of records in each price range for a month.
pub async fn get_bar_chart_endpoint(
    State(state): State<DashboardState>,
    query: Result<Query<MonthQuery>, QueryRejection>,
) -> Result<Json<ChartResponse<PriceRangeCount>>, Error> {
    let (month, records) = get_month_and_records(query, &state)?;
    let month_records = RecordFilter::for_month(&month).apply(&records);

    Ok(Json(ChartResponse {
        success: true,
        data: count_by_price_range(&month_records),
    }))
}

/// Get the number of records in each category for a month.
pub async fn get_pie_chart_endpoint(
    State(state): State<DashboardState>,
    query: Result<Query<MonthQuery>, QueryRejection>,
) -> Result<Json<ChartResponse<CategoryCount>>, Error> {
    let (month, records) = get_month_and_records(query, &state)?;
    let month_records = RecordFilter::for_month(&month).apply(&records);

    Ok(Json(ChartResponse {
        success: true,
        data: count_by_category(&month_records),
    }))
}

/// Get the statistics, bar chart and pie chart for a month in one response.
pub async fn get_combined_data_endpoint(
    State(state): State<DashboardState>,
    query: Result<Query<MonthQuery>, QueryRejection>,
) -> Result<Json<CombinedDataResponse>, Error> {
    let (month, records) = get_month_and_records(query, &state)?;

    Ok(Json(CombinedDataResponse {
        success: true,
        combined_data: build_combined_data(&records, &month),
    }))
}
