//! The endpoint for listing transaction records with search and pagination.

use std::sync::Arc;

use axum::{
    Json,
    extract::{FromRef, Query, State, rejection::QueryRejection},
};
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error,
    pagination::{PageRequest, PaginationConfig},
    transaction::{RecordSource, TransactionRecord, filter::RecordFilter},
};

/// The state needed for listing transactions.
#[derive(Debug, Clone)]
pub struct ListTransactionsState {
    /// Where to read the transaction records from.
    pub record_source: Arc<dyn RecordSource>,
    /// The default page and page size.
    pub pagination_config: PaginationConfig,
}

impl FromRef<AppState> for ListTransactionsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            record_source: state.record_source.clone(),
            pagination_config: state.pagination_config.clone(),
        }
    }
}

/// The query parameters for listing transactions.
///
/// The page parameters are kept as text so that invalid values can be
/// reported with the app's own error response.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTransactionsQuery {
    /// The page number to return, starting from 1.
    pub page: Option<String>,
    /// The maximum number of records per page.
    pub per_page: Option<String>,
    /// Text to look for in the title, description or price.
    pub search: Option<String>,
    /// Only include records sold in this month, e.g. "March".
    pub month: Option<String>,
}

/// One page of transaction records.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListTransactionsResponse {
    /// Always `true`, failed requests use the error body instead.
    pub success: bool,
    /// The records on the requested page.
    pub data: Vec<TransactionRecord>,
    /// The number of records that matched the filters across all pages.
    pub total_records: usize,
    /// The page number that was returned.
    pub current_page: u64,
    /// The page size that was used.
    pub per_page: u64,
}

/// List transaction records, optionally filtered by month and a search term.
///
/// # Errors
/// Returns [Error::InvalidQuery] if the query string cannot be read,
/// [Error::InvalidPagination] if `page` or `perPage` is not a positive
/// integer, or the record source's error if the records could not be read.
pub async fn list_transactions_endpoint(
    State(state): State<ListTransactionsState>,
    query: Result<Query<ListTransactionsQuery>, QueryRejection>,
) -> Result<Json<ListTransactionsResponse>, Error> {
    let Query(query) = query?;
    let page_request = PageRequest::parse(
        query.page.as_deref(),
        query.per_page.as_deref(),
        &state.pagination_config,
    )?;

    let records = state
        .record_source
        .get_all_records()
        .inspect_err(|error| tracing::error!("could not fetch transactions: {error}"))?;

    let filtered = RecordFilter::new(query.month.as_deref(), query.search.as_deref()).apply(&records);
    let page = page_request.paginate(&filtered);

    Ok(Json(ListTransactionsResponse {
        success: true,
        data: page.items.iter().map(|&record| record.clone()).collect(),
        total_records: page.total,
        current_page: page_request.page,
        per_page: page_request.per_page,
    }))
}
