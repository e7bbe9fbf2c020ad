//! Month and free-text filtering of transaction records.

use crate::transaction::core::TransactionRecord;

/// Selects the records that match a month and a search term.
///
/// An empty month or search term is treated the same as a missing one and
/// does not filter anything out.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordFilter {
    month: Option<String>,
    search: Option<String>,
}

impl RecordFilter {
    /// Create a filter from the optional `month` and `search` query parameters.
    pub fn new(month: Option<&str>, search: Option<&str>) -> Self {
        let non_empty = |text: Option<&str>| text.filter(|text| !text.is_empty()).map(str::to_owned);

        Self {
            month: non_empty(month),
            search: non_empty(search),
        }
    }

    /// Create a filter that only keeps records sold in `month`, e.g. "March".
    pub fn for_month(month: &str) -> Self {
        Self::new(Some(month), None)
    }

    /// Get the records that match both the month and the search term.
    ///
    /// The records are returned in the same order as in `records`.
    ///
    /// Month matching is exact and case-sensitive. When a month is set,
    /// records whose date of sale cannot be parsed are left out.
    pub fn apply<'a>(&self, records: &'a [TransactionRecord]) -> Vec<&'a TransactionRecord> {
        let search = self
            .search
            .as_deref()
            .map(|search| (search, search.to_lowercase()));

        records
            .iter()
            .filter(|record| {
                self.month
                    .as_deref()
                    .is_none_or(|month| matches_month(record, month))
            })
            .filter(|record| {
                search
                    .as_ref()
                    .is_none_or(|(search, search_lower)| matches_search(record, search, search_lower))
            })
            .collect()
    }
}

fn matches_month(record: &TransactionRecord, month: &str) -> bool {
    match record.month_of_sale() {
        Ok(month_of_sale) => month_of_sale == month,
        Err(error) => {
            tracing::warn!("excluding record {} from month filter: {error}", record.id);
            false
        }
    }
}

/// Title and description are compared case-insensitively, the price is
/// compared against its decimal text as is.
fn matches_search(record: &TransactionRecord, search: &str, search_lower: &str) -> bool {
    record.title.to_lowercase().contains(search_lower)
        || record.description.to_lowercase().contains(search_lower)
        || record
            .price
            .is_some_and(|price| price.to_string().contains(search))
}
