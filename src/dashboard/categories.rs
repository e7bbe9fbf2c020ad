//! Counts of records per category for the pie chart.

use std::collections::{HashMap, hash_map::Entry};

use serde::{Deserialize, Serialize};

use crate::transaction::TransactionRecord;

/// The number of records in a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    /// The category name, or "Uncategorized" for records without one.
    pub category: String,
    /// The number of records in the category.
    pub count: usize,
}

/// Count how many of `records` belong to each category.
///
/// Categories are listed in the order they first appear in `records`.
pub fn count_by_category(records: &[&TransactionRecord]) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = Vec::new();
    let mut index_by_category: HashMap<&str, usize> = HashMap::new();

    for record in records {
        match index_by_category.entry(record.category_label()) {
            Entry::Occupied(entry) => counts[*entry.get()].count += 1,
            Entry::Vacant(entry) => {
                entry.insert(counts.len());
                counts.push(CategoryCount {
                    category: record.category_label().to_owned(),
                    count: 1,
                });
            }
        }
    }

    counts
}

#[cfg(test)]
mod tests {
    use crate::transaction::{TransactionRecord, UNCATEGORIZED_LABEL};

    use super::{CategoryCount, count_by_category};

    fn create_test_record(id: i64, category: Option<&str>) -> TransactionRecord {
        TransactionRecord::build(id, "", "2022-01-01")
            .category(category)
            .finalize()
    }

    fn category_count(category: &str, count: usize) -> CategoryCount {
        CategoryCount {
            category: category.to_owned(),
            count,
        }
    }

    #[test]
    fn counts_in_first_seen_order() {
        let records = vec![
            create_test_record(1, Some("jewelery")),
            create_test_record(2, Some("electronics")),
            create_test_record(3, Some("jewelery")),
            create_test_record(4, Some("men's clothing")),
            create_test_record(5, Some("electronics")),
            create_test_record(6, Some("electronics")),
        ];
        let records: Vec<_> = records.iter().collect();

        let got = count_by_category(&records);

        assert_eq!(
            got,
            vec![
                category_count("jewelery", 2),
                category_count("electronics", 3),
                category_count("men's clothing", 1),
            ]
        );
    }

    #[test]
    fn missing_category_is_uncategorized() {
        let records = vec![
            create_test_record(1, None),
            create_test_record(2, Some("electronics")),
            create_test_record(3, None),
        ];
        let records: Vec<_> = records.iter().collect();

        let got = count_by_category(&records);

        assert_eq!(
            got,
            vec![
                category_count(UNCATEGORIZED_LABEL, 2),
                category_count("electronics", 1),
            ]
        );
    }

    #[test]
    fn categories_are_case_sensitive() {
        let records = vec![
            create_test_record(1, Some("Electronics")),
            create_test_record(2, Some("electronics")),
        ];
        let records: Vec<_> = records.iter().collect();

        let got = count_by_category(&records);

        assert_eq!(got.len(), 2);
    }

    #[test]
    fn empty_input_gives_no_categories() {
        assert!(count_by_category(&[]).is_empty());
    }

    #[test]
    fn counts_add_up_to_number_of_records() {
        let categories = [Some("a"), Some("b"), None, Some("c")];
        let records: Vec<_> = (0..37)
            .map(|i| create_test_record(i, categories[i as usize % categories.len()]))
            .collect();
        let records: Vec<_> = records.iter().collect();

        let total: usize = count_by_category(&records)
            .iter()
            .map(|category_count| category_count.count)
            .sum();

        assert_eq!(total, records.len());
    }
}
