//! This modules defines the common functionality for paging data.

use crate::Error;

/// The config for pagination
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationConfig {
    /// The page number to default to when not specified in a request.
    pub default_page: u64,
    /// The number of records to return per page when not specified in a request.
    pub default_page_size: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page: 1,
            default_page_size: 10,
        }
    }
}

/// A validated request for one page of data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// The page number, starting from 1.
    pub page: u64,
    /// The maximum number of items on a page.
    pub per_page: u64,
}

/// One page of items and the number of items across all pages.
#[derive(Debug, PartialEq)]
pub struct Page<'a, T> {
    /// The items on the requested page.
    pub items: &'a [T],
    /// The number of items before paging.
    pub total: usize,
}

impl PageRequest {
    /// Parse the raw `page` and `per_page` query parameters.
    ///
    /// Missing or empty parameters fall back to the defaults in `config`.
    ///
    /// # Errors
    /// Returns [Error::InvalidPagination] if either parameter is not a positive integer.
    pub fn parse(
        page: Option<&str>,
        per_page: Option<&str>,
        config: &PaginationConfig,
    ) -> Result<Self, Error> {
        Ok(Self {
            page: parse_positive_integer(page)?.unwrap_or(config.default_page),
            per_page: parse_positive_integer(per_page)?.unwrap_or(config.default_page_size),
        })
    }

    /// Get the items in `[(page - 1) * per_page, page * per_page)`.
    ///
    /// The range is clamped to `items`, so pages past the end are empty.
    pub fn paginate<'a, T>(&self, items: &'a [T]) -> Page<'a, T> {
        let to_index = |value: u64| usize::try_from(value).unwrap_or(usize::MAX);

        let offset = self.page.saturating_sub(1).saturating_mul(self.per_page);
        let start = to_index(offset).min(items.len());
        let end = start.saturating_add(to_index(self.per_page)).min(items.len());

        Page {
            items: &items[start..end],
            total: items.len(),
        }
    }
}

fn parse_positive_integer(text: Option<&str>) -> Result<Option<u64>, Error> {
    match text.map(str::trim).filter(|text| !text.is_empty()) {
        None => Ok(None),
        Some(text) => match text.parse::<u64>() {
            Ok(value) if value > 0 => Ok(Some(value)),
            _ => Err(Error::InvalidPagination),
        },
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        Error,
        pagination::{Page, PageRequest, PaginationConfig},
    };

    fn parse(page: Option<&str>, per_page: Option<&str>) -> Result<PageRequest, Error> {
        PageRequest::parse(page, per_page, &PaginationConfig::default())
    }

    #[test]
    fn uses_defaults_when_missing() {
        let got = parse(None, None).unwrap();

        assert_eq!(
            got,
            PageRequest {
                page: 1,
                per_page: 10
            }
        );
    }

    #[test]
    fn uses_defaults_when_empty() {
        let got = parse(Some(""), Some(" ")).unwrap();

        assert_eq!(
            got,
            PageRequest {
                page: 1,
                per_page: 10
            }
        );
    }

    #[test]
    fn uses_configured_defaults() {
        let config = PaginationConfig {
            default_page: 2,
            default_page_size: 25,
        };

        let got = PageRequest::parse(None, None, &config).unwrap();

        assert_eq!(
            got,
            PageRequest {
                page: 2,
                per_page: 25
            }
        );
    }

    #[test]
    fn parses_values() {
        let got = parse(Some("3"), Some("7")).unwrap();

        assert_eq!(
            got,
            PageRequest {
                page: 3,
                per_page: 7
            }
        );
    }

    #[test]
    fn rejects_non_positive_values() {
        assert_eq!(parse(Some("0"), None), Err(Error::InvalidPagination));
        assert_eq!(parse(None, Some("0")), Err(Error::InvalidPagination));
        assert_eq!(parse(Some("-1"), None), Err(Error::InvalidPagination));
        assert_eq!(parse(None, Some("-10")), Err(Error::InvalidPagination));
    }

    #[test]
    fn rejects_non_numeric_values() {
        assert_eq!(parse(Some("one"), None), Err(Error::InvalidPagination));
        assert_eq!(parse(None, Some("1.5")), Err(Error::InvalidPagination));
        assert_eq!(parse(None, Some("Infinity")), Err(Error::InvalidPagination));
    }

    #[test]
    fn second_page_of_three_items_has_one_item() {
        let items = [1, 2, 3];
        let request = PageRequest {
            page: 2,
            per_page: 2,
        };

        let got = request.paginate(&items);

        assert_eq!(
            got,
            Page {
                items: &[3][..],
                total: 3
            }
        );
    }

    #[test]
    fn first_page_is_at_most_per_page_long() {
        let items: Vec<_> = (0..25).collect();
        let request = PageRequest {
            page: 1,
            per_page: 10,
        };

        let got = request.paginate(&items);

        assert_eq!(got.items, &items[..10]);
        assert_eq!(got.total, 25);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let items = [1, 2, 3];
        let request = PageRequest {
            page: 5,
            per_page: 2,
        };

        let got = request.paginate(&items);

        assert!(got.items.is_empty());
        assert_eq!(got.total, 3);
    }

    #[test]
    fn huge_page_numbers_do_not_overflow() {
        let items = [1, 2, 3];
        let request = PageRequest {
            page: u64::MAX,
            per_page: u64::MAX,
        };

        let got = request.paginate(&items);

        assert!(got.items.is_empty());
        assert_eq!(got.total, 3);
    }

    #[test]
    fn empty_collection_gives_empty_page() {
        let items: [i32; 0] = [];
        let request = PageRequest {
            page: 1,
            per_page: 10,
        };

        let got = request.paginate(&items);

        assert!(got.items.is_empty());
        assert_eq!(got.total, 0);
    }
}
