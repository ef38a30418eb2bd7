//! Listing endpoint types: a page of lightweight references.

use serde::{Deserialize, Serialize};

/// A `{name, url}` reference. The `url` is the locator for the full resource.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// One page of the listing endpoint.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ListingPage {
    /// Total number of resources in the whole collection.
    pub count: u32,
    /// URL of the next page, if any.
    #[serde(default)]
    pub next: Option<String>,
    /// URL of the previous page, if any.
    #[serde(default)]
    pub previous: Option<String>,
    /// References on this page, in listing order.
    pub results: Vec<NamedResource>,
}

impl ListingPage {
    /// Number of pages of `page_size` needed to cover `count`.
    pub fn total_pages(&self, page_size: u32) -> u32 {
        total_pages(self.count, page_size)
    }
}

/// `ceil(total_count / page_size)`. A page size of 0 yields 0 pages.
pub fn total_pages(total_count: u32, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    total_count.div_ceil(page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(1302, 12), 109);
        assert_eq!(total_pages(3, 12), 1);
        assert_eq!(total_pages(24, 12), 2);
        assert_eq!(total_pages(25, 12), 3);
    }

    #[test]
    fn total_pages_empty_collection() {
        assert_eq!(total_pages(0, 12), 0);
    }

    #[test]
    fn total_pages_zero_page_size() {
        assert_eq!(total_pages(10, 0), 0);
    }
}
