//! Offset/limit query for the paginated listing endpoint.

use url::Url;

use super::Query;

/// Page size the API uses when no `limit` is sent.
pub const DEFAULT_LIMIT: u32 = 20;

/// Query for `GET /<collection>?offset=<n>&limit=<n>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListingQuery {
    /// Number of references to skip.
    pub offset: u32,
    /// Number of references to return. `None` uses the API default.
    pub limit: Option<u32>,
}

impl Query for ListingQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("offset", &self.offset.to_string());
        if let Some(limit) = self.limit {
            url.query_pairs_mut()
                .append_pair("limit", &limit.to_string());
        };
        url
    }
}

impl ListingQuery {
    /// Builds the query for a 1-indexed page: `offset = (page - 1) * page_size`.
    ///
    /// A page of 0 is treated as page 1; callers validate page numbers
    /// before they get here.
    pub fn for_page(page: u32, page_size: u32) -> Self {
        ListingQuery {
            offset: page.saturating_sub(1).saturating_mul(page_size),
            limit: Some(page_size),
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Effective page size: the explicit limit, or the API default.
    pub fn page_size(&self) -> u32 {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }
}
