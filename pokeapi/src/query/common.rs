//! Shared query infrastructure: the [`Query`] trait.

use url::Url;

/// Trait implemented by query builders that serialize themselves into URL
/// query parameters.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;
}
