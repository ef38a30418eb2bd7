//! Library layer for the Pokédex catalog: paginated gallery fetching,
//! gallery view state, single-entry lookups, and input validation.
//!
//! Wraps the `pokeapi` crate. Detail requests for a gallery page run
//! concurrently and are reassembled in listing order.

pub mod error;
pub mod fetcher;
pub mod gallery;
pub mod lookup;
pub mod validation;

pub use pokeapi;
pub use pokeapi::types;
pub use pokeapi::{Client, ListingQuery, Query, DEFAULT_BASE_URL};

pub use error::CatalogError;
pub use fetcher::{CollectionFetcher, FetchedPage};
pub use gallery::{Gallery, GalleryState, PageRequest, Phase};
