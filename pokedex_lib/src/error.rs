//! Error types for the library layer.

use std::fmt;

/// Errors produced by the library layer.
///
/// `Display` renders the message shown to the user as-is: listing and
/// detail failures read the same way the gallery reports them, so callers
/// never need to distinguish the two.
#[derive(Debug)]
pub enum CatalogError {
    /// The listing request failed (non-2xx or transport failure).
    ListingFetch(pokeapi::Error),
    /// One of the per-item detail requests failed.
    DetailFetch {
        name: String,
        source: pokeapi::Error,
    },
    /// A named lookup returned 404. Carries the name as the user typed it.
    NotFound(String),
    /// Any other error from the underlying API client.
    Api(pokeapi::Error),
    /// A background fetch task panicked or was cancelled.
    TaskFailed(String),
    /// User-provided input failed validation.
    InvalidInput(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ListingFetch(pokeapi::Error::HttpStatus { status, .. }) => {
                write!(f, "HTTP error: Status {}", status)
            }
            Self::ListingFetch(pokeapi::Error::RequestFailed(msg)) => write!(f, "{}", msg),
            Self::DetailFetch { name, .. } => write!(f, "Failed to fetch {}", name),
            Self::NotFound(name) => write!(f, "Pokemon \"{}\" not found", name),
            Self::Api(pokeapi::Error::HttpStatus { status, .. }) => {
                write!(f, "Failed to fetch Pokemon data (Status: {})", status)
            }
            Self::Api(pokeapi::Error::RequestFailed(msg)) => write!(f, "{}", msg),
            Self::TaskFailed(msg) => write!(f, "Fetch task failed: {}", msg),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ListingFetch(e) => Some(e),
            Self::DetailFetch { source, .. } => Some(source),
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl From<pokeapi::Error> for CatalogError {
    fn from(e: pokeapi::Error) -> Self {
        Self::Api(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(status: u16) -> pokeapi::Error {
        pokeapi::Error::HttpStatus {
            status,
            body: String::new(),
        }
    }

    #[test]
    fn listing_status_message() {
        let err = CatalogError::ListingFetch(status(503));
        assert_eq!(err.to_string(), "HTTP error: Status 503");
    }

    #[test]
    fn listing_transport_message_is_verbatim() {
        let err = CatalogError::ListingFetch(pokeapi::Error::RequestFailed(
            "Network error".to_string(),
        ));
        assert_eq!(err.to_string(), "Network error");
    }

    #[test]
    fn detail_message_names_reference() {
        let err = CatalogError::DetailFetch {
            name: "ivysaur".to_string(),
            source: status(500),
        };
        assert_eq!(err.to_string(), "Failed to fetch ivysaur");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn not_found_quotes_input() {
        let err = CatalogError::NotFound("invalidpokemon".to_string());
        assert_eq!(err.to_string(), "Pokemon \"invalidpokemon\" not found");
    }

    #[test]
    fn api_status_message() {
        let err = CatalogError::from(status(500));
        assert_eq!(err.to_string(), "Failed to fetch Pokemon data (Status: 500)");
    }
}
