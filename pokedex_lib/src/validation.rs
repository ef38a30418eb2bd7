use crate::error::CatalogError;

pub const MAX_SEARCH_LENGTH: usize = 100;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Page size of the gallery grid.
pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// Highest national dex number the random picker draws from.
pub const MAX_DEX_NUMBER: u32 = 1010;

/// Strip ASCII control characters (0x00-0x1F except space 0x20), trim whitespace,
/// and enforce a byte-length limit.
pub fn sanitize_text(input: &str, max_len: usize) -> Result<String, CatalogError> {
    if input.len() > max_len {
        return Err(CatalogError::InvalidInput(format!(
            "input exceeds maximum length of {} bytes",
            max_len
        )));
    }
    let cleaned: String = input.chars().filter(|c| !c.is_ascii_control()).collect();
    Ok(cleaned.trim().to_string())
}

/// Normalizes a name typed by the user into the form the API expects:
/// trimmed and lowercased. Empty input is rejected.
pub fn validate_search(input: &str) -> Result<String, CatalogError> {
    let cleaned = sanitize_text(input, MAX_SEARCH_LENGTH)?;
    if cleaned.is_empty() {
        return Err(CatalogError::InvalidInput(
            "name must not be empty".to_string(),
        ));
    }
    Ok(cleaned.to_lowercase())
}

pub fn validate_page(page: u32) -> Result<u32, CatalogError> {
    if page < 1 {
        return Err(CatalogError::InvalidInput(
            "page must be at least 1".to_string(),
        ));
    }
    Ok(page)
}

pub fn validate_page_size(page_size: u32) -> Result<u32, CatalogError> {
    if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
        return Err(CatalogError::InvalidInput(format!(
            "page size must be between 1 and {}",
            MAX_PAGE_SIZE
        )));
    }
    Ok(page_size)
}

pub fn validate_dex_number(id: u32) -> Result<u32, CatalogError> {
    if !(1..=MAX_DEX_NUMBER).contains(&id) {
        return Err(CatalogError::InvalidInput(format!(
            "dex number must be between 1 and {}",
            MAX_DEX_NUMBER
        )));
    }
    Ok(id)
}
