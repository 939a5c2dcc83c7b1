//! API utilities for frontend-backend communication

/// Get the base URL for API requests
///
/// The back-office API is served from the same origin as the page.
///
/// # Returns
/// - Origin like "https://backoffice.example.com"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust
/// let url = api_url("/api/apartments/4217/card");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
