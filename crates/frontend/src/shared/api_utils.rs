//! API utilities for frontend-backend communication

/// Get the base URL for API requests
///
/// The backend serves the SPA and the REST API from the same origin,
/// so the base is just protocol + host of the current window location.
///
/// # Returns
/// - API base URL like "http://localhost:8080" or "https://example.com"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let host = location.host().unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}", protocol, host)
}
