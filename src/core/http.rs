//! HTTP utilities for Ergast API communication

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};

pub const USER_AGENT: &str = concat!("f1-seasons/", env!("CARGO_PKG_VERSION"));

/// Headers sent with every API request.
pub fn default_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    h
}

/// Join a base URL and a path without doubling or dropping the slash.
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
