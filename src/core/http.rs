//! HTTP utilities for stats API communication

use crate::Result;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};

/// Headers sent with every stats API request.
///
/// The API key is optional; it is sent verbatim as `Authorization` when set.
pub fn common_headers(api_key: Option<&str>) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    if let Some(key) = api_key {
        h.insert(AUTHORIZATION, HeaderValue::from_str(key)?);
    }
    Ok(h)
}
