//! HTTP client creation and configuration utilities

use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use std::time::Duration;

use crate::constants::headers;
use crate::error::AppError;

/// Builds the fixed header set the Challonge v2.1 API expects on every
/// request: the bearer credential, the v1 authorization-type marker, and the
/// JSON:API content/accept types.
///
/// The key may be blank; the request then predictably fails authentication
/// upstream rather than here.
pub fn build_default_headers(api_key: &str) -> Result<HeaderMap, AppError> {
    let mut header_map = HeaderMap::new();

    let mut auth_value = HeaderValue::from_str(api_key)
        .map_err(|e| AppError::config_error(format!("API key is not a valid header value: {e}")))?;
    auth_value.set_sensitive(true);

    header_map.insert(AUTHORIZATION, auth_value);
    header_map.insert(
        headers::AUTHORIZATION_TYPE,
        HeaderValue::from_static(headers::AUTHORIZATION_TYPE_V1),
    );
    header_map.insert(
        CONTENT_TYPE,
        HeaderValue::from_static(headers::CONTENT_TYPE_JSON_API),
    );
    header_map.insert(ACCEPT, HeaderValue::from_static(headers::ACCEPT_JSON));

    Ok(header_map)
}

/// Creates a properly configured HTTP client with connection pooling,
/// timeout handling, and the Challonge default headers attached once at
/// construction time.
///
/// # Arguments
/// * `api_key` - Credential sent as the Authorization header on every request
/// * `timeout_seconds` - Request timeout applied to every call
///
/// # Returns
/// * `Result<Client, AppError>` - A configured reqwest HTTP client or error
pub fn create_http_client(api_key: &str, timeout_seconds: u64) -> Result<Client, AppError> {
    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .pool_max_idle_per_host(crate::constants::HTTP_POOL_MAX_IDLE_PER_HOST)
        .default_headers(build_default_headers(api_key)?)
        .build()?;
    Ok(client)
}
