//! Application-wide constants and configuration values
//!
//! This module centralizes magic numbers and protocol constants so the
//! rest of the codebase stays free of inline literals.

#![allow(dead_code)]

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 100;

/// Default base URL for the Challonge v2.1 API
pub const DEFAULT_API_DOMAIN: &str = "https://api.challonge.com/v2.1";

/// Header names and values required by the Challonge v2.1 API contract
pub mod headers {
    /// Challonge distinguishes v1 and v2 keys via this custom header
    pub const AUTHORIZATION_TYPE: &str = "Authorization-Type";

    /// Value for [`AUTHORIZATION_TYPE`] when authenticating with a v1 API key
    pub const AUTHORIZATION_TYPE_V1: &str = "v1";

    /// Content type the v2.1 endpoints expect on every request
    pub const CONTENT_TYPE_JSON_API: &str = "application/vnd.api+json";

    /// Accept header value for the JSON responses
    pub const ACCEPT_JSON: &str = "application/json";
}
