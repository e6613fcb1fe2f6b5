//! Authenticated read access to the Challonge tournament API
//!
//! Two logical resources are consumed: the account's tournament list and the
//! matches (with included participants) of one tournament. Authentication
//! headers are attached once at client construction, see
//! [`http_client::create_http_client`].

pub mod http_client;
pub mod urls;

mod fetch_utils;

pub use http_client::{build_default_headers, create_http_client};
pub use urls::{build_matches_url, build_tournaments_url};

use reqwest::Client;
use tracing::instrument;

use crate::error::AppError;
use crate::models::{MatchesResponse, TournamentsResponse};
use fetch_utils::fetch;

/// Fetches the tournaments document for the authenticated account.
///
/// # Arguments
/// * `client` - HTTP client carrying the authentication headers
/// * `api_domain` - The base API URL
///
/// # Returns
/// * `Ok(TournamentsResponse)` - The parsed tournaments document
/// * `Err(AppError)` - Transport, status, or parse failure
#[instrument(skip(client))]
pub async fn fetch_tournaments(
    client: &Client,
    api_domain: &str,
) -> Result<TournamentsResponse, AppError> {
    let url = build_tournaments_url(api_domain);
    fetch(client, &url).await
}

/// Fetches the matches document of one tournament, including its
/// participant resources.
///
/// # Arguments
/// * `client` - HTTP client carrying the authentication headers
/// * `api_domain` - The base API URL
/// * `tournament_id` - The opaque tournament identifier
///
/// # Returns
/// * `Ok(MatchesResponse)` - The parsed matches document
/// * `Err(AppError)` - Transport, status, or parse failure
#[instrument(skip(client))]
pub async fn fetch_matches(
    client: &Client,
    api_domain: &str,
    tournament_id: &str,
) -> Result<MatchesResponse, AppError> {
    let url = build_matches_url(api_domain, tournament_id);
    fetch(client, &url).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client() -> Client {
        create_http_client("test-key", DEFAULT_HTTP_TIMEOUT_SECONDS)
            .expect("Failed to create test HTTP client")
    }

    #[tokio::test]
    async fn test_fetch_tournaments_sends_auth_headers() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/tournaments.json"))
            .and(header("Authorization", "test-key"))
            .and(header("Authorization-Type", "v1"))
            .and(header("Content-Type", "application/vnd.api+json"))
            .and(header("Accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{ "id": "5", "attributes": { "name": "CoK" } }]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let response = fetch_tournaments(&test_client(), &mock_server.uri())
            .await
            .unwrap();
        assert_eq!(response.data.len(), 1);
        assert_eq!(response.data[0].id, "5");
    }

    #[tokio::test]
    async fn test_fetch_matches_hits_tournament_scoped_path() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/tournaments/5/matches.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [],
                "included": []
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let response = fetch_matches(&test_client(), &mock_server.uri(), "5")
            .await
            .unwrap();
        assert!(response.data.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_server_error_is_surfaced() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/tournaments.json"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let result = fetch_tournaments(&test_client(), &mock_server.uri()).await;
        assert!(matches!(result, Err(AppError::ApiServerError { .. })));
    }

    #[tokio::test]
    async fn test_fetch_unauthorized_is_distinct() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/tournaments.json"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        let result = fetch_tournaments(&test_client(), &mock_server.uri()).await;
        assert!(matches!(
            result,
            Err(AppError::ApiUnauthorized { status: 401, .. })
        ));
    }

    #[tokio::test]
    async fn test_fetch_not_found_is_distinct() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/tournaments/99/matches.json"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let result = fetch_matches(&test_client(), &mock_server.uri(), "99").await;
        assert!(matches!(result, Err(AppError::ApiNotFound { .. })));
    }

    #[tokio::test]
    async fn test_fetch_empty_body_reported_as_no_data() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/tournaments.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string(""))
            .mount(&mock_server)
            .await;

        let result = fetch_tournaments(&test_client(), &mock_server.uri()).await;
        assert!(matches!(result, Err(AppError::ApiNoData { .. })));
    }

    #[tokio::test]
    async fn test_fetch_non_json_body_reported_as_malformed() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/tournaments.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&mock_server)
            .await;

        let result = fetch_tournaments(&test_client(), &mock_server.uri()).await;
        assert!(matches!(result, Err(AppError::ApiMalformedJson { .. })));
    }

    #[tokio::test]
    async fn test_fetch_wrong_shape_reported_as_unexpected_structure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/tournaments.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{ "id": 5, "attributes": { "name": "CoK" } }]
            })))
            .mount(&mock_server)
            .await;

        // id is a number instead of a string
        let result = fetch_tournaments(&test_client(), &mock_server.uri()).await;
        assert!(matches!(result, Err(AppError::ApiUnexpectedStructure { .. })));
    }

    #[tokio::test]
    async fn test_connection_refused_is_a_transport_error() {
        // Port 1 should refuse connections
        let result = fetch_tournaments(&test_client(), "http://127.0.0.1:1").await;
        assert!(matches!(
            result,
            Err(AppError::NetworkConnection { .. }) | Err(AppError::ApiFetch(_))
        ));
    }
}
