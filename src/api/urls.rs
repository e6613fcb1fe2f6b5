//! URL building utilities for API endpoints

/// Builds the URL for listing the account's tournaments.
///
/// # Arguments
/// * `api_domain` - The base API URL
///
/// # Returns
/// * `String` - The complete tournaments URL
///
/// # Example
/// ```
/// use challonge_ticker::api::build_tournaments_url;
///
/// let url = build_tournaments_url("https://api.challonge.com/v2.1");
/// assert_eq!(url, "https://api.challonge.com/v2.1/tournaments.json");
/// ```
pub fn build_tournaments_url(api_domain: &str) -> String {
    format!("{api_domain}/tournaments.json")
}

/// Builds the URL for listing the matches of one tournament.
///
/// # Arguments
/// * `api_domain` - The base API URL
/// * `tournament_id` - The opaque tournament identifier
///
/// # Returns
/// * `String` - The complete matches URL
///
/// # Example
/// ```
/// use challonge_ticker::api::build_matches_url;
///
/// let url = build_matches_url("https://api.challonge.com/v2.1", "5");
/// assert_eq!(url, "https://api.challonge.com/v2.1/tournaments/5/matches.json");
/// ```
pub fn build_matches_url(api_domain: &str, tournament_id: &str) -> String {
    format!("{api_domain}/tournaments/{tournament_id}/matches.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_tournaments_url() {
        assert_eq!(
            build_tournaments_url("http://localhost:8080"),
            "http://localhost:8080/tournaments.json"
        );
    }

    #[test]
    fn test_build_matches_url() {
        assert_eq!(
            build_matches_url("http://localhost:8080", "abc123"),
            "http://localhost:8080/tournaments/abc123/matches.json"
        );
    }
}
