//! Tournament lookup within a fetched tournaments document

use tracing::debug;

use crate::models::TournamentsResponse;

/// Finds the id of the first tournament whose name exactly equals `name`.
///
/// Iterates the `data` array in document order and compares names with
/// case-sensitive string equality. The remote service gives no ordering
/// guarantee; first match in received order wins, which is fine as long as
/// tournament names are unique within the account.
///
/// # Returns
/// * `Some(id)` - The id of the first matching tournament
/// * `None` - The document is empty or no entry matches
///
/// # Example
/// ```
/// use challonge_ticker::locator::locate_tournament;
/// use challonge_ticker::models::TournamentsResponse;
///
/// let doc: TournamentsResponse = serde_json::from_str(
///     r#"{"data":[{"id":"5","attributes":{"name":"CoK"}}]}"#,
/// ).unwrap();
/// assert_eq!(locate_tournament(&doc, "CoK"), Some("5".to_string()));
/// assert_eq!(locate_tournament(&doc, "cok"), None);
/// ```
pub fn locate_tournament(response: &TournamentsResponse, name: &str) -> Option<String> {
    let found = response
        .data
        .iter()
        .find(|tournament| tournament.attributes.name == name)
        .map(|tournament| tournament.id.clone());

    match &found {
        Some(id) => debug!("Located tournament '{name}' with id {id}"),
        None => debug!(
            "Tournament '{name}' not found among {} entries",
            response.data.len()
        ),
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tournaments_doc(entries: &[(&str, &str)]) -> TournamentsResponse {
        let data: Vec<serde_json::Value> = entries
            .iter()
            .map(|(id, name)| serde_json::json!({ "id": id, "attributes": { "name": name } }))
            .collect();
        serde_json::from_value(serde_json::json!({ "data": data })).unwrap()
    }

    #[test]
    fn test_locate_finds_first_matching_entry() {
        let doc = tournaments_doc(&[("5", "CoK"), ("9", "Other")]);
        assert_eq!(locate_tournament(&doc, "CoK"), Some("5".to_string()));
    }

    #[test]
    fn test_locate_empty_document() {
        let doc = tournaments_doc(&[]);
        assert_eq!(locate_tournament(&doc, "CoK"), None);
    }

    #[test]
    fn test_locate_no_matching_name() {
        let doc = tournaments_doc(&[("5", "CoK"), ("9", "Other")]);
        assert_eq!(locate_tournament(&doc, "Missing"), None);
    }

    #[test]
    fn test_locate_is_case_sensitive() {
        let doc = tournaments_doc(&[("5", "CoK")]);
        assert_eq!(locate_tournament(&doc, "cok"), None);
        assert_eq!(locate_tournament(&doc, "COK"), None);
    }

    #[test]
    fn test_locate_first_match_wins_on_duplicates() {
        let doc = tournaments_doc(&[("5", "CoK"), ("6", "CoK")]);
        assert_eq!(locate_tournament(&doc, "CoK"), Some("5".to_string()));
    }

    #[test]
    fn test_locate_ignores_partial_matches() {
        let doc = tournaments_doc(&[("5", "CoK 2024")]);
        assert_eq!(locate_tournament(&doc, "CoK"), None);
    }
}
