use serde::{Deserialize, Serialize};

/// Attributes of a tournament resource as returned by the Challonge API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentAttributes {
    pub name: String,
}

/// A single tournament entry from the `data` array of the tournaments document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentResource {
    pub id: String,
    pub attributes: TournamentAttributes,
}

/// Model for the `GET /tournaments.json` response structure
///
/// A missing `data` array deserializes as empty so an empty account is a
/// valid "nothing found" document, not a parse error.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TournamentsResponse {
    #[serde(default)]
    pub data: Vec<TournamentResource>,
}
