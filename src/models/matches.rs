use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a match as reported by the Challonge API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchState {
    Pending,
    Open,
    Complete,
    /// Any state string this client does not know about. Unknown states are
    /// treated as active so new API states never silently drop matches.
    #[serde(other)]
    Unknown,
}

impl MatchState {
    /// Whether the match has finished and should be excluded from the active list
    pub fn is_complete(self) -> bool {
        self == MatchState::Complete
    }
}

/// Attributes of a match resource
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchAttributes {
    pub state: MatchState,
}

/// A `{ "id": ... }` resource identifier inside a relationship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceIdentifier {
    pub id: String,
}

/// One side of a match relationship. `data` is null for byes and
/// not-yet-determined opponents.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PlayerRef {
    #[serde(default)]
    pub data: Option<ResourceIdentifier>,
}

impl PlayerRef {
    /// The referenced participant id, if the slot is filled
    pub fn participant_id(&self) -> Option<&str> {
        self.data.as_ref().map(|d| d.id.as_str())
    }
}

/// The relationship section of a match resource
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MatchRelationships {
    #[serde(default)]
    pub player1: PlayerRef,
    #[serde(default)]
    pub player2: PlayerRef,
}

/// A single match entry from the `data` array of the matches document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResource {
    pub id: String,
    pub attributes: MatchAttributes,
    #[serde(default)]
    pub relationships: MatchRelationships,
}

/// Attributes of a participant resource from the `included` array
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantAttributes {
    pub name: String,
}

/// A participant resource from the `included` array of the matches document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantResource {
    pub id: String,
    pub attributes: ParticipantAttributes,
}

/// Model for the `GET /tournaments/{id}/matches.json` response structure
///
/// Both arrays default to empty when absent; an empty bracket is a valid
/// document, not a parse error.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MatchesResponse {
    #[serde(default)]
    pub data: Vec<MatchResource>,
    #[serde(default)]
    pub included: Vec<ParticipantResource>,
}

/// A participant display name after resolution.
///
/// `Unknown` is a deliberate tagged value, not a null placeholder: a match
/// whose reference could not be resolved is still reported, and consumers
/// must decide how to render the missing side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerName {
    Known(String),
    Unknown,
}

impl PlayerName {
    /// The resolved name, if one is known
    pub fn as_known(&self) -> Option<&str> {
        match self {
            PlayerName::Known(name) => Some(name),
            PlayerName::Unknown => None,
        }
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerName::Known(name) => write!(f, "{name}"),
            PlayerName::Unknown => write!(f, "TBD"),
        }
    }
}

/// A match whose participant references have been replaced with display names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMatch {
    pub first_player: PlayerName,
    pub second_player: PlayerName,
}

impl ResolvedMatch {
    pub fn new(first_player: PlayerName, second_player: PlayerName) -> Self {
        Self {
            first_player,
            second_player,
        }
    }
}

impl fmt::Display for ResolvedMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.first_player, self.second_player)
    }
}
