pub mod matches;
pub mod tournaments;

pub use matches::{
    MatchResource, MatchState, MatchesResponse, ParticipantResource, PlayerName, PlayerRef,
    ResolvedMatch, ResourceIdentifier,
};
pub use tournaments::{TournamentResource, TournamentsResponse};
