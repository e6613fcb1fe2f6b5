//! Projection of a raw matches document into name-resolved pairings

use tracing::debug;

use crate::models::{MatchesResponse, PlayerName, ResolvedMatch};
use crate::participants::ParticipantCache;

/// Projects a matches document into an ordered list of resolved pairings.
///
/// Completed matches are skipped; everything else (pending, open, and any
/// state this client does not recognize) is kept, preserving document order.
/// Each player reference is resolved through the participant cache. A
/// reference that is missing or cannot be resolved yields
/// [`PlayerName::Unknown`] for that side; the match itself is never dropped
/// because of an unresolved name.
///
/// The caller is responsible for populating the cache (see
/// [`ParticipantCache::try_populate`]) before projecting.
pub fn project_matches(response: &MatchesResponse, cache: &ParticipantCache) -> Vec<ResolvedMatch> {
    let resolved: Vec<ResolvedMatch> = response
        .data
        .iter()
        .filter(|m| !m.attributes.state.is_complete())
        .map(|m| {
            ResolvedMatch::new(
                resolve_side(cache, m.relationships.player1.participant_id()),
                resolve_side(cache, m.relationships.player2.participant_id()),
            )
        })
        .collect();

    debug!(
        "Projected {} active matches out of {} total",
        resolved.len(),
        response.data.len()
    );

    resolved
}

/// Resolves one side of a match: a missing reference and a cache miss both
/// degrade to an unknown name
fn resolve_side(cache: &ParticipantCache, participant_id: Option<&str>) -> PlayerName {
    match participant_id {
        Some(id) => cache.lookup(id),
        None => PlayerName::Unknown,
    }
}
