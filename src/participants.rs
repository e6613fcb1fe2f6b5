//! Participant identity cache mapping opaque participant ids to display names

use std::collections::HashMap;
use tracing::{debug, info};

use crate::models::{ParticipantResource, PlayerName};

/// Cache of participant id -> display name for the lifetime of one session.
///
/// The cache is populated at most once: the first matches document a session
/// processes supplies the mapping, and every later document is ignored. This
/// mirrors the upstream service behavior where one bracket's participants are
/// stable for the session. The flip side is that a session reused across
/// *different* tournaments keeps resolving against the first tournament's
/// participants; callers that switch tournaments should start a new session.
#[derive(Debug, Default)]
pub struct ParticipantCache {
    names: HashMap<String, String>,
}

impl ParticipantCache {
    /// Creates an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Populates the cache from the `included` participant resources, but
    /// only if the cache is still empty.
    ///
    /// # Returns
    /// * `true` - The cache was empty and has been populated from `resources`
    /// * `false` - The cache already held entries and was left unchanged
    pub fn try_populate(&mut self, resources: &[ParticipantResource]) -> bool {
        if !self.names.is_empty() {
            debug!(
                "Participant cache already populated ({} entries), ignoring {} new resources",
                self.names.len(),
                resources.len()
            );
            return false;
        }

        for participant in resources {
            self.names
                .insert(participant.id.clone(), participant.attributes.name.clone());
        }

        info!("Populated participant cache with {} entries", self.names.len());
        true
    }

    /// Resolves a participant id to a display name.
    ///
    /// An id missing from the cache yields [`PlayerName::Unknown`] rather
    /// than an error; the caller decides how to render the missing side.
    pub fn lookup(&self, id: &str) -> PlayerName {
        match self.names.get(id) {
            Some(name) => PlayerName::Known(name.clone()),
            None => {
                debug!("Participant id {id} not found in cache");
                PlayerName::Unknown
            }
        }
    }

    /// Whether the cache has been populated
    pub fn is_populated(&self) -> bool {
        !self.names.is_empty()
    }

    /// Number of cached participants
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the cache holds no entries
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
