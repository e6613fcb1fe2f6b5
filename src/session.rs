//! Long-lived session owning the HTTP client, credentials, and the
//! participant-name cache

use reqwest::Client;
use tokio::sync::RwLock;
use tracing::{info, instrument, warn};

use crate::api::{create_http_client, fetch_matches, fetch_tournaments};
use crate::config::Config;
use crate::error::AppError;
use crate::locator::locate_tournament;
use crate::models::ResolvedMatch;
use crate::participants::ParticipantCache;
use crate::projector::project_matches;

/// One process's connection to the tournament service.
///
/// The session owns the configured HTTP client and the participant cache for
/// its whole lifetime. It is constructed once by the entry point and passed
/// by reference into all operations; tests construct isolated sessions with
/// [`Session::with_config`].
///
/// The participant cache is populated from the first matches document this
/// session processes and never refreshed afterward. A session reused across
/// different tournaments therefore resolves against stale participants, see
/// [`ParticipantCache`].
#[derive(Debug)]
pub struct Session {
    config: Config,
    client: Client,
    participants: RwLock<ParticipantCache>,
}

impl Session {
    /// Creates a session from the default configuration.
    ///
    /// Credential loading is fail-open: if the config cannot be loaded, the
    /// session is still constructed with a blank API key and a warning is
    /// logged. All subsequent API calls then predictably fail authentication
    /// upstream instead of the process refusing to start.
    pub async fn new() -> Result<Self, AppError> {
        let config = match Config::load().await {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to load configuration, continuing without credentials: {e}");
                Config::default()
            }
        };
        Self::with_config(config)
    }

    /// Creates a session from an explicit configuration.
    ///
    /// This is the injection seam: tests and embedders point the session at
    /// their own API domain and credentials.
    pub fn with_config(config: Config) -> Result<Self, AppError> {
        let client = create_http_client(&config.api_key, config.http_timeout_seconds)?;
        Ok(Self {
            config,
            client,
            participants: RwLock::new(ParticipantCache::new()),
        })
    }

    /// The configuration this session was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Looks up the id of the tournament named `name`.
    ///
    /// # Returns
    /// * `Ok(Some(id))` - The tournament exists
    /// * `Ok(None)` - No tournament with that exact name; a valid outcome,
    ///   distinct from any fetch failure
    /// * `Err(AppError)` - The tournaments document could not be fetched or
    ///   parsed
    #[instrument(skip(self))]
    pub async fn tournament_id(&self, name: &str) -> Result<Option<String>, AppError> {
        let document = fetch_tournaments(&self.client, &self.config.api_domain).await?;
        Ok(locate_tournament(&document, name))
    }

    /// Fetches and resolves the active (non-completed) matches of one
    /// tournament.
    ///
    /// The participant cache is populated from this document if it is still
    /// empty; the check-and-populate plus the projection happen under one
    /// write lock, so concurrent callers cannot race to populate the cache
    /// differently.
    #[instrument(skip(self))]
    pub async fn active_matches(&self, tournament_id: &str) -> Result<Vec<ResolvedMatch>, AppError> {
        let document = fetch_matches(&self.client, &self.config.api_domain, tournament_id).await?;

        let mut cache = self.participants.write().await;
        cache.try_populate(&document.included);
        let resolved = project_matches(&document, &cache);

        info!(
            "Resolved {} active matches for tournament {}",
            resolved.len(),
            tournament_id
        );
        Ok(resolved)
    }

    /// Convenience orchestration: locate the tournament by name, then fetch
    /// and resolve its active matches.
    ///
    /// # Returns
    /// * `Ok(Some(matches))` - The tournament exists; its active matches
    /// * `Ok(None)` - The tournament was not found
    /// * `Err(AppError)` - Any fetch or parse failure along the way
    #[instrument(skip(self))]
    pub async fn active_matches_for(
        &self,
        name: &str,
    ) -> Result<Option<Vec<ResolvedMatch>>, AppError> {
        match self.tournament_id(name).await? {
            Some(id) => Ok(Some(self.active_matches(&id).await?)),
            None => {
                info!("Tournament '{name}' not found");
                Ok(None)
            }
        }
    }

    /// Whether the participant cache has been populated yet
    pub async fn has_cached_participants(&self) -> bool {
        self.participants.read().await.is_populated()
    }
}
