//! Challonge Active-Match Ticker Library
//!
//! This library fetches the matches of a named Challonge tournament and
//! resolves each match's opaque participant references into human-readable
//! player names, keeping only matches that have not completed.
//!
//! # Examples
//!
//! ```rust,no_run
//! use challonge_ticker::config::Config;
//! use challonge_ticker::error::AppError;
//! use challonge_ticker::session::Session;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config {
//!         api_key: "my-api-key".to_string(),
//!         ..Config::default()
//!     };
//!     let session = Session::with_config(config)?;
//!
//!     match session.active_matches_for("CoK").await? {
//!         Some(matches) => {
//!             for m in &matches {
//!                 println!("{m}");
//!             }
//!         }
//!         None => println!("Tournament not found"),
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod locator;
pub mod logging;
pub mod models;
pub mod participants;
pub mod projector;
pub mod session;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::AppError;
pub use locator::locate_tournament;
pub use models::{MatchState, MatchesResponse, PlayerName, ResolvedMatch, TournamentsResponse};
pub use participants::ParticipantCache;
pub use projector::project_matches;
pub use session::Session;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
