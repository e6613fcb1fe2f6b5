use clap::Parser;
use std::path::Path;
use tracing::info;

use challonge_ticker::cli::{Args, is_config_mode};
use challonge_ticker::config::Config;
use challonge_ticker::error::AppError;
use challonge_ticker::logging;
use challonge_ticker::session::Session;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Configuration management runs without logging or network access
    if is_config_mode(&args) {
        return handle_config_commands(&args).await;
    }

    let Some(tournament_name) = args.tournament.clone() else {
        return Err(AppError::config_error(
            "No tournament name given. Usage: challonge_ticker <TOURNAMENT>",
        ));
    };

    // The guard must stay alive for the duration of the program
    // to ensure logs are flushed properly
    let (log_file_path, _guard) = logging::setup_logging(&args).await?;
    info!("Logging to {log_file_path}");

    let session = Session::new().await?;

    match session.active_matches_for(&tournament_name).await? {
        Some(matches) if matches.is_empty() => {
            println!("No active matches in '{tournament_name}'.");
        }
        Some(matches) => {
            for resolved in &matches {
                println!("{resolved}");
            }
        }
        None => {
            println!("Tournament '{tournament_name}' not found.");
        }
    }

    Ok(())
}

/// Applies the configuration flags (--config, --set-log-file,
/// --clear-log-file, --list-config) and exits.
async fn handle_config_commands(args: &Args) -> Result<(), AppError> {
    if args.list_config {
        return Config::display().await;
    }

    let mut config = load_existing_or_default().await?;

    if let Some(api_key) = &args.new_api_key {
        config.api_key = api_key.clone();
    }

    if let Some(log_file_path) = &args.new_log_file_path {
        config.log_file_path = Some(log_file_path.clone());
    }

    if args.clear_log_file_path {
        config.log_file_path = None;
    }

    config.save().await?;
    println!("Configuration saved to {}", Config::get_config_path());
    Ok(())
}

/// Loads the config file if one exists, otherwise starts from defaults.
/// Unlike [`Config::load`] this never prompts: config commands already carry
/// the value being set.
async fn load_existing_or_default() -> Result<Config, AppError> {
    let config_path = Config::get_config_path();
    if Path::new(&config_path).exists() {
        Config::load_from_path(&config_path).await
    } else {
        Ok(Config::default())
    }
}
