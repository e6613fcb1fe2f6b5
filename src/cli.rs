use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Determines if the invocation only manages configuration and should not
/// fetch any matches
pub fn is_config_mode(args: &Args) -> bool {
    args.new_api_key.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.list_config
}

/// Challonge Active-Match Ticker
///
/// Lists who is currently playing whom in a Challonge tournament: fetches the
/// tournament by name, resolves participant references to player names, and
/// prints one line per match that has not completed. Sides whose participant
/// cannot be resolved are shown as TBD.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Name of the tournament to list active matches for (exact,
    /// case-sensitive match against the tournament's name on Challonge).
    #[arg(value_name = "TOURNAMENT")]
    pub tournament: Option<String>,

    /// Update the Challonge API key in config.
    #[arg(
        long = "config",
        help_heading = "Configuration",
        value_name = "API_KEY"
    )]
    pub new_api_key: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Write logs to the given file for this run only (does not touch config)
    #[arg(long = "log-file", help_heading = "Debug Options")]
    pub log_file: Option<String>,

    /// Enable debug logging to stdout in addition to the log file
    #[arg(long, short = 'D', help_heading = "Debug Options")]
    pub debug: bool,
}
