use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};

use crate::constants::query::DEFAULT_PLAYERS_PER_PAGE;

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

/// True when the invocation only touches the local configuration and never
/// needs the API key or the network.
pub fn is_config_operation(args: &Args) -> bool {
    args.list_config
        || args.new_api_domain.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
}

/// Command-line NBA stats browser for the BALLDONTLIE API.
///
/// Requires a BALLDONTLIE_API_KEY environment variable for any command that
/// talks to the API.
#[derive(Parser, Debug)]
#[command(name = "nba_cli", version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Update the API base URL in the config file.
    #[arg(long = "config", help_heading = "Configuration", value_name = "API_DOMAIN")]
    pub new_api_domain: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Mirror log output to stderr in addition to the log file.
    #[arg(long = "debug", global = true, help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", global = true, help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Show games for a date (default: today).
    Games {
        /// Date in YYYY-MM-DD format.
        date: Option<String>,

        /// Filter games by team code or name.
        #[arg(long)]
        team: Option<String>,
    },

    /// List NBA teams.
    Teams {
        /// Filter by conference (East/West).
        #[arg(long)]
        conference: Option<String>,

        /// Filter by division (e.g. Pacific).
        #[arg(long)]
        division: Option<String>,
    },

    /// Search NBA players.
    Players {
        /// Search term for first or last name.
        #[arg(long, short = 's')]
        search: String,

        /// Max number of players to fetch per page.
        #[arg(long, default_value_t = DEFAULT_PLAYERS_PER_PAGE)]
        limit: u32,

        /// Only players currently on a roster.
        #[arg(long)]
        active: bool,
    },
}
