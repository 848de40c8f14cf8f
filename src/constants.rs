//! Application-wide constants and configuration values
//!
//! This module centralizes magic numbers, endpoint paths and environment
//! variable names so that the fetch engine, config layer and CLI agree on them.

/// Base URL of the BALLDONTLIE v1 API
pub const DEFAULT_API_DOMAIN: &str = "https://api.balldontlie.io/v1";

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 10;

/// Application name used for config and log directories
pub const APP_NAME: &str = "nba_cli";

/// Default log file name inside the log directory
pub const LOG_FILE_NAME: &str = "nba_cli.log";

/// API endpoint paths, relative to the API domain
pub mod endpoints {
    pub const PLAYERS: &str = "/players";
    pub const ACTIVE_PLAYERS: &str = "/players/active";
    pub const GAMES: &str = "/games";
    pub const TEAMS: &str = "/teams";
}

/// Query parameter defaults
pub mod query {
    /// Default page size for player searches
    pub const DEFAULT_PLAYERS_PER_PAGE: u32 = 25;

    /// Page size used when listing games for a date
    pub const GAMES_PER_PAGE: u32 = 100;

    /// Date format expected by the `dates[]` parameter and the `date` field
    pub const DATE_FORMAT: &str = "%Y-%m-%d";
}

/// Cache sizing
pub mod cache {
    /// Number of distinct team-list queries kept in memory
    pub const TEAM_CACHE_CAPACITY: usize = 16;
}

/// Environment variable names
pub mod env_vars {
    /// Required API key sent in the Authorization header
    pub const API_KEY: &str = "BALLDONTLIE_API_KEY";

    /// Override for the API domain
    pub const API_DOMAIN: &str = "NBA_CLI_API_DOMAIN";

    /// Override for the HTTP timeout in seconds
    pub const HTTP_TIMEOUT: &str = "NBA_CLI_HTTP_TIMEOUT";

    /// Override for the log file path
    pub const LOG_FILE: &str = "NBA_CLI_LOG_FILE";
}
