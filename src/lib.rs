//! NBA stats in the terminal, powered by the BALLDONTLIE API.
//!
//! The library fetches games, teams and players over the paginated REST
//! API, turns the loosely typed payloads into domain types, and renders
//! them as plain-text tables.
//!
//! # Examples
//!
//! ```rust,no_run
//! use nba_cli::config::Config;
//! use nba_cli::data_fetcher::NbaClient;
//! use nba_cli::error::AppError;
//!
//! fn main() -> Result<(), AppError> {
//!     let config = Config::load()?;
//!     let client = NbaClient::from_config(&config)?;
//!
//!     for team in client.get_teams(Some("West"), Some("Pacific"))? {
//!         println!("{} {}", team.abbreviation, team.full_name);
//!     }
//!
//!     // Paginated endpoints can also be streamed record by record
//!     for raw in client.fetch_all("/players", vec![("search".into(), "curry".into())]) {
//!         println!("{}", raw?);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod logging;
pub mod ui;

// Re-export commonly used types for convenience
pub use config::{Config, get_api_key};
pub use data_fetcher::NbaClient;
pub use data_fetcher::models::{Game, Player, Team};
pub use error::AppError;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
