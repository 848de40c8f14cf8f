use crate::cli::{Args, Command};
use crate::config::{Config, get_api_key};
use crate::constants::query::DATE_FORMAT;
use crate::data_fetcher::NbaClient;
use crate::error::AppError;
use crate::ui::{Table, games_table, no_games_message, players_table, teams_table};
use chrono::{Local, NaiveDate};
use tracing::info;

/// What a subcommand produces for the terminal.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutput {
    Table(Table),
    Message(String),
}

/// Noun used in "Failed to fetch ..." messages for a subcommand.
pub fn command_subject(command: &Command) -> &'static str {
    match command {
        Command::Games { .. } => "games",
        Command::Teams { .. } => "teams",
        Command::Players { .. } => "players",
    }
}

/// Message shown when a subcommand fails.
///
/// Failures talking to the API or decoding its answers are prefixed with what
/// was being fetched; local problems such as a bad date argument or missing
/// API key are shown as their bare hint.
pub fn failure_message(command: &Command, err: &AppError) -> String {
    let from_api = err.is_network_error()
        || matches!(
            err,
            AppError::ApiMalformedJson { .. }
                | AppError::InvalidRecord { .. }
                | AppError::Unexpected(_)
        );

    if from_api {
        format!("Failed to fetch {}: {}", command_subject(command), err.user_hint())
    } else {
        err.user_hint()
    }
}

/// Parses a `YYYY-MM-DD` date argument, defaulting to today's local date.
pub fn parse_date_arg(raw: Option<&str>) -> Result<NaiveDate, AppError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(Local::now().date_naive()),
        Some(value) => NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|e| {
            AppError::date_parse_error(format!(
                "Invalid date '{value}': {e}. Use the YYYY-MM-DD format."
            ))
        }),
    }
}

/// Dispatches a subcommand to its handler.
pub fn run_command(client: &NbaClient, command: &Command) -> Result<CommandOutput, AppError> {
    match command {
        Command::Games { date, team } => {
            handle_games_command(client, date.as_deref(), team.as_deref())
        }
        Command::Teams {
            conference,
            division,
        } => handle_teams_command(client, conference.as_deref(), division.as_deref()),
        Command::Players {
            search,
            limit,
            active,
        } => handle_players_command(client, search, *limit, *active),
    }
}

/// Handles `games [DATE] [--team TEAM]`.
///
/// Fetches every game on the date, then applies the team filter locally.
pub fn handle_games_command(
    client: &NbaClient,
    date: Option<&str>,
    team: Option<&str>,
) -> Result<CommandOutput, AppError> {
    let day = parse_date_arg(date)?;
    let games: Vec<_> = client
        .get_games_for_date(day)?
        .into_iter()
        .filter(|game| game.matches_team(team))
        .collect();

    if games.is_empty() {
        return Ok(CommandOutput::Message(no_games_message(day, team)));
    }

    info!("Displaying {} games for {day}", games.len());
    Ok(CommandOutput::Table(games_table(day, &games)))
}

/// Handles `teams [--conference C] [--division D]`.
pub fn handle_teams_command(
    client: &NbaClient,
    conference: Option<&str>,
    division: Option<&str>,
) -> Result<CommandOutput, AppError> {
    let table = teams_table(&client.get_teams(conference, division)?, conference, division);

    // Also covers listings made up only of defunct franchises
    if table.is_empty() {
        return Ok(CommandOutput::Message("No teams found".to_string()));
    }

    Ok(CommandOutput::Table(table))
}

/// Handles `players --search TERM [--limit N] [--active]`.
pub fn handle_players_command(
    client: &NbaClient,
    search: &str,
    limit: u32,
    active: bool,
) -> Result<CommandOutput, AppError> {
    let players = client.search_players(search, active, limit)?;

    if players.is_empty() {
        return Ok(CommandOutput::Message(format!(
            "No players found for search '{search}'"
        )));
    }

    Ok(CommandOutput::Table(players_table(search, &players)))
}

/// Handles `--list-config`.
pub fn handle_list_config_command() -> Result<String, AppError> {
    let config = Config::load()?;
    Ok(config.summary(&Config::get_config_path(), get_api_key().is_ok()))
}

/// Handles `--config`, `--set-log-file` and `--clear-log-file`.
///
/// Starts from the existing file when it loads, otherwise from defaults, and
/// saves the result. The returned lines are printed as-is.
pub fn handle_config_update_command(args: &Args) -> Result<Vec<String>, AppError> {
    let config_path = Config::get_config_path();
    let mut config = Config::load_from_path(&config_path).unwrap_or_default();
    let mut messages = Vec::new();

    if let Some(new_domain) = &args.new_api_domain {
        config.api_domain = new_domain.clone();
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        messages.push("Custom log file path cleared. Using default location.".to_string());
    }

    config.validate()?;
    config.save_to_path(&config_path)?;
    messages.push("Config updated successfully!".to_string());

    Ok(messages)
}
