//! Builds the tables for each subcommand from domain values.

use chrono::NaiveDate;

use super::formatting::{dash_if_empty, format_status};
use super::table::Table;
use crate::data_fetcher::models::{Game, Player, Team};

pub fn games_title(day: NaiveDate) -> String {
    format!("NBA games for {day}")
}

/// Message shown when no game survives the team filter.
pub fn no_games_message(day: NaiveDate, team_filter: Option<&str>) -> String {
    match team_filter {
        Some(team) if !team.is_empty() => {
            format!("No games found for {day} and team filter '{team}'")
        }
        _ => format!("No games found for {day}"),
    }
}

pub fn games_table(day: NaiveDate, games: &[Game]) -> Table {
    let mut table =
        Table::new(games_title(day)).with_columns(&["Date", "Away", "Home", "Score", "Status"]);

    for game in games {
        table.add_row(vec![
            game.date.format("%Y-%m-%d").to_string(),
            game.visitor_team.display_name().to_string(),
            game.home_team.display_name().to_string(),
            game.score_line(),
            format_status(&game.status),
        ]);
    }

    table
}

/// Blank filters are not sent to the API, so they are treated as absent here too.
fn active_filter(filter: Option<&str>) -> Option<&str> {
    filter.map(str::trim).filter(|f| !f.is_empty())
}

pub fn teams_title(conference: Option<&str>, division: Option<&str>) -> String {
    let mut parts = vec!["NBA teams".to_string()];
    if let Some(conference) = active_filter(conference) {
        parts.push(format!("conference={conference}"));
    }
    if let Some(division) = active_filter(division) {
        parts.push(format!("division={division}"));
    }
    parts.join(" - ")
}

/// Teams table. Without filters the API also returns defunct franchises,
/// which are dropped here.
pub fn teams_table(teams: &[Team], conference: Option<&str>, division: Option<&str>) -> Table {
    let unfiltered = active_filter(conference).is_none() && active_filter(division).is_none();

    let mut table = Table::new(teams_title(conference, division))
        .with_columns(&["Abbr", "Name", "City", "Conf", "Div"]);

    for team in teams.iter().filter(|t| !unfiltered || t.is_complete()) {
        table.add_row(vec![
            team.abbreviation.clone(),
            dash_if_empty(&team.full_name),
            dash_if_empty(&team.city),
            dash_if_empty(&team.conference),
            dash_if_empty(&team.division),
        ]);
    }

    table
}

pub fn players_table(search: &str, players: &[Player]) -> Table {
    let mut table = Table::new(format!("Players search: '{search}'")).with_columns(&[
        "Name", "Pos", "Team", "Country", "Height", "Weight", "Jersey", "Draft",
    ]);

    for player in players {
        let team = player
            .team
            .as_ref()
            .map(|team| team.abbreviation.clone())
            .unwrap_or_default();

        table.add_row(vec![
            player.full_name(),
            player.position.clone(),
            team,
            player.country.clone(),
            player.height.clone(),
            player.weight.clone(),
            player.jersey_number.clone(),
            player.draft_summary(),
        ]);
    }

    table
}
