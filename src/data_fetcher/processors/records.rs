use chrono::{Local, NaiveDate};
use serde_json::Value;
use tracing::warn;

use super::fields::{
    bool_field, i32_field, optional_u32, parse_game_date, parse_game_datetime, required_id,
    string_field,
};
use crate::data_fetcher::models::{Game, Player, Team};
use crate::error::AppError;

/// Converts a raw team object into a [`Team`].
///
/// # Errors
/// * `AppError::InvalidRecord` - `id` is missing or not a positive integer
pub fn parse_team(obj: &Value) -> Result<Team, AppError> {
    Ok(Team {
        id: required_id(obj, "team")?,
        conference: string_field(obj, "conference"),
        division: string_field(obj, "division"),
        city: string_field(obj, "city"),
        name: string_field(obj, "name"),
        full_name: string_field(obj, "full_name"),
        abbreviation: string_field(obj, "abbreviation"),
    })
}

/// Converts a raw game object into a [`Game`], using the current local date
/// when the `date` field cannot be parsed.
pub fn parse_game(obj: &Value) -> Result<Game, AppError> {
    parse_game_with_today(obj, Local::now().date_naive())
}

/// Deterministic variant of [`parse_game`] with an explicit fallback date.
pub fn parse_game_with_today(obj: &Value, today: NaiveDate) -> Result<Game, AppError> {
    let id = required_id(obj, "game")?;

    Ok(Game {
        id,
        date: parse_game_date(obj.get("date"), today),
        datetime: parse_game_datetime(obj.get("datetime")),
        home_team: embedded_team_or_default(obj.get("home_team"), id),
        visitor_team: embedded_team_or_default(obj.get("visitor_team"), id),
        home_team_score: optional_u32(obj, "home_team_score"),
        visitor_team_score: optional_u32(obj, "visitor_team_score"),
        status: string_field(obj, "status"),
        season: i32_field(obj, "season"),
        period: optional_u32(obj, "period").unwrap_or(0),
        time: string_field(obj, "time"),
        postseason: bool_field(obj, "postseason"),
    })
}

/// Converts a raw player object into a [`Player`]. A missing, null or empty
/// `team` object makes the player a free agent.
pub fn parse_player(obj: &Value) -> Result<Player, AppError> {
    let id = required_id(obj, "player")?;

    let team = match embedded_object(obj.get("team")) {
        Some(raw) => match parse_team(raw) {
            Ok(team) => Some(team),
            Err(e) => {
                warn!("Dropping unusable team of player {id}: {e}");
                None
            }
        },
        None => None,
    };

    Ok(Player {
        id,
        first_name: string_field(obj, "first_name"),
        last_name: string_field(obj, "last_name"),
        position: string_field(obj, "position"),
        height: string_field(obj, "height"),
        weight: string_field(obj, "weight"),
        jersey_number: string_field(obj, "jersey_number"),
        college: string_field(obj, "college"),
        country: string_field(obj, "country"),
        draft_year: optional_u32(obj, "draft_year"),
        draft_round: optional_u32(obj, "draft_round"),
        draft_number: optional_u32(obj, "draft_number"),
        team,
    })
}

fn embedded_object(raw: Option<&Value>) -> Option<&Value> {
    raw.filter(|value| value.as_object().is_some_and(|map| !map.is_empty()))
}

fn embedded_team_or_default(raw: Option<&Value>, game_id: u64) -> Team {
    match embedded_object(raw) {
        Some(raw) => parse_team(raw).unwrap_or_else(|e| {
            warn!("Using empty team for game {game_id}: {e}");
            Team::default()
        }),
        None => Team::default(),
    }
}
