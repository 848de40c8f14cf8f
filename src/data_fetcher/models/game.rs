use super::team::Team;
use chrono::{DateTime, FixedOffset, NaiveDate};

/// A single game from the `/games` endpoint.
///
/// `date` is always present; `datetime` carries the precise tip-off time
/// when the API provides one. Scores are `None` before tip-off.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: u64,
    pub date: NaiveDate,
    pub datetime: Option<DateTime<FixedOffset>>,
    pub home_team: Team,
    pub visitor_team: Team,
    pub home_team_score: Option<u32>,
    pub visitor_team_score: Option<u32>,
    /// Free text such as "Final" or "3rd Qtr"; scheduled games carry a raw
    /// ISO-8601 timestamp here.
    pub status: String,
    pub season: i32,
    pub period: u32,
    pub time: String,
    pub postseason: bool,
}

impl Game {
    /// True once either side has put points on the board.
    pub fn has_score(&self) -> bool {
        self.home_team_score.unwrap_or(0) > 0 || self.visitor_team_score.unwrap_or(0) > 0
    }

    /// `visitor - home` once the game has points on the board, `-` otherwise.
    pub fn score_line(&self) -> String {
        if self.has_score() {
            format!(
                "{} - {}",
                self.visitor_team_score.unwrap_or(0),
                self.home_team_score.unwrap_or(0)
            )
        } else {
            "-".to_string()
        }
    }

    /// Case-insensitive team filter over both sides of the game.
    ///
    /// Matches an exact abbreviation, or a substring of the full name, city or
    /// nickname. A missing or blank filter matches every game.
    pub fn matches_team(&self, filter: Option<&str>) -> bool {
        let key = match filter.map(str::trim) {
            Some(key) if !key.is_empty() => key.to_lowercase(),
            _ => return true,
        };

        self.home_team.matches(&key) || self.visitor_team.matches(&key)
    }
}
