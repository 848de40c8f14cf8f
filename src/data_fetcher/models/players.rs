use super::team::Team;

/// A player record from the `/players` and `/players/active` endpoints.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Player {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub height: String,
    pub weight: String,
    pub jersey_number: String,
    pub college: String,
    pub country: String,
    pub draft_year: Option<u32>,
    pub draft_round: Option<u32>,
    pub draft_number: Option<u32>,
    /// `None` for free agents.
    pub team: Option<Team>,
}

impl Player {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    pub fn is_free_agent(&self) -> bool {
        self.team.is_none()
    }

    /// Draft year with round and pick when both are known, e.g. `2014 (R2 #41)`.
    /// Undrafted players get an empty string.
    pub fn draft_summary(&self) -> String {
        let Some(year) = self.draft_year.filter(|year| *year > 0) else {
            return String::new();
        };

        match (self.draft_round, self.draft_number) {
            (Some(round), Some(number)) => format!("{year} (R{round} #{number})"),
            _ => year.to_string(),
        }
    }
}
