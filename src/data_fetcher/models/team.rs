/// An NBA franchise as returned by the `/teams` endpoint and embedded in
/// game and player payloads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Team {
    pub id: u64,
    pub conference: String,
    pub division: String,
    pub city: String,
    pub name: String,
    pub full_name: String,
    pub abbreviation: String,
}

impl Team {
    /// Short label for tables: the abbreviation, or the full name when the
    /// abbreviation is missing.
    pub fn display_name(&self) -> &str {
        if self.abbreviation.is_empty() {
            &self.full_name
        } else {
            &self.abbreviation
        }
    }

    /// True for current franchises. The API also lists historical teams with
    /// blank conference/division/city and a "Team Name" placeholder.
    pub fn is_complete(&self) -> bool {
        !self.conference.is_empty()
            && !self.division.is_empty()
            && !self.city.is_empty()
            && self.full_name != "Team Name"
    }

    /// `key` must already be trimmed and lowercased.
    pub(crate) fn matches(&self, key: &str) -> bool {
        key == self.abbreviation.to_lowercase()
            || self.full_name.to_lowercase().contains(key)
            || self.city.to_lowercase().contains(key)
            || self.name.to_lowercase().contains(key)
    }
}
