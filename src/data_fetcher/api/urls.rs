//! URL and query-string building utilities for API endpoints

use chrono::NaiveDate;

use crate::constants::query::{DATE_FORMAT, GAMES_PER_PAGE};

/// Query parameters as ordered key/value pairs. Repeated keys are allowed.
pub type QueryParams = Vec<(String, String)>;

/// Joins the API domain and an endpoint path.
///
/// # Example
/// ```
/// use nba_cli::data_fetcher::api::build_endpoint_url;
///
/// let url = build_endpoint_url("https://api.balldontlie.io/v1/", "/teams");
/// assert_eq!(url, "https://api.balldontlie.io/v1/teams");
/// ```
pub fn build_endpoint_url(api_domain: &str, path: &str) -> String {
    format!(
        "{}/{}",
        api_domain.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Parameters for a player search.
pub fn players_query(search: &str, per_page: u32) -> QueryParams {
    vec![
        ("search".to_string(), search.to_string()),
        ("per_page".to_string(), per_page.to_string()),
    ]
}

/// Parameters for listing the games of a single day.
pub fn games_query(day: NaiveDate) -> QueryParams {
    vec![
        ("dates[]".to_string(), day.format(DATE_FORMAT).to_string()),
        ("per_page".to_string(), GAMES_PER_PAGE.to_string()),
    ]
}

/// Parameters for listing teams. Absent or blank filters are left out
/// entirely rather than sent empty.
pub fn teams_query(conference: Option<&str>, division: Option<&str>) -> QueryParams {
    [("conference", conference), ("division", division)]
        .into_iter()
        .filter_map(|(key, value)| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(|v| (key.to_string(), v.to_string()))
        })
        .collect()
}

/// Returns the static parameters merged with the pagination cursor, which is
/// only added when present.
pub fn with_cursor(params: &[(String, String)], cursor: Option<&str>) -> QueryParams {
    let mut merged = params.to_vec();
    if let Some(cursor) = cursor {
        merged.push(("cursor".to_string(), cursor.to_string()));
    }
    merged
}
