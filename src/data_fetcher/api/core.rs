use chrono::NaiveDate;
use reqwest::blocking::Client;
use tracing::{info, instrument};

use super::http_client::create_http_client_with_timeout;
use super::pagination::Pages;
use super::urls::{QueryParams, build_endpoint_url, games_query, players_query, teams_query};
use crate::config::{Config, get_api_key};
use crate::constants::endpoints;
use crate::data_fetcher::cache::{TeamCache, TeamQuery};
use crate::data_fetcher::models::{Game, Player, Team};
use crate::data_fetcher::processors::{parse_game, parse_player, parse_team};
use crate::error::AppError;

/// Client for the BALLDONTLIE API.
///
/// Owns the HTTP client and the team cache; the cache lives as long as the
/// client does. All calls are blocking and issue one request at a time.
pub struct NbaClient {
    http: Client,
    api_domain: String,
    team_cache: TeamCache,
}

impl NbaClient {
    /// Builds a client from the configuration and an explicit API key.
    pub fn new(config: &Config, api_key: &str) -> Result<Self, AppError> {
        Ok(Self {
            http: create_http_client_with_timeout(api_key, config.http_timeout_seconds)?,
            api_domain: config.api_domain.clone(),
            team_cache: TeamCache::default(),
        })
    }

    /// Builds a client, reading the API key from the environment.
    ///
    /// # Errors
    /// * `AppError::MissingApiKey` - `BALLDONTLIE_API_KEY` is unset or empty
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let api_key = get_api_key()?;
        Self::new(config, &api_key)
    }

    pub fn api_domain(&self) -> &str {
        &self.api_domain
    }

    /// Streams every raw record of a paginated endpoint, following
    /// `meta.next_cursor` until it runs out. Nothing is requested until the
    /// iterator is polled.
    pub fn fetch_all(&self, path: &str, params: QueryParams) -> Pages<'_> {
        Pages::new(&self.http, build_endpoint_url(&self.api_domain, path), params)
    }

    /// Searches players by first or last name, in server order.
    ///
    /// # Arguments
    /// * `search` - Name fragment
    /// * `active_only` - Restrict the search to players on a current roster
    /// * `per_page` - Page size requested from the API
    #[instrument(skip(self))]
    pub fn search_players(
        &self,
        search: &str,
        active_only: bool,
        per_page: u32,
    ) -> Result<Vec<Player>, AppError> {
        let path = if active_only {
            endpoints::ACTIVE_PLAYERS
        } else {
            endpoints::PLAYERS
        };

        let players = self
            .fetch_all(path, players_query(search, per_page))
            .map(|raw| raw.and_then(|raw| parse_player(&raw)))
            .collect::<Result<Vec<_>, _>>()?;

        info!("Found {} players matching {search:?}", players.len());
        Ok(players)
    }

    /// Lists all games scheduled on `day`.
    #[instrument(skip(self))]
    pub fn get_games_for_date(&self, day: NaiveDate) -> Result<Vec<Game>, AppError> {
        let games = self
            .fetch_all(endpoints::GAMES, games_query(day))
            .map(|raw| raw.and_then(|raw| parse_game(&raw)))
            .collect::<Result<Vec<_>, _>>()?;

        info!("Found {} games for {day}", games.len());
        Ok(games)
    }

    /// Lists teams, optionally filtered by conference and division.
    ///
    /// Results are cached per filter combination for the lifetime of the
    /// client, so repeated calls with the same filters do not hit the network.
    #[instrument(skip(self))]
    pub fn get_teams(
        &self,
        conference: Option<&str>,
        division: Option<&str>,
    ) -> Result<Vec<Team>, AppError> {
        let key = TeamQuery::new(conference, division);

        self.team_cache.get_or_try_fetch(key, || {
            self.fetch_all(endpoints::TEAMS, teams_query(conference, division))
                .map(|raw| raw.and_then(|raw| parse_team(&raw)))
                .collect::<Result<Vec<_>, _>>()
        })
    }
}
