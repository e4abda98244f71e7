//! TheSportsDB client.
//!
//! One GET per call, no retries, no timeout, no caching.

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::de::DeserializeOwned;

use super::source::{DataSource, Endpoint, FetchError};
use super::types::{CountriesResponse, Country, Player, PlayersResponse, Team, TeamsResponse};

pub const DEFAULT_BASE_URL: &str = "https://www.thesportsdb.com/api/v1/json/3";
pub const DEFAULT_SPORT: &str = "Soccer";

/// `DataSource` backed by the TheSportsDB v1 JSON API.
pub struct SportsDbClient {
    base_url: String,
    sport: String,
    client: reqwest::Client,
}

impl SportsDbClient {
    pub fn new(base_url: Option<String>, sport: Option<String>) -> Self {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            sport: sport.unwrap_or_else(|| DEFAULT_SPORT.to_string()),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Performs the GET and decodes the body as `T`.
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        query: &[(&str, &str)],
    ) -> Result<T, FetchError> {
        let url = format!("{}/{}", self.base_url, endpoint.path());
        info!("GET {} (endpoint={}, query={:?})", url, endpoint, query);

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| FetchError::Network {
                endpoint,
                message: e.to_string(),
            })?;

        debug!("{} response status: {}", endpoint, response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            warn!("{} request returned HTTP {}", endpoint, status);
            return Err(FetchError::Status { endpoint, status });
        }

        let body = response.text().await.map_err(|e| FetchError::Network {
            endpoint,
            message: e.to_string(),
        })?;
        debug!("{} response body: {} bytes", endpoint, body.len());

        serde_json::from_str(&body).map_err(|e| {
            warn!("{} response could not be decoded: {}", endpoint, e);
            FetchError::Parse {
                endpoint,
                message: e.to_string(),
            }
        })
    }
}

#[async_trait]
impl DataSource for SportsDbClient {
    fn name(&self) -> &str {
        "thesportsdb"
    }

    async fn countries(&self) -> Result<Vec<Country>, FetchError> {
        let body: CountriesResponse = self.get_json(Endpoint::Countries, &[]).await?;
        let countries = body.into_countries();
        info!("Fetched {} countries", countries.len());
        Ok(countries)
    }

    async fn teams(&self, country: &str) -> Result<Vec<Team>, FetchError> {
        let body: TeamsResponse = self
            .get_json(Endpoint::Teams, &[("s", self.sport.as_str()), ("c", country)])
            .await?;
        let teams = body.into_teams();
        info!("Fetched {} teams for {}", teams.len(), country);
        Ok(teams)
    }

    async fn players(&self, team_id: &str) -> Result<Vec<Player>, FetchError> {
        let body: PlayersResponse = self
            .get_json(Endpoint::Players, &[("id", team_id)])
            .await?;
        let players = body.into_players();
        info!("Fetched {} players for team {}", players.len(), team_id);
        Ok(players)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let client = SportsDbClient::new(None, None);
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
        assert_eq!(client.sport, "Soccer");
        assert_eq!(client.name(), "thesportsdb");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = SportsDbClient::new(Some("http://localhost:9000/api/".to_string()), None);
        assert_eq!(client.base_url(), "http://localhost:9000/api");
    }
}
