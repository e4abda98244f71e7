//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;
use std::sync::Arc;

use crate::api::{Country, DataSource, FetchError, Player, Team};
use crate::core::selection::DisplayMode;

/// A canned data source. Every call returns a clone of the configured result.
pub struct StubSource {
    pub countries: Result<Vec<Country>, FetchError>,
    pub teams: Result<Vec<Team>, FetchError>,
    pub players: Result<Vec<Player>, FetchError>,
}

impl Default for StubSource {
    fn default() -> Self {
        Self {
            countries: Ok(Vec::new()),
            teams: Ok(Vec::new()),
            players: Ok(Vec::new()),
        }
    }
}

#[async_trait]
impl DataSource for StubSource {
    fn name(&self) -> &str {
        "stub"
    }

    async fn countries(&self) -> Result<Vec<Country>, FetchError> {
        self.countries.clone()
    }

    async fn teams(&self, _country: &str) -> Result<Vec<Team>, FetchError> {
        self.teams.clone()
    }

    async fn players(&self, _team_id: &str) -> Result<Vec<Player>, FetchError> {
        self.players.clone()
    }
}

/// Creates a test App with an empty StubSource.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(StubSource::default()), DisplayMode::Grid)
}

pub fn team(id: &str, name: &str, league: Option<&str>, stadium: Option<&str>) -> Team {
    Team {
        id: id.to_string(),
        name: name.to_string(),
        badge_url: format!("https://r2.thesportsdb.com/images/media/team/badge/{id}.png"),
        league: league.map(str::to_string),
        stadium_location: stadium.map(str::to_string),
        formed_year: None,
    }
}

pub fn player(name: &str) -> Player {
    Player {
        name: name.to_string(),
        position: None,
        nationality: None,
        thumbnail_url: None,
        birth_date: None,
        signing_info: None,
    }
}

pub fn country(name: &str) -> Country {
    Country {
        display_name: name.to_string(),
    }
}
