//! # Records
//!
//! Plain domain records (`Country`, `Team`, `Player`) plus the raw wire
//! shapes TheSportsDB sends. The wire structs mirror the JSON field names
//! and are converted into domain records with `From` impls, so nothing
//! outside this module ever sees a `strTeam`.
//!
//! TheSportsDB is loose with its payloads: list fields may be absent or
//! `null`, optional text fields are often `""`, and numbers arrive as
//! strings. All of that is normalized here.

use serde::Deserialize;

// ============================================================================
// Domain Records
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    pub display_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    /// Upstream `idTeam`. Identity of the record.
    pub id: String,
    pub name: String,
    pub badge_url: String,
    pub league: Option<String>,
    pub stadium_location: Option<String>,
    /// Kept as text; the API sends `"1907"`, sometimes `""`.
    pub formed_year: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub position: Option<String>,
    pub nationality: Option<String>,
    pub thumbnail_url: Option<String>,
    /// `YYYY-MM-DD` as sent by the API.
    pub birth_date: Option<String>,
    pub signing_info: Option<String>,
}

// ============================================================================
// Wire Types
// ============================================================================

/// `GET all_countries.php`
#[derive(Deserialize, Debug, Default)]
pub struct CountriesResponse {
    #[serde(default)]
    pub countries: Option<Vec<RawCountry>>,
}

#[derive(Deserialize, Debug)]
pub struct RawCountry {
    #[serde(default)]
    pub name_en: Option<String>,
}

/// `GET search_all_teams.php?s=<sport>&c=<country>`
#[derive(Deserialize, Debug, Default)]
pub struct TeamsResponse {
    #[serde(default)]
    pub teams: Option<Vec<RawTeam>>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RawTeam {
    #[serde(default)]
    pub id_team: Option<String>,
    #[serde(default)]
    pub str_team: Option<String>,
    #[serde(default, alias = "strBadge")]
    pub str_team_badge: Option<String>,
    #[serde(default)]
    pub str_league: Option<String>,
    #[serde(default)]
    pub str_stadium_location: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub int_formed_year: Option<String>,
}

/// `GET lookup_all_players.php?id=<team_id>`
#[derive(Deserialize, Debug, Default)]
pub struct PlayersResponse {
    #[serde(default)]
    pub player: Option<Vec<RawPlayer>>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RawPlayer {
    #[serde(default)]
    pub str_player: Option<String>,
    #[serde(default)]
    pub str_position: Option<String>,
    #[serde(default)]
    pub str_nationality: Option<String>,
    #[serde(default)]
    pub str_thumb: Option<String>,
    #[serde(default)]
    pub str_cutout: Option<String>,
    #[serde(default)]
    pub date_born: Option<String>,
    #[serde(default)]
    pub str_signing: Option<String>,
}

/// Accepts `"1907"`, `1907` or `null`.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

// ============================================================================
// Translation Layer
// ============================================================================

/// Trims and drops empty strings.
fn present(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

impl From<RawTeam> for Team {
    fn from(raw: RawTeam) -> Self {
        Team {
            id: raw.id_team.unwrap_or_default().trim().to_string(),
            name: raw.str_team.unwrap_or_default().trim().to_string(),
            badge_url: raw.str_team_badge.unwrap_or_default().trim().to_string(),
            league: present(raw.str_league),
            stadium_location: present(raw.str_stadium_location),
            formed_year: present(raw.int_formed_year),
        }
    }
}

impl From<RawPlayer> for Player {
    fn from(raw: RawPlayer) -> Self {
        Player {
            name: raw.str_player.unwrap_or_default().trim().to_string(),
            position: present(raw.str_position),
            nationality: present(raw.str_nationality),
            thumbnail_url: present(raw.str_thumb).or_else(|| present(raw.str_cutout)),
            birth_date: present(raw.date_born),
            signing_info: present(raw.str_signing),
        }
    }
}

impl CountriesResponse {
    /// Countries without an English name are unusable as a query value and are skipped.
    pub fn into_countries(self) -> Vec<Country> {
        self.countries
            .unwrap_or_default()
            .into_iter()
            .filter_map(|c| present(c.name_en))
            .map(|display_name| Country { display_name })
            .collect()
    }
}

impl TeamsResponse {
    pub fn into_teams(self) -> Vec<Team> {
        self.teams
            .unwrap_or_default()
            .into_iter()
            .map(Team::from)
            .collect()
    }
}

impl PlayersResponse {
    pub fn into_players(self) -> Vec<Player> {
        self.player
            .unwrap_or_default()
            .into_iter()
            .map(Player::from)
            .collect()
    }
}
