use std::fmt;

use async_trait::async_trait;

use super::types::{Country, Player, Team};

/// The three read-only endpoints the browser consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Countries,
    Teams,
    Players,
}

impl Endpoint {
    /// Short name used in logs and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::Countries => "countries",
            Endpoint::Teams => "teams",
            Endpoint::Players => "players",
        }
    }

    /// Path relative to the API base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Countries => "all_countries.php",
            Endpoint::Teams => "search_all_teams.php",
            Endpoint::Players => "lookup_all_players.php",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A failed fetch. Every variant names the endpoint that failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Connection refused, DNS, body read interrupted.
    Network { endpoint: Endpoint, message: String },
    /// Server answered with a non-2xx status.
    Status { endpoint: Endpoint, status: u16 },
    /// Body was not the JSON shape we expected.
    Parse { endpoint: Endpoint, message: String },
}

impl FetchError {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            FetchError::Network { endpoint, .. }
            | FetchError::Status { endpoint, .. }
            | FetchError::Parse { endpoint, .. } => *endpoint,
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network { endpoint, message } => {
                write!(f, "{endpoint} request failed: network error: {message}")
            }
            FetchError::Status { endpoint, status } => {
                write!(f, "{endpoint} request failed: HTTP {status}")
            }
            FetchError::Parse { endpoint, message } => {
                write!(f, "{endpoint} request failed: malformed response: {message}")
            }
        }
    }
}

impl std::error::Error for FetchError {}

/// Read-only access to the sports catalogue.
///
/// Every call hits the backing service; implementations do not cache or retry.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Returns the name of the source (for logs).
    fn name(&self) -> &str;

    async fn countries(&self) -> Result<Vec<Country>, FetchError>;

    async fn teams(&self, country: &str) -> Result<Vec<Team>, FetchError>;

    async fn players(&self, team_id: &str) -> Result<Vec<Player>, FetchError>;
}
