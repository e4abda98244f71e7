//! # Remote Data Source
//!
//! Read-only access to the team catalogue: countries, teams by country,
//! players by team. `DataSource` is the seam; `SportsDbClient` is the real
//! HTTP implementation.

pub mod client;
pub mod source;
pub mod types;

pub use client::SportsDbClient;
pub use source::{DataSource, Endpoint, FetchError};
pub use types::{Country, Player, Team};
