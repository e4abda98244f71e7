//! # Selection State
//!
//! The browsing session in one struct: the loaded team list, the active
//! filter and its view, the display mode, and the roster of the team that
//! is currently open.
//!
//! ```text
//! SelectionState
//! ├── all_teams: Vec<Team>                 // replaced wholesale per load
//! ├── loaded_country: Option<String>       // country all_teams belongs to
//! ├── filter_text: String                  // raw query as typed
//! ├── filtered: Vec<usize>                 // indices into all_teams
//! ├── display_mode: DisplayMode            // grid | list
//! ├── active_team_context: Option<TeamContext>
//! └── active_roster: Vec<Player>           // cleared together with the context
//! ```
//!
//! All methods here are synchronous. The network half of loading lives in
//! `action.rs`, which calls into this once a response is accepted.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::api::{Player, Team};
use crate::core::filter;

/// How the team collection is laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Grid,
    List,
}

impl DisplayMode {
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Grid => DisplayMode::List,
            DisplayMode::List => DisplayMode::Grid,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DisplayMode::Grid => "grid",
            DisplayMode::List => "list",
        }
    }
}

/// The team whose roster is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamContext {
    pub team_id: String,
    pub name: String,
    pub badge_url: String,
    pub league: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    pub all_teams: Vec<Team>,
    pub loaded_country: Option<String>,
    pub filter_text: String,
    filtered: Vec<usize>,
    pub display_mode: DisplayMode,
    pub active_team_context: Option<TeamContext>,
    pub active_roster: Vec<Player>,
}

impl SelectionState {
    pub fn new(display_mode: DisplayMode) -> Self {
        Self {
            display_mode,
            ..Default::default()
        }
    }

    /// Replace the team list for `country`. Resets the filter and closes any roster.
    pub fn replace_teams(&mut self, country: &str, teams: Vec<Team>) {
        self.all_teams = teams;
        self.loaded_country = Some(country.to_string());
        self.filter_text.clear();
        self.filtered = (0..self.all_teams.len()).collect();
        self.close_roster();
    }

    /// Recompute the filtered view for `text`. Never refetches.
    pub fn filter_teams(&mut self, text: &str) {
        self.filter_text = text.to_string();
        self.filtered = filter::matching_indices(&self.all_teams, text);
    }

    /// The current filtered view, in original order.
    pub fn filtered_teams(&self) -> Vec<&Team> {
        self.filtered.iter().map(|&i| &self.all_teams[i]).collect()
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Switch layout. Returns false (and changes nothing) when there is nothing to show.
    pub fn switch_display_mode(&mut self, mode: DisplayMode) -> bool {
        if self.filtered.is_empty() {
            return false;
        }
        self.display_mode = mode;
        true
    }

    pub fn open_roster(&mut self, context: TeamContext, players: Vec<Player>) {
        self.active_team_context = Some(context);
        self.active_roster = players;
    }

    pub fn close_roster(&mut self) {
        self.active_team_context = None;
        self.active_roster.clear();
    }

    pub fn has_roster_open(&self) -> bool {
        self.active_team_context.is_some()
    }
}
