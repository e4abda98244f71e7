//! # Application State
//!
//! Core business state for Pitchside. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── source: Arc<dyn DataSource>      // remote catalogue
//! ├── countries: Vec<Country>          // fetched once per session
//! ├── selected_country: Option<String> // picked but not necessarily loaded
//! ├── selection: SelectionState        // teams, filter, mode, roster
//! ├── pending_roster: Option<TeamContext> // team whose roster is in flight
//! ├── flow: FlowFlags                  // affordances
//! ├── loading: LoadingFlags            // per-category spinner
//! ├── tokens: RequestTokens            // request fencing
//! ├── notifications: Notifications     // toasts
//! ├── toast_ttl: Duration
//! └── status_message: String           // title bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;
use std::time::Duration;

use crate::api::{Country, DataSource};
use crate::core::config::{DEFAULT_TOAST_SECONDS, ResolvedConfig};
use crate::core::notify::Notifications;
use crate::core::request::{LoadingFlags, RequestTokens};
use crate::core::selection::{DisplayMode, SelectionState, TeamContext};

/// What the user is currently allowed to do.
///
/// The two orthogonal flags from the browsing flow plus the country gate.
/// None of these is terminal; every transition can be re-entered.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FlowFlags {
    /// A country has been picked, so loading is possible.
    pub country_selected: bool,
    /// A team load has completed (successfully or not).
    pub has_teams_loaded: bool,
    /// A roster was loaded successfully and is on screen.
    pub has_roster_open: bool,
}

impl FlowFlags {
    pub fn can_load(&self) -> bool {
        self.country_selected
    }

    pub fn can_refresh(&self) -> bool {
        self.has_teams_loaded
    }

    pub fn can_search(&self) -> bool {
        self.has_teams_loaded
    }

    pub fn can_close_roster(&self) -> bool {
        self.has_roster_open
    }
}

pub struct App {
    pub source: Arc<dyn DataSource>,
    pub countries: Vec<Country>,
    pub selected_country: Option<String>,
    pub selection: SelectionState,
    /// Context for the roster request in flight; promoted on success.
    pub pending_roster: Option<TeamContext>,
    pub flow: FlowFlags,
    pub loading: LoadingFlags,
    pub tokens: RequestTokens,
    pub notifications: Notifications,
    pub toast_ttl: Duration,
    pub status_message: String,
}

impl App {
    pub fn new(source: Arc<dyn DataSource>, display_mode: DisplayMode) -> Self {
        Self {
            source,
            countries: Vec::new(),
            selected_country: None,
            selection: SelectionState::new(display_mode),
            pending_roster: None,
            flow: FlowFlags::default(),
            loading: LoadingFlags::default(),
            tokens: RequestTokens::default(),
            notifications: Notifications::default(),
            toast_ttl: Duration::from_secs(DEFAULT_TOAST_SECONDS),
            status_message: String::from("Pick a country to browse its clubs"),
        }
    }

    pub fn from_config(source: Arc<dyn DataSource>, config: &ResolvedConfig) -> Self {
        let mut app = Self::new(source, config.display_mode);
        app.toast_ttl = config.toast_ttl;
        app
    }

    /// The roster overlay is visible while a roster is open or being fetched.
    pub fn roster_visible(&self) -> bool {
        self.selection.has_roster_open() || self.loading.roster
    }

    /// Country the team list was loaded for, falling back to the picked one.
    pub fn refresh_country(&self) -> Option<&str> {
        self.selection
            .loaded_country
            .as_deref()
            .or(self.selected_country.as_deref())
    }
}
