//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Routing
//!
//! Events are routed in a fixed order, first match wins:
//!
//! 1. Ctrl+C quits regardless of focus.
//! 2. While the roster overlay is visible it owns the keyboard.
//! 3. The search box owns the keyboard while focused.
//! 4. Global keys (`l`, `r`, `g`, `/`, `q`, Esc, Tab).
//! 5. The focused pane (countries or teams).
//!
//! ## Redraw Strategy
//!
//! - **Animating** (a request in flight or toasts on screen): draws every
//!   ~80ms so the spinner moves and expired toasts disappear.
//! - **Idle**: sleeps up to 500ms, only redraws on events or background
//!   results.

mod component;
mod components;
mod event;
mod ui;
pub mod view_model;

use chrono::NaiveDate;
use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::api::{DataSource, SportsDbClient};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    CountryPickerEvent, CountryPickerState, RosterViewState, SearchBox, SearchEvent,
    TeamBrowserEvent, TeamBrowserState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Which pane receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Countries,
    Search,
    Teams,
}

impl Focus {
    /// Tab order. Search is skipped while there is nothing to search.
    fn next(self, can_search: bool) -> Self {
        match self {
            Focus::Countries if can_search => Focus::Search,
            Focus::Countries => Focus::Teams,
            Focus::Search => Focus::Teams,
            Focus::Teams => Focus::Countries,
        }
    }

    fn prev(self, can_search: bool) -> Self {
        match self {
            Focus::Countries => Focus::Teams,
            Focus::Search => Focus::Countries,
            Focus::Teams if can_search => Focus::Search,
            Focus::Teams => Focus::Countries,
        }
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub focus: Focus,
    // Persistent component states
    pub country_picker: CountryPickerState,
    pub search: SearchBox,
    pub team_browser: TeamBrowserState,
    pub roster_view: RosterViewState,
    /// Reference date for player ages
    pub today: NaiveDate,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            focus: Focus::Countries,
            country_picker: CountryPickerState::new(),
            search: SearchBox::new(),
            team_browser: TeamBrowserState::new(),
            roster_view: RosterViewState::new(),
            today: chrono::Local::now().date_naive(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableBracketedPaste, SetCursorStyle::SteadyBlock)?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, Show);
        info!("Terminal modes disabled");
    }
}

/// Translate one input event into at most one intent.
///
/// Presentation-only changes (focus, highlight, scroll) are applied to `tui`
/// directly; anything that touches core state comes back as an `Action`.
fn route_event(event: &TuiEvent, app: &App, tui: &mut TuiState) -> Option<Action> {
    match event {
        TuiEvent::ForceQuit => return Some(Action::Quit),
        TuiEvent::Resize => return None,
        _ => {}
    }

    if app.roster_visible() {
        if matches!(event, TuiEvent::Escape) {
            tui.roster_view = RosterViewState::new();
            return Some(Action::RosterClosed);
        }
        tui.roster_view
            .handle_event(event, app.selection.active_roster.len());
        return None;
    }

    if tui.focus == Focus::Search {
        return match tui.search.handle_event(event)? {
            SearchEvent::Changed(text) => {
                tui.team_browser.reset();
                Some(Action::FilterTextChanged(text))
            }
            SearchEvent::Done => {
                tui.focus = match event {
                    TuiEvent::FocusPrev => Focus::Countries,
                    _ => Focus::Teams,
                };
                None
            }
        };
    }

    match event {
        TuiEvent::InputChar('q') | TuiEvent::Escape => return Some(Action::Quit),
        TuiEvent::InputChar('l') => {
            return app
                .flow
                .can_load()
                .then_some(Action::LoadTeamsRequested);
        }
        TuiEvent::InputChar('r') => {
            return app.flow.can_refresh().then_some(Action::RefreshRequested);
        }
        TuiEvent::InputChar('g') => {
            return Some(Action::DisplayModeChanged(
                app.selection.display_mode.toggled(),
            ));
        }
        TuiEvent::InputChar('/') => {
            if app.flow.can_search() {
                tui.focus = Focus::Search;
            }
            return None;
        }
        TuiEvent::FocusNext => {
            tui.focus = tui.focus.next(app.flow.can_search());
            return None;
        }
        TuiEvent::FocusPrev => {
            tui.focus = tui.focus.prev(app.flow.can_search());
            return None;
        }
        _ => {}
    }

    match tui.focus {
        Focus::Countries => match tui.country_picker.handle_event(event, &app.countries)? {
            CountryPickerEvent::Selected(name) => Some(Action::CountrySelected(name)),
        },
        Focus::Teams => {
            let teams = app.selection.filtered_teams();
            match tui.team_browser.handle_event(event, teams.len())? {
                TeamBrowserEvent::Activated(index) => {
                    let team = teams.get(index)?;
                    tui.roster_view = RosterViewState::new();
                    Some(Action::TeamCardActivated {
                        team_id: team.id.clone(),
                        team_name: team.name.clone(),
                        badge_url: team.badge_url.clone(),
                        league: team.league.clone(),
                    })
                }
            }
        }
        Focus::Search => None,
    }
}

/// Run a fetch effect on the tokio runtime. The result comes back as an
/// `Action` on `tx`, tagged with the token it was issued under.
fn spawn_effect(effect: Effect, source: Arc<dyn DataSource>, tx: mpsc::Sender<Action>) {
    match effect {
        Effect::None | Effect::Quit => {}
        Effect::FetchCountries { token } => {
            info!("Spawning country fetch (token={})", token);
            tokio::spawn(async move {
                let result = source.countries().await;
                if tx.send(Action::CountriesLoaded { token, result }).is_err() {
                    warn!("Failed to deliver countries: receiver dropped");
                }
            });
        }
        Effect::FetchTeams { token, country } => {
            info!("Spawning team fetch for {} (token={})", country, token);
            tokio::spawn(async move {
                let result = source.teams(&country).await;
                if tx
                    .send(Action::TeamsLoaded {
                        token,
                        country,
                        result,
                    })
                    .is_err()
                {
                    warn!("Failed to deliver teams: receiver dropped");
                }
            });
        }
        Effect::FetchRoster { token, team_id } => {
            info!("Spawning roster fetch for team {} (token={})", team_id, token);
            tokio::spawn(async move {
                let result = source.players(&team_id).await;
                if tx.send(Action::RosterLoaded { token, result }).is_err() {
                    warn!("Failed to deliver roster: receiver dropped");
                }
            });
        }
    }
}

/// Apply an action and run its effect. Returns true when the app should quit.
fn dispatch(app: &mut App, tui: &mut TuiState, action: Action, tx: &mpsc::Sender<Action>) -> bool {
    let teams_replaced = matches!(action, Action::TeamsLoaded { .. });
    let effect = update(app, action);
    if teams_replaced {
        tui.team_browser.reset();
    }
    if effect == Effect::Quit {
        return true;
    }
    spawn_effect(effect, app.source.clone(), tx.clone());
    false
}

pub fn run(config: ResolvedConfig, initial_country: Option<String>) -> std::io::Result<()> {
    let source: Arc<dyn DataSource> = Arc::new(SportsDbClient::new(
        Some(config.base_url.clone()),
        Some(config.sport.clone()),
    ));
    info!("Using data source {}", source.name());
    let mut app = App::from_config(source, &config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    dispatch(&mut app, &mut tui, Action::Startup, &tx);
    if let Some(country) = initial_country {
        dispatch(&mut app, &mut tui, Action::CountrySelected(country), &tx);
        dispatch(&mut app, &mut tui, Action::LoadTeamsRequested, &tx);
        tui.focus = Focus::Teams;
    }

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    'main: loop {
        let animating = app.loading.any() || !app.notifications.is_empty();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            // A reload clears the filter; keep the search box in step
            tui.search.sync(&app.selection.filter_text);
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain all pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            tui.search.sync(&app.selection.filter_text);
            if let Some(action) = route_event(&event, &app, &mut tui) {
                debug!("Routed {:?} to {:?}", event, action);
                if dispatch(&mut app, &mut tui, action, &tx) {
                    break 'main;
                }
            }
        }

        // Results from background fetches
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            if dispatch(&mut app, &mut tui, action, &tx) {
                break 'main;
            }
        }

        let toasts_before = app.notifications.len();
        update(&mut app, Action::Tick(Instant::now()));
        if app.notifications.len() != toasts_before {
            needs_redraw = true;
        }
    }

    info!("Pitchside shutting down");
    ratatui::restore();
    Ok(())
}
