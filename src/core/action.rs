//! # Actions
//!
//! Everything that can happen in Pitchside becomes an `Action`.
//! User picks a country? That's `Action::CountrySelected(name)`.
//! Teams arrive? That's `Action::TeamsLoaded { .. }`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing any I/O the event loop
//! should perform. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Remote loads are split in two: the intent issues a request token and
//! returns a fetch `Effect`; the matching `*Loaded` action applies the
//! result, but only if its token is still the latest for that category.

use log::{debug, info, warn};
use std::time::Instant;

use crate::api::{Country, FetchError, Player, Team};
use crate::core::notify::Severity;
use crate::core::request::RequestKind;
use crate::core::selection::{DisplayMode, TeamContext};
use crate::core::state::App;

#[derive(Debug)]
pub enum Action {
    // Intents emitted by the presentation layer
    CountrySelected(String),
    LoadTeamsRequested,
    FilterTextChanged(String),
    DisplayModeChanged(DisplayMode),
    RefreshRequested,
    TeamCardActivated {
        team_id: String,
        team_name: String,
        badge_url: String,
        league: Option<String>,
    },
    RosterClosed,

    // Lifecycle
    Startup,
    Tick(Instant),
    Quit,

    // Completions delivered by background fetches
    CountriesLoaded {
        token: u64,
        result: Result<Vec<Country>, FetchError>,
    },
    TeamsLoaded {
        token: u64,
        country: String,
        result: Result<Vec<Team>, FetchError>,
    },
    RosterLoaded {
        token: u64,
        result: Result<Vec<Player>, FetchError>,
    },
}

/// I/O requested by `update()`, executed by the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    FetchCountries { token: u64 },
    FetchTeams { token: u64, country: String },
    FetchRoster { token: u64, team_id: String },
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Startup => {
            let token = app.tokens.issue(RequestKind::Countries);
            app.loading.countries = true;
            Effect::FetchCountries { token }
        }

        Action::CountrySelected(name) => {
            let name = name.trim();
            if name.is_empty() {
                return Effect::None;
            }
            info!("Country selected: {}", name);
            app.selected_country = Some(name.to_string());
            app.flow.country_selected = true;
            app.status_message = format!("{name} selected, press l to load clubs");
            Effect::None
        }

        Action::LoadTeamsRequested => match app.selected_country.clone() {
            Some(country) => request_teams(app, &country),
            None => Effect::None,
        },

        Action::RefreshRequested => {
            if !app.flow.can_refresh() {
                return Effect::None;
            }
            match app.refresh_country().map(str::to_string) {
                Some(country) => request_teams(app, &country),
                None => Effect::None,
            }
        }

        Action::FilterTextChanged(text) => {
            app.selection.filter_teams(&text);
            debug!(
                "Filter {:?}: {}/{} teams",
                text,
                app.selection.filtered_len(),
                app.selection.all_teams.len()
            );
            Effect::None
        }

        Action::DisplayModeChanged(mode) => {
            if app.selection.switch_display_mode(mode) {
                app.status_message = format!("Showing clubs as {}", mode.label());
            }
            Effect::None
        }

        Action::TeamCardActivated {
            team_id,
            team_name,
            badge_url,
            league,
        } => {
            let team_id = team_id.trim().to_string();
            if team_id.is_empty() {
                return Effect::None;
            }
            let token = app.tokens.issue(RequestKind::Roster);
            app.loading.roster = true;
            app.pending_roster = Some(TeamContext {
                team_id: team_id.clone(),
                name: team_name,
                badge_url,
                league,
                country: app.selection.loaded_country.clone(),
            });
            info!("Requesting roster for team {} (token={})", team_id, token);
            Effect::FetchRoster { token, team_id }
        }

        Action::RosterClosed => {
            close_roster(app);
            Effect::None
        }

        Action::Tick(now) => {
            app.notifications.expire(now, app.toast_ttl);
            Effect::None
        }

        Action::Quit => Effect::Quit,

        Action::CountriesLoaded { token, result } => {
            if !accept(app, RequestKind::Countries, token) {
                return Effect::None;
            }
            match result {
                Ok(countries) => {
                    info!("Loaded {} countries", countries.len());
                    app.countries = countries;
                }
                Err(e) => {
                    warn!("Country list failed: {}", e);
                    app.countries.clear();
                    app.notifications
                        .push(Severity::Error, format!("Could not load countries: {e}"));
                }
            }
            Effect::None
        }

        Action::TeamsLoaded {
            token,
            country,
            result,
        } => {
            if !accept(app, RequestKind::Teams, token) {
                return Effect::None;
            }
            // Rosters requested from the old list no longer apply
            close_roster(app);
            app.flow.has_teams_loaded = true;
            match result {
                Ok(teams) => {
                    let count = teams.len();
                    app.selection.replace_teams(&country, teams);
                    app.status_message = format!("{count} clubs in {country}");
                    app.notifications
                        .push(Severity::Info, format!("Loaded {count} clubs for {country}"));
                }
                Err(e) => {
                    warn!("Team list for {} failed: {}", country, e);
                    app.selection.replace_teams(&country, Vec::new());
                    app.status_message = format!("No clubs for {country}");
                    app.notifications
                        .push(Severity::Error, format!("Could not load clubs: {e}"));
                }
            }
            Effect::None
        }

        Action::RosterLoaded { token, result } => {
            if !accept(app, RequestKind::Roster, token) {
                return Effect::None;
            }
            let Some(context) = app.pending_roster.take() else {
                warn!("Roster response without a pending team (token={})", token);
                return Effect::None;
            };
            match result {
                Ok(players) => {
                    info!("Roster for {}: {} players", context.name, players.len());
                    app.selection.open_roster(context, players);
                    app.flow.has_roster_open = true;
                }
                Err(e) => {
                    warn!("Roster for {} failed: {}", context.name, e);
                    app.selection.close_roster();
                    app.flow.has_roster_open = false;
                    app.notifications
                        .push(Severity::Error, format!("Could not load squad: {e}"));
                }
            }
            Effect::None
        }
    }
}

/// Start a team load for `country`. A blank country is a no-op.
///
/// Any open or in-flight roster belongs to the old list and is dropped now.
fn request_teams(app: &mut App, country: &str) -> Effect {
    let country = country.trim();
    if country.is_empty() {
        return Effect::None;
    }
    close_roster(app);
    let token = app.tokens.issue(RequestKind::Teams);
    app.loading.teams = true;
    app.status_message = format!("Loading clubs for {country}...");
    info!("Requesting teams for {} (token={})", country, token);
    Effect::FetchTeams {
        token,
        country: country.to_string(),
    }
}

fn close_roster(app: &mut App) {
    app.tokens.invalidate(RequestKind::Roster);
    app.loading.roster = false;
    app.pending_roster = None;
    app.selection.close_roster();
    app.flow.has_roster_open = false;
}

/// Check the fence for `kind`. On acceptance, the category stops loading.
fn accept(app: &mut App, kind: RequestKind, token: u64) -> bool {
    if !app.tokens.is_current(kind, token) {
        debug!("Discarding stale {:?} response (token={})", kind, token);
        return false;
    }
    app.loading.set(kind, false);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Endpoint;
    use crate::test_support::{player, team, test_app};

    fn spain() -> Vec<Team> {
        vec![
            team("133722", "Real Betis", Some("Spanish La Liga"), Some("Sevilla")),
            team("133739", "Sevilla FC", Some("Spanish La Liga"), Some("Sevilla")),
        ]
    }

    fn teams_token(effect: Effect) -> u64 {
        match effect {
            Effect::FetchTeams { token, .. } => token,
            other => panic!("expected FetchTeams, got {other:?}"),
        }
    }

    fn roster_token(effect: Effect) -> u64 {
        match effect {
            Effect::FetchRoster { token, .. } => token,
            other => panic!("expected FetchRoster, got {other:?}"),
        }
    }

    fn activate(app: &mut App, id: &str, name: &str) -> Effect {
        update(
            app,
            Action::TeamCardActivated {
                team_id: id.to_string(),
                team_name: name.to_string(),
                badge_url: format!("https://img/{id}.png"),
                league: Some("Spanish La Liga".to_string()),
            },
        )
    }

    /// Select Spain and complete a successful team load.
    fn loaded_spain() -> App {
        let mut app = test_app();
        update(&mut app, Action::CountrySelected("Spain".to_string()));
        let token = teams_token(update(&mut app, Action::LoadTeamsRequested));
        update(
            &mut app,
            Action::TeamsLoaded {
                token,
                country: "Spain".to_string(),
                result: Ok(spain()),
            },
        );
        app
    }

    #[test]
    fn test_startup_fetches_countries() {
        let mut app = test_app();
        let effect = update(&mut app, Action::Startup);
        assert_eq!(effect, Effect::FetchCountries { token: 1 });
        assert!(app.loading.countries);

        update(
            &mut app,
            Action::CountriesLoaded {
                token: 1,
                result: Ok(vec![Country {
                    display_name: "Spain".to_string(),
                }]),
            },
        );
        assert!(!app.loading.countries);
        assert_eq!(app.countries.len(), 1);
    }

    #[test]
    fn test_countries_failure_is_soft() {
        let mut app = test_app();
        update(&mut app, Action::Startup);
        update(
            &mut app,
            Action::CountriesLoaded {
                token: 1,
                result: Err(FetchError::Status {
                    endpoint: Endpoint::Countries,
                    status: 503,
                }),
            },
        );
        assert!(app.countries.is_empty());
        assert!(app.notifications.has_errors());
        assert!(!app.loading.any());
    }

    #[test]
    fn test_load_without_country_is_noop() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::LoadTeamsRequested), Effect::None);
        assert_eq!(
            update(&mut app, Action::CountrySelected("   ".to_string())),
            Effect::None
        );
        assert!(!app.flow.can_load());
        assert!(!app.loading.teams);
    }

    #[test]
    fn test_selecting_country_enables_load() {
        let mut app = test_app();
        update(&mut app, Action::CountrySelected("Spain".to_string()));
        assert!(app.flow.can_load());
        let effect = update(&mut app, Action::LoadTeamsRequested);
        assert_eq!(
            effect,
            Effect::FetchTeams {
                token: 1,
                country: "Spain".to_string()
            }
        );
        assert!(app.loading.teams);
    }

    #[test]
    fn test_spain_then_filter_sevilla() {
        let mut app = test_app();
        update(&mut app, Action::CountrySelected("Spain".to_string()));
        let token = teams_token(update(&mut app, Action::LoadTeamsRequested));
        update(
            &mut app,
            Action::TeamsLoaded {
                token,
                country: "Spain".to_string(),
                result: Ok(vec![
                    team("133722", "Real Betis", None, None),
                    team("133739", "Sevilla FC", None, None),
                ]),
            },
        );
        assert!(app.flow.has_teams_loaded);
        assert!(!app.loading.teams);
        assert_eq!(app.selection.filtered_len(), 2);

        update(&mut app, Action::FilterTextChanged("sevilla".to_string()));

        let names: Vec<_> = app
            .selection
            .filtered_teams()
            .iter()
            .map(|t| t.name.clone())
            .collect();
        assert_eq!(names, vec!["Sevilla FC"]);
    }

    #[test]
    fn test_filter_also_matches_stadium() {
        let mut app = loaded_spain();
        update(&mut app, Action::FilterTextChanged("SEVILLA".to_string()));
        // Betis plays in Sevilla too.
        assert_eq!(app.selection.filtered_len(), 2);
        assert_eq!(app.selection.all_teams.len(), 2);
    }

    #[test]
    fn test_teams_http_500_clears_list_and_notifies() {
        let mut app = loaded_spain();
        let token = teams_token(update(&mut app, Action::RefreshRequested));
        assert!(app.loading.teams);

        update(
            &mut app,
            Action::TeamsLoaded {
                token,
                country: "Spain".to_string(),
                result: Err(FetchError::Status {
                    endpoint: Endpoint::Teams,
                    status: 500,
                }),
            },
        );

        assert!(app.selection.all_teams.is_empty());
        assert!(app.notifications.has_errors());
        assert!(!app.loading.teams);
        // A failed load still counts as loaded.
        assert!(app.flow.has_teams_loaded);
    }

    #[test]
    fn test_loading_teams_resets_filter_and_roster() {
        let mut app = loaded_spain();
        update(&mut app, Action::FilterTextChanged("betis".to_string()));
        let token = roster_token(activate(&mut app, "133722", "Real Betis"));
        update(
            &mut app,
            Action::RosterLoaded {
                token,
                result: Ok(vec![player("Isco")]),
            },
        );
        assert!(app.flow.has_roster_open);

        let token = teams_token(update(&mut app, Action::RefreshRequested));
        assert!(!app.flow.has_roster_open);
        assert!(app.selection.active_team_context.is_none());

        update(
            &mut app,
            Action::TeamsLoaded {
                token,
                country: "Spain".to_string(),
                result: Ok(spain()),
            },
        );
        assert_eq!(app.selection.filter_text, "");
        assert_eq!(app.selection.filtered_len(), 2);
        assert!(app.selection.active_roster.is_empty());
    }

    #[test]
    fn test_stale_teams_response_is_discarded() {
        let mut app = test_app();
        update(&mut app, Action::CountrySelected("Spain".to_string()));
        let first = teams_token(update(&mut app, Action::LoadTeamsRequested));
        update(&mut app, Action::CountrySelected("Italy".to_string()));
        let second = teams_token(update(&mut app, Action::LoadTeamsRequested));

        update(
            &mut app,
            Action::TeamsLoaded {
                token: second,
                country: "Italy".to_string(),
                result: Ok(vec![team("133676", "Juventus", Some("Italian Serie A"), None)]),
            },
        );
        // Spain resolves last, but it was superseded.
        update(
            &mut app,
            Action::TeamsLoaded {
                token: first,
                country: "Spain".to_string(),
                result: Ok(spain()),
            },
        );

        assert_eq!(app.selection.loaded_country.as_deref(), Some("Italy"));
        assert_eq!(app.selection.all_teams.len(), 1);
        assert_eq!(app.selection.all_teams[0].name, "Juventus");
    }

    #[test]
    fn test_loading_flag_held_until_latest_resolves() {
        let mut app = loaded_spain();
        let first = teams_token(update(&mut app, Action::RefreshRequested));
        let _second = teams_token(update(&mut app, Action::RefreshRequested));
        update(
            &mut app,
            Action::TeamsLoaded {
                token: first,
                country: "Spain".to_string(),
                result: Ok(Vec::new()),
            },
        );
        assert!(app.loading.teams);
        assert_eq!(app.selection.all_teams.len(), 2);
    }

    #[test]
    fn test_empty_roster_is_not_an_error() {
        let mut app = loaded_spain();
        let token = roster_token(activate(&mut app, "134301", "Real Betis"));
        assert!(app.roster_visible());

        update(
            &mut app,
            Action::RosterLoaded {
                token,
                result: Ok(Vec::new()),
            },
        );

        assert!(app.selection.active_roster.is_empty());
        assert!(app.flow.has_roster_open);
        assert!(!app.loading.roster);
        assert!(!app.notifications.has_errors());
        let context = app.selection.active_team_context.as_ref().unwrap();
        assert_eq!(context.name, "Real Betis");
        assert_eq!(context.country.as_deref(), Some("Spain"));
    }

    #[test]
    fn test_roster_failure_clears_and_notifies() {
        let mut app = loaded_spain();
        let token = roster_token(activate(&mut app, "133722", "Real Betis"));
        update(
            &mut app,
            Action::RosterLoaded {
                token,
                result: Err(FetchError::Network {
                    endpoint: Endpoint::Players,
                    message: "connection refused".to_string(),
                }),
            },
        );
        assert!(app.selection.active_team_context.is_none());
        assert!(app.selection.active_roster.is_empty());
        assert!(!app.flow.has_roster_open);
        assert!(app.notifications.has_errors());
        let last = app.notifications.iter().last().unwrap();
        assert_eq!(last.severity, Severity::Error);
        assert!(last.message.contains("players request failed"));
    }

    #[test]
    fn test_blank_team_id_is_noop() {
        let mut app = loaded_spain();
        assert_eq!(activate(&mut app, "  ", "Ghost FC"), Effect::None);
        assert!(!app.loading.roster);
        assert!(app.pending_roster.is_none());
    }

    #[test]
    fn test_close_discards_in_flight_roster() {
        let mut app = loaded_spain();
        let token = roster_token(activate(&mut app, "133722", "Real Betis"));
        update(&mut app, Action::RosterClosed);
        assert!(!app.roster_visible());

        update(
            &mut app,
            Action::RosterLoaded {
                token,
                result: Ok(vec![player("Isco")]),
            },
        );
        assert!(app.selection.active_team_context.is_none());
        assert!(!app.flow.has_roster_open);
    }

    #[test]
    fn test_roster_from_replaced_list_is_discarded() {
        let mut app = loaded_spain();
        update(&mut app, Action::CountrySelected("Italy".to_string()));
        let teams = teams_token(update(&mut app, Action::LoadTeamsRequested));
        // Spain's cards are still on screen while Italy loads
        let roster = roster_token(activate(&mut app, "133739", "Sevilla FC"));

        update(
            &mut app,
            Action::TeamsLoaded {
                token: teams,
                country: "Italy".to_string(),
                result: Ok(vec![team("133676", "Juventus", Some("Italian Serie A"), None)]),
            },
        );
        assert!(!app.loading.roster);
        assert!(app.pending_roster.is_none());
        assert!(!app.roster_visible());

        update(
            &mut app,
            Action::RosterLoaded {
                token: roster,
                result: Ok(vec![player("Jesus Navas")]),
            },
        );
        assert_eq!(app.selection.loaded_country.as_deref(), Some("Italy"));
        assert!(app.selection.active_team_context.is_none());
        assert!(app.selection.active_roster.is_empty());
        assert!(!app.flow.has_roster_open);
    }

    #[test]
    fn test_failed_reload_also_discards_pending_roster() {
        let mut app = loaded_spain();
        let teams = teams_token(update(&mut app, Action::RefreshRequested));
        let roster = roster_token(activate(&mut app, "133722", "Real Betis"));
        update(
            &mut app,
            Action::TeamsLoaded {
                token: teams,
                country: "Spain".to_string(),
                result: Err(FetchError::Status {
                    endpoint: Endpoint::Teams,
                    status: 500,
                }),
            },
        );
        assert!(!app.loading.roster);
        assert!(!app.tokens.is_current(RequestKind::Roster, roster));
    }

    #[test]
    fn test_close_roster_is_idempotent() {
        let mut app = loaded_spain();
        let token = roster_token(activate(&mut app, "133722", "Real Betis"));
        update(
            &mut app,
            Action::RosterLoaded {
                token,
                result: Ok(vec![player("Isco"), player("Fekir")]),
            },
        );

        update(&mut app, Action::RosterClosed);
        let once = (app.selection.clone(), app.flow, app.loading);
        update(&mut app, Action::RosterClosed);
        // Tokens advance on every close; the visible state does not.
        assert_eq!((app.selection.clone(), app.flow, app.loading), once);
    }

    #[test]
    fn test_refresh_disabled_until_loaded() {
        let mut app = test_app();
        update(&mut app, Action::CountrySelected("Spain".to_string()));
        assert_eq!(update(&mut app, Action::RefreshRequested), Effect::None);
    }

    #[test]
    fn test_refresh_reloads_displayed_country() {
        let mut app = loaded_spain();
        update(&mut app, Action::CountrySelected("Italy".to_string()));
        let effect = update(&mut app, Action::RefreshRequested);
        assert!(matches!(effect, Effect::FetchTeams { ref country, .. } if country == "Spain"));
    }

    #[test]
    fn test_display_mode_change() {
        let mut app = test_app();
        update(&mut app, Action::DisplayModeChanged(DisplayMode::List));
        assert_eq!(app.selection.display_mode, DisplayMode::Grid);

        let mut app = loaded_spain();
        update(&mut app, Action::DisplayModeChanged(DisplayMode::List));
        assert_eq!(app.selection.display_mode, DisplayMode::List);
    }

    #[test]
    fn test_tick_expires_notifications() {
        let mut app = loaded_spain();
        assert!(!app.notifications.is_empty());
        let later = Instant::now() + app.toast_ttl + std::time::Duration::from_secs(1);
        update(&mut app, Action::Tick(later));
        assert!(app.notifications.is_empty());
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
