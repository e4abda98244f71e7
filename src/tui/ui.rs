use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{
    CountryPicker, EmptyReason, KeyHints, RosterContent, RosterView, TeamBrowser, TitleBar,
    ToastStack,
};
use crate::tui::view_model::{RosterHeaderView, player_rows, team_cards};
use crate::tui::{Focus, TuiState};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

const COUNTRY_PANE_WIDTH: u16 = 26;

/// Draw one frame. Reads `App`, writes only presentation state in `TuiState`.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let [title_area, body_area, hints_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame.area());
    let [country_area, right_area] =
        Layout::horizontal([Length(COUNTRY_PANE_WIDTH), Min(0)]).areas(body_area);
    let [search_area, teams_area] = Layout::vertical([Length(3), Min(0)]).areas(right_area);

    TitleBar::new(
        app.selection.loaded_country.clone(),
        app.status_message.clone(),
        app.loading.any(),
        spinner_frame,
    )
    .render(frame, title_area);

    CountryPicker::new(
        &mut tui.country_picker,
        &app.countries,
        app.selected_country.as_deref(),
        tui.focus == Focus::Countries,
        app.loading.countries,
    )
    .render(frame, country_area);

    tui.search.focused = tui.focus == Focus::Search;
    tui.search.enabled = app.flow.can_search();
    tui.search.render(frame, search_area);

    let cards = team_cards(&app.selection.filtered_teams());
    TeamBrowser::new(
        &mut tui.team_browser,
        &cards,
        app.selection.all_teams.len(),
        app.selection.display_mode,
        tui.focus == Focus::Teams,
        empty_reason(app),
    )
    .render(frame, teams_area);

    KeyHints::new(
        app.flow,
        tui.focus,
        app.roster_visible(),
        app.selection.filtered_len() > 0,
    )
    .render(frame, hints_area);

    if let Some(context) = &app.selection.active_team_context {
        let header = RosterHeaderView::new(context, app.selection.active_roster.len());
        let rows = player_rows(&app.selection.active_roster, tui.today);
        RosterView::new(
            &mut tui.roster_view,
            RosterContent::Open {
                header: &header,
                rows: &rows,
            },
        )
        .render(frame, body_area);
    } else if app.loading.roster
        && let Some(pending) = &app.pending_roster
    {
        RosterView::new(
            &mut tui.roster_view,
            RosterContent::Loading {
                team_name: &pending.name,
            },
        )
        .render(frame, body_area);
    }

    ToastStack::new(app.notifications.iter()).render(frame, body_area);
}

fn empty_reason(app: &App) -> EmptyReason {
    if app.loading.teams {
        EmptyReason::Loading
    } else if !app.flow.has_teams_loaded {
        EmptyReason::NotLoaded
    } else if app.selection.all_teams.is_empty() {
        EmptyReason::NoTeams
    } else {
        EmptyReason::NoMatches
    }
}
