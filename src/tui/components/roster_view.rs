//! # Roster View
//!
//! Centered overlay with the squad of the team that was activated. While the
//! roster request is in flight it shows a loading line for the pending team;
//! once the roster is open it lists one row per player.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, Paragraph};

use crate::tui::event::TuiEvent;
use crate::tui::view_model::{PlayerRowView, RosterHeaderView};

use super::text::{centered_rect, pad_to, truncate_str};

/// Lines per player row (name line + details line)
const ROW_HEIGHT: usize = 2;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RosterViewState {
    /// First visible player
    pub scroll: usize,
}

impl RosterViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_event(&mut self, event: &TuiEvent, player_count: usize) {
        let last = player_count.saturating_sub(1);
        match event {
            TuiEvent::CursorUp => self.scroll = self.scroll.saturating_sub(1),
            TuiEvent::CursorDown => self.scroll = (self.scroll + 1).min(last),
            TuiEvent::PageUp => self.scroll = self.scroll.saturating_sub(10),
            TuiEvent::PageDown => self.scroll = (self.scroll + 10).min(last),
            TuiEvent::Home => self.scroll = 0,
            TuiEvent::End => self.scroll = last,
            _ => {}
        }
    }
}

/// What the overlay is showing.
pub enum RosterContent<'a> {
    /// Roster request in flight for the named team
    Loading { team_name: &'a str },
    Open {
        header: &'a RosterHeaderView,
        rows: &'a [PlayerRowView],
    },
}

pub struct RosterView<'a> {
    state: &'a mut RosterViewState,
    content: RosterContent<'a>,
}

impl<'a> RosterView<'a> {
    pub fn new(state: &'a mut RosterViewState, content: RosterContent<'a>) -> Self {
        Self { state, content }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let popup = centered_rect(70, 80, area);
        frame.render_widget(Clear, popup);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Yellow));

        match &self.content {
            RosterContent::Loading { team_name } => {
                let block = block.title(format!(" {team_name} "));
                let inner = block.inner(popup);
                frame.render_widget(block, popup);
                let loading = Paragraph::new(format!("Loading squad for {team_name}..."))
                    .style(Style::default().fg(Color::DarkGray))
                    .alignment(Alignment::Center);
                frame.render_widget(loading, inner);
            }
            RosterContent::Open { header, rows } => {
                let block = block
                    .title(Span::styled(
                        format!(" {} ", header.title),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ))
                    .title_bottom(Line::from(" Esc close ").right_aligned());
                let inner = block.inner(popup);
                frame.render_widget(block, popup);

                let [header_area, list_area] =
                    Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(inner);
                render_header(frame, header_area, header);
                render_rows(frame, list_area, rows, self.state);
            }
        }
    }
}

fn render_header(frame: &mut Frame, area: Rect, header: &RosterHeaderView) {
    let width = area.width as usize;
    let mut lines = Vec::new();
    if !header.subtitle.is_empty() {
        lines.push(Line::from(Span::styled(
            truncate_str(&header.subtitle, width),
            Style::default().fg(Color::Cyan),
        )));
    }
    if !header.badge_url.is_empty() {
        lines.push(Line::from(Span::styled(
            truncate_str(&header.badge_url, width),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.push(Line::from(Span::styled(
        header.count_label.clone(),
        Style::default().fg(Color::Gray),
    )));
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_rows(
    frame: &mut Frame,
    area: Rect,
    rows: &[PlayerRowView],
    state: &mut RosterViewState,
) {
    if rows.is_empty() {
        let empty = Paragraph::new("No players listed for this team.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    }

    let visible = (area.height as usize / ROW_HEIGHT).max(1);
    state.scroll = state
        .scroll
        .min(rows.len().saturating_sub(visible));

    let width = area.width as usize;
    let position_w = 14.min(width / 3);
    let name_w = width.saturating_sub(position_w + 1);

    let mut lines = Vec::new();
    for row in rows.iter().skip(state.scroll).take(visible) {
        lines.push(Line::from(vec![
            Span::styled(
                pad_to(&row.name, name_w),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(
                truncate_str(&row.position, position_w),
                Style::default().fg(Color::Green),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", truncate_str(&row.details, width.saturating_sub(2))),
            Style::default().fg(Color::DarkGray),
        )));
    }
    frame.render_widget(Paragraph::new(lines), area);
}
