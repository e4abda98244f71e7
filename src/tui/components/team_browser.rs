//! # TeamBrowser Component
//!
//! The team pane. Renders the filtered team view in one of two mutually
//! exclusive layouts, chosen only by `DisplayMode`:
//!
//! - **Grid**: bordered cards, as many columns as fit `CARD_MIN_WIDTH`.
//! - **List**: one row per team with aligned league and stadium columns.
//!
//! ## Architecture
//!
//! `TeamBrowser` is a transient component (created each frame) that wraps
//! `&'a mut TeamBrowserState` (persistent state) and the card view models
//! (props). The render pass records the column count and visible row count
//! so the next key press can move the selection by whole grid rows.
//!
//! Rendering is a function of (props, selected index, scroll row). Drawing
//! the same state twice produces the same buffer.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::selection::DisplayMode;
use crate::tui::event::TuiEvent;
use crate::tui::view_model::{TeamCardView, team_counter};

use super::text::{pad_to, truncate_str};

pub const CARD_MIN_WIDTH: u16 = 28;
pub const CARD_HEIGHT: u16 = 5;

/// Persistent selection and scroll state for the team pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamBrowserState {
    pub selected: usize,
    /// First visible row (grid rows or list lines)
    pub scroll_row: usize,
    /// Columns used by the last render (1 in list mode)
    pub columns: usize,
    /// Rows that fit in the last render
    pub visible_rows: usize,
}

impl Default for TeamBrowserState {
    fn default() -> Self {
        Self::new()
    }
}

/// Events emitted by the team browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamBrowserEvent {
    /// Open the team at this index of the filtered view
    Activated(usize),
}

impl TeamBrowserState {
    pub fn new() -> Self {
        Self {
            selected: 0,
            scroll_row: 0,
            columns: 1,
            visible_rows: 1,
        }
    }

    /// Back to the first card (after a reload or filter change).
    pub fn reset(&mut self) {
        self.selected = 0;
        self.scroll_row = 0;
    }

    /// Handle a key event against a filtered view of `len` teams.
    pub fn handle_event(&mut self, event: &TuiEvent, len: usize) -> Option<TeamBrowserEvent> {
        if len == 0 {
            return None;
        }
        let last = len - 1;
        let columns = self.columns.max(1);
        let page = columns * self.visible_rows.max(1);
        match event {
            TuiEvent::CursorLeft => self.selected = self.selected.saturating_sub(1),
            TuiEvent::CursorRight => self.selected = (self.selected + 1).min(last),
            TuiEvent::CursorUp => {
                if self.selected >= columns {
                    self.selected -= columns;
                }
            }
            TuiEvent::CursorDown => {
                if self.selected + columns <= last {
                    self.selected += columns;
                }
            }
            TuiEvent::PageUp => self.selected = self.selected.saturating_sub(page),
            TuiEvent::PageDown => self.selected = (self.selected + page).min(last),
            TuiEvent::Home => self.selected = 0,
            TuiEvent::End => self.selected = last,
            TuiEvent::Submit => return Some(TeamBrowserEvent::Activated(self.selected.min(last))),
            _ => {}
        }
        None
    }

    /// Clamp selection to `len` and scroll so the selected row is visible.
    fn settle(&mut self, len: usize, columns: usize, visible_rows: usize) {
        self.columns = columns.max(1);
        self.visible_rows = visible_rows.max(1);
        self.selected = self.selected.min(len.saturating_sub(1));

        let row = self.selected / self.columns;
        if row < self.scroll_row {
            self.scroll_row = row;
        } else if row >= self.scroll_row + self.visible_rows {
            self.scroll_row = row + 1 - self.visible_rows;
        }
        let total_rows = len.div_ceil(self.columns);
        let max_scroll = total_rows.saturating_sub(self.visible_rows);
        self.scroll_row = self.scroll_row.min(max_scroll);
    }
}

/// Why the pane has no cards to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    NotLoaded,
    Loading,
    NoTeams,
    NoMatches,
}

/// Transient render wrapper for the team pane.
pub struct TeamBrowser<'a> {
    state: &'a mut TeamBrowserState,
    cards: &'a [TeamCardView],
    total: usize,
    mode: DisplayMode,
    focused: bool,
    empty_reason: EmptyReason,
}

impl<'a> TeamBrowser<'a> {
    pub fn new(
        state: &'a mut TeamBrowserState,
        cards: &'a [TeamCardView],
        total: usize,
        mode: DisplayMode,
        focused: bool,
        empty_reason: EmptyReason,
    ) -> Self {
        Self {
            state,
            cards,
            total,
            mode,
            focused,
            empty_reason,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_color = if self.focused {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        let title = format!(
            " Clubs ({}) · {} ",
            team_counter(self.cards.len(), self.total),
            self.mode.label()
        );
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(title);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.cards.is_empty() {
            self.render_empty(frame, inner);
            return;
        }

        match self.mode {
            DisplayMode::Grid => self.render_grid(frame, inner),
            DisplayMode::List => self.render_list(frame, inner),
        }
    }

    fn render_empty(&self, frame: &mut Frame, area: Rect) {
        let message = match self.empty_reason {
            EmptyReason::NotLoaded => "Select a country and press l to load its clubs.",
            EmptyReason::Loading => "Loading clubs...",
            EmptyReason::NoTeams => "No clubs found for this country.",
            EmptyReason::NoMatches => "No clubs match your search.",
        };
        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }

    fn render_grid(&mut self, frame: &mut Frame, area: Rect) {
        let columns = (area.width / CARD_MIN_WIDTH).max(1) as usize;
        let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
        self.state.settle(self.cards.len(), columns, visible_rows);

        let card_width = area.width / columns as u16;
        let first = self.state.scroll_row * columns;
        let last = (first + columns * visible_rows).min(self.cards.len());

        for (offset, card) in self.cards[first..last].iter().enumerate() {
            let index = first + offset;
            let row = (offset / columns) as u16;
            let col = (offset % columns) as u16;
            let rect = Rect {
                x: area.x + col * card_width,
                y: area.y + row * CARD_HEIGHT,
                width: card_width,
                height: CARD_HEIGHT.min(area.height.saturating_sub(row * CARD_HEIGHT)),
            };
            let is_selected = index == self.state.selected && self.focused;
            render_card(frame, rect, card, is_selected);
        }
    }

    fn render_list(&mut self, frame: &mut Frame, area: Rect) {
        if area.height < 2 {
            return;
        }
        // First line is the column header
        let visible_rows = area.height.saturating_sub(1) as usize;
        self.state.settle(self.cards.len(), 1, visible_rows);

        let width = area.width as usize;
        let name_w = (width * 2 / 5).max(8);
        let league_w = (width * 3 / 10).max(6);
        let stadium_w = width.saturating_sub(name_w + league_w + 2);

        let header_style = Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::BOLD);
        let mut lines = vec![Line::from(vec![
            Span::styled(pad_to("Club", name_w), header_style),
            Span::raw(" "),
            Span::styled(pad_to("League", league_w), header_style),
            Span::raw(" "),
            Span::styled(pad_to("Stadium", stadium_w), header_style),
        ])];

        let first = self.state.scroll_row;
        let last = (first + visible_rows).min(self.cards.len());
        for (index, card) in self.cards.iter().enumerate().take(last).skip(first) {
            let style = if index == self.state.selected && self.focused {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(Color::Gray)
            };
            lines.push(Line::from(vec![
                Span::styled(pad_to(&card.name, name_w), style.add_modifier(Modifier::BOLD)),
                Span::styled(" ", style),
                Span::styled(pad_to(&card.league, league_w), style),
                Span::styled(" ", style),
                Span::styled(pad_to(&card.stadium, stadium_w), style),
            ]));
        }

        frame.render_widget(Paragraph::new(lines), area);
    }
}

fn render_card(frame: &mut Frame, rect: Rect, card: &TeamCardView, is_selected: bool) {
    let (border_style, title_style) = if is_selected {
        (
            Style::default().fg(Color::Yellow),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        )
    } else {
        (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )
    };
    let inner_width = rect.width.saturating_sub(2) as usize;
    let block = Block::bordered()
        .border_style(border_style)
        .title(Span::styled(
            format!(" {} ", truncate_str(&card.name, inner_width.saturating_sub(2))),
            title_style,
        ));

    let lines = vec![
        Line::from(Span::styled(
            truncate_str(&card.league, inner_width),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(Span::styled(
            truncate_str(&card.stadium, inner_width),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            truncate_str(&card.founded, inner_width),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), rect);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::team;
    use crate::tui::components::text::buffer_text;
    use crate::tui::view_model::team_cards;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;

    fn cards(n: usize) -> Vec<TeamCardView> {
        let teams: Vec<_> = (0..n)
            .map(|i| team(&format!("{}", 1000 + i), &format!("Club {i:02}"), Some("Liga"), Some("Town")))
            .collect();
        let refs: Vec<_> = teams.iter().collect();
        team_cards(&refs)
    }

    fn draw(
        state: &mut TeamBrowserState,
        cards: &[TeamCardView],
        mode: DisplayMode,
        width: u16,
        height: u16,
    ) -> Buffer {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                TeamBrowser::new(state, cards, cards.len(), mode, true, EmptyReason::NoTeams)
                    .render(f, f.area());
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    #[test]
    fn test_grid_columns_follow_width() {
        let cards = cards(6);
        let mut state = TeamBrowserState::new();
        // 88 wide - 2 border = 86 inner → 3 columns of 28
        draw(&mut state, &cards, DisplayMode::Grid, 88, 20);
        assert_eq!(state.columns, 3);
        assert_eq!(state.visible_rows, 3);
    }

    #[test]
    fn test_list_mode_uses_one_column() {
        let cards = cards(6);
        let mut state = TeamBrowserState::new();
        let buffer = draw(&mut state, &cards, DisplayMode::List, 88, 20);
        assert_eq!(state.columns, 1);
        let text = buffer_text(&buffer);
        assert!(text.contains("League"));
        assert!(text.contains("Club 05"));
    }

    #[test]
    fn test_grid_and_list_render_differently() {
        let cards = cards(3);
        let grid = draw(&mut TeamBrowserState::new(), &cards, DisplayMode::Grid, 88, 20);
        let list = draw(&mut TeamBrowserState::new(), &cards, DisplayMode::List, 88, 20);
        assert_ne!(grid, list);
        assert!(buffer_text(&grid).contains("grid"));
        assert!(buffer_text(&list).contains("list"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let cards = cards(12);
        let mut state = TeamBrowserState::new();
        state.selected = 7;
        let first = draw(&mut state, &cards, DisplayMode::Grid, 88, 12);
        let after_first = state.clone();
        let second = draw(&mut state, &cards, DisplayMode::Grid, 88, 12);
        assert_eq!(first, second);
        assert_eq!(state, after_first);
    }

    #[test]
    fn test_grid_navigation_moves_by_row() {
        let mut state = TeamBrowserState::new();
        state.columns = 3;
        state.visible_rows = 2;
        state.handle_event(&TuiEvent::CursorDown, 7);
        assert_eq!(state.selected, 3);
        state.handle_event(&TuiEvent::CursorDown, 7);
        assert_eq!(state.selected, 6);
        // No full row below
        state.handle_event(&TuiEvent::CursorDown, 7);
        assert_eq!(state.selected, 6);
        state.handle_event(&TuiEvent::CursorUp, 7);
        assert_eq!(state.selected, 3);
        state.handle_event(&TuiEvent::CursorLeft, 7);
        assert_eq!(state.selected, 2);
        state.handle_event(&TuiEvent::End, 7);
        assert_eq!(state.selected, 6);
    }

    #[test]
    fn test_enter_activates_selected() {
        let mut state = TeamBrowserState::new();
        state.selected = 2;
        assert_eq!(
            state.handle_event(&TuiEvent::Submit, 5),
            Some(TeamBrowserEvent::Activated(2))
        );
        assert_eq!(state.handle_event(&TuiEvent::Submit, 0), None);
    }

    #[test]
    fn test_scroll_follows_selection() {
        let cards = cards(30);
        let mut state = TeamBrowserState::new();
        state.selected = 29;
        let buffer = draw(&mut state, &cards, DisplayMode::List, 60, 12);
        // 10 inner rows, 1 header → 9 visible
        assert_eq!(state.scroll_row, 21);
        assert!(buffer_text(&buffer).contains("Club 29"));
        assert!(!buffer_text(&buffer).contains("Club 00"));
    }

    #[test]
    fn test_selection_clamped_when_view_shrinks() {
        let cards = cards(2);
        let mut state = TeamBrowserState::new();
        state.selected = 9;
        draw(&mut state, &cards, DisplayMode::Grid, 60, 12);
        assert_eq!(state.selected, 1);
    }

    #[test]
    fn test_empty_reasons() {
        let backend = TestBackend::new(70, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = TeamBrowserState::new();
        for (reason, expected) in [
            (EmptyReason::NotLoaded, "press l to load"),
            (EmptyReason::Loading, "Loading clubs..."),
            (EmptyReason::NoTeams, "No clubs found"),
            (EmptyReason::NoMatches, "No clubs match"),
        ] {
            terminal
                .draw(|f| {
                    TeamBrowser::new(&mut state, &[], 0, DisplayMode::Grid, false, reason)
                        .render(f, f.area());
                })
                .unwrap();
            assert!(buffer_text(terminal.backend().buffer()).contains(expected));
        }
    }
}
