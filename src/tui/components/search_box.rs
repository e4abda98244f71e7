//! # SearchBox Component
//!
//! Single-line filter input above the team pane.
//!
//! The buffer mirrors `SelectionState::filter_text`: the event loop calls
//! `sync()` before routing events so a team reload (which resets the filter)
//! also clears what is shown here. Every edit emits the full new text.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the SearchBox
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// Text changed; carries the whole buffer
    Changed(String),
    /// User is done editing (Enter, Esc, Tab)
    Done,
}

pub struct SearchBox {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Whether the box has keyboard focus (Prop)
    pub focused: bool,
    /// Whether searching is currently possible (Prop)
    pub enabled: bool,
}

impl Default for SearchBox {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            focused: false,
            enabled: false,
        }
    }

    pub fn sync(&mut self, filter_text: &str) {
        if self.buffer != filter_text {
            self.buffer = filter_text.to_string();
        }
    }
}

impl EventHandler for SearchBox {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<SearchEvent> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.push(*c);
                Some(SearchEvent::Changed(self.buffer.clone()))
            }
            TuiEvent::Paste(text) => {
                // Newlines would never match a single-line field
                let line: String = text.chars().filter(|c| !c.is_control()).collect();
                self.buffer.push_str(&line);
                Some(SearchEvent::Changed(self.buffer.clone()))
            }
            TuiEvent::Backspace => {
                self.buffer.pop()?;
                Some(SearchEvent::Changed(self.buffer.clone()))
            }
            TuiEvent::Submit | TuiEvent::Escape | TuiEvent::FocusNext | TuiEvent::FocusPrev => {
                Some(SearchEvent::Done)
            }
            _ => None,
        }
    }
}

impl Component for SearchBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_color = if self.focused {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        let block = Block::bordered()
            .title(" Search ")
            .border_style(Style::default().fg(border_color));

        let paragraph = if self.buffer.is_empty() && !self.focused {
            let hint = if self.enabled {
                "Press / to filter by name, league or stadium"
            } else {
                "Load a country's clubs to search"
            };
            Paragraph::new(hint).style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(self.buffer.as_str())
        };
        frame.render_widget(paragraph.block(block), area);

        if self.focused {
            let inner_width = area.width.saturating_sub(2);
            let x = (self.buffer.width() as u16).min(inner_width.saturating_sub(1));
            frame.set_cursor_position(Position {
                x: area.x + 1 + x,
                y: area.y + 1,
            });
        }
    }
}
