//! # Country Picker Component
//!
//! Left-hand pane listing every country. Enter selects the highlighted
//! country; loading its clubs is a separate intent.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `CountryPickerState` lives in `TuiState`
//! - `CountryPicker` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};

use crate::api::Country;
use crate::tui::event::TuiEvent;

use super::text::truncate_str;

const PAGE: usize = 10;

/// Persistent state for the country pane.
#[derive(Default)]
pub struct CountryPickerState {
    pub highlighted: usize,
    pub list_state: ListState,
}

/// Events emitted by the country picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountryPickerEvent {
    Selected(String),
}

impl CountryPickerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key event against the current country list.
    pub fn handle_event(
        &mut self,
        event: &TuiEvent,
        countries: &[Country],
    ) -> Option<CountryPickerEvent> {
        if countries.is_empty() {
            return None;
        }
        let last = countries.len() - 1;
        match event {
            TuiEvent::CursorUp => self.highlighted = self.highlighted.saturating_sub(1),
            TuiEvent::CursorDown => self.highlighted = (self.highlighted + 1).min(last),
            TuiEvent::PageUp => self.highlighted = self.highlighted.saturating_sub(PAGE),
            TuiEvent::PageDown => self.highlighted = (self.highlighted + PAGE).min(last),
            TuiEvent::Home => self.highlighted = 0,
            TuiEvent::End => self.highlighted = last,
            TuiEvent::Submit => {
                return countries
                    .get(self.highlighted)
                    .map(|c| CountryPickerEvent::Selected(c.display_name.clone()));
            }
            // Jump to the first country starting with the typed letter
            TuiEvent::InputChar(c) if c.is_alphabetic() => {
                let wanted = c.to_lowercase().next().unwrap_or(*c);
                if let Some(idx) = countries.iter().position(|country| {
                    country
                        .display_name
                        .chars()
                        .next()
                        .and_then(|first| first.to_lowercase().next())
                        == Some(wanted)
                }) {
                    self.highlighted = idx;
                }
            }
            _ => return None,
        }
        self.list_state.select(Some(self.highlighted));
        None
    }
}

/// Transient render wrapper for the country pane.
pub struct CountryPicker<'a> {
    state: &'a mut CountryPickerState,
    countries: &'a [Country],
    selected: Option<&'a str>,
    focused: bool,
    loading: bool,
}

impl<'a> CountryPicker<'a> {
    pub fn new(
        state: &'a mut CountryPickerState,
        countries: &'a [Country],
        selected: Option<&'a str>,
        focused: bool,
        loading: bool,
    ) -> Self {
        Self {
            state,
            countries,
            selected,
            focused,
            loading,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_color = if self.focused {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(format!(" Countries ({}) ", self.countries.len()))
            .padding(Padding::horizontal(1));

        if self.countries.is_empty() {
            let message = if self.loading {
                "Loading countries..."
            } else {
                "No countries available."
            };
            let empty = Paragraph::new(message)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        self.state.highlighted = self.state.highlighted.min(self.countries.len() - 1);
        self.state.list_state.select(Some(self.state.highlighted));

        let inner_width = area.width.saturating_sub(4) as usize; // borders + padding
        let items: Vec<ListItem> = self
            .countries
            .iter()
            .enumerate()
            .map(|(i, country)| {
                let is_chosen = self.selected == Some(country.display_name.as_str());
                let marker = if is_chosen { "● " } else { "  " };
                let name = truncate_str(&country.display_name, inner_width.saturating_sub(2));

                let style = if i == self.state.highlighted && self.focused {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else if is_chosen {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default().fg(Color::Gray)
                };

                ListItem::new(Line::from(vec![
                    Span::styled(marker, style),
                    Span::styled(name, style),
                ]))
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}
