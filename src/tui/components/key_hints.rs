//! # KeyHints Component
//!
//! Bottom line listing the keys that currently do something. Hints follow
//! the flow flags, so a disabled affordance simply is not shown.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::state::FlowFlags;
use crate::tui::Focus;
use crate::tui::component::Component;

pub struct KeyHints {
    pub flow: FlowFlags,
    pub focus: Focus,
    pub roster_visible: bool,
    /// The filtered team view is non-empty, so the layout can switch
    pub has_visible_teams: bool,
}

impl KeyHints {
    pub fn new(
        flow: FlowFlags,
        focus: Focus,
        roster_visible: bool,
        has_visible_teams: bool,
    ) -> Self {
        Self {
            flow,
            focus,
            roster_visible,
            has_visible_teams,
        }
    }

    /// (key, label) pairs for the current state.
    pub fn hints(&self) -> Vec<(&'static str, &'static str)> {
        if self.roster_visible {
            return vec![("↑↓", "Scroll"), ("Esc", "Close squad")];
        }
        if self.focus == Focus::Search {
            return vec![("Type", "Filter"), ("Enter/Esc", "Done")];
        }

        let mut hints = vec![("Tab", "Focus")];
        match self.focus {
            Focus::Countries => hints.push(("Enter", "Select country")),
            Focus::Teams => hints.push(("Enter", "Open squad")),
            Focus::Search => {}
        }
        if self.flow.can_load() {
            hints.push(("l", "Load clubs"));
        }
        if self.flow.can_refresh() {
            hints.push(("r", "Refresh"));
        }
        if self.has_visible_teams {
            hints.push(("g", "Grid/List"));
        }
        if self.flow.can_search() {
            hints.push(("/", "Search"));
        }
        hints.push(("q", "Quit"));
        hints
    }
}

impl Component for KeyHints {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let key_style = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        let label_style = Style::default().fg(Color::DarkGray);

        let mut spans = Vec::new();
        for (i, (key, label)) in self.hints().into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(key, key_style));
            spans.push(Span::styled(format!(" {label}"), label_style));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
