//! # TitleBar Component
//!
//! Top status bar: app name, the country whose clubs are shown, the status
//! message, and a spinner while any request is in flight.
//!
//! TitleBar is purely presentational. It receives all data as props and has
//! no internal state.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct TitleBar {
    /// Country the team list belongs to
    pub country: Option<String>,
    /// Status message (e.g. "Loading clubs for Spain...")
    pub status_message: String,
    /// Whether any request is in flight
    pub loading: bool,
    /// Animation frame counter
    pub spinner_frame: usize,
}

impl TitleBar {
    pub fn new(
        country: Option<String>,
        status_message: String,
        loading: bool,
        spinner_frame: usize,
    ) -> Self {
        Self {
            country,
            status_message,
            loading,
            spinner_frame,
        }
    }

    fn spinner(&self) -> &'static str {
        SPINNER[self.spinner_frame % SPINNER.len()]
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            "Pitchside",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )];

        if let Some(country) = &self.country {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(country.clone(), Style::default().fg(Color::Cyan)));
        }

        if self.loading {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(self.spinner(), Style::default().fg(Color::Yellow)));
        }

        if !self.status_message.is_empty() {
            spans.push(Span::raw(" | "));
            spans.push(Span::raw(self.status_message.clone()));
        }

        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::components::text::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(mut title_bar: TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_title_bar_with_country_and_status() {
        let text = draw(TitleBar::new(
            Some("Spain".to_string()),
            "20 clubs in Spain".to_string(),
            false,
            0,
        ));
        assert!(text.contains("Pitchside"));
        assert!(text.contains("Spain"));
        assert!(text.contains("20 clubs in Spain"));
        assert!(!text.contains("⠋"));
    }

    #[test]
    fn test_title_bar_spinner_while_loading() {
        let text = draw(TitleBar::new(None, "Loading...".to_string(), true, 0));
        assert!(text.contains("⠋"));
        let text = draw(TitleBar::new(None, String::new(), true, 1));
        assert!(text.contains("⠙"));
    }

    #[test]
    fn test_title_bar_default_no_status() {
        let text = draw(TitleBar::new(None, String::new(), false, 0));
        assert!(text.contains("Pitchside"));
        assert!(!text.contains('|'));
    }
}
