//! # Toast Stack
//!
//! Transient notifications stacked in the bottom-right corner, newest at
//! the bottom. Errors get a red border, info a green one. Long messages are
//! wrapped to the toast width.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Clear, Padding, Paragraph};

use crate::core::notify::{Notification, Severity};
use crate::tui::component::Component;

const TOAST_WIDTH: u16 = 44;

pub struct ToastStack<'a> {
    pub notifications: Vec<&'a Notification>,
}

impl<'a> ToastStack<'a> {
    pub fn new(notifications: impl Iterator<Item = &'a Notification>) -> Self {
        Self {
            notifications: notifications.collect(),
        }
    }
}

fn wrap_message(message: &str, width: usize) -> Vec<Line<'static>> {
    textwrap::wrap(message, width.max(1))
        .into_iter()
        .map(|line| Line::from(line.into_owned()))
        .collect()
}

impl Component for ToastStack<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = TOAST_WIDTH.min(area.width);
        if width < 6 {
            return;
        }
        let text_width = width.saturating_sub(4) as usize;
        let x = area.x + area.width - width;
        let mut bottom = area.y + area.height;

        // Newest first so it sits closest to the bottom edge
        for toast in self.notifications.iter().rev() {
            let lines = wrap_message(&toast.message, text_width);
            let height = lines.len() as u16 + 2;
            if bottom < area.y + height {
                break;
            }
            bottom -= height;
            let rect = Rect {
                x,
                y: bottom,
                width,
                height,
            };

            let (color, title) = match toast.severity {
                Severity::Error => (Color::Red, " Error "),
                Severity::Info => (Color::Green, " Info "),
            };
            let block = Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color))
                .padding(Padding::horizontal(1))
                .title(title);
            frame.render_widget(Clear, rect);
            frame.render_widget(Paragraph::new(lines).block(block), rect);
        }
    }
}
