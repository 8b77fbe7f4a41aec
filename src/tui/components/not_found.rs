//! # Not Found View
//!
//! Shown for any path other than `/`. Always offers the way back home.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Wrap};

use crate::tui::component::Component;
use crate::tui::components::field::Button;

pub struct NotFound<'a> {
    pub path: &'a str,
}

impl Component for NotFound<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [text_area, _, button_area] = Layout::vertical([
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(area);

        let lines = vec![
            Line::styled("404", Style::default().add_modifier(Modifier::BOLD)),
            Line::raw(""),
            Line::styled("Oops! Page not found", Style::default().fg(Color::Gray)),
            Line::raw(""),
            Line::styled(
                "The page you are looking for might have been removed, had its name \
                 changed, or is temporarily unavailable.",
                Style::default().fg(Color::DarkGray),
            ),
            Line::styled(format!("({})", self.path), Style::default().fg(Color::DarkGray)),
        ];
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            text_area,
        );

        Button {
            label: "Go back to Homepage",
            enabled: true,
            focused: true,
        }
        .render(frame, button_area);
    }
}
