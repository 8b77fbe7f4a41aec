//! Small stateless controls: a language select field and a button.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::language::Language;
use crate::tui::component::Component;

/// A labelled select showing the current language.
pub struct LanguageField<'a> {
    pub label: &'a str,
    pub language: Language,
    pub focused: bool,
}

impl Component for LanguageField<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border = if self.focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let line = Line::from(vec![
            Span::raw(self.language.label()),
            Span::styled("  ▾", Style::default().fg(Color::DarkGray)),
        ]);
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border)
            .title(self.label);
        frame.render_widget(Paragraph::new(line).block(block), area);
    }
}

/// A one-line button. Disabled buttons render dimmed and ignore Enter
/// (the parent checks `enabled` before dispatching).
pub struct Button<'a> {
    pub label: &'a str,
    pub enabled: bool,
    pub focused: bool,
}

impl Component for Button<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut style = if self.enabled {
            Style::default().fg(Color::Black).bg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        };
        if self.focused {
            style = style.add_modifier(Modifier::BOLD);
        }
        let text = if self.focused {
            format!("▶ {} ◀", self.label)
        } else {
            format!("  {}  ", self.label)
        };
        let paragraph = Paragraph::new(Span::styled(text, style)).alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }
}
