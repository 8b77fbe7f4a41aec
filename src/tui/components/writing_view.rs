//! # Writing Assistant View
//!
//! Language field, input area, live suggestions panel and the Rewrite
//! button. The rewrite result opens as a dialog on top.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::core::writing::WritingState;
use crate::tui::component::Component;
use crate::tui::components::field::{Button, LanguageField};
use crate::tui::components::result_dialog::ResultDialog;
use crate::tui::components::text_area::TextArea;
use crate::tui::focus::Focus;

pub struct WritingView<'a> {
    pub state: &'a WritingState,
    pub input: &'a mut TextArea,
    pub focus: Focus,
}

impl WritingView<'_> {
    fn suggestion_text(&self) -> (&str, Style) {
        let muted = Style::default().fg(Color::DarkGray);
        if self.state.is_loading() {
            ("Loading suggestions...", muted)
        } else if !self.state.suggestion.is_empty() {
            (self.state.suggestion.as_str(), Style::default())
        } else {
            ("Suggestions will appear here as you type.", muted)
        }
    }
}

impl Component for WritingView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [heading, language, input, suggestions, error, button] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(5),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        frame.render_widget(
            Line::styled(
                "Real-time Writing Assistant",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            heading,
        );

        LanguageField {
            label: "Select Language",
            language: self.state.selected_language,
            focused: self.focus == Focus::Language,
        }
        .render(frame, language);

        self.input.focused = self.focus == Focus::Input;
        self.input.render(frame, input);

        let (text, style) = self.suggestion_text();
        let panel = Paragraph::new(text)
            .style(style)
            .wrap(Wrap { trim: true })
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title("Suggestions"),
            );
        frame.render_widget(panel, suggestions);

        if let Some(message) = self.state.error() {
            frame.render_widget(
                Line::styled(message, Style::default().fg(Color::Red)),
                error,
            );
        }

        Button {
            label: "Rewrite",
            enabled: self.state.can_rewrite(),
            focused: self.focus == Focus::Rewrite,
        }
        .render(frame, button);

        if self.state.is_result_visible {
            ResultDialog {
                original: &self.state.input,
                rewrite: &self.state.rewrite,
            }
            .render(frame, area);
        }
    }
}
