//! # Translation View
//!
//! Source/target language fields, the original text area, the read-only
//! translation pane, the Translate button and the explanation panel.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::core::translation::TranslationState;
use crate::tui::component::Component;
use crate::tui::components::field::{Button, LanguageField};
use crate::tui::components::text_area::TextArea;
use crate::tui::focus::Focus;

const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

pub struct TranslationView<'a> {
    pub state: &'a TranslationState,
    pub original: &'a mut TextArea,
    pub focus: Focus,
    pub spinner_frame: usize,
}

impl Component for TranslationView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let explanation_height = if self.state.explanation.is_empty() { 0 } else { 5 };
        let [heading, languages, panes, button, error, explanation] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(explanation_height),
        ])
        .areas(area);

        frame.render_widget(
            Line::styled("Translation Tool", Style::default().add_modifier(Modifier::BOLD))
                .centered(),
            heading,
        );

        let [source_field, target_field] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(languages);
        LanguageField {
            label: "Source Language",
            language: self.state.source_language,
            focused: self.focus == Focus::SourceLanguage,
        }
        .render(frame, source_field);
        LanguageField {
            label: "Target Language",
            language: self.state.target_language,
            focused: self.focus == Focus::TargetLanguage,
        }
        .render(frame, target_field);

        let [original_pane, translated_pane] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(panes);

        self.original.title = format!("Original Text ({})", self.state.source_language.label());
        self.original.focused = self.focus == Focus::Original;
        self.original.render(frame, original_pane);

        let (translated, style) = if self.state.translated_text.is_empty() {
            (
                "Translation will appear here",
                Style::default().fg(Color::DarkGray),
            )
        } else {
            (self.state.translated_text.as_str(), Style::default())
        };
        let translated = Paragraph::new(translated)
            .style(style)
            .wrap(Wrap { trim: true })
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(format!(
                        "Translated Text ({})",
                        self.state.target_language.label()
                    )),
            );
        frame.render_widget(translated, translated_pane);

        let label = if self.state.is_loading() {
            format!(
                "{} Translating...",
                SPINNER[self.spinner_frame % SPINNER.len()]
            )
        } else {
            "Translate".to_string()
        };
        Button {
            label: &label,
            enabled: self.state.can_translate(),
            focused: self.focus == Focus::Translate,
        }
        .render(frame, button);

        if let Some(message) = &self.state.error {
            frame.render_widget(
                Line::styled(message.as_str(), Style::default().fg(Color::Red)).centered(),
                error,
            );
        }

        if !self.state.explanation.is_empty() {
            let panel = Paragraph::new(self.state.explanation.as_str())
                .wrap(Wrap { trim: true })
                .block(
                    Block::bordered()
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(Color::Blue))
                        .title("Explanation"),
                );
            frame.render_widget(panel, explanation);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::language::Language;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(state: &TranslationState) -> String {
        let backend = TestBackend::new(100, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut original = TextArea::new("Original Text", "Enter text to translate");
        original.sync(&state.original_text);

        terminal
            .draw(|f| {
                TranslationView {
                    state,
                    original: &mut original,
                    focus: Focus::Original,
                    spinner_frame: 0,
                }
                .render(f, f.area())
            })
            .unwrap();

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_empty_view() {
        let state = TranslationState::new(Language::English, Language::Spanish);
        let text = rendered(&state);
        assert!(text.contains("Translation Tool"));
        assert!(text.contains("Original Text (English)"));
        assert!(text.contains("Translated Text (Spanish)"));
        assert!(text.contains("Enter text to translate"));
        assert!(text.contains("Translation will appear here"));
        assert!(!text.contains("Explanation"));
    }

    #[test]
    fn test_explanation_panel_appears_when_populated() {
        let mut state = TranslationState::new(Language::English, Language::Japanese);
        state.original_text = "hello".to_string();
        state.translated_text = "This is the translated text.".to_string();
        state.explanation = "Here's an explanation.".to_string();
        let text = rendered(&state);
        assert!(text.contains("This is the translated text."));
        assert!(text.contains("Explanation"));
        assert!(text.contains("Here's an explanation."));
    }
}
