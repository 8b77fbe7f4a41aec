//! # Result Dialog
//!
//! Modal overlay showing the original input next to its rewrite. Open while
//! `WritingState::is_result_visible` is set; Enter or Esc dismisses.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, Paragraph, Wrap};

use crate::tui::component::Component;
use crate::tui::components::field::Button;
use crate::tui::components::language_picker::centered_rect;

const ORIGINAL_FALLBACK: &str = "Your input will appear here.";
const REWRITE_FALLBACK: &str = "Corrected text will appear here.";

pub struct ResultDialog<'a> {
    pub original: &'a str,
    pub rewrite: &'a str,
}

/// Borders, description and footer around the two sections.
const DIALOG_OVERHEAD: u16 = 2 + 2 + 1;

/// Rows a section takes at `width`: its heading plus the wrapped body.
///
/// Uses `textwrap` with options that match ratatui's `Paragraph` wrapping so
/// the dialog can be sized before rendering.
fn section_height(body: &str, width: u16) -> u16 {
    if width == 0 {
        return 2;
    }
    let options = textwrap::Options::new(width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace);
    let lines = textwrap::wrap(body, options);
    (lines.len() as u16).max(1) + 1
}

fn or_fallback<'a>(body: &'a str, fallback: &'a str) -> &'a str {
    if body.is_empty() { fallback } else { body }
}

impl Component for ResultDialog<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = area.width.saturating_sub(8).min(70);
        let text_width = width.saturating_sub(2);
        let original = or_fallback(self.original, ORIGINAL_FALLBACK);
        let rewrite = or_fallback(self.rewrite, REWRITE_FALLBACK);
        let original_height = section_height(original, text_width);
        let rewrite_height = section_height(rewrite, text_width);
        let height = DIALOG_OVERHEAD + original_height + rewrite_height;

        let overlay = centered_rect(width, height, area);
        frame.render_widget(Clear, overlay);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Rewritten Text ");
        let inner = block.inner(overlay);
        frame.render_widget(block, overlay);

        let [description, original_area, corrected_area, footer] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(original_height),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        frame.render_widget(
            Paragraph::new(Span::styled(
                "Here's the rewritten version of your input.",
                Style::default().fg(Color::Gray),
            )),
            description,
        );

        render_section(frame, original_area, "Original Text", original);
        render_section(frame, corrected_area, "Corrected Text", rewrite);

        Button {
            label: "Dismiss",
            enabled: true,
            focused: true,
        }
        .render(frame, footer);
    }
}

fn render_section(frame: &mut Frame, area: Rect, heading: &str, body: &str) {
    let lines = vec![
        Line::styled(heading, Style::default().add_modifier(Modifier::BOLD)),
        Line::raw(body),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_height_counts_wrapped_rows() {
        assert_eq!(section_height("short", 40), 2);
        assert_eq!(section_height("one two three four", 9), 4);
        assert_eq!(section_height("", 40), 2);
        assert_eq!(section_height("anything", 0), 2);
    }
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_dialog_falls_back_to_placeholder_copy() {
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| {
                ResultDialog {
                    original: "",
                    rewrite: "This is a rewritten version of your input.",
                }
                .render(f, f.area())
            })
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Rewritten Text"));
        assert!(text.contains("Your input will appear here."));
        assert!(text.contains("This is a rewritten version"));
        assert!(text.contains("Dismiss"));
    }

    #[test]
    fn test_dialog_shows_original_and_rewrite() {
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| {
                ResultDialog {
                    original: "teh quick draft",
                    rewrite: "The quick draft.",
                }
                .render(f, f.area())
            })
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Original Text"));
        assert!(text.contains("teh quick draft"));
        assert!(text.contains("Corrected Text"));
        assert!(text.contains("The quick draft."));
        assert!(!text.contains("Your input will appear here."));
    }
}
