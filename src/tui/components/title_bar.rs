//! # TitleBar Component
//!
//! Top status bar: application name, current route, status message and a
//! spinner while any operation is outstanding.
//!
//! Purely presentational. All props come from core state (`route`,
//! `status_message`, busy flag) or the event loop (spinner frame):
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new("/".to_string(), "Rewriting...".to_string(), true, frame);
//! title_bar.render(frame, title_area);
//! ```

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

pub struct TitleBar {
    /// Current route path (e.g. "/")
    pub route_path: String,
    /// Status message (e.g. "Rewriting...", "Translation ready")
    pub status_message: String,
    /// Whether an operation is in flight
    pub busy: bool,
    /// Animation frame counter for the spinner
    pub spinner_frame: usize,
}

impl TitleBar {
    pub fn new(route_path: String, status_message: String, busy: bool, spinner_frame: usize) -> Self {
        Self {
            route_path,
            status_message,
            busy,
            spinner_frame,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            format!("Quill ({})", self.route_path),
            Style::default().fg(Color::Cyan),
        )];

        if !self.status_message.is_empty() {
            spans.push(Span::raw(format!(" | {}", self.status_message)));
        }
        if self.busy {
            let glyph = SPINNER[self.spinner_frame % SPINNER.len()];
            spans.push(Span::styled(
                format!(" {glyph}"),
                Style::default().fg(Color::Yellow),
            ));
        }

        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| title_bar.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let mut title_bar = TitleBar::new("/".to_string(), "Translating...".to_string(), true, 1);
        let text = rendered(&mut title_bar);
        assert!(text.contains("Quill (/)"));
        assert!(text.contains("Translating..."));
        assert!(text.contains('/'));
    }

    #[test]
    fn test_title_bar_default_no_status() {
        let mut title_bar = TitleBar::new("/missing".to_string(), String::new(), false, 0);
        let text = rendered(&mut title_bar);
        assert!(text.contains("Quill (/missing)"));
        assert!(!text.contains('|'));
    }
}
