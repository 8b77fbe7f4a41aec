//! # TextArea Component
//!
//! Multi-line text field used for the writing input and the translation
//! source text.
//!
//! ## State Management
//!
//! The buffer is a mirror of a core state field. Every edit emits
//! `TextAreaEvent::Changed` with the full text so the parent can dispatch it;
//! when core state changes underneath (a view reset on unmount) the parent
//! calls [`TextArea::sync`] and the buffer follows.
//!
//! Lines are hard-wrapped by display width rather than at word boundaries,
//! which keeps cursor placement exact.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthChar;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Top + bottom borders consumed vertically
const VERTICAL_OVERHEAD: u16 = 2;
/// Left + right borders consumed horizontally
const HORIZONTAL_OVERHEAD: u16 = 2;

#[derive(Debug, Clone, PartialEq)]
pub enum TextAreaEvent {
    /// Buffer contents changed; carries the new text.
    Changed(String),
}

/// One visual row: a byte range of the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Row {
    start: usize,
    end: usize,
    /// Last row of its logical line (the next byte is `\n` or end of text).
    ends_line: bool,
}

pub struct TextArea {
    pub buffer: String,
    pub title: String,
    pub placeholder: String,
    pub focused: bool,
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    cursor: usize,
    /// First visible row
    scroll: usize,
}

impl TextArea {
    pub fn new(title: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            buffer: String::new(),
            title: title.into(),
            placeholder: placeholder.into(),
            focused: false,
            cursor: 0,
            scroll: 0,
        }
    }

    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Follow an external change to the text. Moves the cursor to the end
    /// if the text actually differs.
    pub fn sync(&mut self, text: &str) {
        if self.buffer != text {
            self.buffer = text.to_string();
            self.cursor = self.buffer.len();
            self.scroll = 0;
        }
    }

    fn changed(&self) -> Option<TextAreaEvent> {
        Some(TextAreaEvent::Changed(self.buffer.clone()))
    }

    fn prev_boundary(&self) -> usize {
        self.buffer[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(&self) -> usize {
        self.buffer[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
            .unwrap_or(self.buffer.len())
    }

    fn line_start(&self) -> usize {
        self.buffer[..self.cursor].rfind('\n').map(|i| i + 1).unwrap_or(0)
    }

    fn line_end(&self) -> usize {
        self.buffer[self.cursor..]
            .find('\n')
            .map(|i| self.cursor + i)
            .unwrap_or(self.buffer.len())
    }

    /// Moves to the previous/next logical line, keeping the char column.
    fn move_line(&mut self, down: bool) -> bool {
        let start = self.line_start();
        let column = self.buffer[start..self.cursor].chars().count();

        let target_start = if down {
            let end = self.line_end();
            if end == self.buffer.len() {
                return false;
            }
            end + 1
        } else {
            if start == 0 {
                return false;
            }
            self.buffer[..start - 1].rfind('\n').map(|i| i + 1).unwrap_or(0)
        };

        let target_line = &self.buffer[target_start..];
        let target_line = &target_line[..target_line.find('\n').unwrap_or(target_line.len())];
        let offset = target_line
            .char_indices()
            .nth(column)
            .map(|(i, _)| i)
            .unwrap_or(target_line.len());
        self.cursor = target_start + offset;
        true
    }

    /// Splits the buffer into rows no wider than `width` columns.
    fn rows(&self, width: usize) -> Vec<Row> {
        let width = width.max(1);
        let mut rows = Vec::new();
        let mut line_start = 0;

        for line in self.buffer.split('\n') {
            let mut row_start = line_start;
            let mut row_width = 0;
            for (i, c) in line.char_indices() {
                let w = c.width().unwrap_or(0);
                if row_width + w > width && row_width > 0 {
                    rows.push(Row {
                        start: row_start,
                        end: line_start + i,
                        ends_line: false,
                    });
                    row_start = line_start + i;
                    row_width = 0;
                }
                row_width += w;
            }
            rows.push(Row {
                start: row_start,
                end: line_start + line.len(),
                ends_line: true,
            });
            line_start += line.len() + 1;
        }
        rows
    }

    /// (row, column) of the cursor within the wrapped rows.
    fn cursor_cell(&self, rows: &[Row]) -> (usize, usize) {
        for (idx, row) in rows.iter().enumerate() {
            let inside = self.cursor >= row.start
                && (self.cursor < row.end || (self.cursor == row.end && row.ends_line));
            if inside {
                let column = self.buffer[row.start..self.cursor]
                    .chars()
                    .map(|c| c.width().unwrap_or(0))
                    .sum();
                return (idx, column);
            }
        }
        (rows.len().saturating_sub(1), 0)
    }
}

impl Component for TextArea {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(HORIZONTAL_OVERHEAD) as usize;
        let visible = area.height.saturating_sub(VERTICAL_OVERHEAD).max(1) as usize;

        let rows = self.rows(inner_width);
        let (cursor_row, cursor_col) = self.cursor_cell(&rows);

        // Keep the cursor row on screen
        if cursor_row < self.scroll {
            self.scroll = cursor_row;
        } else if cursor_row >= self.scroll + visible {
            self.scroll = cursor_row + 1 - visible;
        }

        let border_style = if self.focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(self.title.as_str());

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(self.placeholder.as_str()).style(Style::default().fg(Color::DarkGray))
        } else {
            let lines: Vec<Line> = rows
                .iter()
                .skip(self.scroll)
                .take(visible)
                .map(|row| Line::raw(&self.buffer[row.start..row.end]))
                .collect();
            Paragraph::new(lines)
        };
        frame.render_widget(paragraph.block(block), area);

        if self.focused {
            let column = cursor_col.min(inner_width.saturating_sub(1)) as u16;
            let row = (cursor_row - self.scroll) as u16;
            frame.set_cursor_position((area.x + 1 + column, area.y + 1 + row));
        }
    }
}

impl EventHandler for TextArea {
    type Event = TextAreaEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                self.changed()
            }
            TuiEvent::Submit => {
                self.buffer.insert(self.cursor, '\n');
                self.cursor += 1;
                self.changed()
            }
            TuiEvent::Paste(text) => {
                self.buffer.insert_str(self.cursor, text);
                self.cursor += text.len();
                self.changed()
            }
            TuiEvent::Backspace => {
                if self.cursor == 0 {
                    return None;
                }
                let prev = self.prev_boundary();
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                self.changed()
            }
            TuiEvent::Delete => {
                if self.cursor >= self.buffer.len() {
                    return None;
                }
                let next = self.next_boundary();
                self.buffer.drain(self.cursor..next);
                self.changed()
            }
            TuiEvent::CursorLeft => {
                self.cursor = self.prev_boundary();
                None
            }
            TuiEvent::CursorRight => {
                self.cursor = self.next_boundary();
                None
            }
            TuiEvent::CursorHome => {
                self.cursor = self.line_start();
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor = self.line_end();
                None
            }
            TuiEvent::CursorUp => {
                self.move_line(false);
                None
            }
            TuiEvent::CursorDown => {
                self.move_line(true);
                None
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn area_with(text: &str) -> TextArea {
        let mut area = TextArea::new("Input", "Start typing here...");
        area.sync(text);
        area
    }

    #[test]
    fn test_typing_emits_full_text() {
        let mut area = TextArea::new("Input", "");
        assert_eq!(
            area.handle_event(&TuiEvent::InputChar('h')),
            Some(TextAreaEvent::Changed("h".to_string()))
        );
        assert_eq!(
            area.handle_event(&TuiEvent::InputChar('i')),
            Some(TextAreaEvent::Changed("hi".to_string()))
        );
        assert_eq!(
            area.handle_event(&TuiEvent::Backspace),
            Some(TextAreaEvent::Changed("h".to_string()))
        );
    }

    #[test]
    fn test_backspace_at_start_is_silent() {
        let mut area = TextArea::new("Input", "");
        assert_eq!(area.handle_event(&TuiEvent::Backspace), None);
        assert_eq!(area.handle_event(&TuiEvent::Delete), None);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut area = area_with("héllo");
        area.handle_event(&TuiEvent::CursorHome);
        area.handle_event(&TuiEvent::CursorRight);
        area.handle_event(&TuiEvent::CursorRight);
        assert_eq!(area.cursor(), 3); // 'h' + two-byte 'é'
        area.handle_event(&TuiEvent::Backspace);
        assert_eq!(area.buffer, "hllo");
    }

    #[test]
    fn test_enter_inserts_newline_and_lines_navigate() {
        let mut area = area_with("abc");
        area.handle_event(&TuiEvent::Submit);
        area.handle_event(&TuiEvent::InputChar('d'));
        assert_eq!(area.buffer, "abc\nd");

        area.handle_event(&TuiEvent::CursorUp);
        assert_eq!(area.cursor(), 1);
        area.handle_event(&TuiEvent::CursorEnd);
        assert_eq!(area.cursor(), 3);
        area.handle_event(&TuiEvent::CursorDown);
        assert_eq!(area.cursor(), 5);
    }

    #[test]
    fn test_sync_follows_external_reset() {
        let mut area = area_with("draft");
        area.sync("");
        assert!(area.buffer.is_empty());
        assert_eq!(area.cursor(), 0);
    }

    #[test]
    fn test_rows_hard_wrap() {
        let area = area_with("abcdefg\nhi");
        let rows = area.rows(3);
        let texts: Vec<&str> = rows.iter().map(|r| &area.buffer[r.start..r.end]).collect();
        assert_eq!(texts, vec!["abc", "def", "g", "hi"]);
        assert!(rows[2].ends_line);
        assert!(!rows[0].ends_line);
    }

    #[test]
    fn test_cursor_after_full_row_moves_to_next_row() {
        let mut area = area_with("abcdef");
        area.handle_event(&TuiEvent::CursorHome);
        for _ in 0..3 {
            area.handle_event(&TuiEvent::CursorRight);
        }
        let rows = area.rows(3);
        assert_eq!(area.cursor_cell(&rows), (1, 0));
    }

    #[test]
    fn test_render_placeholder_when_empty() {
        let backend = TestBackend::new(30, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut area = TextArea::new("Enter your text", "Start typing here...");

        terminal.draw(|f| area.render(f, f.area())).unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Enter your text"));
        assert!(text.contains("Start typing here..."));
    }
}
