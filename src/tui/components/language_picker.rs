//! # Language Picker Component
//!
//! Centered overlay listing the languages a field offers. Opened with Enter
//! on a language field, dismissed with Esc.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `LanguagePickerState` lives in `TuiState`
//! - `LanguagePicker` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding};

use crate::core::language::{Language, LanguageList};
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

/// Which field the picker writes back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerTarget {
    WritingLanguage,
    SourceLanguage,
    TargetLanguage,
}

impl PickerTarget {
    pub fn title(&self) -> &'static str {
        match self {
            PickerTarget::WritingLanguage => " Select a language ",
            PickerTarget::SourceLanguage => " Select source language ",
            PickerTarget::TargetLanguage => " Select target language ",
        }
    }
}

/// Persistent state for the picker overlay.
pub struct LanguagePickerState {
    pub target: PickerTarget,
    pub languages: Vec<Language>,
    pub selected: usize,
    pub list_state: ListState,
}

impl LanguagePickerState {
    /// Opens the picker with `current` highlighted.
    pub fn new(target: PickerTarget, list: &LanguageList, current: Language) -> Self {
        let selected = list.position(current).unwrap_or(0);
        let mut list_state = ListState::default();
        list_state.select(Some(selected));
        Self {
            target,
            languages: list.as_slice().to_vec(),
            selected,
            list_state,
        }
    }
}

/// Events emitted by the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    Choose(PickerTarget, Language),
    Dismiss,
}

impl EventHandler for LanguagePickerState {
    type Event = PickerEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<PickerEvent> {
        match event {
            TuiEvent::Escape => Some(PickerEvent::Dismiss),
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::CursorDown => {
                self.selected = (self.selected + 1).min(self.languages.len().saturating_sub(1));
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::Submit => self
                .languages
                .get(self.selected)
                .map(|lang| PickerEvent::Choose(self.target, *lang)),
            _ => None,
        }
    }
}

/// Transient render wrapper for the picker overlay.
pub struct LanguagePicker<'a> {
    state: &'a mut LanguagePickerState,
}

impl<'a> LanguagePicker<'a> {
    pub fn new(state: &'a mut LanguagePickerState) -> Self {
        Self { state }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let height = self.state.languages.len() as u16 + 2;
        let overlay = centered_rect(36, height, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(self.state.target.title())
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Enter Select  Esc Back ").centered())
            .padding(Padding::horizontal(1));

        let items: Vec<ListItem> = self
            .state
            .languages
            .iter()
            .enumerate()
            .map(|(i, lang)| {
                let style = if i == self.state.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::Gray)
                };
                ListItem::new(Line::styled(lang.label(), style))
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, overlay, &mut self.state.list_state);
    }
}

/// A rect of at most `width` x `height` cells centered in `outer`.
pub fn centered_rect(width: u16, height: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height.min(outer.height)),
        Constraint::Fill(1),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width.min(outer.width)),
        Constraint::Fill(1),
    ])
    .areas(center_v);
    center
}
