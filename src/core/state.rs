//! # Application State
//!
//! Core state for Quill. Domain logic only, no TUI types. Presentation
//! state (focus, overlays, cursor) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── route: Route                  // Home or NotFound(path)
//! ├── tab: Tab                      // active tab on Home
//! ├── writing: WritingState         // mounted with Home
//! ├── translation: TranslationState // mounted with the Translation tab
//! ├── writing_languages: LanguageList
//! ├── translation_languages: LanguageList
//! ├── tickets: TicketIssuer         // ids for scheduled work
//! └── status_message: String        // title bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::action::TicketIssuer;
use crate::core::config::ResolvedConfig;
use crate::core::language::{Language, LanguageList};
use crate::core::route::{Route, Tab};
use crate::core::translation::TranslationState;
use crate::core::writing::WritingState;

pub struct App {
    pub route: Route,
    pub tab: Tab,
    pub writing: WritingState,
    pub translation: TranslationState,
    pub writing_languages: LanguageList,
    pub translation_languages: LanguageList,
    pub tickets: TicketIssuer,
    pub status_message: String,
}

impl App {
    pub fn new(writing_languages: LanguageList, translation_languages: LanguageList) -> Self {
        let mut app = Self {
            route: Route::Home,
            tab: Tab::default(),
            writing: WritingState::new(Language::English),
            translation: TranslationState::new(Language::English, Language::Spanish),
            writing_languages,
            translation_languages,
            tickets: TicketIssuer::default(),
            status_message: String::from("Welcome to Quill!"),
        };
        app.writing = app.fresh_writing();
        app.translation = app.fresh_translation();
        app
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        let mut app = Self::new(
            config.writing_languages.clone(),
            config.translation_languages.clone(),
        );
        app.route = Route::resolve(&config.start_path);
        app
    }

    /// Writing state as it looks right after mounting.
    pub fn fresh_writing(&self) -> WritingState {
        WritingState::new(self.writing_languages.default_or_first(Language::English))
    }

    /// Translation state as it looks right after mounting.
    pub fn fresh_translation(&self) -> TranslationState {
        let source = self
            .translation_languages
            .default_or_first(Language::English);
        let target = self
            .translation_languages
            .default_or_first(Language::Spanish);
        TranslationState::new(source, target)
    }

    /// True if any view has work outstanding (drives the spinner redraw).
    pub fn is_busy(&self) -> bool {
        self.writing.is_loading() || self.translation.is_loading()
    }
}
