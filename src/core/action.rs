//! # Actions
//!
//! Everything that can happen in Quill becomes an `Action`.
//! User types a character? That's `Action::TextChanged(text)`.
//! A debounce timer fires? That's `Action::DebounceElapsed(ticket)`.
//!
//! The `update()` function applies an action to the state and returns the
//! `Effect` the runtime should perform. No side effects here: timers and
//! service calls happen elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Actions that target a view which is not mounted (e.g. a late timer for
//! the Translation tab after switching away) are ignored.

use log::debug;

use crate::core::language::Language;
use crate::core::route::{Route, Tab, View};
use crate::core::state::App;
use crate::service::{
    RewriteRequest, ServiceError, SuggestRequest, TranslateRequest, Translation,
};

/// Identifies one scheduled timer or operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Hands out unique tickets.
#[derive(Debug, Default)]
pub struct TicketIssuer {
    last: u64,
}

impl TicketIssuer {
    pub fn issue(&mut self) -> Ticket {
        self.last += 1;
        Ticket(self.last)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Writing Assistant
    TextChanged(String),
    LanguageChanged(Language),
    RewriteRequested,
    DismissResult,

    // Translation
    SourceTextChanged(String),
    SourceLanguageChanged(Language),
    TargetLanguageChanged(Language),
    TranslateRequested,

    // Navigation
    SelectTab(Tab),
    Navigate(String),
    Quit,

    // Background completions
    DebounceElapsed(Ticket),
    SuggestionReady {
        ticket: Ticket,
        result: Result<String, ServiceError>,
    },
    RewriteReady {
        ticket: Ticket,
        result: Result<String, ServiceError>,
    },
    TranslationReady {
        ticket: Ticket,
        result: Result<Translation, ServiceError>,
    },
}

/// Work the runtime must perform after an update.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    /// Replace the writing view's debounce timer (and drop any suggestion in flight).
    ArmDebounce(Ticket),
    Suggest {
        ticket: Ticket,
        request: SuggestRequest,
    },
    Rewrite {
        ticket: Ticket,
        request: RewriteRequest,
    },
    Translate {
        ticket: Ticket,
        request: TranslateRequest,
    },
    /// Cancel every timer and operation owned by these views.
    Unmount(Vec<View>),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Quit => Effect::Quit,
        Action::SelectTab(tab) => select_tab(app, tab),
        Action::Navigate(path) => navigate(app, &path),

        // Writing view is mounted whenever Home is.
        action if !app.route.is_home() => {
            debug!("Ignoring {:?}: no view mounted on {}", action, app.route.path());
            Effect::None
        }

        Action::TextChanged(text) => app.writing.on_text_change(text, &mut app.tickets),
        Action::LanguageChanged(lang) => {
            if app.writing_languages.contains(lang) {
                app.writing.on_language_change(lang)
            } else {
                Effect::None
            }
        }
        Action::RewriteRequested => {
            let effect = app.writing.on_rewrite_requested(&mut app.tickets);
            if effect != Effect::None {
                app.status_message = String::from("Rewriting...");
            }
            effect
        }
        Action::DismissResult => app.writing.on_dismiss_result(),
        Action::DebounceElapsed(ticket) => {
            app.writing.on_debounce_elapsed(ticket, &mut app.tickets)
        }
        Action::SuggestionReady { ticket, result } => {
            app.writing.on_suggestion_ready(ticket, result)
        }
        Action::RewriteReady { ticket, result } => {
            if !app.writing.awaits_rewrite(ticket) {
                return app.writing.on_rewrite_ready(ticket, result);
            }
            if let Err(e) = &result {
                app.status_message = format!("Rewrite failed: {e}");
            } else {
                app.status_message = String::from("Rewrite ready");
            }
            app.writing.on_rewrite_ready(ticket, result)
        }

        // Translation view is mounted only while its tab is active.
        action if app.tab != Tab::Translation => {
            debug!("Ignoring {:?}: translation view not mounted", action);
            Effect::None
        }

        Action::SourceTextChanged(text) => app.translation.on_source_text_change(text),
        Action::SourceLanguageChanged(lang) => {
            if app.translation_languages.contains(lang) {
                app.translation.on_source_language_change(lang)
            } else {
                Effect::None
            }
        }
        Action::TargetLanguageChanged(lang) => {
            if app.translation_languages.contains(lang) {
                app.translation.on_target_language_change(lang)
            } else {
                Effect::None
            }
        }
        Action::TranslateRequested => {
            let effect = app.translation.on_translate_requested(&mut app.tickets);
            if effect != Effect::None {
                app.status_message = String::from("Translating...");
            }
            effect
        }
        Action::TranslationReady { ticket, result } => {
            if !app.translation.awaits(ticket) {
                return app.translation.on_translation_ready(ticket, result);
            }
            if let Err(e) = &result {
                app.status_message = format!("Translation failed: {e}");
            } else {
                app.status_message = String::from("Translation ready");
            }
            app.translation.on_translation_ready(ticket, result)
        }
    }
}

fn select_tab(app: &mut App, tab: Tab) -> Effect {
    if !app.route.is_home() || app.tab == tab {
        return Effect::None;
    }
    let leaving = app.tab;
    app.tab = tab;
    app.status_message = tab.label().to_string();

    if leaving == Tab::Translation {
        app.translation = app.fresh_translation();
        return Effect::Unmount(vec![View::Translation]);
    }
    Effect::None
}

fn navigate(app: &mut App, path: &str) -> Effect {
    let route = Route::resolve(path);
    if route == app.route {
        return Effect::None;
    }
    let was_home = app.route.is_home();
    app.route = route;

    if was_home {
        let mut views = vec![View::Writing];
        if app.tab == Tab::Translation {
            views.push(View::Translation);
        }
        app.writing = app.fresh_writing();
        app.translation = app.fresh_translation();
        app.tab = Tab::default();
        app.status_message = String::from("Page not found");
        return Effect::Unmount(views);
    }

    if app.route.is_home() {
        app.status_message = String::from("Welcome to Quill!");
    }
    Effect::None
}
