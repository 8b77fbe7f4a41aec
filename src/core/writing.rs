//! # Writing Assistant State
//!
//! Two interaction patterns over the language service:
//!
//! - **Debounced suggestion**: every text change re-arms a single debounce
//!   timer. When it fires with non-empty input, a suggestion is requested.
//! - **On-demand rewrite**: an explicit command, refused while anything is
//!   loading. Completion opens the result dialog.
//!
//! ```text
//!            text change                 timer fires (input != "")
//!   Idle ─────────────────▶ PendingDebounce ─────────────────────▶ Loading
//!    ▲                         │  ▲    │ text change (re-arm)          │
//!    │     timer fires ("")    │  └────┘                               │
//!    └─────────────────────────┘                 result ──────────▶ Done
//! ```
//!
//! Every pending step is identified by a [`Ticket`]. Handlers accept a
//! completion only when its ticket is the one currently pending, so a
//! cancelled timer or a stale result can never write.

use log::debug;

use crate::core::action::{Effect, Ticket, TicketIssuer};
use crate::core::language::Language;
use crate::service::{RewriteRequest, ServiceError, SuggestRequest};

/// Coarse state of a view, derived from its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    PendingDebounce,
    Loading,
    Done,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WritingState {
    pub input: String,
    pub suggestion: String,
    pub rewrite: String,
    pub selected_language: Language,
    pub is_result_visible: bool,
    /// Last suggestion failure; cleared when the next suggestion starts.
    pub suggestion_error: Option<String>,
    /// Last rewrite failure; cleared when the next rewrite starts.
    pub rewrite_error: Option<String>,
    pending_debounce: Option<Ticket>,
    pending_suggestion: Option<Ticket>,
    pending_rewrite: Option<Ticket>,
}

impl WritingState {
    pub fn new(selected_language: Language) -> Self {
        Self {
            input: String::new(),
            suggestion: String::new(),
            rewrite: String::new(),
            selected_language,
            is_result_visible: false,
            suggestion_error: None,
            rewrite_error: None,
            pending_debounce: None,
            pending_suggestion: None,
            pending_rewrite: None,
        }
    }

    /// True while a suggestion or a rewrite is outstanding.
    pub fn is_loading(&self) -> bool {
        self.pending_suggestion.is_some() || self.pending_rewrite.is_some()
    }

    pub fn is_suggestion_loading(&self) -> bool {
        self.pending_suggestion.is_some()
    }

    pub fn can_rewrite(&self) -> bool {
        !self.is_loading()
    }

    /// The failure to show inline. A rewrite failure outranks a suggestion
    /// failure because the user asked for it explicitly.
    pub fn error(&self) -> Option<&str> {
        self.rewrite_error
            .as_deref()
            .or(self.suggestion_error.as_deref())
    }

    pub fn awaits_rewrite(&self, ticket: Ticket) -> bool {
        self.pending_rewrite == Some(ticket)
    }

    pub fn pending_debounce(&self) -> Option<Ticket> {
        self.pending_debounce
    }

    pub fn phase(&self) -> Phase {
        if self.is_loading() {
            Phase::Loading
        } else if self.pending_debounce.is_some() {
            Phase::PendingDebounce
        } else if !self.suggestion.is_empty() || !self.rewrite.is_empty() {
            Phase::Done
        } else {
            Phase::Idle
        }
    }

    /// Replaces the input and re-arms the debounce. A suggestion still in
    /// flight for the previous text is abandoned.
    pub fn on_text_change(&mut self, text: String, tickets: &mut TicketIssuer) -> Effect {
        if text == self.input {
            return Effect::None;
        }
        self.input = text;
        self.pending_suggestion = None;

        let ticket = tickets.issue();
        self.pending_debounce = Some(ticket);
        debug!("Writing: input changed (len={}), debounce {:?}", self.input.len(), ticket);
        Effect::ArmDebounce(ticket)
    }

    pub fn on_language_change(&mut self, language: Language) -> Effect {
        self.selected_language = language;
        Effect::None
    }

    pub fn on_debounce_elapsed(&mut self, ticket: Ticket, tickets: &mut TicketIssuer) -> Effect {
        if self.pending_debounce != Some(ticket) {
            debug!("Writing: ignoring superseded debounce {:?}", ticket);
            return Effect::None;
        }
        self.pending_debounce = None;

        if self.input.is_empty() {
            debug!("Writing: debounce fired on empty input, no suggestion");
            return Effect::None;
        }

        let ticket = tickets.issue();
        self.pending_suggestion = Some(ticket);
        self.suggestion_error = None;
        Effect::Suggest {
            ticket,
            request: SuggestRequest {
                text: self.input.clone(),
                language: self.selected_language,
            },
        }
    }

    pub fn on_suggestion_ready(
        &mut self,
        ticket: Ticket,
        result: Result<String, ServiceError>,
    ) -> Effect {
        if self.pending_suggestion != Some(ticket) {
            debug!("Writing: dropping stale suggestion {:?}", ticket);
            return Effect::None;
        }
        self.pending_suggestion = None;

        match result {
            Ok(suggestion) => self.suggestion = suggestion,
            Err(e) => self.suggestion_error = Some(e.to_string()),
        }
        Effect::None
    }

    /// Starts a rewrite. Loading is set here, before any task runs, so the
    /// trigger disables itself on the very next render.
    pub fn on_rewrite_requested(&mut self, tickets: &mut TicketIssuer) -> Effect {
        if !self.can_rewrite() {
            debug!("Writing: rewrite refused while loading");
            return Effect::None;
        }

        let ticket = tickets.issue();
        self.pending_rewrite = Some(ticket);
        self.rewrite_error = None;
        Effect::Rewrite {
            ticket,
            request: RewriteRequest {
                text: self.input.clone(),
                language: self.selected_language,
            },
        }
    }

    pub fn on_rewrite_ready(&mut self, ticket: Ticket, result: Result<String, ServiceError>) -> Effect {
        if self.pending_rewrite != Some(ticket) {
            debug!("Writing: dropping stale rewrite {:?}", ticket);
            return Effect::None;
        }
        self.pending_rewrite = None;

        match result {
            Ok(rewrite) => {
                self.rewrite = rewrite;
                self.is_result_visible = true;
            }
            Err(e) => self.rewrite_error = Some(e.to_string()),
        }
        Effect::None
    }

    pub fn on_dismiss_result(&mut self) -> Effect {
        self.is_result_visible = false;
        Effect::None
    }
}
