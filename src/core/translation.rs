//! # Translation State
//!
//! One on-demand operation: translate `original_text` from the source to the
//! target language. The trigger is unavailable while loading and while the
//! source text is empty.

use log::debug;

use crate::core::action::{Effect, Ticket, TicketIssuer};
use crate::core::language::Language;
use crate::service::{ServiceError, TranslateRequest, Translation};

#[derive(Debug, Clone, PartialEq)]
pub struct TranslationState {
    pub source_language: Language,
    pub target_language: Language,
    pub original_text: String,
    pub translated_text: String,
    pub explanation: String,
    pub error: Option<String>,
    pending_translation: Option<Ticket>,
}

impl TranslationState {
    pub fn new(source_language: Language, target_language: Language) -> Self {
        Self {
            source_language,
            target_language,
            original_text: String::new(),
            translated_text: String::new(),
            explanation: String::new(),
            error: None,
            pending_translation: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.pending_translation.is_some()
    }

    /// True if `ticket` is the translation currently in flight.
    pub fn awaits(&self, ticket: Ticket) -> bool {
        self.pending_translation == Some(ticket)
    }

    pub fn can_translate(&self) -> bool {
        !self.is_loading() && !self.original_text.is_empty()
    }

    pub fn on_source_text_change(&mut self, text: String) -> Effect {
        self.original_text = text;
        Effect::None
    }

    pub fn on_source_language_change(&mut self, language: Language) -> Effect {
        self.source_language = language;
        Effect::None
    }

    pub fn on_target_language_change(&mut self, language: Language) -> Effect {
        self.target_language = language;
        Effect::None
    }

    pub fn on_translate_requested(&mut self, tickets: &mut TicketIssuer) -> Effect {
        if !self.can_translate() {
            debug!(
                "Translation: request refused (loading={}, empty={})",
                self.is_loading(),
                self.original_text.is_empty()
            );
            return Effect::None;
        }

        let ticket = tickets.issue();
        self.pending_translation = Some(ticket);
        self.error = None;
        Effect::Translate {
            ticket,
            request: TranslateRequest {
                text: self.original_text.clone(),
                source: self.source_language,
                target: self.target_language,
            },
        }
    }

    pub fn on_translation_ready(
        &mut self,
        ticket: Ticket,
        result: Result<Translation, ServiceError>,
    ) -> Effect {
        if self.pending_translation != Some(ticket) {
            debug!("Translation: dropping stale result {:?}", ticket);
            return Effect::None;
        }
        self.pending_translation = None;

        match result {
            Ok(translation) => {
                self.translated_text = translation.text;
                self.explanation = translation.explanation;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
        Effect::None
    }
}
