//! Request and response types exchanged with the language service.
//!
//! Requests are owned snapshots of view state taken when an operation is
//! issued, so a spawned task never borrows from the live state.

use crate::core::language::Language;

/// Input for a real-time suggestion, captured when the debounce fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestRequest {
    pub text: String,
    pub language: Language,
}

/// Input for an explicit rewrite of the whole text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteRequest {
    pub text: String,
    pub language: Language,
}

/// Input for a translation between two languages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateRequest {
    pub text: String,
    pub source: Language,
    pub target: Language,
}

/// Output of a translation: the translated text plus a short explanation
/// of the translation and any corrections made to the source.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Translation {
    pub text: String,
    pub explanation: String,
}
