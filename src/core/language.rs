//! # Languages
//!
//! The languages a view offers are configuration data, not code: each view
//! receives a [`LanguageList`] and picks from it. The defaults match the two
//! stock lists (five for writing, seven for translation) and can be
//! overridden from the config file.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    English,
    Spanish,
    French,
    German,
    Italian,
    Chinese,
    Japanese,
}

impl Language {
    pub const ALL: [Language; 7] = [
        Language::English,
        Language::Spanish,
        Language::French,
        Language::German,
        Language::Italian,
        Language::Chinese,
        Language::Japanese,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::German => "German",
            Language::Italian => "Italian",
            Language::Chinese => "Chinese",
            Language::Japanese => "Japanese",
        }
    }
}

/// An ordered, non-empty, duplicate-free list of selectable languages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageList {
    languages: Vec<Language>,
}

impl LanguageList {
    /// Builds a list, dropping duplicates. Returns `None` for an empty list.
    pub fn new(languages: impl IntoIterator<Item = Language>) -> Option<Self> {
        let mut unique = Vec::new();
        for lang in languages {
            if !unique.contains(&lang) {
                unique.push(lang);
            }
        }
        (!unique.is_empty()).then_some(Self { languages: unique })
    }

    /// English, Spanish, French, German, Italian.
    pub fn writing() -> Self {
        Self {
            languages: Language::ALL[..5].to_vec(),
        }
    }

    /// All seven languages.
    pub fn translation() -> Self {
        Self {
            languages: Language::ALL.to_vec(),
        }
    }

    pub fn as_slice(&self) -> &[Language] {
        &self.languages
    }

    pub fn contains(&self, lang: Language) -> bool {
        self.languages.contains(&lang)
    }

    pub fn position(&self, lang: Language) -> Option<usize> {
        self.languages.iter().position(|l| *l == lang)
    }

    /// `preferred` if offered, otherwise the first entry.
    pub fn default_or_first(&self, preferred: Language) -> Language {
        if self.contains(preferred) {
            preferred
        } else {
            self.languages[0]
        }
    }

    /// The entry after `current`, wrapping around. Unknown languages map to the first entry.
    pub fn next(&self, current: Language) -> Language {
        match self.position(current) {
            Some(i) => self.languages[(i + 1) % self.languages.len()],
            None => self.languages[0],
        }
    }

    /// The entry before `current`, wrapping around.
    pub fn prev(&self, current: Language) -> Language {
        match self.position(current) {
            Some(0) => self.languages[self.languages.len() - 1],
            Some(i) => self.languages[i - 1],
            None => self.languages[0],
        }
    }
}
