//! Keyboard focus: which control receives routed key events.

use crate::core::route::{Route, Tab};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    // Writing Assistant
    Language,
    Input,
    Rewrite,
    // Translation
    SourceLanguage,
    TargetLanguage,
    Original,
    Translate,
    // Not found
    HomeLink,
}

impl Focus {
    /// Tab order for the current screen.
    pub fn order(route: &Route, tab: Tab) -> &'static [Focus] {
        match (route, tab) {
            (Route::NotFound(_), _) => &[Focus::HomeLink],
            (Route::Home, Tab::Writing) => &[Focus::Language, Focus::Input, Focus::Rewrite],
            (Route::Home, Tab::Translation) => &[
                Focus::SourceLanguage,
                Focus::TargetLanguage,
                Focus::Original,
                Focus::Translate,
            ],
        }
    }

    /// Where focus lands when a screen is shown.
    pub fn initial(route: &Route, tab: Tab) -> Focus {
        match (route, tab) {
            (Route::NotFound(_), _) => Focus::HomeLink,
            (Route::Home, Tab::Writing) => Focus::Input,
            (Route::Home, Tab::Translation) => Focus::Original,
        }
    }

    /// Next (or previous) control in tab order, wrapping. A focus that does
    /// not belong to the screen resets to its initial focus.
    pub fn step(self, route: &Route, tab: Tab, forward: bool) -> Focus {
        let order = Self::order(route, tab);
        match order.iter().position(|f| *f == self) {
            Some(i) if forward => order[(i + 1) % order.len()],
            Some(i) => order[(i + order.len() - 1) % order.len()],
            None => Self::initial(route, tab),
        }
    }

    pub fn belongs_to(self, route: &Route, tab: Tab) -> bool {
        Self::order(route, tab).contains(&self)
    }
}
