//! # Routes and Tabs
//!
//! Two routes exist: `/` renders the tabbed tool surface, anything else
//! renders the not-found view. The not-found view always offers a way back
//! to `/`.

/// Where the user is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    NotFound(String),
}

impl Route {
    pub const ROOT: &'static str = "/";

    /// Matches a path against the route table. Only `/` (with or without
    /// surrounding whitespace) is Home.
    pub fn resolve(path: &str) -> Self {
        match path.trim() {
            Self::ROOT => Route::Home,
            other => Route::NotFound(other.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Route::Home => Self::ROOT,
            Route::NotFound(path) => path,
        }
    }

    pub fn is_home(&self) -> bool {
        matches!(self, Route::Home)
    }
}

/// Tabs on the Home route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Writing,
    Translation,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Writing, Tab::Translation];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Writing => "Writing Assistant",
            Tab::Translation => "Translation",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Writing => 0,
            Tab::Translation => 1,
        }
    }
}

/// A view instance that owns state and may have timers outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Writing,
    Translation,
}
