//! # TUI Components
//!
//! UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as parameters:
//! - `TitleBar`: top status bar with route, status and spinner
//! - `LanguageField`, `Button`: single-line controls
//! - `ResultDialog`: the rewritten-text overlay
//! - `WritingView`, `TranslationView`, `NotFound`: full screens
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `TextArea`: multi-line editor mirroring a core text field
//! - `LanguagePickerState`: list overlay for choosing a language
//!
//! ### Props-Based Data Flow
//!
//! Components receive core state as borrowed props, never the whole `App`.
//!
//! ```rust,ignore
//! WritingView { state: &app.writing, input: &mut tui.writing_input, focus }
//!     .render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs               (this file)
//! ├── title_bar.rs         (Top status bar)
//! ├── field.rs             (Language field and button)
//! ├── text_area.rs         (Editable text area)
//! ├── language_picker.rs   (Language list overlay)
//! ├── result_dialog.rs     (Rewrite result overlay)
//! ├── writing_view.rs      (Writing Assistant tab)
//! ├── translation_view.rs  (Translation tab)
//! └── not_found.rs         (404 route)
//! ```

pub mod field;
pub mod language_picker;
pub mod not_found;
pub mod result_dialog;
pub mod text_area;
mod title_bar;
pub mod translation_view;
pub mod writing_view;

pub use language_picker::{LanguagePicker, LanguagePickerState, PickerEvent, PickerTarget};
pub use not_found::NotFound;
pub use text_area::{TextArea, TextAreaEvent};
pub use title_bar::TitleBar;
pub use translation_view::TranslationView;
pub use writing_view::WritingView;
