//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm. State
//! lives in `core`, timers and operations in `runtime::Controller`; this
//! module owns only presentation state (focus, text area cursors, the
//! picker overlay).
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Waiting** (debounce armed or an operation in flight): polls every ~80ms
//!   so completions and the spinner show up promptly.
//! - **Idle**: sleeps up to 500ms, only redraws on events or terminal resize.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call, making blinking cursors appear erratic during continuous redraws.

mod component;
mod components;
mod event;
mod focus;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, EnableBracketedPaste, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;

use crate::core::action::Action;
use crate::core::config::ResolvedConfig;
use crate::core::language::Language;
use crate::core::route::{Route, Tab};
use crate::core::state::App;
use crate::runtime::Controller;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    LanguagePickerState, PickerEvent, PickerTarget, TextArea, TextAreaEvent,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::focus::Focus;

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub focus: Focus,
    // Editors mirroring the core text fields
    pub writing_input: TextArea,
    pub translation_input: TextArea,
    // Language picker overlay (None = hidden)
    pub picker: Option<LanguagePickerState>,
}

impl TuiState {
    pub fn new(app: &App) -> Self {
        let mut tui = Self {
            focus: Focus::initial(&app.route, app.tab),
            writing_input: TextArea::new("Enter your text", "Start typing here..."),
            translation_input: TextArea::new("Original Text", "Enter text to translate"),
            picker: None,
        };
        tui.sync(app);
        tui
    }

    /// Follow core state: reset editors whose view was unmounted and move
    /// focus back onto the visible screen.
    pub fn sync(&mut self, app: &App) {
        self.writing_input.sync(&app.writing.input);
        self.translation_input.sync(&app.translation.original_text);
        if !self.focus.belongs_to(&app.route, app.tab) {
            self.focus = Focus::initial(&app.route, app.tab);
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Kitty keyboard protocol lets key release events be filtered out.
        // Terminals that don't support it ignore the request.
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,                        // Show cursor for text editing
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from continuous redraws
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableBracketedPaste,
            Hide
        );
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut controller = Controller::from_config(&config);
    let mut tui = TuiState::new(&controller.app);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        tui.sync(&controller.app);

        let waiting = is_waiting(&controller.app);
        if waiting {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &controller.app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if waiting {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if !handle_event(&mut controller, &mut tui, event) {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break;
        }

        // Timer and operation completions from background tasks
        if controller.drain() {
            needs_redraw = true;
        }
    }

    info!("Shutting down");
    controller.shutdown();
    ratatui::restore();
    Ok(())
}

/// Something is scheduled that will change the screen without user input.
fn is_waiting(app: &App) -> bool {
    app.is_busy() || app.writing.pending_debounce().is_some()
}

/// Routes one terminal event. Returns `false` once the app should quit.
fn handle_event(controller: &mut Controller, tui: &mut TuiState, event: TuiEvent) -> bool {
    match event {
        TuiEvent::Resize => return true,
        TuiEvent::ForceQuit => return controller.dispatch(Action::Quit),
        _ => {}
    }

    // When the picker is open, route all events to it
    if let Some(picker) = tui.picker.as_mut() {
        match picker.handle_event(&event) {
            Some(PickerEvent::Choose(target, language)) => {
                tui.picker = None;
                return controller.dispatch(language_action(target, language));
            }
            Some(PickerEvent::Dismiss) => tui.picker = None,
            None => {}
        }
        return true;
    }

    if let TuiEvent::SelectTab(tab) = event {
        let keep_running = controller.dispatch(Action::SelectTab(tab));
        tui.focus = Focus::initial(&controller.app.route, controller.app.tab);
        return keep_running;
    }

    // The rewrite result dialog is modal
    let app = &controller.app;
    if app.route.is_home() && app.tab == Tab::Writing && app.writing.is_result_visible {
        if matches!(event, TuiEvent::Submit | TuiEvent::Escape) {
            return controller.dispatch(Action::DismissResult);
        }
        return true;
    }

    match event {
        TuiEvent::FocusNext => {
            tui.focus = tui.focus.step(&app.route, app.tab, true);
            true
        }
        TuiEvent::FocusPrev => {
            tui.focus = tui.focus.step(&app.route, app.tab, false);
            true
        }
        TuiEvent::Trigger => trigger(controller),
        _ => handle_focused(controller, tui, event),
    }
}

/// Runs the primary action of the visible screen, if it is enabled.
fn trigger(controller: &mut Controller) -> bool {
    let app = &controller.app;
    let action = match (&app.route, app.tab) {
        (Route::NotFound(_), _) => Some(Action::Navigate(Route::ROOT.to_string())),
        (Route::Home, Tab::Writing) if app.writing.can_rewrite() => Some(Action::RewriteRequested),
        (Route::Home, Tab::Translation) if app.translation.can_translate() => {
            Some(Action::TranslateRequested)
        }
        _ => None,
    };
    match action {
        Some(action) => controller.dispatch(action),
        None => {
            debug!("Trigger ignored: action disabled");
            true
        }
    }
}

fn handle_focused(controller: &mut Controller, tui: &mut TuiState, event: TuiEvent) -> bool {
    match tui.focus {
        Focus::Input => match tui.writing_input.handle_event(&event) {
            Some(TextAreaEvent::Changed(text)) => controller.dispatch(Action::TextChanged(text)),
            None => true,
        },
        Focus::Original => match tui.translation_input.handle_event(&event) {
            Some(TextAreaEvent::Changed(text)) => {
                controller.dispatch(Action::SourceTextChanged(text))
            }
            None => true,
        },
        Focus::Language => language_field(controller, tui, PickerTarget::WritingLanguage, event),
        Focus::SourceLanguage => {
            language_field(controller, tui, PickerTarget::SourceLanguage, event)
        }
        Focus::TargetLanguage => {
            language_field(controller, tui, PickerTarget::TargetLanguage, event)
        }
        Focus::Rewrite | Focus::Translate | Focus::HomeLink => {
            if matches!(event, TuiEvent::Submit) {
                trigger(controller)
            } else {
                true
            }
        }
    }
}

fn language_field(
    controller: &mut Controller,
    tui: &mut TuiState,
    target: PickerTarget,
    event: TuiEvent,
) -> bool {
    let app = &controller.app;
    let (list, current) = match target {
        PickerTarget::WritingLanguage => (&app.writing_languages, app.writing.selected_language),
        PickerTarget::SourceLanguage => {
            (&app.translation_languages, app.translation.source_language)
        }
        PickerTarget::TargetLanguage => {
            (&app.translation_languages, app.translation.target_language)
        }
    };

    let chosen = match event {
        TuiEvent::Submit => {
            tui.picker = Some(LanguagePickerState::new(target, list, current));
            return true;
        }
        TuiEvent::CursorLeft => list.prev(current),
        TuiEvent::CursorRight => list.next(current),
        _ => return true,
    };
    controller.dispatch(language_action(target, chosen))
}

fn language_action(target: PickerTarget, language: Language) -> Action {
    match target {
        PickerTarget::WritingLanguage => Action::LanguageChanged(language),
        PickerTarget::SourceLanguage => Action::SourceLanguageChanged(language),
        PickerTarget::TargetLanguage => Action::TargetLanguageChanged(language),
    }
}
