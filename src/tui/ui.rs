use crate::core::route::{Route, Tab};
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    LanguagePicker, NotFound, TitleBar, TranslationView, WritingView,
};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Tabs};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(2), Min(0), Length(1)]);
    let [title_area, tabs_area, main_area, help_area] = layout.areas(frame.area());

    TitleBar::new(
        app.route.path().to_string(),
        app.status_message.clone(),
        app.is_busy(),
        spinner_frame,
    )
    .render(frame, title_area);

    match &app.route {
        Route::Home => {
            draw_tabs(frame, tabs_area, app.tab);
            match app.tab {
                Tab::Writing => WritingView {
                    state: &app.writing,
                    input: &mut tui.writing_input,
                    focus: tui.focus,
                }
                .render(frame, main_area),
                Tab::Translation => TranslationView {
                    state: &app.translation,
                    original: &mut tui.translation_input,
                    focus: tui.focus,
                    spinner_frame,
                }
                .render(frame, main_area),
            }
        }
        Route::NotFound(path) => {
            NotFound { path }.render(frame, main_area);
        }
    }

    frame.render_widget(
        Line::styled(help_text(app, tui), Style::default().fg(Color::DarkGray)),
        help_area,
    );

    if let Some(picker) = tui.picker.as_mut() {
        LanguagePicker::new(picker).render(frame, frame.area());
    }
}

fn draw_tabs(frame: &mut Frame, area: Rect, selected: Tab) {
    let titles = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| format!(" F{} {} ", i + 1, tab.label()));
    let tabs = Tabs::new(titles)
        .select(selected.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(tabs, area);
}

fn help_text(app: &App, tui: &TuiState) -> &'static str {
    if tui.picker.is_some() {
        return " ↑↓ Move  Enter Select  Esc Back";
    }
    match (&app.route, app.tab) {
        (Route::NotFound(_), _) => " Enter Go back to Homepage  Ctrl+C Quit",
        (Route::Home, Tab::Writing) if app.writing.is_result_visible => {
            " Enter/Esc Dismiss  Ctrl+C Quit"
        }
        (Route::Home, Tab::Writing) => {
            " Tab Focus  ←→ Language  Ctrl+R Rewrite  F1/F2 Tabs  Ctrl+C Quit"
        }
        (Route::Home, Tab::Translation) => {
            " Tab Focus  ←→ Language  Ctrl+R Translate  F1/F2 Tabs  Ctrl+C Quit"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::language::LanguageList;
    use crate::tui::components::{LanguagePickerState, PickerTarget};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn app() -> App {
        App::new(LanguageList::writing(), LanguageList::translation())
    }

    fn render(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui, 0)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_draw_home_writing_tab() {
        let app = app();
        let mut tui = TuiState::new(&app);
        let text = render(&app, &mut tui);
        assert!(text.contains("Quill (/)"));
        assert!(text.contains("Writing Assistant"));
        assert!(text.contains("Real-time Writing Assistant"));
    }

    #[test]
    fn test_draw_translation_tab() {
        let mut app = app();
        app.tab = Tab::Translation;
        let mut tui = TuiState::new(&app);
        let text = render(&app, &mut tui);
        assert!(text.contains("Translation Tool"));
        assert!(text.contains("Ctrl+R Translate"));
    }

    #[test]
    fn test_draw_not_found_hides_tabs() {
        let mut app = app();
        app.route = Route::resolve("/nowhere");
        let mut tui = TuiState::new(&app);
        let text = render(&app, &mut tui);
        assert!(text.contains("Quill (/nowhere)"));
        assert!(text.contains("Oops! Page not found"));
        assert!(!text.contains("F2 Translation"));
    }

    #[test]
    fn test_picker_overlay_is_drawn() {
        let app = app();
        let mut tui = TuiState::new(&app);
        tui.picker = Some(LanguagePickerState::new(
            PickerTarget::WritingLanguage,
            &app.writing_languages,
            app.writing.selected_language,
        ));
        let text = render(&app, &mut tui);
        assert!(text.contains("Select a language"));
        assert!(text.contains("German"));
    }
}
