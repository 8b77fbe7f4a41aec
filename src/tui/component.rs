use ratatui::Frame;
use ratatui::layout::Rect;

use super::event::TuiEvent;

/// Something that draws itself into a region of the frame.
///
/// Views and controls take their data as struct fields borrowed from core
/// state (`WritingView { state: &app.writing, .. }`). `render` takes
/// `&mut self` so stateful pieces like `TextArea` can adjust their scroll
/// offset while drawing, the way ratatui's `StatefulWidget` does.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that consumes terminal events.
pub trait EventHandler {
    /// What the component reports to the event loop (e.g. new text, a
    /// chosen language).
    type Event;

    /// Returns `Some` when the event produced something the loop must act on.
    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
