use ratatui::layout::Rect;
use ratatui::Frame;

/// A reusable UI component.
///
/// Components receive data via props (struct fields) and render to a `Frame`
/// within a given `Rect`. They are created fresh each frame from the view
/// model, so they hold no state between frames.
pub trait Component {
    /// Render the component into the given area.
    ///
    /// Takes `&mut self` so a component can cache layout work during the pass.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
