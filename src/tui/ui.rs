use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::core::view::ViewModel;
use crate::tui::component::Component;
use crate::tui::components::{ChoiceList, InputPrompt, PROMPT_HEIGHT, TitleBar};

/// Draws one frame from the view model.
///
/// ```text
/// ┌ title bar (1) ───────────┐
/// │ choice list (rest)       │
/// │ input prompt (3, if open)│
/// └ help line (1) ───────────┘
/// ```
pub fn draw_ui(frame: &mut Frame, model: &ViewModel) {
    use Constraint::{Length, Min};
    let prompt_height = if model.prompt.is_some() { PROMPT_HEIGHT } else { 0 };
    let layout = Layout::vertical([Length(1), Min(0), Length(prompt_height), Length(1)]);
    let [title_area, list_area, prompt_area, help_area] = layout.areas(frame.area());

    TitleBar::new(&model.heading, &model.status).render(frame, title_area);
    ChoiceList::new(&model.rows, model.empty_hint, model.prompt.is_some()).render(frame, list_area);

    if let Some(prompt) = &model.prompt {
        InputPrompt::new(&prompt.label, &prompt.text).render(frame, prompt_area);
    }

    frame.render_widget(
        Span::styled(model.help, Style::default().fg(Color::DarkGray)),
        help_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::core::view::view;
    use crate::test_support::{buffer_text, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_draw_checklists_screen() {
        let backend = TestBackend::new(60, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        let app = test_app();

        terminal.draw(|f| draw_ui(f, &view(&app))).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Checklists"));
        assert!(text.contains("> [ ] Home"));
        assert!(text.contains("n new"));
    }

    #[test]
    fn test_draw_detail_with_prompt() {
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = test_app();
        update(&mut app, Action::Enter);
        update(&mut app, Action::Char('n'));
        update(&mut app, Action::Char('z'));

        terminal.draw(|f| draw_ui(f, &view(&app))).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Home"));
        assert!(text.contains("[x] dishes"));
        assert!(text.contains("New item"));
        assert!(text.contains("esc cancel"));
    }

    #[test]
    fn test_draw_tiny_terminal_does_not_panic() {
        let backend = TestBackend::new(4, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = test_app();
        update(&mut app, Action::Char('n'));
        terminal.draw(|f| draw_ui(f, &view(&app))).unwrap();
    }
}
