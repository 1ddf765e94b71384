use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::core::action::Action;

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    ForceQuit, // Ctrl+C
    Submit,
    Escape,
    InputChar(char),
    Paste(String), // Bracketed paste
    Backspace,
    CursorUp,
    CursorDown,
    Resize,
}

impl TuiEvent {
    /// The core action for this event. `Resize` only needs a redraw.
    pub fn into_action(self) -> Option<Action> {
        match self {
            TuiEvent::ForceQuit => Some(Action::ForceQuit),
            TuiEvent::Submit => Some(Action::Enter),
            TuiEvent::Escape => Some(Action::Escape),
            TuiEvent::InputChar(c) => Some(Action::Char(c)),
            TuiEvent::Paste(text) => Some(Action::Paste(text)),
            TuiEvent::Backspace => Some(Action::Backspace),
            TuiEvent::CursorUp => Some(Action::Up),
            TuiEvent::CursorDown => Some(Action::Down),
            TuiEvent::Resize => None,
        }
    }
}

/// Block until the next event the TUI cares about.
pub fn next_event() -> std::io::Result<TuiEvent> {
    loop {
        if let Some(event) = translate(event::read()?) {
            return Ok(event);
        }
    }
}

fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => {
            // Release/repeat reports arrive on some terminals; act on presses only
            if key_event.kind != KeyEventKind::Press {
                return None;
            }
            log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
                (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
                (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
                (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
                _ => None,
            }
        }
        Event::Paste(data) => Some(TuiEvent::Paste(data)),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventState};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn test_translate_keys() {
        assert_eq!(
            translate(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(TuiEvent::ForceQuit)
        );
        assert_eq!(
            translate(key(KeyCode::Char('c'), KeyModifiers::NONE)),
            Some(TuiEvent::InputChar('c'))
        );
        assert_eq!(
            translate(key(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(TuiEvent::InputChar('A'))
        );
        assert_eq!(translate(key(KeyCode::Up, KeyModifiers::NONE)), Some(TuiEvent::CursorUp));
        assert_eq!(translate(key(KeyCode::Enter, KeyModifiers::NONE)), Some(TuiEvent::Submit));
        assert_eq!(translate(key(KeyCode::F(5), KeyModifiers::NONE)), None);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(translate(release), None);
    }

    #[test]
    fn test_into_action() {
        assert_eq!(TuiEvent::Submit.into_action(), Some(Action::Enter));
        assert_eq!(TuiEvent::InputChar('n').into_action(), Some(Action::Char('n')));
        assert_eq!(TuiEvent::Resize.into_action(), None);
    }
}
