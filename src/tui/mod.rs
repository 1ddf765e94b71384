//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the view model,
//! and translates keyboard events into core `Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop blocks on the next terminal event and only
//! redraws when `update` says something changed (or the terminal resized).
//! One event is fully handled, store calls included, before the next is read.
//!
//! A `SteadyBlock` cursor style is used for the text prompt; the cursor is only
//! shown while a prompt is open.

mod component;
mod components;
mod event;
mod ui;

use log::info;
use std::io::stdout;

use crossterm::cursor::SetCursorStyle;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Effect, update};
use crate::core::state::App;
use crate::core::view::view;
use crate::tui::event::next_event;

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableBracketedPaste, SetCursorStyle::SteadyBlock)?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, SetCursorStyle::DefaultUserShape);
    }
}

pub fn run(mut app: App) -> std::io::Result<()> {
    let mut terminal = ratatui::init();
    let guard = TerminalModeGuard::new();

    let result = event_loop(&mut terminal, &mut app);

    drop(guard);
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App) -> std::io::Result<()> {
    let mut needs_redraw = true; // Force first frame
    loop {
        if needs_redraw {
            let model = view(app);
            terminal.draw(|f| ui::draw_ui(f, &model))?;
            needs_redraw = false;
        }

        let Some(action) = next_event()?.into_action() else {
            // Resize just needs a redraw
            needs_redraw = true;
            continue;
        };
        match update(app, action) {
            Effect::Quit => {
                info!("Quit requested");
                return Ok(());
            }
            Effect::Redraw => needs_redraw = true,
            Effect::None => {}
        }
    }
}
