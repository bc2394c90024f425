//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//! Kept minimal — all intelligence lives in the pure layers.
//!
//! The loop is strictly synchronous: draw, block on the next key, map it to
//! a semantic action for the focused area, run one transition to
//! completion. No threads, no channels, no timers.

use std::io;

use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::ledger::Ledger;

use super::state::{Action, App, Focus};
use super::update::update;
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a key event to a semantic Action for the focused input area.
///
/// Routing depends on focus: inside a text field most characters are input,
/// while on the roster they are commands. Returns None for keys that don't
/// map to anything.
pub fn map_key(key: KeyEvent, focus: Focus) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    // Focus movement works everywhere
    match key.code {
        KeyCode::Tab => return Some(Action::FocusNext),
        KeyCode::BackTab => return Some(Action::FocusPrev),
        KeyCode::Esc => return Some(Action::Back),
        _ => {}
    }

    match focus {
        Focus::Roster => match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
            KeyCode::Enter => Some(Action::SelectUnderCursor),
            KeyCode::Char('a') => Some(Action::ToggleAddForm),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        },

        // Text and amount fields: characters are input, Enter submits.
        // Amount fields additionally filter to digits in the pure layer.
        Focus::AddName | Focus::AddImage | Focus::BillTotal | Focus::BillUserPaid => {
            match key.code {
                KeyCode::Enter => Some(Action::Submit),
                KeyCode::Backspace => Some(Action::Backspace),
                KeyCode::Char(c) => Some(Action::Input(c)),
                _ => None,
            }
        }

        Focus::BillPayer => match key.code {
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right => Some(Action::TogglePayer),
            _ => None,
        },
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the TUI over an initial ledger until the user quits.
pub fn run(ledger: Ledger) -> io::Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let mut app = App::new(ledger);

    loop {
        terminal.draw(|frame| render(&app, frame))?;

        if app.should_quit {
            break;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(action) = map_key(key, app.focus) {
                    update(&mut app, &action);
                }
            }
            _ => {} // ignore releases, mouse, resize (redrawn next tick)
        }
    }

    restore_terminal()?;
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
