//! TUI color semantics and style constants.
//!
//! Pure data, consumed by the rendering layer for visual consistency.
//!
//! Color semantics:
//! - Green: the friend owes the user
//! - Red: the user owes the friend
//! - Cyan: interactive elements (selection marker, keybinding hints)
//! - Dim: de-emphasized (settled balances, field labels)
//! - Reversed: the roster row under the cursor
//! - Underlined: the form field receiving keystrokes

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// SEMANTIC STYLES
// ============================================================================

/// Friend owes the user — green.
pub const STYLE_OWED_TO_USER: Style = Style::new().fg(Color::Green);

/// User owes the friend — red.
pub const STYLE_OWED_BY_USER: Style = Style::new().fg(Color::Red);

/// Interactive element / keybinding hint — cyan.
pub const STYLE_INTERACTIVE: Style = Style::new().fg(Color::Cyan);

/// De-emphasized metadata — dark gray.
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

/// Important text — bold.
pub const STYLE_IMPORTANT: Style = Style::new().add_modifier(Modifier::BOLD);

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// Title bar / pane header.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Roster row under the cursor.
pub const STYLE_CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Form field currently receiving keystrokes.
pub const STYLE_FOCUSED_FIELD: Style = Style::new()
    .fg(Color::Cyan)
    .add_modifier(Modifier::UNDERLINED);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// TESTS
// ============================================================================
