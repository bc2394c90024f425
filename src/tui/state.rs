//! TUI state algebra: pure types, zero effects.
//!
//! The [`App`] model wraps the domain ledger with the transient view state
//! the terminal needs: a roster cursor, the focused input area, and the two
//! form drafts. The transition function and the rendering layer both program
//! against these types.

use crate::ledger::Ledger;
use crate::split::BillDraft;
use crate::types::AVATAR_BASE;

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
///
/// The ledger is the domain state; everything else is view state that the
/// ledger never needs to know about. Drafts are only meaningful while their
/// pane is open (`ledger.show_add_friend()` / `ledger.selected()`).
#[derive(Debug, Clone, PartialEq)]
pub struct App {
    /// Domain state: roster, selection, add-form visibility.
    pub ledger: Ledger,
    /// Focused row in the friends list.
    pub cursor: usize,
    /// Which input area receives keystrokes.
    pub focus: Focus,
    /// Draft of the add-friend form.
    pub add_draft: AddFriendDraft,
    /// Draft of the split-bill form.
    pub bill_draft: BillDraft,
    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

impl App {
    /// Create an App over an initial ledger, focus on the roster.
    pub fn new(ledger: Ledger) -> Self {
        App {
            ledger,
            cursor: 0,
            focus: Focus::Roster,
            add_draft: AddFriendDraft::new(),
            bill_draft: BillDraft::new(),
            should_quit: false,
        }
    }
}

// ============================================================================
// FOCUS
// ============================================================================

/// The input area keystrokes are routed to.
///
/// Only areas whose pane is currently open are reachable; focus falls back
/// to the roster whenever a pane closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The friends list.
    Roster,
    /// Add-friend form: name field.
    AddName,
    /// Add-friend form: avatar reference field.
    AddImage,
    /// Split-bill form: bill total field.
    BillTotal,
    /// Split-bill form: user-paid field.
    BillUserPaid,
    /// Split-bill form: payer choice.
    BillPayer,
}

impl Focus {
    /// Whether this focus is a free-text field (name/image).
    pub fn is_text_field(self) -> bool {
        matches!(self, Focus::AddName | Focus::AddImage)
    }

    /// Whether this focus is a digits-only amount field.
    pub fn is_amount_field(self) -> bool {
        matches!(self, Focus::BillTotal | Focus::BillUserPaid)
    }
}

// ============================================================================
// DRAFTS
// ============================================================================

/// Draft state of the add-friend form: two text buffers.
///
/// The image field starts pre-filled with the default avatar base, as the
/// reference form does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddFriendDraft {
    /// Friend name, as typed.
    pub name: String,
    /// Avatar base reference, as typed.
    pub image: String,
}

impl AddFriendDraft {
    /// Fresh draft: empty name, default avatar base.
    pub fn new() -> Self {
        AddFriendDraft {
            name: String::new(),
            image: AVATAR_BASE.to_string(),
        }
    }
}

impl Default for AddFriendDraft {
    fn default() -> Self {
        AddFriendDraft::new()
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
///
/// The effects layer maps key presses to Actions (focus-aware); the
/// transition function decides what each Action means for the current focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Move the roster cursor up.
    MoveUp,
    /// Move the roster cursor down.
    MoveDown,
    /// Select (or deselect) the friend under the cursor.
    SelectUnderCursor,
    /// Open or close the add-friend form.
    ToggleAddForm,
    /// Move focus to the next open input area.
    FocusNext,
    /// Move focus to the previous open input area.
    FocusPrev,
    /// Type a character into the focused field.
    Input(char),
    /// Delete the last character of the focused field.
    Backspace,
    /// Submit the focused form.
    Submit,
    /// Flip the payer choice.
    TogglePayer,
    /// Return focus to the roster.
    Back,
    /// Quit the application.
    Quit,
}

// ============================================================================
// TESTS
// ============================================================================
