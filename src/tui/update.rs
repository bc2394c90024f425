//! Pure state transitions: (App, Action) → next App.
//!
//! This is the core logic of the TUI, fully testable without a terminal.
//! Actions are routed by the focused input area; unhandled actions leave the
//! model unchanged (no-op). All domain mutation goes through the ledger's
//! transitions, so the contracts enforced there (silent rejection of invalid
//! input, selection lifecycle) hold regardless of what the shell sends.

use crate::split::BillDraft;

use super::state::{Action, AddFriendDraft, App, Focus};

/// Apply one action to the model.
pub fn update(app: &mut App, action: &Action) {
    match action {
        Action::Quit => {
            app.should_quit = true;
        }
        Action::Back => {
            app.focus = Focus::Roster;
        }
        Action::FocusNext => move_focus(app, 1),
        Action::FocusPrev => move_focus(app, -1),
        _ => match app.focus {
            Focus::Roster => update_roster(app, action),
            Focus::AddName | Focus::AddImage => update_add_form(app, action),
            Focus::BillTotal | Focus::BillUserPaid | Focus::BillPayer => {
                update_bill_form(app, action)
            }
        },
    }
}

// ============================================================================
// PER-AREA HANDLERS
// ============================================================================

/// Roster list: cursor movement, selection, opening the add form.
fn update_roster(app: &mut App, action: &Action) {
    let len = app.ledger.friends().len();

    match action {
        Action::MoveUp => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        Action::MoveDown => {
            app.cursor = if len == 0 { 0 } else { (app.cursor + 1).min(len - 1) };
        }
        Action::SelectUnderCursor => {
            let Some(friend) = app.ledger.friends().get(app.cursor) else {
                return;
            };
            let id = friend.id;
            let before = app.ledger.selected_id();
            app.ledger.select_friend(id);

            // The draft is scoped to one selected friend.
            if app.ledger.selected_id() != before {
                app.bill_draft = BillDraft::new();
            }
            app.focus = match app.ledger.selected_id() {
                Some(_) => Focus::BillTotal,
                None => Focus::Roster,
            };
        }
        Action::ToggleAddForm => {
            app.ledger.toggle_add_friend_form();
            if app.ledger.show_add_friend() {
                app.add_draft = AddFriendDraft::new();
                app.focus = Focus::AddName;
            }
        }
        _ => {}
    }
}

/// Add-friend form: text entry and submission.
fn update_add_form(app: &mut App, action: &Action) {
    match action {
        Action::Input(c) => {
            let field = match app.focus {
                Focus::AddName => &mut app.add_draft.name,
                _ => &mut app.add_draft.image,
            };
            if !c.is_control() {
                field.push(*c);
            }
        }
        Action::Backspace => {
            let field = match app.focus {
                Focus::AddName => &mut app.add_draft.name,
                _ => &mut app.add_draft.image,
            };
            field.pop();
        }
        Action::Submit => {
            // Rejection leaves the form open with the draft intact.
            if app
                .ledger
                .add_friend(&app.add_draft.name, &app.add_draft.image)
                .is_some()
            {
                app.add_draft = AddFriendDraft::new();
                app.focus = Focus::Roster;
            }
        }
        _ => {}
    }
}

/// Split-bill form: amount entry, payer choice, submission.
fn update_bill_form(app: &mut App, action: &Action) {
    match action {
        Action::Input(c) => match app.focus {
            Focus::BillTotal => app.bill_draft.push_total_digit(*c),
            Focus::BillUserPaid => app.bill_draft.push_user_paid_digit(*c),
            _ => {}
        },
        Action::Backspace => match app.focus {
            Focus::BillTotal => app.bill_draft.backspace_total(),
            Focus::BillUserPaid => app.bill_draft.backspace_user_paid(),
            _ => {}
        },
        Action::TogglePayer => {
            if app.focus == Focus::BillPayer {
                app.bill_draft.toggle_payer();
            }
        }
        Action::Submit => {
            // Rejected drafts keep the form open; nothing moves.
            let (Some(delta), Some(id)) =
                (app.bill_draft.settlement_delta(), app.ledger.selected_id())
            else {
                return;
            };
            app.ledger.apply_split(id, delta);
            app.bill_draft = BillDraft::new();
            app.focus = Focus::Roster;
        }
        _ => {}
    }
}

// ============================================================================
// FOCUS CYCLING
// ============================================================================

/// The input areas currently reachable, in Tab order.
fn focus_ring(app: &App) -> Vec<Focus> {
    let mut ring = vec![Focus::Roster];
    if app.ledger.show_add_friend() {
        ring.extend([Focus::AddName, Focus::AddImage]);
    }
    if app.ledger.selected_id().is_some() {
        ring.extend([Focus::BillTotal, Focus::BillUserPaid, Focus::BillPayer]);
    }
    ring
}

/// Step focus through the ring of open areas.
fn move_focus(app: &mut App, step: isize) {
    let ring = focus_ring(app);
    let len = ring.len() as isize;
    let current = ring.iter().position(|&f| f == app.focus).unwrap_or(0) as isize;
    app.focus = ring[((current + step).rem_euclid(len)) as usize];
}

// ============================================================================
// TESTS
// ============================================================================
