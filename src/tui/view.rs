//! Pure rendering: map App state to ratatui widget trees.
//!
//! One render function per pane; the top-level `render()` lays out the
//! frame and dispatches. Widget-building is pure (state in, widgets out);
//! the only effect is `Frame::render_widget()` writing to the terminal
//! buffer.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::types::{Friend, Payer};

use super::state::{App, Focus};
use super::theme;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the whole frame: title bar, sidebar, main pane, help line.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Min(0),    // content
        Constraint::Length(1), // help
    ])
    .split(area);

    frame.render_widget(render_title(), chunks[0]);
    frame.render_widget(render_help(app), chunks[2]);

    let columns = Layout::horizontal([
        Constraint::Length(42), // sidebar: roster + add form
        Constraint::Min(0),     // main: split form
    ])
    .split(chunks[1]);

    render_sidebar(app, frame, columns[0]);
    render_main(app, frame, columns[1]);
}

/// Title bar.
fn render_title() -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled("split-tab", theme::STYLE_TITLE)))
}

/// Help line showing the keybindings for the focused area.
fn render_help(app: &App) -> Paragraph<'static> {
    let help_text = match app.focus {
        Focus::Roster => "[j/k] move  [Enter] select/close  [a] add friend  [Tab] fields  [q] quit",
        Focus::AddName | Focus::AddImage => "[type] edit  [Enter] add  [Tab] next field  [Esc] back",
        Focus::BillTotal | Focus::BillUserPaid => {
            "[0-9] edit  [Enter] split  [Tab] next field  [Esc] back"
        }
        Focus::BillPayer => "[Space] switch payer  [Enter] split  [Tab] next field  [Esc] back",
    };

    Paragraph::new(Span::styled(help_text, theme::STYLE_HELP))
}

// ============================================================================
// SIDEBAR: ROSTER + ADD FORM
// ============================================================================

fn render_sidebar(app: &App, frame: &mut Frame, area: Rect) {
    if app.ledger.show_add_friend() {
        let rows = Layout::vertical([
            Constraint::Min(0),    // friends list
            Constraint::Length(5), // add-friend form
        ])
        .split(area);
        render_roster(app, frame, rows[0]);
        render_add_form(app, frame, rows[1]);
    } else {
        render_roster(app, frame, area);
    }
}

fn render_roster(app: &App, frame: &mut Frame, area: Rect) {
    let selected = app.ledger.selected_id();

    let lines: Vec<Line> = app
        .ledger
        .friends()
        .iter()
        .enumerate()
        .map(|(i, friend)| {
            let marker = if selected == Some(friend.id) { "▸ " } else { "  " };
            let name_style = if selected == Some(friend.id) {
                theme::STYLE_IMPORTANT
            } else {
                ratatui::style::Style::new()
            };

            let mut line = Line::from(vec![
                Span::styled(marker.to_string(), theme::STYLE_INTERACTIVE),
                Span::styled(format!("{:<10}", friend.name), name_style),
                balance_span(friend),
            ]);
            if app.focus == Focus::Roster && i == app.cursor {
                line = line.style(theme::STYLE_CURSOR);
            }
            line
        })
        .collect();

    let block = Block::new().borders(Borders::RIGHT).title("Friends");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// The three mutually exclusive settlement messages, color-coded.
fn balance_span(friend: &Friend) -> Span<'static> {
    let style = if friend.balance < 0 {
        theme::STYLE_OWED_BY_USER
    } else if friend.balance > 0 {
        theme::STYLE_OWED_TO_USER
    } else {
        theme::STYLE_DIM
    };
    Span::styled(friend.settlement_summary(), style)
}

fn render_add_form(app: &App, frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled("Add a friend", theme::STYLE_TITLE)),
        field_line("Name", &app.add_draft.name, app.focus == Focus::AddName),
        field_line("Image", &app.add_draft.image, app.focus == Focus::AddImage),
    ];

    let block = Block::new().borders(Borders::TOP | Borders::RIGHT);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

// ============================================================================
// MAIN PANE: SPLIT-BILL FORM
// ============================================================================

fn render_main(app: &App, frame: &mut Frame, area: Rect) {
    let Some(friend) = app.ledger.selected() else {
        let hint = Paragraph::new(Line::from(Span::styled(
            "  Select a friend to split a bill",
            theme::STYLE_DIM,
        )));
        frame.render_widget(hint, area);
        return;
    };

    let draft = &app.bill_draft;
    let friend_share = draft
        .friend_share()
        .map(|v| v.to_string())
        .unwrap_or_default();
    let payer_label = match draft.payer() {
        Payer::User => "You".to_string(),
        Payer::Friend => friend.name.clone(),
    };

    let lines = vec![
        Line::from(Span::styled(
            format!(" Split a bill with {}", friend.name),
            theme::STYLE_TITLE,
        )),
        Line::from(""),
        field_line("Bill value", draft.total_text(), app.focus == Focus::BillTotal),
        field_line(
            "Your expense",
            draft.user_paid_text(),
            app.focus == Focus::BillUserPaid,
        ),
        // Derived, never editable.
        Line::from(vec![
            Span::styled(format!(" {:<16}", format!("{}'s expense", friend.name)), theme::STYLE_DIM),
            Span::styled(friend_share, theme::STYLE_DIM),
        ]),
        field_line("Who pays", &payer_label, app.focus == Focus::BillPayer),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

// ============================================================================
// SHARED
// ============================================================================

/// One labeled form field, with a caret when focused.
fn field_line(label: &str, value: &str, focused: bool) -> Line<'static> {
    let value_style = if focused {
        theme::STYLE_FOCUSED_FIELD
    } else {
        ratatui::style::Style::new()
    };
    let caret = if focused { "▏" } else { "" };

    Line::from(vec![
        Span::styled(format!(" {:<16}", label), theme::STYLE_DIM),
        Span::styled(format!("{}{}", value, caret), value_style),
    ])
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AVATAR_BASE, FriendId, avatar_ref};

    fn friend(balance: i64) -> Friend {
        let id = FriendId(7);
        Friend {
            id,
            name: "Maya".to_string(),
            image: avatar_ref(AVATAR_BASE, id),
            balance,
        }
    }

    #[test]
    fn balance_colors_follow_sign() {
        assert_eq!(balance_span(&friend(-5)).style, theme::STYLE_OWED_BY_USER);
        assert_eq!(balance_span(&friend(5)).style, theme::STYLE_OWED_TO_USER);
        assert_eq!(balance_span(&friend(0)).style, theme::STYLE_DIM);
    }

    #[test]
    fn focused_field_carries_caret() {
        let line = field_line("Name", "Maya", true);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("Maya▏"));
    }

    #[test]
    fn unfocused_field_has_no_caret() {
        let line = field_line("Name", "Maya", false);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(!text.contains('▏'));
    }
}
