//! Bill-split calculator: pure draft state → settlement delta.
//!
//! A [`BillDraft`] holds what the user has typed into the split form. Amount
//! fields are raw digit buffers so that "nothing entered" and "zero entered"
//! can both be represented; submission treats them the same way the
//! reference UI treats an empty field. The only derived values are the
//! friend's share and the signed settlement delta handed to
//! `Ledger::apply_split`.

use crate::types::Payer;

/// Draft state of the split-bill form.
///
/// Reset whenever the selected friend changes; discarded on submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BillDraft {
    total: String,
    user_paid: String,
    payer: Payer,
}

impl BillDraft {
    /// Fresh empty draft: no amounts, user pays.
    pub fn new() -> Self {
        BillDraft::default()
    }

    // ------------------------------------------------------------------
    // Field access
    // ------------------------------------------------------------------

    /// Raw bill-total buffer, as typed.
    pub fn total_text(&self) -> &str {
        &self.total
    }

    /// Raw user-paid buffer, as typed.
    pub fn user_paid_text(&self) -> &str {
        &self.user_paid
    }

    /// Who is recorded as paying the bill.
    pub fn payer(&self) -> Payer {
        self.payer
    }

    /// Bill total as an amount, or None while the field is empty.
    pub fn total(&self) -> Option<i64> {
        parse_amount(&self.total)
    }

    /// User-paid amount, or None while the field is empty.
    pub fn user_paid(&self) -> Option<i64> {
        parse_amount(&self.user_paid)
    }

    /// The friend's share: `total - user_paid`, with an unset user amount
    /// treated as zero. None while the total is empty (the derived field
    /// stays blank until a bill value exists).
    pub fn friend_share(&self) -> Option<i64> {
        let total = self.total()?;
        Some(total - self.user_paid().unwrap_or(0))
    }

    // ------------------------------------------------------------------
    // Edits
    // ------------------------------------------------------------------

    /// Append a digit to the bill total.
    pub fn push_total_digit(&mut self, c: char) {
        if c.is_ascii_digit() {
            self.total.push(c);
        }
    }

    /// Delete the last digit of the bill total.
    pub fn backspace_total(&mut self) {
        self.total.pop();
    }

    /// Append a digit to the user-paid amount.
    ///
    /// The keystroke is rejected outright (previous value kept) when the
    /// resulting amount would exceed the bill total, so `user_paid <= total`
    /// holds whenever both are set.
    pub fn push_user_paid_digit(&mut self, c: char) {
        if !c.is_ascii_digit() {
            return;
        }
        let mut candidate = self.user_paid.clone();
        candidate.push(c);

        // An unset total counts as zero here, so nothing is accepted until
        // a bill value exists.
        if let Some(amount) = parse_amount(&candidate)
            && amount <= self.total().unwrap_or(0)
        {
            self.user_paid = candidate;
        }
    }

    /// Delete the last digit of the user-paid amount.
    pub fn backspace_user_paid(&mut self) {
        self.user_paid.pop();
    }

    /// Flip the payer between user and friend.
    pub fn toggle_payer(&mut self) {
        self.payer = match self.payer {
            Payer::User => Payer::Friend,
            Payer::Friend => Payer::User,
        };
    }

    // ------------------------------------------------------------------
    // Submission
    // ------------------------------------------------------------------

    /// The signed delta to apply to the selected friend's balance, or None
    /// when the draft is not submittable.
    ///
    /// Rejected while the total or the user-paid amount is unset or zero —
    /// a zero is "not entered", matching the reference behavior. When the
    /// user paid, the friend owes their share (positive delta); when the
    /// friend paid, the user owes their own share (negative delta).
    pub fn settlement_delta(&self) -> Option<i64> {
        let total = self.total().filter(|&v| v != 0)?;
        let user_paid = self.user_paid().filter(|&v| v != 0)?;

        Some(match self.payer {
            Payer::User => total - user_paid,
            Payer::Friend => -user_paid,
        })
    }
}

/// Parse a digit buffer into an amount. Empty means unset.
fn parse_amount(text: &str) -> Option<i64> {
    if text.is_empty() { None } else { text.parse().ok() }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(total: &str, user_paid: &str, payer: Payer) -> BillDraft {
        let mut d = BillDraft::new();
        for c in total.chars() {
            d.push_total_digit(c);
        }
        for c in user_paid.chars() {
            d.push_user_paid_digit(c);
        }
        if payer == Payer::Friend {
            d.toggle_payer();
        }
        d
    }

    // -- settlement delta --

    #[test]
    fn user_pays_friend_owes_their_share() {
        assert_eq!(draft("100", "40", Payer::User).settlement_delta(), Some(60));
    }

    #[test]
    fn friend_pays_user_owes_their_share() {
        assert_eq!(
            draft("100", "40", Payer::Friend).settlement_delta(),
            Some(-40)
        );
    }

    #[test]
    fn empty_total_rejects_submission() {
        assert_eq!(draft("", "40", Payer::User).settlement_delta(), None);
    }

    #[test]
    fn zero_total_rejects_submission() {
        assert_eq!(draft("0", "0", Payer::User).settlement_delta(), None);
    }

    #[test]
    fn empty_user_paid_rejects_submission() {
        assert_eq!(draft("100", "", Payer::User).settlement_delta(), None);
    }

    #[test]
    fn zero_user_paid_rejects_submission() {
        // A typed zero counts as "not entered", same as the reference UI.
        assert_eq!(draft("100", "0", Payer::User).settlement_delta(), None);
    }

    // -- clamping --

    #[test]
    fn user_paid_cannot_exceed_total() {
        let mut d = draft("50", "4", Payer::User);
        // "45" would be fine, "452" would not — the keystroke is dropped.
        d.push_user_paid_digit('5');
        d.push_user_paid_digit('2');
        assert_eq!(d.user_paid(), Some(45));
    }

    #[test]
    fn rejected_keystroke_keeps_previous_value() {
        let mut d = draft("30", "2", Payer::User);
        d.push_user_paid_digit('9'); // 29 ok
        d.push_user_paid_digit('9'); // 299 > 30, dropped
        assert_eq!(d.user_paid_text(), "29");
    }

    #[test]
    fn user_paid_digits_rejected_while_total_empty() {
        // No total yet: any amount would exceed it, so nothing is accepted.
        let mut d = BillDraft::new();
        d.push_user_paid_digit('5');
        assert_eq!(d.user_paid_text(), "");
    }

    // -- friend share --

    #[test]
    fn friend_share_is_remainder() {
        assert_eq!(draft("100", "40", Payer::User).friend_share(), Some(60));
    }

    #[test]
    fn friend_share_blank_without_total() {
        assert_eq!(BillDraft::new().friend_share(), None);
    }

    #[test]
    fn friend_share_treats_unset_user_paid_as_zero() {
        assert_eq!(draft("100", "", Payer::User).friend_share(), Some(100));
    }

    // -- edits --

    #[test]
    fn non_digits_are_ignored() {
        let mut d = BillDraft::new();
        d.push_total_digit('x');
        d.push_total_digit('-');
        d.push_total_digit('7');
        assert_eq!(d.total_text(), "7");
    }

    #[test]
    fn backspace_edits_buffers() {
        let mut d = draft("100", "40", Payer::User);
        d.backspace_total();
        d.backspace_user_paid();
        assert_eq!(d.total_text(), "10");
        assert_eq!(d.user_paid_text(), "4");
    }

    #[test]
    fn payer_toggles_back_and_forth() {
        let mut d = BillDraft::new();
        assert_eq!(d.payer(), Payer::User);
        d.toggle_payer();
        assert_eq!(d.payer(), Payer::Friend);
        d.toggle_payer();
        assert_eq!(d.payer(), Payer::User);
    }

    #[test]
    fn new_draft_is_empty_with_user_paying() {
        let d = BillDraft::new();
        assert_eq!(d.total(), None);
        assert_eq!(d.user_paid(), None);
        assert_eq!(d.payer(), Payer::User);
    }
}
