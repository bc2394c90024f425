//! Ledger state: roster, selection, add-form visibility.
//!
//! This is the whole of the application's domain state, behind four
//! transitions driven synchronously by user events. Invalid input is
//! absorbed as a no-op rather than surfaced — the form simply stays open
//! for correction. Nothing here touches the terminal.

use crate::types::{Friend, FriendId, avatar_ref, seed_roster};

/// Single-owner state container for the friends ledger.
///
/// Transitions:
/// - [`toggle_add_friend_form`](Ledger::toggle_add_friend_form)
/// - [`add_friend`](Ledger::add_friend)
/// - [`select_friend`](Ledger::select_friend)
/// - [`apply_split`](Ledger::apply_split)
///
/// The roster is append-only and insertion-ordered; ids are unique and
/// assigned by an internal monotonic generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    friends: Vec<Friend>,
    selected: Option<FriendId>,
    show_add_friend: bool,
    next_id: u64,
}

impl Ledger {
    /// Create a ledger from an initial roster.
    ///
    /// The id generator starts above the largest seeded id, so freshly
    /// generated ids can never collide with existing ones.
    pub fn new(friends: Vec<Friend>) -> Self {
        let next_id = friends.iter().map(|f| f.id.0 + 1).max().unwrap_or(1);
        Ledger {
            friends,
            selected: None,
            show_add_friend: false,
            next_id,
        }
    }

    /// Create a ledger seeded with the built-in demo roster.
    pub fn seeded() -> Self {
        Ledger::new(seed_roster())
    }

    // ------------------------------------------------------------------
    // Snapshot accessors
    // ------------------------------------------------------------------

    /// The roster, in insertion order.
    pub fn friends(&self) -> &[Friend] {
        &self.friends
    }

    /// Id of the currently selected friend, if any.
    pub fn selected_id(&self) -> Option<FriendId> {
        self.selected
    }

    /// The currently selected friend, if any.
    pub fn selected(&self) -> Option<&Friend> {
        let id = self.selected?;
        self.friends.iter().find(|f| f.id == id)
    }

    /// Whether the add-friend form is visible.
    pub fn show_add_friend(&self) -> bool {
        self.show_add_friend
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    /// Flip the add-friend form visibility. No other side effects.
    pub fn toggle_add_friend_form(&mut self) {
        self.show_add_friend = !self.show_add_friend;
    }

    /// Add a friend with a fresh id and a settled balance.
    ///
    /// The avatar reference is composed from `image_base` plus the new id.
    /// Rejected as a total no-op (form visibility included) when either
    /// argument is empty; returns the new id otherwise.
    pub fn add_friend(&mut self, name: &str, image_base: &str) -> Option<FriendId> {
        if name.is_empty() || image_base.is_empty() {
            return None;
        }

        let id = FriendId(self.next_id);
        self.next_id += 1;

        self.friends.push(Friend {
            id,
            name: name.to_string(),
            image: avatar_ref(image_base, id),
            balance: 0,
        });
        self.show_add_friend = false;

        Some(id)
    }

    /// Select a friend, or deselect if it is already the selection.
    ///
    /// Always hides the add-friend form, even on a deselect. Ids not in the
    /// roster are ignored.
    pub fn select_friend(&mut self, id: FriendId) {
        if !self.friends.iter().any(|f| f.id == id) {
            return;
        }
        self.selected = if self.selected == Some(id) { None } else { Some(id) };
        self.show_add_friend = false;
    }

    /// Settle a split: add `delta` to the selected friend's balance.
    ///
    /// Only valid for the current selection; any other id is a no-op. Every
    /// other friend is left untouched. Clears the selection afterwards.
    pub fn apply_split(&mut self, id: FriendId, delta: i64) {
        if self.selected != Some(id) {
            return;
        }
        if let Some(friend) = self.friends.iter_mut().find(|f| f.id == id) {
            friend.balance += delta;
        }
        self.selected = None;
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AVATAR_BASE;

    fn clark_id() -> FriendId {
        FriendId(118836)
    }

    fn sarah_id() -> FriendId {
        FriendId(933372)
    }

    // -- add_friend --

    #[test]
    fn add_friend_appends_in_order() {
        let mut ledger = Ledger::seeded();
        ledger.add_friend("Maya", AVATAR_BASE).unwrap();
        ledger.add_friend("Tom", AVATAR_BASE).unwrap();

        let names: Vec<_> = ledger.friends().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["Clark", "Sarah", "Anthony", "Maya", "Tom"]);
    }

    #[test]
    fn add_friend_grows_roster_by_one_per_call() {
        let mut ledger = Ledger::seeded();
        for i in 0..10 {
            assert_eq!(ledger.friends().len(), 3 + i);
            ledger.add_friend("Maya", AVATAR_BASE).unwrap();
        }
        assert_eq!(ledger.friends().len(), 13);
    }

    #[test]
    fn add_friend_ids_are_unique() {
        let mut ledger = Ledger::seeded();
        for _ in 0..20 {
            ledger.add_friend("Maya", AVATAR_BASE).unwrap();
        }
        let mut ids: Vec<_> = ledger.friends().iter().map(|f| f.id.0).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), ledger.friends().len());
    }

    #[test]
    fn add_friend_starts_settled_with_composed_avatar() {
        let mut ledger = Ledger::seeded();
        let id = ledger.add_friend("Maya", AVATAR_BASE).unwrap();

        let maya = ledger.friends().last().unwrap();
        assert_eq!(maya.id, id);
        assert_eq!(maya.balance, 0);
        assert_eq!(maya.image, format!("{}?u={}", AVATAR_BASE, id));
    }

    #[test]
    fn add_friend_hides_add_form() {
        let mut ledger = Ledger::seeded();
        ledger.toggle_add_friend_form();
        assert!(ledger.show_add_friend());

        ledger.add_friend("Maya", AVATAR_BASE).unwrap();
        assert!(!ledger.show_add_friend());
    }

    #[test]
    fn add_friend_empty_name_is_total_noop() {
        let mut ledger = Ledger::seeded();
        ledger.toggle_add_friend_form();

        let before = ledger.clone();
        assert!(ledger.add_friend("", AVATAR_BASE).is_none());

        // Not even the form flag moves on rejection.
        assert_eq!(ledger, before);
        assert!(ledger.show_add_friend());
    }

    #[test]
    fn add_friend_empty_image_is_total_noop() {
        let mut ledger = Ledger::seeded();
        let before = ledger.clone();
        assert!(ledger.add_friend("Maya", "").is_none());
        assert_eq!(ledger, before);
    }

    // -- toggle_add_friend_form --

    #[test]
    fn toggle_flips_visibility_only() {
        let mut ledger = Ledger::seeded();
        ledger.select_friend(clark_id());

        ledger.toggle_add_friend_form();
        assert!(ledger.show_add_friend());
        // Selection is untouched by the toggle.
        assert_eq!(ledger.selected_id(), Some(clark_id()));

        ledger.toggle_add_friend_form();
        assert!(!ledger.show_add_friend());
    }

    // -- select_friend --

    #[test]
    fn select_sets_selection() {
        let mut ledger = Ledger::seeded();
        ledger.select_friend(clark_id());
        assert_eq!(ledger.selected().unwrap().name, "Clark");
    }

    #[test]
    fn select_same_friend_twice_deselects() {
        let mut ledger = Ledger::seeded();
        ledger.select_friend(clark_id());
        ledger.select_friend(clark_id());
        assert!(ledger.selected_id().is_none());
    }

    #[test]
    fn select_different_friend_switches() {
        let mut ledger = Ledger::seeded();
        ledger.select_friend(clark_id());
        ledger.select_friend(sarah_id());
        assert_eq!(ledger.selected_id(), Some(sarah_id()));
    }

    #[test]
    fn select_hides_add_form_even_on_deselect() {
        let mut ledger = Ledger::seeded();
        ledger.select_friend(clark_id());

        ledger.toggle_add_friend_form();
        ledger.select_friend(clark_id()); // deselect
        assert!(!ledger.show_add_friend());
        assert!(ledger.selected_id().is_none());
    }

    #[test]
    fn select_unknown_id_is_noop() {
        let mut ledger = Ledger::seeded();
        ledger.select_friend(FriendId(42));
        assert!(ledger.selected_id().is_none());
    }

    // -- apply_split --

    #[test]
    fn apply_split_changes_only_target_balance() {
        let mut ledger = Ledger::seeded();
        ledger.select_friend(clark_id());

        let before: Vec<_> = ledger.friends().to_vec();
        ledger.apply_split(clark_id(), 30);

        for (old, new) in before.iter().zip(ledger.friends()) {
            if new.id == clark_id() {
                assert_eq!(new.balance, old.balance + 30);
            } else {
                assert_eq!(new, old);
            }
        }
    }

    #[test]
    fn apply_split_clears_selection() {
        let mut ledger = Ledger::seeded();
        ledger.select_friend(clark_id());
        ledger.apply_split(clark_id(), 30);
        assert!(ledger.selected_id().is_none());
    }

    #[test]
    fn apply_split_accepts_negative_delta() {
        let mut ledger = Ledger::seeded();
        ledger.select_friend(sarah_id());
        ledger.apply_split(sarah_id(), -50);
        assert_eq!(ledger.friends()[1].balance, -30);
    }

    #[test]
    fn apply_split_without_matching_selection_is_noop() {
        let mut ledger = Ledger::seeded();
        let before = ledger.clone();

        // No selection at all.
        ledger.apply_split(clark_id(), 30);
        assert_eq!(ledger, before);

        // Selection on a different friend.
        ledger.select_friend(sarah_id());
        ledger.apply_split(clark_id(), 30);
        assert_eq!(ledger.friends(), before.friends());
        assert_eq!(ledger.selected_id(), Some(sarah_id()));
    }

    // -- id generator --

    #[test]
    fn generated_ids_start_above_seeded_ids() {
        let mut ledger = Ledger::seeded();
        let id = ledger.add_friend("Maya", AVATAR_BASE).unwrap();
        assert!(id.0 > 933372);
    }
}
