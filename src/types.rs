//! Domain types for split-tab.
//!
//! A `Friend` is a roster entry with a stable opaque id, a display name, an
//! avatar reference, and a signed balance. Sign convention everywhere:
//! positive = the friend owes the user, negative = the user owes the friend,
//! zero = settled.

use std::fmt;

use serde::Deserialize;

// ============================================================================
// PRIMITIVES
// ============================================================================

/// Opaque, stable friend identifier.
///
/// Assigned once at creation by the ledger's generator, never reassigned.
/// Unique across the roster at all times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FriendId(pub u64);

impl fmt::Display for FriendId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Base avatar reference used when a friend is added without an explicit one.
///
/// The friend's id is appended as a query parameter, which is enough to give
/// every roster entry a distinct display resource. Reachability is never
/// checked.
pub const AVATAR_BASE: &str = "https://i.pravatar.cc/48";

/// Compose a per-friend avatar reference from a base and the friend's id.
pub fn avatar_ref(base: &str, id: FriendId) -> String {
    format!("{}?u={}", base, id)
}

// ============================================================================
// FRIEND
// ============================================================================

/// One roster entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Friend {
    /// Stable opaque identifier.
    pub id: FriendId,
    /// Display name, immutable after creation.
    pub name: String,
    /// Avatar resource reference.
    pub image: String,
    /// Signed balance in whole currency units.
    pub balance: i64,
}

impl Friend {
    /// One-line settlement summary for display.
    ///
    /// Exactly one of three mutually exclusive messages, keyed on the sign
    /// of the balance.
    pub fn settlement_summary(&self) -> String {
        if self.balance < 0 {
            format!("You owe {} ${}", self.name, -self.balance)
        } else if self.balance > 0 {
            format!("{} owes you ${}", self.name, self.balance)
        } else {
            format!("You and {} are even", self.name)
        }
    }
}

/// Who covered the bill total up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Payer {
    /// The user paid; the friend will owe their share.
    #[default]
    User,
    /// The friend paid; the user will owe their share.
    Friend,
}

// ============================================================================
// SEED ROSTER
// ============================================================================

/// The built-in demo roster used when no roster file is given.
pub fn seed_roster() -> Vec<Friend> {
    [
        (118836, "Clark", -7),
        (933372, "Sarah", 20),
        (499476, "Anthony", 0),
    ]
    .into_iter()
    .map(|(raw, name, balance)| {
        let id = FriendId(raw);
        Friend {
            id,
            name: name.to_string(),
            image: avatar_ref(AVATAR_BASE, id),
            balance,
        }
    })
    .collect()
}

// ============================================================================
// ROSTER FILE ENTRIES
// ============================================================================

/// One entry of a user-supplied roster file.
///
/// Ids are deliberately absent: they are assigned by the ledger's generator
/// at load time, so id uniqueness is enforced in exactly one place.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterEntry {
    /// Display name.
    pub name: String,
    /// Avatar base reference; defaults to [`AVATAR_BASE`].
    #[serde(default)]
    pub image: Option<String>,
    /// Starting balance; defaults to settled.
    #[serde(default)]
    pub balance: i64,
}

// ============================================================================
// TESTS
// ============================================================================
