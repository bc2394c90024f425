//! Startup roster configuration.
//!
//! An optional JSON file replaces the built-in demo roster: an array of
//! `{"name": ..., "image": ..., "balance": ...}` entries, image and balance
//! optional. Read once at startup, never written back — this is
//! configuration, not persistence.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::types::{AVATAR_BASE, Friend, FriendId, RosterEntry, avatar_ref};

/// Why a roster file could not be turned into a starting roster.
#[derive(Debug)]
pub enum RosterFileError {
    /// The file could not be read.
    Io(std::io::Error),
    /// The file is not a valid JSON array of roster entries.
    Parse(serde_json::Error),
    /// The file parsed but contains no friends.
    Empty,
    /// An entry has an empty name or an empty image reference.
    BlankField { index: usize },
}

impl fmt::Display for RosterFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterFileError::Io(e) => write!(f, "cannot read roster file: {}", e),
            RosterFileError::Parse(e) => write!(f, "invalid roster file: {}", e),
            RosterFileError::Empty => write!(f, "roster file contains no friends"),
            RosterFileError::BlankField { index } => {
                write!(f, "roster entry {} has an empty name or image", index)
            }
        }
    }
}

impl std::error::Error for RosterFileError {}

/// Load a starting roster from a JSON file.
///
/// Ids are assigned here, sequentially from 1, keeping the uniqueness
/// invariant out of the file format entirely.
pub fn load_roster(path: &Path) -> Result<Vec<Friend>, RosterFileError> {
    let text = fs::read_to_string(path).map_err(RosterFileError::Io)?;
    let entries: Vec<RosterEntry> =
        serde_json::from_str(&text).map_err(RosterFileError::Parse)?;

    if entries.is_empty() {
        return Err(RosterFileError::Empty);
    }

    let mut friends = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        let base = entry.image.unwrap_or_else(|| AVATAR_BASE.to_string());
        if entry.name.is_empty() || base.is_empty() {
            return Err(RosterFileError::BlankField { index });
        }

        let id = FriendId(index as u64 + 1);
        friends.push(Friend {
            id,
            name: entry.name,
            image: avatar_ref(&base, id),
            balance: entry.balance,
        });
    }

    Ok(friends)
}

// ============================================================================
// TESTS
// ============================================================================
