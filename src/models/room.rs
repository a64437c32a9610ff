//! Room model.
//!
//! Rooms are the spatial half of a slot: each (day, period, room) triple
//! can host at most one lecture. Capacity only matters for the S1 soft
//! rule; an over-full room degrades quality but stays valid.

use serde::{Deserialize, Serialize};

/// A lecture room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier.
    pub id: String,
    /// Seating capacity.
    pub capacity: u32,
}

impl Room {
    /// Creates a new room.
    pub fn new(id: impl Into<String>, capacity: u32) -> Self {
        Self {
            id: id.into(),
            capacity,
        }
    }
}
