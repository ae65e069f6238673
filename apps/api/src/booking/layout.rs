//! The fixed room grid of the hotel and its room numbering.
//!
//! # Encoding
//! - floors 1–9: `room_id = floor * 100 + position`, position 1–10
//! - floor 10:   `room_id = 1000 + position`, position 1–7
//!
//! Decoding is applied uniformly (`id / 100 - 1`, `id % 100 - 1`), which maps
//! floor-10 rooms to floor index 9 and positions 0–6 as well.

use std::fmt;

use serde::Serialize;

pub const FLOOR_COUNT: usize = 10;
pub const ROOMS_PER_FLOOR: usize = 10;
pub const TOP_FLOOR_ROOMS: usize = 7;
pub const TOTAL_ROOMS: usize = (FLOOR_COUNT - 1) * ROOMS_PER_FLOOR + TOP_FLOOR_ROOMS;

/// Canonical room identifier, e.g. `101`, `510`, `1007`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RoomId(u16);

impl RoomId {
    /// Builds the identifier for a 0-based `(floor, position)` cell.
    /// Returns `None` outside the layout.
    pub fn from_cell(floor: usize, position: usize) -> Option<Self> {
        if position >= floor_len(floor)? {
            return None;
        }
        Some(RoomId(((floor + 1) * 100 + position + 1) as u16))
    }

    /// Validates a raw identifier against the layout.
    pub fn parse(raw: u16) -> Option<Self> {
        let candidate = RoomId(raw);
        let (floor, position) = candidate.decode();
        // Reject anything decode would not map back to the same cell (e.g. 100, 111, 1008).
        match RoomId::from_cell(floor, position) {
            Some(id) if id == candidate => Some(id),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn value(self) -> u16 {
        self.0
    }

    /// `(floor, position)`, both 0-based.
    pub fn decode(self) -> (usize, usize) {
        let raw = self.0 as usize;
        let floor = (raw / 100).saturating_sub(1);
        let position = (raw % 100).saturating_sub(1);
        (floor, position)
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of rooms on a 0-based floor, or `None` past the top floor.
pub fn floor_len(floor: usize) -> Option<usize> {
    match floor {
        f if f < FLOOR_COUNT - 1 => Some(ROOMS_PER_FLOOR),
        f if f == FLOOR_COUNT - 1 => Some(TOP_FLOOR_ROOMS),
        _ => None,
    }
}

/// Rooms of a 0-based floor, ascending by position. Empty past the top floor.
pub fn rooms_of_floor(floor: usize) -> Vec<RoomId> {
    let len = floor_len(floor).unwrap_or(0);
    (0..len)
        .filter_map(|position| RoomId::from_cell(floor, position))
        .collect()
}

/// Every room in the hotel, ascending by identifier.
pub fn all_rooms() -> impl Iterator<Item = RoomId> {
    (0..FLOOR_COUNT).flat_map(rooms_of_floor)
}
