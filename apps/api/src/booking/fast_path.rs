//! First-fit search for enough rooms on a single floor.
//!
//! Picks the first floor (0 upwards) holding at least `required` available
//! rooms and takes its first `required` available rooms by position. This is
//! not cost-minimal within the floor: on `{101, 105, 106}` with `required = 2`
//! it returns `{101, 105}` (cost 4) rather than `{105, 106}` (cost 1).

use crate::booking::availability::Availability;
use crate::booking::layout::{RoomId, FLOOR_COUNT};

/// A same-floor pick: the 0-based floor and its rooms, ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloorPick {
    pub floor: usize,
    pub rooms: Vec<RoomId>,
}

pub fn first_fit_floor(required: usize, availability: &Availability) -> Option<FloorPick> {
    if required == 0 {
        return None;
    }
    (0..FLOOR_COUNT).find_map(|floor| {
        let mut rooms = availability.available_on_floor(floor);
        if rooms.len() < required {
            return None;
        }
        rooms.truncate(required);
        Some(FloorPick { floor, rooms })
    })
}
