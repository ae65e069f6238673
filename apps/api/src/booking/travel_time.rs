//! Travel time between the rooms of a booking.
//!
//! `cost = (max_floor - min_floor) * 2 + (max_position - min_position)`
//!
//! Changing floors weighs double relative to walking one position along a floor.
//! Integer arithmetic only; the result depends on the set of rooms, not their order.

use crate::booking::layout::RoomId;

pub const FLOOR_WEIGHT: u32 = 2;
pub const POSITION_WEIGHT: u32 = 1;

/// Bounding box of a room set in decoded `(floor, position)` space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    min_floor: usize,
    max_floor: usize,
    min_position: usize,
    max_position: usize,
}

impl Span {
    pub fn of(room: RoomId) -> Self {
        let (floor, position) = room.decode();
        Span {
            min_floor: floor,
            max_floor: floor,
            min_position: position,
            max_position: position,
        }
    }

    /// Smallest span covering `self` and `room`.
    pub fn extend(self, room: RoomId) -> Self {
        let (floor, position) = room.decode();
        Span {
            min_floor: self.min_floor.min(floor),
            max_floor: self.max_floor.max(floor),
            min_position: self.min_position.min(position),
            max_position: self.max_position.max(position),
        }
    }

    pub fn cost(&self) -> u32 {
        let vertical = (self.max_floor - self.min_floor) as u32 * FLOOR_WEIGHT;
        let horizontal = (self.max_position - self.min_position) as u32 * POSITION_WEIGHT;
        vertical + horizontal
    }
}

/// Travel time across `rooms`. Zero for empty and singleton sets.
pub fn travel_time(rooms: &[RoomId]) -> u32 {
    let mut iter = rooms.iter().copied();
    let Some(first) = iter.next() else {
        return 0;
    };
    iter.fold(Span::of(first), Span::extend).cost()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[u16]) -> Vec<RoomId> {
        raw.iter()
            .map(|&r| RoomId::parse(r).expect("room in layout"))
            .collect()
    }

    #[test]
    fn test_empty_and_singleton_are_zero() {
        assert_eq!(travel_time(&[]), 0);
        assert_eq!(travel_time(&ids(&[101])), 0);
        assert_eq!(travel_time(&ids(&[1007])), 0);
    }

    #[test]
    fn test_same_floor_is_horizontal_span() {
        assert_eq!(travel_time(&ids(&[101, 105])), 4);
        assert_eq!(travel_time(&ids(&[101, 102, 103])), 2);
    }

    #[test]
    fn test_vertical_moves_weigh_double() {
        assert_eq!(travel_time(&ids(&[101, 201])), 2);
        assert_eq!(travel_time(&ids(&[101, 1001])), 18);
    }

    #[test]
    fn test_combined_span() {
        // floors 0..2 (x2) + positions 0..9
        assert_eq!(travel_time(&ids(&[101, 310, 205])), 2 * 2 + 9);
    }

    #[test]
    fn test_skipped_occupied_room_still_counts_distance() {
        assert_eq!(travel_time(&ids(&[101, 103])), 2);
    }

    #[test]
    fn test_top_floor_uses_uniform_decoding() {
        // 907 -> (8, 6), 1007 -> (9, 6)
        assert_eq!(travel_time(&ids(&[907, 1007])), 2);
        assert_eq!(travel_time(&ids(&[1001, 1007])), 6);
    }

    #[test]
    fn test_order_does_not_matter() {
        let forward = ids(&[101, 204, 310, 402]);
        let mut reversed = forward.clone();
        reversed.reverse();
        let mut rotated = forward.clone();
        rotated.rotate_left(2);
        assert_eq!(travel_time(&forward), travel_time(&reversed));
        assert_eq!(travel_time(&forward), travel_time(&rotated));
    }

    #[test]
    fn test_extend_never_lowers_cost() {
        let span = Span::of(ids(&[305])[0]);
        let wider = span.extend(ids(&[101])[0]);
        assert!(wider.cost() >= span.cost());
        assert_eq!(wider.extend(ids(&[203])[0]), wider);
    }
}
