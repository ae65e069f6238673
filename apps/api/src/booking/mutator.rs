//! Commits a selection: the next availability state and the booking record.

use serde::Serialize;

use crate::booking::availability::Availability;
use crate::booking::layout::RoomId;
use crate::booking::travel_time::travel_time;

/// The last successful booking: rooms in selection order and their travel time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingRecord {
    pub booked: Vec<RoomId>,
    pub travel_time: u32,
}

impl BookingRecord {
    /// Travel time is recomputed from the rooms, never carried over from the search.
    pub fn from_rooms(rooms: &[RoomId]) -> Self {
        BookingRecord {
            booked: rooms.to_vec(),
            travel_time: travel_time(rooms),
        }
    }

    pub fn contains(&self, room: RoomId) -> bool {
        self.booked.contains(&room)
    }
}

/// Returns `availability` with every room of `rooms` marked unavailable.
pub fn apply(rooms: &[RoomId], availability: &Availability) -> Availability {
    let mut next = availability.clone();
    for &room in rooms {
        next.set(room, false);
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::layout::TOTAL_ROOMS;

    fn ids(raw: &[u16]) -> Vec<RoomId> {
        raw.iter()
            .map(|&r| RoomId::parse(r).expect("room in layout"))
            .collect()
    }

    #[test]
    fn test_apply_marks_selection_unavailable() {
        let before = Availability::all_available();
        let rooms = ids(&[101, 102, 103]);
        let after = apply(&rooms, &before);

        for room in &rooms {
            assert!(!after.is_available(*room));
        }
        assert!(after.is_available(ids(&[104])[0]));
        assert_eq!(after.available_count(), TOTAL_ROOMS - 3);
        assert_eq!(after.len(), TOTAL_ROOMS);
    }

    #[test]
    fn test_apply_leaves_input_untouched() {
        let before = Availability::all_available();
        let _ = apply(&ids(&[505]), &before);
        assert_eq!(before, Availability::all_available());
    }

    #[test]
    fn test_record_recomputes_travel_time() {
        let record = BookingRecord::from_rooms(&ids(&[101, 201]));
        assert_eq!(record.travel_time, 2);
        assert!(record.contains(ids(&[201])[0]));
        assert!(!record.contains(ids(&[301])[0]));
    }

    #[test]
    fn test_record_singleton_is_zero() {
        assert_eq!(BookingRecord::from_rooms(&ids(&[707])).travel_time, 0);
    }
}
