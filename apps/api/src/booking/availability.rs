//! Room availability: one boolean per room of the layout (`true` = available).
//!
//! Keys are exactly the layout's rooms; nothing adds or removes entries after
//! construction. Iteration is ascending by room id, which fixes the candidate
//! order the hotel-wide allocator enumerates in.

use std::collections::BTreeMap;

use rand::Rng;
use serde::Serialize;

use crate::booking::layout::{all_rooms, rooms_of_floor, RoomId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Availability {
    rooms: BTreeMap<RoomId, bool>,
}

impl Availability {
    /// Every room available. Startup state and the result of a reset.
    pub fn all_available() -> Self {
        Self::filled(true)
    }

    /// Every room occupied.
    #[cfg(test)]
    pub fn none_available() -> Self {
        Self::filled(false)
    }

    fn filled(value: bool) -> Self {
        Availability {
            rooms: all_rooms().map(|room| (room, value)).collect(),
        }
    }

    /// Each room independently occupied with probability `occupancy_rate`.
    pub fn random<R: Rng>(rng: &mut R, occupancy_rate: f64) -> Self {
        Availability {
            rooms: all_rooms()
                .map(|room| (room, rng.gen::<f64>() >= occupancy_rate))
                .collect(),
        }
    }

    /// Only the listed rooms available. Ids outside the layout are ignored.
    #[cfg(test)]
    pub fn only(available: impl IntoIterator<Item = RoomId>) -> Self {
        let mut state = Self::none_available();
        for room in available {
            state.set(room, true);
        }
        state
    }

    pub fn is_available(&self, room: RoomId) -> bool {
        self.rooms.get(&room).copied().unwrap_or(false)
    }

    /// Updates an existing entry. Returns `false` if `room` is not in the layout.
    pub fn set(&mut self, room: RoomId, available: bool) -> bool {
        match self.rooms.get_mut(&room) {
            Some(slot) => {
                *slot = available;
                true
            }
            None => false,
        }
    }

    /// Available rooms hotel-wide, ascending by id.
    pub fn available_rooms(&self) -> Vec<RoomId> {
        self.rooms
            .iter()
            .filter(|&(_, &available)| available)
            .map(|(&room, _)| room)
            .collect()
    }

    /// Available rooms of a 0-based floor, ascending by position.
    pub fn available_on_floor(&self, floor: usize) -> Vec<RoomId> {
        rooms_of_floor(floor)
            .into_iter()
            .filter(|&room| self.is_available(room))
            .collect()
    }

    pub fn available_count(&self) -> usize {
        self.rooms.values().filter(|&&available| available).count()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::layout::TOTAL_ROOMS;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn room(raw: u16) -> RoomId {
        RoomId::parse(raw).expect("room in layout")
    }

    #[test]
    fn test_all_available_covers_layout() {
        let state = Availability::all_available();
        assert_eq!(state.len(), TOTAL_ROOMS);
        assert_eq!(state.available_count(), TOTAL_ROOMS);
        assert_eq!(state.available_rooms(), all_rooms().collect::<Vec<_>>());
    }

    #[test]
    fn test_none_available_keeps_keys() {
        let state = Availability::none_available();
        assert_eq!(state.len(), TOTAL_ROOMS);
        assert_eq!(state.available_count(), 0);
    }

    #[test]
    fn test_only_marks_listed_rooms() {
        let state = Availability::only([room(101), room(1003)]);
        assert_eq!(state.available_rooms(), vec![room(101), room(1003)]);
        assert!(!state.is_available(room(102)));
    }

    #[test]
    fn test_available_on_floor_ascending() {
        let state = Availability::only([room(305), room(301), room(310), room(201)]);
        assert_eq!(
            state.available_on_floor(2),
            vec![room(301), room(305), room(310)]
        );
        assert!(state.available_on_floor(0).is_empty());
    }

    #[test]
    fn test_random_keeps_keys_and_is_seeded() {
        let a = Availability::random(&mut StdRng::seed_from_u64(7), 0.2);
        let b = Availability::random(&mut StdRng::seed_from_u64(7), 0.2);
        assert_eq!(a, b);
        assert_eq!(a.len(), TOTAL_ROOMS);
    }

    #[test]
    fn test_random_rate_extremes() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(Availability::random(&mut rng, 0.0).available_count(), TOTAL_ROOMS);
        assert_eq!(Availability::random(&mut rng, 1.0).available_count(), 0);
    }

    #[test]
    fn test_set_updates_existing_entry() {
        let mut state = Availability::all_available();
        assert!(state.set(room(204), false));
        assert!(!state.is_available(room(204)));
        assert_eq!(state.len(), TOTAL_ROOMS);
    }

    #[test]
    fn test_serializes_as_room_map() {
        let json = serde_json::to_value(Availability::only([room(101)])).unwrap();
        assert_eq!(json["101"], true);
        assert_eq!(json["102"], false);
        assert_eq!(json.as_object().map(|m| m.len()), Some(TOTAL_ROOMS));
    }
}
