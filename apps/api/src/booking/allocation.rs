//! `allocate`: the composed booking decision. Same-floor first-fit first,
//! hotel-wide search only when no floor qualifies.
//!
//! Pure over `(required, availability)`. The caller commits the result.

use serde::Serialize;
use tracing::{info, warn};

use crate::booking::allocator::cheapest_combination;
use crate::booking::availability::Availability;
use crate::booking::error::{BookingError, MAX_REQUEST, MIN_REQUEST};
use crate::booking::fast_path::first_fit_floor;
use crate::booking::layout::RoomId;
use crate::booking::travel_time::travel_time;

/// A validated room count in `[1, 5]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestSize(usize);

impl RequestSize {
    pub fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<i64> for RequestSize {
    type Error = BookingError;

    fn try_from(requested: i64) -> Result<Self, Self::Error> {
        if (MIN_REQUEST..=MAX_REQUEST).contains(&requested) {
            Ok(RequestSize(requested as usize))
        } else {
            Err(BookingError::InvalidRequestSize { requested })
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Strategy {
    /// All rooms on one floor (1-based floor number).
    SameFloor { floor: usize },
    HotelWide,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub rooms: Vec<RoomId>,
    pub travel_time: u32,
    pub strategy: Strategy,
}

pub fn allocate(required: i64, availability: &Availability) -> Result<Selection, BookingError> {
    let size = RequestSize::try_from(required)?.get();

    if let Some(pick) = first_fit_floor(size, availability) {
        let selection = Selection {
            travel_time: travel_time(&pick.rooms),
            rooms: pick.rooms,
            strategy: Strategy::SameFloor {
                floor: pick.floor + 1,
            },
        };
        info!(
            "Allocated {:?} on floor {} (travel time {})",
            selection.rooms,
            pick.floor + 1,
            selection.travel_time
        );
        return Ok(selection);
    }

    let candidates = availability.available_rooms();
    match cheapest_combination(size, &candidates) {
        Some(best) => {
            info!(
                "Allocated {:?} hotel-wide (travel time {})",
                best.rooms, best.travel_time
            );
            Ok(Selection {
                rooms: best.rooms,
                travel_time: best.travel_time,
                strategy: Strategy::HotelWide,
            })
        }
        None => {
            warn!(
                "Cannot allocate {size} rooms: only {} available",
                candidates.len()
            );
            Err(BookingError::InsufficientAvailability {
                required: size,
                available: candidates.len(),
            })
        }
    }
}
