//! The in-memory hotel session: current availability plus the last booking.
//!
//! One session per process, shared behind a mutex in `AppState`. Every
//! mutation runs to completion under that lock.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::booking::allocation::{allocate, Strategy};
use crate::booking::availability::Availability;
use crate::booking::error::BookingError;
use crate::booking::layout::{rooms_of_floor, RoomId, FLOOR_COUNT};
use crate::booking::mutator::{apply, BookingRecord};

#[derive(Debug, Clone, Serialize)]
pub struct Booking {
    pub booking_id: Uuid,
    pub rooms: Vec<RoomId>,
    pub travel_time: u32,
    pub strategy: Strategy,
    pub booked_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomStatus {
    Available,
    Booked,
    Occupied,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoomView {
    pub room: RoomId,
    pub status: RoomStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct FloorView {
    /// 1-based floor number.
    pub floor: usize,
    pub rooms: Vec<RoomView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HotelView {
    /// Top floor first.
    pub floors: Vec<FloorView>,
    pub available_count: usize,
    pub unavailable_count: usize,
    pub last_booking: Option<BookingRecord>,
}

pub struct HotelSession {
    availability: Availability,
    last_booking: Option<BookingRecord>,
    occupancy_rate: f64,
    rng: StdRng,
}

impl HotelSession {
    pub fn new(occupancy_rate: f64, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        HotelSession {
            availability: Availability::all_available(),
            last_booking: None,
            occupancy_rate,
            rng,
        }
    }

    pub fn availability(&self) -> &Availability {
        &self.availability
    }

    pub fn last_booking(&self) -> Option<&BookingRecord> {
        self.last_booking.as_ref()
    }

    /// Allocates and commits atomically. On error nothing changes.
    pub fn book(&mut self, required: i64) -> Result<Booking, BookingError> {
        let selection = allocate(required, &self.availability)?;

        self.availability = apply(&selection.rooms, &self.availability);
        let record = BookingRecord::from_rooms(&selection.rooms);

        let booking = Booking {
            booking_id: Uuid::new_v4(),
            rooms: record.booked.clone(),
            travel_time: record.travel_time,
            strategy: selection.strategy,
            booked_at: Utc::now(),
        };
        self.last_booking = Some(record);

        info!(
            "Booking {} committed: {} rooms left",
            booking.booking_id,
            self.availability.available_count()
        );
        Ok(booking)
    }

    /// Regenerates occupancy at random and clears the booking record.
    pub fn randomize(&mut self) {
        self.availability = Availability::random(&mut self.rng, self.occupancy_rate);
        self.last_booking = None;
        info!(
            "Random occupancy generated: {} rooms available",
            self.availability.available_count()
        );
    }

    /// Marks every room available and clears the booking record.
    pub fn reset(&mut self) {
        self.availability = Availability::all_available();
        self.last_booking = None;
        info!("Hotel reset: all rooms available");
    }

    pub fn status_of(&self, room: RoomId) -> RoomStatus {
        if self.availability.is_available(room) {
            RoomStatus::Available
        } else if self.last_booking.as_ref().is_some_and(|b| b.contains(room)) {
            RoomStatus::Booked
        } else {
            RoomStatus::Occupied
        }
    }

    pub fn view(&self) -> HotelView {
        let floors = (0..FLOOR_COUNT)
            .rev()
            .map(|floor| FloorView {
                floor: floor + 1,
                rooms: rooms_of_floor(floor)
                    .into_iter()
                    .map(|room| RoomView {
                        room,
                        status: self.status_of(room),
                    })
                    .collect(),
            })
            .collect();

        let available_count = self.availability().available_count();
        HotelView {
            floors,
            available_count,
            unavailable_count: self.availability().len() - available_count,
            last_booking: self.last_booking().cloned(),
        }
    }
}
