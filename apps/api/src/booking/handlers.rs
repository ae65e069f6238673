//! Axum route handlers for the Booking API.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::booking::layout::RoomId;
use crate::booking::session::{Booking, HotelView};
use crate::booking::travel_time::travel_time;
use crate::errors::{AppError, AppJson};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct BookRequest {
    /// Number of rooms; validated to [1, 5] by the allocator.
    pub rooms: i64,
}

#[derive(Debug, Deserialize)]
pub struct TravelTimeRequest {
    pub rooms: Vec<u16>,
}

#[derive(Debug, Serialize)]
pub struct TravelTimeResponse {
    pub rooms: Vec<RoomId>,
    pub travel_time: u32,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/hotel
pub async fn handle_get_hotel(State(state): State<AppState>) -> Json<HotelView> {
    let hotel = state.hotel.lock().await;
    Json(hotel.view())
}

/// POST /api/v1/bookings
///
/// Allocates and commits in one step while holding the session lock, so
/// bookings never interleave with each other or with reset/randomize.
pub async fn handle_book(
    State(state): State<AppState>,
    AppJson(request): AppJson<BookRequest>,
) -> Result<(StatusCode, Json<Booking>), AppError> {
    let mut hotel = state.hotel.lock().await;
    let booking = hotel.book(request.rooms)?;
    Ok((StatusCode::CREATED, Json(booking)))
}

/// POST /api/v1/hotel/random-occupancy
pub async fn handle_random_occupancy(State(state): State<AppState>) -> Json<HotelView> {
    let mut hotel = state.hotel.lock().await;
    hotel.randomize();
    Json(hotel.view())
}

/// POST /api/v1/hotel/reset
pub async fn handle_reset(State(state): State<AppState>) -> Json<HotelView> {
    let mut hotel = state.hotel.lock().await;
    hotel.reset();
    Json(hotel.view())
}

/// POST /api/v1/travel-time
///
/// Stateless: reports the travel time of an arbitrary set of layout rooms.
pub async fn handle_travel_time(
    AppJson(request): AppJson<TravelTimeRequest>,
) -> Result<Json<TravelTimeResponse>, AppError> {
    let rooms = request
        .rooms
        .iter()
        .map(|&raw| {
            RoomId::parse(raw)
                .ok_or_else(|| AppError::Validation(format!("Room {raw} is not in the hotel")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(TravelTimeResponse {
        travel_time: travel_time(&rooms),
        rooms,
    }))
}
