pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::booking::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Hotel state
        .route("/api/v1/hotel", get(handlers::handle_get_hotel))
        .route(
            "/api/v1/hotel/random-occupancy",
            post(handlers::handle_random_occupancy),
        )
        .route("/api/v1/hotel/reset", post(handlers::handle_reset))
        // Booking
        .route("/api/v1/bookings", post(handlers::handle_book))
        .route("/api/v1/travel-time", post(handlers::handle_travel_time))
        .with_state(state)
}
