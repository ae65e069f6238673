// Hotel room booking: fixed layout, same-floor first-fit, then a hotel-wide
// minimum travel-time search. Everything except `session` and `handlers` is
// pure over values.

pub mod allocation;
pub mod allocator;
pub mod availability;
pub mod error;
pub mod fast_path;
pub mod handlers;
pub mod layout;
pub mod mutator;
pub mod session;
pub mod travel_time;

pub use error::BookingError;
pub use session::HotelSession;
