use thiserror::Error;

pub const MIN_REQUEST: i64 = 1;
pub const MAX_REQUEST: i64 = 5;

/// Terminal outcomes of a booking request. Neither is retryable: allocation is
/// deterministic over the same availability.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("Can only book 1 to 5 rooms, got {requested}")]
    InvalidRequestSize { requested: i64 },

    #[error("Not enough rooms available to book {required} (available: {available})")]
    InsufficientAvailability { required: usize, available: usize },
}
