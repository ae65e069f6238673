use std::sync::Arc;

use tokio::sync::Mutex;

use crate::booking::HotelSession;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// The single hotel session. Holding the lock makes a handler the only writer.
    pub hotel: Arc<Mutex<HotelSession>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let session = HotelSession::new(config.occupancy_rate, config.occupancy_seed);
        AppState {
            config,
            hotel: Arc::new(Mutex::new(session)),
        }
    }
}
