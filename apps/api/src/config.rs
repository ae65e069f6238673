use anyhow::{bail, Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Probability that a room comes up occupied under random occupancy.
    pub occupancy_rate: f64,
    /// Fixed seed for random occupancy; entropy when unset.
    pub occupancy_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = lookup("PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        let occupancy_rate = lookup("OCCUPANCY_RATE")
            .unwrap_or_else(|| "0.2".to_string())
            .parse::<f64>()
            .context("OCCUPANCY_RATE must be a number")?;
        if !(0.0..=1.0).contains(&occupancy_rate) {
            bail!("OCCUPANCY_RATE must be between 0 and 1, got {occupancy_rate}");
        }

        let occupancy_seed = lookup("OCCUPANCY_SEED")
            .map(|raw| raw.parse::<u64>())
            .transpose()
            .context("OCCUPANCY_SEED must be an unsigned integer")?;

        Ok(Config {
            port,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            occupancy_rate,
            occupancy_seed,
        })
    }
}
