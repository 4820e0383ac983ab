//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the parsed config, the rate limiter and the random source used by
//! the caption tables. The random source sits behind a mutex so tests can
//! seed it and get a fixed sequence of picks.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::Config;
use crate::rate_limit::RateLimiter;

/// Shared application state. All inner fields are cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Sliding-window limiter for the generation endpoints.
    pub rate_limiter: RateLimiter,
    rng: Arc<Mutex<StdRng>>,
    started: Instant,
}

impl AppState {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Build state around an explicit random source.
    #[must_use]
    pub fn with_rng(config: Config, rng: StdRng) -> Self {
        let rate_limiter = RateLimiter::new(config.rate_limit);
        Self {
            config: Arc::new(config),
            rate_limiter,
            rng: Arc::new(Mutex::new(rng)),
            started: Instant::now(),
        }
    }

    /// Run `f` with exclusive access to the shared random source.
    pub fn with_rng_mut<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut rng)
    }

    /// Seconds since the state was built.
    #[must_use]
    pub fn uptime_secs(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use crate::config::RateLimitConfig;

    /// Default config loaded from an empty environment.
    #[must_use]
    pub fn test_config() -> Config {
        Config::from_lookup(|_| None).expect("defaults always parse")
    }

    /// State with a seeded random source.
    #[must_use]
    pub fn test_app_state(seed: u64) -> AppState {
        AppState::with_rng(test_config(), StdRng::seed_from_u64(seed))
    }

    /// State with a seeded random source and custom limits.
    #[must_use]
    pub fn test_app_state_with_limits(seed: u64, rate_limit: RateLimitConfig) -> AppState {
        let config = Config { rate_limit, ..test_config() };
        AppState::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
