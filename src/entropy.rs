//! The process-wide generator consumed by [`Die::roll`](crate::Die::roll).
//!
//! Seeded from the OS on first use. Every draw holds the lock for its whole
//! duration, so concurrent rolls never observe a half-advanced state.

use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use log::debug;
use rand::{Rng, SeedableRng, rngs::StdRng};

static SHARED: OnceLock<Mutex<StdRng>> = OnceLock::new();

fn shared() -> MutexGuard<'static, StdRng> {
    SHARED
        .get_or_init(|| Mutex::new(StdRng::from_os_rng()))
        .lock()
        // A panic while holding the lock cannot leave StdRng half-updated
        .unwrap_or_else(PoisonError::into_inner)
}

/// Draws a uniform face in `1..=sides` from the shared generator.
pub fn roll(sides: u32) -> u32 {
    shared().random_range(1..=sides)
}

/// Re-seeds the shared generator so subsequent rolls are reproducible.
pub fn seed(seed: u64) {
    debug!("Re-seeding shared generator with `{seed}`");
    *shared() = StdRng::seed_from_u64(seed);
}

/// Runs `f` with exclusive access to the shared generator.
pub fn with_rng<T>(f: impl FnOnce(&mut StdRng) -> T) -> T {
    f(&mut shared())
}
