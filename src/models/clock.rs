use std::time::Instant;

/// Opaque wall-clock reading captured at a point in time.
///
/// Instant picks the host's monotonic source (QueryPerformanceCounter on
/// Windows, CLOCK_MONOTONIC elsewhere), so elapsed readings never go
/// negative on system-time adjustment.
#[derive(Clone, Copy, Debug)]
pub struct Timestamp {
    at: Instant,
}

impl Timestamp {
    pub fn now() -> Self {
        Self { at: Instant::now() }
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.at.elapsed().as_secs_f64()
    }
}
