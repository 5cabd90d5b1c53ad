//! Elapsed-time sources

use std::cell::Cell;

/// Monotonically increasing seconds since a reference instant
pub trait Clock {
    fn elapsed(&self) -> f64;
}

/// Wall clock measured from construction
#[derive(Debug, Clone)]
pub struct SystemClock {
    #[cfg(not(target_arch = "wasm32"))]
    origin: std::time::Instant,
    #[cfg(target_arch = "wasm32")]
    origin_ms: f64,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn new() -> Self {
        Self {
            origin_ms: js_sys::Date::now(),
        }
    }
}

impl Clock for SystemClock {
    #[cfg(not(target_arch = "wasm32"))]
    fn elapsed(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }

    #[cfg(target_arch = "wasm32")]
    fn elapsed(&self) -> f64 {
        ((js_sys::Date::now() - self.origin_ms) / 1000.0).max(0.0)
    }
}

/// Clock advanced by hand (tests, headless runs)
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn new(start: f64) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    pub fn advance(&self, seconds: f64) {
        self.now.set(self.now.get() + seconds.max(0.0));
    }

    pub fn set(&self, now: f64) {
        self.now.set(now);
    }
}

impl Clock for ManualClock {
    fn elapsed(&self) -> f64 {
        self.now.get()
    }
}
