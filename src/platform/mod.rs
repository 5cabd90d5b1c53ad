//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Time (elapsed seconds for the animation ticker)
//! - Storage (LocalStorage on web, files on native)
//! - Outward actions (sharing, opening links)

pub mod storage;
pub mod time;

#[cfg(not(target_arch = "wasm32"))]
pub use storage::FileStore;
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
pub use storage::{KeyValueStore, MemoryStore};
pub use time::{Clock, ManualClock, SystemClock};

/// Fire-and-forget actions that leave the app
pub trait Platform {
    /// Hand `text` to the system share sheet
    fn share(&mut self, text: &str);
    fn open_url(&mut self, url: &str);
}

/// Platform without a share sheet or browser: logs the request
#[derive(Debug, Clone, Copy, Default)]
pub struct LogPlatform;

impl Platform for LogPlatform {
    fn share(&mut self, text: &str) {
        log::info!("Share: {text}");
    }

    fn open_url(&mut self, url: &str) {
        log::info!("Open URL: {url}");
    }
}
