//! Download progress events reported while a translator is created.
//!
//! Progress is normalized to `[0, NORMALIZED_PROGRESS_MAX]` regardless of the
//! provider's native units. When creation succeeds, an observer always sees a
//! `{0, MAX}` event followed by a final `{MAX, MAX}` event, even if the
//! provider never reported anything.

use std::sync::Arc;

/// Upper bound of normalized progress.
pub const NORMALIZED_PROGRESS_MAX: u64 = 0x10000;

/// A single download progress update.
///
/// # Example
///
/// ```rust
/// use translator_client::{ProgressEvent, NORMALIZED_PROGRESS_MAX};
///
/// let event = ProgressEvent::completion();
/// assert!(event.is_complete());
/// assert_eq!(event.loaded, NORMALIZED_PROGRESS_MAX);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgressEvent {
    /// Amount downloaded so far.
    pub loaded: u64,
    /// Total amount to download.
    pub total: u64,
}

impl ProgressEvent {
    /// Create an event from raw values.
    pub fn new(loaded: u64, total: u64) -> Self {
        Self { loaded, total }
    }

    /// The `{0, MAX}` event that opens every successful creation.
    pub fn start() -> Self {
        Self::new(0, NORMALIZED_PROGRESS_MAX)
    }

    /// The `{MAX, MAX}` event that closes every successful creation.
    pub fn completion() -> Self {
        Self::new(NORMALIZED_PROGRESS_MAX, NORMALIZED_PROGRESS_MAX)
    }

    /// Whether everything has been loaded.
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.loaded >= self.total
    }

    /// Progress as a fraction in `[0.0, 1.0]`.
    ///
    /// An empty total counts as no progress.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.loaded.min(self.total) as f64) / (self.total as f64)
    }
}

/// Receives progress events for one creation.
///
/// Any `Fn(ProgressEvent) + Send + Sync` closure is an observer.
///
/// ```rust
/// use std::sync::Arc;
/// use translator_client::{ProgressEvent, ProgressObserver};
///
/// let observer: Arc<dyn ProgressObserver> = Arc::new(|event: ProgressEvent| {
///     println!("{:.0}%", event.fraction() * 100.0);
/// });
/// observer.on_progress(ProgressEvent::start());
/// ```
pub trait ProgressObserver: Send + Sync {
    /// Called once per delivered event.
    fn on_progress(&self, event: ProgressEvent);
}

impl<F> ProgressObserver for F
where
    F: Fn(ProgressEvent) + Send + Sync,
{
    fn on_progress(&self, event: ProgressEvent) {
        self(event)
    }
}

/// Shared observer handle carried by a creation request.
pub type SharedObserver = Arc<dyn ProgressObserver>;
