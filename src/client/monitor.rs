//! Progress relay between the provider and the caller's observer.

use crate::channel::{progress_pipe, ProgressReceiver, ProgressRemote};
use crate::progress::SharedObserver;
use crate::{ProgressEvent, NORMALIZED_PROGRESS_MAX};
use tokio_util::sync::CancellationToken;

/// Forwards provider progress and synthesizes the boundary events.
///
/// The observer sees one `{0, MAX}` event first, a non-decreasing run of
/// provider events, then one `{MAX, MAX}` event and nothing after it. A
/// provider event that would break that order is dropped. A provider
/// event reporting everything loaded counts as the completion.
///
/// `gone` is the owning client's "resolver is gone" token. Once it fires,
/// nothing more reaches the observer.
pub(crate) struct ProgressMonitor {
    observer: SharedObserver,
    gone: CancellationToken,
    receiver: Option<ProgressReceiver>,
    started: bool,
    last_loaded: u64,
    completed: bool,
}

impl ProgressMonitor {
    pub(crate) fn new(observer: SharedObserver, gone: CancellationToken) -> Self {
        Self {
            observer,
            gone,
            receiver: None,
            started: false,
            last_loaded: 0,
            completed: false,
        }
    }

    /// Create the progress pipe and return the end handed to the provider.
    pub(crate) fn bind_remote(&mut self) -> ProgressRemote {
        let (remote, receiver) = progress_pipe();
        self.receiver = Some(receiver);
        remote
    }

    /// Next event pushed by the provider.
    ///
    /// Pending forever when unbound, released, or once the provider has
    /// dropped its end.
    pub(crate) async fn next_provider_event(&mut self) -> ProgressEvent {
        if let Some(receiver) = self.receiver.as_mut() {
            if let Some(event) = receiver.recv().await {
                return event;
            }
            self.receiver = None;
        }
        std::future::pending().await
    }

    pub(crate) fn on_provider_event(&mut self, event: ProgressEvent) {
        tracing::trace!(loaded = event.loaded, total = event.total, "download progress");

        if event.is_complete() {
            self.emit_completion();
            return;
        }
        if event.loaded == 0 {
            self.emit_start();
            return;
        }
        if !self.emit_start() {
            return;
        }
        if event.loaded < self.last_loaded {
            tracing::trace!(
                loaded = event.loaded,
                last_loaded = self.last_loaded,
                "dropping out-of-order download progress"
            );
            return;
        }
        if self.deliver(event) {
            self.last_loaded = event.loaded;
        }
    }

    /// Deliver `{0, MAX}` unless it already went out.
    ///
    /// Returns whether the start has been delivered.
    pub(crate) fn emit_start(&mut self) -> bool {
        if !self.started && self.deliver(ProgressEvent::start()) {
            self.started = true;
        }
        self.started
    }

    /// Deliver `{MAX, MAX}` unless it already went out, opening with the
    /// start event if nothing was delivered yet.
    pub(crate) fn emit_completion(&mut self) {
        if !self.emit_start() {
            return;
        }
        if self.deliver(ProgressEvent::completion()) {
            self.completed = true;
            self.last_loaded = NORMALIZED_PROGRESS_MAX;
        }
    }

    /// Stop receiving provider pushes.
    pub(crate) fn release(&mut self) {
        if let Some(receiver) = self.receiver.as_mut() {
            receiver.close();
        }
        self.receiver = None;
    }

    fn deliver(&self, event: ProgressEvent) -> bool {
        if self.completed || self.gone.is_cancelled() {
            return false;
        }
        self.observer.on_progress(event);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recording_monitor() -> (ProgressMonitor, CancellationToken, Arc<Mutex<Vec<ProgressEvent>>>) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let events_clone = events.clone();
        let gone = CancellationToken::new();
        let monitor = ProgressMonitor::new(
            Arc::new(move |event: ProgressEvent| events_clone.lock().unwrap().push(event)),
            gone.clone(),
        );
        (monitor, gone, events)
    }

    #[test]
    fn test_start_precedes_first_provider_event() {
        let (mut monitor, _gone, events) = recording_monitor();
        monitor.on_provider_event(ProgressEvent::new(12, 0x10000));
        monitor.on_provider_event(ProgressEvent::new(40, 0x10000));

        assert_eq!(
            *events.lock().unwrap(),
            vec![
                ProgressEvent::start(),
                ProgressEvent::new(12, 0x10000),
                ProgressEvent::new(40, 0x10000),
            ]
        );
    }

    #[test]
    fn test_provider_boundaries_are_not_repeated() {
        let (mut monitor, _gone, events) = recording_monitor();
        monitor.on_provider_event(ProgressEvent::start());
        monitor.on_provider_event(ProgressEvent::completion());
        monitor.emit_start();
        monitor.emit_completion();

        assert_eq!(
            *events.lock().unwrap(),
            vec![ProgressEvent::start(), ProgressEvent::completion()]
        );
    }

    #[test]
    fn test_drops_decreasing_progress() {
        let (mut monitor, _gone, events) = recording_monitor();
        monitor.on_provider_event(ProgressEvent::new(30, 0x10000));
        monitor.on_provider_event(ProgressEvent::new(10, 0x10000));
        monitor.on_provider_event(ProgressEvent::new(0, 0x10000));
        monitor.on_provider_event(ProgressEvent::new(30, 0x10000));
        monitor.emit_start();
        monitor.emit_completion();

        assert_eq!(
            *events.lock().unwrap(),
            vec![
                ProgressEvent::start(),
                ProgressEvent::new(30, 0x10000),
                ProgressEvent::new(30, 0x10000),
                ProgressEvent::completion(),
            ]
        );
    }

    #[test]
    fn test_provider_completion_in_native_units() {
        let (mut monitor, _gone, events) = recording_monitor();
        monitor.on_provider_event(ProgressEvent::new(7, 7));
        monitor.emit_completion();

        assert_eq!(
            *events.lock().unwrap(),
            vec![ProgressEvent::start(), ProgressEvent::completion()]
        );
    }

    #[test]
    fn test_boundary_events() {
        let (mut monitor, _gone, events) = recording_monitor();
        monitor.emit_start();
        monitor.emit_completion();

        assert_eq!(
            *events.lock().unwrap(),
            vec![ProgressEvent::start(), ProgressEvent::completion()]
        );
    }

    #[test]
    fn test_swallows_after_gone() {
        let (mut monitor, gone, events) = recording_monitor();
        gone.cancel();

        monitor.on_provider_event(ProgressEvent::new(1, 2));
        monitor.emit_start();
        monitor.emit_completion();

        assert!(events.lock().unwrap().is_empty());
    }

    #[test]
    fn test_nothing_after_completion() {
        let (mut monitor, _gone, events) = recording_monitor();
        monitor.emit_completion();
        monitor.on_provider_event(ProgressEvent::new(5, 10));
        monitor.emit_start();

        assert_eq!(
            *events.lock().unwrap(),
            vec![ProgressEvent::start(), ProgressEvent::completion()]
        );
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_bound_remote_feeds_monitor() {
        let (mut monitor, _gone, _events) = recording_monitor();
        let remote = monitor.bind_remote();
        remote.on_download_progress_update(3, 9).unwrap();

        assert_eq!(monitor.next_provider_event().await, ProgressEvent::new(3, 9));
    }

    #[test]
    fn test_release_closes_remote() {
        let (mut monitor, _gone, _events) = recording_monitor();
        let remote = monitor.bind_remote();
        monitor.release();

        assert!(remote.is_closed());
    }
}
