//! Progress pipe the provider pushes download updates into.

use super::ChannelClosed;
use crate::ProgressEvent;
use tokio::sync::mpsc;

/// Provider-side end of the progress pipe.
#[derive(Debug, Clone)]
pub struct ProgressRemote {
    tx: mpsc::UnboundedSender<ProgressEvent>,
}

impl ProgressRemote {
    /// Report normalized download progress.
    pub fn on_download_progress_update(&self, loaded: u64, total: u64) -> Result<(), ChannelClosed> {
        self.tx
            .send(ProgressEvent::new(loaded, total))
            .map_err(|_| ChannelClosed)
    }

    /// Whether the client has released its end.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

pub(crate) type ProgressReceiver = mpsc::UnboundedReceiver<ProgressEvent>;

/// Create a connected progress pipe.
pub(crate) fn progress_pipe() -> (ProgressRemote, ProgressReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (ProgressRemote { tx }, rx)
}
