//! Per-request reply pipe between the client and the provider.

use crate::CreationErrorKind;
use thiserror::Error;
use tokio::sync::mpsc;

/// The far end of a pipe was released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("the channel peer has been released")]
pub struct ChannelClosed;

/// Provider's reply to a creation request.
#[derive(Debug)]
pub enum CreationResult<H> {
    /// The translator was created.
    Success(H),
    /// The provider failed to create the translator.
    Failure(CreationErrorKind),
}

/// Provider-side end of the reply pipe.
///
/// Dropping it without replying is seen by the client as a disconnect.
#[derive(Debug)]
pub struct CreateClientRemote<H> {
    tx: mpsc::UnboundedSender<CreationResult<H>>,
}

impl<H> CreateClientRemote<H> {
    /// Deliver the creation result.
    pub fn on_result(&self, result: CreationResult<H>) -> Result<(), ChannelClosed> {
        self.tx.send(result).map_err(|_| ChannelClosed)
    }

    /// Whether the client has released its end.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Client-side end of the reply pipe.
#[derive(Debug)]
pub(crate) struct CreateClientReceiver<H> {
    rx: mpsc::UnboundedReceiver<CreationResult<H>>,
}

impl<H> CreateClientReceiver<H> {
    /// Wait for the next reply. `None` means the provider disconnected.
    pub(crate) async fn recv(&mut self) -> Option<CreationResult<H>> {
        self.rx.recv().await
    }

    /// A reply that is already queued, if any.
    pub(crate) fn try_recv(&mut self) -> Option<CreationResult<H>> {
        self.rx.try_recv().ok()
    }

    /// Stop accepting replies.
    pub(crate) fn close(&mut self) {
        self.rx.close();
    }
}

/// Create a connected reply pipe.
pub(crate) fn pipe<H>() -> (CreateClientRemote<H>, CreateClientReceiver<H>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (CreateClientRemote { tx }, CreateClientReceiver { rx })
}
