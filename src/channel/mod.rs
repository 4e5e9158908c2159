//! Channels between the client and the translation provider.
//!
//! This module contains the plumbing that connects a creation request to
//! the provider. It provides:
//!
//! - `TranslationManager`: the provider's availability and creation calls
//! - `CreateClientRemote`: the reply pipe handed to the provider per request
//! - `ProgressRemote`: the pipe the provider pushes download progress into

mod manager;
mod pipe;
mod progress;

pub use manager::{TranslationManager, TranslatorCreateOptions};
pub use pipe::{ChannelClosed, CreateClientRemote, CreationResult};
pub use progress::ProgressRemote;

pub(crate) use pipe::{pipe, CreateClientReceiver};
pub(crate) use progress::{progress_pipe, ProgressReceiver};
