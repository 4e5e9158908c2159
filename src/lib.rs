//! # translator-client
//!
//! Client-side orchestration for creating on-device translators.
//!
//! This crate drives the conversation with a privileged translation
//! provider: it checks availability, gates downloads on a recent user
//! activation, opens a per-request channel, relays download progress and
//! settles the request exactly once. The provider itself is reached through
//! the [`TranslationManager`] trait.
//!
//! ## Features
//!
//! - `create_translator()` async function returning a [`Translator`] or a
//!   [`CreateError`]
//! - `availability()` and `availability_all()` for checking language pairs
//! - [`CreateTranslatorClient`] for driving creation with a custom
//!   [`Resolver`]
//! - [`CreationErrorKind`] taxonomy of provider failures, logged to the
//!   diagnostic [`Console`] and never exposed to callers
//! - Cancellation at any point through a `CancellationToken`
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use translator_client::{
//!     create_translator, CreateRequest, ExecutionContext, ProgressEvent, TranslationManager,
//!     TransientActivation,
//! };
//!
//! async fn translate_page<M: TranslationManager>(manager: &M, activation: Arc<TransientActivation>) {
//!     let context = ExecutionContext::window(activation);
//!     let request = CreateRequest::new("en", "fr").with_monitor(|event: ProgressEvent| {
//!         println!("downloaded {:.0}%", event.fraction() * 100.0);
//!     });
//!
//!     match create_translator(&context, manager, request).await {
//!         Ok(translator) => println!("translating into {}", translator.target_language()),
//!         Err(e) => println!("{}: {}", e.name(), e),
//!     }
//! }
//! ```

mod availability;
mod channel;
mod client;
mod context;
mod create;
mod error_kind;
mod errors;
mod options;
mod progress;
mod translator;

pub use availability::{classify, Availability, AvailabilityResult, BlockedReason, GateDecision};
pub use channel::{
    ChannelClosed, CreateClientRemote, CreationResult, ProgressRemote, TranslationManager,
    TranslatorCreateOptions,
};
pub use client::{ClientOutcome, ClientState, CreateTranslatorClient, Resolver};
pub use context::{
    ActivationGate, Console, ConsoleLevel, ContextKind, ExecutionContext, TracingConsole,
    TransientActivation, DEFAULT_ACTIVATION_LIFESPAN,
};
pub use create::{
    availability, availability_all, create_translator, create_translator_with_options,
};
pub use error_kind::{CreationErrorKind, ErrorTier, SUPPORTED_LANGUAGES_DOC};
pub use errors::{
    CreateError, ABORTED_MESSAGE, UNABLE_TO_CREATE_MESSAGE, USER_ACTIVATION_REQUIRED_MESSAGE,
};
pub use options::ClientOptions;
pub use progress::{ProgressEvent, ProgressObserver, SharedObserver, NORMALIZED_PROGRESS_MAX};
pub use translator::{CreateRequest, LanguagePair, Translator};
