//! Client-side orchestration of translator creation.
//!
//! [`CreateTranslatorClient`] owns one request from the availability check
//! to its single resolution. It settles a [`Resolver`] exactly once, or
//! drops it uncalled when the request's signal fires first.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use translator_client::{
//!     ClientOptions, CreateError, CreateRequest, CreateTranslatorClient, ExecutionContext,
//!     TranslationManager, Translator, TransientActivation,
//! };
//!
//! async fn create<M: TranslationManager>(manager: &M) {
//!     let activation = Arc::new(TransientActivation::new());
//!     let (tx, rx) = tokio::sync::oneshot::channel::<Result<Translator<M::Handle>, CreateError>>();
//!     let client = CreateTranslatorClient::new(
//!         ExecutionContext::window(activation),
//!         CreateRequest::new("en", "fr"),
//!         tx,
//!         ClientOptions::default(),
//!     );
//!     println!("{:?}", client.run(manager).await);
//!     println!("created: {}", matches!(rx.await, Ok(Ok(_))));
//! }
//! ```

mod monitor;
mod orchestrator;
mod resolver;

pub use orchestrator::{ClientOutcome, ClientState, CreateTranslatorClient};
pub use resolver::Resolver;
