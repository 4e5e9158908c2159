//! The translator creation state machine.

use super::monitor::ProgressMonitor;
use super::Resolver;
use crate::availability::classify;
use crate::channel::{
    pipe, CreateClientReceiver, CreationResult, TranslationManager, TranslatorCreateOptions,
};
use crate::context::ConsoleLevel;
use crate::{
    AvailabilityResult, ClientOptions, CreateError, CreateRequest, CreationErrorKind,
    ExecutionContext, ProgressEvent, Translator,
};
use std::marker::PhantomData;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

/// Where a client is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientState {
    /// Constructed, not started.
    Init,
    /// Waiting for the provider's availability answer.
    AwaitingAvailability,
    /// Consuming a transient user activation.
    ActivationCheck,
    /// Opening the reply and progress pipes.
    Binding,
    /// Waiting for the provider's creation reply.
    AwaitingResult,
    /// The resolver has been called.
    Resolved,
    /// The signal fired first; the resolver was dropped uncalled.
    Cancelled,
}

/// What a finished [`CreateTranslatorClient::run`] did with its resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientOutcome {
    /// `resolve` was called.
    Resolved,
    /// `reject` was called with this error.
    Rejected(CreateError),
    /// Neither was called.
    Cancelled,
}

/// Pipes bound for one creation request.
///
/// Dropping this releases both pipes, on every exit path including an
/// early drop of the `run` future.
struct BoundChannels<H> {
    endpoint: CreateClientReceiver<H>,
    monitor: Option<ProgressMonitor>,
}

impl<H> Drop for BoundChannels<H> {
    fn drop(&mut self) {
        self.endpoint.close();
        if let Some(monitor) = self.monitor.as_mut() {
            monitor.release();
        }
        tracing::debug!("released translator creation channels");
    }
}

async fn next_progress(monitor: &mut Option<ProgressMonitor>) -> ProgressEvent {
    match monitor {
        Some(monitor) => monitor.next_provider_event().await,
        None => std::future::pending().await,
    }
}

/// Drives one translator creation from availability check to resolution.
///
/// The resolver is held as an `Option` and taken on first use. The `gone`
/// token is a child of the caller's signal and is cancelled once the
/// resolver has been used, so "cancelled" and "settled" look the same to
/// everything that checks it.
///
/// # Example
///
/// ```rust
/// use translator_client::{
///     AvailabilityResult, ClientOptions, ClientOutcome, CreateClientRemote, CreateError,
///     CreateRequest, CreateTranslatorClient, CreationResult, ExecutionContext, TranslationManager,
///     Translator, TranslatorCreateOptions,
/// };
///
/// struct Ready;
///
/// #[async_trait::async_trait]
/// impl TranslationManager for Ready {
///     type Handle = ();
///
///     async fn can_create_translator(&self, _: &str, _: &str) -> AvailabilityResult {
///         AvailabilityResult::Ready
///     }
///
///     fn create_translator(&self, client: CreateClientRemote<()>, _: TranslatorCreateOptions) {
///         let _ = client.on_result(CreationResult::Success(()));
///     }
/// }
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let (tx, rx) = tokio::sync::oneshot::channel::<Result<Translator<()>, CreateError>>();
///     let client = CreateTranslatorClient::new(
///         ExecutionContext::service_worker(),
///         CreateRequest::new("en", "fr"),
///         tx,
///         ClientOptions::default(),
///     );
///     assert_eq!(client.run(&Ready).await, ClientOutcome::Resolved);
///     assert_eq!(rx.await.unwrap().unwrap().target_language(), "fr");
/// }
/// ```
pub struct CreateTranslatorClient<R, H> {
    context: ExecutionContext,
    options: ClientOptions,
    resolver: Option<R>,
    source_language: String,
    target_language: String,
    signal: Option<CancellationToken>,
    gone: CancellationToken,
    monitor: Option<ProgressMonitor>,
    state: watch::Sender<ClientState>,
    _handle: PhantomData<fn() -> H>,
}

impl<R, H> CreateTranslatorClient<R, H>
where
    R: Resolver<H>,
{
    /// Take ownership of a request and the resolver that will settle it.
    pub fn new(
        context: ExecutionContext,
        request: CreateRequest,
        resolver: R,
        options: ClientOptions,
    ) -> Self {
        let CreateRequest {
            source_language,
            target_language,
            monitor,
            signal,
        } = request;
        let gone = signal
            .as_ref()
            .map(CancellationToken::child_token)
            .unwrap_or_else(CancellationToken::new);
        let monitor = monitor.map(|observer| ProgressMonitor::new(observer, gone.clone()));

        Self {
            context,
            options,
            resolver: Some(resolver),
            source_language,
            target_language,
            signal,
            gone,
            monitor,
            state: watch::channel(ClientState::Init).0,
            _handle: PhantomData,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ClientState {
        *self.state.borrow()
    }

    /// Follow lifecycle changes, including after [`run`](Self::run) has
    /// consumed the client.
    ///
    /// The receiver holds the latest state only. Once `run` returns it reads
    /// [`ClientState::Resolved`] or [`ClientState::Cancelled`].
    pub fn subscribe(&self) -> watch::Receiver<ClientState> {
        self.state.subscribe()
    }

    /// Run the creation protocol against `manager` until it settles.
    ///
    /// # Panics
    ///
    /// Panics if the context is neither a window nor a service worker, or
    /// if the provider replies more than once.
    pub async fn run<M>(mut self, manager: &M) -> ClientOutcome
    where
        M: TranslationManager<Handle = H> + ?Sized,
    {
        if self.gone.is_cancelled() {
            return self.cancel();
        }

        self.transition(ClientState::AwaitingAvailability);
        let gone = self.gone.clone();
        let availability = tokio::select! {
            biased;
            _ = gone.cancelled() => None,
            result = manager.can_create_translator(&self.source_language, &self.target_language) => {
                Some(result)
            }
        };
        match availability {
            Some(result) => self.on_got_availability(result, manager).await,
            None => self.cancel(),
        }
    }

    async fn on_got_availability<M>(
        mut self,
        availability: AvailabilityResult,
        manager: &M,
    ) -> ClientOutcome
    where
        M: TranslationManager<Handle = H> + ?Sized,
    {
        let kind = self.context.kind().clone();
        assert!(
            kind.supports_translator(),
            "translator creation is only available to windows and service workers, not {:?}",
            kind
        );

        let decision = classify(availability);
        tracing::debug!(?availability, ?decision, "got translator availability");

        if let Some(reason) = decision.blocked {
            self.context
                .console()
                .add_message(ConsoleLevel::Warning, reason.debug_message());
            return self.reject(CreateError::UnableToCreate);
        }

        if decision.requires_activation && self.options.user_activation_required {
            if let Some(gate) = kind.activation_gate() {
                self.transition(ClientState::ActivationCheck);
                if !gate.consume_if_present() {
                    return self.reject(CreateError::NotAllowed);
                }
            }
        }

        if self.gone.is_cancelled() {
            return self.cancel();
        }

        self.transition(ClientState::Binding);
        let (remote, endpoint) = pipe();
        let mut monitor = self.monitor.take();
        let progress = monitor.as_mut().map(ProgressMonitor::bind_remote);
        let mut channels = BoundChannels { endpoint, monitor };

        manager.create_translator(
            remote,
            TranslatorCreateOptions {
                source_language: self.source_language.clone(),
                target_language: self.target_language.clone(),
                progress,
            },
        );

        self.transition(ClientState::AwaitingResult);
        let gone = self.gone.clone();
        let reply = loop {
            tokio::select! {
                biased;
                _ = gone.cancelled() => break None,
                event = next_progress(&mut channels.monitor) => {
                    if let Some(monitor) = channels.monitor.as_mut() {
                        monitor.on_provider_event(event);
                    }
                }
                reply = channels.endpoint.recv() => break Some(reply),
            }
        };

        let result = match reply {
            None => return self.cancel(),
            Some(Some(result)) => result,
            // Closed after the request went out and before any reply.
            Some(None) => CreationResult::Failure(CreationErrorKind::ServiceCrashed),
        };

        if channels.endpoint.try_recv().is_some() {
            tracing::error!(
                source_language = %self.source_language,
                target_language = %self.target_language,
                "provider sent a second creation result"
            );
            panic!("provider sent more than one creation result for a single request");
        }

        self.on_result(result, &mut channels)
    }

    fn on_result(self, result: CreationResult<H>, channels: &mut BoundChannels<H>) -> ClientOutcome {
        let handle = match result {
            CreationResult::Success(handle) => handle,
            CreationResult::Failure(kind) => {
                self.context
                    .console()
                    .add_message(ConsoleLevel::Warning, kind.debug_message());
                return self.reject(CreateError::UnableToCreate);
            }
        };

        if let Some(monitor) = channels.monitor.as_mut() {
            monitor.emit_start();
            // The observer may have fired the signal.
            if self.gone.is_cancelled() {
                return self.cancel();
            }
            monitor.emit_completion();
            if self.gone.is_cancelled() {
                return self.cancel();
            }
        }

        self.resolve(handle)
    }

    fn resolve(mut self, handle: H) -> ClientOutcome {
        let Some(resolver) = self.take_resolver() else {
            return self.cancel();
        };
        let translator = Translator::new(
            std::mem::take(&mut self.source_language),
            std::mem::take(&mut self.target_language),
            handle,
            self.signal.take(),
        );
        resolver.resolve(translator);
        self.transition(ClientState::Resolved);
        ClientOutcome::Resolved
    }

    fn reject(mut self, error: CreateError) -> ClientOutcome {
        let Some(resolver) = self.take_resolver() else {
            return self.cancel();
        };
        tracing::debug!(
            source_language = %self.source_language,
            target_language = %self.target_language,
            error = %error,
            "rejecting translator creation"
        );
        resolver.reject(error.clone());
        self.transition(ClientState::Resolved);
        ClientOutcome::Rejected(error)
    }

    fn cancel(mut self) -> ClientOutcome {
        self.resolver = None;
        self.transition(ClientState::Cancelled);
        ClientOutcome::Cancelled
    }

    fn take_resolver(&mut self) -> Option<R> {
        if self.gone.is_cancelled() {
            self.resolver = None;
            return None;
        }
        self.gone.cancel();
        self.resolver.take()
    }

    fn transition(&mut self, next: ClientState) {
        tracing::debug!(
            source_language = %self.source_language,
            target_language = %self.target_language,
            from = ?*self.state.borrow(),
            to = ?next,
            "translator client state change"
        );
        self.state.send_replace(next);
    }
}
