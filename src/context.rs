//! The environment a creation request runs in.
//!
//! A request carries an [`ExecutionContext`]: what kind of global scope
//! issued it, how to consume a transient user activation there, and where
//! diagnostic messages go.

use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// How long a user activation stays consumable.
pub const DEFAULT_ACTIVATION_LIFESPAN: Duration = Duration::from_secs(5);

/// Access to the transient user activation of a window.
pub trait ActivationGate: Send + Sync {
    /// Consume a pending activation. Returns `false` if none is present.
    fn consume_if_present(&self) -> bool;
}

/// A time-bounded activation flag.
///
/// [`notify`](Self::notify) records a user interaction. The activation can
/// then be consumed once, until the lifespan runs out.
///
/// # Example
///
/// ```rust
/// use translator_client::{ActivationGate, TransientActivation};
///
/// let activation = TransientActivation::new();
/// assert!(!activation.consume_if_present());
///
/// activation.notify();
/// assert!(activation.consume_if_present());
/// assert!(!activation.consume_if_present());
/// ```
#[derive(Debug)]
pub struct TransientActivation {
    lifespan: Duration,
    activated_at: Mutex<Option<Instant>>,
}

impl TransientActivation {
    /// Create a gate with [`DEFAULT_ACTIVATION_LIFESPAN`].
    pub fn new() -> Self {
        Self::with_lifespan(DEFAULT_ACTIVATION_LIFESPAN)
    }

    /// Create a gate whose activations expire after `lifespan`.
    pub fn with_lifespan(lifespan: Duration) -> Self {
        Self {
            lifespan,
            activated_at: Mutex::new(None),
        }
    }

    /// Record a user interaction now.
    pub fn notify(&self) {
        *self.lock() = Some(Instant::now());
    }

    /// Whether an unexpired activation is pending.
    pub fn is_active(&self) -> bool {
        let activated_at = *self.lock();
        activated_at.is_some_and(|at| at.elapsed() <= self.lifespan)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<Instant>> {
        // A panic while holding the guard cannot leave the Option invalid.
        self.activated_at
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for TransientActivation {
    fn default() -> Self {
        Self::new()
    }
}

impl ActivationGate for TransientActivation {
    fn consume_if_present(&self) -> bool {
        match self.lock().take() {
            Some(at) => at.elapsed() <= self.lifespan,
            None => false,
        }
    }
}

/// Severity of a console message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsoleLevel {
    /// Informational.
    Info,
    /// Something the developer should look at.
    Warning,
    /// A failure.
    Error,
}

/// Diagnostic sink visible to developers but never to the calling code.
pub trait Console: Send + Sync {
    /// Record one message.
    fn add_message(&self, level: ConsoleLevel, message: &str);
}

/// Console that forwards messages to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingConsole;

impl Console for TracingConsole {
    fn add_message(&self, level: ConsoleLevel, message: &str) {
        match level {
            ConsoleLevel::Info => tracing::info!(target: "translator_client::console", "{message}"),
            ConsoleLevel::Warning => {
                tracing::warn!(target: "translator_client::console", "{message}")
            }
            ConsoleLevel::Error => {
                tracing::error!(target: "translator_client::console", "{message}")
            }
        }
    }
}

/// Kind of global scope a request was issued from.
#[derive(Clone)]
pub enum ContextKind {
    /// A document window, which can consume user activation.
    Window(Arc<dyn ActivationGate>),
    /// An extension service worker. Activation checks are skipped.
    ServiceWorker,
    /// A dedicated worker. Translator creation is not exposed here.
    DedicatedWorker,
    /// A shared worker. Translator creation is not exposed here.
    SharedWorker,
}

impl ContextKind {
    /// Whether translator creation may be called from this scope at all.
    pub fn supports_translator(&self) -> bool {
        matches!(self, Self::Window(_) | Self::ServiceWorker)
    }

    /// The activation gate, if this scope has one.
    pub fn activation_gate(&self) -> Option<&dyn ActivationGate> {
        match self {
            Self::Window(gate) => Some(gate.as_ref()),
            Self::ServiceWorker | Self::DedicatedWorker | Self::SharedWorker => None,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Window(_) => "Window",
            Self::ServiceWorker => "ServiceWorker",
            Self::DedicatedWorker => "DedicatedWorker",
            Self::SharedWorker => "SharedWorker",
        }
    }
}

impl fmt::Debug for ContextKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Scope plus diagnostic console for one or more creation requests.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use translator_client::{ExecutionContext, TransientActivation};
///
/// let activation = Arc::new(TransientActivation::new());
/// let context = ExecutionContext::window(activation.clone());
/// assert!(context.kind().supports_translator());
/// ```
#[derive(Clone)]
pub struct ExecutionContext {
    kind: ContextKind,
    console: Arc<dyn Console>,
}

impl ExecutionContext {
    /// Context for `kind` logging to [`TracingConsole`].
    pub fn new(kind: ContextKind) -> Self {
        Self {
            kind,
            console: Arc::new(TracingConsole),
        }
    }

    /// A window context backed by `gate`.
    pub fn window(gate: Arc<dyn ActivationGate>) -> Self {
        Self::new(ContextKind::Window(gate))
    }

    /// An extension service worker context.
    pub fn service_worker() -> Self {
        Self::new(ContextKind::ServiceWorker)
    }

    /// Replace the diagnostic console.
    pub fn with_console(mut self, console: Arc<dyn Console>) -> Self {
        self.console = console;
        self
    }

    /// The scope kind.
    pub fn kind(&self) -> &ContextKind {
        &self.kind
    }

    /// The diagnostic console.
    pub fn console(&self) -> &dyn Console {
        self.console.as_ref()
    }
}

impl fmt::Debug for ExecutionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecutionContext")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_consumed_once() {
        let activation = TransientActivation::new();
        activation.notify();
        assert!(activation.is_active());
        assert!(activation.consume_if_present());
        assert!(!activation.is_active());
        assert!(!activation.consume_if_present());
    }

    #[test]
    fn test_activation_expires() {
        let activation = TransientActivation::with_lifespan(Duration::ZERO);
        activation.notify();
        std::thread::sleep(Duration::from_millis(5));
        assert!(!activation.is_active());
        assert!(!activation.consume_if_present());
    }

    #[test]
    fn test_supported_contexts() {
        let gate: Arc<dyn ActivationGate> = Arc::new(TransientActivation::new());
        assert!(ContextKind::Window(gate).supports_translator());
        assert!(ContextKind::ServiceWorker.supports_translator());
        assert!(!ContextKind::DedicatedWorker.supports_translator());
        assert!(!ContextKind::SharedWorker.supports_translator());
    }

    #[test]
    fn test_only_window_has_gate() {
        let window = ExecutionContext::window(Arc::new(TransientActivation::new()));
        assert!(window.kind().activation_gate().is_some());
        assert!(ExecutionContext::service_worker()
            .kind()
            .activation_gate()
            .is_none());
    }

    #[test]
    fn test_custom_console() {
        #[derive(Default)]
        struct Recording(Mutex<Vec<(ConsoleLevel, String)>>);
        impl Console for Recording {
            fn add_message(&self, level: ConsoleLevel, message: &str) {
                self.0.lock().unwrap().push((level, message.to_string()));
            }
        }

        let console = Arc::new(Recording::default());
        let context = ExecutionContext::service_worker().with_console(console.clone());
        context.console().add_message(ConsoleLevel::Warning, "hello");

        assert_eq!(
            *console.0.lock().unwrap(),
            vec![(ConsoleLevel::Warning, "hello".to_string())]
        );
    }

    #[test]
    fn test_debug_format() {
        let context = ExecutionContext::service_worker();
        assert!(format!("{:?}", context).contains("ServiceWorker"));
    }
}
