//! Creation requests and the translators they produce.

use crate::progress::SharedObserver;
use std::fmt;
use tokio_util::sync::CancellationToken;

/// A source/target language pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguagePair {
    /// Language to translate from.
    pub source: String,
    /// Language to translate into.
    pub target: String,
}

impl LanguagePair {
    /// Create a pair from two language codes.
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// A request to create a translator.
///
/// # Example
///
/// ```rust
/// use translator_client::{CreateRequest, ProgressEvent};
/// use tokio_util::sync::CancellationToken;
///
/// let signal = CancellationToken::new();
/// let request = CreateRequest::new("en", "fr")
///     .with_monitor(|event: ProgressEvent| println!("{:?}", event))
///     .with_signal(signal.clone());
/// assert_eq!(request.source_language, "en");
/// ```
#[derive(Clone)]
pub struct CreateRequest {
    /// Language to translate from.
    pub source_language: String,
    /// Language to translate into.
    pub target_language: String,
    /// Receives download progress.
    pub monitor: Option<SharedObserver>,
    /// Cancels the creation while it is in flight.
    pub signal: Option<CancellationToken>,
}

impl CreateRequest {
    /// A request with no monitor and no signal.
    pub fn new(source_language: impl Into<String>, target_language: impl Into<String>) -> Self {
        Self {
            source_language: source_language.into(),
            target_language: target_language.into(),
            monitor: None,
            signal: None,
        }
    }

    /// Attach a progress observer.
    pub fn with_monitor<O>(mut self, observer: O) -> Self
    where
        O: crate::ProgressObserver + 'static,
    {
        self.monitor = Some(std::sync::Arc::new(observer));
        self
    }

    /// Attach a cancellation signal.
    pub fn with_signal(mut self, signal: CancellationToken) -> Self {
        self.signal = Some(signal);
        self
    }
}

impl fmt::Debug for CreateRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateRequest")
            .field("source_language", &self.source_language)
            .field("target_language", &self.target_language)
            .field("monitor", &self.monitor.is_some())
            .field("signal", &self.signal)
            .finish()
    }
}

/// A created translator.
///
/// Holds the provider's handle together with the language pair and the
/// signal the creation request carried.
pub struct Translator<H> {
    source_language: String,
    target_language: String,
    handle: H,
    signal: Option<CancellationToken>,
}

impl<H> Translator<H> {
    pub(crate) fn new(
        source_language: String,
        target_language: String,
        handle: H,
        signal: Option<CancellationToken>,
    ) -> Self {
        Self {
            source_language,
            target_language,
            handle,
            signal,
        }
    }

    /// Language this translator reads.
    pub fn source_language(&self) -> &str {
        &self.source_language
    }

    /// Language this translator writes.
    pub fn target_language(&self) -> &str {
        &self.target_language
    }

    /// The provider's handle.
    pub fn handle(&self) -> &H {
        &self.handle
    }

    /// The signal carried over from the creation request.
    pub fn signal(&self) -> Option<&CancellationToken> {
        self.signal.as_ref()
    }

    /// Whether the carried signal has fired.
    pub fn is_aborted(&self) -> bool {
        self.signal
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
    }

    /// Give up the wrapper and keep the provider's handle.
    pub fn into_handle(self) -> H {
        self.handle
    }
}

impl<H: fmt::Debug> fmt::Debug for Translator<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Translator")
            .field("source_language", &self.source_language)
            .field("target_language", &self.target_language)
            .field("handle", &self.handle)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let signal = CancellationToken::new();
        let request = CreateRequest::new("en", "fr").with_signal(signal);

        assert_eq!(request.source_language, "en");
        assert_eq!(request.target_language, "fr");
        assert!(request.monitor.is_none());
        assert!(request.signal.is_some());
    }

    #[test]
    fn test_request_debug_hides_observer() {
        let request = CreateRequest::new("en", "de").with_monitor(|_: crate::ProgressEvent| {});
        let debug = format!("{:?}", request);
        assert!(debug.contains("monitor: true"));
    }

    #[test]
    fn test_translator_accessors() {
        let signal = CancellationToken::new();
        let translator = Translator::new(
            "en".to_string(),
            "ja".to_string(),
            42u32,
            Some(signal.clone()),
        );

        assert_eq!(translator.source_language(), "en");
        assert_eq!(translator.target_language(), "ja");
        assert_eq!(*translator.handle(), 42);
        assert!(!translator.is_aborted());

        signal.cancel();
        assert!(translator.is_aborted());
        assert_eq!(translator.into_handle(), 42);
    }

    #[test]
    fn test_language_pair() {
        let pair = LanguagePair::new("es", "en");
        assert_eq!(pair.source, "es");
        assert_eq!(pair.target, "en");
    }
}
