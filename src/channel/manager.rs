//! The provider's administrative interface.

use super::{CreateClientRemote, ProgressRemote};
use crate::AvailabilityResult;

/// Parameters of a creation request sent to the provider.
#[derive(Debug)]
pub struct TranslatorCreateOptions {
    /// BCP 47 code of the language to translate from.
    pub source_language: String,
    /// BCP 47 code of the language to translate into.
    pub target_language: String,
    /// Where to push download progress, if anyone is listening.
    pub progress: Option<ProgressRemote>,
}

/// Privileged translation service that creates translators.
///
/// `Handle` is the provider's own representation of a created translator.
/// The client never looks inside it.
///
/// # Example
///
/// ```rust
/// use translator_client::{
///     AvailabilityResult, CreateClientRemote, CreationResult, TranslationManager,
///     TranslatorCreateOptions,
/// };
///
/// struct AlwaysReady;
///
/// #[async_trait::async_trait]
/// impl TranslationManager for AlwaysReady {
///     type Handle = String;
///
///     async fn can_create_translator(&self, _source: &str, _target: &str) -> AvailabilityResult {
///         AvailabilityResult::Ready
///     }
///
///     fn create_translator(
///         &self,
///         client: CreateClientRemote<String>,
///         options: TranslatorCreateOptions,
///     ) {
///         let name = format!("{}->{}", options.source_language, options.target_language);
///         let _ = client.on_result(CreationResult::Success(name));
///     }
/// }
/// ```
#[async_trait::async_trait]
pub trait TranslationManager: Send + Sync {
    /// Provider-side translator handle.
    type Handle: Send + 'static;

    /// Report whether a translator can be created for the pair.
    async fn can_create_translator(
        &self,
        source_language: &str,
        target_language: &str,
    ) -> AvailabilityResult;

    /// Start creating a translator. The reply is delivered on `client`.
    fn create_translator(
        &self,
        client: CreateClientRemote<Self::Handle>,
        options: TranslatorCreateOptions,
    );
}
