//! Translator creation and availability functions.

use crate::channel::TranslationManager;
use crate::{
    Availability, ClientOptions, CreateError, CreateRequest, CreateTranslatorClient,
    ExecutionContext, LanguagePair, Translator,
};
use futures::future::join_all;
use tokio::sync::oneshot;

/// Create a translator with default options.
///
/// # Creation Process
///
/// 1. Ask the provider whether the language pair is available
/// 2. Reject blocked pairs without contacting the provider again
/// 3. Consume a user activation if a download is needed (windows only)
/// 4. Send the creation request and relay progress to the monitor
/// 5. Return the translator or the error
///
/// # Returns
///
/// - `Ok(translator)` once the provider has created it
/// - `Err(CreateError::NotAllowed)` if a download needs a user activation
///   that is not present
/// - `Err(CreateError::UnableToCreate)` for every provider-side failure
/// - `Err(CreateError::Aborted)` if the request's signal fired first
///
/// # Panics
///
/// Panics if `context` is neither a window nor a service worker.
///
/// # Example
///
/// ```rust,no_run
/// use translator_client::{create_translator, CreateRequest, ExecutionContext, TranslationManager};
///
/// async fn run<M: TranslationManager>(manager: &M) {
///     let context = ExecutionContext::service_worker();
///     match create_translator(&context, manager, CreateRequest::new("en", "fr")).await {
///         Ok(translator) => println!("ready: {}", translator.target_language()),
///         Err(e) => println!("{}: {}", e.name(), e),
///     }
/// }
/// ```
pub async fn create_translator<M>(
    context: &ExecutionContext,
    manager: &M,
    request: CreateRequest,
) -> Result<Translator<M::Handle>, CreateError>
where
    M: TranslationManager + ?Sized,
{
    create_translator_with_options(context, manager, request, ClientOptions::default()).await
}

/// Create a translator with custom options.
///
/// See [`create_translator`] for the creation process.
pub async fn create_translator_with_options<M>(
    context: &ExecutionContext,
    manager: &M,
    request: CreateRequest,
    options: ClientOptions,
) -> Result<Translator<M::Handle>, CreateError>
where
    M: TranslationManager + ?Sized,
{
    let (tx, rx) = oneshot::channel::<Result<Translator<M::Handle>, CreateError>>();
    let client = CreateTranslatorClient::new(context.clone(), request, tx, options);
    let outcome = client.run(manager).await;
    tracing::debug!(?outcome, "translator creation finished");

    // A resolver dropped uncalled means the request was cancelled.
    rx.await.unwrap_or(Err(CreateError::Aborted))
}

/// Ask the provider how available a language pair is.
///
/// # Example
///
/// ```rust,no_run
/// use translator_client::{availability, Availability, TranslationManager};
///
/// async fn run<M: TranslationManager>(manager: &M) {
///     if availability(manager, "en", "fr").await == Availability::Downloadable {
///         println!("creating will start a download");
///     }
/// }
/// ```
pub async fn availability<M>(manager: &M, source_language: &str, target_language: &str) -> Availability
where
    M: TranslationManager + ?Sized,
{
    manager
        .can_create_translator(source_language, target_language)
        .await
        .availability()
}

/// Ask about several language pairs concurrently.
///
/// Results come back in the order the pairs were given.
pub async fn availability_all<M, I>(manager: &M, pairs: I) -> Vec<(LanguagePair, Availability)>
where
    M: TranslationManager + ?Sized,
    I: IntoIterator<Item = LanguagePair>,
{
    let futures: Vec<_> = pairs
        .into_iter()
        .map(|pair| async move {
            let answer = availability(manager, &pair.source, &pair.target).await;
            (pair, answer)
        })
        .collect();

    join_all(futures).await
}
