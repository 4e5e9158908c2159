//! Errors surfaced to callers of translator creation.
//!
//! Every provider failure collapses into [`CreateError::UnableToCreate`].
//! The detailed [`CreationErrorKind`](crate::CreationErrorKind) only reaches
//! the diagnostic console.

use thiserror::Error;

/// Message used for every rejection caused by the provider.
pub const UNABLE_TO_CREATE_MESSAGE: &str =
    "Unable to create translator for the given source and target language.";

/// Message used when a download is needed and no user activation is present.
pub const USER_ACTIVATION_REQUIRED_MESSAGE: &str =
    "Requires handling a user gesture when availability is \"downloading\" or \"downloadable\".";

/// Message used when the caller's signal fired before creation settled.
pub const ABORTED_MESSAGE: &str = "The translator creation was aborted.";

/// Errors that can occur while creating a translator.
///
/// # Example
///
/// ```rust
/// use translator_client::CreateError;
///
/// fn report(error: CreateError) {
///     eprintln!("{}: {}", error.name(), error);
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CreateError {
    /// A download is required and the user has not interacted with the page
    /// recently.
    #[error("{}", USER_ACTIVATION_REQUIRED_MESSAGE)]
    NotAllowed,

    /// The provider could not create a translator for the language pair.
    ///
    /// This covers unsupported languages, policy blocks, capacity limits,
    /// library faults and a crashed service alike.
    #[error("{}", UNABLE_TO_CREATE_MESSAGE)]
    UnableToCreate,

    /// The caller's cancellation signal fired before creation settled.
    #[error("{}", ABORTED_MESSAGE)]
    Aborted,
}

impl CreateError {
    /// DOM-style exception name for this error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use translator_client::CreateError;
    ///
    /// assert_eq!(CreateError::NotAllowed.name(), "NotAllowedError");
    /// ```
    pub fn name(&self) -> &'static str {
        match self {
            Self::NotAllowed => "NotAllowedError",
            Self::UnableToCreate => "NotSupportedError",
            Self::Aborted => "AbortError",
        }
    }
}
