//! Provider-side creation failures and their diagnostic messages.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum::IntoEnumIterator;

macro_rules! supported_languages_doc {
    () => {
        "See https://developer.chrome.com/docs/ai/translator-api?#supported-languages for more details."
    };
}

/// Documentation reference appended to language-related failures.
pub const SUPPORTED_LANGUAGES_DOC: &str = supported_languages_doc!();

/// Why the provider failed to create a translator.
///
/// The kind is reported to the diagnostic console only. Callers always see
/// the same [`CreateError::UnableToCreate`](crate::CreateError::UnableToCreate)
/// rejection, whatever the kind.
///
/// # Example
///
/// ```rust
/// use translator_client::{CreationErrorKind, ErrorTier};
///
/// let kind = CreationErrorKind::PendingTaskLimitExceeded;
/// assert_eq!(kind.debug_message(), "Too many Translator API requests are queued.");
/// assert_eq!(kind.tier(), ErrorTier::Capacity);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum CreationErrorKind {
    /// The translation library could not be loaded.
    InvalidBinary,
    /// The translation library does not export the expected entry points.
    InvalidFunctionPointer,
    /// The translation library failed to initialize.
    FailedToInitialize,
    /// The translation library refused to create a translator.
    FailedToCreate,
    /// The language pair failed the preferred-languages check.
    AcceptLanguagesCheckFailed,
    /// Too many language packs are installed.
    LanguagePackLimitExceeded,
    /// The translation service process crashed.
    ServiceCrashed,
    /// Translation is disabled by enterprise policy.
    DisallowedByPolicy,
    /// Too many translation service instances are running.
    ServiceCountLimitExceeded,
    /// Too many creation requests are queued.
    PendingTaskLimitExceeded,
    /// The installed translation library has an unexpected version.
    InvalidVersion,
}

/// How a failure is treated from the caller's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorTier {
    /// Permission or policy denial. Never retried.
    Policy,
    /// A resource or capacity limit. The caller may retry later.
    Capacity,
    /// Broken installation or a runtime fault in the provider.
    Integrity,
}

impl ErrorTier {
    /// Whether a later retry may succeed without any configuration change.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Capacity)
    }
}

impl CreationErrorKind {
    /// Message written to the diagnostic console for this failure.
    pub fn debug_message(self) -> &'static str {
        match self {
            Self::InvalidBinary => "Failed to load the translation library.",
            Self::InvalidFunctionPointer => "The translation library is not compatible.",
            Self::FailedToInitialize => "Failed to initialize the translation library.",
            Self::FailedToCreate => "The translation library failed to create a translator.",
            Self::AcceptLanguagesCheckFailed => concat!(
                "The preferred languages check for Translator API failed. ",
                supported_languages_doc!()
            ),
            Self::LanguagePackLimitExceeded => concat!(
                "The Translator API language pack count exceeded the limitation. ",
                supported_languages_doc!()
            ),
            Self::ServiceCrashed => "The translation service crashed.",
            Self::DisallowedByPolicy => "The translation is disallowed by policy.",
            Self::ServiceCountLimitExceeded => {
                "The translation service count exceeded the limitation."
            }
            Self::PendingTaskLimitExceeded => "Too many Translator API requests are queued.",
            Self::InvalidVersion => "The translation library version is invalid.",
        }
    }

    /// The tier this failure belongs to.
    pub fn tier(self) -> ErrorTier {
        match self {
            Self::AcceptLanguagesCheckFailed | Self::DisallowedByPolicy => ErrorTier::Policy,
            Self::LanguagePackLimitExceeded
            | Self::ServiceCountLimitExceeded
            | Self::PendingTaskLimitExceeded => ErrorTier::Capacity,
            Self::InvalidBinary
            | Self::InvalidFunctionPointer
            | Self::FailedToInitialize
            | Self::FailedToCreate
            | Self::ServiceCrashed
            | Self::InvalidVersion => ErrorTier::Integrity,
        }
    }

    /// Iterator over every failure kind.
    pub fn all() -> impl Iterator<Item = Self> {
        <Self as IntoEnumIterator>::iter()
    }
}

impl fmt::Display for CreationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.debug_message())
    }
}
