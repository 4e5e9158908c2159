//! Availability answers from the provider and the gate that classifies them.

use crate::CreationErrorKind;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Provider's answer to "can a translator be created for this pair?".
///
/// Every method on this type matches exhaustively, so adding a variant
/// forces a decision on activation and blocking.
///
/// # Example
///
/// ```rust
/// use translator_client::{Availability, AvailabilityResult};
///
/// let result = AvailabilityResult::NeedsLanguagePackDownload;
/// assert!(result.requires_user_activation());
/// assert_eq!(result.availability(), Availability::Downloadable);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum AvailabilityResult {
    /// A translator can be created right away.
    Ready,
    /// The translation library has to be downloaded first.
    NeedsLibraryDownload,
    /// The language pack has to be downloaded first.
    NeedsLanguagePackDownload,
    /// Both the library and the language pack have to be downloaded.
    NeedsLibraryAndLanguagePackDownload,
    /// Everything is on disk but the translator itself must be created.
    NeedsDownloadThenCreate,
    /// One of the languages is not supported.
    BlockedUnsupportedLanguage,
    /// The preferred-languages check failed.
    BlockedPolicyCheckFailed,
    /// Too many language packs are installed.
    BlockedLanguagePackLimitExceeded,
    /// The translation service crashed.
    BlockedServiceCrashed,
    /// Translation is disabled by policy.
    BlockedDisallowedByPolicy,
    /// Too many translation services are running.
    BlockedServiceCountLimitExceeded,
}

/// Coarse availability reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    /// Ready to use.
    Available,
    /// Usable after a download, which needs a user activation.
    Downloadable,
    /// Cannot be created in this environment.
    Unavailable,
}

/// Why an availability answer blocks creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockedReason {
    /// One of the languages is not supported.
    UnsupportedLanguage,
    /// Blocked for a reason that has a provider failure twin.
    Provider(CreationErrorKind),
}

impl BlockedReason {
    /// Message written to the diagnostic console.
    pub fn debug_message(self) -> &'static str {
        match self {
            Self::UnsupportedLanguage => {
                "The source or target language is not supported by the Translator API."
            }
            Self::Provider(kind) => kind.debug_message(),
        }
    }
}

/// Outcome of [`classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateDecision {
    /// A fresh user activation must be consumed before creating.
    pub requires_activation: bool,
    /// Creation must not be attempted at all.
    pub blocked: Option<BlockedReason>,
}

/// Classify a provider availability answer.
pub fn classify(result: AvailabilityResult) -> GateDecision {
    GateDecision {
        requires_activation: result.requires_user_activation(),
        blocked: result.blocked_reason(),
    }
}

impl AvailabilityResult {
    /// Whether creating needs a download, and therefore a user activation.
    pub fn requires_user_activation(self) -> bool {
        match self {
            Self::NeedsLibraryDownload
            | Self::NeedsLanguagePackDownload
            | Self::NeedsLibraryAndLanguagePackDownload
            | Self::NeedsDownloadThenCreate => true,
            Self::Ready
            | Self::BlockedUnsupportedLanguage
            | Self::BlockedPolicyCheckFailed
            | Self::BlockedLanguagePackLimitExceeded
            | Self::BlockedServiceCrashed
            | Self::BlockedDisallowedByPolicy
            | Self::BlockedServiceCountLimitExceeded => false,
        }
    }

    /// Why creation is blocked, or `None` if it may proceed.
    ///
    /// A blocked answer is final: the client logs the reason's message and
    /// rejects without sending a create request, so the provider never
    /// reports its own failure for it.
    pub fn blocked_reason(self) -> Option<BlockedReason> {
        let kind = match self {
            Self::Ready
            | Self::NeedsLibraryDownload
            | Self::NeedsLanguagePackDownload
            | Self::NeedsLibraryAndLanguagePackDownload
            | Self::NeedsDownloadThenCreate => return None,
            Self::BlockedUnsupportedLanguage => return Some(BlockedReason::UnsupportedLanguage),
            Self::BlockedPolicyCheckFailed => CreationErrorKind::AcceptLanguagesCheckFailed,
            Self::BlockedLanguagePackLimitExceeded => CreationErrorKind::LanguagePackLimitExceeded,
            Self::BlockedServiceCrashed => CreationErrorKind::ServiceCrashed,
            Self::BlockedDisallowedByPolicy => CreationErrorKind::DisallowedByPolicy,
            Self::BlockedServiceCountLimitExceeded => CreationErrorKind::ServiceCountLimitExceeded,
        };
        Some(BlockedReason::Provider(kind))
    }

    /// Coarse availability for callers.
    pub fn availability(self) -> Availability {
        if self.blocked_reason().is_some() {
            Availability::Unavailable
        } else if self.requires_user_activation() {
            Availability::Downloadable
        } else {
            Availability::Available
        }
    }

    /// Iterator over every availability answer.
    pub fn all() -> impl Iterator<Item = Self> {
        <Self as IntoEnumIterator>::iter()
    }
}
