//! Client options configuration.
//!
//! This module provides the [`ClientOptions`] struct for configuring how
//! translator creation treats user activation.

/// Configuration options for translator creation.
///
/// # Default Behavior
///
/// By default a fresh user activation is required whenever the provider
/// reports that a download is still needed. Service worker contexts never
/// consume activation, whatever this setting says.
///
/// # Example
///
/// ```rust
/// use translator_client::ClientOptions;
///
/// // Use default options (activation required for downloads)
/// let opts = ClientOptions::default();
/// assert!(opts.user_activation_required);
///
/// // Skip the activation check entirely
/// let opts = ClientOptions {
///     user_activation_required: false,
/// };
/// assert!(!opts.user_activation_required);
/// ```
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Require a transient user activation before a download starts.
    ///
    /// When set to `false`, creation proceeds to the provider without
    /// looking at the activation gate.
    ///
    /// Default: `true`
    pub user_activation_required: bool,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            user_activation_required: true,
        }
    }
}
