//! Error types for the core library.

use thiserror::Error;

use crate::credentials::CredentialError;
use crate::gateway::GatewayError;
use crate::inquiry::InquiryId;
use crate::service::ReplyValidationError;

/// Errors that can occur in core operations.
///
/// None of these are fatal: callers surface them as a notification and keep
/// the affected view in an empty or stale-but-consistent state.
#[derive(Debug, Error)]
pub enum Error {
    /// Remote read failed.
    #[error("Failed to load {what}: {source}")]
    Fetch {
        /// What was being loaded.
        what: &'static str,
        /// Gateway failure.
        #[source]
        source: GatewayError,
    },

    /// Remote write failed.
    #[error("Failed to update inquiry {id}: {source}")]
    Update {
        /// Inquiry being updated.
        id: InquiryId,
        /// Gateway failure.
        #[source]
        source: GatewayError,
    },

    /// Reply input was rejected.
    #[error("Invalid reply: {0}")]
    Validation(#[from] ReplyValidationError),

    /// Inquiry has neither a phone number nor an email address.
    #[error("Inquiry {0} has no phone number or email address to reply to")]
    NoContactChannel(InquiryId),

    /// Inquiry is not in the loaded store.
    #[error("Inquiry not found: {0}")]
    InquiryNotFound(InquiryId),

    /// Handing the reply to a messaging channel failed.
    #[error("Could not open messaging channel: {0}")]
    Launch(String),

    /// Missing or invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Credential storage error.
    #[error("Credential error: {0}")]
    Credential(#[from] CredentialError),
}

impl Error {
    /// Creates a fetch error for the named resource.
    #[must_use]
    pub const fn fetch(what: &'static str, source: GatewayError) -> Self {
        Self::Fetch { what, source }
    }
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
