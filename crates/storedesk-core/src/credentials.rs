//! Secure storage for gateway access tokens using the system keyring.
//!
//! The access token of a signed-in user is kept in the platform's native
//! credential storage rather than the settings file:
//! - Linux: Secret Service (GNOME Keyring, `KWallet`)
//! - macOS: Keychain
//! - Windows: Credential Manager

use keyring::Entry;
use tracing::{debug, warn};

use crate::seller::UserId;

/// Service name used for keyring entries.
const SERVICE_NAME: &str = "storedesk";

/// Credential type identifier for gateway access tokens.
const ACCESS_TOKEN_CREDENTIAL: &str = "access_token";

/// Error type for credential operations.
#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    /// Failed to access keyring.
    #[error("Keyring error: {0}")]
    Keyring(#[from] keyring::Error),

    /// A user ID is required for credential operations.
    #[error("User ID is required for credential storage")]
    MissingUserId,
}

/// Result type for credential operations.
pub type CredentialResult<T> = std::result::Result<T, CredentialError>;

/// Generates the keyring entry key for a credential.
fn credential_key(user_id: &UserId, credential_type: &str) -> CredentialResult<String> {
    if user_id.as_str().trim().is_empty() {
        return Err(CredentialError::MissingUserId);
    }
    Ok(format!("{SERVICE_NAME}_{credential_type}_{user_id}"))
}

fn token_entry(user_id: &UserId) -> CredentialResult<Entry> {
    let key = credential_key(user_id, ACCESS_TOKEN_CREDENTIAL)?;
    Ok(Entry::new(SERVICE_NAME, &key)?)
}

/// Stores a gateway access token in the system keyring.
///
/// # Errors
///
/// Returns an error if the user ID is blank or the keyring operation fails.
pub fn store_access_token(user_id: &UserId, token: &str) -> CredentialResult<()> {
    token_entry(user_id)?.set_password(token)?;
    debug!("Stored access token for user {user_id}");
    Ok(())
}

/// Retrieves a gateway access token from the system keyring.
///
/// # Errors
///
/// Returns an error if the user ID is blank or the keyring operation fails.
pub fn get_access_token(user_id: &UserId) -> CredentialResult<Option<String>> {
    match token_entry(user_id)?.get_password() {
        Ok(token) => Ok(Some(token)),
        Err(keyring::Error::NoEntry) => {
            debug!("No access token found for user {user_id}");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Deletes the access token for a user. A missing entry is not an error.
///
/// # Errors
///
/// Returns an error if the user ID is blank or the keyring operation fails.
pub fn delete_access_token(user_id: &UserId) -> CredentialResult<()> {
    match token_entry(user_id)?.delete_credential() {
        Ok(()) => debug!("Deleted access token for user {user_id}"),
        Err(keyring::Error::NoEntry) => {
            debug!("No access token to delete for user {user_id}");
        }
        Err(e) => {
            warn!("Failed to delete access token: {e}");
            return Err(e.into());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_key_format() {
        let key = credential_key(&UserId::new("8f14e45f"), ACCESS_TOKEN_CREDENTIAL).unwrap();
        assert_eq!(key, "storedesk_access_token_8f14e45f");
    }

    #[test]
    fn test_blank_user_id_rejected() {
        let err = credential_key(&UserId::new("  "), ACCESS_TOKEN_CREDENTIAL).unwrap_err();
        assert!(matches!(err, CredentialError::MissingUserId));
    }
}
