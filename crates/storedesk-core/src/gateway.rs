//! Remote data gateway contract.
//!
//! All persistent state lives in the hosted backend. This trait is the only
//! way the rest of the crate reads or writes it, so services can be driven by
//! the HTTP client in `storedesk-gateway` or by an in-memory double in tests.

use async_trait::async_trait;

use crate::catalog::{CatalogItem, CatalogKind};
use crate::inquiry::{Inquiry, InquiryId, InquiryStatus};
use crate::seller::{Seller, SellerId, UserId};

/// Error code the backend returns when a single-row query matched nothing.
pub const NO_ROWS_CODE: &str = "PGRST116";

/// Error payload returned by a failed gateway call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub struct GatewayError {
    /// Machine-readable error code, when the backend sent one.
    pub code: Option<String>,
    /// HTTP status of the failed response, if the request got that far.
    pub status: Option<u16>,
    /// Human-readable description.
    pub message: String,
}

impl GatewayError {
    /// Creates an error with only a message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            status: None,
            message: message.into(),
        }
    }

    /// Sets the machine-readable error code.
    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Sets the HTTP status.
    #[must_use]
    pub const fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Check whether this is the backend's "no rows" answer.
    #[must_use]
    pub fn is_no_rows(&self) -> bool {
        self.code.as_deref() == Some(NO_ROWS_CODE)
    }
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.code, self.status) {
            (Some(code), _) => write!(f, "{} ({code})", self.message),
            (None, Some(status)) => write!(f, "{} (HTTP {status})", self.message),
            (None, None) => f.write_str(&self.message),
        }
    }
}

/// Result type for gateway calls.
pub type GatewayResult<T> = std::result::Result<T, GatewayError>;

/// Authenticated request/response access to seller data.
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Look up the seller owned by a user.
    ///
    /// Returns `Ok(None)` when the user has not onboarded as a seller yet.
    async fn find_seller(&self, user_id: &UserId) -> GatewayResult<Option<Seller>>;

    /// Fetch all inquiries for a seller, newest first, with the referenced
    /// product or service name joined in.
    async fn list_inquiries(&self, seller_id: &SellerId) -> GatewayResult<Vec<Inquiry>>;

    /// Write the status field of one inquiry.
    async fn update_inquiry_status(
        &self,
        seller_id: &SellerId,
        inquiry_id: &InquiryId,
        status: InquiryStatus,
    ) -> GatewayResult<()>;

    /// Fetch a seller's products or services.
    async fn list_catalog(
        &self,
        seller_id: &SellerId,
        kind: CatalogKind,
    ) -> GatewayResult<Vec<CatalogItem>>;

    /// Count a seller's inquiries in the given status.
    async fn count_inquiries(
        &self,
        seller_id: &SellerId,
        status: InquiryStatus,
    ) -> GatewayResult<u64>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_rows_detection() {
        assert!(GatewayError::new("not found").with_code(NO_ROWS_CODE).is_no_rows());
        assert!(!GatewayError::new("boom").with_code("42P01").is_no_rows());
        assert!(!GatewayError::new("boom").is_no_rows());
    }

    #[test]
    fn test_display_prefers_code() {
        let err = GatewayError::new("JWT expired")
            .with_code("PGRST301")
            .with_status(401);
        assert_eq!(err.to_string(), "JWT expired (PGRST301)");

        let err = GatewayError::new("Bad gateway").with_status(502);
        assert_eq!(err.to_string(), "Bad gateway (HTTP 502)");
    }
}
