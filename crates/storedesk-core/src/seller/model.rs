//! Seller model types.

use serde::{Deserialize, Serialize};

/// Identifier of a seller record in the hosted backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SellerId(pub String);

impl SellerId {
    /// Create a new seller ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SellerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of the authenticated user owning a seller record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    /// Create a new user ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A business owner with a storefront on the marketplace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seller {
    /// Seller record identifier.
    pub id: SellerId,
    /// Owning user.
    pub user_id: UserId,
    /// Business name shown to customers.
    pub business_name: String,
    /// URL slug of the public storefront, if one has been chosen.
    #[serde(default)]
    pub slug: Option<String>,
    /// Business phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Business email address.
    #[serde(default)]
    pub email: Option<String>,
}

impl Seller {
    /// Public storefront URL under the given marketplace base URL.
    ///
    /// Falls back to the seller ID when no slug has been chosen.
    #[must_use]
    pub fn storefront_url(&self, base_url: &str) -> String {
        let slug = self
            .slug
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(self.id.as_str());
        format!("{}/store/{slug}", base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seller(slug: Option<&str>) -> Seller {
        Seller {
            id: SellerId::new("s-1"),
            user_id: UserId::new("u-1"),
            business_name: "Ada's Bakery".to_string(),
            slug: slug.map(ToString::to_string),
            phone: None,
            email: None,
        }
    }

    #[test]
    fn test_storefront_url_uses_slug() {
        let url = seller(Some("ada-bakery")).storefront_url("https://market.example/");
        assert_eq!(url, "https://market.example/store/ada-bakery");
    }

    #[test]
    fn test_storefront_url_falls_back_to_id() {
        assert_eq!(
            seller(Some("  ")).storefront_url("https://market.example"),
            "https://market.example/store/s-1"
        );
        assert_eq!(
            seller(None).storefront_url("https://market.example"),
            "https://market.example/store/s-1"
        );
    }
}
