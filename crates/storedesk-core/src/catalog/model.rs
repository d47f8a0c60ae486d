//! Catalog model types.

use serde::{Deserialize, Serialize};

/// Which catalog collection an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    /// A physical or digital product.
    Product,
    /// A bookable service.
    Service,
}

impl CatalogKind {
    /// Backend collection name.
    #[must_use]
    pub const fn collection(&self) -> &'static str {
        match self {
            Self::Product => "products",
            Self::Service => "services",
        }
    }

    /// Human-readable display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Product => "Product",
            Self::Service => "Service",
        }
    }
}

/// A product or service as seen by the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Record identifier.
    pub id: String,
    /// Item name.
    #[serde(default)]
    pub name: String,
    /// Number of storefront views, absent when the backend never counted any.
    #[serde(default)]
    pub view_count: Option<u64>,
}

impl CatalogItem {
    /// View count with absent values treated as zero.
    #[must_use]
    pub fn views(&self) -> u64 {
        self.view_count.unwrap_or(0)
    }
}
