//! Wire row types and their conversion into domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use storedesk_core::{
    CatalogItem, GatewayError, Inquiry, InquiryId, InquiryItem, InquiryStatus, Seller, SellerId,
    UserId,
};

/// Columns requested for seller lookups.
pub const SELLER_COLUMNS: &str = "id,user_id,business_name,slug,phone,email";

/// Columns requested for inquiries, with product and service names embedded.
pub const INQUIRY_COLUMNS: &str =
    "id,customer_name,email,phone,message,created_at,status,products(name),services(name)";

/// Columns requested for products and services.
pub const CATALOG_COLUMNS: &str = "id,name,view_count";

/// Error body returned by the backend on failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    /// Machine-readable code.
    #[serde(default)]
    pub code: Option<String>,
    /// Description.
    #[serde(default)]
    pub message: Option<String>,
    /// Extra detail.
    #[serde(default)]
    pub details: Option<String>,
    /// Suggested fix.
    #[serde(default)]
    pub hint: Option<String>,
}

impl ErrorBody {
    /// Convert into a gateway error carrying the HTTP status.
    #[must_use]
    pub fn into_error(self, status: u16) -> GatewayError {
        let message = match (self.message, self.details) {
            (Some(message), Some(details)) => format!("{message}: {details}"),
            (Some(message), None) => message,
            (None, Some(details)) => details,
            (None, None) => format!("request failed with HTTP {status}"),
        };
        if let Some(hint) = &self.hint {
            debug!("Backend hint: {hint}");
        }
        let error = GatewayError::new(message).with_status(status);
        match self.code {
            Some(code) => error.with_code(code),
            None => error,
        }
    }
}

/// Identifier as sent by the backend: text or integer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RowId {
    /// UUID or other text key.
    Text(String),
    /// Serial key.
    Number(i64),
}

impl std::fmt::Display for RowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(id) => f.write_str(id),
            Self::Number(id) => write!(f, "{id}"),
        }
    }
}

/// A `sellers` row.
#[derive(Debug, Clone, Deserialize)]
pub struct SellerRow {
    id: RowId,
    user_id: RowId,
    #[serde(default)]
    business_name: Option<String>,
    #[serde(default)]
    slug: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    email: Option<String>,
}

impl From<SellerRow> for Seller {
    fn from(row: SellerRow) -> Self {
        Self {
            id: SellerId::new(row.id.to_string()),
            user_id: UserId::new(row.user_id.to_string()),
            business_name: row.business_name.unwrap_or_default(),
            slug: row.slug,
            phone: row.phone,
            email: row.email,
        }
    }
}

/// An embedded `{ "name": ... }` relation.
#[derive(Debug, Clone, Deserialize)]
pub struct NameRef {
    #[serde(default)]
    name: Option<String>,
}

/// An `inquiries` row with embedded product/service names.
#[derive(Debug, Clone, Deserialize)]
pub struct InquiryRow {
    id: RowId,
    #[serde(default)]
    customer_name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    message: Option<String>,
    created_at: DateTime<Utc>,
    status: InquiryStatus,
    #[serde(default)]
    products: Option<NameRef>,
    #[serde(default)]
    services: Option<NameRef>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl From<InquiryRow> for Inquiry {
    fn from(row: InquiryRow) -> Self {
        let product = row.products.and_then(|p| non_blank(p.name));
        let service = row.services.and_then(|s| non_blank(s.name));
        let item = match (product, service) {
            (Some(product), Some(_)) => {
                debug!("Inquiry {} references both a product and a service", row.id);
                Some(InquiryItem::Product(product))
            }
            (Some(product), None) => Some(InquiryItem::Product(product)),
            (None, Some(service)) => Some(InquiryItem::Service(service)),
            (None, None) => None,
        };

        Self {
            id: InquiryId::new(row.id.to_string()),
            customer_name: row.customer_name.unwrap_or_default(),
            email: non_blank(row.email),
            phone: non_blank(row.phone),
            message: row.message.unwrap_or_default(),
            created_at: row.created_at,
            status: row.status,
            item,
        }
    }
}

/// A `products` or `services` row.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogRow {
    id: RowId,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    view_count: Option<i64>,
}

impl From<CatalogRow> for CatalogItem {
    fn from(row: CatalogRow) -> Self {
        Self {
            id: row.id.to_string(),
            name: row.name.unwrap_or_default(),
            view_count: row.view_count.map(|v| u64::try_from(v).unwrap_or(0)),
        }
    }
}

/// Body of a status update.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StatusPatch {
    /// New status.
    pub status: InquiryStatus,
}
