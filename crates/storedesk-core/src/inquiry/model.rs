//! Inquiry data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::service::ChannelKind;

/// Unique identifier for an inquiry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InquiryId(pub String);

impl InquiryId {
    /// Create a new inquiry ID.
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

impl std::fmt::Display for InquiryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where an inquiry stands in the seller's workflow.
///
/// Every status may move to every other status by explicit user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryStatus {
    /// Not yet answered.
    #[default]
    New,
    /// The seller has replied through a messaging channel.
    Replied,
    /// No further action needed.
    Closed,
}

impl InquiryStatus {
    /// All statuses in display order.
    pub const ALL: [Self; 3] = [Self::New, Self::Replied, Self::Closed];

    /// Convert to backend string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Replied => "replied",
            Self::Closed => "closed",
        }
    }

    /// Human-readable display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Replied => "Replied",
            Self::Closed => "Closed",
        }
    }

    /// Statuses reachable from this one.
    #[must_use]
    pub const fn transitions(&self) -> [Self; 2] {
        match self {
            Self::New => [Self::Replied, Self::Closed],
            Self::Replied => [Self::New, Self::Closed],
            Self::Closed => [Self::New, Self::Replied],
        }
    }
}

impl std::fmt::Display for InquiryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known inquiry status.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown inquiry status '{0}' (expected new, replied or closed)")]
pub struct UnknownStatus(pub String);

impl std::str::FromStr for InquiryStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "new" => Ok(Self::New),
            "replied" => Ok(Self::Replied),
            "closed" => Ok(Self::Closed),
            _ => Err(UnknownStatus(s.to_string())),
        }
    }
}

/// The catalog item an inquiry is about.
///
/// The name is denormalized at fetch time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "lowercase")]
pub enum InquiryItem {
    /// A product, by name.
    Product(String),
    /// A service, by name.
    Service(String),
}

impl InquiryItem {
    /// Name of the referenced item.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Product(name) | Self::Service(name) => name,
        }
    }

    /// Product name, if this references a product.
    #[must_use]
    pub fn product_name(&self) -> Option<&str> {
        match self {
            Self::Product(name) => Some(name),
            Self::Service(_) => None,
        }
    }

    /// Service name, if this references a service.
    #[must_use]
    pub fn service_name(&self) -> Option<&str> {
        match self {
            Self::Service(name) => Some(name),
            Self::Product(_) => None,
        }
    }
}

/// A customer-submitted message about a product or service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inquiry {
    /// Unique identifier within the seller's inquiries.
    pub id: InquiryId,
    /// Name the customer gave.
    pub customer_name: String,
    /// Customer email address.
    #[serde(default)]
    pub email: Option<String>,
    /// Customer phone number, as entered.
    #[serde(default)]
    pub phone: Option<String>,
    /// Free-text message body.
    pub message: String,
    /// When the customer submitted the inquiry.
    pub created_at: DateTime<Utc>,
    /// Current workflow status.
    #[serde(default)]
    pub status: InquiryStatus,
    /// Referenced product or service.
    #[serde(default)]
    pub item: Option<InquiryItem>,
}

impl Inquiry {
    /// Name of the referenced product or service, if any.
    #[must_use]
    pub fn item_name(&self) -> Option<&str> {
        self.item.as_ref().map(InquiryItem::name)
    }

    /// Check whether the inquiry has not been answered yet.
    #[must_use]
    pub const fn is_new(&self) -> bool {
        matches!(self.status, InquiryStatus::New)
    }

    /// Phone number reduced to its digits, if any digits remain.
    #[must_use]
    pub fn normalized_phone(&self) -> Option<String> {
        self.phone.as_deref().and_then(normalize_phone)
    }

    /// Email address, if present and non-blank.
    #[must_use]
    pub fn contact_email(&self) -> Option<&str> {
        self.email
            .as_deref()
            .map(str::trim)
            .filter(|email| !email.is_empty())
    }

    /// Channel a reply should go through: phone when it has digits, else email.
    #[must_use]
    pub fn contact_channel(&self) -> Option<ChannelKind> {
        if self.normalized_phone().is_some() {
            Some(ChannelKind::Phone)
        } else if self.contact_email().is_some() {
            Some(ChannelKind::Email)
        } else {
            None
        }
    }
}

/// Strip every non-digit character from a phone number.
///
/// Returns `None` when nothing is left.
#[must_use]
pub fn normalize_phone(phone: &str) -> Option<String> {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() { None } else { Some(digits) }
}
