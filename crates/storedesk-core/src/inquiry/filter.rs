//! Inquiry filtering and free-text search.
//!
//! Filtering is a pure function of the inquiry list and the criteria: no
//! hidden state, input order preserved.

use serde::{Deserialize, Serialize};

use super::model::{Inquiry, InquiryStatus};

/// Which statuses to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    /// Every status.
    #[default]
    All,
    /// Only inquiries in one status.
    #[serde(untagged)]
    Only(InquiryStatus),
}

impl StatusFilter {
    /// Check whether a status passes this filter.
    #[must_use]
    pub fn accepts(&self, status: InquiryStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == status,
        }
    }

    /// Convert to string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(status) => status.as_str(),
        }
    }
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StatusFilter {
    type Err = super::model::UnknownStatus;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

/// Session-local filter state for the inquiry inbox.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Status selector.
    pub status: StatusFilter,
    /// Free-text search term. Blank means no search.
    pub search: String,
}

impl FilterCriteria {
    /// Creates criteria from a status selector and search term.
    #[must_use]
    pub fn new(status: StatusFilter, search: impl Into<String>) -> Self {
        Self {
            status,
            search: search.into(),
        }
    }

    /// Check whether an inquiry should be visible.
    ///
    /// The search term matches case-insensitively against the customer name,
    /// the message body and the referenced product or service name.
    #[must_use]
    pub fn matches(&self, inquiry: &Inquiry) -> bool {
        if !self.status.accepts(inquiry.status) {
            return false;
        }

        let term = self.search.trim();
        if term.is_empty() {
            return true;
        }

        let term = term.to_lowercase();
        let contains = |field: &str| field.to_lowercase().contains(&term);

        contains(&inquiry.customer_name)
            || contains(&inquiry.message)
            || inquiry.item_name().is_some_and(contains)
    }
}

/// Reduce inquiries to the ones matching the criteria, preserving order.
#[must_use]
pub fn filter_inquiries<'a>(inquiries: &'a [Inquiry], criteria: &FilterCriteria) -> Vec<&'a Inquiry> {
    inquiries.iter().filter(|i| criteria.matches(i)).collect()
}
