//! Customer inquiries: model, session store and inbox filtering.
//!
//! Inquiries are created by customers on the storefront and fetched here
//! read-only. The only field this crate ever changes is the status, and only
//! through [`crate::service::transition_status`].
//!
//! # Example
//!
//! ```ignore
//! use storedesk_core::inquiry::{FilterCriteria, InquiryStore, StatusFilter, filter_inquiries};
//!
//! let mut store = InquiryStore::new();
//! store.load(&gateway, &seller.id).await?;
//!
//! let criteria = FilterCriteria::new(StatusFilter::All, "sourdough");
//! for inquiry in filter_inquiries(store.as_slice(), &criteria) {
//!     println!("{} - {}", inquiry.customer_name, inquiry.status);
//! }
//! ```

mod filter;
mod model;
mod store;

pub use filter::{FilterCriteria, StatusFilter, filter_inquiries};
pub use model::{Inquiry, InquiryId, InquiryItem, InquiryStatus, UnknownStatus, normalize_phone};
pub use store::InquiryStore;
