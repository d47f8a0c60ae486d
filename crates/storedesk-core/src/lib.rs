//! # storedesk-core
//!
//! Core business logic for the `StoreDesk` seller dashboard.
//!
//! This crate provides:
//! - Domain models for sellers, catalog items and customer inquiries
//! - **Inquiry Inbox** - session store plus status and free-text filtering
//! - **Status Transitions** - the single path by which an inquiry's status changes
//! - **Replies** - compose a customer reply and hand it to WhatsApp or email
//! - **Dashboard** - summary counters over products, services and inquiries
//! - **Onboarding Guide** - paged instructions with copy/download actions
//! - Secure storage of the gateway access token
//!
//! All persistent data lives in a hosted backend reached through the
//! [`Gateway`] trait.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod catalog;
pub mod credentials;
mod error;
pub mod gateway;
pub mod guide;
pub mod inquiry;
pub mod seller;
pub mod service;
pub mod session;
#[cfg(test)]
mod testing;

pub use catalog::{CatalogItem, CatalogKind};
pub use credentials::{CredentialError, CredentialResult};
pub use error::{Error, Result};
pub use gateway::{Gateway, GatewayError, GatewayResult, NO_ROWS_CODE};
pub use guide::{GuideAction, GuideNavigator, GuideStep, onboarding_steps};
pub use inquiry::{
    FilterCriteria, Inquiry, InquiryId, InquiryItem, InquiryStatus, InquiryStore, StatusFilter,
    filter_inquiries,
};
pub use seller::{Seller, SellerId, UserId};
pub use service::{
    ChannelKind, ChannelLauncher, DashboardStats, LaunchError, OutboundMessage,
    ReplyValidationError, compose_reply, load_dashboard, send_reply, transition_status,
};
pub use session::{SellerSession, SessionStart};
