//! # storedesk-gateway
//!
//! HTTP client for the hosted backend that stores sellers, catalog items and
//! inquiries.
//!
//! ## Quick Start
//!
//! ```ignore
//! use storedesk_core::{SellerSession, SessionStart, UserId};
//! use storedesk_gateway::{GatewayConfig, RestGateway};
//!
//! let config = GatewayConfig::new("https://xyz.example.co", "publishable-key")?
//!     .with_access_token(token);
//! let gateway = RestGateway::new(config)?;
//!
//! match SellerSession::open(gateway, &UserId::new(user_id)).await? {
//!     SessionStart::Ready(mut session) => {
//!         session.refresh_inquiries().await?;
//!     }
//!     SessionStart::NotOnboarded => println!("Finish setting up your store first"),
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod client;
pub mod config;
mod error;
pub mod query;
pub mod rows;

pub use client::{RestGateway, parse_content_range_total};
pub use config::{ConfigError, DEFAULT_TIMEOUT, GatewayConfig};
pub use error::{Error, Result};
pub use query::TableQuery;
