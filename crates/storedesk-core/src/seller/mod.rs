//! Seller identity.
//!
//! A seller is the authenticated business owner using the dashboard. The
//! record is fetched once per session and never mutated here.

mod model;

pub use model::{Seller, SellerId, UserId};
