//! Core services for seller operations.
//!
//! This module provides the service layer that bridges the front-end with
//! the remote gateway: status transitions, replies and dashboard stats.

pub mod channel;
pub mod dashboard;
pub mod reply;
pub mod status;

pub use channel::{ChannelKind, ChannelLauncher, LaunchError, OutboundMessage, encode_component};
pub use dashboard::{DashboardStats, load_dashboard};
pub use reply::{
    FALLBACK_ITEM_LABEL, ReplyValidationError, compose_reply, item_label, reply_subject,
    reply_text, send_reply,
};
pub use status::transition_status;
