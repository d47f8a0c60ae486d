//! Replying to customer inquiries.
//!
//! A reply is composed from the inquiry and the seller's text, handed to the
//! customer's preferred channel (phone first, then email), and the inquiry is
//! then marked as replied.

use tracing::{debug, info, warn};

use super::channel::{ChannelKind, ChannelLauncher, OutboundMessage};
use super::status::transition_status;
use crate::gateway::Gateway;
use crate::inquiry::{Inquiry, InquiryId, InquiryStatus, InquiryStore};
use crate::seller::SellerId;
use crate::{Error, Result};

/// Item label used when an inquiry references neither a product nor a service.
pub const FALLBACK_ITEM_LABEL: &str = "our products and services";

/// Validation error for reply input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyValidationError {
    /// Reply body is empty or whitespace.
    EmptyBody,
}

impl ReplyValidationError {
    /// Get human-readable error message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::EmptyBody => "Reply message is required",
        }
    }

    /// Get the field name this error relates to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::EmptyBody => "message",
        }
    }
}

impl std::fmt::Display for ReplyValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ReplyValidationError {}

/// Label for the item an inquiry is about.
#[must_use]
pub fn item_label(inquiry: &Inquiry) -> &str {
    inquiry.item_name().unwrap_or(FALLBACK_ITEM_LABEL)
}

/// Full reply text: greeting, acknowledgement, then the seller's words.
#[must_use]
pub fn reply_text(inquiry: &Inquiry, body: &str) -> String {
    format!(
        "Hi {},\n\nThank you for your inquiry about {}.\n\n{}",
        inquiry.customer_name.trim(),
        item_label(inquiry),
        body.trim()
    )
}

/// Email subject for a reply.
#[must_use]
pub fn reply_subject(inquiry: &Inquiry) -> String {
    format!("Re: Your inquiry about {}", item_label(inquiry))
}

/// Compose a reply without sending it.
///
/// # Errors
///
/// Returns [`Error::Validation`] for a blank body, or
/// [`Error::NoContactChannel`] if the inquiry has no usable phone number or
/// email address.
pub fn compose_reply(inquiry: &Inquiry, body: &str) -> Result<OutboundMessage> {
    if body.trim().is_empty() {
        return Err(ReplyValidationError::EmptyBody.into());
    }

    let text = reply_text(inquiry, body);

    match inquiry.contact_channel() {
        Some(ChannelKind::Phone) => {
            let phone = inquiry.normalized_phone().unwrap_or_default();
            Ok(OutboundMessage::Phone { phone, text })
        }
        Some(ChannelKind::Email) => Ok(OutboundMessage::Email {
            address: inquiry.contact_email().unwrap_or_default().to_string(),
            subject: reply_subject(inquiry),
            body: text,
        }),
        None => Err(Error::NoContactChannel(inquiry.id.clone())),
    }
}

/// Compose a reply, hand it to a channel and mark the inquiry as replied.
///
/// The inquiry is marked as replied only after the channel opened. If that
/// final status write fails the message has already left, and the returned
/// [`Error::Update`] says so.
///
/// # Errors
///
/// Returns [`Error::InquiryNotFound`] if the inquiry is not loaded, any
/// [`compose_reply`] error, [`Error::Launch`] if the channel could not be
/// opened, or [`Error::Update`] if the status write fails.
pub async fn send_reply<G, L>(
    gateway: &G,
    launcher: &L,
    store: &mut InquiryStore,
    seller_id: &SellerId,
    inquiry_id: &InquiryId,
    body: &str,
) -> Result<OutboundMessage>
where
    G: Gateway + ?Sized,
    L: ChannelLauncher + ?Sized,
{
    let inquiry = store
        .get(inquiry_id)
        .ok_or_else(|| Error::InquiryNotFound(inquiry_id.clone()))?;

    let message = compose_reply(inquiry, body)?;
    debug!(
        "Handing reply for inquiry {inquiry_id} to {}",
        message.kind().display_name()
    );

    launcher.launch(&message).map_err(|e| {
        warn!("Failed to open channel for inquiry {inquiry_id}: {e}");
        Error::Launch(e.to_string())
    })?;

    transition_status(gateway, store, seller_id, inquiry_id, InquiryStatus::Replied).await?;
    info!(
        "Reply to inquiry {inquiry_id} sent via {}",
        message.kind().display_name()
    );
    Ok(message)
}
