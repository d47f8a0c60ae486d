//! Outbound messaging channels.
//!
//! Replies leave the application as deep links: a WhatsApp link for phone
//! numbers and a `mailto:` link for email addresses. Opening the link is the
//! whole hand-off; no delivery confirmation comes back.

/// Base URL of the phone messaging deep link.
pub const PHONE_LINK_BASE: &str = "https://wa.me/";

/// Which kind of channel a message goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    /// Phone-based messaging.
    Phone,
    /// Email.
    Email,
}

impl ChannelKind {
    /// Human-readable display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Phone => "WhatsApp",
            Self::Email => "email",
        }
    }
}

/// A composed reply ready to hand to a channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundMessage {
    /// Phone messaging deep link.
    Phone {
        /// Phone number, digits only.
        phone: String,
        /// Message text.
        text: String,
    },
    /// Email deep link.
    Email {
        /// Recipient address.
        address: String,
        /// Subject line.
        subject: String,
        /// Message body.
        body: String,
    },
}

impl OutboundMessage {
    /// Channel this message goes through.
    #[must_use]
    pub const fn kind(&self) -> ChannelKind {
        match self {
            Self::Phone { .. } => ChannelKind::Phone,
            Self::Email { .. } => ChannelKind::Email,
        }
    }

    /// Message text as the customer will read it.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Phone { text, .. } => text,
            Self::Email { body, .. } => body,
        }
    }

    /// Recipient phone number or email address.
    #[must_use]
    pub fn recipient(&self) -> &str {
        match self {
            Self::Phone { phone, .. } => phone,
            Self::Email { address, .. } => address,
        }
    }

    /// Deep link that opens the channel with the message pre-filled.
    #[must_use]
    pub fn deep_link(&self) -> String {
        match self {
            Self::Phone { phone, text } => {
                format!("{PHONE_LINK_BASE}{phone}?text={}", encode_component(text))
            }
            Self::Email {
                address,
                subject,
                body,
            } => format!(
                "mailto:{}?subject={}&body={}",
                encode_address(address),
                encode_component(subject),
                encode_component(body)
            ),
        }
    }
}

/// Percent-encode a query component, spaces as `%20`.
///
/// Form encoding writes spaces as `+`, which mail clients show literally.
/// A literal `+` is always encoded as `%2B`, so swapping is unambiguous.
#[must_use]
pub fn encode_component(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Percent-encode an email address for a `mailto:` path, keeping `@`.
fn encode_address(address: &str) -> String {
    encode_component(address).replace("%40", "@")
}

/// Error raised when a channel could not be opened.
pub type LaunchError = Box<dyn std::error::Error + Send + Sync>;

/// Hands composed messages to an external messaging channel.
pub trait ChannelLauncher {
    /// Open the channel for this message.
    ///
    /// # Errors
    ///
    /// Returns an error if the channel could not be opened.
    fn launch(&self, message: &OutboundMessage) -> Result<(), LaunchError>;
}
