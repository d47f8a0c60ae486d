//! Onboarding guide content.

use crate::service::encode_component;

/// Placeholder replaced with the seller's storefront URL.
pub const STORE_URL_PLACEHOLDER: &str = "{store_url}";

/// Service used to render the storefront QR code.
const QR_CODE_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/?size=512x512&data=";

/// Something the seller can do from a guide step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuideAction {
    /// Copy text to the clipboard.
    Copy {
        /// Button label.
        label: String,
        /// Text to copy.
        text: String,
    },
    /// Download a file.
    Download {
        /// Button label.
        label: String,
        /// Suggested file name.
        file_name: String,
        /// Source URL.
        url: String,
    },
}

impl GuideAction {
    /// Button label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Copy { label, .. } | Self::Download { label, .. } => label,
        }
    }
}

/// One page of the onboarding guide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideStep {
    /// Short heading.
    pub title: String,
    /// Instructions.
    pub body: String,
    /// Optional action offered on this step.
    pub action: Option<GuideAction>,
}

impl GuideStep {
    fn new(title: &str, body: &str) -> Self {
        Self {
            title: title.to_string(),
            body: body.to_string(),
            action: None,
        }
    }

    fn with_action(mut self, action: GuideAction) -> Self {
        self.action = Some(action);
        self
    }
}

/// The fixed onboarding steps, personalised with the seller's storefront URL.
#[must_use]
pub fn onboarding_steps(store_url: &str) -> Vec<GuideStep> {
    let fill = |text: &str| text.replace(STORE_URL_PLACEHOLDER, store_url);

    vec![
        GuideStep::new(
            "Welcome to your store",
            "Your storefront is live. This guide walks you through getting your first customers.",
        ),
        GuideStep::new(
            "Complete your business profile",
            "Add your business name, a phone number and an email address so customers can reach you.",
        ),
        GuideStep::new(
            "List products and services",
            "Add at least one product or service with a clear name, price and photo. \
             Each listing counts its own views.",
        ),
        GuideStep::new(
            "Share your store link",
            &fill("Post your store link on social media and in your chat groups: {store_url}"),
        )
        .with_action(GuideAction::Copy {
            label: "Copy store link".to_string(),
            text: store_url.to_string(),
        }),
        GuideStep::new(
            "Print your QR code",
            "Put the QR code on your counter, packaging or flyers so walk-in customers can find you online.",
        )
        .with_action(GuideAction::Download {
            label: "Download QR code".to_string(),
            file_name: "store-qr-code.png".to_string(),
            url: format!("{QR_CODE_ENDPOINT}{}", encode_component(store_url)),
        }),
        GuideStep::new(
            "Answer inquiries quickly",
            "New inquiries appear in your inbox. Reply by WhatsApp or email and mark them closed when done.",
        ),
    ]
}
