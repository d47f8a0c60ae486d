//! Opens reply deep links with the system's default handler.

use storedesk_core::{ChannelLauncher, LaunchError, OutboundMessage};
use tracing::debug;

/// Hands deep links to the OS (browser, mail client, WhatsApp).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

impl ChannelLauncher for SystemLauncher {
    fn launch(&self, message: &OutboundMessage) -> Result<(), LaunchError> {
        let link = message.deep_link();
        debug!("Opening {link}");
        opener::open(link)?;
        Ok(())
    }
}
