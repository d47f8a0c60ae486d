//! Subcommand handlers.
//!
//! Each handler surfaces operation failures through the [`Notifier`] and
//! reports them as a failing exit code; only setup problems (missing settings,
//! unreadable files) propagate as errors.

pub mod account;
pub mod dashboard;
pub mod guide;
pub mod inquiries;

use std::process::ExitCode;

use anyhow::{Context as _, bail};
use storedesk_core::credentials::get_access_token;
use storedesk_core::{SellerSession, SessionStart, UserId};
use storedesk_gateway::{GatewayConfig, RestGateway};
use tracing::debug;

use crate::notify::Notifier;
use crate::settings::Settings;
use crate::view;

/// Shared state for one command invocation.
pub struct Context {
    pub settings: Settings,
    pub notifier: Notifier,
}

impl Context {
    pub const fn new(settings: Settings, notifier: Notifier) -> Self {
        Self { settings, notifier }
    }

    /// The configured user, or an error telling how to set one.
    pub fn user_id(&self) -> anyhow::Result<UserId> {
        let user = self.settings.user_id.trim();
        if user.is_empty() {
            bail!("no user configured; run `storedesk login --user-id <ID> --token <TOKEN>`");
        }
        Ok(UserId::new(user))
    }

    /// Build a gateway client from settings and the stored access token.
    pub fn connect(&self) -> anyhow::Result<RestGateway> {
        let mut config = GatewayConfig::new(&self.settings.api_url, &self.settings.api_key)
            .context("gateway settings are incomplete; see `storedesk settings show`")?;

        let user = self.user_id()?;
        match get_access_token(&user) {
            Ok(Some(token)) => config = config.with_access_token(token),
            Ok(None) => debug!("No access token stored for {user}; using the API key"),
            Err(e) => tracing::warn!("Could not read access token: {e}"),
        }

        Ok(RestGateway::new(config)?)
    }

    /// Open a seller session.
    ///
    /// Returns `Ok(None)` after printing the onboarding prompt when the user
    /// has no seller record, and `Err(code)` after notifying on failure.
    pub async fn open_session(
        &self,
    ) -> anyhow::Result<Result<SellerSession<RestGateway>, ExitCode>> {
        let gateway = self.connect()?;
        let user = self.user_id()?;

        match SellerSession::open(gateway, &user).await {
            Ok(SessionStart::Ready(session)) => Ok(Ok(session)),
            Ok(SessionStart::NotOnboarded) => {
                println!("{}", view::onboarding_prompt());
                Ok(Err(ExitCode::SUCCESS))
            }
            Err(e) => {
                self.notifier.failure("Could not load your store", &e);
                Ok(Err(ExitCode::FAILURE))
            }
        }
    }
}
