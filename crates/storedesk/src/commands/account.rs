//! `storedesk login` / `storedesk logout`

use std::path::Path;
use std::process::ExitCode;

use anyhow::bail;
use storedesk_core::credentials::{delete_access_token, store_access_token};

use super::Context;
use crate::settings::Settings;

/// Store the access token for a user, optionally switching the configured user
/// in the settings file at `settings_path`.
pub async fn login(
    ctx: &mut Context,
    user_id: Option<String>,
    token: &str,
    settings_path: &Path,
) -> anyhow::Result<ExitCode> {
    let token = token.trim();
    if token.is_empty() {
        bail!("access token is empty");
    }

    if let Some(user_id) = user_id {
        let mut saved = Settings::load_from(settings_path).await?;
        saved.set("user_id", &user_id)?;
        saved.save_to(settings_path).await?;
        ctx.settings.user_id = saved.user_id;
    }

    let user = ctx.user_id()?;
    match store_access_token(&user, token) {
        Ok(()) => {
            ctx.notifier.success(format!("Signed in as {user}"));
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            ctx.notifier.failure("Could not store access token", &e);
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Remove the stored access token.
pub fn logout(ctx: &Context) -> anyhow::Result<ExitCode> {
    let user = ctx.user_id()?;
    match delete_access_token(&user) {
        Ok(()) => {
            ctx.notifier.success(format!("Signed out {user}"));
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            ctx.notifier.failure("Could not remove access token", &e);
            Ok(ExitCode::FAILURE)
        }
    }
}
