//! `storedesk guide`

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context as _;
use clap::Args;
use storedesk_core::{GuideAction, GuideNavigator, SessionStart, onboarding_steps};
use tracing::{debug, warn};

use super::Context;
use crate::view;

#[derive(Debug, Args)]
pub struct GuideArgs {
    /// Step to show, starting at 1
    #[arg(short, long, default_value_t = 1)]
    step: usize,
    /// List every step title
    #[arg(long)]
    list: bool,
    /// Copy this step's text to the clipboard
    #[arg(long)]
    copy: bool,
    /// Download this step's file into a directory
    #[arg(long, value_name = "DIR")]
    download: Option<PathBuf>,
}

pub async fn run(ctx: &Context, args: GuideArgs) -> anyhow::Result<ExitCode> {
    let store_url = store_url(ctx).await;
    let mut guide = GuideNavigator::new(onboarding_steps(&store_url));

    if args.list {
        for (n, step) in guide.steps().iter().enumerate() {
            println!("{:>2}. {}", n + 1, step.title);
        }
        return Ok(ExitCode::SUCCESS);
    }

    guide.go_to(args.step.saturating_sub(1));
    println!("{}", view::guide_step(&guide));

    let action = guide.current().and_then(|s| s.action.clone());
    let mut code = ExitCode::SUCCESS;

    if args.copy {
        match &action {
            Some(GuideAction::Copy { text, .. }) => match copy_to_clipboard(text) {
                Ok(()) => ctx.notifier.success("Copied to clipboard"),
                Err(e) => {
                    ctx.notifier.failure("Could not copy", format!("{e:#}"));
                    code = ExitCode::FAILURE;
                }
            },
            _ => {
                ctx.notifier.failure("Could not copy", "this step has nothing to copy");
                code = ExitCode::FAILURE;
            }
        }
    }

    if let Some(dir) = &args.download {
        match &action {
            Some(GuideAction::Download { file_name, url, .. }) => {
                match download(url, &dir.join(file_name)).await {
                    Ok(path) => ctx.notifier.success(format!("Saved {}", path.display())),
                    Err(e) => {
                        ctx.notifier.failure("Download failed", format!("{e:#}"));
                        code = ExitCode::FAILURE;
                    }
                }
            }
            _ => {
                ctx.notifier.failure("Download failed", "this step has nothing to download");
                code = ExitCode::FAILURE;
            }
        }
    }

    Ok(code)
}

/// The seller's storefront URL, or the marketplace home when unavailable.
async fn store_url(ctx: &Context) -> String {
    let fallback = ctx.settings.marketplace_url.clone();
    let Ok(gateway) = ctx.connect() else {
        debug!("Gateway not configured; guide uses the marketplace URL");
        return fallback;
    };
    let Ok(user) = ctx.user_id() else {
        return fallback;
    };

    match storedesk_core::SellerSession::open(gateway, &user).await {
        Ok(SessionStart::Ready(session)) => session.seller().storefront_url(&fallback),
        Ok(SessionStart::NotOnboarded) => fallback,
        Err(e) => {
            warn!("Could not look up storefront for guide: {e}");
            fallback
        }
    }
}

fn copy_to_clipboard(text: &str) -> anyhow::Result<()> {
    let mut clipboard = arboard::Clipboard::new().context("opening clipboard")?;
    clipboard.set_text(text).context("writing clipboard")?;
    Ok(())
}

async fn download(url: &str, target: &Path) -> anyhow::Result<PathBuf> {
    debug!("Downloading {url}");
    let bytes = reqwest::get(url)
        .await?
        .error_for_status()?
        .bytes()
        .await?;

    if let Some(dir) = target.parent() {
        tokio::fs::create_dir_all(dir)
            .await
            .with_context(|| format!("creating {}", dir.display()))?;
    }
    tokio::fs::write(target, &bytes)
        .await
        .with_context(|| format!("writing {}", target.display()))?;
    Ok(target.to_path_buf())
}
