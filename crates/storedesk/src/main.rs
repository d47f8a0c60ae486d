//! `StoreDesk` - seller inquiry desk for a local marketplace
//!
//! Terminal front-end over the inquiry lifecycle in `storedesk-core`.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod commands;
mod launcher;
mod notify;
mod settings;
mod view;

use std::path::Path;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use commands::Context;
use commands::guide::GuideArgs;
use commands::inquiries::InquiryCommand;
use notify::Notifier;
use settings::Settings;

const DEFAULT_FILTER: &str = "storedesk=info,storedesk_core=info,storedesk_gateway=info";
const VERBOSE_FILTER: &str = "storedesk=debug,storedesk_core=debug,storedesk_gateway=debug";

#[derive(Debug, Parser)]
#[command(name = "storedesk", version, about = "Manage your marketplace store's inquiries")]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show catalogue and inquiry totals
    Dashboard,
    /// Work with customer inquiries
    #[command(subcommand)]
    Inquiries(InquiryCommand),
    /// Walk through the onboarding guide
    Guide(GuideArgs),
    /// Store an access token for the backend
    Login {
        /// Access token issued by the backend
        #[arg(short, long)]
        token: String,
        /// Switch the configured user
        #[arg(short, long)]
        user_id: Option<String>,
    },
    /// Remove the stored access token
    Logout,
    /// Inspect or change settings
    #[command(subcommand)]
    Settings(SettingsCommand),
}

#[derive(Debug, Subcommand)]
enum SettingsCommand {
    /// Print current settings
    Show,
    /// Change one setting
    Set {
        /// Setting name
        key: String,
        /// New value
        value: String,
    },
    /// Print the settings file location
    Path,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let fallback = if cli.verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| fallback.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting StoreDesk");

    // Settings commands skip loading so they can repair a broken file.
    match cli.command {
        Command::Settings(command) => run_settings(command, &Settings::path()).await,
        Command::Dashboard => commands::dashboard::run(&context().await?).await,
        Command::Inquiries(command) => commands::inquiries::run(&context().await?, command).await,
        Command::Guide(args) => commands::guide::run(&context().await?, args).await,
        Command::Login { token, user_id } => {
            let mut ctx = context().await?;
            commands::account::login(&mut ctx, user_id, &token, &Settings::path()).await
        }
        Command::Logout => commands::account::logout(&context().await?),
    }
}

async fn context() -> anyhow::Result<Context> {
    let settings = Settings::load().await?;
    let notifier = Notifier::new(settings.desktop_notifications);
    Ok(Context::new(settings, notifier))
}

async fn run_settings(command: SettingsCommand, path: &Path) -> anyhow::Result<ExitCode> {
    match command {
        SettingsCommand::Show => {
            let mut settings = Settings::load_from(path).await?;
            settings.apply_overrides(|key| std::env::var(key).ok());
            println!("{}", settings.redacted()?);
        }
        SettingsCommand::Set { key, value } => {
            // Edit the file as stored so environment overrides are not persisted.
            let mut settings = match Settings::load_from(path).await {
                Ok(settings) => settings,
                Err(e) => {
                    warn!("Starting from default settings: {e:#}");
                    Settings::default()
                }
            };
            settings.set(&key, &value)?;
            settings.save_to(path).await?;
            println!("{key} updated");
        }
        SettingsCommand::Path => println!("{}", path.display()),
    }
    Ok(ExitCode::SUCCESS)
}
