//! `storedesk inquiries ...`

use std::process::ExitCode;

use clap::Subcommand;
use storedesk_core::{InquiryId, InquiryStatus, SellerSession, StatusFilter};
use storedesk_gateway::RestGateway;

use super::Context;
use crate::launcher::SystemLauncher;
use crate::view;

#[derive(Debug, Subcommand)]
pub enum InquiryCommand {
    /// List inquiries, newest first
    List {
        /// Status to show: all, new, replied or closed
        #[arg(short, long)]
        status: Option<StatusFilter>,
        /// Only show inquiries mentioning this text
        #[arg(short = 'q', long, default_value = "")]
        search: String,
    },
    /// Show one inquiry in full
    Show {
        /// Inquiry ID
        id: String,
    },
    /// Change an inquiry's status
    Status {
        /// Inquiry ID
        id: String,
        /// New status: new, replied or closed
        status: InquiryStatus,
    },
    /// Reply by WhatsApp or email and mark the inquiry replied
    Reply {
        /// Inquiry ID
        id: String,
        /// Your reply
        #[arg(short, long)]
        message: String,
    },
}

pub async fn run(ctx: &Context, command: InquiryCommand) -> anyhow::Result<ExitCode> {
    let mut session = match ctx.open_session().await? {
        Ok(session) => session,
        Err(code) => return Ok(code),
    };

    if let Err(e) = session.refresh_inquiries().await {
        ctx.notifier.failure("Could not load inquiries", &e);
        if matches!(command, InquiryCommand::List { .. }) {
            println!("{}", view::inbox(&[], 0));
        }
        return Ok(ExitCode::FAILURE);
    }

    match command {
        InquiryCommand::List { status, search } => {
            list(&mut session, status.unwrap_or(ctx.settings.default_status_filter), search);
            Ok(ExitCode::SUCCESS)
        }
        InquiryCommand::Show { id } => Ok(show(ctx, &session, &InquiryId::new(id))),
        InquiryCommand::Status { id, status } => {
            Ok(set_status(ctx, &mut session, &InquiryId::new(id), status).await)
        }
        InquiryCommand::Reply { id, message } => {
            Ok(reply(ctx, &mut session, &InquiryId::new(id), &message).await)
        }
    }
}

fn list(session: &mut SellerSession<RestGateway>, status: StatusFilter, search: String) {
    session.set_filter(status);
    session.set_search(search);
    let visible = session.visible_inquiries();
    println!("{}", view::inbox(&visible, session.inquiries().len()));
}

fn show(ctx: &Context, session: &SellerSession<RestGateway>, id: &InquiryId) -> ExitCode {
    match session.inquiries().get(id) {
        Some(inquiry) => {
            println!("{}", view::inquiry_detail(inquiry));
            ExitCode::SUCCESS
        }
        None => {
            ctx.notifier.failure("Cannot show inquiry", storedesk_core::Error::InquiryNotFound(id.clone()));
            ExitCode::FAILURE
        }
    }
}

async fn set_status(
    ctx: &Context,
    session: &mut SellerSession<RestGateway>,
    id: &InquiryId,
    status: InquiryStatus,
) -> ExitCode {
    if session.inquiries().get(id).is_none() {
        ctx.notifier.failure("Cannot update inquiry", storedesk_core::Error::InquiryNotFound(id.clone()));
        return ExitCode::FAILURE;
    }

    match session.transition(id, status).await {
        Ok(()) => {
            ctx.notifier.success(format!("Inquiry {id} marked as {}", status.display_name()));
            ExitCode::SUCCESS
        }
        Err(e) => {
            ctx.notifier.failure("Could not update inquiry status", &e);
            ExitCode::FAILURE
        }
    }
}

async fn reply(
    ctx: &Context,
    session: &mut SellerSession<RestGateway>,
    id: &InquiryId,
    message: &str,
) -> ExitCode {
    match session.reply(&SystemLauncher, id, message).await {
        Ok(sent) => {
            ctx.notifier.success(format!(
                "Reply to {} opened in {}; inquiry marked as replied",
                sent.recipient(),
                sent.kind().display_name()
            ));
            ExitCode::SUCCESS
        }
        Err(e) => {
            ctx.notifier.failure("Could not send reply", &e);
            ExitCode::FAILURE
        }
    }
}
