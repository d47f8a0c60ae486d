//! `storedesk dashboard`

use std::process::ExitCode;

use super::Context;
use crate::view;

pub async fn run(ctx: &Context) -> anyhow::Result<ExitCode> {
    let mut session = match ctx.open_session().await? {
        Ok(session) => session,
        Err(code) => return Ok(code),
    };

    let code = match session.refresh_dashboard().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            ctx.notifier.failure("Could not load dashboard stats", &e);
            ExitCode::FAILURE
        }
    };

    // Failed loads leave the stats at zero, which is still worth showing.
    println!("{}", view::dashboard(session.seller(), &session.stats()));
    Ok(code)
}
