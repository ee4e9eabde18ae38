//! Verify admin credentials.

use anyhow::Result;

use super::LoginArgs;
use crate::context::Context;
use crate::output::format_duration;

/// Run the login command.
pub fn run(args: LoginArgs, ctx: &Context) -> Result<()> {
    let session = ctx.require_admin(&args.admin)?;

    if ctx.output.is_json() {
        ctx.output.json(&session);
        return Ok(());
    }

    ctx.output
        .success(&format!("Logged in as {}", session.username));
    ctx.output.kv("session", session.token.as_str());
    ctx.output
        .kv("expires in", &format_duration(session.time_to_expiry()));
    Ok(())
}
