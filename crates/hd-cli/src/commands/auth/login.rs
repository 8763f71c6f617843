use anyhow::Context;
use hd_core::entities::User;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthLoginResponse<'a> {
    authenticated: bool,
    is_admin: bool,
    user: &'a User,
}

pub async fn handle(
    args: &AuthLoginArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let response = match ctx.client.login(args.email.trim(), &args.password).await {
        Ok(response) => response,
        Err(error) if error.is_unauthorized() => {
            anyhow::bail!("login failed: invalid email or password")
        }
        Err(error) => return Err(error).context("login failed"),
    };

    ctx.session.login(response.user, response.token)?;
    ctx.reset_for_session();
    tracing::info!("logged in");

    let user = ctx.session.user().context("session lost its user after login")?;
    output(
        &AuthLoginResponse {
            authenticated: true,
            is_admin: user.is_admin(),
            user,
        },
        flags.format,
    )
}
