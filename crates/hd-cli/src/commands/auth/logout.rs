use hd_session::LastUser;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthLogoutResponse {
    cleared: bool,
    last_user: LastUser,
}

pub async fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if ctx.session.is_authenticated() {
        if let Err(error) = ctx.client.logout().await {
            tracing::warn!(%error, "backend logout failed; clearing the local session anyway");
        }
    }

    ctx.session.logout()?;
    ctx.reset_for_session();

    output(
        &AuthLogoutResponse {
            cleared: true,
            last_user: ctx.session.last_user(),
        },
        flags.format,
    )
}
