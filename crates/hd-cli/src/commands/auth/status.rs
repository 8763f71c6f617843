use hd_core::entities::User;
use hd_session::LastUser;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse<'a> {
    authenticated: bool,
    is_admin: bool,
    base_url: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    user: Option<&'a User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_user: Option<LastUser>,
}

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let authenticated = ctx.session.is_authenticated();
    let status = AuthStatusResponse {
        authenticated,
        is_admin: ctx.session.is_admin(),
        base_url: ctx.client.base_url(),
        user: ctx.session.user(),
        last_user: (!authenticated).then(|| ctx.session.last_user()),
    };
    output(&status, flags.format)
}
