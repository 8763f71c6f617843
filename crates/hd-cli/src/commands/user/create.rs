use hd_core::entities::User;
use hd_core::enums::Role;
use hd_core::forms::NewUser;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::user::{AccountArgs, NewUserArgs};
use crate::commands::shared::parse::parse_optional;
use crate::context::AppContext;
use crate::output::output;

/// The backend may answer a creation without echoing the account.
#[derive(Serialize)]
struct CreatedResponse {
    created: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    user: Option<User>,
}

/// `hd user create`: admin-only, any role.
pub async fn run(args: &NewUserArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let viewer = ctx.viewer()?;
    let role = parse_optional::<Role>(args.role.as_deref())?.unwrap_or_default();
    let user = ctx
        .users
        .create(&viewer, &new_user(&args.account, role))
        .await?;
    output(&CreatedResponse { created: true, user }, flags.format)
}

/// `hd user register`: self-service, always a regular user.
pub async fn register(
    args: &AccountArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let user = ctx.users.register(&new_user(args, Role::User)).await?;
    output(&CreatedResponse { created: true, user }, flags.format)
}

fn new_user(args: &AccountArgs, role: Role) -> NewUser {
    NewUser {
        name: args.name.clone(),
        email: args.email.clone(),
        password: args.password.clone(),
        password_confirmation: args.password_confirmation.clone(),
        cpf: args.cpf.clone(),
        phone: args.phone.clone(),
        department: args.department.clone(),
        role_title: args.role_title.clone(),
        role,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_flags_become_a_valid_form() {
        let args = AccountArgs {
            name: "Bia Souza".into(),
            email: "bia@example.com".into(),
            password: "segredo".into(),
            password_confirmation: None,
            cpf: "123.456.789-01".into(),
            phone: "(11) 98765-4321".into(),
            department: "Financeiro".into(),
            role_title: "Analista".into(),
        };
        let user = new_user(&args, Role::User);
        assert!(user.validate().is_ok());
        assert_eq!(user.normalized().cpf, "12345678901");
    }
}
