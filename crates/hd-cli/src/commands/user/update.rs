use hd_core::enums::Role;
use hd_core::updates::{UserUpdate, UserUpdateBuilder};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::user::UserUpdateArgs;
use crate::commands::shared::parse::parse_optional;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct UpdatedResponse<'a> {
    id: &'a str,
    updated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    user: Option<hd_core::entities::User>,
}

pub async fn run(
    args: &UserUpdateArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let viewer = ctx.viewer()?;
    let update = user_update(args)?;
    let user = ctx.users.update(&viewer, &args.id, &update).await?;
    output(
        &UpdatedResponse {
            id: &args.id,
            updated: true,
            user,
        },
        flags.format,
    )
}

fn user_update(args: &UserUpdateArgs) -> anyhow::Result<UserUpdate> {
    let mut builder = UserUpdateBuilder::new();
    if let Some(name) = &args.name {
        builder = builder.name(name);
    }
    if let Some(email) = &args.email {
        builder = builder.email(email.trim());
    }
    if let Some(password) = &args.password {
        builder = builder.password(password);
    }
    if let Some(cpf) = &args.cpf {
        builder = builder.cpf(cpf);
    }
    if let Some(phone) = &args.phone {
        builder = builder.phone(phone);
    }
    if let Some(department) = &args.department {
        builder = builder.department(department);
    }
    if let Some(role_title) = &args.role_title {
        builder = builder.role_title(role_title);
    }
    if let Some(role) = parse_optional::<Role>(args.role.as_deref())? {
        builder = builder.role(role);
    }
    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn role_and_phone_are_normalized() {
        let args = UserUpdateArgs {
            id: "3".into(),
            name: None,
            email: None,
            password: None,
            cpf: None,
            phone: Some("(11) 98765-4321".into()),
            department: None,
            role_title: None,
            role: Some("Administrador".into()),
        };
        let json = serde_json::to_value(user_update(&args).expect("update")).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({ "celular": "11987654321", "tipo": "admin" })
        );
    }
}
