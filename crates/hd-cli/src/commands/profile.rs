use anyhow::Context;
use hd_core::updates::{ProfileUpdate, ProfileUpdateBuilder};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProfileCommands;
use crate::cli::subcommands::profile::ProfileUpdateArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `hd profile <subcommand>`.
pub async fn handle(
    action: &ProfileCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProfileCommands::Show => {
            let user = ctx
                .session
                .user()
                .context("not logged in; run 'hd auth login' first")?;
            output(user, flags.format)
        }
        ProfileCommands::Update(args) => update(args, ctx, flags).await,
    }
}

async fn update(
    args: &ProfileUpdateArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let viewer = ctx.viewer()?;
    let update = profile_update(args);

    match ctx.users.update_profile(&viewer, &update).await? {
        Some(user) => ctx.session.replace_user(user)?,
        None => ctx.session.update_profile(&update)?,
    };

    let user = ctx.session.user().context("session lost its user")?;
    output(user, flags.format)
}

fn profile_update(args: &ProfileUpdateArgs) -> ProfileUpdate {
    let mut builder = ProfileUpdateBuilder::new();
    if let Some(name) = &args.name {
        builder = builder.name(name);
    }
    if let Some(email) = &args.email {
        builder = builder.email(email.trim());
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
    if let Some(avatar) = &args.avatar {
        builder = builder.avatar(avatar);
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args() -> ProfileUpdateArgs {
        ProfileUpdateArgs {
            name: None,
            email: None,
            phone: None,
            department: None,
            role_title: None,
            avatar: None,
        }
    }

    #[test]
    fn no_flags_is_an_empty_update() {
        assert!(profile_update(&args()).is_empty());
    }

    #[test]
    fn only_given_flags_are_set() {
        let update = profile_update(&ProfileUpdateArgs {
            department: Some("TI".into()),
            ..args()
        });
        assert!(!update.is_empty());
        let json = serde_json::to_value(&update).expect("serialize");
        assert_eq!(json, serde_json::json!({ "setor": "TI" }));
    }
}
