use figment::Jail;
use hd_config::HelpdeskConfig;
use pretty_assertions::assert_eq;

#[test]
fn env_overrides_nested_fields() {
    Jail::expect_with(|jail| {
        jail.set_env("HELPDESK_API__BASE_URL", "https://env.example.com");
        jail.set_env("HELPDESK_API__TIMEOUT_SECS", "12");
        jail.set_env("HELPDESK_GENERAL__DEFAULT_LIMIT", "50");

        let config = HelpdeskConfig::load().expect("config loads");
        assert_eq!(config.api.base_url(), "https://env.example.com");
        assert_eq!(config.api.timeout_secs, 12);
        assert_eq!(config.general.default_limit, 50);
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".helpdesk")?;
        jail.create_file(
            ".helpdesk/config.toml",
            r#"
[api]
base_url = "https://file.example.com"
"#,
        )?;
        jail.set_env("HELPDESK_API__BASE_URL", "https://env.example.com");

        let config = HelpdeskConfig::load().expect("config loads");
        assert_eq!(config.api.base_url(), "https://env.example.com");
        Ok(())
    });
}
