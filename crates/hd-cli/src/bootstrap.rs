use anyhow::Context;
use hd_config::HelpdeskConfig;

/// Read `.env`, then layer defaults, TOML files and `HELPDESK_*` variables.
pub fn load_config() -> anyhow::Result<HelpdeskConfig> {
    HelpdeskConfig::load_with_dotenv().context("failed to load help-desk configuration")
}
