use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDate;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ReportArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct ReportResponse<'a> {
    path: &'a Path,
    bytes: usize,
}

/// Handle `hd report`.
pub async fn handle(args: &ReportArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let viewer = ctx.viewer()?;
    let bytes = ctx.tickets.report(&viewer).await?;

    let path = args
        .output
        .clone()
        .unwrap_or_else(|| default_report_path(chrono::Local::now().date_naive()));
    tokio::fs::write(&path, &bytes)
        .await
        .with_context(|| format!("failed to write report to {}", path.display()))?;

    output(
        &ReportResponse {
            path: &path,
            bytes: bytes.len(),
        },
        flags.format,
    )
}

fn default_report_path(today: NaiveDate) -> PathBuf {
    PathBuf::from(format!("helpdesk-report-{}", today.format("%Y-%m-%d")))
}
