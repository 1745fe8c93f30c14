use anyhow::Result;
use geovote_client::{ApiClient, Config};
use geovote_engine::SummaryView;
use geovote_engine::session::{MEMBER_LOAD_FAILED, popup_title};
use geovote_types::MemberVoteSummary;
use serde::Serialize;

use crate::presentation::ConsoleRenderer;
use crate::types::OutputFormat;

#[derive(Serialize)]
struct MemberReport<'a> {
    age: u32,
    summary: &'a MemberVoteSummary,
    view: &'a SummaryView,
}

pub fn handle(config: &Config, name: &str, age: u32, format: OutputFormat) -> Result<()> {
    let client = ApiClient::from_config(config)?;
    let renderer = ConsoleRenderer::new();

    let summary = match super::runtime()?.block_on(client.fetch_member_summary(name, age)) {
        Ok(summary) => summary,
        Err(err) => {
            tracing::error!(member = %name, age, error = %err, "failed to load member summary");
            renderer.render_notice(MEMBER_LOAD_FAILED);
            return Ok(());
        }
    };

    let view = SummaryView::build(&summary);
    match format {
        OutputFormat::Json => renderer.render_json(&MemberReport {
            age,
            summary: &summary,
            view: &view,
        })?,
        OutputFormat::Plain => renderer.render_summary(&popup_title(name), &view),
    }
    Ok(())
}
