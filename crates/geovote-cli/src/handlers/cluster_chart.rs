use anyhow::Result;
use geovote_client::{ApiClient, Config};
use geovote_engine::StackedColumnChart;
use geovote_engine::charts::NO_CLUSTER_DATA;

use crate::presentation::ConsoleRenderer;

pub const CHART_LOAD_FAILED: &str = "차트 데이터를 불러오지 못했습니다.";

pub fn handle(config: &Config, age: u32, cluster: i64, party: &str, stance: &str) -> Result<()> {
    let client = ApiClient::from_config(config)?;
    let renderer = ConsoleRenderer::new();

    let request = client.fetch_cluster_chart(age, cluster, party, stance);
    let data = match super::runtime()?.block_on(request) {
        Ok(data) => data,
        Err(err) => {
            tracing::error!(age, cluster, party, stance, error = %err, "차트 데이터 불러오기 실패");
            renderer.render_notice(CHART_LOAD_FAILED);
            return Ok(());
        }
    };

    match StackedColumnChart::from_data(&data) {
        Some(chart) => renderer.render_column_chart(
            &format!("제{}대 클러스터 {} · {} · {}", age, cluster, party, stance),
            &chart,
        ),
        None => renderer.render_notice(NO_CLUSTER_DATA),
    }
    Ok(())
}
