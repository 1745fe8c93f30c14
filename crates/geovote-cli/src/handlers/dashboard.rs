use std::path::Path;

use anyhow::{Context, Result};
use geovote_engine::charts::NO_CLUSTER_DATA;
use geovote_engine::summary::EMPTY_SUMMARY;
use geovote_engine::{ChartSlot, ConcentrationChart, ProgressBar, StackedPercentChart, Upsert};
use geovote_types::DashboardStats;

use crate::presentation::ConsoleRenderer;

pub fn handle(file: &Path, clusters: &[i64]) -> Result<()> {
    let stats = DashboardStats::from_path(file)
        .with_context(|| format!("failed to read statistics from {}", file.display()))?;
    let renderer = ConsoleRenderer::new();

    if let Some(congress) = stats.congress_num {
        renderer.render_heading(&format!("제{}대 국회 표결 통계", congress));
        println!();
    }

    let composition = StackedPercentChart::vote_composition(&stats);
    if composition.is_empty() {
        renderer.render_heading("정당별 표결 구성");
        renderer.render_notice(EMPTY_SUMMARY);
    } else {
        renderer.render_stacked_percent("정당별 표결 구성", &composition);
    }
    println!();

    let mut slot = ChartSlot::new();
    if clusters.is_empty() {
        render_cluster(&renderer, &mut slot, &stats, stats.cluster_nums().first().copied());
        println!();
    }
    for &cluster in clusters {
        render_cluster(&renderer, &mut slot, &stats, Some(cluster));
        println!();
    }

    let concentration = ConcentrationChart::from_series(&stats.timeseries);
    if concentration.is_empty() {
        renderer.render_heading("정당 집중도");
        renderer.render_notice(EMPTY_SUMMARY);
    } else {
        renderer.render_concentration("정당 집중도", &concentration);
        println!();
        renderer.render_progress("유효 정당 수", &ProgressBar::from_series(&stats.timeseries));
    }
    Ok(())
}

/// Point the cluster chart at `selected`, updating the chart already in
/// `slot` or clearing it when the cluster has no statistics. Returns the
/// section title.
fn select_cluster(
    slot: &mut ChartSlot<StackedPercentChart>,
    stats: &DashboardStats,
    selected: Option<i64>,
) -> String {
    match selected.and_then(|num| stats.cluster(num)) {
        Some(cluster_stats) => {
            let chart = StackedPercentChart::from_cluster(
                cluster_stats,
                &stats.party_names,
                &stats.party_colors,
            );
            if slot.upsert(chart) == Upsert::Updated {
                tracing::debug!(cluster = cluster_stats.cluster_num, "cluster chart replaced");
            }
            format!(
                "클러스터 {}: {}",
                cluster_stats.cluster_num, cluster_stats.cluster_keywords
            )
        }
        None => {
            if slot.clear() {
                tracing::debug!("cluster chart destroyed");
            }
            format!("클러스터 {}", selected.map(|n| n.to_string()).unwrap_or_default())
        }
    }
}

fn render_cluster(
    renderer: &ConsoleRenderer,
    slot: &mut ChartSlot<StackedPercentChart>,
    stats: &DashboardStats,
    selected: Option<i64>,
) {
    let title = select_cluster(slot, stats, selected);
    match slot.get() {
        Some(chart) => renderer.render_stacked_percent(&title, chart),
        None => {
            tracing::warn!(cluster = ?selected, "no statistics for cluster");
            renderer.render_heading(title.trim_end());
            renderer.render_notice(NO_CLUSTER_DATA);
        }
    }
}
