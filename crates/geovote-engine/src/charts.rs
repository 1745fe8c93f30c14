//! Chart models for the statistics views.
//!
//! Everything here is a pure function of its input; drawing is left to
//! the presentation layer. [`ChartSlot`] mirrors the "update the chart if
//! it exists, otherwise construct it" lifecycle of a redrawn widget.

use geovote_types::{
    ChartSeries, ClusterChartData, ClusterPartyStats, ConcentrationSeries, DashboardStats,
    VoteType,
};
use serde::Serialize;

pub const NO_CLUSTER_DATA: &str = "선택한 클러스터에 대한 데이터가 없습니다.";
pub const PERCENT_AXIS_TITLE: &str = "비율 (%)";
pub const PARTY_AXIS_TITLE: &str = "정당";
pub const TERM_AXIS_TITLE: &str = "국회 대수";
pub const HHI_TITLE: &str = "HHI 지수";
pub const SHARE_TITLE: &str = "점유율 (%)";

/// Whether zero-valued segments get a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZeroLabels {
    Hide,
    Show,
}

/// Normalize `values` to percentages of their sum, rounded to one decimal.
///
/// Rounding uses the largest-remainder method so the results add up to
/// exactly 100.0 whenever the total is positive. Negative and non-finite
/// inputs count as zero. An all-zero input yields all zeros.
pub fn percentages(values: &[f64]) -> Vec<f64> {
    let clean: Vec<f64> = values
        .iter()
        .map(|v| if v.is_finite() && *v > 0.0 { *v } else { 0.0 })
        .collect();
    let total: f64 = clean.iter().sum();
    if total <= 0.0 {
        return vec![0.0; clean.len()];
    }

    // Work in tenths of a percent.
    let scaled: Vec<f64> = clean.iter().map(|v| v / total * 1000.0).collect();
    let mut tenths: Vec<u64> = scaled.iter().map(|v| v.floor() as u64).collect();
    let assigned: u64 = tenths.iter().sum();
    let mut order: Vec<usize> = (0..scaled.len()).collect();
    order.sort_by(|a, b| {
        let ra = scaled[*a] - scaled[*a].floor();
        let rb = scaled[*b] - scaled[*b].floor();
        rb.total_cmp(&ra)
    });
    for index in order.into_iter().take(1000u64.saturating_sub(assigned) as usize) {
        tenths[index] += 1;
    }

    tenths.into_iter().map(|t| t as f64 / 10.0).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StackedSegment {
    pub category: String,
    pub value: f64,
    pub percent: f64,
    /// Empty when the segment is hidden.
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StackedRow {
    pub name: String,
    pub color: Option<String>,
    pub segments: Vec<StackedSegment>,
}

impl StackedRow {
    pub fn percent_total(&self) -> f64 {
        self.segments.iter().map(|s| s.percent).sum()
    }
}

/// 100%-stacked horizontal bars: one row per series, one segment per
/// category, each row normalized against its own total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StackedPercentChart {
    pub categories: Vec<String>,
    pub rows: Vec<StackedRow>,
}

impl StackedPercentChart {
    pub fn build(
        categories: &[String],
        series: &[ChartSeries],
        colors: &[String],
        zero_labels: ZeroLabels,
    ) -> Self {
        let rows = series
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let values: Vec<f64> = (0..categories.len())
                    .map(|c| s.data.get(c).copied().unwrap_or(0.0))
                    .collect();
                let segments = categories
                    .iter()
                    .zip(values.iter())
                    .zip(percentages(&values))
                    .map(|((category, value), percent)| StackedSegment {
                        category: category.clone(),
                        value: *value,
                        percent,
                        label: match zero_labels {
                            ZeroLabels::Hide if percent <= 0.0 => String::new(),
                            _ => format!("{:.1}%", percent),
                        },
                    })
                    .collect();
                StackedRow {
                    name: s.name.clone(),
                    color: colors.get(i).cloned(),
                    segments,
                }
            })
            .collect();

        Self {
            categories: categories.to_vec(),
            rows,
        }
    }

    /// Overall vote composition per party.
    pub fn vote_composition(stats: &DashboardStats) -> Self {
        Self::build(
            &vote_type_categories(),
            &stats.series,
            &stats.party_colors,
            ZeroLabels::Hide,
        )
    }

    /// Vote composition of each party within one bill cluster. Parties
    /// missing from the cluster get an all-zero row.
    pub fn from_cluster(
        stats: &ClusterPartyStats,
        party_names: &[String],
        party_colors: &[String],
    ) -> Self {
        let series: Vec<ChartSeries> = party_names
            .iter()
            .map(|party| {
                let by_type = stats.party_stats.get(party);
                let data = VoteType::ALL
                    .iter()
                    .map(|t| by_type.and_then(|m| m.get(t)).copied().unwrap_or(0.0))
                    .collect();
                ChartSeries::new(party.clone(), data)
            })
            .collect();
        Self::build(
            &vote_type_categories(),
            &series,
            party_colors,
            ZeroLabels::Show,
        )
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.categories.is_empty()
    }
}

fn vote_type_categories() -> Vec<String> {
    VoteType::ALL.iter().map(|t| t.label().to_string()).collect()
}

/// Stacked column chart of absolute percentages from `/api/cluster_chart`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StackedColumnChart {
    pub categories: Vec<String>,
    pub series: Vec<ChartSeries>,
    pub y_max: f64,
}

impl StackedColumnChart {
    pub const Y_MAX: f64 = 100.0;

    pub fn from_data(data: &ClusterChartData) -> Option<Self> {
        if data.is_empty() {
            return None;
        }
        Some(Self {
            categories: data.categories.clone(),
            series: data.series.clone(),
            y_max: Self::Y_MAX,
        })
    }

    /// Height of the stacked column at `category`, capped at the axis max.
    pub fn column_total(&self, category: usize) -> f64 {
        let total: f64 = self
            .series
            .iter()
            .filter_map(|s| s.data.get(category))
            .filter(|v| v.is_finite() && **v > 0.0)
            .sum();
        total.min(self.y_max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Axis {
    pub title: &'static str,
    pub min: f64,
    pub max: f64,
}

/// Dual-axis line chart: HHI on the left [0, 1], top-two share on the
/// right [0, 100].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConcentrationChart {
    pub categories: Vec<String>,
    pub hhi: ChartSeries,
    pub top2_share: ChartSeries,
    pub hhi_axis: Axis,
    pub share_axis: Axis,
}

impl ConcentrationChart {
    /// Columns of unequal length are truncated to the shortest one.
    pub fn from_series(series: &ConcentrationSeries) -> Self {
        let len = series.len();
        Self {
            categories: series.age[..len].to_vec(),
            hhi: ChartSeries::new(HHI_TITLE, series.hhi[..len].to_vec()),
            top2_share: ChartSeries::new(SHARE_TITLE, series.top2_ratio[..len].to_vec()),
            hhi_axis: Axis {
                title: HHI_TITLE,
                min: 0.0,
                max: 1.0,
            },
            share_axis: Axis {
                title: SHARE_TITLE,
                min: 0.0,
                max: 100.0,
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Effective number of parties relative to all parties of one term.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressBar {
    pub age: String,
    pub enp: f64,
    pub total_parties: u32,
    /// Percentage rounded to one decimal; 0 when there are no parties.
    pub ratio: f64,
}

impl ProgressBar {
    pub fn new(age: impl Into<String>, enp: f64, total_parties: u32) -> Self {
        let ratio = if total_parties == 0 || !enp.is_finite() {
            0.0
        } else {
            (enp / total_parties as f64 * 1000.0).round() / 10.0
        };
        Self {
            age: age.into(),
            enp,
            total_parties,
            ratio,
        }
    }

    pub fn from_series(series: &ConcentrationSeries) -> Vec<Self> {
        (0..series.len())
            .map(|i| Self::new(&series.age[i], series.enp[i], series.total_parties[i]))
            .collect()
    }

    pub fn text(&self) -> String {
        format!(
            "총 {}개 정당 중 {}개 ({:.1}%)",
            self.total_parties, self.enp, self.ratio
        )
    }

    /// Number of filled cells out of `width`.
    pub fn filled(&self, width: usize) -> usize {
        let cells = (self.ratio.clamp(0.0, 100.0) / 100.0 * width as f64).round();
        (cells as usize).min(width)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Created,
    Updated,
}

/// Holds at most one live chart.
#[derive(Debug, Clone)]
pub struct ChartSlot<T> {
    chart: Option<T>,
}

impl<T> Default for ChartSlot<T> {
    fn default() -> Self {
        Self { chart: None }
    }
}

impl<T> ChartSlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the live chart's content, or create it if there is none.
    pub fn upsert(&mut self, chart: T) -> Upsert {
        match self.chart.replace(chart) {
            Some(_) => Upsert::Updated,
            None => Upsert::Created,
        }
    }

    /// Destroy the live chart. Returns whether there was one.
    pub fn clear(&mut self) -> bool {
        self.chart.take().is_some()
    }

    pub fn get(&self) -> Option<&T> {
        self.chart.as_ref()
    }
}
