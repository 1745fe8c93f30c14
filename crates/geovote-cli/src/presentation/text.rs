//! Plain-text chart rendering shared by the console commands.

use geovote_engine::charts::{
    ConcentrationChart, HHI_TITLE, ProgressBar, SHARE_TITLE, StackedColumnChart,
    StackedPercentChart, TERM_AXIS_TITLE,
};
use unicode_width::UnicodeWidthStr;

pub const BAR_WIDTH: usize = 40;
pub const SEGMENT_GLYPHS: [char; 4] = ['█', '▓', '▒', '░'];
const EMPTY_GLYPH: char = '·';

fn glyph(index: usize) -> char {
    SEGMENT_GLYPHS[index % SEGMENT_GLYPHS.len()]
}

/// Right-pad `text` to `width` terminal columns.
pub fn pad(text: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(text);
    format!("{}{}", text, " ".repeat(width.saturating_sub(used)))
}

fn column_width<'a>(items: impl Iterator<Item = &'a str>) -> usize {
    items.map(UnicodeWidthStr::width).max().unwrap_or(0)
}

/// Cells per segment for values on a `[0, max]` scale. Boundaries are
/// rounded cumulatively so segments never overlap or overflow `width`.
pub fn segment_cells(values: &[f64], max: f64, width: usize) -> Vec<usize> {
    if max <= 0.0 {
        return vec![0; values.len()];
    }
    let mut cumulative = 0.0;
    let mut start = 0usize;
    values
        .iter()
        .map(|v| {
            cumulative += if v.is_finite() && *v > 0.0 { *v } else { 0.0 };
            let end = ((cumulative.min(max) / max) * width as f64).round() as usize;
            let cells = end.saturating_sub(start);
            start = start.max(end);
            cells
        })
        .collect()
}

fn bar(cells: &[usize], width: usize) -> String {
    let mut out: String = cells
        .iter()
        .enumerate()
        .map(|(i, n)| glyph(i).to_string().repeat(*n))
        .collect();
    let used: usize = cells.iter().sum();
    out.extend(std::iter::repeat_n(EMPTY_GLYPH, width.saturating_sub(used)));
    out
}

fn legend<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names
        .enumerate()
        .map(|(i, name)| format!("{} {}", glyph(i), name))
        .collect::<Vec<_>>()
        .join("  ")
}

pub fn stacked_percent_lines(chart: &StackedPercentChart) -> Vec<String> {
    let name_width = column_width(chart.rows.iter().map(|r| r.name.as_str()));
    let mut lines = vec![legend(chart.categories.iter().map(String::as_str))];

    for row in &chart.rows {
        let percents: Vec<f64> = row.segments.iter().map(|s| s.percent).collect();
        let cells = segment_cells(&percents, 100.0, BAR_WIDTH);
        let labels: Vec<String> = row
            .segments
            .iter()
            .filter(|s| !s.label.is_empty())
            .map(|s| format!("{} {}", s.category, s.label))
            .collect();
        lines.push(format!(
            "{}  {}  {}",
            pad(&row.name, name_width),
            bar(&cells, BAR_WIDTH),
            labels.join(" ")
        ));
    }
    lines
}

pub fn column_chart_lines(chart: &StackedColumnChart) -> Vec<String> {
    let category_width = column_width(chart.categories.iter().map(String::as_str));
    let mut lines = vec![legend(chart.series.iter().map(|s| s.name.as_str()))];

    for (c, category) in chart.categories.iter().enumerate() {
        let values: Vec<f64> = chart
            .series
            .iter()
            .map(|s| s.data.get(c).copied().unwrap_or(0.0))
            .collect();
        let cells = segment_cells(&values, chart.y_max, BAR_WIDTH);
        let parts: Vec<String> = chart
            .series
            .iter()
            .zip(&values)
            .map(|(s, v)| format!("{} {:.1}", s.name, v))
            .collect();
        lines.push(format!(
            "{}  {}  {:.1}% ({})",
            pad(category, category_width),
            bar(&cells, BAR_WIDTH),
            chart.column_total(c),
            parts.join(", ")
        ));
    }
    lines
}

pub fn concentration_lines(chart: &ConcentrationChart) -> Vec<String> {
    const SPARK_WIDTH: usize = 20;
    let age_width = column_width(
        chart
            .categories
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(TERM_AXIS_TITLE)),
    );

    let hhi_header = format!("{} [{}-{}]", HHI_TITLE, chart.hhi_axis.min, chart.hhi_axis.max);
    let share_header = format!(
        "{} [{}-{}]",
        SHARE_TITLE, chart.share_axis.min, chart.share_axis.max
    );
    let mut lines = vec![format!(
        "{}  {}  {}",
        pad(TERM_AXIS_TITLE, age_width),
        pad(&hhi_header, SPARK_WIDTH + 6),
        share_header
    )];

    for (i, age) in chart.categories.iter().enumerate() {
        let hhi = chart.hhi.data[i];
        let share = chart.top2_share.data[i];
        let hhi_cells = segment_cells(&[hhi], chart.hhi_axis.max, SPARK_WIDTH);
        let share_cells = segment_cells(&[share], chart.share_axis.max, SPARK_WIDTH);
        lines.push(format!(
            "{}  {} {:.3}  {} {:.1}",
            pad(age, age_width),
            bar(&hhi_cells, SPARK_WIDTH),
            hhi,
            bar(&share_cells, SPARK_WIDTH),
            share
        ));
    }
    lines
}

pub fn progress_lines(bars: &[ProgressBar]) -> Vec<String> {
    const WIDTH: usize = 30;
    let age_width = column_width(bars.iter().map(|b| b.age.as_str()));
    bars.iter()
        .map(|b| {
            let filled = b.filled(WIDTH);
            format!(
                "{}  [{}{}] {:>5.1}%  {}",
                pad(&b.age, age_width),
                "█".repeat(filled),
                " ".repeat(WIDTH - filled),
                b.ratio,
                b.text()
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use geovote_engine::ZeroLabels;
    use geovote_types::ChartSeries;

    #[test]
    fn test_pad_counts_wide_characters() {
        assert_eq!(pad("당A", 5), "당A  ");
        assert_eq!(pad("abc", 2), "abc");
    }

    #[test]
    fn test_segment_cells_fill_width_exactly() {
        let cells = segment_cells(&[33.4, 33.3, 33.3, 0.0], 100.0, 40);
        assert_eq!(cells.iter().sum::<usize>(), 40);
        assert_eq!(cells[3], 0);
    }

    #[test]
    fn test_segment_cells_cap_at_max() {
        assert_eq!(segment_cells(&[80.0, 50.0], 100.0, 10), vec![8, 2]);
        assert_eq!(segment_cells(&[1.0], 0.0, 10), vec![0]);
    }

    #[test]
    fn test_stacked_percent_lines() {
        let categories: Vec<String> = ["찬성", "반대", "기권", "불참"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let series = vec![
            ChartSeries::new("당A", vec![40.0, 30.0, 20.0, 10.0]),
            ChartSeries::new("무소속", vec![1.0, 0.0, 0.0, 1.0]),
        ];
        let chart = StackedPercentChart::build(&categories, &series, &[], ZeroLabels::Hide);

        insta::assert_snapshot!(stacked_percent_lines(&chart).join("\n"), @r"
        █ 찬성  ▓ 반대  ▒ 기권  ░ 불참
        당A     ████████████████▓▓▓▓▓▓▓▓▓▓▓▓▒▒▒▒▒▒▒▒░░░░  찬성 40.0% 반대 30.0% 기권 20.0% 불참 10.0%
        무소속  ████████████████████░░░░░░░░░░░░░░░░░░░░  찬성 50.0% 불참 50.0%
        ");
    }

    #[test]
    fn test_progress_lines() {
        let bars = vec![ProgressBar::new("제21대", 2.4, 10), ProgressBar::new("제22대", 2.2, 0)];
        insta::assert_snapshot!(progress_lines(&bars).join("\n"), @r"
        제21대  [███████                       ]  24.0%  총 10개 정당 중 2.4개 (24.0%)
        제22대  [                              ]   0.0%  총 0개 정당 중 2.2개 (0.0%)
        ");
    }
}
