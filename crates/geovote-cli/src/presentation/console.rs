use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;

use geovote_engine::{ConcentrationChart, ProgressBar, StackedColumnChart, StackedPercentChart, SummaryView};

use super::text;

/// Line-oriented output for the non-interactive commands. Colors are
/// only emitted when stdout is a terminal.
pub struct ConsoleRenderer {
    color: bool,
}

impl Default for ConsoleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleRenderer {
    pub fn new() -> Self {
        Self {
            color: std::io::stdout().is_terminal(),
        }
    }

    pub fn with_color(color: bool) -> Self {
        Self { color }
    }

    fn heading(&self, title: &str) -> String {
        if self.color {
            title.cyan().bold().to_string()
        } else {
            title.to_string()
        }
    }

    pub fn render_heading(&self, title: &str) {
        println!("{}", self.heading(title));
    }

    pub fn render_notice(&self, message: &str) {
        if self.color {
            println!("{}", message.yellow());
        } else {
            println!("{}", message);
        }
    }

    pub fn render_lines(&self, lines: &[String]) {
        for line in lines {
            println!("{}", line);
        }
    }

    pub fn render_json<T: Serialize>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    pub fn render_summary(&self, title: &str, view: &SummaryView) {
        self.render_heading(title);
        println!();
        self.render_lines(&view.to_lines());
    }

    pub fn render_stacked_percent(&self, title: &str, chart: &StackedPercentChart) {
        self.render_heading(title);
        self.render_lines(&text::stacked_percent_lines(chart));
    }

    pub fn render_column_chart(&self, title: &str, chart: &StackedColumnChart) {
        self.render_heading(title);
        self.render_lines(&text::column_chart_lines(chart));
    }

    pub fn render_concentration(&self, title: &str, chart: &ConcentrationChart) {
        self.render_heading(title);
        self.render_lines(&text::concentration_lines(chart));
    }

    pub fn render_progress(&self, title: &str, bars: &[ProgressBar]) {
        self.render_heading(title);
        self.render_lines(&text::progress_lines(bars));
    }
}
