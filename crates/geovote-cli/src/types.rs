use clap::ValueEnum;
use std::fmt;

/// How `geovote member` prints a summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Alignment header and vote-type cards as text.
    Plain,
    /// The raw summary and its cards as one JSON document.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Plain => "plain",
            OutputFormat::Json => "json",
        }
    }
}

/// Verbosity of the tracing output: stderr for one-shot commands, the
/// log strip under the treemap for `browse`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LogLevel {
    /// Setup problems and failed fetches.
    Error,
    /// Adds skipped renders and missing clusters. This is the default.
    Warn,
    /// Adds tree loads and term switches.
    Info,
    /// Adds request tickets, stale responses and re-layouts.
    Debug,
    Trace,
}

impl LogLevel {
    /// Directive for `tracing_subscriber::EnvFilter`, scoped to the
    /// geovote crates so dependency noise stays out of the log strip.
    pub fn directive(self) -> String {
        let level = self.to_string();
        ["geovote_cli", "geovote_engine", "geovote_client"]
            .iter()
            .map(|target| format!("{}={}", target, level))
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        };
        f.write_str(level)
    }
}
