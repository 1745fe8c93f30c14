//! tracing-subscriber setup.
//!
//! Console commands log to stderr. The TUI owns the terminal, so its logs
//! travel over a channel and are drawn in the log strip instead.

use std::io;
use std::sync::mpsc::{self, Receiver, Sender};

use tracing_subscriber::EnvFilter;

use crate::types::LogLevel;

fn filter(level: Option<LogLevel>) -> EnvFilter {
    match level {
        Some(level) => EnvFilter::new(level.directive()),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    }
}

pub fn init_console(level: Option<LogLevel>) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(level))
        .with_writer(io::stderr)
        .compact()
        .try_init();
}

/// Install a subscriber whose output arrives line by line on the returned
/// receiver.
pub fn init_channel(level: Option<LogLevel>) -> Receiver<String> {
    let (tx, rx) = mpsc::channel();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(level))
        .with_ansi(false)
        .without_time()
        .compact()
        .with_writer(move || ChannelWriter { sender: tx.clone() })
        .try_init();
    rx
}

struct ChannelWriter {
    sender: Sender<String>,
}

impl io::Write for ChannelWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text = String::from_utf8_lossy(buf);
        for line in text.lines().filter(|l| !l.trim().is_empty()) {
            let _ = self.sender.send(line.to_string());
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
