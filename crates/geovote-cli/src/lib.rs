// NOTE: geovote CLI layout
//
// - args: clap definitions only
// - commands: config loading and dispatch
// - handlers: one module per subcommand, owning I/O (network, files, terminal)
// - presentation: console and TUI renderers over engine view models
//
// Fetch failures are reported as notices and never change the exit code;
// only setup failures (config, terminal) end the process with status 1.

mod args;
mod commands;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand};
pub use commands::run;
