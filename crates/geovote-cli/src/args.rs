use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "geovote")]
#[command(about = "Explore National Assembly roll-call votes by region", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Path to config.toml")]
    pub config: Option<String>,

    #[arg(long, global = true, help = "Backend base URL (overrides config)")]
    pub base_url: Option<String>,

    #[arg(long, global = true, help = "Log level (defaults to RUST_LOG, then warn)")]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Interactive treemap drill-down")]
    Browse {
        #[arg(long, help = "Legislative term (defaults to config default_age)")]
        age: Option<u32>,
    },

    #[command(about = "Print how a member voted, by bill cluster")]
    Member {
        name: String,

        #[arg(long)]
        age: Option<u32>,

        #[arg(long, default_value = "plain")]
        format: OutputFormat,
    },

    #[command(about = "Print party vote shares for one bill cluster")]
    ClusterChart {
        #[arg(long)]
        age: u32,

        #[arg(long)]
        cluster: i64,

        #[arg(long)]
        party: String,

        #[arg(long)]
        stance: String,
    },

    #[command(about = "Print dashboard charts from precomputed statistics")]
    Dashboard {
        #[arg(long)]
        file: PathBuf,

        #[arg(
            long = "cluster",
            help = "Cluster to chart; repeat to switch through several (defaults to the first one)"
        )]
        clusters: Vec<i64>,
    },

    #[command(about = "Show or create the configuration file")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Print the effective configuration")]
    Show,

    #[command(about = "Write a default configuration file")]
    Init {
        #[arg(long, help = "Overwrite an existing file")]
        force: bool,
    },
}
