pub mod browse;
pub mod cluster_chart;
pub mod config;
pub mod dashboard;
pub mod member;

use anyhow::{Context, Result};
use tokio::runtime::Runtime;

/// Runtime for the network-bound commands.
pub(crate) fn runtime() -> Result<Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")
}
