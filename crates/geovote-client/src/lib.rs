pub mod client;
pub mod config;
pub mod error;

pub use client::ApiClient;
pub use config::{Config, TreeSource, resolve_config_dir};
pub use error::{ClientError, Result};
