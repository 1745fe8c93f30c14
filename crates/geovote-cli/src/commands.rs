use super::args::{Cli, Commands, ConfigCommand};
use super::handlers;
use crate::logging;
use anyhow::{Context, Result};
use geovote_client::Config;
use std::path::Path;

fn load_config(path: &Path, base_url: Option<&str>) -> Result<Config> {
    let mut config =
        Config::load_from(path).with_context(|| format!("failed to load {}", path.display()))?;
    if let Some(base_url) = base_url {
        config.base_url = base_url.to_string();
        config.validate()?;
    }
    Ok(config)
}

pub fn run(cli: Cli) -> Result<()> {
    let config_path = Config::resolve_path(cli.config.as_deref())?;
    let base_url = cli.base_url.as_deref();

    match cli.command {
        Commands::Browse { age } => {
            let logs = logging::init_channel(cli.log_level);
            let config = load_config(&config_path, base_url)?;
            let age = age.unwrap_or(config.default_age);
            handlers::browse::handle(&config, age, logs)
        }

        Commands::Member { name, age, format } => {
            logging::init_console(cli.log_level);
            let config = load_config(&config_path, base_url)?;
            let age = age.unwrap_or(config.default_age);
            handlers::member::handle(&config, &name, age, format)
        }

        Commands::ClusterChart {
            age,
            cluster,
            party,
            stance,
        } => {
            logging::init_console(cli.log_level);
            let config = load_config(&config_path, base_url)?;
            handlers::cluster_chart::handle(&config, age, cluster, &party, &stance)
        }

        Commands::Dashboard { file, clusters } => {
            logging::init_console(cli.log_level);
            handlers::dashboard::handle(&file, &clusters)
        }

        Commands::Config { command } => {
            logging::init_console(cli.log_level);
            match command {
                ConfigCommand::Show => {
                    let config = load_config(&config_path, base_url)?;
                    handlers::config::show(&config_path, &config)
                }
                ConfigCommand::Init { force } => handlers::config::init(&config_path, force),
            }
        }
    }
}
