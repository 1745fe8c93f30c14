use std::path::Path;

use anyhow::{Context, Result, bail};
use geovote_client::Config;

pub fn show(path: &Path, config: &Config) -> Result<()> {
    let origin = if path.exists() { "" } else { " (not found, defaults)" };
    println!("# {}{}", path.display(), origin);
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}

pub fn init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "{} already exists; pass --force to overwrite it",
            path.display()
        );
    }

    Config::default()
        .save_to(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "wrote default configuration");
    println!("Wrote {}", path.display());
    Ok(())
}
