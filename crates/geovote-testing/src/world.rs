//! TestWorld pattern for CLI integration tests.
//!
//! Every world owns a temporary config directory, so tests never read or
//! write the developer's real configuration.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures;

/// Isolated environment for running the `geovote` binary.
///
/// # Example
/// ```no_run
/// use geovote_testing::TestWorld;
///
/// let world = TestWorld::new().with_base_url("http://127.0.0.1:9");
/// let result = world.run(&["member", "홍길동"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    config_dir: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_dir = temp_dir.path().join(".geovote");
        std::fs::create_dir_all(&config_dir).expect("Failed to create config dir");

        Self {
            temp_dir,
            config_dir,
            env_vars: HashMap::new(),
        }
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    /// Point the configuration at a backend, typically a mock server or
    /// an address nothing listens on.
    pub fn with_base_url(self, base_url: &str) -> Self {
        let content = format!(
            "base_url = \"{}\"\ndefault_age = 22\nrequest_timeout_secs = 2\n",
            base_url
        );
        self.write_raw_config(&content)
            .expect("Failed to write config");
        self
    }

    pub fn write_raw_config(&self, content: &str) -> Result<()> {
        std::fs::write(self.config_path(), content)?;
        Ok(())
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Place the sample dashboard statistics and return their path.
    pub fn dashboard_file(&self) -> Result<PathBuf> {
        fixtures::write_dashboard(self.temp_dir.path())
    }

    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.env("GEOVOTE_PATH", &self.config_dir)
            .env_remove("RUST_LOG")
            .current_dir(self.temp_dir.path());

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Run the `geovote` binary with `args` inside this world.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("geovote")
            .map_err(|e| anyhow::anyhow!("Failed to find geovote binary: {}", e))?;
        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;
        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
