//! Runtime configuration, read from an optional TOML file layered with
//! `LEGALMATCH_*` environment variables.

use std::{
  path::{Path, PathBuf},
  time::Duration,
};

use anyhow::Context as _;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CliConfig {
  /// SQLite file holding submitted cases, drafts and the session.
  pub store_path:            PathBuf,
  /// Simulated latency of the content generator.
  pub generation_latency_ms: u64,
  /// JSON file replacing the built-in lawyers, cases and users.
  pub reference_data:        Option<PathBuf>,
}

impl Default for CliConfig {
  fn default() -> Self {
    Self {
      store_path:            PathBuf::from("legalmatch.db"),
      generation_latency_ms: 1000,
      reference_data:        None,
    }
  }
}

impl CliConfig {
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    let settings = config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("LEGALMATCH"))
      .build()
      .context("failed to read config file")?;

    settings
      .try_deserialize()
      .context("failed to deserialise CliConfig")
  }

  pub fn store_path(&self) -> PathBuf { expand_tilde(&self.store_path) }

  pub fn reference_data_path(&self) -> Option<PathBuf> {
    self.reference_data.as_deref().map(expand_tilde)
  }

  pub fn generation_latency(&self) -> Duration {
    Duration::from_millis(self.generation_latency_ms)
  }
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
