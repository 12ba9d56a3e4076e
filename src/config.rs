//! Ambient configuration for the demo binary: which flavor to print in,
//! and which theorem provers the binary should know the names of.
//!
//! Loaded from an optional TOML file the way `hyformal`'s `Settings`
//! loads its `config.toml` — `toml` plus `serde`, with a `Default` that
//! needs no file present at all.

use crate::error::EngineError;
use crate::symbols::Flavor;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub active_flavor: Flavor,
    pub prover_registry: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            active_flavor: Flavor::Symbolic,
            prover_registry: Vec::new(),
        }
    }
}

impl Config {
    /// Load from a TOML file at `path`. Missing fields fall back to
    /// `Config::default()`'s values.
    pub fn load(path: &Path) -> Result<Config, EngineError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| EngineError::Config(format!("reading {}: {e}", path.display())))?;
        toml::from_str(&text).map_err(|e| EngineError::Config(format!("parsing {}: {e}", path.display())))
    }
}
