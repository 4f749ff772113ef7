//! Configuration system - YAML-based config loading.
//!
//! Mirrors the layered netdisco configuration system (defaults, then an
//! environment-specific overlay, then environment variables) scoped down
//! to what an SNMP endpoint actually owns: bind address/port, receive
//! buffer size, and the default outbound community.

pub mod settings;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;

pub use settings::*;

/// Load endpoint configuration from YAML files.
///
/// Configuration is loaded in layers:
/// 1. Built-in defaults (endpoint.yml)
/// 2. Environment-specific overrides (environments/deployment.yml)
/// 3. Environment variable overrides
pub fn load_config(config_dir: Option<&Path>) -> Result<EndpointConfig> {
    let home = config_dir
        .map(PathBuf::from)
        .or_else(|| std::env::var("SNMP_ENDPOINT_HOME").ok().map(PathBuf::from))
        .or_else(dirs::home_dir)
        .context("cannot determine home directory")?;

    let default_config_path = home.join("endpoint.yml");
    let mut config = if default_config_path.exists() {
        let contents = std::fs::read_to_string(&default_config_path)
            .with_context(|| format!("failed to read {}", default_config_path.display()))?;
        serde_yaml::from_str::<EndpointConfig>(&contents)
            .with_context(|| format!("failed to parse {}", default_config_path.display()))?
    } else {
        EndpointConfig::default()
    };

    let env_config_path = home.join("environments").join("deployment.yml");
    if env_config_path.exists() {
        let contents = std::fs::read_to_string(&env_config_path)
            .with_context(|| format!("failed to read {}", env_config_path.display()))?;
        let overrides: serde_yaml::Value = serde_yaml::from_str(&contents)
            .with_context(|| format!("failed to parse {}", env_config_path.display()))?;
        config.apply_overrides(&overrides)?;
        info!("loaded config overrides from {}", env_config_path.display());
    }

    config.apply_env_overrides();

    Ok(config)
}
