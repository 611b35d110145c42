mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    let default_paths = ["./inspforge.toml", "~/.config/inspforge/config.toml"];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            tracing::debug!("Using config file {:?}", path);
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    let validator = &config.validator;
    if validator.target_aspect_ratio.is_nan() || validator.target_aspect_ratio <= 0.0 {
        anyhow::bail!(
            "Target aspect ratio must be positive, got {}",
            validator.target_aspect_ratio
        );
    }
    if validator.aspect_tolerance.is_nan() || validator.aspect_tolerance <= 0.0 {
        anyhow::bail!(
            "Aspect tolerance must be positive, got {}",
            validator.aspect_tolerance
        );
    }

    let output = &config.output;
    if output.extensions.is_empty() {
        anyhow::bail!("At least one input extension must be configured");
    }
    if output.container_extension.trim().is_empty() {
        anyhow::bail!("Container extension cannot be empty");
    }

    Ok(())
}
