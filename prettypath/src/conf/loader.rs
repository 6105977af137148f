use std::fs;
use std::path::Path;

use crate::conf::error::ConfigError;
use crate::conf::types::RewriteConfig;
use crate::conf::validate::validate;

/// Load a rewrite config from a TOML file and validate it.
pub fn load_config(path: &Path) -> Result<RewriteConfig, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    let cfg: RewriteConfig = toml::from_str(&raw).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;

    validate(&cfg)?;

    Ok(cfg)
}
