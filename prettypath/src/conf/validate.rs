use crate::conf::error::ConfigError;
use crate::conf::types::RewriteConfig;

/// Semantic validation on top of a successfully parsed config.
pub fn validate(cfg: &RewriteConfig) -> Result<(), ConfigError> {
    if cfg.index_file.is_empty() {
        return Err(ConfigError::EmptyIndexFile);
    }

    if cfg.index_file.contains('/') {
        return Err(ConfigError::IndexFileWithSeparator {
            value: cfg.index_file.clone(),
        });
    }

    // "." alone is not an extension
    if !cfg.page_extension.starts_with('.') || cfg.page_extension.len() < 2 {
        return Err(ConfigError::InvalidPageExtension {
            value: cfg.page_extension.clone(),
        });
    }

    Ok(())
}
