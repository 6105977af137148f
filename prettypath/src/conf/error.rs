use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    // IO
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Parsing
    #[error("failed to parse TOML in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    // Validation
    #[error("index_file must not be empty")]
    EmptyIndexFile,

    #[error("index_file '{value}' must not contain a path separator")]
    IndexFileWithSeparator { value: String },

    #[error("page_extension '{value}' must start with '.' and name an extension")]
    InvalidPageExtension { value: String },
}
