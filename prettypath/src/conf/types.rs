use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RewriteConfig {
    /// Document appended to directory requests
    #[serde(default = "default_index_file")]
    pub index_file: String,

    /// Extension appended to extensionless page paths
    #[serde(default = "default_page_extension")]
    pub page_extension: String,
}

fn default_index_file() -> String {
    "index.html".to_string()
}

fn default_page_extension() -> String {
    ".html".to_string()
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            index_file: default_index_file(),
            page_extension: default_page_extension(),
        }
    }
}
