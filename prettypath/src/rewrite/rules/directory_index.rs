use crate::rewrite::rule::{RewriteRule, RuleAction};

/// Resolves directory requests to the configured index document.
pub struct DirectoryIndex {
    index_file: String,
}

impl DirectoryIndex {
    pub fn new(index_file: impl Into<String>) -> Self {
        Self {
            index_file: index_file.into(),
        }
    }
}

impl RewriteRule for DirectoryIndex {
    fn name(&self) -> &'static str {
        "directory_index"
    }

    fn evaluate(&self, path: &str) -> RuleAction {
        if path.ends_with('/') {
            return RuleAction::RewriteTo(format!("{path}{}", self.index_file));
        }

        RuleAction::Skip
    }
}
