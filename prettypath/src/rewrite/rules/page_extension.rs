use crate::rewrite::rule::{RewriteRule, RuleAction};

/// Appends the configured document extension to extensionless page paths.
///
/// Applies to any non-root path without a trailing slash. Excluding URIs
/// that already carry an extension is the passthrough rule's job; pipeline
/// ordering guarantees it runs first.
pub struct PageExtension {
    extension: String,
}

impl PageExtension {
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
        }
    }
}

impl RewriteRule for PageExtension {
    fn name(&self) -> &'static str {
        "page_extension"
    }

    fn evaluate(&self, path: &str) -> RuleAction {
        if path != "/" && !path.ends_with('/') {
            return RuleAction::RewriteTo(format!("{path}{}", self.extension));
        }

        RuleAction::Skip
    }
}
