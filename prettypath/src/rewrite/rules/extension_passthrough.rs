use crate::rewrite::rule::{RewriteRule, RuleAction};

/// Leaves URIs that already carry a file extension untouched.
///
/// The dot scan covers the whole URI, not just the final segment, so
/// `/v1.2/page` counts as already-extensioned and passes through.
pub struct ExtensionPassthrough;

impl RewriteRule for ExtensionPassthrough {
    fn name(&self) -> &'static str {
        "extension_passthrough"
    }

    fn evaluate(&self, path: &str) -> RuleAction {
        if path.contains('.') {
            return RuleAction::Passthrough;
        }

        RuleAction::Skip
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_through_extensioned_assets() {
        let rule = ExtensionPassthrough;

        assert_eq!(rule.evaluate("/style.css"), RuleAction::Passthrough);
        assert_eq!(rule.evaluate("/about.html"), RuleAction::Passthrough);
    }

    #[test]
    fn dot_in_any_segment_counts() {
        let rule = ExtensionPassthrough;

        assert_eq!(rule.evaluate("/v1.2/page"), RuleAction::Passthrough);
    }

    #[test]
    fn skips_dotless_paths() {
        let rule = ExtensionPassthrough;

        assert_eq!(rule.evaluate("/"), RuleAction::Skip);
        assert_eq!(rule.evaluate("/about"), RuleAction::Skip);
    }
}
