use crate::rewrite::rule::{RewriteRule, RuleAction};

/// Canonicalizes `/foo/` to `/foo` with a permanent redirect.
///
/// Strips exactly one trailing slash per request, so `/a//` redirects to
/// `/a/` and the client converges over successive round trips. The root
/// path is exempt.
pub struct TrailingSlashRedirect;

impl RewriteRule for TrailingSlashRedirect {
    fn name(&self) -> &'static str {
        "trailing_slash_redirect"
    }

    fn evaluate(&self, path: &str) -> RuleAction {
        if path != "/" && path.ends_with('/') {
            return RuleAction::RedirectTo(path[..path.len() - 1].to_string());
        }

        RuleAction::Skip
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_one_trailing_slash() {
        let rule = TrailingSlashRedirect;

        assert_eq!(
            rule.evaluate("/about/"),
            RuleAction::RedirectTo("/about".into())
        );
        assert_eq!(
            rule.evaluate("/a/b/"),
            RuleAction::RedirectTo("/a/b".into())
        );
        assert_eq!(rule.evaluate("/a//"), RuleAction::RedirectTo("/a/".into()));
    }

    #[test]
    fn leaves_root_and_slashless_paths_alone() {
        let rule = TrailingSlashRedirect;

        assert_eq!(rule.evaluate("/"), RuleAction::Skip);
        assert_eq!(rule.evaluate("/about"), RuleAction::Skip);
    }
}
