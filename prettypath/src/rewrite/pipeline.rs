use tracing::{debug, trace};

use crate::ctx::{RedirectResponse, ViewerRequest};
use crate::rewrite::result::RewriteOutcome;
use crate::rewrite::rule::{RewriteRule, RuleAction};

/// Ordered rule evaluation: the first rule returning anything other than
/// `Skip` decides the outcome.
pub struct RewritePipeline {
    rules: Vec<Box<dyn RewriteRule>>,
}

impl RewritePipeline {
    pub fn new(rules: Vec<Box<dyn RewriteRule>>) -> Self {
        Self { rules }
    }

    pub fn run(&self, mut request: ViewerRequest) -> RewriteOutcome {
        for rule in &self.rules {
            match rule.evaluate(&request.uri) {
                RuleAction::Skip => continue,

                RuleAction::RewriteTo(path) => {
                    debug!(
                        rule = rule.name(),
                        from = %request.uri,
                        to = %path,
                        "rewriting request path"
                    );
                    request.uri = path;
                    return RewriteOutcome::Forward(request);
                }

                RuleAction::Passthrough => {
                    trace!(
                        rule = rule.name(),
                        uri = %request.uri,
                        "forwarding request untouched"
                    );
                    return RewriteOutcome::Forward(request);
                }

                RuleAction::RedirectTo(location) => {
                    debug!(
                        rule = rule.name(),
                        from = %request.uri,
                        location = %location,
                        "redirecting client"
                    );
                    return RewriteOutcome::Respond(RedirectResponse::moved_permanently(location));
                }
            }
        }

        // No rule claimed the request; forward as-is.
        RewriteOutcome::Forward(request)
    }
}
