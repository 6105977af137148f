/// A single step in the rewrite pipeline.
///
/// Rules inspect the request path only; the pipeline owns the request
/// value and applies whatever the first non-skipping rule decides.
pub trait RewriteRule: Send + Sync {
    /// Name used in decision logs
    fn name(&self) -> &'static str;

    fn evaluate(&self, path: &str) -> RuleAction;
}

/// What a rule wants done with the request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleAction {
    /// Rule does not apply; evaluate the next rule
    Skip,

    /// Stop the pipeline and forward the request with this path
    RewriteTo(String),

    /// Stop the pipeline and forward the request unchanged
    Passthrough,

    /// Stop the pipeline and answer the client with a permanent redirect
    /// to this location
    RedirectTo(String),
}
