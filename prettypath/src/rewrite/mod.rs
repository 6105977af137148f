mod pipeline;
mod result;
mod rewriter;
pub mod rule;
pub mod rules;

#[cfg(test)]
mod tests;

pub use pipeline::RewritePipeline;
pub use result::RewriteOutcome;
pub use rewriter::UriRewriter;
pub use rule::{RewriteRule, RuleAction};
