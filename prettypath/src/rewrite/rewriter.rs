use anyhow::Context;

use crate::conf::{RewriteConfig, validate};
use crate::ctx::ViewerRequest;
use crate::rewrite::pipeline::RewritePipeline;
use crate::rewrite::result::RewriteOutcome;
use crate::rewrite::rule::RewriteRule;
use crate::rewrite::rules::{
    DirectoryIndex, ExtensionPassthrough, PageExtension, TrailingSlashRedirect,
};

/// The viewer-request trigger.
///
/// Immutable after construction; hosts may share one instance across
/// threads. Rule order is fixed. The canonicalization redirect is
/// evaluated before any rewrite rule, so it always overrides a would-be
/// rewrite on trailing-slash paths.
pub struct UriRewriter {
    pipeline: RewritePipeline,
}

impl UriRewriter {
    /// Build from an already-validated config (see `conf::load_config`).
    pub fn new(cfg: RewriteConfig) -> Self {
        let rules: Vec<Box<dyn RewriteRule>> = vec![
            Box::new(TrailingSlashRedirect),
            Box::new(ExtensionPassthrough),
            Box::new(DirectoryIndex::new(cfg.index_file)),
            Box::new(PageExtension::new(cfg.page_extension)),
        ];

        Self {
            pipeline: RewritePipeline::new(rules),
        }
    }

    /// Build from a raw TOML blob, validating first.
    pub fn from_config(raw: &toml::Value) -> anyhow::Result<Self> {
        let cfg: RewriteConfig = raw.clone().try_into().context("invalid rewrite config")?;

        validate(&cfg)?;

        Ok(Self::new(cfg))
    }

    pub fn rewrite(&self, request: ViewerRequest) -> RewriteOutcome {
        self.pipeline.run(request)
    }
}

impl Default for UriRewriter {
    fn default() -> Self {
        Self::new(RewriteConfig::default())
    }
}
