use once_cell::sync::Lazy;
use serde::Deserialize;
use thiserror::Error;

use crate::ctx::ViewerRequest;
use crate::rewrite::{RewriteOutcome, UriRewriter};

/// One viewer-request invocation from the host platform.
///
/// Event-level fields other than `request` (trigger context, distribution
/// metadata) are not part of the output and are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ViewerEvent {
    pub request: ViewerRequest,
}

#[derive(Debug, Error)]
pub enum EventError {
    #[error("failed to decode viewer event: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode trigger output: {source}")]
    Encode {
        #[source]
        source: serde_json::Error,
    },
}

static DEFAULT_REWRITER: Lazy<UriRewriter> = Lazy::new(UriRewriter::default);

/// Trigger entry point with the platform defaults (`index.html`, `.html`).
pub fn handler(event: ViewerEvent) -> RewriteOutcome {
    DEFAULT_REWRITER.rewrite(event.request)
}

/// Decode a raw host event, rewrite, and encode the outcome.
pub fn handle_event_json(rewriter: &UriRewriter, raw: &str) -> Result<String, EventError> {
    let event: ViewerEvent =
        serde_json::from_str(raw).map_err(|e| EventError::Decode { source: e })?;

    let outcome = rewriter.rewrite(event.request);

    serde_json::to_string(&outcome).map_err(|e| EventError::Encode { source: e })
}
