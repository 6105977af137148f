use serde::Serialize;

use crate::ctx::{RedirectResponse, ViewerRequest};

/// Outcome of one trigger invocation: exactly one of a forwarded request
/// or a terminal redirect.
///
/// Serializes untagged, so the host sees either the request value or the
/// response value, never a wrapper.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RewriteOutcome {
    /// Forward the (possibly rewritten) request to the next processing stage
    Forward(ViewerRequest),

    /// Stop processing and send this redirect straight back to the client
    Respond(RedirectResponse),
}

impl RewriteOutcome {
    pub fn as_forward(&self) -> Option<&ViewerRequest> {
        match self {
            RewriteOutcome::Forward(request) => Some(request),
            RewriteOutcome::Respond(_) => None,
        }
    }

    pub fn as_respond(&self) -> Option<&RedirectResponse> {
        match self {
            RewriteOutcome::Forward(_) => None,
            RewriteOutcome::Respond(response) => Some(response),
        }
    }
}
