use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Canonical request value passed through the rewrite pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerRequest {
    /// Slash-delimited request path (mutable by the pipeline)
    pub uri: String,

    /// Host-supplied attributes this crate does not interpret (method,
    /// headers, cookies). Carried through untouched so the platform gets
    /// the same request value back.
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl ViewerRequest {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            rest: Map::new(),
        }
    }
}
