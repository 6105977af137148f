use http::StatusCode;
use serde::{Deserialize, Serialize};

/// Terminal redirect answered straight to the client, in the wire shape
/// the viewer-request host expects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedirectResponse {
    pub status_code: u16,
    pub status_description: String,
    pub headers: RedirectHeaders,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedirectHeaders {
    pub location: HeaderEntry,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderEntry {
    pub value: String,
}

impl RedirectResponse {
    pub fn moved_permanently(location: impl Into<String>) -> Self {
        Self {
            status_code: StatusCode::MOVED_PERMANENTLY.as_u16(),
            status_description: StatusCode::MOVED_PERMANENTLY
                .canonical_reason()
                .unwrap_or("Moved Permanently")
                .to_string(),
            headers: RedirectHeaders {
                location: HeaderEntry {
                    value: location.into(),
                },
            },
        }
    }

    /// Target the client is told to re-request
    pub fn location(&self) -> &str {
        &self.headers.location.value
    }
}
