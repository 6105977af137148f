use serde_json::{Value, json};

/// Minimal viewer-request event for a given uri, as the host would send it.
pub fn viewer_event(uri: &str) -> String {
    json!({ "request": { "uri": uri } }).to_string()
}

/// Viewer-request event carrying host attributes the trigger does not
/// interpret.
pub fn viewer_event_with_attributes(uri: &str) -> String {
    json!({
        "version": "1.0",
        "context": { "eventType": "viewer-request" },
        "request": {
            "uri": uri,
            "method": "GET",
            "querystring": {},
            "headers": { "host": { "value": "example.com" } },
        },
    })
    .to_string()
}

/// Parse a trigger output back into a JSON value for comparison.
pub fn output_json(raw: &str) -> Value {
    serde_json::from_str(raw).expect("trigger output is valid JSON")
}
