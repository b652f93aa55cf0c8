//! Viewer request event types
//!
//! Mirrors the event shape an edge runtime hands to a viewer-request
//! function: an envelope with a `request` whose `uri` is the normalized
//! path (leading slash, query string already stripped). Only `uri` is
//! typed; every other field is opaque and must round-trip untouched.

use serde::{Deserialize, Serialize};

/// Inbound request descriptor.
///
/// `uri` is the only field this system consults. All remaining fields
/// (method, headers, query string, cookies) are carried as-is in `extra`
/// and forwarded unchanged when no interception occurs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerRequest {
    pub uri: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ViewerRequest {
    /// Create a request descriptor with only the `uri` field set
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            extra: serde_json::Map::new(),
        }
    }
}

/// Event envelope passed to the interceptor.
///
/// The host guarantees `request` is present; the envelope may carry other
/// fields (version, context, viewer) which are preserved but never read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerEvent {
    pub request: ViewerRequest,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ViewerEvent {
    /// Wrap a request descriptor in a bare event envelope
    pub fn new(request: ViewerRequest) -> Self {
        Self {
            request,
            extra: serde_json::Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_opaque_fields_round_trip() {
        let raw = json!({
            "request": {
                "uri": "/index.html",
                "method": "GET",
                "querystring": { "x": { "value": "1" } },
                "headers": { "host": { "value": "example.com" } }
            },
            "version": "1.0"
        });

        let event: ViewerEvent = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(event.request.uri, "/index.html");
        assert_eq!(serde_json::to_value(&event).unwrap(), raw);
    }

    #[test]
    fn test_minimal_event() {
        let event: ViewerEvent =
            serde_json::from_value(json!({ "request": { "uri": "/robots.txt" } })).unwrap();
        assert_eq!(event.request.uri, "/robots.txt");
        assert!(event.request.extra.is_empty());
        assert!(event.extra.is_empty());
    }

    #[test]
    fn test_missing_uri_is_rejected() {
        // The typed boundary enforces the host precondition statically;
        // malformed input fails at deserialization, not inside the rule.
        let result = serde_json::from_value::<ViewerEvent>(json!({ "request": {} }));
        assert!(result.is_err());
    }
}
