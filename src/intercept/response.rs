//! Generated response types
//!
//! A synthetic terminal response in the edge runtime's wire convention:
//! camelCase status fields and a header map keyed by lowercase name, each
//! entry wrapping its string in a `{ "value": ... }` object.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Single header value wrapper required by the edge response format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderValue {
    pub value: String,
}

/// Synthetic response constructed at the edge, never derived from an
/// origin response. Serializes to the exact shape the host expects:
/// `{"statusCode":404,"statusDescription":"Not Found","headers":{...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedResponse {
    pub status_code: u16,
    pub status_description: String,
    pub headers: BTreeMap<String, HeaderValue>,
}

impl GeneratedResponse {
    /// Build a bodyless 404 with the given content type as its only header
    pub fn not_found(content_type: &str) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert(
            "content-type".to_string(),
            HeaderValue {
                value: content_type.to_string(),
            },
        );
        Self {
            status_code: 404,
            status_description: "Not Found".to_string(),
            headers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_not_found_shape() {
        let resp = GeneratedResponse::not_found("text/plain");
        assert_eq!(resp.status_code, 404);
        assert_eq!(resp.status_description, "Not Found");
        assert_eq!(resp.headers.len(), 1);
        assert_eq!(resp.headers["content-type"].value, "text/plain");
    }

    #[test]
    fn test_wire_format() {
        let resp = GeneratedResponse::not_found("text/plain");
        assert_eq!(
            serde_json::to_value(&resp).unwrap(),
            json!({
                "statusCode": 404,
                "statusDescription": "Not Found",
                "headers": { "content-type": { "value": "text/plain" } }
            })
        );
    }
}
