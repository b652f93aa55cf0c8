//! Interception decision rule
//!
//! One decision point, two terminal outcomes: an exact, case-sensitive
//! comparison of the request `uri` against a sentinel path. On match the
//! request lifecycle ends at the edge with a generated 404; otherwise the
//! original request is forwarded unchanged. No trimming, normalization,
//! or prefix matching is performed, so `/Robots.txt`, `/robots.txt/` and
//! a query-bearing `uri` all fall through.

use super::event::{ViewerEvent, ViewerRequest};
use super::response::GeneratedResponse;
use crate::config::InterceptConfig;

/// Result of running the rule against one event
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Continue normal processing with the original, unmodified request
    Forward(ViewerRequest),
    /// Terminate at the edge with a synthetic response
    Intercept(GeneratedResponse),
}

/// Static configuration for the single interception rule.
///
/// Defaults reproduce the well-known case: a plain-text 404 for
/// `/robots.txt`. Kept as a struct so additional sentinel paths can be
/// added later without changing the decision logic's shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterceptRule {
    pub sentinel_path: String,
    pub not_found_content_type: String,
}

impl Default for InterceptRule {
    fn default() -> Self {
        Self {
            sentinel_path: "/robots.txt".to_string(),
            not_found_content_type: "text/plain".to_string(),
        }
    }
}

impl From<&InterceptConfig> for InterceptRule {
    fn from(cfg: &InterceptConfig) -> Self {
        Self {
            sentinel_path: cfg.sentinel_path.clone(),
            not_found_content_type: cfg.not_found_content_type.clone(),
        }
    }
}

impl InterceptRule {
    /// Apply the rule to one event.
    ///
    /// Pure and total: a deterministic function of `request.uri` alone,
    /// with no side effects and no state across invocations.
    pub fn apply(&self, event: ViewerEvent) -> Outcome {
        if event.request.uri == self.sentinel_path {
            Outcome::Intercept(GeneratedResponse::not_found(&self.not_found_content_type))
        } else {
            Outcome::Forward(event.request)
        }
    }
}

/// Apply the default rule (404 for `/robots.txt`)
pub fn handle(event: ViewerEvent) -> Outcome {
    InterceptRule::default().apply(event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn event(uri: &str) -> ViewerEvent {
        ViewerEvent::new(ViewerRequest::new(uri))
    }

    #[test]
    fn test_sentinel_is_intercepted() {
        match handle(event("/robots.txt")) {
            Outcome::Intercept(resp) => {
                assert_eq!(resp.status_code, 404);
                assert_eq!(resp.status_description, "Not Found");
                assert_eq!(resp.headers.len(), 1);
                assert_eq!(resp.headers["content-type"].value, "text/plain");
            }
            Outcome::Forward(req) => panic!("expected interception, got forward of {}", req.uri),
        }
    }

    #[test]
    fn test_intercept_wire_shape() {
        let Outcome::Intercept(resp) = handle(event("/robots.txt")) else {
            panic!("expected interception");
        };
        assert_eq!(
            serde_json::to_value(&resp).unwrap(),
            json!({
                "statusCode": 404,
                "statusDescription": "Not Found",
                "headers": { "content-type": { "value": "text/plain" } }
            })
        );
    }

    #[test]
    fn test_other_paths_forward_unchanged() {
        let request: ViewerRequest = serde_json::from_value(json!({
            "uri": "/index.html",
            "method": "GET",
            "headers": { "host": { "value": "example.com" } }
        }))
        .unwrap();
        let original = request.clone();

        match handle(ViewerEvent::new(request)) {
            Outcome::Forward(forwarded) => assert_eq!(forwarded, original),
            Outcome::Intercept(_) => panic!("expected forward"),
        }
    }

    #[test]
    fn test_forward_minimal_request() {
        let Outcome::Forward(forwarded) = handle(event("/index.html")) else {
            panic!("expected forward");
        };
        assert_eq!(
            serde_json::to_value(&forwarded).unwrap(),
            json!({ "uri": "/index.html" })
        );
    }

    #[test]
    fn test_case_sensitive() {
        assert!(matches!(handle(event("/Robots.txt")), Outcome::Forward(_)));
        assert!(matches!(handle(event("/ROBOTS.TXT")), Outcome::Forward(_)));
    }

    #[test]
    fn test_exact_match_only() {
        assert!(matches!(handle(event("/robots.txt/")), Outcome::Forward(_)));
        assert!(matches!(
            handle(event("/robots.txt?x=1")),
            Outcome::Forward(_)
        ));
        assert!(matches!(
            handle(event("/sub/robots.txt")),
            Outcome::Forward(_)
        ));
        assert!(matches!(handle(event("robots.txt")), Outcome::Forward(_)));
        assert!(matches!(handle(event("")), Outcome::Forward(_)));
    }

    #[test]
    fn test_idempotent_and_side_effect_free() {
        let input = event("/robots.txt");
        let first = handle(input.clone());
        let second = handle(input.clone());
        assert_eq!(first, second);

        // Input is never mutated; forwarding yields it back bit-for-bit.
        let pass = event("/about");
        assert_eq!(handle(pass.clone()), Outcome::Forward(pass.request));
    }

    #[test]
    fn test_configured_sentinel() {
        let rule = InterceptRule {
            sentinel_path: "/sitemap.xml".to_string(),
            not_found_content_type: "application/xml".to_string(),
        };

        let Outcome::Intercept(resp) = rule.apply(event("/sitemap.xml")) else {
            panic!("expected interception");
        };
        assert_eq!(resp.headers["content-type"].value, "application/xml");

        // The default sentinel no longer matches under a custom rule.
        assert!(matches!(rule.apply(event("/robots.txt")), Outcome::Forward(_)));
    }
}
