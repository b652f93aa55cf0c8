//! Request handling module
//!
//! The harness side of the interceptor: translates an inbound hyper
//! request into the edge event shape, runs the rule, and realizes the
//! outcome as an HTTP response. An intercepted request gets the
//! generated 404; a forwarded request is answered with a JSON echo of
//! the descriptor that would be handed to the origin.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::HeaderMap;
use hyper::{Method, Request, Response, Uri};

use crate::config::AppState;
use crate::http;
use crate::intercept::{Outcome, ViewerEvent, ViewerRequest};
use crate::logger::{self, AccessLogEntry};

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();
    let is_head = method == Method::HEAD;

    // Only GET/HEAD reach the rule; the edge platform rejects the rest
    // before any function runs.
    if method != Method::GET && !is_head {
        logger::log_warning(&format!("Method not allowed: {method}"));
        return Ok(http::build_405_response());
    }

    let event = event_from_parts(&method, &uri, req.headers());
    let outcome = state.rule.apply(event);

    let (response, outcome_label) = match outcome {
        Outcome::Intercept(generated) => (http::build_generated_response(&generated), "intercept"),
        Outcome::Forward(forwarded) => (echo_forwarded(&forwarded, is_head), "forward"),
    };

    if state.config.logging.access_log {
        let mut entry = AccessLogEntry::new(
            peer_addr.ip().to_string(),
            method.to_string(),
            uri.path().to_string(),
        );
        entry.query = uri.query().map(ToString::to_string);
        entry.status = response.status().as_u16();
        entry.body_bytes = response_body_len(&response);
        entry.user_agent = header_str(req.headers(), "user-agent");
        entry.outcome = outcome_label;
        entry.request_time_us =
            u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Build the edge event for an inbound request.
///
/// `uri` carries the path component only; the query string and headers
/// are attached as opaque event fields in the `{ "value": ... }`
/// convention, matching a host that pre-strips the query from `uri`.
pub fn event_from_parts(method: &Method, uri: &Uri, headers: &HeaderMap) -> ViewerEvent {
    let mut request = ViewerRequest::new(uri.path());
    request
        .extra
        .insert("method".to_string(), method.as_str().into());

    let mut querystring = serde_json::Map::new();
    if let Some(query) = uri.query() {
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            querystring.insert(key.to_string(), serde_json::json!({ "value": value }));
        }
    }
    if !querystring.is_empty() {
        request
            .extra
            .insert("querystring".to_string(), querystring.into());
    }

    let mut header_map = serde_json::Map::new();
    for (name, value) in headers {
        if let Ok(value) = value.to_str() {
            header_map.insert(
                name.as_str().to_lowercase(),
                serde_json::json!({ "value": value }),
            );
        }
    }
    if !header_map.is_empty() {
        request.extra.insert("headers".to_string(), header_map.into());
    }

    ViewerEvent::new(request)
}

/// Serialize the forwarded request descriptor as the response body
fn echo_forwarded(forwarded: &ViewerRequest, is_head: bool) -> Response<Full<Bytes>> {
    let body = serde_json::to_string_pretty(forwarded).unwrap_or_else(|e| {
        logger::log_error(&format!("Failed to serialize forwarded request: {e}"));
        "{}".to_string()
    });
    http::build_json_response(body, is_head)
}

fn response_body_len(response: &Response<Full<Bytes>>) -> usize {
    response
        .headers()
        .get("content-length")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .unwrap_or(0)
}

fn header_str(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}
