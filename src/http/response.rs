//! HTTP response building module
//!
//! Turns harness outcomes into concrete hyper responses, decoupled from
//! the decision logic.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use crate::intercept::GeneratedResponse;

/// Realize a synthetic edge response as a hyper response.
///
/// Status and headers are copied verbatim; the body is empty, matching
/// the edge convention of a bodyless generated response. The status
/// description is carried by the wire format, not by HTTP/1.1 (hyper
/// emits the canonical reason phrase).
pub fn build_generated_response(generated: &GeneratedResponse) -> Response<Full<Bytes>> {
    let mut builder = Response::builder().status(generated.status_code);
    for (name, header) in &generated.headers {
        builder = builder.header(name.as_str(), header.value.as_str());
    }

    builder.body(Full::new(Bytes::new())).unwrap_or_else(|e| {
        log_build_error("generated", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(405)
        .header("Content-Type", "text/plain")
        .header("Allow", "GET, HEAD")
        .body(Full::new(Bytes::from("405 Method Not Allowed")))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::from("405 Method Not Allowed")))
        })
}

/// Build 200 JSON response (forwarded-request echo)
pub fn build_json_response(content: String, is_head: bool) -> Response<Full<Bytes>> {
    let content_length = content.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(content)
    };

    Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Content-Length", content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("JSON", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_response_realization() {
        let generated = GeneratedResponse::not_found("text/plain");
        let resp = build_generated_response(&generated);
        assert_eq!(resp.status(), 404);
        assert_eq!(resp.headers()["content-type"], "text/plain");
        assert_eq!(resp.headers().len(), 1);
    }

    #[test]
    fn test_405_response() {
        let resp = build_405_response();
        assert_eq!(resp.status(), 405);
        assert_eq!(resp.headers()["Allow"], "GET, HEAD");
    }

    #[test]
    fn test_json_response_head_strips_body() {
        let resp = build_json_response("{}".to_string(), true);
        assert_eq!(resp.status(), 200);
        // Content-Length reflects the full body even for HEAD
        assert_eq!(resp.headers()["Content-Length"], "2");
    }
}
