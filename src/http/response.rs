//! HTTP response building module
//!
//! Provides builders for the responses the stub can produce, decoupled from lookup logic.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Response, StatusCode};

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Build 200 JSON response with unconditional CORS allowance
pub fn build_json_response(body: Bytes) -> Response<Full<Bytes>> {
    let content_length = body.len();

    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", JSON_CONTENT_TYPE)
        .header("Access-Control-Allow-Origin", "*")
        .header("Content-Length", content_length)
        .body(Full::new(body.clone()))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(body))
        })
}

/// Build 501 Not Implemented response for anything but GET
pub fn build_501_response(method: &Method) -> Response<Full<Bytes>> {
    let message = format!("501 Unsupported method ('{method}')");

    Response::builder()
        .status(StatusCode::NOT_IMPLEMENTED)
        .header("Content-Type", "text/plain")
        .header("Allow", "GET")
        .body(Full::new(Bytes::from(message.clone())))
        .unwrap_or_else(|e| {
            log_build_error("501", &e);
            Response::new(Full::new(Bytes::from(message)))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
