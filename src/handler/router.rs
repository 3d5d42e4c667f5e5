//! Request dispatch module
//!
//! Entry point for HTTP request processing: method validation, request-target
//! extraction, category lookup and response building.

use crate::config::AppState;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response, Version};
use std::net::SocketAddr;
use std::time::Instant;

/// Main entry point for HTTP request handling
///
/// Never fails: every GET is answered 200 with either the matched payload or
/// the default one. Other methods get 501.
pub fn handle_request<B>(
    req: &Request<B>,
    state: &AppState,
    remote_addr: SocketAddr,
) -> Response<Full<Bytes>> {
    let started = Instant::now();
    let target = request_target(req);

    let response = if *req.method() == Method::GET {
        let chosen = state.router.handle(&target);
        http::build_json_response(chosen.body.clone())
    } else {
        logger::log_warning(&format!("Unsupported method: {}", req.method()));
        http::build_501_response(req.method())
    };

    if state.config.logging.access_log {
        let entry = access_entry(req, &response, target, remote_addr, started);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    response
}

/// Request target as received: path plus query, no normalization
fn request_target<B>(req: &Request<B>) -> String {
    req.uri().to_string()
}

fn access_entry<B>(
    req: &Request<B>,
    response: &Response<Full<Bytes>>,
    target: String,
    remote_addr: SocketAddr,
    started: Instant,
) -> AccessLogEntry {
    let header = |name: &str| {
        req.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string)
    };

    let mut entry = AccessLogEntry::new(
        remote_addr.ip().to_string(),
        req.method().to_string(),
        target,
    );
    entry.http_version = match req.version() {
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        _ => "1.1",
    }
    .to_string();
    entry.status = response.status().as_u16();
    entry.body_bytes = response
        .headers()
        .get("content-length")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);
    entry.referer = header("referer");
    entry.user_agent = header("user-agent");
    entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
    entry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{self, CategoryResponse};
    use crate::config::Config;
    use crate::routing::CategoryRouter;
    use http_body_util::BodyExt;
    use hyper::StatusCode;

    fn test_state(access_log: bool) -> AppState {
        let mut config = Config::default();
        config.logging.access_log = access_log;
        let router =
            CategoryRouter::new(catalog::standard_table(), CategoryResponse::empty()).unwrap();
        AppState::new(config, router)
    }

    fn get(uri: &str) -> Request<()> {
        Request::builder().method(Method::GET).uri(uri).body(()).unwrap()
    }

    fn peer() -> SocketAddr {
        "127.0.0.1:40000".parse().unwrap()
    }

    async fn body_of(resp: Response<Full<Bytes>>) -> Bytes {
        resp.into_body().collect().await.unwrap().to_bytes()
    }

    #[tokio::test]
    async fn test_matched_path() {
        let state = test_state(false);
        let resp = handle_request(&get("/categories/192.168.0.191"), &state, peer());
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()["content-type"], "application/json");
        assert_eq!(resp.headers()["access-control-allow-origin"], "*");
        assert_eq!(&body_of(resp).await[..], br#"{"categories": [32, 21, 34]}"#);
    }

    #[tokio::test]
    async fn test_unmatched_path_is_still_200() {
        let state = test_state(true);
        let resp = handle_request(&get("/favicon.ico"), &state, peer());
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()["access-control-allow-origin"], "*");
        assert_eq!(&body_of(resp).await[..], br#"{"categories": []}"#);
    }

    #[tokio::test]
    async fn test_query_string_is_part_of_the_target() {
        let state = test_state(false);
        let resp = handle_request(&get("/categories/192.168.0.3?x=1"), &state, peer());
        assert_eq!(&body_of(resp).await[..], br#"{"categories": []}"#);
    }

    #[test]
    fn test_ipv6_literal_path() {
        let req = get("/categories/::1");
        assert_eq!(request_target(&req), "/categories/::1");
        let state = test_state(false);
        let resp = handle_request(&req, &state, peer());
        assert_eq!(resp.headers()["content-length"], "28");
    }

    #[test]
    fn test_fragment_is_dropped_by_uri_parsing() {
        let req = get("/categories/::1#frag");
        assert_eq!(request_target(&req), "/categories/::1");
    }

    #[test]
    fn test_other_methods_not_implemented() {
        let state = test_state(false);
        for method in [Method::POST, Method::PUT, Method::DELETE, Method::HEAD] {
            let req = Request::builder()
                .method(method)
                .uri("/categories/::1")
                .body(())
                .unwrap();
            let resp = handle_request(&req, &state, peer());
            assert_eq!(resp.status(), StatusCode::NOT_IMPLEMENTED);
        }
    }

    #[test]
    fn test_access_entry_fields() {
        let req = Request::builder()
            .uri("/categories/::1")
            .header("user-agent", "resolver/1.0")
            .body(())
            .unwrap();
        let resp = http::build_json_response(Bytes::from_static(b"{}"));
        let entry = access_entry(
            &req,
            &resp,
            request_target(&req),
            peer(),
            Instant::now(),
        );
        assert_eq!(entry.remote_addr, "127.0.0.1");
        assert_eq!(entry.status, 200);
        assert_eq!(entry.body_bytes, 2);
        assert_eq!(entry.user_agent.as_deref(), Some("resolver/1.0"));
        assert!(entry.referer.is_none());
    }
}
