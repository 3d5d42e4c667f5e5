//! Request router
//!
//! Exact-string lookup of a request target with an explicit fallback.
//! Every payload is rendered to JSON once at construction so the request
//! path only hands out shared bytes.

use hyper::body::Bytes;
use std::collections::HashMap;

use crate::catalog::{CategoryResponse, RouteTable};
use crate::http::to_spaced_json;
use crate::logger;

/// A payload together with its encoded JSON body
#[derive(Debug, Clone)]
pub struct PreparedResponse {
    pub payload: CategoryResponse,
    pub body: Bytes,
}

impl PreparedResponse {
    fn render(payload: CategoryResponse) -> serde_json::Result<Self> {
        let body = Bytes::from(to_spaced_json(&payload)?);
        Ok(Self { payload, body })
    }

    /// Body as text, for log lines
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Maps request targets to category payloads; read-only after construction
#[derive(Debug)]
pub struct CategoryRouter {
    routes: HashMap<String, PreparedResponse>,
    fallback: PreparedResponse,
}

impl CategoryRouter {
    pub fn new(table: RouteTable, fallback: CategoryResponse) -> serde_json::Result<Self> {
        let routes = table
            .into_iter()
            .map(|(path, payload)| PreparedResponse::render(payload).map(|p| (path, p)))
            .collect::<serde_json::Result<HashMap<_, _>>>()?;

        Ok(Self {
            routes,
            fallback: PreparedResponse::render(fallback)?,
        })
    }

    /// Resolve `path` without side effects
    ///
    /// The path is compared as-is: no case folding, trailing-slash
    /// stripping, percent-decoding or query removal.
    pub fn lookup(&self, path: &str) -> &PreparedResponse {
        self.routes.get(path).unwrap_or(&self.fallback)
    }

    /// Resolve `path` and record the decision
    pub fn handle(&self, path: &str) -> &PreparedResponse {
        let chosen = self.lookup(path);
        logger::log_decision(path, &chosen.body_text());
        chosen
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Routes sorted by path, for the startup banner
    pub fn routes(&self) -> Vec<(&str, &PreparedResponse)> {
        let mut routes: Vec<_> = self
            .routes
            .iter()
            .map(|(path, prepared)| (path.as_str(), prepared))
            .collect();
        routes.sort_unstable_by_key(|(path, _)| *path);
        routes
    }
}
