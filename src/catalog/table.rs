//! Route table
//!
//! Exact request-target to payload mapping. Keys include the leading slash
//! and any literal host/IP segment; there is no prefix or wildcard matching.

use std::collections::HashMap;

use super::response::CategoryResponse;

/// Immutable path → payload mapping, assembled with [`RouteTable::with_route`]
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: HashMap<String, CategoryResponse>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a route, replacing any earlier entry for the same path
    #[must_use]
    pub fn with_route(mut self, path: impl Into<String>, response: CategoryResponse) -> Self {
        self.routes.insert(path.into(), response);
        self
    }
}

impl IntoIterator for RouteTable {
    type Item = (String, CategoryResponse);
    type IntoIter = std::collections::hash_map::IntoIter<String, CategoryResponse>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::codes::CategoryCode;
    use std::collections::HashMap;

    fn collect(table: RouteTable) -> HashMap<String, CategoryResponse> {
        table.into_iter().collect()
    }

    #[test]
    fn test_routes_are_kept_verbatim() {
        let routes = collect(
            RouteTable::new()
                .with_route("/a", CategoryResponse::new([CategoryCode(1)]))
                .with_route("/a/", CategoryResponse::new([CategoryCode(2)])),
        );
        assert_eq!(routes.len(), 2);
        assert_eq!(routes["/a"].categories, vec![CategoryCode(1)]);
        assert_eq!(routes["/a/"].categories, vec![CategoryCode(2)]);
    }

    #[test]
    fn test_later_route_replaces_earlier() {
        let routes = collect(
            RouteTable::new()
                .with_route("/a", CategoryResponse::new([CategoryCode(1)]))
                .with_route("/a", CategoryResponse::new([CategoryCode(2)])),
        );
        assert_eq!(routes.len(), 1);
        assert_eq!(routes["/a"].categories, vec![CategoryCode(2)]);
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(RouteTable::new().into_iter().count(), 0);
    }
}
