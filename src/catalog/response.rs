use serde::Serialize;

use super::codes::CategoryCode;

/// Payload returned for a lookup: category codes in table declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryResponse {
    pub categories: Vec<CategoryCode>,
}

impl CategoryResponse {
    pub fn new(categories: impl Into<Vec<CategoryCode>>) -> Self {
        Self {
            categories: categories.into(),
        }
    }

    /// Payload used when no route matches
    pub const fn empty() -> Self {
        Self {
            categories: Vec::new(),
        }
    }
}
