//! Category code constants
//!
//! Codes are opaque integers to the server; no range or meaning is checked.

use serde::Serialize;
use std::fmt;

/// Identifier of a content classification bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CategoryCode(pub i32);

impl fmt::Display for CategoryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub const SECURITY_RISKS: CategoryCode = CategoryCode(32);
pub const CIPA: CategoryCode = CategoryCode(34);
// Shares its value with SECURITY_RISKS and is not referenced by any route.
pub const VIOLENCE: CategoryCode = CategoryCode(32);
pub const SECURITY_THREATS: CategoryCode = CategoryCode(21);
pub const QUESTIONABLE_CONTENT: CategoryCode = CategoryCode(17);

/// Named codes in declaration order
pub const NAMED_CODES: [(&str, CategoryCode); 5] = [
    ("SECURITY_RISKS", SECURITY_RISKS),
    ("CIPA", CIPA),
    ("VIOLENCE", VIOLENCE),
    ("SECURITY_THREATS", SECURITY_THREATS),
    ("QUESTIONABLE_CONTENT", QUESTIONABLE_CONTENT),
];
