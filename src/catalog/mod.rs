//! Category catalog
//!
//! Hardcoded category codes and the fixed route table served by the stub.

pub mod codes;
mod response;
mod table;

pub use response::CategoryResponse;
pub use table::RouteTable;

use codes::{CIPA, SECURITY_RISKS, SECURITY_THREATS};

/// Paths answered with the security-risk payload
pub const FLAGGED_PATHS: [&str; 3] = [
    "/categories/192.168.0.3",
    "/categories/192.168.0.191",
    "/categories/::1",
];

/// Build the route table the stub serves
pub fn standard_table() -> RouteTable {
    FLAGGED_PATHS.iter().fold(RouteTable::new(), |table, path| {
        table.with_route(
            *path,
            CategoryResponse::new([SECURITY_RISKS, SECURITY_THREATS, CIPA]),
        )
    })
}
