//! HTTP protocol layer module
//!
//! Response builders and JSON body encoding, decoupled from the lookup logic.

pub mod json;
pub mod response;

// Re-export commonly used items
pub use json::to_spaced_json;
pub use response::{build_501_response, build_json_response};
