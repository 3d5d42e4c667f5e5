//! Request handler module
//!
//! Adapts HTTP requests to category lookups.

pub mod router;

// Re-export main entry point
pub use router::handle_request;
