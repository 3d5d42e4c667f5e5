//! Routing module
//!
//! Resolves request targets against the category route table.

mod dispatch;

pub use dispatch::CategoryRouter;
