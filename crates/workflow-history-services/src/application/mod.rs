//! Application-level retrieval operations.

pub mod events_service;
pub mod page_cursor;
pub mod pagination;
pub mod workflow_counts;
