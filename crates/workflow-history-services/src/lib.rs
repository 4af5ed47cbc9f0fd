//! Workflow History Services: retrieval of paginated workflow histories.
//!
//! Responsible for draining paged history endpoints, bounded previews,
//! page-at-a-time cursors, event normalization and workflow counts.

pub mod application;
pub mod domain;
