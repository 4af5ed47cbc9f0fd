//! Route modules organized by resource.

pub mod counts;
pub mod events;
pub mod health;
