//! Domain logic for history events.

pub mod normalizer;
