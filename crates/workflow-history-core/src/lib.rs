//! Workflow History Core: shared retrieval abstractions.
//!
//! This crate defines the data model, the error type and the collaborator
//! traits that the retrieval services depend on. It contains no transport
//! code.

pub mod error;
pub mod event;
pub mod normalizer;
pub mod observer;
pub mod page;
pub mod request;
pub mod route;
pub mod serde_util;
pub mod sort;
pub mod token;
pub mod transport;
