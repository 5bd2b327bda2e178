//! Core types shared across cmdseq crates
//!
//! This crate provides the foundational types used by the error and
//! logging facilities of `cmdseq-core`:
//!
//! - **Correlation types**: RequestId, RequestContext
//! - **Schema constants**: Canonical field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::{RequestContext, RequestId};
