//! Context management for chain execution.
//!
//! This module provides:
//! - A mutable key/value carrier shared by every stage of a chain
//! - Deferred producers, invoked only when their key is read

mod chain;

pub use chain::{ChainContext, Producer};
