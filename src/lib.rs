//! # Chain Context
//!
//! A shared-state carrier for sequential chains of operations.
//!
//! Each operation in a chain can publish deferred (lazily computed) values
//! and later operations can read values published by earlier ones:
//!
//! - **Deferred evaluation**: registered producers run only when their key
//!   is fetched, so work is skipped for values nobody reads
//! - **Default-on-miss**: fetching an unregistered key yields an empty
//!   sequence, never an error
//! - **Last-write-wins**: re-registering a key silently replaces the
//!   previous producer
//!
//! The chain-execution engine that decides which operations run, and in
//! what order, lives outside this crate; it constructs one [`ChainContext`]
//! per run and hands the same instance to every stage by mutable reference.
//!
//! ## Quick Start
//!
//! ```rust
//! use chain_context::ChainContext;
//!
//! let mut ctx = ChainContext::new();
//! ctx.register("greetings", || vec!["hello".to_string()]);
//!
//! assert_eq!(ctx.fetch("greetings"), vec!["hello".to_string()]);
//! assert!(ctx.fetch("not-yet-published").is_empty());
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate
)]

pub mod context;

pub use context::{ChainContext, Producer};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::context::{ChainContext, Producer};
}
