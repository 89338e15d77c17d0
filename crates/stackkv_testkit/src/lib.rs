//! # StackKV Testkit
//!
//! Test utilities for StackKV.
//!
//! This crate provides:
//! - Fixtures for pre-populated stores
//! - Property-based test generators using proptest
//! - A layered reference model of nested transactions
//! - A script runner recording what an interpreter would print
//!
//! ## Usage
//!
//! ```rust
//! use stackkv_testkit::prelude::*;
//!
//! let mut script = Script::new(sample_store());
//! script.run(&Command::new(CommandKind::Counts).with_value("4"));
//! assert_eq!(script.printed(), vec!["2".to_string()]);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;
pub mod model;
pub mod script;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
    pub use crate::model::*;
    pub use crate::script::*;
    pub use stackkv_core::{Command, CommandKind, CoreError, Response, Store};
}

pub use fixtures::*;
pub use generators::*;
pub use model::*;
pub use script::*;
