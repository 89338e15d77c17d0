//! # StackKV Core
//!
//! Transactional in-memory key/value engine for StackKV.
//!
//! This crate provides:
//! - A live string-to-string mapping with point operations (get/set/unset)
//! - Value-indexed queries (count-by-value, find-by-value)
//! - Nested transactions backed by a stack of full snapshots
//! - A single dispatch entry point mapping a command kind to an operation
//!
//! The engine performs no I/O and holds no global state. The command-line
//! interpreter lives in `stackkv_cli`.
//!
//! ## Example
//!
//! ```rust
//! use stackkv_core::{CommandKind, Response, Store};
//!
//! let mut store = Store::new();
//! store.set("A", "5");
//! store.begin_transaction();
//! store.set("A", "6");
//! store.rollback_transaction().unwrap();
//! assert_eq!(store.get("A").unwrap(), "5");
//!
//! let counted = store.dispatch(CommandKind::Counts, None, Some("5")).unwrap();
//! assert_eq!(counted, Response::Count(1));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod command;
mod error;
mod response;
mod store;
mod transaction;

pub use command::{Arity, Command, CommandKind};
pub use error::{CoreError, CoreResult};
pub use response::Response;
pub use store::{Mapping, Store};
pub use transaction::TransactionStack;

/// StackKV core version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
