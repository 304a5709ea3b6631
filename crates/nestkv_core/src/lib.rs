//! # NestKV Core
//!
//! Hierarchical namespaces and typed storage over a transactional,
//! ordered key-value engine.
//!
//! This crate provides:
//! - [`Store`] - a handle pairing one engine with one [`Options`]
//! - [`Namespace`] - a prefix-scoped view of the key space, with raw
//!   and typed CRUD plus prefix iteration
//! - Nesting: [`Namespace::child`] derives ever-deeper namespaces by
//!   extending the key prefix with the configured separator
//!
//! Namespaces never leak into each other: every physical key written
//! under a namespace starts with that namespace's exact prefix, and
//! iteration surfaces only keys under the prefix, with the prefix
//! stripped.
//!
//! ## Example
//!
//! ```
//! use nestkv_core::{Options, Store};
//! use nestkv_engine::MemoryEngine;
//! use std::sync::Arc;
//!
//! let store = Store::open(Arc::new(MemoryEngine::new()), Options::default());
//!
//! let users = store.namespace(b"users");
//! users.set(b"alice", b"payload").unwrap();
//!
//! let settings = users.child(b"settings");
//! settings.set_object(b"alice", &("dark_mode", true)).unwrap();
//!
//! assert!(users.has(b"alice"));
//! let (key, on): (String, bool) = settings.get_object(b"alice").unwrap();
//! assert!(on);
//! # let _ = key;
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod namespace;
mod store;

pub use config::Options;
pub use error::{StoreError, StoreResult};
pub use namespace::Namespace;
pub use store::Store;

pub use nestkv_codec::{CborCodec, Codec};
pub use nestkv_engine::KvEngine;
