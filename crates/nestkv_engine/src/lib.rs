//! # NestKV Engine
//!
//! Key-value engine trait and implementations for NestKV.
//!
//! This crate defines the lowest-level storage abstraction for NestKV:
//! a transactional, ordered key-value engine. Engines are **opaque byte
//! stores** keyed by arbitrary byte strings - they do not interpret
//! keys or values, and in particular know nothing about namespace
//! prefixes or separators. The core crate owns all key layout.
//!
//! ## Design Principles
//!
//! - Engines expose read-only and read-write transactions
//! - Reads see a consistent snapshot for the life of the transaction
//! - Iteration is ordered lexicographically over key bytes and is
//!   driven by a prefix seek, never a full scan
//! - Engines must be `Send + Sync` for concurrent transaction issuance
//!
//! ## Available Engines
//!
//! - [`MemoryEngine`] - For testing and ephemeral storage
//!
//! ## Example
//!
//! ```rust
//! use nestkv_engine::{KvEngine, MemoryEngine};
//!
//! let engine = MemoryEngine::new();
//!
//! let mut txn = engine.begin_write().unwrap();
//! txn.set(b"greeting", b"hello").unwrap();
//! txn.commit().unwrap();
//!
//! let txn = engine.begin_read().unwrap();
//! assert_eq!(txn.get(b"greeting").unwrap(), Some(b"hello".to_vec()));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod engine;
mod error;
mod memory;

pub use engine::{KvEngine, ReadTxn, ScanIter, WriteTxn};
pub use error::{EngineError, EngineResult};
pub use memory::MemoryEngine;
