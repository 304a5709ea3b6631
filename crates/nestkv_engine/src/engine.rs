//! Engine and transaction trait definitions.

use crate::error::EngineResult;

/// Iterator over `(key, value)` pairs produced by a prefix scan.
///
/// Entries arrive in lexicographic order of their full key bytes.
pub type ScanIter<'a> = Box<dyn Iterator<Item = EngineResult<(Vec<u8>, Vec<u8>)>> + 'a>;

/// A transactional, ordered key-value engine for NestKV.
///
/// Engines are **opaque byte stores**: keys and values are arbitrary
/// byte strings, and the engine assigns no meaning to either. All key
/// layout (namespace prefixes, separators) belongs to the layer above.
///
/// # Invariants
///
/// - A read transaction observes a consistent snapshot: writes
///   committed after [`begin_read`](KvEngine::begin_read) returns are
///   not visible through it
/// - Keys iterate in lexicographic order of their bytes
/// - [`ReadTxn::scan_prefix`] seeks to the prefix; it never degrades
///   to a full scan
/// - Engines must be `Send + Sync`; transactions may be begun
///   concurrently from multiple threads
///
/// # Implementors
///
/// - [`crate::MemoryEngine`] - In-memory, for testing and ephemeral use
pub trait KvEngine: Send + Sync {
    /// Begins a read-only transaction.
    ///
    /// The returned transaction is a point-in-time snapshot of the
    /// key space. Dropping it releases the snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine cannot open a transaction, for
    /// example because it is closed.
    fn begin_read(&self) -> EngineResult<Box<dyn ReadTxn + '_>>;

    /// Begins a read-write transaction.
    ///
    /// Mutations are not visible to other transactions until
    /// [`WriteTxn::commit`] succeeds. Dropping the transaction without
    /// committing rolls back all of its mutations.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine cannot open a transaction.
    fn begin_write(&self) -> EngineResult<Box<dyn WriteTxn + '_>>;
}

/// A read-only transaction over a [`KvEngine`].
pub trait ReadTxn {
    /// Reads the value stored at `key`.
    ///
    /// Returns `Ok(None)` if the key is absent; absence is not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns an error only on genuine engine failure (I/O,
    /// corruption).
    fn get(&self, key: &[u8]) -> EngineResult<Option<Vec<u8>>>;

    /// Iterates over every entry whose key starts with `prefix`.
    ///
    /// Entries are yielded in lexicographic key order. Keys are the
    /// full physical keys; the caller strips any prefix it cares
    /// about.
    fn scan_prefix(&self, prefix: &[u8]) -> ScanIter<'_>;
}

/// A read-write transaction over a [`KvEngine`].
pub trait WriteTxn {
    /// Stages `value` to be written at `key`.
    ///
    /// # Errors
    ///
    /// Returns an error on engine failure.
    fn set(&mut self, key: &[u8], value: &[u8]) -> EngineResult<()>;

    /// Stages the removal of `key`.
    ///
    /// Deleting an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error on engine failure.
    fn delete(&mut self, key: &[u8]) -> EngineResult<()>;

    /// Atomically applies all staged mutations.
    ///
    /// After this returns successfully, the mutations are visible to
    /// transactions begun afterwards, with whatever durability the
    /// engine provides.
    ///
    /// # Errors
    ///
    /// Returns an error if the commit fails; in that case none of the
    /// staged mutations are applied.
    fn commit(self: Box<Self>) -> EngineResult<()>;
}
