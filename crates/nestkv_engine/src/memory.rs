//! In-memory engine for testing.

use crate::engine::{KvEngine, ReadTxn, ScanIter, WriteTxn};
use crate::error::EngineResult;
use parking_lot::RwLock;
use std::collections::BTreeMap;

/// An in-memory key-value engine.
///
/// Keys are held in a `BTreeMap`, so iteration order is the
/// lexicographic byte order the [`KvEngine`] contract requires. The
/// engine is suitable for:
/// - Unit tests
/// - Integration tests
/// - Ephemeral stores that don't need persistence
///
/// # Transaction Semantics
///
/// Read transactions take a point-in-time snapshot of the map, so
/// they are isolated from writes committed after they begin. Write
/// transactions stage mutations privately and apply them atomically
/// on commit. There is no write-write conflict detection; concurrent
/// commits to the same key resolve last-writer-wins.
///
/// # Thread Safety
///
/// The engine is thread-safe and can be shared across threads behind
/// an `Arc`.
///
/// # Example
///
/// ```rust
/// use nestkv_engine::{KvEngine, MemoryEngine};
///
/// let engine = MemoryEngine::new();
/// let mut txn = engine.begin_write().unwrap();
/// txn.set(b"k", b"v").unwrap();
/// txn.commit().unwrap();
/// assert_eq!(engine.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MemoryEngine {
    map: RwLock<BTreeMap<Vec<u8>, Vec<u8>>>,
}

impl MemoryEngine {
    /// Creates a new empty in-memory engine.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine pre-populated with `entries`.
    ///
    /// Useful for seeding test fixtures.
    #[must_use]
    pub fn with_entries(entries: impl IntoIterator<Item = (Vec<u8>, Vec<u8>)>) -> Self {
        Self {
            map: RwLock::new(entries.into_iter().collect()),
        }
    }

    /// Returns the number of entries currently committed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.read().len()
    }

    /// Returns `true` if no entries are committed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.read().is_empty()
    }

    /// Removes all committed entries.
    pub fn clear(&self) {
        self.map.write().clear();
    }
}

impl KvEngine for MemoryEngine {
    fn begin_read(&self) -> EngineResult<Box<dyn ReadTxn + '_>> {
        // Snapshot by clone keeps readers isolated from later commits.
        Ok(Box::new(MemoryReadTxn {
            snapshot: self.map.read().clone(),
        }))
    }

    fn begin_write(&self) -> EngineResult<Box<dyn WriteTxn + '_>> {
        Ok(Box::new(MemoryWriteTxn {
            engine: self,
            staged: BTreeMap::new(),
        }))
    }
}

struct MemoryReadTxn {
    snapshot: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl ReadTxn for MemoryReadTxn {
    fn get(&self, key: &[u8]) -> EngineResult<Option<Vec<u8>>> {
        Ok(self.snapshot.get(key).cloned())
    }

    fn scan_prefix(&self, prefix: &[u8]) -> ScanIter<'_> {
        let prefix = prefix.to_vec();
        let iter = self
            .snapshot
            .range(prefix.clone()..)
            .take_while(move |(key, _)| key.starts_with(&prefix))
            .map(|(key, value)| Ok((key.clone(), value.clone())));
        Box::new(iter)
    }
}

enum Pending {
    Put(Vec<u8>),
    Delete,
}

struct MemoryWriteTxn<'a> {
    engine: &'a MemoryEngine,
    staged: BTreeMap<Vec<u8>, Pending>,
}

impl WriteTxn for MemoryWriteTxn<'_> {
    fn set(&mut self, key: &[u8], value: &[u8]) -> EngineResult<()> {
        self.staged.insert(key.to_vec(), Pending::Put(value.to_vec()));
        Ok(())
    }

    fn delete(&mut self, key: &[u8]) -> EngineResult<()> {
        self.staged.insert(key.to_vec(), Pending::Delete);
        Ok(())
    }

    fn commit(self: Box<Self>) -> EngineResult<()> {
        let mut map = self.engine.map.write();
        for (key, op) in self.staged {
            match op {
                Pending::Put(value) => {
                    map.insert(key, value);
                }
                Pending::Delete => {
                    map.remove(&key);
                }
            }
        }
        Ok(())
    }
}
