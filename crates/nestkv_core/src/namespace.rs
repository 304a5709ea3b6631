//! Prefix-scoped namespaces: CRUD, typed access, and iteration.

use crate::error::{StoreError, StoreResult};
use crate::store::Shared;
use nestkv_codec::{CborCodec, Codec};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// A prefix-scoped view of the key space.
///
/// Every operation prepends the namespace's prefix to the caller's
/// key before touching the engine, and iteration strips the prefix
/// from surfaced keys. Writes under one namespace are invisible to
/// any namespace whose prefix is not an ancestor of it.
///
/// Namespaces are lightweight value objects: a prefix plus a shared
/// reference to the owning store's internals. Cloning is cheap, there
/// is nothing to close, and each operation opens exactly one engine
/// transaction (read-only for reads and iteration, read-write for
/// mutations) that is committed or rolled back before the call
/// returns.
///
/// # Example
///
/// ```
/// use nestkv_core::{Options, Store};
/// use nestkv_engine::MemoryEngine;
/// use std::sync::Arc;
///
/// let store = Store::open(Arc::new(MemoryEngine::new()), Options::default());
/// let accounts = store.namespace(b"accounts");
/// let frozen = accounts.child(b"frozen");
///
/// accounts.set(b"1001", b"active").unwrap();
/// frozen.set(b"1002", b"fraud hold").unwrap();
///
/// // Iteration over `accounts` sees its own entry and, because
/// // `frozen`'s prefix extends `accounts`', the descendant entry too;
/// // sibling namespaces would see neither.
/// assert_eq!(accounts.get(b"1001").unwrap(), b"active");
/// assert!(frozen.get(b"1001").is_err());
/// ```
pub struct Namespace<C: Codec = CborCodec> {
    prefix: Vec<u8>,
    shared: Arc<Shared<C>>,
}

impl<C: Codec> Clone for Namespace<C> {
    fn clone(&self) -> Self {
        Self {
            prefix: self.prefix.clone(),
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<C: Codec> Namespace<C> {
    pub(crate) fn new(prefix: Vec<u8>, shared: Arc<Shared<C>>) -> Self {
        Self { prefix, shared }
    }

    /// Returns the fully resolved prefix, ancestors and separators
    /// included.
    #[must_use]
    pub fn prefix(&self) -> &[u8] {
        &self.prefix
    }

    /// Derives a child namespace.
    ///
    /// The child's prefix is `self.prefix ++ separator ++ sub`. Pure
    /// prefix computation; no I/O, never fails.
    #[must_use]
    pub fn child(&self, sub: &[u8]) -> Self {
        let separator = &self.shared.options.separator;
        let mut prefix = Vec::with_capacity(self.prefix.len() + separator.len() + sub.len());
        prefix.extend_from_slice(&self.prefix);
        prefix.extend_from_slice(separator);
        prefix.extend_from_slice(sub);
        Self::new(prefix, Arc::clone(&self.shared))
    }

    /// Builds the physical key for `key`.
    ///
    /// Always a fresh allocation; the stored prefix is never mutated
    /// or aliased.
    fn physical(&self, key: &[u8]) -> Vec<u8> {
        let mut physical = Vec::with_capacity(self.prefix.len() + key.len());
        physical.extend_from_slice(&self.prefix);
        physical.extend_from_slice(key);
        physical
    }

    /// Returns `true` iff an entry exists at `key`.
    ///
    /// Every failure mode collapses to `false`: absence, but also any
    /// engine error. Callers that need to distinguish the two must use
    /// [`get`](Self::get) and inspect the error.
    #[must_use]
    pub fn has(&self, key: &[u8]) -> bool {
        let Ok(txn) = self.shared.engine.begin_read() else {
            return false;
        };
        matches!(txn.get(&self.physical(key)), Ok(Some(_)))
    }

    /// Reads the raw bytes stored at `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no entry exists, or
    /// [`StoreError::Engine`] if the engine fails.
    pub fn get(&self, key: &[u8]) -> StoreResult<Vec<u8>> {
        let txn = self.shared.engine.begin_read()?;
        txn.get(&self.physical(key))?.ok_or(StoreError::NotFound)
    }

    /// Reads and decodes the value stored at `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no entry exists,
    /// [`StoreError::Engine`] on engine failure, or
    /// [`StoreError::Codec`] if the stored bytes do not decode as `T`.
    pub fn get_object<T: DeserializeOwned>(&self, key: &[u8]) -> StoreResult<T> {
        let bytes = self.get(key)?;
        Ok(self.shared.codec.decode(&bytes)?)
    }

    /// Writes `value` at `key`, replacing any previous entry.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Engine`] if the engine fails.
    pub fn set(&self, key: &[u8], value: &[u8]) -> StoreResult<()> {
        let mut txn = self.shared.engine.begin_write()?;
        txn.set(&self.physical(key), value)?;
        txn.commit()?;
        Ok(())
    }

    /// Encodes `value` and writes it at `key`.
    ///
    /// Encoding runs before any transaction is opened, so an encoding
    /// failure leaves the store untouched.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Codec`] if encoding fails, or
    /// [`StoreError::Engine`] if the engine fails.
    pub fn set_object<T: Serialize + ?Sized>(&self, key: &[u8], value: &T) -> StoreResult<()> {
        let bytes = self.shared.codec.encode(value)?;
        self.set(key, &bytes)
    }

    /// Removes the entry at `key`.
    ///
    /// Deleting an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Engine`] if the engine fails.
    pub fn delete(&self, key: &[u8]) -> StoreResult<()> {
        let mut txn = self.shared.engine.begin_write()?;
        txn.delete(&self.physical(key))?;
        txn.commit()?;
        Ok(())
    }

    /// Visits every entry in this namespace, in key order.
    ///
    /// `visit` receives the logical key (namespace prefix stripped,
    /// exactly as passed to [`set`](Self::set)) and the raw value.
    /// The whole iteration runs inside one read-only transaction, so
    /// it observes a consistent snapshot. Descendant namespaces'
    /// entries are included; their full prefixes extend this one's.
    ///
    /// # Errors
    ///
    /// The first error returned by `visit` aborts the iteration and
    /// propagates; entries already visited stand. Engine failures
    /// surface as [`StoreError::Engine`].
    pub fn iter<F>(&self, visit: F) -> StoreResult<()>
    where
        F: FnMut(&[u8], &[u8]) -> StoreResult<()>,
    {
        self.scan(self.prefix.clone(), visit)
    }

    /// Visits every entry whose logical key starts with `sub`, in key
    /// order.
    ///
    /// `visit` receives the key with **both** the namespace prefix and
    /// `sub` stripped - the suffix beyond the sub-prefix - and the raw
    /// value.
    ///
    /// # Errors
    ///
    /// Same as [`iter`](Self::iter).
    pub fn iter_prefix<F>(&self, sub: &[u8], visit: F) -> StoreResult<()>
    where
        F: FnMut(&[u8], &[u8]) -> StoreResult<()>,
    {
        self.scan(self.physical(sub), visit)
    }

    fn scan<F>(&self, full_prefix: Vec<u8>, mut visit: F) -> StoreResult<()>
    where
        F: FnMut(&[u8], &[u8]) -> StoreResult<()>,
    {
        let txn = self.shared.engine.begin_read()?;
        for entry in txn.scan_prefix(&full_prefix) {
            let (key, value) = entry?;
            visit(&key[full_prefix.len()..], &value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Options;
    use crate::store::Store;
    use nestkv_engine::MemoryEngine;
    use serde::Deserialize;

    fn open_store() -> Store {
        Store::open(Arc::new(MemoryEngine::new()), Options::default())
    }

    fn collect(ns: &Namespace) -> Vec<(Vec<u8>, Vec<u8>)> {
        let mut entries = Vec::new();
        ns.iter(|key, value| {
            entries.push((key.to_vec(), value.to_vec()));
            Ok(())
        })
        .unwrap();
        entries
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Account {
        owner: String,
        balance: i64,
    }

    #[test]
    fn child_prefix_extends_parent() {
        let store = open_store();
        let ns = store.namespace(b"a").child(b"b").child(b"c");
        assert_eq!(ns.prefix(), b"default:a:b:c");
    }

    #[test]
    fn child_does_not_disturb_parent_prefix() {
        let store = open_store();
        let parent = store.namespace(b"a");
        let before = parent.prefix().to_vec();

        let x = parent.child(b"x");
        let y = parent.child(b"y");

        assert_eq!(parent.prefix(), &before[..]);
        assert_eq!(x.prefix(), b"default:a:x");
        assert_eq!(y.prefix(), b"default:a:y");
    }

    #[test]
    fn set_get_roundtrip() {
        let store = open_store();
        let ns = store.namespace(b"kv");

        ns.set(b"key", b"value").unwrap();
        assert_eq!(ns.get(b"key").unwrap(), b"value");
    }

    #[test]
    fn get_missing_is_not_found() {
        let store = open_store();
        let ns = store.namespace(b"kv");

        let err = ns.get(b"missing").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn set_object_get_object_roundtrip() {
        let store = open_store();
        let ns = store.namespace(b"accounts");

        let account = Account {
            owner: "alice".into(),
            balance: -250,
        };
        ns.set_object(b"1001", &account).unwrap();

        let decoded: Account = ns.get_object(b"1001").unwrap();
        assert_eq!(decoded, account);
    }

    #[test]
    fn get_object_on_garbage_is_codec_error() {
        let store = open_store();
        let ns = store.namespace(b"accounts");

        ns.set(b"1001", &[0xff, 0x13]).unwrap();
        let result: StoreResult<Account> = ns.get_object(b"1001");
        assert!(matches!(result, Err(StoreError::Codec(_))));
    }

    #[test]
    fn delete_then_get_is_not_found() {
        let store = open_store();
        let ns = store.namespace(b"kv");

        ns.set(b"key", b"value").unwrap();
        ns.delete(b"key").unwrap();

        assert!(ns.get(b"key").unwrap_err().is_not_found());
    }

    #[test]
    fn delete_absent_key_is_ok() {
        let store = open_store();
        let ns = store.namespace(b"kv");
        ns.delete(b"never-written").unwrap();
    }

    #[test]
    fn has_tracks_set_and_delete() {
        let store = open_store();
        let ns = store.namespace(b"kv");

        assert!(!ns.has(b"key"));
        ns.set(b"key", b"value").unwrap();
        assert!(ns.has(b"key"));
        ns.delete(b"key").unwrap();
        assert!(!ns.has(b"key"));
    }

    #[test]
    fn sibling_namespaces_are_isolated() {
        let store = open_store();
        let parent = store.namespace(b"parent");
        let x = parent.child(b"x");
        let y = parent.child(b"y");

        x.set(b"k", b"from x").unwrap();
        parent.set(b"k", b"from parent").unwrap();

        assert!(collect(&y).is_empty());
        assert!(!y.has(b"k"));
        assert_eq!(parent.get(b"k").unwrap(), b"from parent");
        assert_eq!(x.get(b"k").unwrap(), b"from x");
    }

    #[test]
    fn iter_strips_prefix_and_orders_keys() {
        let store = open_store();
        let ns = store.namespace(b"letters");
        let sibling = store.namespace(b"noise");

        ns.set(b"c", &[3]).unwrap();
        ns.set(b"a", &[1]).unwrap();
        ns.set(b"b", &[2]).unwrap();
        sibling.set(b"z", &[9]).unwrap();

        assert_eq!(
            collect(&ns),
            vec![
                (b"a".to_vec(), vec![1]),
                (b"b".to_vec(), vec![2]),
                (b"c".to_vec(), vec![3]),
            ]
        );
    }

    #[test]
    fn iter_prefix_strips_sub_prefix_too() {
        let store = open_store();
        let ns = store.namespace(b"kv");

        ns.set(b"pfx1", b"x").unwrap();
        ns.set(b"pfxother", b"y").unwrap();
        ns.set(b"zzz", b"w").unwrap();

        let mut seen = Vec::new();
        ns.iter_prefix(b"pfx", |key, value| {
            seen.push((key.to_vec(), value.to_vec()));
            Ok(())
        })
        .unwrap();

        assert_eq!(
            seen,
            vec![
                (b"1".to_vec(), b"x".to_vec()),
                (b"other".to_vec(), b"y".to_vec()),
            ]
        );
    }

    #[test]
    fn iter_aborts_on_first_visitor_error() {
        let store = open_store();
        let ns = store.namespace(b"kv");

        ns.set(b"a", b"1").unwrap();
        ns.set(b"b", b"2").unwrap();
        ns.set(b"c", b"3").unwrap();

        let mut seen = Vec::new();
        let err = ns
            .iter(|key, _| {
                seen.push(key.to_vec());
                if key == b"b" {
                    Err(StoreError::NotFound)
                } else {
                    Ok(())
                }
            })
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(seen, vec![b"a".to_vec(), b"b".to_vec()]);
    }

    #[test]
    fn iter_sees_descendant_entries() {
        let store = open_store();
        let parent = store.namespace(b"p");
        let child = parent.child(b"c");

        parent.set(b"own", b"1").unwrap();
        child.set(b"k", b"2").unwrap();

        let keys: Vec<Vec<u8>> = collect(&parent).into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![b":ck".to_vec(), b"own".to_vec()]);
    }

    #[test]
    fn separator_inside_name_collapses_paths() {
        // Documented caller obligation: names must not contain the
        // separator. With it, distinct logical paths share a prefix.
        let store = open_store();
        let direct = store.namespace(b"a:b");
        let nested = store.namespace(b"a").child(b"b");

        assert_eq!(direct.prefix(), nested.prefix());
    }

    #[test]
    fn set_object_roundtrips_heterogeneous_values() {
        let store = open_store();
        let ns = store.namespace(b"mixed");

        ns.set_object(b"int", &7u64).unwrap();
        ns.set_object(b"text", "hello").unwrap();
        ns.set_object(b"list", &vec![1u8, 2, 3]).unwrap();

        assert_eq!(ns.get_object::<u64>(b"int").unwrap(), 7);
        assert_eq!(ns.get_object::<String>(b"text").unwrap(), "hello");
        assert_eq!(ns.get_object::<Vec<u8>>(b"list").unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn empty_key_addresses_the_prefix_itself() {
        let store = open_store();
        let ns = store.namespace(b"kv");

        ns.set(b"", b"bare").unwrap();
        assert_eq!(ns.get(b"").unwrap(), b"bare");
        assert_eq!(collect(&ns)[0].0, b"");
    }
}
