//! Store handle and root namespace derivation.

use crate::config::Options;
use crate::namespace::Namespace;
use nestkv_codec::{CborCodec, Codec};
use nestkv_engine::KvEngine;
use std::sync::Arc;

/// Internals shared by a store and every namespace derived from it.
pub(crate) struct Shared<C> {
    pub(crate) engine: Arc<dyn KvEngine>,
    pub(crate) options: Options,
    pub(crate) codec: C,
}

/// A handle over one key-value engine and one [`Options`].
///
/// `Store` is the only factory for root [`Namespace`]s. It owns no
/// resources of its own: the engine connection was opened by the
/// caller and remains the caller's to close. Opening a store performs
/// no I/O and no validation.
///
/// The codec type parameter defaults to [`CborCodec`]; stores with
/// different codecs coexist freely.
///
/// # Example
///
/// ```
/// use nestkv_core::{Options, Store};
/// use nestkv_engine::MemoryEngine;
/// use std::sync::Arc;
///
/// let store = Store::open(Arc::new(MemoryEngine::new()), Options::default());
/// let ns = store.namespace(b"inventory");
/// assert_eq!(ns.prefix(), b"default:inventory");
/// ```
pub struct Store<C: Codec = CborCodec> {
    pub(crate) shared: Arc<Shared<C>>,
}

impl<C: Codec> Clone for Store<C> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl Store<CborCodec> {
    /// Opens a store over `engine` with the default CBOR codec.
    #[must_use]
    pub fn open(engine: Arc<dyn KvEngine>, options: Options) -> Self {
        Self::open_with_codec(engine, options, CborCodec)
    }
}

impl<C: Codec> Store<C> {
    /// Opens a store over `engine` with a custom codec.
    ///
    /// Any codec works as long as `decode(encode(v)) == v` holds for
    /// every value type the application stores.
    #[must_use]
    pub fn open_with_codec(engine: Arc<dyn KvEngine>, options: Options, codec: C) -> Self {
        tracing::debug!(
            version = ?options.version,
            separator = ?options.separator,
            "opening store"
        );
        Self {
            shared: Arc::new(Shared {
                engine,
                options,
                codec,
            }),
        }
    }

    /// Returns the store's options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.shared.options
    }

    /// Derives a root namespace.
    ///
    /// The namespace's prefix is `version ++ separator ++ name`. Pure
    /// prefix computation; no I/O, no side effects.
    #[must_use]
    pub fn namespace(&self, name: &[u8]) -> Namespace<C> {
        let options = &self.shared.options;
        let mut prefix =
            Vec::with_capacity(options.version.len() + options.separator.len() + name.len());
        prefix.extend_from_slice(&options.version);
        prefix.extend_from_slice(&options.separator);
        prefix.extend_from_slice(name);
        Namespace::new(prefix, Arc::clone(&self.shared))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nestkv_engine::MemoryEngine;

    fn open_store() -> Store {
        Store::open(Arc::new(MemoryEngine::new()), Options::default())
    }

    #[test]
    fn root_prefix_is_version_separator_name() {
        let store = open_store();
        assert_eq!(store.namespace(b"users").prefix(), b"default:users");
    }

    #[test]
    fn custom_options_shape_the_prefix() {
        let store = Store::open(
            Arc::new(MemoryEngine::new()),
            Options::new().version(b"v2".to_vec()).separator(b"/".to_vec()),
        );
        assert_eq!(store.namespace(b"users").prefix(), b"v2/users");
    }

    #[test]
    fn empty_version_and_separator_compose() {
        let store = Store::open(
            Arc::new(MemoryEngine::new()),
            Options::new().version(Vec::new()).separator(Vec::new()),
        );
        assert_eq!(store.namespace(b"users").prefix(), b"users");
    }

    #[test]
    fn cloned_store_shares_the_engine() {
        let store = open_store();
        let clone = store.clone();

        store.namespace(b"a").set(b"k", b"v").unwrap();
        assert!(clone.namespace(b"a").has(b"k"));
    }

    #[test]
    fn namespace_derivation_has_no_side_effects() {
        let engine = Arc::new(MemoryEngine::new());
        let store = Store::open(engine.clone(), Options::default());

        let _ = store.namespace(b"a").child(b"b").child(b"c");
        assert!(engine.is_empty());
    }
}
