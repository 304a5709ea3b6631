//! Store configuration.

/// Configuration for a [`crate::Store`].
///
/// `version` is prepended to every root namespace prefix and acts as
/// a schema/version tag for the whole key space. `separator` is
/// inserted between nested prefix segments.
///
/// Options are immutable after the store is opened; every namespace
/// derived from the store shares the same values.
///
/// # Caller Obligation
///
/// Namespace names must not contain the separator bytes. Nothing
/// validates or escapes names, so `child(b"a:b")` and
/// `child(b"a").child(b"b")` collapse to the same physical prefix
/// under the default `:` separator. The physical key layout is a
/// compatibility contract, so this is left to callers rather than
/// fixed by escaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Byte sequence prefixed to all root namespaces.
    pub version: Vec<u8>,

    /// Byte sequence inserted between nested prefix segments.
    pub separator: Vec<u8>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            version: b"default".to_vec(),
            separator: b":".to_vec(),
        }
    }
}

impl Options {
    /// Creates options with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the version tag.
    #[must_use]
    pub fn version(mut self, version: impl Into<Vec<u8>>) -> Self {
        self.version = version.into();
        self
    }

    /// Sets the separator bytes.
    #[must_use]
    pub fn separator(mut self, separator: impl Into<Vec<u8>>) -> Self {
        self.separator = separator.into();
        self
    }
}
