//! # NestKV Codec
//!
//! Pluggable value (de)serialization for NestKV.
//!
//! Typed reads and writes in `nestkv_core` go through a [`Codec`]: a
//! pair of encode/decode operations turning any `serde`-representable
//! value into bytes and back. The codec is injected into the store
//! handle, so stores with different codecs coexist in one process.
//!
//! The default codec is [`CborCodec`], a compact self-describing
//! binary format. Any substitute must round-trip losslessly:
//! `decode(encode(v)) == v` for every value type the application
//! stores.
//!
//! ## Usage
//!
//! ```
//! use nestkv_codec::{CborCodec, Codec};
//!
//! let codec = CborCodec;
//! let bytes = codec.encode(&("hello", 42u32)).unwrap();
//! let decoded: (String, u32) = codec.decode(&bytes).unwrap();
//! assert_eq!(decoded, ("hello".to_string(), 42));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod cbor;
mod error;

pub use cbor::CborCodec;
pub use error::{CodecError, CodecResult};

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A byte-level codec for typed values.
///
/// Implementations must be deterministic enough that round-tripping
/// is lossless for every value type the application stores.
pub trait Codec: Send + Sync {
    /// Encodes `value` to bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Encode`] if the value cannot be
    /// represented in the codec's format.
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> CodecResult<Vec<u8>>;

    /// Decodes a value of type `T` from `bytes`.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Decode`] if `bytes` is not a valid
    /// encoding of `T`.
    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> CodecResult<T>;
}
