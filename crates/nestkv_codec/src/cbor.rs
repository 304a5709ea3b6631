//! CBOR codec implementation.

use crate::error::{CodecError, CodecResult};
use crate::Codec;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// The default NestKV codec: compact binary CBOR via `ciborium`.
///
/// CBOR is self-describing, so heterogeneous value types can share a
/// store, and `serde` derive types round-trip without schema setup.
///
/// # Example
///
/// ```
/// use nestkv_codec::{CborCodec, Codec};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, PartialEq, Serialize, Deserialize)]
/// struct User {
///     name: String,
///     age: u32,
/// }
///
/// let user = User { name: "Alice".into(), age: 30 };
/// let bytes = CborCodec.encode(&user).unwrap();
/// let decoded: User = CborCodec.decode(&bytes).unwrap();
/// assert_eq!(decoded, user);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CborCodec;

impl Codec for CborCodec {
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> CodecResult<Vec<u8>> {
        let mut bytes = Vec::new();
        ciborium::into_writer(value, &mut bytes)
            .map_err(|err| CodecError::encode(err.to_string()))?;
        Ok(bytes)
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> CodecResult<T> {
        ciborium::from_reader(bytes).map_err(|err| CodecError::decode(err.to_string()))
    }
}
