// src/object.rs
//! Secure object codec — serializable value → encrypted transport string
//!
//! Layers: tagged-envelope serialization, the inflate bridge (bytes → text),
//! then the injected cipher. The inverse path decrypts, deserializes, and
//! verifies the recorded runtime type before handing the value back.

use std::any::type_name;
use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::Compression;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::cipher::CipherExecutor;
use crate::consts::DEFLATE_LEVEL;
use crate::deflate;
use crate::error::{CodecError, Result};

/// Native serialized form: the value plus its runtime type name, so the
/// decode side can reject a wrongly-typed payload instead of returning it.
#[derive(Serialize, Deserialize)]
struct Envelope {
    #[serde(rename = "type")]
    type_name: String,
    value: serde_json::Value,
}

/// Bytes → transport-text bridge.
///
/// Reuses the inflate path, NOT as a compression step: the input must be a
/// zlib-wrapped stream whose payload is UTF-8. Freshly serialized envelopes
/// always are; arbitrary caller-supplied bytes usually are not, and fail
/// here rather than deeper in the cipher.
fn inflate_to_transport_text(bytes: &[u8]) -> Option<String> {
    deflate::decompress(bytes)
}

/// Serialize `value` and encrypt it into an opaque transport string.
///
/// Serialization failures are fatal and propagate; so do cipher failures.
pub fn encode_object<T: Serialize>(value: &T, cipher: &dyn CipherExecutor) -> Result<String> {
    let envelope = Envelope {
        type_name: type_name::<T>().to_string(),
        value: serde_json::to_value(value)?,
    };
    let json = serde_json::to_vec(&envelope)?;
    let mut encoder = ZlibEncoder::new(
        Vec::with_capacity(json.len()),
        Compression::new(DEFLATE_LEVEL),
    );
    encoder.write_all(&json)?;
    let serialized = encoder.finish()?;
    encode_object_bytes(&serialized, cipher)
}

/// Encrypt pre-serialized bytes into an opaque transport string.
///
/// `bytes` must be in the native serialized form (zlib-wrapped UTF-8);
/// anything else fails with [`CodecError::NotTransportable`].
pub fn encode_object_bytes(bytes: &[u8], cipher: &dyn CipherExecutor) -> Result<String> {
    let text = inflate_to_transport_text(bytes).ok_or(CodecError::NotTransportable)?;
    cipher.encode(&text)
}

/// Decrypt `encoded` and deserialize it back into a `T`.
///
/// Fails fast, with a distinct error per cause: cipher failure, unparseable
/// envelope, null decoded value, or a recorded type that does not match `T`.
pub fn decode_object<T: DeserializeOwned>(
    encoded: &str,
    cipher: &dyn CipherExecutor,
) -> Result<T> {
    let decoded = cipher.decode(encoded)?;
    let envelope: Envelope = serde_json::from_str(&decoded)?;

    if envelope.value.is_null() {
        return Err(CodecError::NullDecodedObject);
    }

    let expected = type_name::<T>();
    if envelope.type_name != expected {
        return Err(CodecError::TypeMismatch {
            expected: expected.to_string(),
            actual: envelope.type_name,
        });
    }

    Ok(serde_json::from_value(envelope.value)?)
}
