// src/encoding.rs
//! Base64 framing — binary-to-text and back, independent of compression
//!
//! Standard alphabet, padded, no line wrapping. Decode failures are logged
//! and swallowed to `None`; a `None` means "could not decode", nothing more.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use log::error;

/// Base64-encode bytes as a `String`.
pub fn encode_base64(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Base64-encode bytes, keeping the result as raw ASCII bytes.
pub fn encode_base64_bytes(data: &[u8]) -> Vec<u8> {
    STANDARD.encode(data).into_bytes()
}

/// Base64-decode the UTF-8 byte form of `text`.
pub fn decode_base64(text: &str) -> Option<Vec<u8>> {
    decode_base64_bytes(text.as_bytes())
}

/// Base64-decode already-byte-encoded input.
pub fn decode_base64_bytes(data: &[u8]) -> Option<Vec<u8>> {
    match STANDARD.decode(data) {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            error!("base64 decoding failed: {e}");
            None
        }
    }
}
