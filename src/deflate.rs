// src/deflate.rs
//! The deflate/inflate transform for ticket payloads
//!
//! The pair is deliberately asymmetric: [`compress`] emits RAW deflate (no
//! zlib wrapper) while [`decompress`] accepts only zlib-WRAPPED streams
//! (header and adler32 checksum included). `decompress(compress(x))` is
//! therefore NOT a round-trip; `decompress` pairs with externally
//! zlib-wrapped producers. Downstream token formats depend on exactly these
//! wire forms, so the mismatch is an external contract, not a bug to unify.

use std::io::{Read, Write};

use flate2::read::ZlibDecoder;
use flate2::write::DeflateEncoder;
use flate2::Compression;
use log::error;

use crate::consts::DEFLATE_LEVEL;
use crate::encoding::encode_base64;
use crate::error::{CodecError, Result};

/// Deflate `data` (raw, no wrapper) and base64-encode the result.
///
/// The output buffer is `Vec`-backed, so the final length is whatever the
/// compressor reports — a payload that expands under deflate comes out whole
/// rather than truncated to an input-sized guess.
pub fn compress(data: &[u8]) -> Result<String> {
    let mut encoder = DeflateEncoder::new(
        Vec::with_capacity(data.len()),
        Compression::new(DEFLATE_LEVEL),
    );
    encoder.write_all(data)?;
    let deflated = encoder.finish()?;
    Ok(encode_base64(&deflated))
}

/// Deflate the UTF-8 bytes of `text`. See [`compress`].
pub fn compress_text(text: &str) -> Result<String> {
    compress(text.as_bytes())
}

/// Inflate a zlib-wrapped stream and decode the payload as UTF-8 text,
/// failing fast on any error.
///
/// The fail-fast sibling of [`decompress`]: same wire form, but corrupt
/// input or a non-UTF-8 payload surfaces as a [`CodecError`] instead of a
/// logged `None`.
pub fn inflate(data: &[u8]) -> Result<String> {
    let mut decoder = ZlibDecoder::new(data);
    let mut inflated = Vec::with_capacity(data.len());
    decoder.read_to_end(&mut inflated)?;
    String::from_utf8(inflated).map_err(CodecError::from)
}

/// Inflate a zlib-wrapped stream and decode the payload as UTF-8 text.
///
/// Any failure — not a zlib stream, corrupt body, payload not UTF-8 — is
/// logged and swallowed to `None`.
pub fn decompress(data: &[u8]) -> Option<String> {
    let mut decoder = ZlibDecoder::new(data);
    let mut inflated = Vec::with_capacity(data.len());
    if let Err(e) = decoder.read_to_end(&mut inflated) {
        error!("inflate of transport stream failed: {e}");
        return None;
    }
    match String::from_utf8(inflated) {
        Ok(text) => Some(text),
        Err(e) => {
            error!("inflated payload is not valid UTF-8: {e}");
            None
        }
    }
}
