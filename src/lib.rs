// src/lib.rs
//! ticket-codec — compression and encoding helpers for authentication tickets
//!
//! Features:
//! - Raw-deflate + base64 compression of short ticket payloads
//! - Standard-alphabet base64 framing
//! - Encrypted transport of serializable values via an injected cipher
//!
//! Every function is stateless and pure over its inputs: no shared mutable
//! state, no lifecycle, safe to call from any number of threads.
//!
//! Two error policies coexist, by design. Decode-side helpers (`decompress`,
//! `decode_base64*`) swallow failures into `None` and log them; everything
//! else fails fast with a [`CodecError`].

pub mod cipher;
pub mod consts;
pub mod deflate;
pub mod encoding;
pub mod error;
pub mod object;

// Re-export everything users need at the crate root
pub use cipher::CipherExecutor;
pub use deflate::{compress, compress_text, decompress, inflate};
pub use encoding::{decode_base64, decode_base64_bytes, encode_base64, encode_base64_bytes};
pub use error::{CodecError, Result};
pub use object::{decode_object, encode_object, encode_object_bytes};
