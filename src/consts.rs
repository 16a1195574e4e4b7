// src/consts.rs
//! Shared constants — codec parameters and defaults

/// Deflate level for ticket payloads
// 6 is zlib's default; tickets are short, higher levels buy nothing
pub const DEFLATE_LEVEL: u32 = 6;
