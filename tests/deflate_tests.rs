// tests/deflate_tests.rs
use std::io::{Read, Write};

use flate2::read::DeflateDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use ticket_codec::{compress, compress_text, decode_base64, decompress, inflate, CodecError};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Produce a genuinely zlib-wrapped stream, the form `decompress` pairs with.
fn zlib_wrap(data: &[u8]) -> Vec<u8> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

#[test]
fn test_decompress_recovers_zlib_wrapped_text() {
    let wrapped = zlib_wrap("the quick brown fox jumps over the lazy dog".as_bytes());
    let text = decompress(&wrapped).unwrap();
    assert_eq!(text, "the quick brown fox jumps over the lazy dog");
    assert!(!text.is_empty());
}

#[test]
fn test_decompress_garbage_returns_none() {
    init_logging();
    assert!(decompress(b"definitely not a zlib stream").is_none());
}

#[test]
fn test_decompress_rejects_non_utf8_payload() {
    init_logging();
    let wrapped = zlib_wrap(&[0xff, 0xfe, 0x80, 0x81]);
    assert!(decompress(&wrapped).is_none());
}

#[test]
fn test_inflate_recovers_zlib_wrapped_text() {
    let wrapped = zlib_wrap("TGT-1-secret-cas01".as_bytes());
    assert_eq!(inflate(&wrapped).unwrap(), "TGT-1-secret-cas01");
}

#[test]
fn test_inflate_garbage_is_an_error() {
    let err = inflate(b"definitely not a zlib stream");
    assert!(matches!(err, Err(CodecError::Io(_))));
}

#[test]
fn test_inflate_non_utf8_payload_is_an_error() {
    let wrapped = zlib_wrap(&[0xff, 0xfe, 0x80, 0x81]);
    let err = inflate(&wrapped);
    assert!(matches!(err, Err(CodecError::Encoding(_))));
}

#[test]
fn test_compress_then_decompress_is_not_a_round_trip() {
    // compress emits raw deflate; decompress wants a zlib wrapper
    let compressed = compress_text("ST-1234-abcdef").unwrap();
    let deflated = decode_base64(&compressed).unwrap();
    assert!(decompress(&deflated).is_none());
}

#[test]
fn test_compress_output_is_raw_deflate() {
    let compressed = compress_text("ST-1234-abcdef").unwrap();
    let deflated = decode_base64(&compressed).unwrap();

    let mut decoder = DeflateDecoder::new(&deflated[..]);
    let mut out = String::new();
    decoder.read_to_string(&mut out).unwrap();
    assert_eq!(out, "ST-1234-abcdef");
}

#[test]
fn test_compress_bytes_and_text_agree() {
    let text = "service=https://app.example.org/login";
    assert_eq!(compress(text.as_bytes()).unwrap(), compress_text(text).unwrap());
}

#[test]
fn test_compress_long_input_is_not_truncated() {
    let text = "a".repeat(10_000);
    let compressed = compress_text(&text).unwrap();
    let deflated = decode_base64(&compressed).unwrap();

    let mut decoder = DeflateDecoder::new(&deflated[..]);
    let mut out = String::new();
    decoder.read_to_string(&mut out).unwrap();
    assert_eq!(out, text);
}

#[test]
fn test_compress_incompressible_input_is_not_truncated() {
    // already-high-entropy input expands under deflate
    let data: Vec<u8> = (0..4096u32).map(|i| (i.wrapping_mul(2654435761) >> 13) as u8).collect();
    let compressed = compress(&data).unwrap();
    let deflated = decode_base64(&compressed).unwrap();

    let mut decoder = DeflateDecoder::new(&deflated[..]);
    let mut out = Vec::new();
    decoder.read_to_end(&mut out).unwrap();
    assert_eq!(out, data);
}
