// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Text encoding failed: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("Cipher operation failed: {0}")]
    Cipher(String),

    /// The bytes handed to the transport bridge are not a zlib-wrapped
    /// UTF-8 payload, so no transport text can be derived from them.
    #[error("serialized payload is not a transportable stream")]
    NotTransportable,

    #[error("decoded object is null")]
    NullDecodedObject,

    #[error("decoded object is of type {actual} when {expected} was expected")]
    TypeMismatch { expected: String, actual: String },
}

pub type Result<T> = std::result::Result<T, CodecError>;
