// src/cipher.rs
//! The encryption seam — tickets cross this boundary as opaque strings

use crate::error::Result;

/// Injected encrypt/decrypt collaborator.
///
/// This crate never inspects the token strings a cipher produces, and never
/// swallows cipher failures — errors from either direction propagate to the
/// caller.
pub trait CipherExecutor {
    /// Encrypt plaintext into an opaque token string.
    fn encode(&self, plaintext: &str) -> Result<String>;

    /// Decrypt a token string back into plaintext.
    fn decode(&self, ciphertext: &str) -> Result<String>;
}
