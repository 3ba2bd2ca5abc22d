//! Short digests of fetched text for log lines
//!
//! Lets two log lines be compared ("did the key file change?") without the
//! credential itself ever reaching the console.

use sha2::{Digest, Sha256};

/// Bytes of the SHA-256 digest kept in a fingerprint.
pub const FINGERPRINT_LEN: usize = 8;

/// Hex-encoded prefix of SHA-256(text).
pub fn fingerprint(text: &str) -> String {
    let digest = Sha256::digest(text.as_bytes());
    hex::encode(&digest[..FINGERPRINT_LEN])
}
