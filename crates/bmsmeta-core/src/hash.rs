//! Content-identity digests over raw chart bytes.

use sha2::{Digest, Sha256};

/// Legacy MD5 digest as lower-case hex
pub fn md5_hex(bytes: &[u8]) -> String {
    format!("{:x}", md5::compute(bytes))
}

/// SHA-256 digest as lower-case hex
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}
