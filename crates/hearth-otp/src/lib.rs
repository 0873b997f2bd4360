use rand::Rng;
use sha2::{Digest, Sha256};

/// Draw a 6-digit one-time code, uniform over [100000, 999999]. The range
/// starts at 100000 so a leading zero can never occur.
pub fn generate_code() -> String {
    let n: u32 = rand::rng().random_range(100_000..=999_999);
    n.to_string()
}

/// Hex-encoded SHA-256 digest of a plaintext code. Only this digest is
/// persisted; the plaintext lives in memory and the outbound message only.
pub fn hash_code(code: &str) -> String {
    hex::encode(Sha256::digest(code.as_bytes()))
}
