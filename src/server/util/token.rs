//! Random secrets and booking references.

use rand::Rng;
use sha2::{Digest, Sha256};

/// Number of random bytes in a password reset token.
const RESET_TOKEN_BYTES: usize = 32;

/// Generates a password reset token as 64 lowercase hex characters.
pub fn generate_reset_token() -> String {
    let mut bytes = [0u8; RESET_TOKEN_BYTES];
    rand::rng().fill(&mut bytes);
    hex::encode(bytes)
}

/// SHA-256 digest of a token as lowercase hex. Only this form is persisted.
pub fn hash_token(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
}

/// Generates a booking reference such as `TX-7K2QZ9AB`.
pub fn generate_transaction_ref() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
    const REF_LENGTH: usize = 8;

    let mut rng = rand::rng();

    let suffix: String = (0..REF_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect();

    format!("TX-{}", suffix)
}
