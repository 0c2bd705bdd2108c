use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::{DateTime, Duration, Utc};
use rand::RngCore;
use sha2::{Digest, Sha256};

/// Reset tokens are valid for one hour after issuance.
pub const RESET_TOKEN_TTL_MINUTES: i64 = 60;

const RESET_TOKEN_BYTES: usize = 32;

/// A freshly issued reset token. Only `digest` is persisted; `raw` goes to
/// the account owner and nowhere else.
#[derive(Debug, Clone)]
pub struct IssuedResetToken {
    pub raw: String,
    pub digest: String,
    pub expires_at: DateTime<Utc>,
}

impl IssuedResetToken {
    pub fn generate(now: DateTime<Utc>) -> Self {
        let mut bytes = [0u8; RESET_TOKEN_BYTES];
        rand::thread_rng().fill_bytes(&mut bytes);

        let raw = URL_SAFE_NO_PAD.encode(bytes);
        let digest = reset_token_digest(&raw);

        Self {
            raw,
            digest,
            expires_at: now + Duration::minutes(RESET_TOKEN_TTL_MINUTES),
        }
    }
}

/// SHA-256 of the raw token, lowercase hex.
pub fn reset_token_digest(raw: &str) -> String {
    Sha256::digest(raw.trim().as_bytes())
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}
