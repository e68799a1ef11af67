//! Request signature verification
//!
//! The platform signs `timestamp || body` with Ed25519; both the
//! signature and the application's public key are hex encoded. The
//! timestamp (unix seconds) must also be recent, so a captured request
//! cannot be replayed later.

use std::time::Duration;

use ed25519_dalek::{Signature, Verifier, VerifyingKey};

use crate::error::{BridgeError, Result};

pub const SIGNATURE_HEADER: &str = "x-signature-ed25519";
pub const TIMESTAMP_HEADER: &str = "x-signature-timestamp";

/// Largest accepted distance between the request timestamp and local time
pub const DEFAULT_MAX_AGE: Duration = Duration::from_secs(300);

/// Verifies inbound interaction signatures
#[derive(Debug, Clone)]
pub struct SignatureVerifier {
    key: VerifyingKey,
    max_age: Duration,
}

impl SignatureVerifier {
    /// Parse a hex-encoded 32-byte public key
    pub fn from_hex(public_key: &str) -> Result<Self> {
        let bytes = hex::decode(public_key.trim())
            .map_err(|e| BridgeError::Config(format!("invalid public key hex: {}", e)))?;
        let array: [u8; 32] = bytes
            .try_into()
            .map_err(|_| BridgeError::Config("public key must be 32 bytes".to_string()))?;
        let key = VerifyingKey::from_bytes(&array)
            .map_err(|e| BridgeError::Config(format!("invalid public key: {}", e)))?;
        Ok(Self::new(key))
    }

    pub fn new(key: VerifyingKey) -> Self {
        Self {
            key,
            max_age: DEFAULT_MAX_AGE,
        }
    }

    /// Set the replay window
    pub fn with_max_age(mut self, max_age: Duration) -> Self {
        self.max_age = max_age;
        self
    }

    /// Check a hex signature over `timestamp || body` against the current time
    pub fn verify(&self, signature: &str, timestamp: &str, body: &[u8]) -> Result<()> {
        self.verify_at(signature, timestamp, body, chrono::Utc::now().timestamp())
    }

    /// Check a hex signature over `timestamp || body`, with `now` in unix seconds
    pub fn verify_at(&self, signature: &str, timestamp: &str, body: &[u8], now: i64) -> Result<()> {
        let bytes = hex::decode(signature)
            .map_err(|e| BridgeError::Signature(format!("invalid signature hex: {}", e)))?;
        let array: [u8; 64] = bytes
            .try_into()
            .map_err(|_| BridgeError::Signature("signature must be 64 bytes".to_string()))?;
        let signature = Signature::from_bytes(&array);

        let mut message = Vec::with_capacity(timestamp.len() + body.len());
        message.extend_from_slice(timestamp.as_bytes());
        message.extend_from_slice(body);

        self.key
            .verify(&message, &signature)
            .map_err(|e| BridgeError::Signature(format!("verification failed: {}", e)))?;

        let sent_at: i64 = timestamp
            .trim()
            .parse()
            .map_err(|_| BridgeError::Signature(format!("invalid timestamp `{}`", timestamp)))?;
        let skew = now.abs_diff(sent_at);
        if skew > self.max_age.as_secs() {
            return Err(BridgeError::Signature(format!(
                "timestamp {} is {}s away from local time",
                sent_at, skew
            )));
        }
        Ok(())
    }
}
