//! Signed content tokens
//!
//! A token binds a dynamic object to a secret:
//!
//! ```text
//! base64(header) . hex(sha256(object)) . hex(hmac-sha256(secret, head))
//! ```
//!
//! where `head` is the first two segments joined by `.`. The header names the
//! version and algorithm. Objects serialize with sorted keys, so the digest
//! is stable across runs. Verification recomputes the signature first and the
//! content digest second, so a forged token never reaches the content check.

use base64::engine::general_purpose::STANDARD_NO_PAD;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::debug;

use crate::value::Obj;

type HmacSha256 = Hmac<Sha256>;

const HEADER: &str = r#"{"ver":"1","alg":"hmac-sha256"}"#;

#[derive(Debug, Error)]
pub enum TokenError {
    /// The token is not three dot-separated segments with the expected header.
    #[error("malformed token")]
    InvalidToken,
    /// The signature does not match the secret.
    #[error("invalid signature")]
    InvalidSignature,
    /// The signature is valid but the object is not the one signed.
    #[error("content does not match token")]
    ContentMismatch,
    #[error("invalid signing key")]
    InvalidKey,
    #[error("content not serializable: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Creates and verifies content tokens with a fixed secret.
pub struct TokenProvider {
    secret: String,
}

impl TokenProvider {
    pub fn new(secret: impl Into<String>) -> Self {
        Self { secret: secret.into() }
    }

    /// Sign `content` into a token.
    pub fn create(&self, content: &Obj) -> Result<String, TokenError> {
        let head = format!(
            "{}.{}",
            STANDARD_NO_PAD.encode(HEADER),
            self.content_digest(content)?
        );
        let signature = self.sign(&head)?;
        debug!("token created");
        Ok(format!("{}.{}", head, signature))
    }

    /// Check that `token` was created with this secret over `content`.
    pub fn verify(&self, token: &str, content: &Obj) -> Result<(), TokenError> {
        let mut segments = token.split('.');
        let (Some(header), Some(digest), Some(signature), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            return Err(TokenError::InvalidToken);
        };

        let decoded = STANDARD_NO_PAD
            .decode(header)
            .map_err(|_| TokenError::InvalidToken)?;
        if decoded != HEADER.as_bytes() {
            return Err(TokenError::InvalidToken);
        }

        let head = format!("{}.{}", header, digest);
        let mut mac = self.keyed_mac()?;
        mac.update(head.as_bytes());
        let expected = hex::decode(signature).map_err(|_| TokenError::InvalidSignature)?;
        mac.verify_slice(&expected)
            .map_err(|_| TokenError::InvalidSignature)?;

        if digest != self.content_digest(content)? {
            return Err(TokenError::ContentMismatch);
        }
        Ok(())
    }

    /// Hex digest of the content's canonical (sorted-key) JSON form.
    fn content_digest(&self, content: &Obj) -> Result<String, TokenError> {
        let json = serde_json::to_string(content)?;
        Ok(hex::encode(Sha256::digest(json.as_bytes())))
    }

    fn sign(&self, head: &str) -> Result<String, TokenError> {
        let mut mac = self.keyed_mac()?;
        mac.update(head.as_bytes());
        Ok(hex::encode(mac.finalize().into_bytes()))
    }

    fn keyed_mac(&self) -> Result<HmacSha256, TokenError> {
        HmacSha256::new_from_slice(self.secret.as_bytes()).map_err(|_| TokenError::InvalidKey)
    }
}
