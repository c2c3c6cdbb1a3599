//! PKCE (Proof Key for Code Exchange) and random state generation.

use std::fmt;

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::RngCore as _;
use sha2::{Digest, Sha256};

/// A PKCE code verifier (RFC 7636).
///
/// 32 random bytes, base64url-encoded without padding: 43 characters.
#[derive(Clone, PartialEq, Eq)]
pub(crate) struct CodeVerifier(String);

impl CodeVerifier {
    pub(crate) fn generate() -> Self {
        let mut bytes = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self(URL_SAFE_NO_PAD.encode(bytes))
    }

    #[cfg(test)]
    pub(crate) fn from_static(verifier: &str) -> Self {
        Self(verifier.to_string())
    }

    /// The S256 challenge: `BASE64URL(SHA256(verifier))`.
    pub(crate) fn challenge(&self) -> String {
        let digest = Sha256::digest(self.0.as_bytes());
        URL_SAFE_NO_PAD.encode(digest.as_slice())
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for CodeVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CodeVerifier").field(&"[REDACTED]").finish()
    }
}

/// Generate a random `state` parameter (32 random bytes, 64 lowercase hex chars).
pub(crate) fn random_state() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    bytes.iter().fold(String::with_capacity(64), |mut s, b| {
        use std::fmt::Write as _;
        let _ = write!(s, "{b:02x}");
        s
    })
}
