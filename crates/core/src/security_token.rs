//! Per-session anti-forgery tokens.
//!
//! A token is the hex HMAC-SHA256 of `"{action}:{user_id}:{session_id}"`
//! under the server secret. It is stateless: the server recomputes it on
//! every mutating request and compares in constant time.

use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use crate::error::CoreError;
use crate::types::DbId;

/// Header carrying the token on mutating requests.
pub const SECURITY_TOKEN_HEADER: &str = "x-security-token";

type HmacSha256 = Hmac<Sha256>;

/// The family of operations a token authorizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenAction {
    /// Saving and deleting notes.
    Notes,
    /// Destructive maintenance such as purging all notes.
    Maintenance,
}

impl TokenAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Notes => "notes",
            Self::Maintenance => "maintenance",
        }
    }
}

fn keyed_mac(secret: &str, action: TokenAction, user_id: DbId, session_id: &str) -> HmacSha256 {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(format!("{}:{user_id}:{session_id}", action.as_str()).as_bytes());
    mac
}

/// Issue the token for one session and action.
pub fn issue_token(secret: &str, action: TokenAction, user_id: DbId, session_id: &str) -> String {
    let tag = keyed_mac(secret, action, user_id, session_id).finalize();
    hex::encode(tag.into_bytes())
}

/// Verify a presented token. Fails with [`CoreError::SecurityToken`].
pub fn verify_token(
    secret: &str,
    action: TokenAction,
    user_id: DbId,
    session_id: &str,
    presented: &str,
) -> Result<(), CoreError> {
    let bytes = hex::decode(presented.trim())
        .ok_or_else(|| CoreError::SecurityToken("Malformed security token".into()))?;
    keyed_mac(secret, action, user_id, session_id)
        .verify_slice(&bytes)
        .map_err(|_| CoreError::SecurityToken("Security token check failed".into()))
}

// ---------------------------------------------------------------------------
// hex encoding
// ---------------------------------------------------------------------------

mod hex {
    /// Encode bytes as a lowercase hex string.
    pub fn encode(bytes: impl AsRef<[u8]>) -> String {
        bytes.as_ref().iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Decode a hex string; `None` on odd length or non-hex characters.
    pub fn decode(s: &str) -> Option<Vec<u8>> {
        if s.len() % 2 != 0 || !s.is_ascii() {
            return None;
        }
        (0..s.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&s[i..i + 2], 16).ok())
            .collect()
    }
}
