//! Sign-in collaborator interface: token delivery and claims decoding.
//!
//! MIT License
//!
//! Copyright (c) 2026 66f94eae
//!
//! Permission is hereby granted, free of charge, to any person obtaining a copy
//! of this software and associated documentation files (the "Software"), to deal
//! in the Software without restriction, including without limitation the rights
//! to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
//! copies of the Software, and to permit persons to whom the Software is
//! furnished to do so, subject to the following conditions:
//!
//! The above copyright notice and this permission notice shall be included in all
//! copies or substantial portions of the Software.
//!
//! THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
//! IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
//! FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
//! AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
//! LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
//! OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
//! SOFTWARE.
//!
//! The OAuth/PKCE exchange itself happens in an external browser-side
//! helper; this module only waits for the two opaque tokens it delivers and
//! extracts the subject id used as the storage namespace key.

use std::path::Path;
use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};
use tokio::time;

use crate::error::{Error, Result};

/// How often the token file is re-checked while waiting
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);
/// Default wait before giving up on the sign-in helper
pub const SIGN_IN_TIMEOUT: Duration = Duration::from_secs(5);

/// The two opaque tokens the sign-in helper delivers
#[derive(Debug, Clone, Deserialize)]
pub struct TokenPair {
    /// Bearer token for API calls; unused here but part of the delivery
    #[serde(default)]
    pub access_token: String,
    /// OpenID Connect ID token carrying the identity claims
    pub id_token: String,
}

/// Identity claims extracted from the ID token payload
///
/// Only `sub` is ever interpreted; the rest is display data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Stable unique subject id; the storage namespace key
    pub sub: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
}

/// Decodes the claims from an ID token without verifying its signature
///
/// # Arguments
/// * `id_token` - A compact JWT (`header.payload.signature`)
///
/// # Returns
/// * `Ok(Claims)` from the base64url-decoded payload segment
/// * `Err(Error::InvalidToken)` for anything that does not decode
///
/// Signature verification belongs to the issuing side of the sign-in flow;
/// by the time a token reaches this program it is only a namespace key.
pub fn decode_claims(id_token: &str) -> Result<Claims> {
    let mut segments = id_token.split('.');
    let payload = match (segments.next(), segments.next()) {
        (Some(_), Some(payload)) if !payload.is_empty() => payload,
        _ => return Err(Error::InvalidToken("expected a three-segment JWT".to_string())),
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| Error::InvalidToken("payload is not valid base64url".to_string()))?;
    serde_json::from_slice(&bytes)
        .map_err(|_| Error::InvalidToken("payload is not a claims object".to_string()))
}

/// Waits for the sign-in helper to deliver its token file
///
/// # Arguments
/// * `path` - Token file location, a JSON `TokenPair`
/// * `timeout` - Bound on the whole wait
///
/// # Returns
/// * `Ok(TokenPair)` once the file appears and parses
/// * `Err(Error::SignInTimeout)` when the bound elapses first
/// * `Err(Error::InvalidToken)` when the delivered file is not valid JSON
///
/// This is the program's only suspension point; the core compute functions
/// are invoked strictly after it resolves.
pub async fn wait_for_tokens(path: &Path, timeout: Duration) -> Result<TokenPair> {
    time::timeout(timeout, poll_token_file(path))
        .await
        .map_err(|_| Error::SignInTimeout(timeout))?
}

async fn poll_token_file(path: &Path) -> Result<TokenPair> {
    loop {
        if let Ok(raw) = std::fs::read_to_string(path) {
            return serde_json::from_str(&raw)
                .map_err(|_| Error::InvalidToken("token file is not valid JSON".to_string()));
        }
        time::sleep(POLL_INTERVAL).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with_payload(payload: &str) -> String {
        format!(
            "eyJhbGciOiJSUzI1NiJ9.{}.signature",
            URL_SAFE_NO_PAD.encode(payload)
        )
    }

    #[test]
    fn decodes_claims_from_payload_segment() {
        let token = token_with_payload(
            r#"{"sub":"1234567890","name":"Jane Doe","email":"jane@example.com"}"#,
        );
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.sub, "1234567890");
        assert_eq!(claims.name.as_deref(), Some("Jane Doe"));
        assert_eq!(claims.picture, None);
    }

    #[test]
    fn rejects_garbage_tokens() {
        assert!(decode_claims("").is_err());
        assert!(decode_claims("only-one-segment").is_err());
        assert!(decode_claims("a..c").is_err());
        assert!(decode_claims("a.!!!not-base64!!!.c").is_err());
        // Valid base64 that is not a claims object.
        let token = format!("h.{}.s", URL_SAFE_NO_PAD.encode("[1,2,3]"));
        assert!(decode_claims(&token).is_err());
    }

    #[test]
    fn missing_sub_is_rejected() {
        let token = token_with_payload(r#"{"name":"No Subject"}"#);
        assert!(decode_claims(&token).is_err());
    }

    #[tokio::test]
    async fn returns_tokens_once_file_exists() {
        let path = std::env::temp_dir().join(format!("countdown-tokens-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"{"access_token":"aaa","id_token":"h.p.s"}"#,
        )
        .unwrap();

        let pair = wait_for_tokens(&path, SIGN_IN_TIMEOUT).await.unwrap();
        assert_eq!(pair.access_token, "aaa");
        assert_eq!(pair.id_token, "h.p.s");

        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn times_out_when_file_never_appears() {
        let path = std::env::temp_dir().join("countdown-tokens-never-written.json");
        let result = wait_for_tokens(&path, Duration::from_millis(50)).await;
        assert!(matches!(result, Err(Error::SignInTimeout(_))));
    }
}
