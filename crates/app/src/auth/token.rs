//! Session token signing and verification.
//!
//! Tokens are compact HS256 JWTs: `base64url(header).base64url(claims).base64url(mac)`,
//! unpadded, with the MAC taken over the first two segments.

use std::fmt;

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use thiserror::Error;
use uuid::Uuid;
use zeroize::Zeroize;

use crate::domain::users::models::UserUuid;

type HmacSha256 = Hmac<Sha256>;

/// The only algorithm tokens are signed with.
pub const TOKEN_ALGORITHM: &str = "HS256";

#[derive(Clone)]
pub struct TokenSecret {
    bytes: Vec<u8>,
}

impl TokenSecret {
    #[must_use]
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for TokenSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TokenSecret(**redacted**)")?;
        Ok(())
    }
}

impl Drop for TokenSecret {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct TokenHeader {
    alg: String,
    typ: String,
}

/// Claims carried by a session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub user: TokenSubject,

    /// Issued-at, unix seconds.
    pub iat: i64,

    /// Expiry, unix seconds. Issued tokens never set this.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSubject {
    pub id: Uuid,
}

impl TokenClaims {
    #[must_use]
    pub fn new(user: UserUuid, issued_at: i64) -> Self {
        Self {
            user: TokenSubject {
                id: user.into_uuid(),
            },
            iat: issued_at,
            exp: None,
        }
    }

    #[must_use]
    pub fn user_uuid(&self) -> UserUuid {
        UserUuid::from_uuid(self.user.id)
    }
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token format is invalid")]
    InvalidFormat,

    #[error("token segment encoding is invalid")]
    InvalidEncoding(#[source] base64::DecodeError),

    #[error("token algorithm is not supported")]
    UnsupportedAlgorithm,

    #[error("token signature does not match")]
    InvalidSignature,

    #[error("token has expired")]
    Expired,

    #[error("token key is unusable")]
    InvalidKey,

    #[error("token json is invalid")]
    Json(#[source] serde_json::Error),
}

/// Sign `claims` into a compact token.
///
/// # Errors
///
/// Returns an error if the claims cannot be serialised.
pub fn sign_token(claims: &TokenClaims, secret: &TokenSecret) -> Result<String, TokenError> {
    let header = TokenHeader {
        alg: TOKEN_ALGORITHM.to_string(),
        typ: "JWT".to_string(),
    };

    let header = encode_segment(&header)?;
    let claims = encode_segment(claims)?;
    let signing_input = format!("{header}.{claims}");

    let mut mac = keyed_mac(secret)?;
    mac.update(signing_input.as_bytes());

    let signature = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

    Ok(format!("{signing_input}.{signature}"))
}

/// Check a token's signature and expiry against `now` (unix seconds).
///
/// # Errors
///
/// Returns an error for malformed tokens, foreign algorithms, signature
/// mismatches, and tokens whose `exp` is at or before `now`.
pub fn verify_token(
    token: &str,
    secret: &TokenSecret,
    now: i64,
) -> Result<TokenClaims, TokenError> {
    let (signing_input, signature) = token.rsplit_once('.').ok_or(TokenError::InvalidFormat)?;
    let (header, claims) = signing_input
        .split_once('.')
        .ok_or(TokenError::InvalidFormat)?;

    if claims.contains('.') {
        return Err(TokenError::InvalidFormat);
    }

    let header: TokenHeader = decode_segment(header)?;

    if header.alg != TOKEN_ALGORITHM {
        return Err(TokenError::UnsupportedAlgorithm);
    }

    let signature = URL_SAFE_NO_PAD
        .decode(signature)
        .map_err(TokenError::InvalidEncoding)?;

    let mut mac = keyed_mac(secret)?;
    mac.update(signing_input.as_bytes());
    mac.verify_slice(&signature)
        .map_err(|_ignored| TokenError::InvalidSignature)?;

    let claims: TokenClaims = decode_segment(claims)?;

    if claims.exp.is_some_and(|exp| exp <= now) {
        return Err(TokenError::Expired);
    }

    Ok(claims)
}

fn keyed_mac(secret: &TokenSecret) -> Result<HmacSha256, TokenError> {
    HmacSha256::new_from_slice(secret.as_bytes()).map_err(|_ignored| TokenError::InvalidKey)
}

fn encode_segment<T: Serialize>(value: &T) -> Result<String, TokenError> {
    let json = serde_json::to_vec(value).map_err(TokenError::Json)?;

    Ok(URL_SAFE_NO_PAD.encode(json))
}

fn decode_segment<T: for<'de> Deserialize<'de>>(segment: &str) -> Result<T, TokenError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(TokenError::InvalidEncoding)?;

    serde_json::from_slice(&bytes).map_err(TokenError::Json)
}
