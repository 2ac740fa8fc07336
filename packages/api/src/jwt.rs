//! Unverified reads of a JWT payload.
//!
//! The client never validates signatures; it only peeks at the claims to
//! fill in a missing role and to drop tokens that have visibly expired.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;
use store::Role;
use tracing::debug;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Claims {
    pub sub: Option<String>,
    pub username: Option<String>,
    pub rol: Option<String>,
    pub role: Option<String>,
    pub exp: Option<i64>,
}

impl Claims {
    /// `true` once `exp` (seconds since the epoch) is in the past.
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.exp.is_some_and(|exp| exp < now)
    }

    pub fn role(&self) -> Option<Role> {
        self.rol
            .as_deref()
            .or(self.role.as_deref())
            .and_then(|r| r.parse().ok())
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref().or(self.sub.as_deref())
    }
}

/// Decode the payload segment, or `None` for opaque tokens.
pub fn decode_claims(token: &str) -> Option<Claims> {
    let mut segments = token.split('.');
    let (_header, payload, _signature) = (segments.next()?, segments.next()?, segments.next()?);
    let bytes = match URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')) {
        Ok(bytes) => bytes,
        Err(e) => {
            debug!("Token payload is not base64url: {}", e);
            return None;
        }
    };
    serde_json::from_slice(&bytes).ok()
}

pub fn role_from_token(token: &str) -> Option<Role> {
    decode_claims(token)?.role()
}

#[cfg(test)]
pub(crate) fn encode_for_test(claims: serde_json::Value) -> String {
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("eyJhbGciOiJIUzI1NiJ9.{payload}.c2ln")
}
