//! Access token claim extraction
//!
//! The backend signs and verifies tokens; this client only reads the claims
//! out of the payload segment. No signature verification happens here.

use base64::{engine::general_purpose, Engine as _};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::{ApiError, Result};
use crate::session::Role;

/// Claims this client cares about from the access token
#[derive(Debug, Clone)]
pub struct AccessClaims {
    pub role: Role,
    pub user_id: Option<i64>,
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
struct RawClaims {
    role: Option<String>,
    user_id: Option<i64>,
    exp: Option<i64>,
}

/// Decode the payload segment of an access token.
///
/// Fails with `ApiError::Authentication` on anything other than a
/// well-formed token carrying a known role claim, so a session is never
/// built from a token whose role cannot be established.
pub fn decode(token: &str) -> Result<AccessClaims> {
    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next(), segments.next()) {
        (Some(_), Some(payload), Some(_)) if segments.next().is_none() => payload,
        _ => {
            return Err(ApiError::Authentication(
                "access token is not a three-segment JWT".to_string(),
            ))
        }
    };

    let bytes = general_purpose::URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|e| ApiError::Authentication(format!("token payload is not base64url: {e}")))?;

    let raw: RawClaims = serde_json::from_slice(&bytes)
        .map_err(|e| ApiError::Authentication(format!("token payload is not JSON: {e}")))?;

    let role_claim = raw
        .role
        .ok_or_else(|| ApiError::Authentication("token carries no role claim".to_string()))?;
    let role = Role::from_claim(&role_claim)
        .ok_or_else(|| ApiError::Authentication(format!("unknown role claim: {role_claim}")))?;

    let expires_at = raw.exp.and_then(|exp| DateTime::<Utc>::from_timestamp(exp, 0));

    Ok(AccessClaims {
        role,
        user_id: raw.user_id,
        expires_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Unsigned test token with the given JSON payload.
    fn token_with_payload(payload: &str) -> String {
        let header = general_purpose::URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let body = general_purpose::URL_SAFE_NO_PAD.encode(payload);
        format!("{header}.{body}.signature")
    }

    #[test]
    fn test_decode_full_claims() {
        let token =
            token_with_payload(r#"{"role":"STUDENT","user_id":42,"exp":1755600000,"iat":1755596400}"#);
        let claims = decode(&token).unwrap();
        assert_eq!(claims.role, Role::Student);
        assert_eq!(claims.user_id, Some(42));
        assert_eq!(claims.expires_at.unwrap().timestamp(), 1755600000);
    }

    #[test]
    fn test_decode_role_only() {
        let token = token_with_payload(r#"{"role":"ADMIN"}"#);
        let claims = decode(&token).unwrap();
        assert_eq!(claims.role, Role::Admin);
        assert_eq!(claims.user_id, None);
        assert_eq!(claims.expires_at, None);
    }

    #[test]
    fn test_decode_rejects_missing_role() {
        let token = token_with_payload(r#"{"user_id":42}"#);
        let err = decode(&token).unwrap_err();
        assert!(matches!(err, ApiError::Authentication(_)));
    }

    #[test]
    fn test_decode_rejects_unknown_role() {
        let token = token_with_payload(r#"{"role":"PRINCIPAL"}"#);
        let err = decode(&token).unwrap_err();
        assert!(err.to_string().contains("PRINCIPAL"));
    }

    #[test]
    fn test_decode_rejects_malformed_tokens() {
        for bad in ["", "onesegment", "two.segments", "a.b.c.d", "x.!!!not-base64!!!.y"] {
            assert!(
                matches!(decode(bad), Err(ApiError::Authentication(_))),
                "expected authentication error for {bad:?}"
            );
        }
    }

    #[test]
    fn test_decode_rejects_non_json_payload() {
        let header = general_purpose::URL_SAFE_NO_PAD.encode("{}");
        let body = general_purpose::URL_SAFE_NO_PAD.encode("plain text");
        let token = format!("{header}.{body}.sig");
        assert!(matches!(decode(&token), Err(ApiError::Authentication(_))));
    }
}
