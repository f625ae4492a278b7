//! Bearer token → [`ClaimSet`].
//!
//! Only the claims are extracted here. The signature is assumed to be checked
//! upstream (gateway, or [`crate::verify::Hs256Verifier`] in the HTTP layer).

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::{Map, Value};

use crate::{AuthError, ClaimSet};

/// Turns a raw token string into its claims.
pub trait ClaimDecoder: Send + Sync {
    /// Decode `token`.
    ///
    /// - absent or blank token: `AuthError::Unauthorized("Token JWT inválido")`
    /// - undecodable token: `AuthError::TokenMalformed`
    fn decode(&self, token: Option<&str>) -> Result<ClaimSet, AuthError>;
}

/// JWS compact-serialization decoder.
///
/// Reads the header and payload segments only. The `alg` header is never
/// interpreted, so tokens signed with any algorithm (or `none`) decode the same way.
#[derive(Debug, Clone, Copy, Default)]
pub struct JwtClaimDecoder;

impl JwtClaimDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl ClaimDecoder for JwtClaimDecoder {
    fn decode(&self, token: Option<&str>) -> Result<ClaimSet, AuthError> {
        let token = match token.map(str::trim) {
            Some(t) if !t.is_empty() => t,
            _ => return Err(AuthError::invalid_token()),
        };

        let segments: Vec<&str> = token.split('.').collect();
        let [header, payload, _signature] = segments.as_slice() else {
            return Err(malformed(format!(
                "expected 3 segments, found {}",
                segments.len()
            )));
        };

        json_object(header, "header")?;
        let claims = json_object(payload, "payload")?;

        Ok(ClaimSet::from(claims))
    }
}

/// base64url (no padding) → JSON object.
fn json_object(segment: &str, what: &str) -> Result<Map<String, Value>, AuthError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|e| malformed(format!("{what} is not base64url: {e}")))?;

    match serde_json::from_slice::<Value>(&bytes) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(malformed(format!("{what} is not a JSON object"))),
        Err(e) => Err(malformed(format!("{what} is not JSON: {e}"))),
    }
}

fn malformed(detail: String) -> AuthError {
    AuthError::TokenMalformed(format!("Unable to decode token: {detail}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claims::{CLAIM_ROLE, CLAIM_USER_ID};
    use crate::error::MSG_INVALID_TOKEN;
    use jsonwebtoken::{Algorithm, EncodingKey, Header};
    use proptest::prelude::*;
    use serde_json::json;

    const USER_ID: &str = "0b6d4c7e-5f1a-4c2b-9d3e-7a8b9c0d1e2f";

    fn mint(payload: Value, secret: &[u8]) -> String {
        jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &payload,
            &EncodingKey::from_secret(secret),
        )
        .unwrap()
    }

    #[test]
    fn absent_token_is_unauthorized() {
        let err = JwtClaimDecoder::new().decode(None).unwrap_err();
        assert_eq!(err, AuthError::Unauthorized(MSG_INVALID_TOKEN.into()));
    }

    #[test]
    fn empty_and_blank_tokens_are_unauthorized() {
        let decoder = JwtClaimDecoder::new();
        for token in ["", "   "] {
            let err = decoder.decode(Some(token)).unwrap_err();
            assert_eq!(err, AuthError::invalid_token());
        }
    }

    #[test]
    fn garbage_token_is_malformed() {
        let err = JwtClaimDecoder::new()
            .decode(Some("token.invalido.aqui"))
            .unwrap_err();

        assert!(!err.is_unauthorized());
        assert!(err.message().contains("Unable to decode"));
    }

    #[test]
    fn token_without_segments_is_malformed() {
        let err = JwtClaimDecoder::new().decode(Some("abc")).unwrap_err();
        assert!(matches!(err, AuthError::TokenMalformed(_)));
    }

    fn segment(value: &Value) -> String {
        URL_SAFE_NO_PAD.encode(serde_json::to_vec(value).unwrap())
    }

    /// Compact token with an arbitrary header and a dummy (or empty) signature.
    fn compact(header: Value, payload: Value, signature: &str) -> String {
        format!("{}.{}.{signature}", segment(&header), segment(&payload))
    }

    #[test]
    fn unsupported_or_absent_algorithms_still_decode() {
        let payload = json!({ "userId": USER_ID, "role": "Administrador" });
        let tokens = [
            compact(json!({ "alg": "none", "typ": "JWT" }), payload.clone(), ""),
            compact(json!({ "alg": "ES512", "typ": "JWT" }), payload.clone(), "c2ln"),
            compact(json!({ "alg": "RS256", "typ": "JWT" }), payload.clone(), "c2ln"),
            compact(json!({ "typ": "JWT" }), payload, "c2ln"),
        ];

        for token in tokens {
            let claims = JwtClaimDecoder::new().decode(Some(&token)).unwrap();
            assert_eq!(claims.first(CLAIM_USER_ID), Some(USER_ID));
            assert_eq!(claims.values(CLAIM_ROLE), ["Administrador"]);
        }
    }

    #[test]
    fn payload_must_be_a_json_object() {
        let header = json!({ "alg": "none" });
        for payload in [json!(["Administrador"]), json!("userId"), json!(42)] {
            let token = compact(header.clone(), payload, "");
            let err = JwtClaimDecoder::new().decode(Some(&token)).unwrap_err();
            assert!(matches!(err, AuthError::TokenMalformed(_)), "{err:?}");
        }
    }

    #[test]
    fn header_must_be_a_json_object() {
        let payload = segment(&json!({ "userId": USER_ID }));
        let not_json = URL_SAFE_NO_PAD.encode(b"not json");
        let token = format!("{not_json}.{payload}.");

        let err = JwtClaimDecoder::new().decode(Some(&token)).unwrap_err();
        assert!(matches!(err, AuthError::TokenMalformed(_)));
    }

    #[test]
    fn wrong_segment_count_is_malformed() {
        let header = segment(&json!({ "alg": "none" }));
        let payload = segment(&json!({ "userId": USER_ID }));
        for token in [format!("{header}.{payload}"), format!("{header}.{payload}.a.b")] {
            let err = JwtClaimDecoder::new().decode(Some(&token)).unwrap_err();
            assert!(err.message().starts_with("Unable to decode"));
        }
    }

    #[test]
    fn signature_is_not_checked() {
        let token = mint(json!({ "userId": "abc" }), b"some-secret-nobody-here-knows");
        let claims = JwtClaimDecoder::new().decode(Some(&token)).unwrap();
        assert_eq!(claims.first(CLAIM_USER_ID), Some("abc"));
    }

    #[test]
    fn expired_token_still_decodes() {
        let token = mint(json!({ "userId": "abc", "exp": 1 }), b"k");
        assert!(JwtClaimDecoder::new().decode(Some(&token)).is_ok());
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let token = mint(json!({ "role": "Cliente" }), b"k");
        let claims = JwtClaimDecoder::new()
            .decode(Some(&format!("  {token}\n")))
            .unwrap();
        assert_eq!(claims.values(CLAIM_ROLE), ["Cliente"]);
    }

    #[test]
    fn role_array_becomes_multiple_values() {
        let token = mint(json!({ "role": ["Administrador", "Cliente"] }), b"k");
        let claims = JwtClaimDecoder::new().decode(Some(&token)).unwrap();
        assert_eq!(claims.values(CLAIM_ROLE), ["Administrador", "Cliente"]);
    }

    proptest! {
        #[test]
        fn arbitrary_input_never_panics(token in ".{0,200}") {
            let _ = JwtClaimDecoder::new().decode(Some(&token));
        }

        #[test]
        fn dotted_garbage_is_never_unauthorized(
            a in "[a-z]{1,12}",
            b in "[a-z]{1,12}",
            c in "[a-z]{1,12}",
        ) {
            let token = format!("{a}.{b}.{c}");
            if let Err(err) = JwtClaimDecoder::new().decode(Some(&token)) {
                prop_assert!(!err.is_unauthorized());
            }
        }
    }
}
