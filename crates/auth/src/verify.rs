//! HS256 signature check for deployments without an upstream gateway.

use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde_json::{Map, Value};

use crate::AuthError;

/// Verifies the HS256 signature of a bearer token (and `exp`, when present).
///
/// Key material is not printable via Debug.
#[derive(Clone)]
pub struct Hs256Verifier {
    key: DecodingKey,
    validation: Validation,
}

impl core::fmt::Debug for Hs256Verifier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Hs256Verifier")
            .field("leeway", &self.validation.leeway)
            .finish_non_exhaustive()
    }
}

impl Hs256Verifier {
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        Self {
            key: DecodingKey::from_secret(secret.as_ref()),
            validation,
        }
    }

    /// Any failure (bad signature, wrong algorithm, expired) is reported as
    /// `Unauthorized("Token JWT inválido")`; the cause is only logged.
    pub fn verify(&self, token: &str) -> Result<(), AuthError> {
        jsonwebtoken::decode::<Map<String, Value>>(token, &self.key, &self.validation)
            .map(|_| ())
            .map_err(|err| {
                tracing::warn!(error = %err, "bearer token signature verification failed");
                AuthError::invalid_token()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header};
    use serde_json::json;

    fn mint(payload: Value, secret: &[u8]) -> String {
        jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &payload,
            &EncodingKey::from_secret(secret),
        )
        .unwrap()
    }

    #[test]
    fn accepts_token_signed_with_the_same_secret() {
        let token = mint(json!({ "userId": "x" }), b"segredo");
        assert!(Hs256Verifier::new("segredo").verify(&token).is_ok());
    }

    #[test]
    fn rejects_token_signed_with_another_secret() {
        let token = mint(json!({ "userId": "x" }), b"outro");
        assert_eq!(
            Hs256Verifier::new("segredo").verify(&token),
            Err(AuthError::invalid_token())
        );
    }

    #[test]
    fn rejects_expired_token() {
        let exp = chrono::Utc::now().timestamp() - 3600;
        let token = mint(json!({ "userId": "x", "exp": exp }), b"segredo");
        assert!(Hs256Verifier::new("segredo").verify(&token).is_err());
    }

    #[test]
    fn rejects_garbage() {
        assert!(Hs256Verifier::new("segredo").verify("token.invalido.aqui").is_err());
    }

    #[test]
    fn debug_does_not_leak_the_key() {
        let printed = format!("{:?}", Hs256Verifier::new("segredo"));
        assert!(!printed.contains("segredo"));
    }
}
