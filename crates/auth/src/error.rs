use thiserror::Error;

use oficina_core::DomainError;

pub const MSG_INVALID_TOKEN: &str = "Token JWT inválido";
pub const MSG_INVALID_USER_ID: &str = "Token deve conter userId válido";
pub const MSG_MISSING_ROLES: &str = "Token deve conter pelo menos uma role";

/// Failure to derive an actor from a bearer token.
///
/// `TokenMalformed` is a structural problem with the token string itself;
/// `Unauthorized` is a policy failure (absent token, missing or invalid claims).
/// Callers answer the first with 400 and the second with 401.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("{0}")]
    TokenMalformed(String),

    #[error("{0}")]
    Unauthorized(String),
}

impl AuthError {
    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn invalid_token() -> Self {
        Self::unauthorized(MSG_INVALID_TOKEN)
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }

    pub fn message(&self) -> &str {
        match self {
            Self::TokenMalformed(m) | Self::Unauthorized(m) => m,
        }
    }
}

impl From<AuthError> for DomainError {
    fn from(value: AuthError) -> Self {
        match value {
            AuthError::TokenMalformed(msg) => DomainError::InvalidInput(msg),
            AuthError::Unauthorized(msg) => DomainError::Unauthorized(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oficina_core::ErrorType;

    #[test]
    fn unauthorized_maps_to_unauthorized_domain_error() {
        let err: DomainError = AuthError::invalid_token().into();
        assert_eq!(err.error_type(), ErrorType::Unauthorized);
        assert_eq!(err.message(), MSG_INVALID_TOKEN);
    }

    #[test]
    fn malformed_maps_to_invalid_input() {
        let err: DomainError = AuthError::TokenMalformed("Unable to decode token".into()).into();
        assert_eq!(err.error_type(), ErrorType::InvalidInput);
    }
}
