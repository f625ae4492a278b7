use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};

use oficina_auth::{ActorFactory, Hs256Verifier};

use crate::app::errors::ApiError;

#[derive(Clone, Debug)]
pub struct AuthState {
    pub factory: Arc<ActorFactory>,
    /// Set when this service verifies signatures itself (`OFICINA_JWT_SECRET`).
    pub verifier: Option<Arc<Hs256Verifier>>,
}

impl AuthState {
    pub fn new(jwt_secret: Option<&str>) -> Self {
        Self {
            factory: Arc::new(ActorFactory::new()),
            verifier: jwt_secret.map(|s| Arc::new(Hs256Verifier::new(s))),
        }
    }
}

/// Derive the request's [`oficina_auth::Actor`] from its bearer token and
/// store it in the request extensions.
///
/// Order: decode (400 when malformed), then the signature when a secret is
/// configured, then the claim policy. An unsigned caller never sees policy messages.
pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer(req.headers());

    let claims = state.factory.decode(token).inspect_err(|err| {
        tracing::warn!(error = %err, "bearer token rejected");
    })?;

    if let (Some(verifier), Some(token)) = (&state.verifier, token) {
        verifier.verify(token)?;
    }

    let actor = state.factory.create_from_claims(&claims).inspect_err(|err| {
        tracing::warn!(error = %err, "bearer token rejected");
    })?;

    tracing::debug!(usuario_id = %actor.usuario_id(), "actor established");
    req.extensions_mut().insert(actor);

    Ok(next.run(req).await)
}

/// `Authorization: Bearer <token>` → `<token>`.
///
/// Any other shape (missing header, other scheme, non-ASCII) yields `None`,
/// which the factory treats as an absent token.
fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
}
