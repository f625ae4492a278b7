//! Claims → validated [`Actor`].

use std::collections::HashSet;

use uuid::Uuid;

use oficina_core::{ClienteId, UsuarioId};

use crate::claims::{CLAIM_CLIENTE_ID, CLAIM_ROLE, CLAIM_USER_ID};
use crate::error::{MSG_INVALID_USER_ID, MSG_MISSING_ROLES};
use crate::{Actor, AuthError, ClaimDecoder, ClaimSet, JwtClaimDecoder, Role};

/// Builds actors from bearer tokens or already-decoded claims.
///
/// Stateless: the same input always yields an equal actor (or the same error).
#[derive(Debug, Clone, Default)]
pub struct ActorFactory<D = JwtClaimDecoder> {
    decoder: D,
}

impl ActorFactory {
    pub fn new() -> Self {
        Self::with_decoder(JwtClaimDecoder::new())
    }
}

impl<D: ClaimDecoder> ActorFactory<D> {
    pub fn with_decoder(decoder: D) -> Self {
        Self { decoder }
    }

    /// Decode `token` and build its actor. Decoder failures pass through unchanged.
    pub fn create_from_token(&self, token: Option<&str>) -> Result<Actor, AuthError> {
        let claims = self.decode(token)?;
        self.create_from_claims(&claims)
    }

    /// Decode step of [`Self::create_from_token`], without any claim policy.
    pub fn decode(&self, token: Option<&str>) -> Result<ClaimSet, AuthError> {
        self.decoder.decode(token).inspect_err(|err| {
            tracing::debug!(reason = %err, "bearer token rejected by decoder");
        })
    }

    /// Validate `claims` and build the actor.
    ///
    /// `userId` and every `role` value are mandatory and strict; `clienteId` is
    /// lenient and silently dropped when it is not a UUID.
    pub fn create_from_claims(&self, claims: &ClaimSet) -> Result<Actor, AuthError> {
        build_actor(claims).inspect_err(|err| {
            tracing::debug!(reason = %err, "actor rejected");
        })
    }
}

fn build_actor(claims: &ClaimSet) -> Result<Actor, AuthError> {
    let usuario_id =
        UsuarioId::from_uuid(require_uuid_claim(claims, CLAIM_USER_ID, MSG_INVALID_USER_ID)?);
    let roles = require_roles(claims)?;
    let cliente_id = optional_uuid_claim(claims, CLAIM_CLIENTE_ID).map(ClienteId::from_uuid);

    Ok(Actor::new(usuario_id, cliente_id, roles))
}

/// Strict: absent, empty or unparsable → `Unauthorized(message)`.
fn require_uuid_claim(claims: &ClaimSet, name: &str, message: &str) -> Result<Uuid, AuthError> {
    claims
        .first(name)
        .and_then(|raw| Uuid::parse_str(raw).ok())
        .ok_or_else(|| AuthError::unauthorized(message))
}

/// Lenient: absent or unparsable → `None`.
fn optional_uuid_claim(claims: &ClaimSet, name: &str) -> Option<Uuid> {
    claims.first(name).and_then(|raw| Uuid::parse_str(raw).ok())
}

/// Every value must be a known role; the first unknown one (in claim order)
/// is the one reported.
fn require_roles(claims: &ClaimSet) -> Result<HashSet<Role>, AuthError> {
    let raw = claims.values(CLAIM_ROLE);
    if raw.is_empty() {
        return Err(AuthError::unauthorized(MSG_MISSING_ROLES));
    }

    let mut roles = HashSet::with_capacity(raw.len());
    for value in raw {
        let role = Role::parse(value).map_err(|e| AuthError::unauthorized(e.to_string()))?;
        roles.insert(role);
    }
    Ok(roles)
}
