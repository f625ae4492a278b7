//! Role and ownership checks run after an [`Actor`] has been established.

use thiserror::Error;

use oficina_core::{ClienteId, DomainError};

use crate::{Actor, Role};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("Acesso negado. Roles necessárias: {}", join_roles(.0))]
    MissingRole(Vec<Role>),

    #[error("Acesso negado ao cliente {0}")]
    ClienteAccessDenied(ClienteId),
}

impl From<AuthzError> for DomainError {
    fn from(value: AuthzError) -> Self {
        DomainError::forbidden(value.to_string())
    }
}

fn join_roles(roles: &[Role]) -> String {
    roles
        .iter()
        .map(Role::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Allow the actor when it holds at least one of `required`.
///
/// An empty `required` list means "any authenticated actor".
///
/// - No IO
/// - No panics
pub fn require_any_role(actor: &Actor, required: &[Role]) -> Result<(), AuthzError> {
    if required.is_empty() || actor.has_any_role(required) {
        Ok(())
    } else {
        Err(AuthzError::MissingRole(required.to_vec()))
    }
}

/// Ownership check for customer-scoped resources.
///
/// Staff (`Administrador`) and `Sistema` actors may reach any cliente; an actor
/// acting only as `Cliente` may reach the record it is linked to.
pub fn ensure_cliente_access(actor: &Actor, cliente_id: ClienteId) -> Result<(), AuthzError> {
    if actor.has_any_role(&[Role::Administrador, Role::Sistema]) {
        return Ok(());
    }

    match actor.cliente_id() {
        Some(own) if actor.has_role(Role::Cliente) && own == cliente_id => Ok(()),
        _ => Err(AuthzError::ClienteAccessDenied(cliente_id)),
    }
}
