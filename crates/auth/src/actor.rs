use std::collections::HashSet;

use oficina_core::{ClienteId, UsuarioId};

use crate::Role;

/// The authenticated principal of a request.
///
/// Only [`crate::ActorFactory`] builds actors, which guarantees a valid user id
/// and at least one known role. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    usuario_id: UsuarioId,
    cliente_id: Option<ClienteId>,
    roles: HashSet<Role>,
}

impl Actor {
    pub(crate) fn new(
        usuario_id: UsuarioId,
        cliente_id: Option<ClienteId>,
        roles: HashSet<Role>,
    ) -> Self {
        debug_assert!(!roles.is_empty());
        Self {
            usuario_id,
            cliente_id,
            roles,
        }
    }

    pub fn usuario_id(&self) -> UsuarioId {
        self.usuario_id
    }

    /// Customer record the user is linked to, if any.
    pub fn cliente_id(&self) -> Option<ClienteId> {
        self.cliente_id
    }

    pub fn roles(&self) -> &HashSet<Role> {
        &self.roles
    }

    /// Roles ordered by their numeric id, for stable output.
    pub fn sorted_roles(&self) -> Vec<Role> {
        let mut roles: Vec<Role> = self.roles.iter().copied().collect();
        roles.sort_by_key(Role::id);
        roles
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        roles.iter().any(|r| self.roles.contains(r))
    }
}
