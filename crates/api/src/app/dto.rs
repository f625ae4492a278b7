use serde::Serialize;

use oficina_auth::{Actor, Role};

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorResponse {
    pub usuario_id: String,
    pub cliente_id: Option<String>,
    pub roles: Vec<Role>,
}

impl From<&Actor> for ActorResponse {
    fn from(actor: &Actor) -> Self {
        Self {
            usuario_id: actor.usuario_id().to_string(),
            cliente_id: actor.cliente_id().map(|c| c.to_string()),
            roles: actor.sorted_roles(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RoleResponse {
    pub id: i32,
    pub nome: &'static str,
}

impl From<Role> for RoleResponse {
    fn from(role: Role) -> Self {
        Self {
            id: role.id(),
            nome: role.as_str(),
        }
    }
}
