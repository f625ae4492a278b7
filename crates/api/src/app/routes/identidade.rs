use axum::{Extension, Json, Router, routing::get};

use oficina_auth::{Actor, Role};

use crate::app::dto::{ActorResponse, RoleResponse};

/// Administrador-only endpoints; gated by the caller.
pub fn staff_router() -> Router {
    Router::new().route("/roles", get(list_roles))
}

/// GET /api/identidade/me - the actor derived from the bearer token
pub async fn me(Extension(actor): Extension<Actor>) -> Json<ActorResponse> {
    Json(ActorResponse::from(&actor))
}

/// GET /api/identidade/roles - the closed role catalog
pub async fn list_roles() -> Json<Vec<RoleResponse>> {
    Json(Role::ALL.into_iter().map(RoleResponse::from).collect())
}
