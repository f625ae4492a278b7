use axum::{Router, routing::get};

use oficina_auth::Role;

use crate::authz;

pub mod identidade;
pub mod system;

/// Router for all authenticated endpoints.
pub fn router() -> Router {
    let staff = authz::require_roles(identidade::staff_router(), &[Role::Administrador]);

    Router::new().nest(
        "/api/identidade",
        Router::new().route("/me", get(identidade::me)).merge(staff),
    )
}
