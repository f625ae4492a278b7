//! Route-level role gates.

use axum::{
    Router,
    extract::{Request, State},
    middleware::{self, Next},
    response::Response,
};

use oficina_auth::{Actor, AuthError, Role, require_any_role};

use crate::app::errors::ApiError;

#[derive(Debug, Clone, Copy)]
struct RequiredRoles(&'static [Role]);

/// Restrict every route of `router` to actors holding one of `roles`.
///
/// Must sit behind [`crate::middleware::auth_middleware`]; a request reaching it
/// without an actor is answered with 401.
///
/// ```ignore
/// let staff = authz::require_roles(routes::identidade::staff_router(), &[Role::Administrador]);
/// ```
pub fn require_roles(router: Router, roles: &'static [Role]) -> Router {
    router.route_layer(middleware::from_fn_with_state(
        RequiredRoles(roles),
        role_guard,
    ))
}

async fn role_guard(
    State(RequiredRoles(roles)): State<RequiredRoles>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let actor = req
        .extensions()
        .get::<Actor>()
        .ok_or_else(AuthError::invalid_token)?;

    require_any_role(actor, roles)?;

    Ok(next.run(req).await)
}
