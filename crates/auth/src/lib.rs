//! `oficina-auth` — authentication/authorization core.
//!
//! Bearer token → [`ClaimSet`] → validated [`Actor`], plus the role and
//! ownership guards applied to that actor. Decoupled from HTTP and storage.

pub mod actor;
pub mod authorize;
pub mod claims;
pub mod decoder;
pub mod error;
pub mod factory;
pub mod roles;
pub mod verify;

pub use actor::Actor;
pub use authorize::{AuthzError, ensure_cliente_access, require_any_role};
pub use claims::ClaimSet;
pub use decoder::{ClaimDecoder, JwtClaimDecoder};
pub use error::AuthError;
pub use factory::ActorFactory;
pub use roles::{InvalidRole, Role};
pub use verify::Hs256Verifier;
