//! `oficina-core` — domain foundation shared by every Oficina crate.
//!
//! Pure domain primitives only: the error taxonomy and strongly-typed ids.

pub mod error;
pub mod id;

pub use error::{DomainError, ErrorType};
pub use id::{ClienteId, UsuarioId};
