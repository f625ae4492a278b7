use serde::Serialize;
use thiserror::Error;

/// Authorization category granted to an actor.
///
/// Closed set: tokens carrying any other role name are rejected outright.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Role {
    Administrador,
    Cliente,
    Sistema,
}

/// A role claim value that is not one of the known [`Role`] names.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Role '{0}' não é válida. Roles permitidas: {}", allowed_names())]
pub struct InvalidRole(pub String);

impl Role {
    pub const ALL: [Role; 3] = [Role::Administrador, Role::Cliente, Role::Sistema];

    /// Strict, case-sensitive parse of a role name.
    pub fn parse(value: &str) -> Result<Self, InvalidRole> {
        match value {
            "Administrador" => Ok(Self::Administrador),
            "Cliente" => Ok(Self::Cliente),
            "Sistema" => Ok(Self::Sistema),
            other => Err(InvalidRole(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Administrador => "Administrador",
            Self::Cliente => "Cliente",
            Self::Sistema => "Sistema",
        }
    }

    /// Stable numeric id, as stored in the `roles` table.
    pub fn id(&self) -> i32 {
        match self {
            Self::Administrador => 1,
            Self::Cliente => 2,
            Self::Sistema => 3,
        }
    }
}

fn allowed_names() -> String {
    Role::ALL
        .iter()
        .map(Role::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Role {
    type Err = InvalidRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_known_name() {
        for role in Role::ALL {
            assert_eq!(Role::parse(role.as_str()), Ok(role));
            assert_eq!(role.to_string().parse::<Role>(), Ok(role));
        }
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!(Role::parse("administrador").is_err());
        assert!(Role::parse("CLIENTE").is_err());
        assert!(Role::parse(" Sistema").is_err());
    }

    #[test]
    fn numeric_ids_are_not_role_names() {
        assert_eq!(Role::parse("1"), Err(InvalidRole("1".to_string())));
    }

    #[test]
    fn invalid_role_message_lists_allowed_roles() {
        let err = Role::parse("RoleInexistente").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Role 'RoleInexistente' não é válida. Roles permitidas: Administrador, Cliente, Sistema"
        );
    }

    #[test]
    fn ids_match_the_roles_table() {
        let ids: Vec<i32> = Role::ALL.iter().map(Role::id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
