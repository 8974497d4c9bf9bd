use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A role held by a unit member.
///
/// This is a closed enumeration; the backend sends the lowercase wire form.
/// `Externo` is an authenticated outsider with access to the reporting and
/// chat surfaces only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Tenente,
    Elite,
    Soldado,
    Externo,
}

/// A finer-grained right that is checked separately from destination
/// visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Change other members' roles and delete accounts.
    ManageUsers,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl Role {
    /// Every role, in rank order (highest first).
    pub const ALL: [Role; 5] = [Role::Admin, Role::Tenente, Role::Elite, Role::Soldado, Role::Externo];

    /// Roles the admin panel can assign. `Externo` is never assigned by
    /// hand; it is the registration default.
    pub const ASSIGNABLE: [Role; 4] = [Role::Admin, Role::Tenente, Role::Elite, Role::Soldado];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Tenente => "tenente",
            Self::Elite => "elite",
            Self::Soldado => "soldado",
            Self::Externo => "externo",
        }
    }

    /// Display label shown next to the member name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Tenente => "TENENTE",
            Self::Elite => "ELITE",
            Self::Soldado => "SOLDADO",
            Self::Externo => "EXTERNO",
        }
    }

    /// Theme color token for the role label.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Admin => "text-accent",
            Self::Tenente => "text-destructive",
            Self::Elite => "text-secondary",
            Self::Soldado => "text-primary",
            Self::Externo => "text-muted-foreground",
        }
    }

    /// Whether the role counts as an active unit member. The ranking and
    /// member counts exclude outsiders.
    pub fn is_member(&self) -> bool {
        !matches!(self, Self::Externo)
    }

    /// Checks whether this role holds the given capability.
    pub fn can(&self, capability: Capability) -> bool {
        match capability {
            Capability::ManageUsers => matches!(self, Self::Admin | Self::Tenente),
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    /// Fails closed: a role string outside the enumeration is an error, not
    /// a default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "tenente" => Ok(Self::Tenente),
            "elite" => Ok(Self::Elite),
            "soldado" => Ok(Self::Soldado),
            "externo" => Ok(Self::Externo),
            _ => Err(UnknownRole(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_form_round_trips() {
        for role in Role::ALL {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.as_str()));
            assert_eq!(serde_json::from_str::<Role>(&json).unwrap(), role);
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn unknown_roles_are_rejected() {
        assert!("ai".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
        assert!("Admin".parse::<Role>().is_err());
        assert!(serde_json::from_str::<Role>("\"root\"").is_err());
    }

    #[test]
    fn only_command_roles_manage_users() {
        assert!(Role::Admin.can(Capability::ManageUsers));
        assert!(Role::Tenente.can(Capability::ManageUsers));
        assert!(!Role::Elite.can(Capability::ManageUsers));
        assert!(!Role::Soldado.can(Capability::ManageUsers));
        assert!(!Role::Externo.can(Capability::ManageUsers));
    }

    #[test]
    fn externo_is_not_a_member() {
        assert!(!Role::Externo.is_member());
        assert!(Role::Soldado.is_member());
    }

    #[test]
    fn externo_is_never_assignable() {
        assert!(!Role::ASSIGNABLE.contains(&Role::Externo));
    }
}
