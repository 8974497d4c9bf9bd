use crate::role::Role;

/// A navigable destination in the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    Dashboard,
    Missions,
    Reports,
    Chat,
    Tools,
    Admin,
    Profile,
}

/// The access rule attached to a destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Every authenticated role may enter.
    All,
    /// Only the listed roles may enter.
    Roles(&'static [Role]),
}

/// Roles with operational access (everyone but outsiders).
const OPERATIVES: &[Role] = &[Role::Admin, Role::Tenente, Role::Elite, Role::Soldado];

/// Roles with command access. Tenente has the same access as admin
/// throughout the backend, so the panel follows suit.
const COMMAND: &[Role] = &[Role::Admin, Role::Tenente];

impl Destination {
    /// Where denied and unmatched navigations land.
    pub const DEFAULT: Destination = Destination::Dashboard;

    pub const ALL: [Destination; 7] = [
        Destination::Dashboard,
        Destination::Missions,
        Destination::Reports,
        Destination::Chat,
        Destination::Tools,
        Destination::Admin,
        Destination::Profile,
    ];

    /// Resolves a path to a destination. Anything that does not match a
    /// known destination resolves to `None` and is treated as an unmatched
    /// route by the guard.
    pub fn from_path(path: &str) -> Option<Self> {
        match path.trim_start_matches('/').trim_end_matches('/') {
            "dashboard" => Some(Self::Dashboard),
            "missions" => Some(Self::Missions),
            "reports" => Some(Self::Reports),
            "chat" => Some(Self::Chat),
            "tools" => Some(Self::Tools),
            "admin" => Some(Self::Admin),
            "profile" => Some(Self::Profile),
            _ => None,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Self::Dashboard => "/dashboard",
            Self::Missions => "/missions",
            Self::Reports => "/reports",
            Self::Chat => "/chat",
            Self::Tools => "/tools",
            Self::Admin => "/admin",
            Self::Profile => "/profile",
        }
    }

    /// The static policy table. Defined once; never mutated at runtime.
    pub fn access(&self) -> Access {
        match self {
            Self::Dashboard | Self::Reports | Self::Chat | Self::Profile => Access::All,
            Self::Missions | Self::Tools => Access::Roles(OPERATIVES),
            Self::Admin => Access::Roles(COMMAND),
        }
    }
}

/// Pure lookup: may `role` enter `destination`?
pub fn permits(role: Role, destination: Destination) -> bool {
    match destination.access() {
        Access::All => true,
        Access::Roles(roles) => roles.contains(&role),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn permitted_roles(destination: Destination) -> Vec<Role> {
        Role::ALL.into_iter().filter(|role| permits(*role, destination)).collect()
    }

    #[test]
    fn shared_destinations_admit_every_role() {
        for destination in [Destination::Dashboard, Destination::Reports, Destination::Chat, Destination::Profile] {
            assert_eq!(permitted_roles(destination), Role::ALL.to_vec(), "{destination:?}");
        }
    }

    #[test]
    fn operational_destinations_exclude_externo() {
        for destination in [Destination::Missions, Destination::Tools] {
            assert_eq!(
                permitted_roles(destination),
                vec![Role::Admin, Role::Tenente, Role::Elite, Role::Soldado],
                "{destination:?}"
            );
        }
    }

    #[test]
    fn admin_panel_is_command_only() {
        assert_eq!(permitted_roles(Destination::Admin), vec![Role::Admin, Role::Tenente]);
    }

    #[test]
    fn paths_round_trip() {
        for destination in Destination::ALL {
            assert_eq!(Destination::from_path(destination.path()), Some(destination));
        }
    }

    #[test]
    fn unknown_paths_resolve_to_none() {
        for path in ["/", "", "/settings", "/missions/123", "/Admin", "/dashboard/extra"] {
            assert_eq!(Destination::from_path(path), None, "{path}");
        }
    }

    #[test]
    fn trailing_slash_is_tolerated() {
        assert_eq!(Destination::from_path("/chat/"), Some(Destination::Chat));
    }
}
