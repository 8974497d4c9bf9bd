//! Access and progression rules for The Admins unit console.
//!
//! Everything in this crate is pure: the role enumeration and its
//! capabilities, the destination policy table, the route guard state
//! machine, and the rank ladder. No I/O lives here; the `admins-console`
//! crate wires these rules to the backend.

pub mod guard;
pub mod identity;
pub mod policy;
pub mod rank;
pub mod role;

pub use guard::{PublicDecision, RouteDecision, SessionSnapshot};
pub use identity::Identity;
pub use policy::{permits, Access, Destination};
pub use rank::{progression, RankProgress, RankTier};
pub use role::{Capability, Role};
