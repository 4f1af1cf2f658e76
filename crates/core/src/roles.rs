//! Role names, capability tiers, and the explicit caller identity.
//!
//! Every service operation receives an [`Actor`] instead of looking up a
//! "current user". Roles map onto two capability tiers: support staff act at
//! the author tier, administrators at the administrator tier (which also
//! satisfies author-tier checks).

use crate::error::CoreError;
use crate::types::DbId;

pub const ROLE_ADMINISTRATOR: &str = "administrator";
pub const ROLE_SUPPORT: &str = "support";

/// Permission level required by an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CapabilityTier {
    /// May save, view, and list notes.
    Author,
    /// Additionally may view history, delete notes, and run maintenance.
    Administrator,
}

impl CapabilityTier {
    /// Resolve the tier granted by a role name, if any.
    pub fn for_role(role: &str) -> Option<Self> {
        match role {
            ROLE_ADMINISTRATOR => Some(Self::Administrator),
            ROLE_SUPPORT => Some(Self::Author),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Author => "author",
            Self::Administrator => "administrator",
        }
    }
}

/// The authenticated caller of a service operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub user_id: DbId,
    /// Name recorded as the author of saved notes.
    pub display_name: String,
    pub role: String,
}

impl Actor {
    pub fn new(user_id: DbId, display_name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            user_id,
            display_name: display_name.into(),
            role: role.into(),
        }
    }

    pub fn tier(&self) -> Option<CapabilityTier> {
        CapabilityTier::for_role(&self.role)
    }

    /// Whether this actor holds at least the `required` tier.
    pub fn can(&self, required: CapabilityTier) -> bool {
        self.tier().is_some_and(|tier| tier >= required)
    }

    /// Fail with [`CoreError::Forbidden`] unless the actor holds `required`.
    pub fn require(&self, required: CapabilityTier) -> Result<(), CoreError> {
        if self.can(required) {
            Ok(())
        } else {
            Err(CoreError::Forbidden(format!(
                "Insufficient permissions: {} capability required",
                required.label()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn support_role_is_author_tier() {
        let actor = Actor::new(1, "Sam", ROLE_SUPPORT);
        assert!(actor.can(CapabilityTier::Author));
        assert!(!actor.can(CapabilityTier::Administrator));
    }

    #[test]
    fn administrator_satisfies_both_tiers() {
        let actor = Actor::new(1, "Alex", ROLE_ADMINISTRATOR);
        assert!(actor.can(CapabilityTier::Author));
        assert!(actor.can(CapabilityTier::Administrator));
    }

    #[test]
    fn unknown_role_has_no_tier() {
        let actor = Actor::new(1, "Guest", "subscriber");
        assert_eq!(actor.tier(), None);
        assert_matches!(
            actor.require(CapabilityTier::Author),
            Err(CoreError::Forbidden(_))
        );
    }

    #[test]
    fn forbidden_message_names_the_tier() {
        let actor = Actor::new(1, "Sam", ROLE_SUPPORT);
        let err = actor.require(CapabilityTier::Administrator).unwrap_err();
        assert!(err.to_string().contains("administrator"));
    }
}
