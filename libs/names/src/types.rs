//! Tag definitions for every kind whose id is a single string.
//!
//! Action tags carry a structured id and live in their own module.

use uuid::Uuid;

use crate::grammar;
use crate::macros::define_tag;
use crate::TagError;

// =============================================================================
// Machines
// =============================================================================

define_tag!(
    /// A tag for a machine or a container nested in one, e.g. `10/lxc/1`.
    MachineTag, Machine, id, grammar::is_valid_machine, grammar::MACHINE
);

impl MachineTag {
    /// Returns true if this machine is a container inside another machine.
    #[must_use]
    pub fn is_container(&self) -> bool {
        self.id.contains('/')
    }

    /// Returns the tag of the machine hosting this container.
    #[must_use]
    pub fn parent(&self) -> Option<MachineTag> {
        let (rest, _) = self.id.rsplit_once('/')?;
        let (parent, _) = rest.rsplit_once('/')?;
        Some(MachineTag {
            id: parent.to_string(),
        })
    }

    /// Returns the container type of this machine, e.g. `lxc`.
    #[must_use]
    pub fn container_type(&self) -> Option<&str> {
        let (rest, _) = self.id.rsplit_once('/')?;
        rest.rsplit_once('/').map(|(_, kind)| kind)
    }

    /// Returns the last number in the id: the container number for a
    /// container, or the whole id for a top-level machine.
    #[must_use]
    pub fn child_id(&self) -> &str {
        self.id.rsplit('/').next().unwrap_or(&self.id)
    }
}

// =============================================================================
// Applications and Units
// =============================================================================

define_tag!(
    /// A tag for an application (also called a service).
    ApplicationTag, Application, name, grammar::is_valid_application, grammar::IDENTITY
);

impl ApplicationTag {
    /// Returns the application name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

define_tag!(
    /// A tag for a unit of an application, e.g. `mysql/1`.
    UnitTag, Unit, name, grammar::is_valid_unit, grammar::UNIT
);

impl UnitTag {
    /// Returns the unit number.
    #[must_use]
    pub fn number(&self) -> u32 {
        self.name
            .rsplit_once('/')
            .and_then(|(_, number)| number.parse().ok())
            .unwrap_or_default()
    }

    /// Returns the name of the application this unit belongs to.
    #[must_use]
    pub fn application_name(&self) -> &str {
        self.name
            .split_once('/')
            .map_or(self.name.as_str(), |(application, _)| application)
    }

    /// Returns the tag of the application this unit belongs to.
    #[must_use]
    pub fn application_tag(&self) -> ApplicationTag {
        ApplicationTag {
            name: self.application_name().to_string(),
        }
    }
}

/// Returns the application name for a unit name, e.g. `mysql` for `mysql/1`.
pub fn unit_application(unit_name: &str) -> Result<String, TagError> {
    UnitTag::try_new(unit_name).map(|tag| tag.application_name().to_string())
}

// =============================================================================
// Relations
// =============================================================================

define_tag!(
    /// A tag for a relation, keyed by its endpoints, e.g. `wordpress:db mysql:server`.
    RelationTag, Relation, key, grammar::is_valid_relation, grammar::RELATION
);

impl RelationTag {
    /// Returns the `(application, relation)` pairs of the endpoints.
    #[must_use]
    pub fn endpoints(&self) -> Vec<(&str, &str)> {
        self.key
            .split(' ')
            .filter_map(|endpoint| endpoint.split_once(':'))
            .collect()
    }

    /// Returns true if this is a peer relation, which has a single endpoint.
    #[must_use]
    pub fn is_peer(&self) -> bool {
        !self.key.contains(' ')
    }
}

// =============================================================================
// Environments and Users
// =============================================================================

define_tag!(
    /// A tag for an environment. The id is opaque but usually a UUID.
    EnvironTag, Environment, uuid, grammar::is_valid_environment, grammar::IDENTITY
);

impl EnvironTag {
    /// Returns the id as a UUID, if it is one.
    #[must_use]
    pub fn uuid(&self) -> Option<Uuid> {
        Uuid::try_parse(&self.uuid).ok()
    }
}

define_tag!(
    /// A tag for a user, optionally qualified by a domain: `bob@example.com`.
    UserTag, User, name, grammar::is_valid_user, grammar::IDENTITY
);

impl UserTag {
    /// The domain that unqualified users belong to.
    pub const LOCAL_DOMAIN: &'static str = "local";

    /// Returns the user name without the domain.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name
            .split_once('@')
            .map_or(self.name.as_str(), |(name, _)| name)
    }

    /// Returns the domain, if the name is qualified.
    #[must_use]
    pub fn domain(&self) -> Option<&str> {
        self.name.split_once('@').map(|(_, domain)| domain)
    }

    /// Returns true if the user has no domain or the local domain.
    #[must_use]
    pub fn is_local(&self) -> bool {
        self.domain().is_none_or(|domain| domain == Self::LOCAL_DOMAIN)
    }
}

// =============================================================================
// Networks
// =============================================================================

define_tag!(
    /// A tag for a network.
    NetworkTag, Network, name, grammar::is_valid_network, grammar::IDENTITY
);

// =============================================================================
// Tests
// =============================================================================
