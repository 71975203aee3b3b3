//! The closed set of entity kinds.

use std::fmt;
use std::str::FromStr;

use crate::TagError;

/// The category of entity a tag refers to.
///
/// The set is closed: dispatch on the prefix token of a tag string is an
/// exhaustive match, not a lookup in an extensible registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
    Machine,
    Unit,
    Application,
    Relation,
    Environment,
    User,
    Network,
    Action,
}

impl Kind {
    /// Every kind, in declaration order.
    pub const ALL: [Kind; 8] = [
        Kind::Machine,
        Kind::Unit,
        Kind::Application,
        Kind::Relation,
        Kind::Environment,
        Kind::User,
        Kind::Network,
        Kind::Action,
    ];

    /// The prefix token used in tag strings.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Kind::Machine => "machine",
            Kind::Unit => "unit",
            Kind::Application => "application",
            Kind::Relation => "relation",
            Kind::Environment => "environment",
            Kind::User => "user",
            Kind::Network => "network",
            Kind::Action => "action",
        }
    }

    /// Looks up a kind by its prefix token. Matching is case-sensitive.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "machine" => Some(Kind::Machine),
            "unit" => Some(Kind::Unit),
            "application" => Some(Kind::Application),
            "relation" => Some(Kind::Relation),
            "environment" => Some(Kind::Environment),
            "user" => Some(Kind::User),
            "network" => Some(Kind::Network),
            "action" => Some(Kind::Action),
            _ => None,
        }
    }

    /// What the id of this kind is called in error messages.
    #[must_use]
    pub const fn id_noun(&self) -> &'static str {
        match self {
            Kind::Machine => "machine id",
            Kind::Unit => "unit name",
            Kind::Application => "application name",
            Kind::Relation => "relation key",
            Kind::Environment => "environment uuid",
            Kind::User => "user name",
            Kind::Network => "network name",
            Kind::Action => "action id",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| TagError::UnknownKind {
            tag: s.to_string(),
            kind: s.to_string(),
        })
    }
}
