//! The kind-discriminated tag union and the generic tag-string parser.

use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::{
    ActionTag, ApplicationTag, EnvironTag, Kind, MachineTag, NetworkTag, RelationTag, TagError,
    UnitTag, UserTag,
};

/// A typed reference to an entity of any kind.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tag {
    Machine(MachineTag),
    Unit(UnitTag),
    Application(ApplicationTag),
    Relation(RelationTag),
    Environment(EnvironTag),
    User(UserTag),
    Network(NetworkTag),
    Action(ActionTag),
}

impl Tag {
    /// Returns the kind of entity the tag refers to.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Tag::Machine(_) => Kind::Machine,
            Tag::Unit(_) => Kind::Unit,
            Tag::Application(_) => Kind::Application,
            Tag::Relation(_) => Kind::Relation,
            Tag::Environment(_) => Kind::Environment,
            Tag::User(_) => Kind::User,
            Tag::Network(_) => Kind::Network,
            Tag::Action(_) => Kind::Action,
        }
    }

    /// Returns the canonical id, without the kind prefix.
    #[must_use]
    pub fn id(&self) -> String {
        match self {
            Tag::Machine(t) => t.id().to_string(),
            Tag::Unit(t) => t.id().to_string(),
            Tag::Application(t) => t.id().to_string(),
            Tag::Relation(t) => t.id().to_string(),
            Tag::Environment(t) => t.id().to_string(),
            Tag::User(t) => t.id().to_string(),
            Tag::Network(t) => t.id().to_string(),
            Tag::Action(t) => t.id(),
        }
    }

    /// Builds a tag from a kind and a canonical id such as `mysql/1`.
    pub fn from_id(kind: Kind, id: &str) -> Result<Self, TagError> {
        Ok(match kind {
            Kind::Machine => MachineTag::try_new(id)?.into(),
            Kind::Unit => UnitTag::try_new(id)?.into(),
            Kind::Application => ApplicationTag::try_new(id)?.into(),
            Kind::Relation => RelationTag::try_new(id)?.into(),
            Kind::Environment => EnvironTag::try_new(id)?.into(),
            Kind::User => UserTag::try_new(id)?.into(),
            Kind::Network => NetworkTag::try_new(id)?.into(),
            Kind::Action => ActionTag::try_from_id(id)?.into(),
        })
    }

    /// Parses a tag string of any kind. See [`parse_tag`].
    pub fn parse(tag: &str) -> Result<Self, TagError> {
        parse_tag(tag)
    }
}

/// Parses a tag string such as `unit-mysql-1` into a tag of the kind its
/// prefix names.
///
/// The string is split at its first `-`. The token before it selects the
/// kind; the remainder must satisfy that kind's id grammar. No other kind
/// is ever tried.
pub fn parse_tag(tag: &str) -> Result<Tag, TagError> {
    let Some((token, rest)) = tag.split_once('-') else {
        trace!(tag = %tag, "rejected tag without kind separator");
        return Err(TagError::Malformed {
            tag: tag.to_string(),
        });
    };

    let Some(kind) = Kind::from_token(token) else {
        trace!(tag = %tag, kind = token, "rejected tag with unknown kind");
        return Err(TagError::UnknownKind {
            tag: tag.to_string(),
            kind: token.to_string(),
        });
    };

    let parsed = match kind {
        Kind::Machine => MachineTag::from_flat(rest).map(Tag::Machine),
        Kind::Unit => UnitTag::from_flat(rest).map(Tag::Unit),
        Kind::Application => ApplicationTag::from_flat(rest).map(Tag::Application),
        Kind::Relation => RelationTag::from_flat(rest).map(Tag::Relation),
        Kind::Environment => EnvironTag::from_flat(rest).map(Tag::Environment),
        Kind::User => UserTag::from_flat(rest).map(Tag::User),
        Kind::Network => NetworkTag::from_flat(rest).map(Tag::Network),
        Kind::Action => ActionTag::from_flat(rest).map(Tag::Action),
    };

    parsed.ok_or_else(|| {
        trace!(tag = %tag, %kind, "rejected tag with invalid id");
        TagError::InvalidTag {
            tag: tag.to_string(),
            kind,
        }
    })
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::Machine(t) => fmt::Display::fmt(t, f),
            Tag::Unit(t) => fmt::Display::fmt(t, f),
            Tag::Application(t) => fmt::Display::fmt(t, f),
            Tag::Relation(t) => fmt::Display::fmt(t, f),
            Tag::Environment(t) => fmt::Display::fmt(t, f),
            Tag::User(t) => fmt::Display::fmt(t, f),
            Tag::Network(t) => fmt::Display::fmt(t, f),
            Tag::Action(t) => fmt::Display::fmt(t, f),
        }
    }
}

impl FromStr for Tag {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_tag(s)
    }
}

impl serde::Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Tag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_tag(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tags() -> Vec<Tag> {
        vec![
            MachineTag::new("0").into(),
            MachineTag::new("10/lxc/1").into(),
            UnitTag::new("mysql/1").into(),
            UnitTag::new("rabbitmq-server/123").into(),
            ApplicationTag::new("ceph").into(),
            RelationTag::new("wordpress:haproxy").into(),
            RelationTag::new("wordpress:db mysql:server").into(),
            EnvironTag::new("local").into(),
            UserTag::new("admin").into(),
            UserTag::new("bob@example.com").into(),
            NetworkTag::new("eth0").into(),
            ActionTag::from_id("foo/0_a_321").into(),
            ActionTag::from_id("foo-bar/12_a_0").into(),
        ]
    }

    #[test]
    fn test_tag_roundtrip() {
        for tag in sample_tags() {
            let s = tag.to_string();
            let parsed = parse_tag(&s).unwrap();
            assert_eq!(parsed, tag, "roundtrip of {s:?}");
        }
    }

    #[test]
    fn test_tag_string_starts_with_kind() {
        for tag in sample_tags() {
            let prefix = format!("{}-", tag.kind());
            assert!(tag.to_string().starts_with(&prefix), "{tag}");
        }
    }

    #[test]
    fn test_parse_machine_tag_recovers_canonical_id() {
        let tag = parse_tag("machine-10-lxc-1").unwrap();
        assert_eq!(tag, Tag::Machine(MachineTag::new("10/lxc/1")));
        assert_eq!(tag.id(), "10/lxc/1");
    }

    #[test]
    fn test_parse_accepts_canonical_unit_separator() {
        assert_eq!(
            parse_tag("unit-dave/0").unwrap(),
            Tag::Unit(UnitTag::new("dave/0"))
        );
        assert_eq!(
            parse_tag("action-mysql/1_a_3").unwrap(),
            Tag::Action(ActionTag::from_id("mysql/1_a_3"))
        );
        // Re-rendering always uses the flattened form.
        assert_eq!(parse_tag("unit-dave/0").unwrap().to_string(), "unit-dave-0");
    }

    #[test]
    fn test_parse_empty_and_unseparated() {
        for tag in ["", "dave", "machine"] {
            assert_eq!(
                parse_tag(tag).unwrap_err(),
                TagError::Malformed {
                    tag: tag.to_string()
                }
            );
        }
    }

    #[test]
    fn test_parse_unknown_kind() {
        let err = parse_tag("service-dave").unwrap_err();
        assert_eq!(
            err,
            TagError::UnknownKind {
                tag: "service-dave".to_string(),
                kind: "service".to_string()
            }
        );

        let err = parse_tag("-dave").unwrap_err();
        assert!(err.is_unknown_kind());

        let err = parse_tag("Unit-dave-0").unwrap_err();
        assert!(err.is_unknown_kind());
    }

    #[test]
    fn test_parse_invalid_id_names_kind() {
        let cases = [
            ("machine-", Kind::Machine),
            ("machine-01", Kind::Machine),
            ("machine-10/lxc/1", Kind::Machine),
            ("unit-dave", Kind::Unit),
            ("unit-foo-bar/0/1", Kind::Unit),
            ("unit-foo-bar", Kind::Unit),
            ("application-foo-55", Kind::Application),
            ("relation-wordpress", Kind::Relation),
            ("relation-wordpress:db", Kind::Relation),
            ("environment-", Kind::Environment),
            ("user-bob.", Kind::User),
            ("network-eth 0", Kind::Network),
            ("action-foo_a_321", Kind::Action),
            ("action-mysql-1_a_05", Kind::Action),
            ("action-mysql-1_a_4294967296", Kind::Action),
            ("action-mysql/1/2_a_3", Kind::Action),
        ];
        for (tag, kind) in cases {
            assert_eq!(
                parse_tag(tag).unwrap_err(),
                TagError::InvalidTag {
                    tag: tag.to_string(),
                    kind
                },
                "{tag:?}"
            );
        }
    }

    #[test]
    fn test_from_id() {
        assert_eq!(
            Tag::from_id(Kind::Unit, "mysql/1").unwrap().to_string(),
            "unit-mysql-1"
        );
        assert_eq!(
            Tag::from_id(Kind::Action, "mysql/1_a_2").unwrap().to_string(),
            "action-mysql-1_a_2"
        );
        assert_eq!(
            Tag::from_id(Kind::Machine, "lxc").unwrap_err(),
            TagError::InvalidId {
                kind: Kind::Machine,
                id: "lxc".to_string()
            }
        );
    }

    #[test]
    fn test_typed_conversions() {
        let tag: Tag = UnitTag::new("mysql/1").into();
        assert_eq!(UnitTag::try_from(tag.clone()).unwrap(), UnitTag::new("mysql/1"));
        assert_eq!(MachineTag::try_from(tag.clone()).unwrap_err(), tag);
    }

    #[test]
    fn test_tag_json_roundtrip() {
        let tags = sample_tags();
        let json = serde_json::to_string(&tags).unwrap();
        let parsed: Vec<Tag> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, tags);

        let result: Result<Tag, _> = serde_json::from_str(r#""unit-dave""#);
        assert!(result.is_err());
    }
}
