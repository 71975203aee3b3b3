//! Action tags: records of actions queued against a unit.
//!
//! An action id joins the owning unit's name and a per-unit sequence number
//! with [`MARKER`], e.g. `mysql/1_a_321`. Every action of a unit shares the
//! `<unit><marker>` prefix, so tag strings can be filtered by unit, and the
//! sequence keeps them unique.

use std::fmt;
use std::str::FromStr;

use crate::grammar;
use crate::{Kind, Tag, TagError, UnitTag};

/// The token joining an action's unit name and its sequence number.
///
/// It can never occur in a unit name (unit names contain no `_`), so an
/// action id splits into unit and sequence in exactly one way.
pub const MARKER: &str = "_a_";

/// A tag for an action queued against a unit.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ActionTag {
    unit: UnitTag,
    sequence: u32,
}

impl ActionTag {
    /// The kind of entity this tag refers to.
    pub const KIND: Kind = Kind::Action;

    /// Creates the tag for the `sequence`th action of `unit`.
    #[must_use]
    pub const fn new(unit: UnitTag, sequence: u32) -> Self {
        Self { unit, sequence }
    }

    /// Creates a tag from a trusted action id such as `mysql/1_a_321`.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a valid action id.
    #[must_use]
    pub fn from_id(id: &str) -> Self {
        Self::try_from_id(id).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Creates a tag from an action id, returning an error if it is invalid.
    pub fn try_from_id(id: &str) -> Result<Self, TagError> {
        parse_action_id(id).ok_or_else(|| TagError::InvalidId {
            kind: Self::KIND,
            id: id.to_string(),
        })
    }

    /// Parses an action tag string such as `action-mysql-1_a_321`.
    pub fn parse(tag: &str) -> Result<Self, TagError> {
        let parsed = crate::parse_tag(tag)?;
        Self::try_from(parsed).map_err(|other| TagError::KindMismatch {
            tag: tag.to_string(),
            expected: Self::KIND,
            actual: other.kind(),
        })
    }

    /// Returns the unit the action is queued for.
    #[must_use]
    pub fn unit_tag(&self) -> &UnitTag {
        &self.unit
    }

    /// Returns the per-unit sequence number.
    #[must_use]
    pub const fn sequence(&self) -> u32 {
        self.sequence
    }

    /// Returns the canonical action id, e.g. `mysql/1_a_321`.
    #[must_use]
    pub fn id(&self) -> String {
        format!("{}{MARKER}{}", self.unit.id(), self.sequence)
    }

    /// Returns the kind of this tag.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        Self::KIND
    }

    /// Returns the tag of the next action for the same unit, or `None` once
    /// the sequence is exhausted.
    #[must_use]
    pub fn next(&self) -> Option<Self> {
        let sequence = self.sequence.checked_add(1)?;
        Some(Self::new(self.unit.clone(), sequence))
    }

    /// Returns the tag-string prefix shared by every action of `unit`,
    /// e.g. `action-mysql-1_a_`.
    #[must_use]
    pub fn unit_prefix(unit: &UnitTag) -> String {
        format!("{}-{}{MARKER}", Self::KIND, grammar::UNIT.flatten(unit.id()))
    }

    /// Builds the tag from the id part of a tag string, where the unit name
    /// is flattened the same way a unit tag's is.
    pub(crate) fn from_flat(flat: &str) -> Option<Self> {
        split_action(flat, UnitTag::from_flat)
    }
}

/// Parses a canonical action id such as `mysql/1_a_321`.
///
/// Returns `None` unless the id holds the marker exactly once, the part
/// before it is a valid unit name, and the part after it is a canonical
/// 32-bit sequence number.
pub fn parse_action_id(id: &str) -> Option<ActionTag> {
    split_action(id, |unit| UnitTag::try_new(unit).ok())
}

/// Returns true if `id` is a valid canonical action id.
pub fn is_action(id: &str) -> bool {
    parse_action_id(id).is_some()
}

/// Returns true if `id` is a valid canonical action id.
///
/// Same as [`is_action`], named to match the `is_valid_*` predicates of the
/// other kinds so callers can dispatch over every kind uniformly.
pub fn is_valid_action(id: &str) -> bool {
    is_action(id)
}

fn split_action(s: &str, unit: impl FnOnce(&str) -> Option<UnitTag>) -> Option<ActionTag> {
    let mut parts = s.split(MARKER);
    let (Some(unit_part), Some(sequence_part), None) = (parts.next(), parts.next(), parts.next())
    else {
        return None;
    };
    let unit = unit(unit_part)?;
    let sequence = parse_sequence(sequence_part)?;
    Some(ActionTag::new(unit, sequence))
}

/// Parses a sequence number in canonical decimal form: at least one digit,
/// no sign, no leading zero unless the value is zero, fits in 32 bits.
fn parse_sequence(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if s.len() > 1 && s.starts_with('0') {
        return None;
    }
    s.parse().ok()
}

impl fmt::Display for ActionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = grammar::UNIT.flatten(self.unit.id());
        write!(f, "{}-{unit}{MARKER}{}", Self::KIND, self.sequence)
    }
}

impl FromStr for ActionTag {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<ActionTag> for Tag {
    fn from(tag: ActionTag) -> Self {
        Tag::Action(tag)
    }
}

impl TryFrom<Tag> for ActionTag {
    type Error = Tag;

    fn try_from(tag: Tag) -> Result<Self, Self::Error> {
        match tag {
            Tag::Action(inner) => Ok(inner),
            other => Err(other),
        }
    }
}

impl serde::Serialize for ActionTag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for ActionTag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
