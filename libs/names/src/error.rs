//! Error types for tag parsing and validation.

use thiserror::Error;

use crate::Kind;

/// Errors that can occur when parsing tag strings or validating ids.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TagError {
    /// The string is empty or has no `-` between kind and id.
    #[error("{tag:?} is not a valid tag")]
    Malformed { tag: String },

    /// The prefix token does not name any kind.
    #[error("{tag:?} is not a valid tag: unknown kind {kind:?}")]
    UnknownKind { tag: String, kind: String },

    /// The kind is known but the id does not satisfy its grammar.
    #[error("{tag:?} is not a valid {kind} tag")]
    InvalidTag { tag: String, kind: Kind },

    /// A well-formed tag of a different kind than the one asked for.
    #[error("{tag:?} is not a valid {expected} tag: found {actual} tag")]
    KindMismatch {
        tag: String,
        expected: Kind,
        actual: Kind,
    },

    /// A canonical id rejected by its kind's grammar.
    #[error("{id:?} is not a valid {}", .kind.id_noun())]
    InvalidId { kind: Kind, id: String },
}

impl TagError {
    /// Returns the kind the input was expected to be, when it is known.
    pub fn kind(&self) -> Option<Kind> {
        match self {
            TagError::Malformed { .. } | TagError::UnknownKind { .. } => None,
            TagError::InvalidTag { kind, .. } | TagError::InvalidId { kind, .. } => Some(*kind),
            TagError::KindMismatch { expected, .. } => Some(*expected),
        }
    }

    /// Returns the offending input string.
    pub fn tag(&self) -> &str {
        match self {
            TagError::Malformed { tag }
            | TagError::UnknownKind { tag, .. }
            | TagError::InvalidTag { tag, .. }
            | TagError::KindMismatch { tag, .. } => tag,
            TagError::InvalidId { id, .. } => id,
        }
    }

    /// Returns true if the prefix token named no kind.
    pub fn is_unknown_kind(&self) -> bool {
        matches!(self, TagError::UnknownKind { .. })
    }

    /// Returns true if a valid tag of the wrong kind was supplied.
    pub fn is_kind_mismatch(&self) -> bool {
        matches!(self, TagError::KindMismatch { .. })
    }
}
