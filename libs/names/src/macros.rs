//! Macros for defining tag types.

/// Macro to define a tag type whose id is a single validated string.
///
/// This generates a newtype-like struct holding the canonical id with:
/// - A `KIND` constant
/// - `new()` which panics on an invalid id, and `try_new()` which doesn't
/// - `parse()` to parse from a tag string via [`crate::parse_tag`]
/// - `Display` and `FromStr` implementations using the tag-string form
/// - `Serialize` and `Deserialize` implementations using the tag-string form
/// - Conversions to and from [`crate::Tag`]
///
/// # Example
///
/// ```ignore
/// define_tag!(
///     /// A tag for a network.
///     NetworkTag, Network, name, grammar::is_valid_network, grammar::IDENTITY
/// );
///
/// let tag = NetworkTag::new("eth0");
/// let parsed: NetworkTag = "network-eth0".parse()?;
/// ```
macro_rules! define_tag {
    (
        $(#[$meta:meta])*
        $name:ident, $variant:ident, $field:ident, $valid:path, $flattening:path
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name {
            $field: String,
        }

        impl $name {
            /// The kind of entity this tag refers to.
            pub const KIND: $crate::Kind = $crate::Kind::$variant;

            /// Creates a tag from a trusted id.
            ///
            /// # Panics
            ///
            /// Panics if `id` is not valid for this kind. Use
            /// [`Self::try_new`] or [`Self::parse`] for untrusted input.
            #[must_use]
            pub fn new(id: &str) -> Self {
                Self::try_new(id).unwrap_or_else(|err| panic!("{err}"))
            }

            /// Creates a tag from an id, returning an error if it is invalid.
            pub fn try_new(id: &str) -> Result<Self, $crate::TagError> {
                if !$valid(id) {
                    return Err($crate::TagError::InvalidId {
                        kind: Self::KIND,
                        id: id.to_string(),
                    });
                }
                Ok(Self {
                    $field: id.to_string(),
                })
            }

            /// Parses a tag string of this kind.
            pub fn parse(tag: &str) -> Result<Self, $crate::TagError> {
                let parsed = $crate::parse_tag(tag)?;
                Self::try_from(parsed).map_err(|other| $crate::TagError::KindMismatch {
                    tag: tag.to_string(),
                    expected: Self::KIND,
                    actual: other.kind(),
                })
            }

            /// Returns the canonical id.
            #[must_use]
            pub fn id(&self) -> &str {
                &self.$field
            }

            /// Returns the kind of this tag.
            #[must_use]
            pub const fn kind(&self) -> $crate::Kind {
                Self::KIND
            }

            /// Builds the tag from the id part of a tag string.
            pub(crate) fn from_flat(flat: &str) -> Option<Self> {
                let id = $flattening.unflatten(flat)?;
                $valid(&id).then_some(Self { $field: id })
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}-{}", Self::KIND, $flattening.flatten(&self.$field))
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::TagError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl From<$name> for $crate::Tag {
            fn from(tag: $name) -> Self {
                $crate::Tag::$variant(tag)
            }
        }

        impl TryFrom<$crate::Tag> for $name {
            type Error = $crate::Tag;

            fn try_from(tag: $crate::Tag) -> Result<Self, Self::Error> {
                match tag {
                    $crate::Tag::$variant(inner) => Ok(inner),
                    other => Err(other),
                }
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.collect_str(self)
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Self::parse(&s).map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use define_tag;
