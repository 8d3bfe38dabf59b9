use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// Number of base-36 digits in a generated identifier.
const ID_LEN: usize = 9;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Produce a fresh 9-character lowercase base-36 identifier.
///
/// Uniqueness is practical, not formal: the digits are drawn from UUID v4
/// entropy, and collisions within one session are treated as impossible.
/// There is no ordering or cross-restart guarantee.
#[allow(clippy::cast_possible_truncation)] // bits % 36 always fits
fn short_id() -> String {
    let mut bits = Uuid::new_v4().as_u128();
    let mut out = String::with_capacity(ID_LEN);
    for _ in 0..ID_LEN {
        out.push(ALPHABET[(bits % 36) as usize] as char);
        bits /= 36;
    }
    out
}

/// Error returned when parsing an identifier from a string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseIdError {
    /// The input string was empty.
    #[error("identifier is empty")]
    Empty,
    /// The input contained a character outside `[0-9A-Za-z]`.
    #[error("identifier contains invalid character {0:?}")]
    InvalidChar(char),
}

fn validate(s: &str) -> Result<(), ParseIdError> {
    if s.is_empty() {
        return Err(ParseIdError::Empty);
    }
    if let Some(ch) = s.chars().find(|ch| !ch.is_ascii_alphanumeric()) {
        return Err(ParseIdError::InvalidChar(ch));
    }
    Ok(())
}

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
        pub struct $name(String);

        impl $name {
            /// Generate a fresh identifier.
            #[must_use]
            pub fn generate() -> Self {
                Self(short_id())
            }

            /// View the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                validate(s)?;
                Ok(Self(s.to_owned()))
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                s.serialize_str(&self.0)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(d: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s = String::deserialize(d)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

entity_id!(
    /// Identifier of an epic.
    EpicId
);

entity_id!(
    /// Identifier of a sub-task within an epic.
    SubTaskId
);

entity_id!(
    /// Identifier of a quick hit.
    QuickHitId
);

entity_id!(
    /// Identifier of a collaborator attached to an epic or quick hit.
    CollaboratorId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_short_base36() {
        let id = EpicId::generate();
        assert_eq!(id.as_str().len(), 9);
        assert!(id
            .as_str()
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit()));
    }

    #[test]
    fn generated_ids_do_not_repeat() {
        let a = QuickHitId::generate();
        let b = QuickHitId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn id_roundtrip_through_str() {
        let id = SubTaskId::generate();
        let parsed: SubTaskId = id
            .to_string()
            .parse()
            .unwrap_or_else(|err| panic!("must parse sub-task id: {err}"));
        assert_eq!(parsed, id);
    }

    #[test]
    fn parse_rejects_empty_input() {
        assert_eq!("".parse::<EpicId>(), Err(ParseIdError::Empty));
    }

    #[test]
    fn parse_rejects_non_alphanumeric_input() {
        assert_eq!(
            "e 1".parse::<EpicId>(),
            Err(ParseIdError::InvalidChar(' '))
        );
    }

    #[test]
    fn parse_accepts_short_fixture_style_ids() {
        let parsed: CollaboratorId = "c1"
            .parse()
            .unwrap_or_else(|err| panic!("must parse collaborator id: {err}"));
        assert_eq!(parsed.as_str(), "c1");
    }
}
