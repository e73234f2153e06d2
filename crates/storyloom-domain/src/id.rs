//! Record identifiers based on UUIDv7
//!
//! UUIDv7 keeps identifiers sortable by creation time, which is the order
//! the workspace lists stories and trash entries in.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(u128);

        impl $name {
            /// Generate a new UUIDv7-based identifier
            pub fn new() -> Self {
                Self(uuid::Uuid::now_v7().as_u128())
            }

            /// Create an identifier from a raw u128 value
            pub fn from_value(value: u128) -> Self {
                Self(value)
            }

            /// Parse an identifier from its hyphenated UUID string
            pub fn from_string(s: &str) -> Result<Self, String> {
                uuid::Uuid::parse_str(s)
                    .map(|u| Self(u.as_u128()))
                    .map_err(|e| format!("Invalid {} string: {}", stringify!($name), e))
            }

            /// Get the raw u128 value
            pub fn value(&self) -> u128 {
                self.0
            }

            /// Milliseconds since the Unix epoch encoded in the UUIDv7
            pub fn timestamp(&self) -> u64 {
                (self.0 >> 80) as u64
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", uuid::Uuid::from_u128(self.0))
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                Self::from_string(&s).map_err(serde::de::Error::custom)
            }
        }
    };
}

record_id!(
    /// Identifier of a [`Story`](crate::Story)
    StoryId
);
record_id!(
    /// Identifier of a [`Chapter`](crate::Chapter)
    ChapterId
);
record_id!(
    /// Identifier of a [`Character`](crate::Character)
    CharacterId
);
record_id!(
    /// Identifier of a [`Relationship`](crate::Relationship)
    RelationshipId
);
record_id!(
    /// Identifier of an [`Outline`](crate::Outline)
    OutlineId
);
record_id!(
    /// Identifier of a [`TrashItem`](crate::TrashItem)
    TrashId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_ordering() {
        let id1 = StoryId::from_value(1000);
        let id2 = StoryId::from_value(2000);
        assert!(id1 < id2);
    }

    #[test]
    fn test_id_chronological() {
        let id1 = ChapterId::new();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let id2 = ChapterId::new();

        assert!(id1 < id2, "Earlier UUIDv7 should be less than later UUIDv7");
        assert!(id1.timestamp() <= id2.timestamp());
    }

    #[test]
    fn test_id_display_and_parse() {
        let id = CharacterId::new();
        let id_str = id.to_string();
        assert_eq!(id_str.len(), 36);
        assert_eq!(CharacterId::from_string(&id_str).unwrap(), id);
    }

    #[test]
    fn test_id_invalid_string() {
        assert!(TrashId::from_string("not-a-valid-uuid").is_err());
        assert!(TrashId::from_string("").is_err());
    }

    #[test]
    fn test_id_serializes_as_string() {
        let id = OutlineId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));

        let back: OutlineId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
