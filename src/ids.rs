//! Identifier types.
//!
//! Abilities, classes, levels and combatants are all referred to by
//! interned string identifiers. Each kind gets its own newtype so a
//! `ClassId` can never be passed where a `LevelId` is expected. All of
//! them use `Arc<str>` for cheap cloning and fast comparison, and
//! serialize as plain strings.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::sync::Arc;

macro_rules! interned_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
        pub struct $name(Arc<str>);

        impl $name {
            #[doc = concat!("Create a new `", stringify!($name), "` from a string slice.")]
            pub fn new(s: &str) -> Self {
                Self(Arc::from(s))
            }

            /// Get the string representation of this identifier.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Whether the identifier is empty or whitespace only.
            pub fn is_blank(&self) -> bool {
                self.0.trim().is_empty()
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(Arc::from(s))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                self.0.as_ref().serialize(serializer)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Ok($name::from(s))
            }
        }
    };
}

interned_id!(
    /// Identifier of an ability (a "power").
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tactica::AbilityId;
    ///
    /// let slash = AbilityId::new("slash");
    /// let slash2: AbilityId = "slash".into();
    /// assert_eq!(slash, slash2);
    /// ```
    AbilityId
);

interned_id!(
    /// Identifier of a character class track.
    ClassId
);

interned_id!(
    /// Identifier of a single level-up benefit within a class.
    LevelId
);

interned_id!(
    /// Identifier of a combatant entity.
    CombatantId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let a = ClassId::new("knight");
        let b: ClassId = String::from("knight").into();
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "knight");
        assert_eq!(a.to_string(), "knight");
    }

    #[test]
    fn test_id_ordering() {
        assert!(LevelId::new("a1") < LevelId::new("b1"));
    }

    #[test]
    fn test_blank_id() {
        assert!(ClassId::new("").is_blank());
        assert!(ClassId::new("   ").is_blank());
        assert!(!ClassId::new("mage").is_blank());
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = AbilityId::new("fireball");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"fireball\"");
        let back: AbilityId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
