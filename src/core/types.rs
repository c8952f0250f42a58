//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a roster character (its display name)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterId(pub String);

impl CharacterId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CharacterId {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for CharacterId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Hit points. Signed: a defeated character sits at zero or below.
pub type Health = i32;

/// Damage dealt by a single blow
pub type Damage = i32;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_id_display() {
        let id = CharacterId::from("Darth Maul");
        assert_eq!(id.to_string(), "Darth Maul");
        assert_eq!(id.as_str(), "Darth Maul");
    }

    #[test]
    fn test_character_id_from_string() {
        let id: CharacterId = String::from("Luke Skywalker").into();
        assert_eq!(id, CharacterId::new("Luke Skywalker"));
    }
}
