//! Load rosters from TOML files
//!
//! ```toml
//! [[character]]
//! name = "Obi-Wan Kenobi"
//! image = "Assets/Images/obiwan.jpg"
//! health = 125
//! attack = 12
//! counter = 23
//! ```

use crate::core::error::Result;
use crate::roster::{CharacterStats, Roster};
use serde::Deserialize;
use std::path::Path;

/// On-disk roster layout
#[derive(Debug, Clone, Deserialize)]
pub struct RosterFile {
    #[serde(rename = "character", default)]
    pub characters: Vec<CharacterStats>,
}

impl Roster {
    /// Parse and validate a roster from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: RosterFile = toml::from_str(content)?;
        Roster::new(file.characters)
    }

    /// Load a roster from a TOML file on disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let roster = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded {} characters from {}", roster.len(), path.display());
        Ok(roster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ArenaError;
    use crate::core::types::CharacterId;

    const TWO_FIGHTERS: &str = r#"
[[character]]
name = "Obi-Wan Kenobi"
image = "Assets/Images/obiwan.jpg"
health = 125
attack = 12
counter = 23

[[character]]
name = "Luke Skywalker"
health = 145
attack = 11
counter = 21
"#;

    #[test]
    fn test_parse_roster() {
        let roster = Roster::from_toml_str(TWO_FIGHTERS).unwrap();
        assert_eq!(roster.len(), 2);

        let luke = roster.create(&CharacterId::from("Luke Skywalker")).unwrap();
        assert_eq!(luke.health(), 145);
        assert_eq!(luke.image(), "");
    }

    #[test]
    fn test_empty_file_is_invalid() {
        let result = Roster::from_toml_str("");
        assert!(matches!(result, Err(ArenaError::InvalidRoster(_))));
    }

    #[test]
    fn test_negative_counter_rejected() {
        let toml = "[[character]]\nname = \"X\"\nhealth = 10\nattack = 1\ncounter = -1\n";
        assert!(matches!(
            Roster::from_toml_str(toml),
            Err(ArenaError::InvalidRoster(_))
        ));
    }

    #[test]
    fn test_missing_field_is_toml_error() {
        let toml = "[[character]]\nname = \"X\"\nhealth = 10\n";
        assert!(matches!(Roster::from_toml_str(toml), Err(ArenaError::TomlError(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = Roster::load(Path::new("does/not/exist.toml"));
        assert!(matches!(result, Err(ArenaError::IoError(_))));
    }
}
