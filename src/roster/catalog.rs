//! Stat records and the built-in fighter table

use crate::core::types::{CharacterId, Damage, Health};
use serde::{Deserialize, Serialize};

/// Immutable stats for one roster entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterStats {
    /// Display name, also the unique key
    #[serde(rename = "name")]
    pub id: CharacterId,
    /// Asset reference handed to renderers
    #[serde(default)]
    pub image: String,
    #[serde(rename = "health")]
    pub starting_health: Health,
    #[serde(rename = "attack")]
    pub base_attack: Damage,
    #[serde(rename = "counter")]
    pub counter_attack: Damage,
}

impl CharacterStats {
    pub fn new(
        name: impl Into<String>,
        image: impl Into<String>,
        starting_health: Health,
        base_attack: Damage,
        counter_attack: Damage,
    ) -> Self {
        Self {
            id: CharacterId::new(name),
            image: image.into(),
            starting_health,
            base_attack,
            counter_attack,
        }
    }

    /// Check that every stat is positive
    pub fn validate(&self) -> Result<(), String> {
        if self.id.as_str().trim().is_empty() {
            return Err("character name must not be empty".into());
        }
        if self.starting_health <= 0 {
            return Err(format!("{}: health must be positive", self.id));
        }
        if self.base_attack <= 0 {
            return Err(format!("{}: attack must be positive", self.id));
        }
        if self.counter_attack <= 0 {
            return Err(format!("{}: counter must be positive", self.id));
        }
        Ok(())
    }
}

/// Built-in fighters in declaration order: (name, image, health, attack, counter)
pub const BUILTIN_CATALOG: [(&str, &str, Health, Damage, Damage); 4] = [
    ("Obi-Wan Kenobi", "Assets/Images/obiwan.jpg", 125, 12, 23),
    ("Luke Skywalker", "Assets/Images/lukeskywalker.jpg", 145, 11, 21),
    ("Darth Vader", "Assets/Images/darthvader.jpg", 150, 10, 18),
    ("Darth Maul", "Assets/Images/darthmaul.jpg", 160, 9, 19),
];

/// Stat records for the built-in fighters
pub fn builtin_stats() -> Vec<CharacterStats> {
    BUILTIN_CATALOG
        .iter()
        .map(|&(name, image, hp, atk, ctr)| CharacterStats::new(name, image, hp, atk, ctr))
        .collect()
}
