//! Fighter roster
//!
//! The roster owns the authoritative stat table and hands out fresh
//! `Character` instances. It never keeps the instances it creates, so no
//! health or escalated attack survives into the next playthrough.

pub mod catalog;
pub mod loader;

pub use catalog::{builtin_stats, CharacterStats, BUILTIN_CATALOG};
pub use loader::RosterFile;

use crate::combat::Character;
use crate::core::error::{ArenaError, Result};
use crate::core::types::CharacterId;
use std::collections::HashMap;

/// Catalog of selectable fighters
#[derive(Debug, Clone)]
pub struct Roster {
    /// Stats in declaration order
    entries: Vec<CharacterStats>,
    /// Map from id to position in `entries`
    by_id: HashMap<CharacterId, usize>,
}

impl Roster {
    /// Build a roster from stat records, rejecting duplicates and bad stats
    pub fn new(entries: Vec<CharacterStats>) -> Result<Self> {
        if entries.is_empty() {
            return Err(ArenaError::InvalidRoster("roster has no characters".into()));
        }

        let mut by_id = HashMap::with_capacity(entries.len());
        for (index, stats) in entries.iter().enumerate() {
            stats.validate().map_err(ArenaError::InvalidRoster)?;
            if by_id.insert(stats.id.clone(), index).is_some() {
                return Err(ArenaError::InvalidRoster(format!(
                    "duplicate character: {}",
                    stats.id
                )));
            }
        }

        Ok(Self { entries, by_id })
    }

    /// The four built-in fighters
    pub fn builtin() -> Self {
        let entries = builtin_stats();
        let by_id = entries
            .iter()
            .enumerate()
            .map(|(index, stats)| (stats.id.clone(), index))
            .collect();
        Self { entries, by_id }
    }

    /// Ids in declaration order
    pub fn list_character_ids(&self) -> Vec<CharacterId> {
        self.entries.iter().map(|stats| stats.id.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: &CharacterId) -> bool {
        self.by_id.contains_key(id)
    }

    /// Stat record for an id
    pub fn stats(&self, id: &CharacterId) -> Result<&CharacterStats> {
        self.by_id
            .get(id)
            .map(|&index| &self.entries[index])
            .ok_or_else(|| ArenaError::UnknownCharacter(id.clone()))
    }

    /// Construct a fresh instance at full health and base attack
    pub fn create(&self, id: &CharacterId) -> Result<Character> {
        let stats = self.stats(id)?;
        Ok(Character::new(stats.clone()))
    }

    /// One fresh instance per catalog entry, in declaration order
    pub fn populate(&self) -> Vec<Character> {
        self.entries.iter().cloned().map(Character::new).collect()
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::builtin()
    }
}
