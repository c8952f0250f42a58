//! Fighter instances
//!
//! A `Character` is a live copy of a roster entry. Its stats are fixed except
//! for current health and current attack, which only change when an exchange
//! report is committed.

use crate::core::types::{CharacterId, Damage, Health};
use crate::roster::CharacterStats;
use serde::Serialize;

/// Outcome of applying damage to a health value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DamageResult {
    /// Health left after the blow (may be zero or negative)
    pub remaining_health: Health,
    /// True once health has reached zero or below
    pub defeated: bool,
}

/// Apply a blow to a health value
pub fn apply_damage(health: Health, damage: Damage) -> DamageResult {
    let remaining_health = health.saturating_sub(damage);
    DamageResult {
        remaining_health,
        defeated: remaining_health <= 0,
    }
}

/// A blow about to be thrown: what it deals, and the attack value afterwards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Strike {
    pub damage: Damage,
    pub next_attack: Damage,
}

/// A selectable fighter with its mutable match state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    stats: CharacterStats,
    health: Health,
    attack: Damage,
}

impl Character {
    /// Fresh instance at full health and base attack
    pub fn new(stats: CharacterStats) -> Self {
        let health = stats.starting_health;
        let attack = stats.base_attack;
        Self {
            stats,
            health,
            attack,
        }
    }

    pub fn id(&self) -> &CharacterId {
        &self.stats.id
    }

    pub fn name(&self) -> &str {
        self.stats.id.as_str()
    }

    pub fn image(&self) -> &str {
        &self.stats.image
    }

    pub fn stats(&self) -> &CharacterStats {
        &self.stats
    }

    pub fn starting_health(&self) -> Health {
        self.stats.starting_health
    }

    pub fn health(&self) -> Health {
        self.health
    }

    pub fn base_attack(&self) -> Damage {
        self.stats.base_attack
    }

    pub fn current_attack(&self) -> Damage {
        self.attack
    }

    pub fn counter_attack(&self) -> Damage {
        self.stats.counter_attack
    }

    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }

    /// The blow this character would land next, without throwing it
    pub fn strike(&self) -> Strike {
        Strike {
            damage: self.attack,
            next_attack: self.attack.saturating_add(self.stats.base_attack),
        }
    }

    /// What a blow of `damage` would leave this character with
    pub fn assess(&self, damage: Damage) -> DamageResult {
        apply_damage(self.health, damage)
    }

    // Only exchange commits write these two fields.
    pub(crate) fn set_health(&mut self, health: Health) {
        self.health = health;
    }

    pub(crate) fn set_attack(&mut self, attack: Damage) {
        debug_assert!(attack >= self.attack, "attack never decreases within a match");
        self.attack = attack;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obi_wan() -> Character {
        Character::new(CharacterStats::new("Obi-Wan Kenobi", "obiwan.jpg", 125, 12, 23))
    }

    #[test]
    fn test_fresh_character() {
        let c = obi_wan();
        assert_eq!(c.health(), 125);
        assert_eq!(c.current_attack(), 12);
        assert_eq!(c.counter_attack(), 23);
        assert!(!c.is_defeated());
    }

    #[test]
    fn test_strike_escalates_by_base_attack() {
        let mut c = obi_wan();
        let first = c.strike();
        assert_eq!(first.damage, 12);
        assert_eq!(first.next_attack, 24);

        c.set_attack(first.next_attack);
        let second = c.strike();
        assert_eq!(second.damage, 24);
        assert_eq!(second.next_attack, 36);
    }

    #[test]
    fn test_strike_does_not_mutate() {
        let c = obi_wan();
        let _ = c.strike();
        assert_eq!(c.current_attack(), 12);
    }

    #[test]
    fn test_apply_damage_survives() {
        let result = apply_damage(145, 12);
        assert_eq!(result.remaining_health, 133);
        assert!(!result.defeated);
    }

    #[test]
    fn test_apply_damage_exactly_zero_is_defeat() {
        let result = apply_damage(20, 20);
        assert_eq!(result.remaining_health, 0);
        assert!(result.defeated);
    }

    #[test]
    fn test_apply_damage_overkill_goes_negative() {
        let result = apply_damage(5, 23);
        assert_eq!(result.remaining_health, -18);
        assert!(result.defeated);
    }
}
