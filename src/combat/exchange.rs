//! Combat exchange resolution
//!
//! One exchange is one press of the fight button: the player strikes, then the
//! opponent counters only if it is still standing. Resolution is pure; the
//! resulting report is committed to the two fighters afterwards.

use crate::combat::character::{Character, DamageResult};
use crate::core::types::{CharacterId, Damage, Health};
use serde::Serialize;

/// How an exchange ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExchangeOutcome {
    /// The player's blow dropped the opponent; no counter was thrown
    OpponentDefeated,
    /// Both survived: the opponent took the blow and countered
    BothStanding,
    /// The opponent survived and its counter dropped the player
    PlayerDefeated,
}

/// Result of an exchange
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExchangeReport {
    pub player: CharacterId,
    pub opponent: CharacterId,
    /// Damage the player dealt
    pub player_damage: Damage,
    /// Player attack value after escalation
    pub player_attack_after: Damage,
    /// Opponent state after the player's blow
    pub opponent_hit: DamageResult,
    /// Counter damage, present only when the opponent survived
    pub counter_damage: Option<Damage>,
    /// Player state after the counter, present only when a counter was thrown
    pub player_hit: Option<DamageResult>,
    pub outcome: ExchangeOutcome,
}

impl ExchangeReport {
    /// Player health after this exchange, given health before it
    pub fn player_health_after(&self, before: Health) -> Health {
        self.player_hit
            .map(|hit| hit.remaining_health)
            .unwrap_or(before)
    }

    /// Write the report into the two fighters
    pub(crate) fn commit(&self, player: &mut Character, opponent: &mut Character) {
        player.set_attack(self.player_attack_after);
        opponent.set_health(self.opponent_hit.remaining_health);
        if let Some(hit) = self.player_hit {
            player.set_health(hit.remaining_health);
        }
    }
}

/// Resolve an exchange between the player and the active opponent
///
/// # Arguments
/// * `player` - The fighter pressing the attack
/// * `opponent` - The fighter receiving it, countering if it survives
///
/// # Returns
/// The exchange report; neither fighter is modified
pub fn resolve_exchange(player: &Character, opponent: &Character) -> ExchangeReport {
    // Step 1: player strikes and escalates
    let strike = player.strike();
    let opponent_hit = opponent.assess(strike.damage);

    if opponent_hit.defeated {
        return ExchangeReport {
            player: player.id().clone(),
            opponent: opponent.id().clone(),
            player_damage: strike.damage,
            player_attack_after: strike.next_attack,
            opponent_hit,
            counter_damage: None,
            player_hit: None,
            outcome: ExchangeOutcome::OpponentDefeated,
        };
    }

    // Step 2: surviving opponent counters
    let counter = opponent.counter_attack();
    let player_hit = player.assess(counter);

    let outcome = if player_hit.defeated {
        ExchangeOutcome::PlayerDefeated
    } else {
        ExchangeOutcome::BothStanding
    };

    ExchangeReport {
        player: player.id().clone(),
        opponent: opponent.id().clone(),
        player_damage: strike.damage,
        player_attack_after: strike.next_attack,
        opponent_hit,
        counter_damage: Some(counter),
        player_hit: Some(player_hit),
        outcome,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::CharacterStats;

    fn fighter(name: &str, hp: Health, atk: Damage, ctr: Damage) -> Character {
        Character::new(CharacterStats::new(name, "", hp, atk, ctr))
    }

    #[test]
    fn test_both_standing_exchange() {
        let player = fighter("Obi-Wan Kenobi", 125, 12, 23);
        let opponent = fighter("Luke Skywalker", 145, 11, 21);

        let report = resolve_exchange(&player, &opponent);
        assert_eq!(report.outcome, ExchangeOutcome::BothStanding);
        assert_eq!(report.player_damage, 12);
        assert_eq!(report.player_attack_after, 24);
        assert_eq!(report.opponent_hit.remaining_health, 133);
        assert_eq!(report.counter_damage, Some(21));
        assert_eq!(report.player_health_after(player.health()), 104);
    }

    #[test]
    fn test_defeated_opponent_does_not_counter() {
        let player = fighter("A", 10, 50, 1);
        let opponent = fighter("B", 40, 1, 100);

        let report = resolve_exchange(&player, &opponent);
        assert_eq!(report.outcome, ExchangeOutcome::OpponentDefeated);
        assert_eq!(report.counter_damage, None);
        assert_eq!(report.player_hit, None);
        assert_eq!(report.player_health_after(10), 10);
    }

    #[test]
    fn test_counter_defeats_player() {
        let player = fighter("A", 20, 1, 1);
        let opponent = fighter("B", 100, 1, 20);

        let report = resolve_exchange(&player, &opponent);
        assert_eq!(report.outcome, ExchangeOutcome::PlayerDefeated);
        assert_eq!(report.player_health_after(20), 0);
    }

    #[test]
    fn test_commit_applies_report() {
        let mut player = fighter("Obi-Wan Kenobi", 125, 12, 23);
        let mut opponent = fighter("Luke Skywalker", 145, 11, 21);

        let report = resolve_exchange(&player, &opponent);
        report.commit(&mut player, &mut opponent);

        assert_eq!(player.health(), 104);
        assert_eq!(player.current_attack(), 24);
        assert_eq!(opponent.health(), 133);
        // Opponent attack is never escalated by being hit
        assert_eq!(opponent.current_attack(), 11);
    }

    #[test]
    fn test_resolution_is_pure() {
        let player = fighter("A", 30, 5, 5);
        let opponent = fighter("B", 30, 5, 5);
        let first = resolve_exchange(&player, &opponent);
        let second = resolve_exchange(&player, &opponent);
        assert_eq!(first, second);
        assert_eq!(player.health(), 30);
    }
}
