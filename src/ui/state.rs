//! Exchange log kept by the terminal front end

use crate::combat::{ExchangeOutcome, ExchangeReport};
use std::collections::VecDeque;

/// An entry in the exchange log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Exchange number within the match, starting at 1
    pub exchange: u32,
    pub message: String,
}

/// Bounded log of exchange lines; oldest entries are evicted first
#[derive(Debug, Clone)]
pub struct CombatLog {
    entries: VecDeque<LogEntry>,
    capacity: usize,
    /// Highest exchange number already recorded
    last_recorded: u32,
}

impl CombatLog {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            last_recorded: 0,
        }
    }

    /// Record an exchange unless it was already logged
    pub fn record(&mut self, exchange: u32, report: &ExchangeReport) -> bool {
        if exchange <= self.last_recorded {
            return false;
        }
        self.last_recorded = exchange;

        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry {
            exchange,
            message: describe(report),
        });
        true
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.last_recorded = 0;
    }

    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One line describing an exchange
pub fn describe(report: &ExchangeReport) -> String {
    let blow = format!(
        "{} hits {} for {}",
        report.player, report.opponent, report.player_damage
    );
    match (report.outcome, report.counter_damage) {
        (ExchangeOutcome::OpponentDefeated, _) => format!("{blow}. {} falls!", report.opponent),
        (ExchangeOutcome::PlayerDefeated, Some(counter)) => format!(
            "{blow}; {} counters for {counter}. {} falls!",
            report.opponent, report.player
        ),
        (_, Some(counter)) => format!("{blow}; {} counters for {counter}.", report.opponent),
        (_, None) => format!("{blow}."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::{resolve_exchange, Character};
    use crate::roster::CharacterStats;

    fn report() -> ExchangeReport {
        let player = Character::new(CharacterStats::new("Obi-Wan Kenobi", "", 125, 12, 23));
        let opponent = Character::new(CharacterStats::new("Luke Skywalker", "", 145, 11, 21));
        resolve_exchange(&player, &opponent)
    }

    #[test]
    fn test_describe_counter() {
        assert_eq!(
            describe(&report()),
            "Obi-Wan Kenobi hits Luke Skywalker for 12; Luke Skywalker counters for 21."
        );
    }

    #[test]
    fn test_duplicate_exchange_not_recorded() {
        let mut log = CombatLog::new(4);
        assert!(log.record(1, &report()));
        assert!(!log.record(1, &report()));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut log = CombatLog::new(2);
        for n in 1..=3 {
            log.record(n, &report());
        }
        let numbers: Vec<u32> = log.entries().map(|e| e.exchange).collect();
        assert_eq!(numbers, [2, 3]);
    }

    #[test]
    fn test_clear_resets_numbering() {
        let mut log = CombatLog::new(2);
        log.record(5, &report());
        log.clear();
        assert!(log.is_empty());
        assert!(log.record(1, &report()));
    }
}
