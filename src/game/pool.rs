//! Opponent pool
//!
//! Fighters not yet chosen as player or opponent. Kept in roster declaration
//! order so selection screens list them the same way every time.

use crate::combat::Character;
use crate::core::types::CharacterId;

#[derive(Debug, Clone, Default)]
pub struct OpponentPool {
    fighters: Vec<Character>,
}

impl OpponentPool {
    pub fn new(fighters: Vec<Character>) -> Self {
        Self { fighters }
    }

    pub fn contains(&self, id: &CharacterId) -> bool {
        self.fighters.iter().any(|c| c.id() == id)
    }

    /// Remove and return a fighter; `None` if it was never here or already taken
    pub fn take(&mut self, id: &CharacterId) -> Option<Character> {
        let index = self.fighters.iter().position(|c| c.id() == id)?;
        Some(self.fighters.remove(index))
    }

    pub fn len(&self) -> usize {
        self.fighters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fighters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Character> {
        self.fighters.iter()
    }

    pub fn ids(&self) -> Vec<CharacterId> {
        self.fighters.iter().map(|c| c.id().clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Roster;

    #[test]
    fn test_take_shrinks_by_one() {
        let roster = Roster::builtin();
        let mut pool = OpponentPool::new(roster.populate());
        let vader = CharacterId::from("Darth Vader");

        let taken = pool.take(&vader).unwrap();
        assert_eq!(taken.name(), "Darth Vader");
        assert_eq!(pool.len(), 3);
        assert!(!pool.contains(&vader));
    }

    #[test]
    fn test_take_twice_fails() {
        let roster = Roster::builtin();
        let mut pool = OpponentPool::new(roster.populate());
        let luke = CharacterId::from("Luke Skywalker");

        assert!(pool.take(&luke).is_some());
        assert!(pool.take(&luke).is_none());
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn test_order_preserved_after_take() {
        let roster = Roster::builtin();
        let mut pool = OpponentPool::new(roster.populate());
        pool.take(&CharacterId::from("Luke Skywalker"));

        let names: Vec<String> = pool.ids().into_iter().map(|id| id.0).collect();
        assert_eq!(names, ["Obi-Wan Kenobi", "Darth Vader", "Darth Maul"]);
    }
}
