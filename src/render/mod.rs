//! Render boundary
//!
//! Renderers receive frozen snapshots of the match and never touch live
//! characters. This module is READ-ONLY with respect to match state.

use crate::combat::{Character, ExchangeReport};
use crate::core::error::Result;
use crate::core::types::{CharacterId, Damage, Health};
use crate::game::MatchState;
use serde::Serialize;

/// Read-only view of a fighter for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterSummary {
    pub id: CharacterId,
    pub image: String,
    pub health: Health,
    pub starting_health: Health,
    pub attack: Damage,
}

impl CharacterSummary {
    pub fn name(&self) -> &str {
        self.id.as_str()
    }
}

impl From<&Character> for CharacterSummary {
    fn from(character: &Character) -> Self {
        Self {
            id: character.id().clone(),
            image: character.image().to_string(),
            health: character.health(),
            starting_health: character.starting_health(),
            attack: character.current_attack(),
        }
    }
}

/// Snapshot handed to a renderer along with the state.
/// Only the fields relevant to the state are filled.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RenderContext {
    pub headline: &'static str,
    /// Fighters still in the pool, in roster order
    pub pickable: Vec<CharacterSummary>,
    pub player: Option<CharacterSummary>,
    pub opponent: Option<CharacterSummary>,
    /// Most recent exchange of the match, if any
    pub last_exchange: Option<ExchangeReport>,
    /// Exchanges resolved since the last replay
    pub exchanges: u32,
}

/// Presentation layer seam
pub trait Renderer {
    /// Wipe the previous screen
    fn clear(&mut self) -> Result<()>;

    /// Draw a state from its snapshot
    fn render(&mut self, state: MatchState, context: &RenderContext) -> Result<()>;
}

/// Renderer that keeps every frame it is given; useful for headless runs
#[derive(Debug, Default)]
pub struct FrameRecorder {
    pub frames: Vec<(MatchState, RenderContext)>,
    pub clears: usize,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&(MatchState, RenderContext)> {
        self.frames.last()
    }
}

impl Renderer for FrameRecorder {
    fn clear(&mut self) -> Result<()> {
        self.clears += 1;
        Ok(())
    }

    fn render(&mut self, state: MatchState, context: &RenderContext) -> Result<()> {
        self.frames.push((state, context.clone()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Roster;

    #[test]
    fn test_summary_from_character() {
        let roster = Roster::builtin();
        let vader = roster.create(&CharacterId::from("Darth Vader")).unwrap();
        let summary = CharacterSummary::from(&vader);

        assert_eq!(summary.name(), "Darth Vader");
        assert_eq!(summary.image, "Assets/Images/darthvader.jpg");
        assert_eq!(summary.health, 150);
        assert_eq!(summary.starting_health, 150);
        assert_eq!(summary.attack, 10);
    }

    #[test]
    fn test_recorder_keeps_frames() {
        let mut recorder = FrameRecorder::new();
        recorder.clear().unwrap();
        recorder
            .render(MatchState::Won, &RenderContext::default())
            .unwrap();
        assert_eq!(recorder.clears, 1);
        assert_eq!(recorder.last().map(|f| f.0), Some(MatchState::Won));
    }
}
