//! Match controller
//!
//! Owns the state machine, the opponent pool and both fighters. Every event
//! is re-checked against the current state before anything changes: the
//! input layer may be reacting to a stale screen, so events that do not fit
//! are dropped without a redraw.

use crate::combat::{resolve_exchange, Character, ExchangeOutcome, ExchangeReport};
use crate::core::error::Result;
use crate::core::types::CharacterId;
use crate::game::pool::OpponentPool;
use crate::game::state::{GameEvent, MatchState};
use crate::render::{CharacterSummary, RenderContext, Renderer};
use crate::roster::Roster;

/// One playthrough's worth of state, reused across replays
#[derive(Debug, Clone)]
pub struct MatchController {
    roster: Roster,
    state: MatchState,
    pool: OpponentPool,
    player: Option<Character>,
    opponent: Option<Character>,
    last_exchange: Option<ExchangeReport>,
    /// Exchanges resolved since the last replay
    exchanges: u32,
}

impl MatchController {
    /// Start at player selection with every roster fighter in the pool
    pub fn new(roster: Roster) -> Self {
        let pool = OpponentPool::new(roster.populate());
        Self {
            roster,
            state: MatchState::SelectingPlayer,
            pool,
            player: None,
            opponent: None,
            last_exchange: None,
            exchanges: 0,
        }
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn pool(&self) -> &OpponentPool {
        &self.pool
    }

    pub fn player(&self) -> Option<&Character> {
        self.player.as_ref()
    }

    pub fn opponent(&self) -> Option<&Character> {
        self.opponent.as_ref()
    }

    pub fn last_exchange(&self) -> Option<&ExchangeReport> {
        self.last_exchange.as_ref()
    }

    pub fn exchanges(&self) -> u32 {
        self.exchanges
    }

    /// Apply one event. Returns false when the event did not fit the state.
    pub fn handle(&mut self, event: &GameEvent) -> bool {
        let from = self.state;
        let accepted = match event {
            GameEvent::SelectCharacter(id) => self.select_character(id),
            GameEvent::Fight => self.fight(),
            GameEvent::Replay => self.replay(),
        };

        if accepted {
            tracing::debug!(?event, %from, to = %self.state, "transition");
        } else {
            tracing::trace!(?event, state = %from, "ignored event");
        }
        accepted
    }

    /// Apply one event and redraw if it was accepted
    pub fn dispatch<R: Renderer + ?Sized>(
        &mut self,
        event: &GameEvent,
        renderer: &mut R,
    ) -> Result<bool> {
        let accepted = self.handle(event);
        if accepted {
            self.render(renderer)?;
        }
        Ok(accepted)
    }

    /// Clear and draw the current state
    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) -> Result<()> {
        renderer.clear()?;
        renderer.render(self.state, &self.render_context())
    }

    /// Snapshot of what the current state shows
    pub fn render_context(&self) -> RenderContext {
        let pickable = || -> Vec<CharacterSummary> {
            self.pool.iter().map(CharacterSummary::from).collect()
        };
        let player = self.player.as_ref().map(CharacterSummary::from);
        let opponent = self.opponent.as_ref().map(CharacterSummary::from);

        let mut context = RenderContext {
            headline: self.state.headline(),
            exchanges: self.exchanges,
            ..RenderContext::default()
        };

        match self.state {
            MatchState::SelectingPlayer => {
                context.pickable = pickable();
            }
            MatchState::SelectingOpponent => {
                context.pickable = pickable();
                context.player = player;
                context.last_exchange = self.last_exchange.clone();
            }
            MatchState::Fighting => {
                context.pickable = pickable();
                context.player = player;
                context.opponent = opponent;
                context.last_exchange = self.last_exchange.clone();
            }
            MatchState::Won | MatchState::Lost => {
                context.player = player;
                context.opponent = opponent;
                context.last_exchange = self.last_exchange.clone();
            }
        }

        context
    }

    /// Pick a fighter from the pool as player or opponent
    pub fn select_character(&mut self, id: &CharacterId) -> bool {
        let next = match self.state {
            MatchState::SelectingPlayer => MatchState::SelectingOpponent,
            MatchState::SelectingOpponent => MatchState::Fighting,
            _ => return false,
        };

        let Some(picked) = self.pool.take(id) else {
            return false;
        };

        if self.state == MatchState::SelectingPlayer {
            self.player = Some(picked);
        } else {
            self.opponent = Some(picked);
        }
        self.state = next;
        true
    }

    /// Resolve one exchange against the active opponent
    pub fn fight(&mut self) -> bool {
        if self.state != MatchState::Fighting {
            return false;
        }
        let (Some(player), Some(opponent)) = (self.player.as_mut(), self.opponent.as_mut()) else {
            return false;
        };

        let report = resolve_exchange(player, opponent);
        report.commit(player, opponent);
        self.exchanges += 1;

        self.state = match report.outcome {
            ExchangeOutcome::OpponentDefeated => {
                if let Some(fallen) = self.opponent.take() {
                    tracing::debug!("{} defeated, {} left", fallen.name(), self.pool.len());
                }
                if self.pool.is_empty() {
                    MatchState::Won
                } else {
                    MatchState::SelectingOpponent
                }
            }
            ExchangeOutcome::BothStanding => MatchState::Fighting,
            ExchangeOutcome::PlayerDefeated => MatchState::Lost,
        };
        self.last_exchange = Some(report);

        if self.state.is_terminal() {
            tracing::info!(
                outcome = %self.state,
                exchanges = self.exchanges,
                player = self.player.as_ref().map(|p| p.name()).unwrap_or_default(),
                "match over"
            );
        }
        true
    }

    /// Start over from a finished match with fresh fighters
    pub fn replay(&mut self) -> bool {
        if !self.state.is_terminal() {
            return false;
        }

        self.pool = OpponentPool::new(self.roster.populate());
        self.player = None;
        self.opponent = None;
        self.last_exchange = None;
        self.exchanges = 0;
        self.state = MatchState::SelectingPlayer;
        tracing::info!("replay: {} fighters back in the pool", self.pool.len());
        true
    }
}

impl Default for MatchController {
    fn default() -> Self {
        Self::new(Roster::builtin())
    }
}
