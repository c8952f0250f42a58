//! Plain-text renderer for the terminal front end

use crate::core::error::Result;
use crate::game::MatchState;
use crate::render::{CharacterSummary, RenderContext, Renderer};
use crate::ui::state::CombatLog;
use std::io::Write;

/// Writes each screen as a block of text
pub struct TerminalRenderer<W: Write> {
    out: W,
    log: CombatLog,
    show_log: bool,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, show_log: bool, max_log_entries: usize) -> Self {
        Self {
            out,
            log: CombatLog::new(max_log_entries),
            show_log,
        }
    }

    pub fn log(&self) -> &CombatLog {
        &self.log
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_fighter(&mut self, label: &str, fighter: &CharacterSummary) -> Result<()> {
        writeln!(
            self.out,
            "{label:<7}{}  HP {}/{}  ATK {}",
            fighter.name(),
            fighter.health,
            fighter.starting_health,
            fighter.attack
        )?;
        Ok(())
    }

    fn write_pickable(&mut self, fighters: &[CharacterSummary]) -> Result<()> {
        for (index, fighter) in fighters.iter().enumerate() {
            writeln!(
                self.out,
                "  [{}] {}  HP {}  ({})",
                index + 1,
                fighter.name(),
                fighter.health,
                fighter.image
            )?;
        }
        Ok(())
    }

    fn write_log(&mut self) -> Result<()> {
        if !self.show_log || self.log.is_empty() {
            return Ok(());
        }
        writeln!(self.out)?;
        let lines: Vec<String> = self
            .log
            .entries()
            .map(|entry| format!("  #{:<3} {}", entry.exchange, entry.message))
            .collect();
        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn clear(&mut self) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", "-".repeat(48))?;
        Ok(())
    }

    fn render(&mut self, state: MatchState, context: &RenderContext) -> Result<()> {
        if context.exchanges == 0 {
            self.log.clear();
        } else if let Some(report) = &context.last_exchange {
            self.log.record(context.exchanges, report);
        }

        writeln!(self.out, "== {} ==", context.headline)?;

        if let Some(player) = &context.player {
            self.write_fighter("You:", player)?;
        }
        if let Some(opponent) = &context.opponent {
            self.write_fighter("Enemy:", opponent)?;
        }

        match state {
            MatchState::SelectingPlayer | MatchState::SelectingOpponent => {
                writeln!(self.out)?;
                self.write_pickable(&context.pickable)?;
                self.write_log()?;
                writeln!(self.out, "\npick <n|name>")?;
            }
            MatchState::Fighting => {
                writeln!(self.out, "\nEnemies remaining: {}", context.pickable.len())?;
                self.write_pickable(&context.pickable)?;
                self.write_log()?;
                writeln!(self.out, "\nfight | f")?;
            }
            MatchState::Won | MatchState::Lost => {
                self.write_log()?;
                writeln!(self.out, "\nreplay | r")?;
            }
        }

        self.out.flush()?;
        Ok(())
    }
}
