//! Text command parsing for the terminal front end

use crate::core::types::CharacterId;
use crate::game::{GameEvent, MatchController};

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Forward to the match controller
    Event(GameEvent),
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  pick <n|name> / p   - Pick a fighter by list number or name
  fight / f           - Attack the current opponent
  replay / r          - Start over after a win or loss
  help / h            - Show this help
  quit / q            - Exit the game";

/// Parse one line of input
///
/// Numbers index the fighters currently on offer. Names are matched against
/// the whole roster, case-insensitively, so naming a fighter that was already
/// taken still produces an event; the controller decides whether it applies.
pub fn parse_command(line: &str, controller: &MatchController) -> Result<Command, String> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb.to_ascii_lowercase().as_str() {
        "fight" | "f" => Ok(Command::Event(GameEvent::Fight)),
        "replay" | "r" => Ok(Command::Event(GameEvent::Replay)),
        "help" | "h" | "?" => Ok(Command::Help),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        "pick" | "p" => {
            if rest.is_empty() {
                return Err("Usage: pick <number|name>".into());
            }
            resolve_pick(rest, controller).map(|id| Command::Event(GameEvent::SelectCharacter(id)))
        }
        "" => Err("Type a command (help for a list)".into()),
        _ => Err(format!("Unknown command: {verb}")),
    }
}

fn resolve_pick(target: &str, controller: &MatchController) -> Result<CharacterId, String> {
    if let Ok(number) = target.parse::<usize>() {
        let on_offer = controller.pool().ids();
        return number
            .checked_sub(1)
            .and_then(|index| on_offer.get(index).cloned())
            .ok_or_else(|| format!("No fighter numbered {number}"));
    }

    let found = controller
        .roster()
        .list_character_ids()
        .into_iter()
        .find(|id| id.as_str().eq_ignore_ascii_case(target));

    Ok(found.unwrap_or_else(|| CharacterId::from(target)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fight_and_replay_aliases() {
        let controller = MatchController::default();
        assert_eq!(
            parse_command("f", &controller),
            Ok(Command::Event(GameEvent::Fight))
        );
        assert_eq!(
            parse_command("  REPLAY ", &controller),
            Ok(Command::Event(GameEvent::Replay))
        );
        assert_eq!(parse_command("q", &controller), Ok(Command::Quit));
    }

    #[test]
    fn test_pick_by_number_uses_pool_order() {
        let controller = MatchController::default();
        assert_eq!(
            parse_command("pick 3", &controller),
            Ok(Command::Event(GameEvent::SelectCharacter(CharacterId::from(
                "Darth Vader"
            ))))
        );
    }

    #[test]
    fn test_pick_by_name_is_case_insensitive() {
        let controller = MatchController::default();
        assert_eq!(
            parse_command("p darth maul", &controller),
            Ok(Command::Event(GameEvent::SelectCharacter(CharacterId::from(
                "Darth Maul"
            ))))
        );
    }

    #[test]
    fn test_pick_out_of_range() {
        let controller = MatchController::default();
        assert!(parse_command("pick 0", &controller).is_err());
        assert!(parse_command("pick 9", &controller).is_err());
        assert!(parse_command("pick", &controller).is_err());
    }

    #[test]
    fn test_unknown_verb() {
        let controller = MatchController::default();
        assert!(parse_command("dance", &controller).is_err());
    }
}
