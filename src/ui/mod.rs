//! Terminal front end: text renderer, command parsing and exchange log

pub mod input;
pub mod state;
pub mod terminal;

pub use input::{parse_command, Command, HELP};
pub use state::{CombatLog, LogEntry};
pub use terminal::TerminalRenderer;
