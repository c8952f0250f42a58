//! Match flow: states, the opponent pool and the controller driving them

pub mod controller;
pub mod pool;
pub mod state;

pub use controller::MatchController;
pub use pool::OpponentPool;
pub use state::{GameEvent, MatchState};
