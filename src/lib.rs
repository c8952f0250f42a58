//! Jedi Arena - turn-taking duel game
//!
//! Pick a fighter, pick opponents one at a time from the remaining pool, and
//! trade escalating blows against counter-attacks until every opponent has
//! fallen or you have.

pub mod combat;
pub mod core;
pub mod game;
pub mod render;
pub mod roster;
pub mod ui;
