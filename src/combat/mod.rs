pub mod character;
pub mod exchange;

pub use character::{apply_damage, Character, DamageResult, Strike};
pub use exchange::{resolve_exchange, ExchangeOutcome, ExchangeReport};
