pub mod fields;
pub mod records;

// Re-export the record parsers
pub use records::{parse_game, parse_game_with_today, parse_player, parse_team};
