pub mod api;
pub mod cache;
pub mod models;
pub mod processors;

pub use api::NbaClient;
pub use models::{Game, Player, Team};
pub use processors::{parse_game, parse_player, parse_team};
