pub mod game;
pub mod players;
pub mod team;

pub use game::Game;
pub use players::Player;
pub use team::Team;
