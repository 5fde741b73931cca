pub mod board;
pub mod game_state;
pub mod settings;

pub use board::Board;
pub use game_state::{Game, GamePhase};
pub use settings::Settings;
